//! Step-by-step statevector simulator for QStep circuits.
//!
//! Circuits are applied one gate at a time to a dense statevector, and every
//! intermediate state is kept so a run can be replayed and inspected.
//!
//! # Example
//!
//! ```rust
//! use qstep_ir::Circuit;
//! use qstep_sim::{Executor, NoopObserver, SimConfig};
//!
//! let circuit = Circuit::bell().unwrap();
//! let executor = Executor::new(SimConfig::immediate());
//! let result = executor.run_blocking(&circuit, NoopObserver).unwrap();
//!
//! assert_eq!(result.intermediate_states.len(), 2);
//! assert_eq!(result.final_state.to_string().lines().count(), 2);
//! ```
//!
//! # Components
//!
//! | Module | Role |
//! |--------|------|
//! | [`kernels`] | Pure per-gate amplitude transforms |
//! | [`executor`] | Async and blocking drivers with cancellation |
//! | [`trace`] | Cursor over the states of a finished run |
//! | [`session`] | Loaded circuit plus its last trace |
//! | [`format`] | Human-readable state rendering |

pub mod config;
pub mod error;
pub mod executor;
pub mod format;
pub mod kernels;
pub mod session;
pub mod state;
pub mod trace;

pub use config::SimConfig;
pub use error::{SimError, SimResult};
pub use executor::{CancelHandle, Executor, NoopObserver, QuantumExecutionResult, StepObserver};
pub use format::format_state;
pub use kernels::apply_gate;
pub use session::ExecutionSession;
pub use state::QuantumState;
pub use trace::ExecutionTrace;
