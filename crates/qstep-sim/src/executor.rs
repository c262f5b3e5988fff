//! Stepwise circuit execution.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;
use tracing::{Span, debug, info, instrument};
use uuid::Uuid;

use qstep_ir::Circuit;

use crate::config::{HARD_QUBIT_LIMIT, SimConfig};
use crate::error::{SimError, SimResult};
use crate::kernels::apply_gate;
use crate::state::QuantumState;

/// Receives every intermediate state as it is produced.
///
/// Implemented for any `FnMut(&QuantumState, usize)`; the second argument is
/// the zero-based index of the gate that produced the state.
pub trait StepObserver {
    fn on_step(&mut self, state: &QuantumState, step: usize);
}

impl<F> StepObserver for F
where
    F: FnMut(&QuantumState, usize),
{
    fn on_step(&mut self, state: &QuantumState, step: usize) {
        self(state, step);
    }
}

/// Observer that ignores every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl StepObserver for NoopObserver {
    fn on_step(&mut self, _state: &QuantumState, _step: usize) {}
}

/// Shared flag that stops an in-flight run before its next gate.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Clear a previous request so the executor can run again.
    pub fn reset(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumExecutionResult {
    /// Identifier attached to this run's log events.
    pub run_id: Uuid,
    /// |0...0⟩ for the circuit width.
    pub initial_state: QuantumState,
    /// State after the last gate, or the initial state for an empty circuit.
    pub final_state: QuantumState,
    /// One state per gate, in gate order.
    pub intermediate_states: Vec<QuantumState>,
    /// Wall-clock time of the run, in milliseconds.
    pub execution_time_ms: f64,
}

impl QuantumExecutionResult {
    /// Number of gates applied.
    pub fn num_steps(&self) -> usize {
        self.intermediate_states.len()
    }

    /// State after `step` gates; step 0 is the initial state.
    pub fn state_at(&self, step: usize) -> Option<&QuantumState> {
        match step {
            0 => Some(&self.initial_state),
            n => self.intermediate_states.get(n - 1),
        }
    }
}

/// Runs circuits gate by gate.
///
/// The async [`run`](Executor::run) pauses for [`SimConfig::step_delay`]
/// between gates so a live display can keep up; [`run_blocking`](Executor::run_blocking)
/// applies the same gates without pausing. Both produce identical states.
///
/// Cloning keeps the settings but gives the clone its own [`CancelHandle`].
#[derive(Debug)]
pub struct Executor {
    config: SimConfig,
    cancel: CancelHandle,
}

impl Executor {
    /// Create an executor with the given settings.
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            cancel: CancelHandle::default(),
        }
    }

    /// Settings in use.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Handle for cancelling runs of this executor.
    ///
    /// A cancellation stays in effect until [`CancelHandle::reset`] is called.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Run a circuit, yielding between gates.
    #[instrument(
        skip_all,
        fields(circuit = %circuit.name(), num_qubits = circuit.num_qubits(), run_id)
    )]
    pub async fn run<O: StepObserver>(
        &self,
        circuit: &Circuit,
        mut observer: O,
    ) -> SimResult<QuantumExecutionResult> {
        let mut run = self.prepare(circuit)?;
        let delay = self.config.step_delay();

        for step in 0..circuit.num_gates() {
            if step > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            self.advance(&mut run, step, &mut observer)?;
        }

        Ok(run.finish())
    }

    /// Run a circuit to completion without pausing.
    #[instrument(
        skip_all,
        fields(circuit = %circuit.name(), num_qubits = circuit.num_qubits(), run_id)
    )]
    pub fn run_blocking<O: StepObserver>(
        &self,
        circuit: &Circuit,
        mut observer: O,
    ) -> SimResult<QuantumExecutionResult> {
        let mut run = self.prepare(circuit)?;
        for step in 0..circuit.num_gates() {
            self.advance(&mut run, step, &mut observer)?;
        }
        Ok(run.finish())
    }

    fn prepare<'c>(&self, circuit: &'c Circuit) -> SimResult<Run<'c>> {
        circuit.validate()?;
        let max = self.config.max_qubits.min(HARD_QUBIT_LIMIT);
        if circuit.num_qubits() > max {
            return Err(SimError::TooManyQubits {
                requested: circuit.num_qubits(),
                max,
            });
        }

        let run_id = Uuid::new_v4();
        Span::current().record("run_id", tracing::field::display(run_id));
        debug!(num_gates = circuit.num_gates(), "Starting execution");

        let initial_state = QuantumState::try_zero(circuit.num_qubits() as usize)?;
        Ok(Run {
            circuit,
            run_id,
            current: initial_state.clone(),
            initial_state,
            intermediate_states: Vec::with_capacity(circuit.num_gates()),
            start: Instant::now(),
        })
    }

    fn advance<O: StepObserver>(
        &self,
        run: &mut Run<'_>,
        step: usize,
        observer: &mut O,
    ) -> SimResult<()> {
        if self.cancel.is_cancelled() {
            info!(completed_steps = step, "Execution cancelled");
            return Err(SimError::Cancelled {
                completed_steps: step,
            });
        }

        let gate = &run.circuit.gates()[step];
        let next = apply_gate(&run.current, gate)?;
        debug!(step, gate = %gate, "Applied gate");

        observer.on_step(&next, step);
        run.intermediate_states.push(next.clone());
        run.current = next;
        Ok(())
    }
}

impl Clone for Executor {
    fn clone(&self) -> Self {
        Self::new(self.config.clone())
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

/// In-progress run bookkeeping.
struct Run<'c> {
    circuit: &'c Circuit,
    run_id: Uuid,
    initial_state: QuantumState,
    current: QuantumState,
    intermediate_states: Vec<QuantumState>,
    start: Instant,
}

impl Run<'_> {
    fn finish(self) -> QuantumExecutionResult {
        let execution_time_ms = self.start.elapsed().as_secs_f64() * 1000.0;
        info!(
            steps = self.intermediate_states.len(),
            execution_time_ms, "Execution completed"
        );
        QuantumExecutionResult {
            run_id: self.run_id,
            initial_state: self.initial_state,
            final_state: self.current,
            intermediate_states: self.intermediate_states,
            execution_time_ms,
        }
    }
}
