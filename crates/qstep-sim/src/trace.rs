//! Step-through navigation over a finished run.

use qstep_ir::{Circuit, Gate};

use crate::error::{SimError, SimResult};
use crate::executor::QuantumExecutionResult;
use crate::state::QuantumState;

/// A cursor over the states of one run.
///
/// Step 0 is the initial state; step `k` is the state after the `k`-th gate.
#[derive(Debug, Clone)]
pub struct ExecutionTrace {
    circuit: Circuit,
    result: QuantumExecutionResult,
    current_step: usize,
}

impl ExecutionTrace {
    /// Pair a circuit with the result of running it. The cursor starts at
    /// step 0.
    pub fn new(circuit: Circuit, result: QuantumExecutionResult) -> SimResult<Self> {
        if result.num_steps() != circuit.num_gates() {
            return Err(SimError::TraceMismatch {
                states: result.num_steps(),
                gates: circuit.num_gates(),
            });
        }
        Ok(Self {
            circuit,
            result,
            current_step: 0,
        })
    }

    /// The circuit that was run.
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// The full run result.
    pub fn result(&self) -> &QuantumExecutionResult {
        &self.result
    }

    /// Index of the last step.
    pub fn num_steps(&self) -> usize {
        self.result.num_steps()
    }

    /// Cursor position, in `0..=num_steps()`.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// State at the cursor.
    pub fn current_state(&self) -> &QuantumState {
        match self.current_step {
            0 => &self.result.initial_state,
            n => &self.result.intermediate_states[n - 1],
        }
    }

    /// Gate that produced the current state, or `None` at step 0.
    pub fn current_gate(&self) -> Option<&Gate> {
        self.current_step
            .checked_sub(1)
            .and_then(|i| self.circuit.gates().get(i))
    }

    /// Whether the cursor is at step 0.
    pub fn is_at_start(&self) -> bool {
        self.current_step == 0
    }

    /// Whether the cursor is at the last step.
    pub fn is_at_end(&self) -> bool {
        self.current_step == self.num_steps()
    }

    /// Advance one step. Returns `None` and stays put at the end.
    pub fn step_forward(&mut self) -> Option<&QuantumState> {
        if self.is_at_end() {
            return None;
        }
        self.current_step += 1;
        Some(self.current_state())
    }

    /// Go back one step. Returns `None` and stays put at the start.
    pub fn step_back(&mut self) -> Option<&QuantumState> {
        if self.is_at_start() {
            return None;
        }
        self.current_step -= 1;
        Some(self.current_state())
    }

    /// Move the cursor to `step`.
    pub fn jump_to(&mut self, step: usize) -> SimResult<&QuantumState> {
        if step > self.num_steps() {
            return Err(SimError::StepOutOfRange {
                step,
                last: self.num_steps(),
            });
        }
        self.current_step = step;
        Ok(self.current_state())
    }

    /// Move the cursor back to step 0.
    pub fn reset(&mut self) {
        self.current_step = 0;
    }
}
