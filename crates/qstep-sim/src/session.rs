//! A loaded circuit plus the trace of its last run.

use tracing::info;

use qstep_ir::Circuit;

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::executor::{CancelHandle, Executor, QuantumExecutionResult, StepObserver};
use crate::trace::ExecutionTrace;

/// Holds the circuit being worked on and the most recent run over it.
///
/// Loading new source replaces the circuit only if it parses; a failed load
/// keeps whatever was loaded before. A cloned session cancels independently
/// of the original.
#[derive(Debug, Clone)]
pub struct ExecutionSession {
    executor: Executor,
    circuit: Option<Circuit>,
    trace: Option<ExecutionTrace>,
}

impl ExecutionSession {
    /// Create an empty session whose runs use `config`.
    pub fn new(config: SimConfig) -> Self {
        Self {
            executor: Executor::new(config),
            circuit: None,
            trace: None,
        }
    }

    /// Parse `source` and make it the current circuit.
    pub fn load_source(&mut self, source: &str) -> SimResult<&Circuit> {
        let circuit = qstep_dsl::parse(source)?;
        Ok(self.load_circuit(circuit))
    }

    /// Make `circuit` the current circuit, discarding any previous trace.
    pub fn load_circuit(&mut self, circuit: Circuit) -> &Circuit {
        info!(
            circuit = %circuit.name(),
            num_qubits = circuit.num_qubits(),
            num_gates = circuit.num_gates(),
            "Loaded circuit"
        );
        self.trace = None;
        self.circuit.insert(circuit)
    }

    /// The loaded circuit, if any.
    pub fn circuit(&self) -> Option<&Circuit> {
        self.circuit.as_ref()
    }

    /// Trace of the last successful run over the loaded circuit.
    pub fn trace(&self) -> Option<&ExecutionTrace> {
        self.trace.as_ref()
    }

    /// Mutable trace, for moving its cursor.
    pub fn trace_mut(&mut self) -> Option<&mut ExecutionTrace> {
        self.trace.as_mut()
    }

    /// Handle that cancels the session's in-flight run.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.executor.cancel_handle()
    }

    /// Run the current circuit with the configured inter-gate delay.
    ///
    /// Any earlier cancellation is cleared first.
    pub async fn run<O: StepObserver>(&mut self, observer: O) -> SimResult<&ExecutionTrace> {
        let circuit = self.begin_run()?;
        let result = self.executor.run(&circuit, observer).await?;
        self.finish_run(circuit, result)
    }

    /// Run the current circuit without pausing between gates.
    pub fn run_blocking<O: StepObserver>(&mut self, observer: O) -> SimResult<&ExecutionTrace> {
        let circuit = self.begin_run()?;
        let result = self.executor.run_blocking(&circuit, observer)?;
        self.finish_run(circuit, result)
    }

    fn begin_run(&mut self) -> SimResult<Circuit> {
        let circuit = self.circuit.clone().ok_or(SimError::NoCircuit)?;
        self.trace = None;
        self.executor.cancel_handle().reset();
        Ok(circuit)
    }

    fn finish_run(
        &mut self,
        circuit: Circuit,
        result: QuantumExecutionResult,
    ) -> SimResult<&ExecutionTrace> {
        let trace = ExecutionTrace::new(circuit, result)?;
        Ok(self.trace.insert(trace))
    }
}

impl Default for ExecutionSession {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::NoopObserver;

    #[test]
    fn test_run_without_circuit() {
        let mut session = ExecutionSession::new(SimConfig::immediate());
        assert!(matches!(
            session.run_blocking(NoopObserver),
            Err(SimError::NoCircuit)
        ));
    }

    #[test]
    fn test_failed_load_keeps_previous_circuit() {
        let mut session = ExecutionSession::new(SimConfig::immediate());
        session.load_source("name \"Keep\"\nH(0)").unwrap();
        assert!(session.load_source("X(99999999999)").is_err());
        assert_eq!(session.circuit().map(Circuit::name), Some("Keep"));
    }

    #[test]
    fn test_reload_clears_trace() {
        let mut session = ExecutionSession::new(SimConfig::immediate());
        session.load_source("H(0)").unwrap();
        session.run_blocking(NoopObserver).unwrap();
        assert!(session.trace().is_some());

        session.load_source("X(0)").unwrap();
        assert!(session.trace().is_none());
    }

    #[test]
    fn test_run_resets_cancellation() {
        let mut session = ExecutionSession::new(SimConfig::immediate());
        session.load_circuit(Circuit::bell().unwrap());
        session.cancel_handle().cancel();
        let trace = session.run_blocking(NoopObserver).unwrap();
        assert_eq!(trace.num_steps(), 2);
    }

    #[test]
    fn test_cloned_session_cancels_independently() {
        let mut session = ExecutionSession::new(SimConfig::immediate());
        session.load_circuit(Circuit::bell().unwrap());
        let clone = session.clone();
        session.cancel_handle().cancel();
        assert!(!clone.cancel_handle().is_cancelled());
        assert_eq!(clone.circuit(), session.circuit());
    }

    #[test]
    fn test_trace_navigation_through_session() {
        let mut session = ExecutionSession::new(SimConfig::immediate());
        session.load_circuit(Circuit::teleportation().unwrap());
        session.run_blocking(NoopObserver).unwrap();
        let trace = session.trace_mut().unwrap();
        trace.jump_to(3).unwrap();
        assert_eq!(trace.current_step(), 3);
    }
}
