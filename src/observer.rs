//! Step observer trait for monitoring simulation progress.

/// Trait for observing the phases of a simulation step.
///
/// Implement this trait to monitor solver progress (e.g., for debugging,
/// visualization, or performance profiling). All methods have default
/// no-op implementations.
pub trait StepObserver {
    /// Called once force generators and springs have filled the accumulators.
    fn on_forces_applied(&mut self) {}

    /// Called after all active particles have been integrated.
    fn on_integrate(&mut self) {}

    /// Called after each constraint relaxation pass.
    fn on_constraint_iteration(&mut self, _iteration: usize) {}

    /// Called after collision resolution with the number of contacts handled.
    fn on_collisions(&mut self, _particle_contacts: usize, _plane_contacts: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
