use thiserror::Error;

/// Error taxonomy for one simulation run. No retries, no partial recovery:
/// any of these aborts the run.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Fatal precondition violation: origin start, non-positive step or
    /// total time, malformed scenario values.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// Numerical blow-up: a produced state left the representable range.
    #[error("non-finite state produced at step {step}")]
    NonFinite { step: usize },

    /// Scenario file did not describe a runnable simulation.
    #[error("configuration error: {0}")]
    Config(String),

    /// Failed to encode or write the output image.
    #[error("render error: {0}")]
    Render(#[from] image::ImageError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
