use std::{error::Error, fmt};

/// Failure that ends the frame loop.
#[derive(Debug)]
pub enum SchedulerError<E> {
    /// The surface could not be presented.
    Present(E),
}

impl<E: fmt::Display> fmt::Display for SchedulerError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Present(err) => write!(f, "failed to present frame: {}", err),
        }
    }
}

impl<E: Error + 'static> Error for SchedulerError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Present(err) => Some(err),
        }
    }
}
