use std::fmt;
use std::io;

use crate::car::LayoutError;

#[derive(Debug)]
pub enum LifecycleError {
    AlreadyRunning,
    NotRunning,
}

impl fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleError::AlreadyRunning => write!(f, "processor already running"),
            LifecycleError::NotRunning => write!(f, "processor not running"),
        }
    }
}

impl std::error::Error for LifecycleError {}

/// Everything that can bubble up to the owner of the dashboard.
#[derive(Debug)]
pub enum DashError {
    Layout(LayoutError),
    Lifecycle(LifecycleError),
    Io(io::Error),
}

impl fmt::Display for DashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DashError::Layout(err) => write!(f, "invalid car diagram: {}", err),
            DashError::Lifecycle(err) => write!(f, "lifecycle error: {}", err),
            DashError::Io(err) => write!(f, "terminal i/o failed: {}", err),
        }
    }
}

impl std::error::Error for DashError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DashError::Layout(err) => Some(err),
            DashError::Lifecycle(err) => Some(err),
            DashError::Io(err) => Some(err),
        }
    }
}

impl From<LayoutError> for DashError {
    fn from(err: LayoutError) -> Self {
        DashError::Layout(err)
    }
}

impl From<LifecycleError> for DashError {
    fn from(err: LifecycleError) -> Self {
        DashError::Lifecycle(err)
    }
}

impl From<io::Error> for DashError {
    fn from(err: io::Error) -> Self {
        DashError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn wrapped_errors_stay_reachable_through_source() {
        let err = DashError::from(LayoutError::MalformedComponent { component: "body" });
        assert_eq!(err.to_string(), "invalid car diagram: car component 'body' is not rectangular");
        assert!(err.source().unwrap().downcast_ref::<LayoutError>().is_some());

        let err = DashError::from(LifecycleError::NotRunning);
        assert_eq!(err.to_string(), "lifecycle error: processor not running");

        let err = DashError::from(io::Error::new(io::ErrorKind::BrokenPipe, "gone"));
        assert_eq!(err.source().unwrap().to_string(), "gone");
    }
}
