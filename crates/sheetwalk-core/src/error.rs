//! Error types for sheetwalk-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetwalk-core
///
/// Name lookups that find nothing are not errors: they return `None`.
/// [`Error::NotFound`] only travels between a [`Backend`](crate::Backend)
/// and the core, which turns it into `None` at the lookup site.
#[derive(Debug, Error)]
pub enum Error {
    /// Argument rejected before any host call was made
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Host could not find the requested object
    #[error("Not found: {0}")]
    NotFound(String),

    /// No usable host session
    #[error("Host unavailable: {0}")]
    HostUnavailable(String),

    /// Failure reported by the host while serving a request
    #[error("Host error: {0}")]
    Host(String),
}

impl Error {
    /// Create an invalid-argument error with a message
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create a host error with a message
    pub fn host<S: Into<String>>(msg: S) -> Self {
        Error::Host(msg.into())
    }

    /// Check if this error is a not-found condition
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this error is an invalid argument
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }
}

/// Converts a backend lookup result into an optional value.
///
/// `NotFound` becomes `Ok(None)`; every other error is propagated.
pub(crate) fn found<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(Error::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Validates a signed index against an exclusive upper limit.
pub(crate) fn check_index(index: i64, limit: u32, what: &str) -> Result<u32> {
    if index < 0 {
        return Err(Error::invalid(format!(
            "{what} index must be 0 or greater, got {index}"
        )));
    }
    if index >= i64::from(limit) {
        return Err(Error::invalid(format!(
            "{what} index {index} out of bounds (max: {})",
            limit - 1
        )));
    }
    Ok(index as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_maps_not_found_to_none() {
        assert_eq!(found(Ok(3)).unwrap(), Some(3));
        assert_eq!(
            found::<i32>(Err(Error::NotFound("Sheet9".into()))).unwrap(),
            None
        );
        assert!(found::<i32>(Err(Error::host("socket closed"))).is_err());
    }

    #[test]
    fn test_check_index() {
        assert_eq!(check_index(0, 10, "row").unwrap(), 0);
        assert_eq!(check_index(9, 10, "row").unwrap(), 9);
        assert!(check_index(-1, 10, "row").unwrap_err().is_invalid_argument());
        assert!(check_index(10, 10, "row").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            Error::invalid("bad").to_string(),
            "Invalid argument: bad"
        );
        assert_eq!(
            Error::HostUnavailable("no workbooks open".into()).to_string(),
            "Host unavailable: no workbooks open"
        );
    }
}
