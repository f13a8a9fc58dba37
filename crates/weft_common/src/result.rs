//! Common result and error types for the Weft toolkit.

/// The standard result type for fallible internal operations.
///
/// `Ok` contains the result value. `Err` indicates an unrecoverable internal
/// error (a broken caller contract or a corrupted data structure), not a
/// user-facing input error. Recoverable "not found" conditions are expressed
/// as `Option` returns instead.
pub type WeftResult<T> = Result<T, InternalError>;

/// An internal error indicating a broken invariant, not a user input problem.
///
/// These errors should never occur during normal operation. If one does occur,
/// it means a builder violated a construction contract that should be fixed.
#[derive(Debug, thiserror::Error)]
#[error("internal error: {message}")]
pub struct InternalError {
    /// Description of the internal error.
    pub message: String,
}

impl InternalError {
    /// Creates a new internal error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<String> for InternalError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let err = InternalError::new("block 'clb_1_1' owns both bits and children");
        assert_eq!(
            format!("{err}"),
            "internal error: block 'clb_1_1' owns both bits and children"
        );
    }

    #[test]
    fn propagates_through_question_mark() {
        fn inner() -> WeftResult<usize> {
            Err(InternalError::new("tile 3 has no coordinate"))
        }
        fn outer() -> WeftResult<usize> {
            let n = inner()?;
            Ok(n + 1)
        }
        let err = outer().unwrap_err();
        assert!(err.message.contains("tile 3"));
    }

    #[test]
    fn from_formatted_string() {
        let coord = "(2, 5)";
        let err: InternalError = format!("no tile at {coord}").into();
        assert_eq!(err.message, "no tile at (2, 5)");
    }
}
