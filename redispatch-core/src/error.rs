//! Error types for redispatch.
//!
//! Selecting a handler operation cannot fail. The only fallible step is
//! writing the selected [`Marker`](crate::Marker) to an output sink.

use thiserror::Error;

/// Top-level error type for all redispatch operations.
#[derive(Error, Debug)]
pub enum RedispatchError {
    /// Writing or flushing the output sink failed.
    #[error("failed to write dispatch output: {0}")]
    Output(#[from] std::io::Error),
}

/// Result alias defaulting to [`RedispatchError`].
pub type Result<T, E = RedispatchError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_io_error_converts_to_output() {
        fn fails() -> Result<()> {
            Err::<(), _>(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))?;
            Ok(())
        }

        let err = fails().unwrap_err();
        assert!(matches!(
            err,
            RedispatchError::Output(ref e) if e.kind() == io::ErrorKind::BrokenPipe
        ));
        assert_eq!(
            err.to_string(),
            "failed to write dispatch output: pipe closed"
        );
    }
}
