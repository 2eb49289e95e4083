//! Console error types

use equus_client::ClientError;

/// Errors raised by a paginated controller
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Navigation target outside `[0, total_pages)`. Callers ignore it the way
    /// a disabled pager button would.
    #[error("page {page} is out of range (total pages: {total_pages})")]
    OutOfRange { page: u32, total_pages: u32 },

    /// `previous_page` called on the first page
    #[error("already on the first page")]
    NoPreviousPage,

    #[error("page size {0} is not allowed")]
    InvalidPageSize(u32),

    #[error(transparent)]
    Client(#[from] ClientError),
}

pub type Result<T> = std::result::Result<T, ConsoleError>;

impl ConsoleError {
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            ConsoleError::OutOfRange { .. } | ConsoleError::NoPreviousPage
        )
    }

    /// Text suitable for showing to the operator
    pub fn user_message(&self) -> String {
        match self {
            ConsoleError::Client(e) => e.user_message(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConsoleError::OutOfRange {
            page: 4,
            total_pages: 3,
        };
        assert_eq!(err.to_string(), "page 4 is out of range (total pages: 3)");
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_no_previous_page_is_navigation_error() {
        let err = ConsoleError::NoPreviousPage;
        assert_eq!(err.to_string(), "already on the first page");
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_client_message_passthrough() {
        let err = ConsoleError::from(ClientError::SessionExpired);
        assert_eq!(
            err.user_message(),
            "Sesión expirada. Por favor, inicia sesión nuevamente."
        );
        assert!(!err.is_out_of_range());
    }
}
