//! Client error types for the EquusID API

/// Message shown when the server cannot be reached or answers with garbage
pub const TRANSPORT_MESSAGE: &str = "No se pudo conectar con el servidor. Intenta más tarde.";

/// Message shown when the backend rejects the session (HTTP 403)
pub const SESSION_EXPIRED_MESSAGE: &str = "Sesión expirada. Por favor, inicia sesión nuevamente.";

/// Fallback used when a `success:false` envelope carries no message
pub const REQUEST_FAILED_MESSAGE: &str = "Error en la petición";

/// Error type for every operation that goes through the HTTP client
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Network, DNS or timeout failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The body could not be decoded as the expected envelope
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// HTTP 403: the stored credential is no longer valid
    #[error("session expired")]
    SessionExpired,

    /// `success:false` envelope or a non-2xx status with a body
    #[error("request failed: {message}")]
    Request {
        message: String,
        kind: Option<String>,
        code: Option<i64>,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ClientError>;

impl ClientError {
    /// Build a request error from an optional server message
    pub fn request(message: Option<String>, fallback: &str) -> Self {
        ClientError::Request {
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string()),
            kind: None,
            code: None,
        }
    }

    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::SessionExpired)
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_) | ClientError::Decode(_))
    }

    /// Text suitable for showing to the operator
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport(_) | ClientError::Decode(_) => TRANSPORT_MESSAGE.to_string(),
            ClientError::SessionExpired => SESSION_EXPIRED_MESSAGE.to_string(),
            ClientError::Request { message, .. } => message.clone(),
            ClientError::InvalidConfig(msg) => msg.clone(),
        }
    }

    /// Same as [`user_message`](Self::user_message) but replaces the generic
    /// request fallback with an operation-specific one.
    pub fn user_message_or(&self, operation_fallback: &str) -> String {
        match self {
            ClientError::Request { message, .. } if message == REQUEST_FAILED_MESSAGE => {
                operation_fallback.to_string()
            }
            _ => self.user_message(),
        }
    }
}
