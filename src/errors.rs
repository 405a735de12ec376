use serde::Serialize;

/// Errors raised by the dashboard client.
///
/// Transport, status and decode failures are normally absorbed at the
/// [`ApiClient`](crate::api::ApiClient) boundary and surfaced as a toast;
/// the remaining variants come from user interactions (unknown pages,
/// actions or filter controls, invalid form input).
#[derive(Debug, thiserror::Error, Serialize)]
pub enum ClientError {
    #[error("Transport error: {0}")]
    Transport(
        #[from]
        #[serde(skip)]
        reqwest::Error,
    ),

    #[error("HTTP error {status} from {endpoint}")]
    HttpStatus { endpoint: String, status: u16 },

    #[error("Failed to decode response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        #[serde(skip)]
        source: serde_json::Error,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("Unknown action: {0}")]
    UnknownAction(String),

    #[error("Unknown filter control: {0}")]
    UnknownFilter(String),

    #[error("IO error: {0}")]
    Io(
        #[from]
        #[serde(skip)]
        std::io::Error,
    ),
}

impl From<validator::ValidationErrors> for ClientError {
    fn from(err: validator::ValidationErrors) -> Self {
        ClientError::ValidationError(err.to_string())
    }
}

impl ClientError {
    /// HTTP status returned by the server, if the failure carried one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the failure happened talking to the API (as opposed to bad local input).
    pub fn is_api_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::HttpStatus { .. } | Self::Decode { .. }
        )
    }

    /// Message suitable for a toast.
    /// API failures collapse to one generic message so no server detail leaks into the UI.
    pub fn toast_message(&self) -> String {
        match self {
            Self::Transport(_) | Self::HttpStatus { .. } | Self::Decode { .. } => {
                "Error loading data".to_string()
            }
            Self::Io(_) => "Could not read the selected file".to_string(),
            _ => self.to_string(),
        }
    }
}
