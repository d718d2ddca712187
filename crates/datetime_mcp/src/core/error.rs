use rmcp::ErrorData as McpError;
use rmcp::serde_json::json;

use crate::core::utils::LIST_RESOURCE_URI;

// Error codes
const ERROR_INVALID_TIMEZONE: &str = "invalid_timezone";
const ERROR_RESOURCE_NOT_FOUND: &str = "resource_not_found";

/// Custom error types for better error handling
#[derive(Debug, thiserror::Error)]
pub enum DateTimeServerError {
    #[error("Invalid timezone: {timezone}")]
    InvalidTimezone { timezone: String },
    #[error("Resource not found: {uri}")]
    ResourceNotFound { uri: String },
}

impl From<DateTimeServerError> for McpError {
    fn from(err: DateTimeServerError) -> Self {
        match err {
            DateTimeServerError::InvalidTimezone { timezone } => McpError::invalid_params(
                ERROR_INVALID_TIMEZONE,
                Some(json!({
                    "timezone": timezone,
                    "hint": "use an IANA name such as 'America/New_York'; the full set is listed by the list-timezones tool"
                })),
            ),
            DateTimeServerError::ResourceNotFound { uri } => McpError::resource_not_found(
                ERROR_RESOURCE_NOT_FOUND,
                Some(json!({
                    "uri": uri,
                    "available_resources": [LIST_RESOURCE_URI, "datetime://{timezone}"]
                })),
            ),
        }
    }
}

pub type DateTimeResult<T> = Result<T, DateTimeServerError>;
pub type McpResult<T> = Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::DateTimeServerError;
    use crate::core::error::McpError;

    #[test]
    fn test_invalid_timezone_conversion() {
        let error = DateTimeServerError::InvalidTimezone {
            timezone: "Invalid/Zone".to_string(),
        };
        let mcp_error: McpError = error.into();

        assert!(mcp_error.to_string().contains("invalid_timezone"));
    }

    #[test]
    fn test_resource_not_found_conversion() {
        let error = DateTimeServerError::ResourceNotFound {
            uri: "datetime:bad".to_string(),
        };
        let mcp_error: McpError = error.into();

        assert!(mcp_error.to_string().contains("resource_not_found"));
    }
}
