use rmcp::schemars;
use serde::{Deserialize, Deserializer};

/// Helper function to deserialize and trim strings
fn deserialize_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(s.trim().to_string())
}

/// Request to get the current time in a specific timezone
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetTimeInTimezoneRequest {
    /// IANA timezone name (e.g., 'America/New_York', 'Europe/London')
    #[serde(deserialize_with = "deserialize_trimmed_string")]
    pub timezone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timezone_trimming() {
        let json = r#"{"timezone": "   Africa/Cairo   "}"#;
        let request: GetTimeInTimezoneRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.timezone, "Africa/Cairo");
    }

    #[test]
    fn test_missing_timezone_is_rejected() {
        let request: Result<GetTimeInTimezoneRequest, _> = serde_json::from_str("{}");
        assert!(request.is_err());
    }
}
