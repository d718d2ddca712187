use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};

/// Canonical output format: ISO 8601 with numeric UTC offset.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// Fixed string returned by `format_now` for any unusable timezone input.
pub const INVALID_TIMEZONE_MESSAGE: &str = "Invalid timezone";

/// URI scheme for the resource surface.
pub const RESOURCE_SCHEME: &str = "datetime://";

/// Fixed address of the timezone listing resource.
pub const LIST_RESOURCE_URI: &str = "datetime://list";

/// Hand-curated, ordered list of widely used IANA timezone names.
///
/// Used to keep resource enumeration short and as the fallback result when
/// database enumeration yields nothing. Not authoritative.
pub const COMMON_TIMEZONES: &[&str] = &[
    "UTC",
    "America/New_York",
    "America/Chicago",
    "America/Denver",
    "America/Los_Angeles",
    "America/Sao_Paulo",
    "Europe/London",
    "Europe/Paris",
    "Europe/Berlin",
    "Europe/Moscow",
    "Africa/Cairo",
    "Africa/Johannesburg",
    "Asia/Dubai",
    "Asia/Kolkata",
    "Asia/Shanghai",
    "Asia/Tokyo",
    "Australia/Sydney",
    "Pacific/Auckland",
];

// '/' must be encoded so a timezone name stays a single URI segment.
const TIMEZONE_SEGMENT: &AsciiSet = &CONTROLS.add(b' ').add(b'%').add(b'/');

/// Build the `datetime://{timezone}` URI for a timezone name.
pub fn timezone_resource_uri(timezone: &str) -> String {
    format!(
        "{}{}",
        RESOURCE_SCHEME,
        utf8_percent_encode(timezone, TIMEZONE_SEGMENT)
    )
}

/// Percent-decode the `{timezone}` segment of a resource URI.
pub fn decode_timezone_segment(segment: &str) -> Option<String> {
    percent_decode_str(segment)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

/// Render a timezone listing with a count prefix, one name per line.
pub fn render_timezone_list(zones: &[String]) -> String {
    format!("Found {} timezones:\n{}", zones.len(), zones.join("\n"))
}

/// Normalize an SSE route prefix: leading `/`, no trailing `/`.
///
/// An empty or bare-`/` prefix normalizes to the empty string so routes
/// mount at the server root.
pub fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timezone_resource_uri_encodes_slash() {
        assert_eq!(
            timezone_resource_uri("America/New_York"),
            "datetime://America%2FNew_York"
        );
        assert_eq!(timezone_resource_uri("UTC"), "datetime://UTC");
    }

    #[test]
    fn test_decode_timezone_segment() {
        assert_eq!(
            decode_timezone_segment("America%2FNew_York").as_deref(),
            Some("America/New_York")
        );
        assert_eq!(decode_timezone_segment("UTC").as_deref(), Some("UTC"));
    }

    #[test]
    fn test_render_timezone_list_has_count_prefix() {
        let zones = vec!["UTC".to_string(), "Europe/London".to_string()];
        let rendered = render_timezone_list(&zones);
        assert!(rendered.starts_with("Found 2 timezones:\n"));
        assert!(rendered.contains("Europe/London"));
    }

    #[test]
    fn test_normalize_prefix() {
        assert_eq!(normalize_prefix(""), "");
        assert_eq!(normalize_prefix("/"), "");
        assert_eq!(normalize_prefix("mcp"), "/mcp");
        assert_eq!(normalize_prefix("/mcp"), "/mcp");
        assert_eq!(normalize_prefix("/mcp/"), "/mcp");
        assert_eq!(normalize_prefix("api/mcp/"), "/api/mcp");
    }

    #[test]
    fn test_common_timezones_are_parseable() {
        for name in COMMON_TIMEZONES {
            assert!(
                name.parse::<chrono_tz::Tz>().is_ok(),
                "curated zone '{name}' is not a valid IANA name"
            );
        }
    }
}
