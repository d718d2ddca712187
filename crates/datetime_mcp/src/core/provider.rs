use std::str::FromStr;

use chrono::Utc;
use chrono_tz::{TZ_VARIANTS, Tz};

use crate::core::{
    error::{DateTimeResult, DateTimeServerError},
    utils::{COMMON_TIMEZONES, DATETIME_FORMAT, INVALID_TIMEZONE_MESSAGE},
};

/// Timezone query implementation backed by the embedded IANA database
#[derive(Clone)]
pub struct DateTimeProvider {
    local_timezone: Tz,
}

impl DateTimeProvider {
    pub fn new() -> Self {
        Self {
            local_timezone: detect_local_timezone(),
        }
    }

    pub(crate) fn parse_timezone(&self, timezone_name: &str) -> DateTimeResult<Tz> {
        if timezone_name.is_empty() {
            return Err(DateTimeServerError::InvalidTimezone {
                timezone: timezone_name.to_string(),
            });
        }
        Tz::from_str(timezone_name).map_err(|_| DateTimeServerError::InvalidTimezone {
            timezone: timezone_name.to_string(),
        })
    }

    /// Whether a string names a timezone the database knows
    pub fn is_valid_timezone(&self, timezone_name: &str) -> bool {
        self.parse_timezone(timezone_name).is_ok()
    }

    /// The host's default IANA timezone name, resolved at construction
    pub fn current_timezone(&self) -> String {
        self.local_timezone.name().to_string()
    }

    /// Render the current instant in the given timezone.
    ///
    /// Never fails: unusable input yields the fixed `"Invalid timezone"`
    /// string and one logged diagnostic.
    pub fn format_now(&self, timezone_name: &str) -> String {
        match self.parse_timezone(timezone_name) {
            Ok(timezone) => Utc::now()
                .with_timezone(&timezone)
                .format(DATETIME_FORMAT)
                .to_string(),
            Err(e) => {
                tracing::error!("Cannot format current time: {}", e);
                INVALID_TIMEZONE_MESSAGE.to_string()
            }
        }
    }

    /// Every known timezone name unioned with the curated list, sorted
    /// ascending with duplicates removed.
    ///
    /// Never fails: an empty enumeration falls back to the curated list in
    /// its declared order.
    pub fn list_timezones(&self) -> Vec<String> {
        let enumerated: Vec<String> = TZ_VARIANTS.iter().map(|tz| tz.name().to_string()).collect();
        if enumerated.is_empty() {
            tracing::error!("Timezone database enumeration returned nothing, using curated list");
            return fallback_timezone_list();
        }
        merge_with_common(enumerated)
    }
}

impl Default for DateTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Detect the host's default timezone, degrading to UTC
fn detect_local_timezone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(tz_name) => match tz_name.parse::<Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                tracing::warn!("Could not parse timezone '{}', defaulting to UTC", tz_name);
                chrono_tz::UTC
            }
        },
        Err(e) => {
            tracing::warn!("Could not detect system timezone, defaulting to UTC: {}", e);
            chrono_tz::UTC
        }
    }
}

/// The curated list verbatim, used when enumeration yields nothing
pub(crate) fn fallback_timezone_list() -> Vec<String> {
    COMMON_TIMEZONES.iter().map(|s| s.to_string()).collect()
}

/// Union with the curated list, deduplicate, sort ascending
pub(crate) fn merge_with_common(mut zones: Vec<String>) -> Vec<String> {
    zones.extend(COMMON_TIMEZONES.iter().map(|s| s.to_string()));
    zones.sort();
    zones.dedup();
    zones
}
