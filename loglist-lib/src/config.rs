//! List configuration

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ConfigError;
use crate::list::Decoration;

/// Sizing and pacing settings shared by the list views.
///
/// # Example
///
/// ```
/// use loglist_lib::ListConfig;
///
/// let config = ListConfig::default()
///     .with_default_display_size(5)
///     .with_increment(3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Rows shown by the full-page list after a (re)load.
    ///
    /// Default: 10
    pub default_display_size: usize,

    /// Rows added by each "load more".
    ///
    /// Default: 10
    pub increment: usize,

    /// Maximum rows shown by the compact related list.
    ///
    /// Default: 6
    pub compact_max_rows: usize,

    /// How long the spinner lingers after a transition completes.
    ///
    /// Default: 50 milliseconds
    #[serde(with = "millis")]
    pub spinner_hide_delay: Duration,

    /// Derived fields added to every row.
    pub decoration: Decoration,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            default_display_size: 10,
            increment: 10,
            compact_max_rows: 6,
            spinner_hide_delay: Duration::from_millis(50),
            decoration: Decoration::default(),
        }
    }
}

impl ListConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial display size.
    pub fn with_default_display_size(mut self, size: usize) -> Self {
        self.default_display_size = size;
        self
    }

    /// Sets the load-more increment.
    pub fn with_increment(mut self, increment: usize) -> Self {
        self.increment = increment;
        self
    }

    /// Sets the compact list's row limit.
    pub fn with_compact_max_rows(mut self, rows: usize) -> Self {
        self.compact_max_rows = rows;
        self
    }

    /// Sets the spinner hide delay.
    pub fn with_spinner_hide_delay(mut self, delay: Duration) -> Self {
        self.spinner_hide_delay = delay;
        self
    }

    /// Sets the row decoration.
    pub fn with_decoration(mut self, decoration: Decoration) -> Self {
        self.decoration = decoration;
        self
    }

    /// Checks that the settings can drive a list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.increment == 0 {
            return Err(ConfigError::ZeroIncrement);
        }
        if self.compact_max_rows == 0 {
            return Err(ConfigError::ZeroCompactRows);
        }
        Ok(())
    }
}

mod millis {
    use std::time::Duration;

    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        Ok(Duration::from_millis(u64::deserialize(d)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ListConfig::default();
        assert_eq!(config.compact_max_rows, 6);
        assert_eq!(config.spinner_hide_delay, Duration::from_millis(50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_increment_rejected() {
        let config = ListConfig::default().with_increment(0);
        assert_eq!(config.validate(), Err(ConfigError::ZeroIncrement));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ListConfig =
            serde_json::from_str(r#"{"increment": 3, "spinner_hide_delay": 120}"#).unwrap();
        assert_eq!(config.increment, 3);
        assert_eq!(config.default_display_size, 10);
        assert_eq!(config.spinner_hide_delay, Duration::from_millis(120));
    }
}
