//! Notification levels

use serde::{Deserialize, Serialize};

/// Severity attached to a user-facing notification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

crate::impl_label_conversions!(NotifyLevel {
    Info => "info",
    Success => "success",
    Warning => "warning",
    Error => "error",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(NotifyLevel::default(), NotifyLevel::Info);
        assert_eq!(NotifyLevel::default().to_string(), "info");
    }

    #[test]
    fn test_parse_and_serialize_agree() {
        let parsed: NotifyLevel = "Warning".parse().unwrap();
        assert_eq!(parsed, NotifyLevel::Warning);
        assert_eq!(serde_json::to_value(parsed).unwrap(), serde_json::json!("warning"));
        assert!("fatal".parse::<NotifyLevel>().is_err());
    }
}
