//! Macro for implementing Display and FromStr for label enums
//!
//! Label enums (notification levels and similar) travel as lowercase strings
//! in logs and JSON. This macro keeps both directions of that conversion in a
//! single mapping with case-insensitive parsing.
//!
//! # Example
//!
//! ```rust
//! use edgeshield_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Severity {
//!     Low,
//!     High,
//! }
//!
//! impl_label_conversions!(Severity {
//!     Low => "low",
//!     High => "high",
//! });
//!
//! assert_eq!(Severity::High.to_string(), "high");
//! assert_eq!("LOW".parse::<Severity>(), Ok(Severity::Low));
//! ```

/// Implements Display and FromStr traits for label enums
///
/// - Display writes the mapped lowercase string
/// - FromStr accepts any casing and reports the enum name on failure
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
