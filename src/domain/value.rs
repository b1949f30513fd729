use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Cellsynt account username.
///
/// Invariant: non-empty after trimming.
pub struct Username(String);

impl Username {
    /// Form field name used by Cellsynt (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Cellsynt account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Form field name used by Cellsynt (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sender shown on the recipient's handset (`originator`).
///
/// Invariant: non-empty after trimming. Interpreted by the gateway according to
/// the accompanying [`OriginatorType`].
pub struct Originator(String);

impl Originator {
    /// Form field name used by Cellsynt (`originator`).
    pub const FIELD: &'static str = "originator";

    /// Create a validated [`Originator`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated originator.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Country calling code used to complete local numbers (e.g. `46`).
///
/// Invariant: one or more ASCII digits. A single leading `+` is accepted and dropped.
pub struct CountryCode(String);

impl CountryCode {
    /// Name used in validation errors.
    pub const FIELD: &'static str = "country_code";

    /// Create a validated [`CountryCode`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidCountryCode {
                input: trimmed.to_owned(),
            });
        }
        Ok(Self(digits.to_owned()))
    }

    /// Borrow the digits.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Tracking id returned by the gateway for a dispatched message.
pub struct TrackingId(String);

impl TrackingId {
    /// Create a validated [`TrackingId`] (non-empty after trimming).
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "tracking_id",
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Wrap a value exactly as the gateway reported it.
    pub(crate) fn from_wire(value: &str) -> Self {
        Self(value.to_owned())
    }

    /// Borrow the tracking id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TrackingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
/// How the gateway interprets the originator (`originatortype`).
pub enum OriginatorType {
    /// Alphanumeric sender id.
    Alpha,
    /// Numeric sender id (a phone number).
    Numeric,
}

impl OriginatorType {
    /// Form field name used by Cellsynt (`originatortype`).
    pub const FIELD: &'static str = "originatortype";

    /// Wire token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alpha => "alpha",
            Self::Numeric => "numeric",
        }
    }
}

impl fmt::Display for OriginatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OriginatorType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "alpha" => Ok(Self::Alpha),
            "numeric" => Ok(Self::Numeric),
            other => Err(ValidationError::UnknownVariant {
                field: Self::FIELD,
                input: other.to_owned(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
/// Character set of the `text` field (`charset`).
///
/// Leaving the charset unset lets the gateway fall back to GSM 03.38.
pub enum Charset {
    #[serde(rename = "UTF-8")]
    Utf8,
    #[serde(rename = "ISO-8859-1")]
    Iso88591,
}

impl Charset {
    /// Form field name used by Cellsynt (`charset`).
    pub const FIELD: &'static str = "charset";

    /// Wire token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Iso88591 => "ISO-8859-1",
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Charset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("UTF-8") {
            Ok(Self::Utf8)
        } else if trimmed.eq_ignore_ascii_case("ISO-8859-1") {
            Ok(Self::Iso88591)
        } else {
            Err(ValidationError::UnknownVariant {
                field: Self::FIELD,
                input: trimmed.to_owned(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Message type tag sent as `type`.
pub enum MessageType {
    Text,
    Binary,
    Flash,
    Unicode,
}

impl MessageType {
    /// Form field name used by Cellsynt (`type`).
    pub const FIELD: &'static str = "type";

    /// Wire token.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Binary => "binary",
            Self::Flash => "flash",
            Self::Unicode => "unicode",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_newtypes_trim_or_validate() {
        let username = Username::new("  user ").unwrap();
        assert_eq!(username.as_str(), "user");
        assert!(Username::new("  ").is_err());

        let password = Password::new(" secret ").unwrap();
        assert_eq!(password.as_str(), " secret ");
        assert!(Password::new("").is_err());

        let originator = Originator::new(" Shop ").unwrap();
        assert_eq!(originator.as_str(), "Shop");
        assert!(Originator::new("").is_err());

        let id = TrackingId::new(" abc ").unwrap();
        assert_eq!(id.as_str(), "abc");
        assert!(TrackingId::new(" ").is_err());
    }

    #[test]
    fn password_debug_is_redacted() {
        let password = Password::new("hunter2").unwrap();
        assert_eq!(format!("{password:?}"), "Password(***)");
    }

    #[test]
    fn country_code_accepts_digits_and_optional_plus() {
        assert_eq!(CountryCode::new("46").unwrap().as_str(), "46");
        assert_eq!(CountryCode::new(" +47 ").unwrap().as_str(), "47");
        assert!(matches!(
            CountryCode::new("+"),
            Err(ValidationError::Empty { .. })
        ));
        assert!(matches!(
            CountryCode::new("4a"),
            Err(ValidationError::InvalidCountryCode { .. })
        ));
    }

    #[test]
    fn enums_round_trip_their_wire_tokens() {
        assert_eq!("alpha".parse::<OriginatorType>(), Ok(OriginatorType::Alpha));
        assert_eq!(
            "numeric".parse::<OriginatorType>(),
            Ok(OriginatorType::Numeric)
        );
        assert!("shortcode".parse::<OriginatorType>().is_err());

        assert_eq!("utf-8".parse::<Charset>(), Ok(Charset::Utf8));
        assert_eq!(Charset::Iso88591.to_string(), "ISO-8859-1");
        assert!("latin9".parse::<Charset>().is_err());

        assert_eq!(MessageType::Unicode.as_str(), "unicode");
        assert_eq!(MessageType::Binary.to_string(), "binary");
    }
}
