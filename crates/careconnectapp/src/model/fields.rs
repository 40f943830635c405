//! Validated patient fields.
//!
//! Every field a [`Patient`](super::Patient) carries is a newtype that can only be
//! built through validation: `FromStr`, `TryFrom<String>` and serde deserialization
//! all run the same check, so a record read from a seed file obeys the same rules as
//! one typed on the command line.
//!
//! | Field | Rule |
//! |-------|------|
//! | [`Name`] | Alphanumerics and spaces, must not be blank or start with a space |
//! | [`Phone`] | Digits only, at least 3 of them |
//! | [`Email`] | `local-part@domain` (see [`validate_email`]) |
//! | [`Address`] | Anything, as long as it does not start with whitespace |
//! | [`LastVisit`] | ISO date, `YYYY-MM-DD` |
//! | [`Tag`] | Alphanumerics only |
//! | [`Medicine`] | Alphanumerics, spaces and hyphens |

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CareError, Result};

const MIN_PHONE_DIGITS: usize = 3;
const EMAIL_SPECIAL_CHARS: &[char] = &['+', '_', '.', '-'];

/// Shared conversions for the string-backed field newtypes.
macro_rules! string_field {
    ($ty:ident, $validate:path) => {
        impl $ty {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $ty {
            type Err = CareError;

            fn from_str(s: &str) -> Result<Self> {
                $validate(s)?;
                Ok(Self(s.to_string()))
            }
        }

        impl TryFrom<String> for $ty {
            type Error = CareError;

            fn try_from(value: String) -> Result<Self> {
                $validate(&value)?;
                Ok(Self(value))
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);
string_field!(Name, validate_name);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);
string_field!(Phone, validate_phone);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);
string_field!(Email, validate_email);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);
string_field!(Address, validate_address);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);
string_field!(Tag, validate_tag);

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Medicine(String);
string_field!(Medicine, validate_medicine);

/// Date of the patient's most recent visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LastVisit(NaiveDate);

impl LastVisit {
    pub const FORMAT: &'static str = "%Y-%m-%d";

    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl FromStr for LastVisit {
    type Err = CareError;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s.trim(), Self::FORMAT)
            .map(Self)
            .map_err(|e| {
                CareError::validation("last visit date", format!("'{}' is not YYYY-MM-DD ({})", s, e))
            })
    }
}

impl fmt::Display for LastVisit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

pub fn validate_name(value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CareError::validation("name", "cannot be blank"));
    }
    if value.starts_with(char::is_whitespace) {
        return Err(CareError::validation("name", "cannot start with a space"));
    }
    if let Some(ch) = value
        .chars()
        .find(|ch| !(ch.is_alphanumeric() || *ch == ' '))
    {
        return Err(CareError::validation(
            "name",
            format!("should only contain alphanumeric characters and spaces, found '{}'", ch),
        ));
    }
    Ok(())
}

pub fn validate_phone(value: &str) -> Result<()> {
    if !value.chars().all(|ch| ch.is_ascii_digit()) {
        return Err(CareError::validation("phone", "should only contain digits"));
    }
    if value.len() < MIN_PHONE_DIGITS {
        return Err(CareError::validation(
            "phone",
            format!("should be at least {} digits long", MIN_PHONE_DIGITS),
        ));
    }
    Ok(())
}

/// Validates an email address of the form `local-part@domain`.
///
/// - The local part holds alphanumerics and `+ _ . -`, and may not start or end
///   with one of those special characters.
/// - The domain is one or more labels separated by `.`. Each label is alphanumeric,
///   may contain inner hyphens, and the last label is at least two characters long.
pub fn validate_email(value: &str) -> Result<()> {
    let (local, domain) = value
        .split_once('@')
        .ok_or_else(|| CareError::validation("email", "must be of the form local-part@domain"))?;

    if local.is_empty() {
        return Err(CareError::validation("email", "local part cannot be empty"));
    }
    if local.starts_with(EMAIL_SPECIAL_CHARS) || local.ends_with(EMAIL_SPECIAL_CHARS) {
        return Err(CareError::validation(
            "email",
            "local part cannot start or end with a special character",
        ));
    }
    if let Some(ch) = local
        .chars()
        .find(|ch| !(ch.is_ascii_alphanumeric() || EMAIL_SPECIAL_CHARS.contains(ch)))
    {
        return Err(CareError::validation(
            "email",
            format!("local part contains invalid character '{}'", ch),
        ));
    }

    let labels: Vec<&str> = domain.split('.').collect();
    for label in &labels {
        if label.is_empty() || label.starts_with('-') || label.ends_with('-') {
            return Err(CareError::validation(
                "email",
                format!("domain '{}' has an invalid label", domain),
            ));
        }
        if !label.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-') {
            return Err(CareError::validation(
                "email",
                format!("domain '{}' contains invalid characters", domain),
            ));
        }
    }
    match labels.last() {
        Some(last) if last.len() >= 2 => Ok(()),
        _ => Err(CareError::validation(
            "email",
            "domain must end with a label of at least 2 characters",
        )),
    }
}

pub fn validate_address(value: &str) -> Result<()> {
    if value.is_empty() || value.starts_with(char::is_whitespace) {
        return Err(CareError::validation(
            "address",
            "can take any value but cannot be blank or start with whitespace",
        ));
    }
    Ok(())
}

pub fn validate_tag(value: &str) -> Result<()> {
    if value.is_empty() || !value.chars().all(char::is_alphanumeric) {
        return Err(CareError::validation(
            "tag",
            format!("'{}' should be alphanumeric", value),
        ));
    }
    Ok(())
}

pub fn validate_medicine(value: &str) -> Result<()> {
    if value.trim().is_empty() || value.starts_with(char::is_whitespace) {
        return Err(CareError::validation("medicine", "cannot be blank"));
    }
    if !value
        .chars()
        .all(|ch| ch.is_alphanumeric() || ch == ' ' || ch == '-')
    {
        return Err(CareError::validation(
            "medicine",
            format!(
                "'{}' should only contain alphanumeric characters, spaces and hyphens",
                value
            ),
        ));
    }
    Ok(())
}
