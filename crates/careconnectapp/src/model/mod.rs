//! # Domain Model
//!
//! A [`Patient`] is the only record the registry holds. Its fields are validated
//! newtypes (see [`fields`]), so a `Patient` value is always well formed: building one
//! from raw strings is the job of whoever parses user input, and by the time a
//! `Patient` reaches a command there is nothing left to check but identity.
//!
//! ## Two Notions of Equality
//!
//! - **Structural** (`==`): every field matches. Used when comparing commands and in
//!   tests.
//! - **Identity** ([`Patient::is_same_patient`]): the names match. This is what the
//!   registry uses to decide whether a patient is a duplicate; the clinic keeps one
//!   record per name.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod fields;

pub use fields::{Address, Email, LastVisit, Medicine, Name, Phone, Tag};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<LastVisit>,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    #[serde(default)]
    pub medicines: BTreeSet<Medicine>,
}

impl Patient {
    pub fn new(name: Name, phone: Phone, email: Email, address: Address) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            last_visit: None,
            tags: BTreeSet::new(),
            medicines: BTreeSet::new(),
        }
    }

    pub fn with_last_visit(mut self, last_visit: LastVisit) -> Self {
        self.last_visit = Some(last_visit);
        self
    }

    pub fn with_tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags.extend(tags);
        self
    }

    pub fn with_medicines(mut self, medicines: impl IntoIterator<Item = Medicine>) -> Self {
        self.medicines.extend(medicines);
        self
    }

    /// True when both records describe the same person, i.e. share a name.
    pub fn is_same_patient(&self, other: &Patient) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Patient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if let Some(visit) = &self.last_visit {
            write!(f, "; Last visit: {}", visit)?;
        }
        write!(f, "; Tags: [{}]", join(&self.tags))?;
        write!(f, "; Medicines: [{}]", join(&self.medicines))
    }
}

fn join<T: AsRef<str>>(items: &BTreeSet<T>) -> String {
    items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn john() -> Patient {
        Patient::new(
            "John Doe".parse().unwrap(),
            "98765432".parse().unwrap(),
            "johnd@example.com".parse().unwrap(),
            "311, Clementi Ave 2, #02-25".parse().unwrap(),
        )
    }

    #[test]
    fn same_patient_compares_names_only() {
        let a = john();
        let b = Patient {
            phone: "11111111".parse().unwrap(),
            ..john()
        };
        assert!(a.is_same_patient(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn different_names_are_different_patients() {
        let a = john();
        let b = Patient {
            name: "Jane Doe".parse().unwrap(),
            ..john()
        };
        assert!(!a.is_same_patient(&b));
    }

    #[test]
    fn display_lists_all_fields() {
        let patient = john()
            .with_last_visit("2025-03-25".parse().unwrap())
            .with_tags(["ASD".parse().unwrap(), "Dysphoria".parse().unwrap()])
            .with_medicines(["Estrogen".parse().unwrap()]);

        assert_eq!(
            patient.to_string(),
            "John Doe; Phone: 98765432; Email: johnd@example.com; \
             Address: 311, Clementi Ave 2, #02-25; Last visit: 2025-03-25; \
             Tags: [ASD, Dysphoria]; Medicines: [Estrogen]"
        );
    }

    #[test]
    fn display_omits_missing_last_visit() {
        let shown = john().to_string();
        assert!(!shown.contains("Last visit"));
        assert!(shown.ends_with("Tags: []; Medicines: []"));
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let json = r#"{
            "name": "John Doe",
            "phone": "98765432",
            "email": "johnd@example.com",
            "address": "311, Clementi Ave 2, #02-25"
        }"#;
        let patient: Patient = serde_json::from_str(json).unwrap();
        assert_eq!(patient, john());
    }

    #[test]
    fn deserialization_rejects_invalid_fields() {
        let json = r#"{
            "name": "John Doe",
            "phone": "12",
            "email": "johnd@example.com",
            "address": "311, Clementi Ave 2, #02-25"
        }"#;
        assert!(serde_json::from_str::<Patient>(json).is_err());
    }
}
