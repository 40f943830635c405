use std::fs;
use std::path::Path;

use log::debug;

use super::PatientRegistry;
use crate::error::{CareError, Result};
use crate::model::Patient;

/// Session registry backed by a `Vec`. Does NOT persist data.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InMemoryRegistry {
    patients: Vec<Patient>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a JSON array of patient records.
    ///
    /// Each record is validated as it is deserialized, and two records sharing a
    /// name make the whole seed invalid.
    pub fn from_json(json: &str) -> Result<Self> {
        let seed: Vec<Patient> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for patient in seed {
            registry.add_patient(patient)?;
        }
        Ok(registry)
    }

    /// Reads a seed file written as a JSON array. The file is never written back.
    pub fn load_seed<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let registry = Self::from_json(&content)?;
        debug!(
            "seeded registry with {} patients from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.patients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}

impl PatientRegistry for InMemoryRegistry {
    fn has_patient(&self, patient: &Patient) -> bool {
        self.patients.iter().any(|p| p.is_same_patient(patient))
    }

    fn add_patient(&mut self, patient: Patient) -> Result<()> {
        if self.has_patient(&patient) {
            return Err(CareError::DuplicatePatient(patient.name.to_string()));
        }
        debug!("registry: adding {}", patient.name);
        self.patients.push(patient);
        Ok(())
    }

    fn patients(&self) -> &[Patient] {
        &self.patients
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Address, Email, Name, Phone};

    pub fn patient(name: &str) -> Patient {
        let name: Name = name.parse().expect("fixture name must be valid");
        let phone: Phone = "98765432".parse().expect("fixture phone");
        let email: Email = "patient@example.com".parse().expect("fixture email");
        let address: Address = "311, Clementi Ave 2, #02-25".parse().expect("fixture address");
        Patient::new(name, phone, email, address)
    }

    /// The record used throughout the add-command scenarios.
    pub fn john_doe() -> Patient {
        Patient {
            email: "johnd@example.com".parse().expect("fixture email"),
            ..patient("John Doe")
        }
    }

    pub struct RegistryFixture {
        pub registry: InMemoryRegistry,
    }

    impl Default for RegistryFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl RegistryFixture {
        pub fn new() -> Self {
            Self {
                registry: InMemoryRegistry::new(),
            }
        }

        pub fn with_patients(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Test Patient {}", i + 1);
                self.registry.add_patient(patient(&name)).unwrap();
            }
            self
        }

        pub fn with_patient(mut self, patient: Patient) -> Self {
            self.registry.add_patient(patient).unwrap();
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::{john_doe, patient, RegistryFixture};
    use super::*;
    use std::io::Write;

    #[test]
    fn new_registry_is_empty() {
        let registry = InMemoryRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.has_patient(&john_doe()));
    }

    #[test]
    fn add_then_has() {
        let mut registry = InMemoryRegistry::new();
        registry.add_patient(john_doe()).unwrap();
        assert!(registry.has_patient(&john_doe()));
        assert_eq!(registry.patients(), &[john_doe()]);
    }

    #[test]
    fn has_patient_matches_on_name() {
        let registry = RegistryFixture::new().with_patient(john_doe()).registry;
        let same_name = Patient {
            phone: "11112222".parse().unwrap(),
            ..john_doe()
        };
        assert!(registry.has_patient(&same_name));
        assert!(!registry.has_patient(&patient("Jane Doe")));
    }

    #[test]
    fn add_refuses_duplicate_names() {
        let mut registry = RegistryFixture::new().with_patient(john_doe()).registry;
        match registry.add_patient(john_doe()) {
            Err(CareError::DuplicatePatient(name)) => assert_eq!(name, "John Doe"),
            other => panic!("Expected DuplicatePatient, got {:?}", other),
        }
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn keeps_insertion_order() {
        let registry = RegistryFixture::new().with_patients(3).registry;
        let names: Vec<&str> = registry
            .patients()
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Test Patient 1", "Test Patient 2", "Test Patient 3"]
        );
    }

    #[test]
    fn from_json_seeds_registry() {
        let json = r#"[
            {"name": "Alice Pauline", "phone": "94351253", "email": "alice@example.com",
             "address": "123, Jurong West Ave 6, #08-111", "tags": ["friends"]},
            {"name": "Benson Meier", "phone": "98765432", "email": "johnd@example.com",
             "address": "311, Clementi Ave 2, #02-25", "last_visit": "2025-01-02",
             "medicines": ["Adderall"]}
        ]"#;
        let registry = InMemoryRegistry::from_json(json).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.patients()[1].medicines.len(), 1);
        assert!(registry.patients()[1].last_visit.is_some());
    }

    #[test]
    fn from_json_rejects_duplicate_seed() {
        let json = r#"[
            {"name": "Alice", "phone": "94351253", "email": "alice@example.com", "address": "A"},
            {"name": "Alice", "phone": "98765432", "email": "other@example.com", "address": "B"}
        ]"#;
        assert!(matches!(
            InMemoryRegistry::from_json(json),
            Err(CareError::DuplicatePatient(_))
        ));
    }

    #[test]
    fn from_json_rejects_invalid_records() {
        let json = r#"[{"name": "Alice", "phone": "x", "email": "alice@example.com", "address": "A"}]"#;
        assert!(matches!(
            InMemoryRegistry::from_json(json),
            Err(CareError::Serialization(_))
        ));
    }

    #[test]
    fn load_seed_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name": "Alice", "phone": "94351253", "email": "alice@example.com", "address": "A"}}]"#
        )
        .unwrap();

        let registry = InMemoryRegistry::load_seed(file.path()).unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn load_seed_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = InMemoryRegistry::load_seed(dir.path().join("missing.json"));
        assert!(matches!(result, Err(CareError::Io(_))));
    }
}
