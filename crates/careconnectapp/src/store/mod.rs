//! # Registry Layer
//!
//! The [`PatientRegistry`] trait is the capability set commands are written against:
//! ask whether a patient is already known, add a new one, and read the current list.
//! Commands receive a registry as a call-time argument and never hold on to it.
//!
//! ## Implementations
//!
//! - [`memory::InMemoryRegistry`]: the session registry. Keeps patients in insertion
//!   order and can be seeded from a JSON array of patient records. Nothing is ever
//!   written back to disk.
//!
//! ## Duplicate Policy
//!
//! What counts as a duplicate is the registry's decision, not the caller's. The
//! in-memory registry uses [`Patient::is_same_patient`], i.e. one record per name, and
//! refuses a duplicate insertion on its own even if the caller skipped the check.
//!
//! ## Concurrency
//!
//! Registries are plain `&mut` values. A check-then-insert sequence under one mutable
//! borrow cannot interleave with another writer; sharing a registry across threads
//! needs a lock around the whole registry.

use crate::error::Result;
use crate::model::Patient;

pub mod memory;

pub trait PatientRegistry {
    /// Whether a patient considered the same as `patient` is already registered.
    fn has_patient(&self, patient: &Patient) -> bool;

    /// Registers `patient`. The registry owns the record from here on.
    fn add_patient(&mut self, patient: Patient) -> Result<()>;

    /// All registered patients, in insertion order.
    fn patients(&self) -> &[Patient];
}
