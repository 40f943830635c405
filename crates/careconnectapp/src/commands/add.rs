use log::{debug, warn};

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{CareError, Result};
use crate::model::Patient;
use crate::store::PatientRegistry;

/// Adds a patient to the patient list.
///
/// Holds the record to insert and nothing else. Running the same command twice
/// against one registry fails the second time, since the first run registered the
/// very patient it is trying to add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    to_add: Patient,
}

impl AddCommand {
    pub const COMMAND_WORD: &'static str = "add";

    pub const MESSAGE_USAGE: &'static str = concat!(
        "add",
        ": Adds a patient to the CareConnect patient list. ",
        "\n",
        "Parameters: ",
        "n/NAME ",
        "p/PHONE ",
        "e/EMAIL ",
        "a/ADDRESS ",
        "[d/LAST_VISIT_DATE] ",
        "[t/TAG]... ",
        "[m/MEDICINE]... ",
        "\n",
        "Example: add ",
        "n/John Doe ",
        "p/98765432 ",
        "e/johnd@example.com ",
        "a/311, Clementi Ave 2, #02-25 ",
        "d/2025-03-25 ",
        "t/ASD ",
        "t/Dysphoria ",
        "m/Estrogen ",
        "m/Adderall",
    );

    pub const MESSAGE_SUCCESS: &'static str = "New patient added: ";

    pub const MESSAGE_DUPLICATE_PATIENT: &'static str = concat!(
        "A patient with the same name already ",
        "exists in the patient list. Multiple patients with the same name are currently not",
        " allowed in the list. Please kindly refer to our user guide for more details. ",
    );

    pub fn new(patient: Patient) -> Self {
        Self { to_add: patient }
    }

    /// The patient this command will register.
    pub fn patient(&self) -> &Patient {
        &self.to_add
    }

    pub fn execute(&self, registry: &mut dyn PatientRegistry) -> Result<CmdResult> {
        if registry.has_patient(&self.to_add) {
            warn!("rejected duplicate patient '{}'", self.to_add.name);
            return Err(CareError::Command(Self::MESSAGE_DUPLICATE_PATIENT.to_string()));
        }

        registry.add_patient(self.to_add.clone())?;
        debug!("added patient '{}'", self.to_add.name);

        let mut result = CmdResult::default().with_affected_patients(vec![self.to_add.clone()]);
        result.add_message(CmdMessage::success(format!(
            "{}{}",
            Self::MESSAGE_SUCCESS,
            self.to_add.name
        )));
        Ok(result)
    }
}

/// Builds an `AddCommand` from a record that may be missing.
///
/// Parsers that collect fields into an `Option<Patient>` use this to surface a
/// missing record as a contract violation rather than a user error.
impl TryFrom<Option<Patient>> for AddCommand {
    type Error = CareError;

    fn try_from(patient: Option<Patient>) -> Result<Self> {
        patient.map(Self::new).ok_or_else(|| {
            CareError::InvalidArgument("AddCommand requires a patient to add".to_string())
        })
    }
}
