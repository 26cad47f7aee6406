//! Patients of the signed-in psychologist. Deletes are soft on the server.

use care_core::entities::{Patient, PatientDraft, PatientPatch};

use crate::Resource;

impl Resource for Patient {
    type Draft = PatientDraft;
    type Patch = PatientPatch;

    const PATH: &'static str = "/api/psychologist/patients";
    const NOUN: &'static str = "patient";
    const PLURAL: &'static str = "patients";

    fn id(&self) -> &str {
        &self.id
    }
}
