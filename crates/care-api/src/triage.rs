//! Triage records and the diagnosis reference list.

use care_core::entities::{Diagnosis, DiagnosisMatch, Triage, TriageDraft, TriagePatch};
use care_core::matching::match_symptoms;
use reqwest::Method;

use crate::http::decode_single;
use crate::{ApiClient, ApiError, Resource};

const DIAGNOSES_PATH: &str = "/api/psychologist/triage/diagnoses";

impl Resource for Triage {
    type Draft = TriageDraft;
    type Patch = TriagePatch;

    const PATH: &'static str = "/api/psychologist/triage";
    const NOUN: &'static str = "triage";
    const PLURAL: &'static str = "triages";

    fn id(&self) -> &str {
        &self.id
    }
}

impl ApiClient {
    /// The diagnosis reference list, wrapped in `{ data }` or bare.
    ///
    /// # Errors
    ///
    /// Transport, status, or body-shape errors.
    pub async fn diagnoses(&self) -> Result<Vec<Diagnosis>, ApiError> {
        let value = self
            .send(Method::GET, DIAGNOSES_PATH, &[], None, "Failed to fetch diagnoses")
            .await?;
        decode_single(value)
    }

    /// Score the diagnosis list against `symptoms`, best match first.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::diagnoses`].
    pub async fn suggest_diagnoses(
        &self,
        symptoms: &[String],
    ) -> Result<Vec<DiagnosisMatch>, ApiError> {
        let diagnoses = self.diagnoses().await?;
        tracing::debug!(
            diagnoses = diagnoses.len(),
            symptoms = symptoms.len(),
            "matching symptoms"
        );
        Ok(match_symptoms(symptoms, &diagnoses))
    }
}
