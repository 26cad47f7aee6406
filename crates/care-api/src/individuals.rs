//! Psychologist accounts, served by the admin API as "individuals".

use care_core::entities::{Psychologist, PsychologistDraft, PsychologistPatch};
use reqwest::Method;
use serde_json::json;

use crate::resource::{decode_mutation, item_path};
use crate::{ApiClient, ApiError, Mutation, Resource};

impl Resource for Psychologist {
    type Draft = PsychologistDraft;
    type Patch = PsychologistPatch;

    const PATH: &'static str = "/api/admin/individuals";
    const NOUN: &'static str = "psychologist";
    const PLURAL: &'static str = "psychologists";

    fn id(&self) -> &str {
        &self.id
    }
}

impl ApiClient {
    /// `PATCH /api/admin/individuals/{id}/status` with `{ isActive }`.
    ///
    /// # Errors
    ///
    /// Transport or status errors.
    pub async fn set_psychologist_active(
        &self,
        id: &str,
        active: bool,
    ) -> Result<Mutation<Psychologist>, ApiError> {
        let path = format!("{}/status", item_path(Psychologist::PATH, id));
        let fallback = "Failed to update psychologist status";
        let value = self
            .send(
                Method::PATCH,
                &path,
                &[],
                Some(json!({ "isActive": active })),
                fallback,
            )
            .await?;
        let verb = if active { "activated" } else { "deactivated" };
        Ok(decode_mutation(
            value,
            format!("Psychologist {verb} successfully"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::testing::{MockApi, MockRoute};

    #[tokio::test]
    async fn deactivate_patches_status() {
        let api = MockApi::start(vec![
            MockRoute::new("PATCH", "/api/admin/individuals/p1/status").json(&json!({
                "data": {"_id": "p1", "name": "Dr. Okafor", "isActive": false}
            })),
        ]);

        let result = api.client().set_psychologist_active("p1", false).await.unwrap();

        assert_eq!(result.message, "Psychologist deactivated successfully");
        assert_eq!(result.record.map(|p| p.is_active), Some(false));
        assert_eq!(api.requests()[0].json(), json!({"isActive": false}));
    }

    #[tokio::test]
    async fn nested_error_message_is_surfaced() {
        let api = MockApi::start(vec![
            MockRoute::new("PATCH", "/api/admin/individuals/p1/status")
                .status(409)
                .json(&json!({"error": {"message": "No seats available"}})),
        ]);

        let err = api.client().set_psychologist_active("p1", true).await.unwrap_err();
        assert_eq!(err.notification(), "No seats available");
        assert_eq!(err.status(), Some(409));
    }
}
