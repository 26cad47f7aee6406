//! Organizations (tenants), admin-only.

use care_core::entities::{Organization, OrganizationDraft, OrganizationPatch};
use care_core::validation::ValidationErrors;

use crate::Resource;

impl Resource for Organization {
    type Draft = OrganizationDraft;
    type Patch = OrganizationPatch;

    const PATH: &'static str = "/api/admin/organizations";
    const NOUN: &'static str = "organization";
    const PLURAL: &'static str = "organizations";
    const CHECKS_PATCH: bool = true;

    fn id(&self) -> &str {
        &self.id
    }

    fn check_patch(current: &Self, patch: &OrganizationPatch) -> Result<(), ValidationErrors> {
        patch.check_seats(current)
    }
}

#[cfg(test)]
mod tests {
    use care_core::entities::OrganizationAdmin;
    use care_core::pagination::ListQuery;
    use chrono::{Days, Utc};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::ApiError;
    use crate::testing::{MockApi, MockRoute};

    use super::*;

    const PATH: &str = "/api/admin/organizations";

    fn draft() -> OrganizationDraft {
        let today = Utc::now().date_naive();
        OrganizationDraft {
            name: "Northside Counselling".into(),
            admin: OrganizationAdmin {
                name: "Ada Reyes".into(),
                email: "ada@northside.example".into(),
                phone: None,
            },
            subscription_start_date: Some(today),
            subscription_end_date: today.checked_add_days(Days::new(365)),
            total_seats: 10,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn list_sends_query_and_remaps_pagination() {
        let api = MockApi::start(vec![MockRoute::new("GET", PATH).json(&json!({
            "data": [{"_id": "o1", "name": "Northside", "totalSeats": 5, "usedSeats": 2}],
            "pagination": {"currentPage": 2, "totalPages": 3, "totalItems": 21, "itemsPerPage": 10}
        }))]);

        let query = ListQuery::default().page(2).search("north");
        let page = api.client().list::<Organization>(&query).await.unwrap();

        assert_eq!(page.items[0].id, "o1");
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.pagination.total, 21);
        let request = &api.requests()[0];
        let query = request.query.as_deref().unwrap_or_default();
        assert!(query.contains("page=2"));
        assert!(query.contains("search=north"));
        assert_eq!(request.authorization.as_deref(), Some("Bearer test-token"));
    }

    #[tokio::test]
    async fn create_posts_camel_case_body() {
        let api = MockApi::start(vec![MockRoute::new("POST", PATH).status(201).json(&json!({
            "message": "Organization registered",
            "data": {"_id": "o9", "name": "Northside Counselling", "totalSeats": 10}
        }))]);

        let created = api.client().create::<Organization>(&draft()).await.unwrap();

        assert_eq!(created.message, "Organization registered");
        assert_eq!(created.record.map(|o| o.id), Some("o9".to_string()));
        let body = api.requests()[0].json();
        assert_eq!(body["totalSeats"], 10);
        assert_eq!(body["admin"]["email"], "ada@northside.example");
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_the_server() {
        let api = MockApi::start(vec![]);
        let invalid = OrganizationDraft {
            total_seats: 0,
            ..draft()
        };

        let err = api.client().create::<Organization>(&invalid).await.unwrap_err();

        assert!(matches!(err, ApiError::Validation(ref e) if e.fields() == vec!["totalSeats"]));
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn failure_without_message_uses_fallback() {
        let api = MockApi::start(vec![MockRoute::new("GET", PATH).status(500).body("oops")]);
        let err = api
            .client()
            .list::<Organization>(&ListQuery::default())
            .await
            .unwrap_err();
        assert_eq!(err.notification(), "Failed to fetch organizations");
    }

    #[tokio::test]
    async fn delete_uses_default_message() {
        let api = MockApi::start(vec![MockRoute::new("DELETE", "/api/admin/organizations/o1")]);
        let deleted = api.client().delete::<Organization>("o1").await.unwrap();
        assert_eq!(deleted.message, "Organization deleted successfully");
        assert_eq!(api.count("DELETE", "/api/admin/organizations/o1"), 1);
    }

    #[test]
    fn seat_patch_is_checked_against_used_seats() {
        let current: Organization =
            serde_json::from_value(json!({"_id": "o1", "name": "N", "totalSeats": 10, "usedSeats": 7}))
                .unwrap();
        let patch = OrganizationPatch {
            total_seats: Some(5),
            ..Default::default()
        };
        let err = Organization::check_patch(&current, &patch).unwrap_err();
        assert_eq!(err.fields(), vec!["totalSeats"]);
    }
}
