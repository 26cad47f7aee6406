//! Store behavior against a mock backend.

use care_api::ApiError;
use care_api::testing::{MockApi, MockRoute};
use care_core::entities::{
    Organization, OrganizationAdmin, OrganizationDraft, OrganizationPatch, Patient, Psychologist,
};
use care_core::pagination::ListQuery;
use care_store::{RequestStatus, ResourceStore};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

const ORGS: &str = "/api/admin/organizations";
const PATIENTS: &str = "/api/psychologist/patients";

fn org_list() -> Value {
    json!({
        "data": [
            {"_id": "o1", "name": "Northside", "totalSeats": 10, "usedSeats": 7},
            {"_id": "o2", "name": "Harbour", "totalSeats": 4, "usedSeats": 1},
            {"_id": "o3", "name": "Westfield", "totalSeats": 6, "usedSeats": 6}
        ],
        "pagination": {"currentPage": 1, "totalPages": 2, "totalItems": 13, "itemsPerPage": 10}
    })
}

fn valid_draft() -> OrganizationDraft {
    OrganizationDraft {
        name: "Eastgate".into(),
        admin: OrganizationAdmin {
            name: "Ada Reyes".into(),
            email: "ada@eastgate.example".into(),
            phone: None,
        },
        total_seats: 3,
        ..Default::default()
    }
}

#[tokio::test]
async fn create_posts_once_then_refetches_once() {
    let api = MockApi::start(vec![
        MockRoute::new("POST", ORGS)
            .status(201)
            .json(&json!({"data": {"_id": "o4", "name": "Eastgate", "totalSeats": 3}})),
        MockRoute::new("GET", ORGS).json(&org_list()),
    ]);
    let query = ListQuery::with_limit(10).search("east");
    let mut store: ResourceStore<Organization> = ResourceStore::with_query(api.client(), query);

    let created = store.create(&valid_draft()).await.unwrap();

    assert_eq!(created.map(|o| o.id), Some("o4".to_string()));
    assert_eq!(api.count("POST", ORGS), 1);
    assert_eq!(api.count("GET", ORGS), 1);
    let refetch = &api.requests()[1];
    assert!(refetch.query.as_deref().unwrap_or_default().contains("search=east"));
    assert_eq!(store.success(), Some("Organization created successfully"));
    assert_eq!(store.items().len(), 3);
    assert_eq!(store.status(), RequestStatus::Fulfilled);
}

#[tokio::test]
async fn failed_request_after_create_drops_the_create_message() {
    let api = MockApi::start(vec![
        MockRoute::new("POST", ORGS)
            .status(201)
            .json(&json!({"data": {"_id": "o4", "name": "Eastgate", "totalSeats": 3}})),
        MockRoute::new("GET", ORGS).json(&org_list()),
        MockRoute::new("DELETE", "/api/admin/organizations/o1")
            .status(500)
            .json(&json!({"message": "boom"})),
    ]);
    let mut store: ResourceStore<Organization> = ResourceStore::new(api.client());
    store.create(&valid_draft()).await.unwrap();
    assert_eq!(store.success(), Some("Organization created successfully"));

    assert!(store.delete("o1").await.is_err());

    assert!(store.success().is_none());
    assert_eq!(store.error(), Some("boom"));
    assert_eq!(store.status(), RequestStatus::Rejected);
    assert_eq!(store.items().len(), 3);
}

#[tokio::test]
async fn invalid_create_sends_nothing() {
    let api = MockApi::start(vec![]);
    let mut store: ResourceStore<Organization> = ResourceStore::new(api.client());
    let draft = OrganizationDraft {
        admin: OrganizationAdmin {
            email: "not-an-email".into(),
            ..valid_draft().admin
        },
        ..valid_draft()
    };

    let err = store.create(&draft).await.unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert!(api.requests().is_empty());
    assert_eq!(store.status(), RequestStatus::Rejected);
    assert!(store.error().unwrap_or_default().contains("admin.email"));
}

#[tokio::test]
async fn delete_removes_exactly_that_record() {
    let api = MockApi::start(vec![
        MockRoute::new("GET", ORGS).json(&org_list()),
        MockRoute::new("GET", "/api/admin/organizations/o2")
            .json(&json!({"data": {"_id": "o2", "name": "Harbour"}})),
        MockRoute::new("DELETE", "/api/admin/organizations/o2").json(&json!({"message": "Removed"})),
    ]);
    let mut store: ResourceStore<Organization> = ResourceStore::new(api.client());
    store.fetch(ListQuery::default()).await.unwrap();
    store.fetch_one("o2").await.unwrap();
    assert!(store.selected().is_some());

    store.delete("o2").await.unwrap();

    let ids: Vec<&str> = store.items().iter().map(|o| o.id.as_str()).collect();
    assert_eq!(ids, vec!["o1", "o3"]);
    assert_eq!(store.pagination().total, 12);
    assert_eq!(store.pagination().pages, 2);
    assert!(store.selected().is_none());
    assert_eq!(store.success(), Some("Removed"));
    assert_eq!(api.count("GET", ORGS), 1);
}

#[tokio::test]
async fn rejected_fetch_keeps_items() {
    let api = MockApi::start(vec![
        MockRoute::new("GET", ORGS).json(&org_list()).once(),
        MockRoute::new("GET", ORGS)
            .status(500)
            .json(&json!({"error": "Database unavailable"})),
    ]);
    let mut store: ResourceStore<Organization> = ResourceStore::new(api.client());
    store.fetch(ListQuery::default()).await.unwrap();

    let err = store.fetch(ListQuery::default().page(2)).await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(store.error(), Some("Database unavailable"));
    assert_eq!(store.items().len(), 3);
    assert_eq!(store.query().page, 1);
}

#[tokio::test]
async fn update_replaces_record_in_place() {
    let api = MockApi::start(vec![
        MockRoute::new("GET", PATIENTS).json(&json!({"data": [
            {"_id": "a", "name": "Sam"},
            {"_id": "b", "name": "Lee"}
        ]})),
        MockRoute::new("PUT", "/api/psychologist/patients/b")
            .json(&json!({"data": {"_id": "b", "name": "Lee Park"}})),
    ]);
    let mut store: ResourceStore<Patient> = ResourceStore::new(api.client());
    store.fetch(ListQuery::default()).await.unwrap();

    let patch = care_core::entities::PatientPatch {
        name: Some("Lee Park".into()),
        ..Default::default()
    };
    store.update("b", &patch).await.unwrap();

    let names: Vec<&str> = store.items().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Sam", "Lee Park"]);
    assert_eq!(store.success(), Some("Patient updated successfully"));
}

#[tokio::test]
async fn seat_total_below_usage_is_refused_locally() {
    let api = MockApi::start(vec![MockRoute::new("GET", ORGS).json(&org_list())]);
    let mut store: ResourceStore<Organization> = ResourceStore::new(api.client());
    store.fetch(ListQuery::default()).await.unwrap();

    let patch = OrganizationPatch {
        total_seats: Some(5),
        ..Default::default()
    };
    let err = store.update("o1", &patch).await.unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(api.count("PUT", "/api/admin/organizations/o1"), 0);
}

#[tokio::test]
async fn deactivate_updates_listed_psychologist() {
    let api = MockApi::start(vec![
        MockRoute::new("GET", "/api/admin/individuals").json(&json!({"data": [
            {"_id": "p1", "name": "Dr. Okafor", "isActive": true}
        ]})),
        MockRoute::new("PATCH", "/api/admin/individuals/p1/status").json(&json!({"message": "Status changed"})),
    ]);
    let mut store: ResourceStore<Psychologist> = ResourceStore::new(api.client());
    store.fetch(ListQuery::default()).await.unwrap();

    let updated = store.set_active("p1", false).await.unwrap();

    assert!(!updated.is_active);
    assert!(!store.items()[0].is_active);
    assert_eq!(store.success(), Some("Status changed"));
}

#[tokio::test]
async fn clear_messages_resets_both() {
    let api = MockApi::start(vec![MockRoute::new("GET", ORGS).status(401)]);
    let mut store: ResourceStore<Organization> = ResourceStore::new(api.client());
    assert!(store.fetch(ListQuery::default()).await.is_err());
    assert_eq!(store.error(), Some("Failed to fetch organizations"));

    store.clear_messages();
    assert!(store.error().is_none());
    assert!(store.success().is_none());
}
