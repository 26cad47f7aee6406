use care_api::{ApiClient, ApiError};
use care_core::entities::CompanyDashboard;

use crate::RequestStatus;

/// Company dashboard with the same status/error contract as
/// [`crate::ResourceStore`].
#[derive(Debug)]
pub struct DashboardStore {
    client: ApiClient,
    dashboard: Option<CompanyDashboard>,
    status: RequestStatus,
    error: Option<String>,
}

impl DashboardStore {
    #[must_use]
    pub const fn new(client: ApiClient) -> Self {
        Self {
            client,
            dashboard: None,
            status: RequestStatus::Idle,
            error: None,
        }
    }

    #[must_use]
    pub const fn dashboard(&self) -> Option<&CompanyDashboard> {
        self.dashboard.as_ref()
    }

    #[must_use]
    pub const fn status(&self) -> RequestStatus {
        self.status
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Load the dashboard. A failure keeps the previous one.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] after recording its message.
    pub async fn fetch(&mut self) -> Result<&CompanyDashboard, ApiError> {
        self.status = RequestStatus::Pending;
        self.error = None;
        match self.client.company_dashboard().await {
            Ok(dashboard) => {
                self.status = RequestStatus::Fulfilled;
                Ok(self.dashboard.insert(dashboard))
            }
            Err(e) => {
                self.status = RequestStatus::Rejected;
                self.error = Some(e.notification());
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use care_api::testing::{MockApi, MockRoute};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn failed_reload_keeps_previous_dashboard() {
        let api = MockApi::start(vec![
            MockRoute::new("GET", "/api/company/details")
                .json(&json!({"summary": {"totalPatients": 12}}))
                .once(),
            MockRoute::new("GET", "/api/company/details")
                .status(403)
                .json(&json!({"message": "Company admins only"})),
        ]);
        let mut store = DashboardStore::new(api.client());
        store.fetch().await.unwrap();
        assert_eq!(store.dashboard().map(|d| d.summary.total_patients), Some(12));

        assert!(store.fetch().await.is_err());

        assert_eq!(store.status(), RequestStatus::Rejected);
        assert_eq!(store.error(), Some("Company admins only"));
        assert_eq!(store.dashboard().map(|d| d.summary.total_patients), Some(12));
    }
}
