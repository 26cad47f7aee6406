//! Company-admin dashboard.

use care_core::entities::CompanyDashboard;
use reqwest::Method;

use crate::http::decode_single;
use crate::{ApiClient, ApiError};

const COMPANY_DETAILS_PATH: &str = "/api/company/details";

impl ApiClient {
    /// # Errors
    ///
    /// Transport, status, or body-shape errors.
    pub async fn company_dashboard(&self) -> Result<CompanyDashboard, ApiError> {
        let value = self
            .send(
                Method::GET,
                COMPANY_DETAILS_PATH,
                &[],
                None,
                "Failed to fetch company details",
            )
            .await?;
        decode_single(value)
    }
}
