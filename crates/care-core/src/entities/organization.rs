use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::SubscriptionStatus;
use crate::{record_id, server_dates};
use crate::validation::{Validate, ValidationErrors, Validator};

/// The person administering a tenant.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationAdmin {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// A tenant with its subscription window and seat counts.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(
        flatten,
        deserialize_with = "record_id::deserialize",
        serialize_with = "record_id::serialize"
    )]
    #[schemars(with = "record_id::IdKey")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub admin: Option<OrganizationAdmin>,
    #[serde(default)]
    pub subscription_status: SubscriptionStatus,
    #[serde(default, deserialize_with = "server_dates::option_datetime")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub subscription_start_date: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "server_dates::option_datetime")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub subscription_end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_seats: u32,
    #[serde(default)]
    pub used_seats: u32,
    #[serde(default, deserialize_with = "server_dates::option_datetime")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "server_dates::option_datetime")]
    #[schemars(with = "Option<DateTime<Utc>>")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Organization {
    /// Seats still free. Over-allocated organizations report zero.
    #[must_use]
    pub const fn available_seats(&self) -> u32 {
        self.total_seats.saturating_sub(self.used_seats)
    }

    /// Status shown to operators: a subscription whose end date has passed
    /// reads `expired` whatever the stored status says.
    #[must_use]
    pub fn display_status(&self, now: DateTime<Utc>) -> SubscriptionStatus {
        match self.subscription_end_date {
            Some(end) if end < now => SubscriptionStatus::Expired,
            _ => self.subscription_status,
        }
    }

    /// Days until the subscription ends; negative once it has ended.
    #[must_use]
    pub fn days_remaining(&self, now: DateTime<Utc>) -> Option<i64> {
        self.subscription_end_date
            .map(|end| end.signed_duration_since(now).num_days())
    }
}

/// Payload for creating an organization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationDraft {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub admin: OrganizationAdmin,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<SubscriptionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_end_date: Option<NaiveDate>,
    pub total_seats: u32,
}

impl Validate for OrganizationDraft {
    fn validate(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        Validator::new()
            .required("name", &self.name)
            .optional_email("email", self.email.as_deref())
            .required("admin.name", &self.admin.name)
            .email("admin.email", &self.admin.email)
            .at_least("totalSeats", self.total_seats, 1)
            .date_not_in_past("subscriptionEndDate", self.subscription_end_date, today)
            .date_not_before(
                "subscriptionEndDate",
                self.subscription_end_date,
                self.subscription_start_date,
                "subscriptionStartDate",
            )
            .finish()
    }
}

/// Partial update for an organization. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<OrganizationAdmin>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_status: Option<SubscriptionStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_start_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_seats: Option<u32>,
}

impl OrganizationPatch {
    /// Seat totals cannot shrink below the seats already in use.
    ///
    /// # Errors
    ///
    /// Returns a `totalSeats` error when the new total is below
    /// `current.used_seats`.
    pub fn check_seats(&self, current: &Organization) -> Result<(), ValidationErrors> {
        let mut validator = Validator::new();
        if let Some(total) = self.total_seats
            && total < current.used_seats
        {
            validator.fail(
                "totalSeats",
                format!("cannot be below the {} seats in use", current.used_seats),
            );
        }
        validator.finish()
    }
}

impl Validate for OrganizationPatch {
    fn validate(&self, today: NaiveDate) -> Result<(), ValidationErrors> {
        let mut validator = Validator::new();
        validator
            .not_blank("name", self.name.as_deref())
            .optional_email("email", self.email.as_deref())
            .date_not_in_past("subscriptionEndDate", self.subscription_end_date, today)
            .date_not_before(
                "subscriptionEndDate",
                self.subscription_end_date,
                self.subscription_start_date,
                "subscriptionStartDate",
            );
        if let Some(admin) = &self.admin {
            validator
                .required("admin.name", &admin.name)
                .email("admin.email", &admin.email);
        }
        if let Some(total) = self.total_seats {
            validator.at_least("totalSeats", total, 1);
        }
        validator.finish()
    }
}
