//! # care-store
//!
//! State containers that sit between the console and [`care_api`].
//!
//! A [`ResourceStore`] holds one collection's current page, the selected
//! record, the status of the last request and the last error or success
//! message. Mutating methods take `&mut self`, so a store never has two
//! requests in flight.

mod dashboard;
mod resource_store;
mod status;

pub use dashboard::DashboardStore;
pub use resource_store::ResourceStore;
pub use status::RequestStatus;
