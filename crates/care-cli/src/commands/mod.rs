pub mod auth;
pub mod company;
pub mod dispatch;
pub mod org;
pub mod patient;
pub mod psychologist;
pub mod schema;
pub mod shared;
pub mod triage;
