pub mod limit;
pub mod notify;
pub mod parse;
pub mod query;
