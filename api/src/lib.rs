//! This crate contains the data model and http client for the wash history service.

pub mod config;
pub mod error;
pub mod model;
pub mod subject_id;
pub mod wash_history;

pub use config::ApiConfig;
pub use error::FetchError;
pub use model::Location;
pub use model::PageRequest;
pub use model::PageResult;
pub use model::Vehicle;
pub use model::WashRecord;
pub use subject_id::SubjectId;
pub use wash_history::RestWashHistory;
pub use wash_history::WashHistorySource;
