pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod router;
pub mod service;
pub mod types;

pub use error::HuntError;
pub use router::{HuntState, hunt_router};
pub use service::credentials::CredentialTable;
