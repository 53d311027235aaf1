pub mod credentials;

pub use credentials::{CredentialEntry, CredentialTable};
