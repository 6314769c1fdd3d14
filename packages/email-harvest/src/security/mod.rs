pub mod credentials;

pub use credentials::{AICredentials, SecretString};
