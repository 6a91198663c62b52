//! Admin login.
//!
//! - [`credentials`]: the `login` / `auth` header pair sent with every
//!   admin request
//! - [`login`]: the check against the API that gates the dashboard

pub mod credentials;
pub mod login;

pub use credentials::AdminCredentials;
pub use login::verify_credentials;
