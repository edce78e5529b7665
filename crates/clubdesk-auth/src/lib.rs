//! Credentials and token minting for the club management API
//!
//! Holds the persisted session state (access token, refresh token, cached
//! member profile) and the raw token-refresh endpoint call. This crate is a
//! standalone library with no dependency on the gateway or the CLI — it can
//! be tested and used independently.
//!
//! Session flow:
//! 1. The login flow stores both tokens via [`CredentialStore::store_login`]
//! 2. The login flow derives a [`Profile`] and stores it via
//!    [`CredentialStore::store_profile`]
//! 3. The request gateway mints a new access token via
//!    [`refresh_access_token`] when the old one expires and saves it via
//!    [`CredentialStore::store_access_token`]
//! 4. Forced logout and user sign-out both go through
//!    [`CredentialStore::clear`]
//!
//! Write discipline: only the gateway writes tokens after login; only the
//! login flow writes the profile. This is a convention shared with the
//! callers, not something the store enforces.

pub mod credentials;
pub mod error;
pub mod profile;
pub mod token;

pub use credentials::CredentialStore;
pub use error::{Error, Result};
pub use profile::Profile;
pub use token::{REFRESH_PATH, RefreshResponse, refresh_access_token};
