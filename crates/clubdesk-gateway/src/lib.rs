//! Authenticated request gateway for the club management API
//!
//! Every API call goes through [`Gateway::execute`]: it attaches the bearer
//! token from the credential store, interprets 403 as an expired access
//! token (one refresh, one retry), interprets 401 as a dead session (forced
//! logout unless the caller suppresses it), and collapses every failure
//! into a single [`GatewayError`] so callers only ever display a message
//! and abort the operation in progress.

pub mod error;
pub mod gateway;
pub mod navigator;

pub use error::{GatewayError, Result};
pub use gateway::{Gateway, RequestOptions};
pub use navigator::{Navigator, NoopNavigator};
