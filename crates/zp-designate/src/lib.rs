//! OpenStack Designate DNS API client
//!
//! Thin client for the subset of the Designate v2 API that DNS-01 challenge
//! fulfillment needs: Keystone application-credential authentication, zone
//! lookup by name, recordset creation and deletion.

mod auth;
mod client;
mod config;
mod error;

pub use client::{DesignateClient, Recordset, Zone};
pub use config::DesignateConfig;
pub use error::{DesignateError, DesignateResult};
