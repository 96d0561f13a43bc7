//! ZoneProof DNS-01 challenge fulfillment
//!
//! This crate fulfills ACME DNS-01 challenges by publishing validation TXT
//! records through a cloud DNS provider, waiting for propagation, and tearing
//! the records down after validation. The provider is injected behind the
//! [`DnsProvider`] capability trait; `zp-designate` supplies the OpenStack
//! Designate implementation.

mod authenticator;
mod designate;
mod lifecycle;
mod propagation;
mod provider;
pub mod types;

pub use authenticator::Dns01Authenticator;
pub use lifecycle::{RecordKeeper, TrackedRecord, base_domain};
pub use propagation::PropagationWaiter;
pub use provider::{DnsProvider, ProviderError, Record, Zone};
pub use types::{AcmeError, AcmeResult, AuthenticatorConfig, Challenge, ResponseToken};

pub use zp_designate::{DesignateClient, DesignateConfig};
