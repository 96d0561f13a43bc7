use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::provider::ProviderError;

/// Opaque token the host returns to the ACME server once the validation
/// record is live. Computed by the host's ACME library from its account key;
/// this crate never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseToken(String);

impl ResponseToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One pending DNS-01 validation request.
///
/// Built by the host before `perform` is invoked, immutable during
/// fulfillment.
#[derive(Debug, Clone)]
pub struct Challenge {
    domain: String,
    validation_domain_name: String,
    validation: String,
    response: ResponseToken,
}

impl Challenge {
    pub fn new(
        domain: impl Into<String>,
        validation_domain_name: impl Into<String>,
        validation: impl Into<String>,
        response: ResponseToken,
    ) -> Self {
        Self {
            domain: domain.into(),
            validation_domain_name: validation_domain_name.into(),
            validation: validation.into(),
            response,
        }
    }

    /// Build a challenge with the standard `_acme-challenge.` validation name
    pub fn for_domain(domain: &str, validation: impl Into<String>, response: ResponseToken) -> Self {
        Self::new(
            domain,
            format!("_acme-challenge.{}", domain),
            validation,
            response,
        )
    }

    /// FQDN being validated
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Subdomain under which the TXT record must be published
    pub fn validation_domain_name(&self) -> &str {
        &self.validation_domain_name
    }

    /// Token string to publish as the TXT record value
    pub fn validation(&self) -> &str {
        &self.validation
    }

    pub fn response(&self) -> &ResponseToken {
        &self.response
    }
}

/// Configuration for the DNS-01 authenticator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatorConfig {
    /// Seconds to wait for DNS changes to propagate after record creation
    #[serde(default = "default_propagation_seconds")]
    pub propagation_seconds: u64,
    /// TTL for created TXT records
    #[serde(default = "default_ttl")]
    pub ttl: u32,
}

fn default_propagation_seconds() -> u64 {
    30
}

fn default_ttl() -> u32 {
    60
}

impl Default for AuthenticatorConfig {
    fn default() -> Self {
        Self {
            propagation_seconds: default_propagation_seconds(),
            ttl: default_ttl(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AcmeError {
    #[error("Credential setup failed: {0}")]
    Setup(ProviderError),

    #[error("Failed to resolve zone for {domain}: {source}")]
    ZoneResolution {
        domain: String,
        source: ProviderError,
    },

    #[error("Failed to create validation record {name}: {source}")]
    RecordCreation {
        name: String,
        source: ProviderError,
    },

    #[error("Failed to delete validation record {name}: {source}")]
    Cleanup {
        name: String,
        source: ProviderError,
    },
}

pub type AcmeResult<T> = Result<T, AcmeError>;
