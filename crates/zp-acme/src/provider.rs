use async_trait::async_trait;
use thiserror::Error;

/// DNS zone as known to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    /// Provider-assigned opaque identifier
    pub id: String,
    /// Zone name, trailing-dot-qualified
    pub name: String,
}

/// DNS record as known to the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Provider-assigned opaque identifier
    pub id: String,
    /// Record name, trailing-dot-qualified
    pub name: String,
    pub record_type: String,
    pub values: Vec<String>,
    pub ttl: u32,
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider authentication failed: {0}")]
    Auth(String),

    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Rate limited by provider: {0}")]
    RateLimited(String),

    #[error("Provider API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Capability interface the authenticator needs from a DNS provider.
///
/// A real implementation talks to a DNS management API; tests inject a mock.
/// Every call is live, no caching or retries happen at this seam.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    /// Look up the authoritative zone named `name` (trailing-dot-qualified).
    async fn resolve_zone(&self, name: &str) -> Result<Zone, ProviderError>;

    /// Create a TXT record in the given zone and return its identity.
    async fn create_txt_record(
        &self,
        zone_id: &str,
        name: &str,
        values: &[String],
        ttl: u32,
    ) -> Result<Record, ProviderError>;

    /// Delete a record by identity.
    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<(), ProviderError>;
}
