use serde::{Deserialize, Serialize};

/// Connection settings for the OpenStack Designate DNS service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignateConfig {
    /// Keystone identity endpoint (e.g. "https://keystone.example.org/v3")
    pub auth_url: String,
    /// Application credential ID used to authenticate
    pub application_credential_id: String,
    /// Application credential secret
    pub application_credential_secret: String,
    /// Region whose DNS endpoint to use; first catalog match wins when unset
    #[serde(default)]
    pub region: Option<String>,
    /// Explicit Designate endpoint, overriding service catalog discovery
    #[serde(default)]
    pub dns_endpoint: Option<String>,
}
