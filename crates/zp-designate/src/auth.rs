//! Keystone v3 token issuance for Designate API access

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DesignateConfig;
use crate::error::{DesignateError, DesignateResult};

const SUBJECT_TOKEN_HEADER: &str = "X-Subject-Token";

#[derive(Debug, Serialize)]
struct AuthRequest<'a> {
    auth: Auth<'a>,
}

#[derive(Debug, Serialize)]
struct Auth<'a> {
    identity: Identity<'a>,
}

#[derive(Debug, Serialize)]
struct Identity<'a> {
    methods: Vec<&'a str>,
    application_credential: ApplicationCredential<'a>,
}

#[derive(Debug, Serialize)]
struct ApplicationCredential<'a> {
    id: &'a str,
    secret: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: TokenBody,
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    #[serde(default)]
    catalog: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(rename = "type")]
    service_type: String,
    #[serde(default)]
    endpoints: Vec<CatalogEndpoint>,
}

#[derive(Debug, Deserialize)]
struct CatalogEndpoint {
    interface: String,
    url: String,
    #[serde(default)]
    region: Option<String>,
}

/// Issued Keystone token plus the DNS endpoint advertised in the catalog
#[derive(Debug)]
pub(crate) struct IssuedToken {
    pub token: String,
    pub dns_endpoint: Option<String>,
}

/// Authenticate with an application credential and return the subject token.
pub(crate) async fn issue_token(
    http: &reqwest::Client,
    config: &DesignateConfig,
) -> DesignateResult<IssuedToken> {
    let url = format!("{}/auth/tokens", config.auth_url.trim_end_matches('/'));
    let request = AuthRequest {
        auth: Auth {
            identity: Identity {
                methods: vec!["application_credential"],
                application_credential: ApplicationCredential {
                    id: &config.application_credential_id,
                    secret: &config.application_credential_secret,
                },
            },
        },
    };

    debug!(auth_url = %url, "Requesting Keystone token");

    let resp = http
        .post(&url)
        .json(&request)
        .send()
        .await
        .map_err(|e| DesignateError::Network(e.to_string()))?;

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(DesignateError::Auth(format!(
            "Keystone returned {}: {}",
            status, body
        )));
    }

    let token = resp
        .headers()
        .get(SUBJECT_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .ok_or_else(|| {
            DesignateError::Auth("Keystone response missing X-Subject-Token header".to_string())
        })?;

    let body: TokenResponse = resp
        .json()
        .await
        .map_err(|e| DesignateError::Api(format!("Failed to parse token response: {}", e)))?;

    let dns_endpoint = dns_endpoint_from_catalog(&body.token.catalog, config.region.as_deref());

    Ok(IssuedToken { token, dns_endpoint })
}

/// Pick the public DNS endpoint out of the service catalog.
fn dns_endpoint_from_catalog(catalog: &[CatalogEntry], region: Option<&str>) -> Option<String> {
    catalog
        .iter()
        .filter(|entry| entry.service_type == "dns")
        .flat_map(|entry| entry.endpoints.iter())
        .find(|ep| {
            ep.interface == "public"
                && region.map_or(true, |r| ep.region.as_deref() == Some(r))
        })
        .map(|ep| ep.url.clone())
}
