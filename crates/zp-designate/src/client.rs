//! Designate v2 zone and recordset operations

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::auth;
use crate::config::DesignateConfig;
use crate::error::{DesignateError, DesignateResult};

const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";

/// DNS zone as returned by the Designate API
#[derive(Debug, Clone, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

/// Recordset as returned by the Designate API
#[derive(Debug, Clone, Deserialize)]
pub struct Recordset {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub ttl: Option<u32>,
    #[serde(default)]
    pub records: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ZoneList {
    #[serde(default)]
    zones: Vec<Zone>,
}

#[derive(Debug, Serialize)]
struct CreateRecordsetRequest<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    record_type: &'a str,
    ttl: u32,
    records: &'a [String],
}

/// Authenticated client for the Designate v2 API
pub struct DesignateClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl DesignateClient {
    /// Authenticate against Keystone and bind to the Designate endpoint.
    ///
    /// Fails before any DNS operation if the credentials are rejected or no
    /// DNS endpoint can be determined.
    pub async fn connect(config: &DesignateConfig) -> DesignateResult<Self> {
        let http = reqwest::Client::new();
        let issued = auth::issue_token(&http, config).await?;

        let endpoint = config
            .dns_endpoint
            .clone()
            .or(issued.dns_endpoint)
            .ok_or_else(|| {
                DesignateError::Auth(
                    "No DNS endpoint in service catalog and none configured".to_string(),
                )
            })?;

        let client = Self {
            http,
            endpoint: normalize_endpoint(&endpoint),
            token: issued.token,
        };
        info!(endpoint = %client.endpoint, "Connected to Designate");
        Ok(client)
    }

    /// Look up a zone by its fully qualified name
    pub async fn get_zone(&self, name: &str) -> DesignateResult<Zone> {
        let url = format!("{}/zones", self.endpoint);

        debug!(zone = name, "Looking up zone");

        let resp = self
            .http
            .get(&url)
            .header(AUTH_TOKEN_HEADER, &self.token)
            .query(&[("name", name)])
            .send()
            .await
            .map_err(|e| DesignateError::Network(e.to_string()))?;

        let resp = check_status(resp, "zone lookup").await?;
        let list: ZoneList = resp
            .json()
            .await
            .map_err(|e| DesignateError::Api(format!("Failed to parse zone list: {}", e)))?;

        select_zone(list.zones, name)
    }

    /// Create a recordset in a zone
    pub async fn create_recordset(
        &self,
        zone_id: &str,
        name: &str,
        record_type: &str,
        records: &[String],
        ttl: u32,
    ) -> DesignateResult<Recordset> {
        let url = format!("{}/zones/{}/recordsets", self.endpoint, zone_id);
        let request = CreateRecordsetRequest {
            name,
            record_type,
            ttl,
            records,
        };

        debug!(record_name = name, zone_id, "Creating recordset");

        let resp = self
            .http
            .post(&url)
            .header(AUTH_TOKEN_HEADER, &self.token)
            .json(&request)
            .send()
            .await
            .map_err(|e| DesignateError::Network(e.to_string()))?;

        let resp = check_status(resp, "recordset creation").await?;
        let recordset: Recordset = resp
            .json()
            .await
            .map_err(|e| DesignateError::Api(format!("Failed to parse recordset: {}", e)))?;

        info!(record_name = %recordset.name, record_id = %recordset.id, "Created recordset");
        Ok(recordset)
    }

    /// Delete a recordset by ID
    pub async fn delete_recordset(&self, zone_id: &str, recordset_id: &str) -> DesignateResult<()> {
        let url = format!("{}/zones/{}/recordsets/{}", self.endpoint, zone_id, recordset_id);

        debug!(record_id = recordset_id, zone_id, "Deleting recordset");

        let resp = self
            .http
            .delete(&url)
            .header(AUTH_TOKEN_HEADER, &self.token)
            .send()
            .await
            .map_err(|e| DesignateError::Network(e.to_string()))?;

        check_status(resp, "recordset deletion").await?;
        info!(record_id = recordset_id, "Deleted recordset");
        Ok(())
    }
}

// The name filter is exact-match server side; re-check so a lax deployment
// can never hand back the wrong zone.
fn select_zone(zones: Vec<Zone>, name: &str) -> DesignateResult<Zone> {
    zones
        .into_iter()
        .find(|z| z.name == name)
        .ok_or_else(|| DesignateError::NotFound(format!("No zone named {}", name)))
}

/// Normalize a catalog or configured endpoint to end in "/v2" exactly once.
fn normalize_endpoint(endpoint: &str) -> String {
    let trimmed = endpoint.trim_end_matches('/');
    let base = trimmed.strip_suffix("/v2").unwrap_or(trimmed);
    format!("{}/v2", base)
}

async fn check_status(
    resp: reqwest::Response,
    context: &str,
) -> DesignateResult<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(classify_status(status, context, &body))
}

/// Map non-success responses onto the error taxonomy.
fn classify_status(status: StatusCode, context: &str, body: &str) -> DesignateError {
    let message = format!("{} failed with {}: {}", context, status, body);
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => DesignateError::Auth(message),
        StatusCode::NOT_FOUND => DesignateError::NotFound(message),
        StatusCode::TOO_MANY_REQUESTS => DesignateError::RateLimited(message),
        _ => DesignateError::Api(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_endpoint() {
        assert_eq!(
            normalize_endpoint("https://dns.example.org:9001"),
            "https://dns.example.org:9001/v2"
        );
        assert_eq!(
            normalize_endpoint("https://dns.example.org:9001/"),
            "https://dns.example.org:9001/v2"
        );
        assert_eq!(
            normalize_endpoint("https://dns.example.org:9001/v2"),
            "https://dns.example.org:9001/v2"
        );
        assert_eq!(
            normalize_endpoint("https://dns.example.org:9001/v2/"),
            "https://dns.example.org:9001/v2"
        );
    }

    #[test]
    fn test_classify_status() {
        assert!(matches!(
            classify_status(StatusCode::UNAUTHORIZED, "zone lookup", ""),
            DesignateError::Auth(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN, "zone lookup", ""),
            DesignateError::Auth(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::NOT_FOUND, "recordset deletion", ""),
            DesignateError::NotFound(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::TOO_MANY_REQUESTS, "recordset creation", ""),
            DesignateError::RateLimited(_)
        ));
        assert!(matches!(
            classify_status(StatusCode::INTERNAL_SERVER_ERROR, "zone lookup", ""),
            DesignateError::Api(_)
        ));
    }

    #[test]
    fn test_parse_zone_list() {
        let json = r#"{
            "zones": [
                {"id": "a86dba58-0043-4cc6-a1bb-69d5e86f3ca3", "name": "example.com.", "ttl": 3600}
            ],
            "links": {"self": "https://dns.example.org/v2/zones"}
        }"#;
        let list: ZoneList = serde_json::from_str(json).unwrap();
        assert_eq!(list.zones.len(), 1);
        assert_eq!(list.zones[0].name, "example.com.");
    }

    #[test]
    fn test_parse_empty_zone_list() {
        let list: ZoneList = serde_json::from_str(r#"{"zones": []}"#).unwrap();
        assert!(list.zones.is_empty());
    }

    #[test]
    fn test_select_zone_empty_list_is_not_found() {
        let err = select_zone(Vec::new(), "example.com.").unwrap_err();
        assert!(matches!(err, DesignateError::NotFound(_)));
    }

    #[test]
    fn test_select_zone_requires_exact_name() {
        let zones = vec![Zone {
            id: "z1".to_string(),
            name: "other.com.".to_string(),
        }];
        let err = select_zone(zones, "example.com.").unwrap_err();
        assert!(matches!(err, DesignateError::NotFound(_)));

        let zones = vec![
            Zone {
                id: "z1".to_string(),
                name: "other.com.".to_string(),
            },
            Zone {
                id: "z2".to_string(),
                name: "example.com.".to_string(),
            },
        ];
        let zone = select_zone(zones, "example.com.").unwrap();
        assert_eq!(zone.id, "z2");
    }

    #[test]
    fn test_parse_recordset() {
        let json = r#"{
            "id": "f7b10e9b-0cae-4a91-b162-562bc6096648",
            "name": "_acme-challenge.www.example.com.",
            "type": "TXT",
            "ttl": 60,
            "records": ["TOKEN123"],
            "status": "PENDING"
        }"#;
        let recordset: Recordset = serde_json::from_str(json).unwrap();
        assert_eq!(recordset.record_type, "TXT");
        assert_eq!(recordset.ttl, Some(60));
        assert_eq!(recordset.records, vec!["TOKEN123"]);
    }

    #[test]
    fn test_create_recordset_request_shape() {
        let records = vec!["TOKEN123".to_string()];
        let request = CreateRecordsetRequest {
            name: "_acme-challenge.www.example.com.",
            record_type: "TXT",
            ttl: 60,
            records: &records,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["type"], "TXT");
        assert_eq!(json["ttl"], 60);
        assert_eq!(json["records"][0], "TOKEN123");
    }
}
