//! Designate-backed provider: adapts the OpenStack Designate client to the
//! [`DnsProvider`] capability interface.

use std::sync::Arc;

use async_trait::async_trait;
use zp_designate::{DesignateClient, DesignateConfig, DesignateError};

use crate::authenticator::Dns01Authenticator;
use crate::provider::{DnsProvider, ProviderError, Record, Zone};
use crate::types::{AcmeError, AcmeResult, AuthenticatorConfig};

#[async_trait]
impl DnsProvider for DesignateClient {
    async fn resolve_zone(&self, name: &str) -> Result<Zone, ProviderError> {
        match self.get_zone(name).await {
            Ok(zone) => Ok(Zone {
                id: zone.id,
                name: zone.name,
            }),
            Err(DesignateError::NotFound(msg)) => Err(ProviderError::ZoneNotFound(msg)),
            Err(err) => Err(map_designate(err)),
        }
    }

    async fn create_txt_record(
        &self,
        zone_id: &str,
        name: &str,
        values: &[String],
        ttl: u32,
    ) -> Result<Record, ProviderError> {
        let recordset = self
            .create_recordset(zone_id, name, "TXT", values, ttl)
            .await
            .map_err(map_designate)?;
        Ok(Record {
            id: recordset.id,
            name: recordset.name,
            record_type: recordset.record_type,
            values: recordset.records,
            ttl: recordset.ttl.unwrap_or(ttl),
        })
    }

    async fn delete_record(&self, zone_id: &str, record_id: &str) -> Result<(), ProviderError> {
        match self.delete_recordset(zone_id, record_id).await {
            Ok(()) => Ok(()),
            Err(DesignateError::NotFound(msg)) => Err(ProviderError::RecordNotFound(msg)),
            Err(err) => Err(map_designate(err)),
        }
    }
}

impl Dns01Authenticator {
    /// Bind a Designate-backed authenticator.
    ///
    /// Authentication failures surface here, before any challenge is
    /// processed.
    pub async fn connect_designate(
        designate: &DesignateConfig,
        config: AuthenticatorConfig,
    ) -> AcmeResult<Self> {
        let client = DesignateClient::connect(designate)
            .await
            .map_err(|err| AcmeError::Setup(map_designate(err)))?;
        Ok(Self::new(Arc::new(client), config))
    }
}

// NotFound is mapped at the call sites that know whether a zone or a record
// was being addressed.
fn map_designate(err: DesignateError) -> ProviderError {
    match err {
        DesignateError::Auth(msg) => ProviderError::Auth(msg),
        DesignateError::RateLimited(msg) => ProviderError::RateLimited(msg),
        DesignateError::Network(msg) => ProviderError::Network(msg),
        DesignateError::NotFound(msg) | DesignateError::Api(msg) => ProviderError::Api(msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_designate_error_kinds() {
        assert!(matches!(
            map_designate(DesignateError::Auth("denied".to_string())),
            ProviderError::Auth(_)
        ));
        assert!(matches!(
            map_designate(DesignateError::RateLimited("slow down".to_string())),
            ProviderError::RateLimited(_)
        ));
        assert!(matches!(
            map_designate(DesignateError::Network("timeout".to_string())),
            ProviderError::Network(_)
        ));
        assert!(matches!(
            map_designate(DesignateError::Api("oops".to_string())),
            ProviderError::Api(_)
        ));
    }
}
