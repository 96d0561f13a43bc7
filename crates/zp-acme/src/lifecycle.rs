use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::provider::{DnsProvider, ProviderError, Record, Zone};
use crate::types::{AcmeError, AcmeResult};

/// Identity of a record created for one challenge, kept so cleanup targets
/// exactly the record this instance created.
#[derive(Debug, Clone)]
pub struct TrackedRecord {
    pub zone: Zone,
    pub record: Record,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ChallengeKey {
    domain: String,
    validation_name: String,
}

/// Creates and deletes validation records, remembering the identity of every
/// record it created.
///
/// Entries are kept per challenge (domain + validation name) in insertion
/// order, so cleanup for a multi-challenge batch resolves each challenge to
/// its own record. Scoped to one perform/cleanup cycle.
pub struct RecordKeeper {
    provider: Arc<dyn DnsProvider>,
    ttl: u32,
    // Lookups scan from the newest entry so a re-created challenge resolves
    // to its latest record.
    ledger: Vec<(ChallengeKey, TrackedRecord)>,
}

impl RecordKeeper {
    pub fn new(provider: Arc<dyn DnsProvider>, ttl: u32) -> Self {
        Self {
            provider,
            ttl,
            ledger: Vec::new(),
        }
    }

    /// Resolve the zone for `domain` and publish the validation token as a
    /// TXT record under `validation_name`. The created record is tracked for
    /// later cleanup.
    pub async fn create_validation_record(
        &mut self,
        domain: &str,
        validation_name: &str,
        validation: &str,
    ) -> AcmeResult<()> {
        let base = base_domain(domain);
        if base == "." {
            // Nothing left after stripping the leftmost label; the provider
            // cannot host a zone for this.
            return Err(AcmeError::ZoneResolution {
                domain: domain.to_string(),
                source: ProviderError::ZoneNotFound(format!(
                    "{} has no parent domain to host a zone",
                    domain
                )),
            });
        }

        debug!(domain, zone = %base, "Resolving DNS zone");
        let zone = self
            .provider
            .resolve_zone(&base)
            .await
            .map_err(|source| AcmeError::ZoneResolution {
                domain: domain.to_string(),
                source,
            })?;

        let record_name = format!("{}.", validation_name);
        debug!(record_name = %record_name, zone_id = %zone.id, "Creating validation TXT record");
        let record = self
            .provider
            .create_txt_record(&zone.id, &record_name, &[validation.to_string()], self.ttl)
            .await
            .map_err(|source| AcmeError::RecordCreation {
                name: record_name.clone(),
                source,
            })?;

        info!(record_name = %record.name, record_id = %record.id, "Created validation TXT record");
        self.ledger.push((
            ChallengeKey {
                domain: domain.to_string(),
                validation_name: validation_name.to_string(),
            },
            TrackedRecord { zone, record },
        ));
        Ok(())
    }

    /// Delete the record tracked for this challenge.
    ///
    /// A record that is already gone (deleted externally or cleaned up twice)
    /// is benign; the entry is dropped either way. A challenge with no
    /// tracked record is a no-op. Hard delete failures keep the entry
    /// tracked so the host can retry.
    pub async fn remove_validation_record(
        &mut self,
        domain: &str,
        validation_name: &str,
    ) -> AcmeResult<()> {
        let Some(pos) = self
            .ledger
            .iter()
            .rposition(|(key, _)| key.domain == domain && key.validation_name == validation_name)
        else {
            debug!(domain, validation_name, "No tracked record, nothing to clean up");
            return Ok(());
        };

        let tracked = self.ledger[pos].1.clone();
        match self
            .provider
            .delete_record(&tracked.zone.id, &tracked.record.id)
            .await
        {
            Ok(()) => {
                self.ledger.remove(pos);
                info!(record_name = %tracked.record.name, record_id = %tracked.record.id, "Deleted validation TXT record");
                Ok(())
            }
            Err(ProviderError::RecordNotFound(_)) => {
                self.ledger.remove(pos);
                debug!(record_name = %tracked.record.name, "Validation record already gone");
                Ok(())
            }
            Err(source) => Err(AcmeError::Cleanup {
                name: tracked.record.name.clone(),
                source,
            }),
        }
    }

    /// Best-effort removal of every record still tracked, for host error
    /// recovery after an aborted batch. Failures are logged and skipped.
    /// Returns how many records were removed.
    pub async fn remove_all(&mut self) -> usize {
        let entries = std::mem::take(&mut self.ledger);
        let mut removed = 0;
        for (key, tracked) in entries {
            match self
                .provider
                .delete_record(&tracked.zone.id, &tracked.record.id)
                .await
            {
                Ok(()) => {
                    removed += 1;
                    info!(record_name = %tracked.record.name, "Deleted validation TXT record");
                }
                Err(ProviderError::RecordNotFound(_)) => {
                    removed += 1;
                    debug!(record_name = %tracked.record.name, "Validation record already gone");
                }
                Err(err) => {
                    warn!(
                        domain = %key.domain,
                        record_name = %tracked.record.name,
                        error = %err,
                        "Failed to clean up validation record"
                    );
                }
            }
        }
        removed
    }

    /// Number of records currently tracked
    pub fn tracked_records(&self) -> usize {
        self.ledger.len()
    }
}

/// Base domain under which the provider hosts the authoritative zone: the
/// challenge domain with its leftmost label removed, trailing-dot-qualified.
///
/// This assumes the zone apex sits exactly one label above the challenge
/// domain; a deeper delegation fails as zone-not-found at lookup time rather
/// than matching a wrong zone.
pub fn base_domain(domain: &str) -> String {
    let mut labels = domain.trim_end_matches('.').split('.');
    labels.next();
    let rest: Vec<&str> = labels.collect();
    format!("{}.", rest.join("."))
}
