use std::sync::Arc;

use tracing::debug;

use crate::lifecycle::RecordKeeper;
use crate::propagation::PropagationWaiter;
use crate::provider::DnsProvider;
use crate::types::{AcmeResult, AuthenticatorConfig, Challenge, ResponseToken};

/// DNS-01 authenticator: proves control of a domain by publishing the
/// validation token as a TXT record through the configured DNS provider.
///
/// One instance serves one perform/cleanup cycle. The host creates a fresh
/// instance per fulfillment run; concurrent runs are not shared.
pub struct Dns01Authenticator {
    keeper: RecordKeeper,
    waiter: PropagationWaiter,
}

impl Dns01Authenticator {
    /// Wrap an already-authenticated provider client
    pub fn new(provider: Arc<dyn DnsProvider>, config: AuthenticatorConfig) -> Self {
        Self {
            keeper: RecordKeeper::new(provider, config.ttl),
            waiter: PropagationWaiter::new(config.propagation_seconds),
        }
    }

    /// Fulfill a batch of pending challenges.
    ///
    /// Creates one TXT record per challenge in input order, waits once for
    /// propagation across the whole batch, then returns one response token
    /// per challenge in the same order. Any creation failure aborts the
    /// batch with no responses and no wait; records created before the
    /// failure stay tracked so the host can still clean them up.
    pub async fn perform(&mut self, challenges: &[Challenge]) -> AcmeResult<Vec<ResponseToken>> {
        if challenges.is_empty() {
            return Ok(Vec::new());
        }

        for challenge in challenges {
            debug!(domain = %challenge.domain(), "Fulfilling DNS-01 challenge");
            self.keeper
                .create_validation_record(
                    challenge.domain(),
                    challenge.validation_domain_name(),
                    challenge.validation(),
                )
                .await?;
        }

        self.waiter.wait().await;

        Ok(challenges.iter().map(|c| c.response().clone()).collect())
    }

    /// Remove the record created for one challenge. Invoked by the host
    /// after validation completes, whether it succeeded or failed.
    pub async fn cleanup(&mut self, challenge: &Challenge) -> AcmeResult<()> {
        self.keeper
            .remove_validation_record(challenge.domain(), challenge.validation_domain_name())
            .await
    }

    /// Best-effort removal of every record still tracked by this instance,
    /// for host error recovery after an aborted batch. Returns how many
    /// records were removed.
    pub async fn cleanup_all(&mut self) -> usize {
        self.keeper.remove_all().await
    }

    /// Number of validation records currently tracked
    pub fn tracked_records(&self) -> usize {
        self.keeper.tracked_records()
    }
}
