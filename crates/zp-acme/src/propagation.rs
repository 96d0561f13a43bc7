use std::time::Duration;

use tracing::info;

/// Time-based propagation gate.
///
/// DNS updates take time to propagate, and checking whether the update has
/// become visible is not reliable (this host might see the update before the
/// ACME server does), so completion is a fixed delay with no polling.
#[derive(Debug, Clone, Copy)]
pub struct PropagationWaiter {
    seconds: u64,
}

impl PropagationWaiter {
    pub fn new(seconds: u64) -> Self {
        Self { seconds }
    }

    /// Block the fulfillment flow until the configured delay has elapsed
    pub async fn wait(&self) {
        info!(
            "Waiting {} seconds for DNS changes to propagate",
            self.seconds
        );
        tokio::time::sleep(Duration::from_secs(self.seconds)).await;
    }
}
