use feed_core::{CategoryFilter, Fact, NewFact};

use crate::GatewayError;

/// Query and persistence boundary of the fact store.
///
/// `fetch_facts` returns facts restricted to `filter` (unless it is `all`),
/// ordered by `votes_interesting` descending and capped at the store's
/// record limit. `create_fact` returns the stored record with its id,
/// creation year and zeroed vote counters filled in by the store.
#[async_trait::async_trait]
pub trait FactGateway: Send + Sync {
    async fn fetch_facts(&self, filter: CategoryFilter) -> Result<Vec<Fact>, GatewayError>;

    async fn create_fact(&self, draft: &NewFact) -> Result<Fact, GatewayError>;
}
