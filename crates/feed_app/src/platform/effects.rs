use std::sync::{mpsc, Arc};
use std::time::Duration;

use feed_core::{Effect, Msg};
use feed_gateway::{FactGateway, GatewayEvent, GatewayHandle};
use feed_logging::{feed_info, feed_warn};

/// Executes core effects against the gateway and turns completions back
/// into messages.
pub(crate) struct EffectRunner {
    gateway: GatewayHandle,
}

impl EffectRunner {
    pub(crate) fn new(gateway: Arc<dyn FactGateway>) -> Self {
        Self {
            gateway: GatewayHandle::new(gateway),
        }
    }

    /// Runs `effects`; alerts are returned for the caller to show.
    pub(crate) fn enqueue(&self, effects: Vec<Effect>) -> Vec<String> {
        let mut alerts = Vec::new();
        for effect in effects {
            match effect {
                Effect::FetchFacts { ticket } => {
                    feed_info!("FetchFacts seq={} filter={}", ticket.seq, ticket.filter);
                    self.gateway.fetch(ticket);
                }
                Effect::CreateFact { draft } => {
                    feed_info!(
                        "CreateFact category={} source={}",
                        draft.category,
                        draft.source
                    );
                    self.gateway.create(draft);
                }
                Effect::ShowNotice(notice) => {
                    feed_warn!("{} ({})", notice, notice.reason());
                    alerts.push(notice.to_string());
                }
            }
        }
        alerts
    }

    pub(crate) fn poll(&self, timeout: Duration) -> Result<Msg, mpsc::RecvTimeoutError> {
        self.gateway.recv_timeout(timeout).map(map_event)
    }

    pub(crate) fn try_poll(&self) -> Option<Msg> {
        self.gateway.try_recv().map(map_event)
    }
}

fn map_event(event: GatewayEvent) -> Msg {
    match event {
        GatewayEvent::FactsFetched { ticket, result } => Msg::FactsFetched {
            ticket,
            result: result.map_err(|err| err.to_string()),
        },
        GatewayEvent::FactCreated { result } => Msg::FactCreated {
            result: result.map_err(|err| err.to_string()),
        },
    }
}
