use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use feed_core::{FetchTicket, NewFact};
use feed_logging::{feed_debug, feed_error};

use crate::{FactGateway, GatewayEvent};

enum GatewayCommand {
    Fetch { ticket: FetchTicket },
    Create { draft: NewFact },
}

/// Runs gateway calls on a background runtime and reports completions as
/// [`GatewayEvent`]s. In-flight calls are never aborted; completions are
/// delivered in the order they finish.
pub struct GatewayHandle {
    cmd_tx: mpsc::Sender<GatewayCommand>,
    event_rx: mpsc::Receiver<GatewayEvent>,
}

impl GatewayHandle {
    pub fn new(gateway: Arc<dyn FactGateway>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let gateway = gateway.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(gateway.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch(&self, ticket: FetchTicket) {
        self.send(GatewayCommand::Fetch { ticket });
    }

    pub fn create(&self, draft: NewFact) {
        self.send(GatewayCommand::Create { draft });
    }

    pub fn try_recv(&self) -> Option<GatewayEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Waits up to `timeout` for the next completion.
    ///
    /// `Disconnected` means the runtime thread is gone and no further
    /// completions will ever arrive.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<GatewayEvent, mpsc::RecvTimeoutError> {
        self.event_rx.recv_timeout(timeout)
    }

    fn send(&self, command: GatewayCommand) {
        if self.cmd_tx.send(command).is_err() {
            feed_error!("gateway runtime has stopped; request dropped");
        }
    }
}

async fn handle_command(
    gateway: &dyn FactGateway,
    command: GatewayCommand,
    event_tx: mpsc::Sender<GatewayEvent>,
) {
    match command {
        GatewayCommand::Fetch { ticket } => {
            let result = gateway.fetch_facts(ticket.filter).await;
            feed_debug!(
                "fetch seq={} filter={} finished ok={}",
                ticket.seq,
                ticket.filter,
                result.is_ok()
            );
            let _ = event_tx.send(GatewayEvent::FactsFetched { ticket, result });
        }
        GatewayCommand::Create { draft } => {
            let result = gateway.create_fact(&draft).await;
            feed_debug!("create finished ok={}", result.is_ok());
            let _ = event_tx.send(GatewayEvent::FactCreated { result });
        }
    }
}

#[cfg(test)]
mod tests {
    use feed_core::CategoryFilter;

    use super::*;

    /// A handle whose runtime thread has already exited.
    fn stopped_handle() -> GatewayHandle {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        drop(cmd_rx);
        drop(event_tx);
        GatewayHandle { cmd_tx, event_rx }
    }

    #[test]
    fn stopped_runtime_reports_disconnected() {
        let handle = stopped_handle();
        handle.fetch(FetchTicket {
            seq: 1,
            filter: CategoryFilter::All,
        });

        assert_eq!(
            handle.recv_timeout(Duration::from_millis(10)).unwrap_err(),
            mpsc::RecvTimeoutError::Disconnected
        );
        assert!(handle.try_recv().is_none());
    }
}
