use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use feed_core::{update, AppState, Msg};
use feed_gateway::{sample_facts, FactGateway, MemoryGateway, RestGateway};
use feed_logging::{feed_error, feed_info, feed_warn};

use super::config::{AppConfig, GatewayMode};
use super::effects::EffectRunner;
use super::input::{self, Input};
use super::render;

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_app(config: AppConfig) -> Result<()> {
    let gateway = build_gateway(&config)?;
    let effects = EffectRunner::new(gateway);

    let (input_tx, input_rx) = mpsc::channel::<String>();
    // Blocking stdin reads live on their own thread so gateway completions
    // keep flowing while the user types.
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(line).is_err() {
                break;
            }
        }
    });

    let stdout = io::stdout();
    let mut app = App::new(effects, stdout.lock());
    app.dispatch(Msg::Started)?;
    app.run(&input_rx)
}

fn build_gateway(config: &AppConfig) -> Result<Arc<dyn FactGateway>> {
    match config.gateway {
        GatewayMode::Memory => {
            feed_info!("Using in-memory fact store");
            Ok(Arc::new(MemoryGateway::with_facts(sample_facts())))
        }
        GatewayMode::Rest => {
            let settings = config.gateway_settings();
            feed_info!("Using fact store at {}", settings.base_url);
            let gateway = RestGateway::new(settings).context("configuring the fact store")?;
            Ok(Arc::new(gateway))
        }
    }
}

struct App<W: Write> {
    state: AppState,
    effects: EffectRunner,
    out: W,
}

impl<W: Write> App<W> {
    fn new(effects: EffectRunner, out: W) -> Self {
        Self {
            state: AppState::new(),
            effects,
            out,
        }
    }

    fn run(&mut self, input_rx: &mpsc::Receiver<String>) -> Result<()> {
        let mut input_open = true;
        loop {
            if input_open {
                match input_rx.recv_timeout(POLL_INTERVAL) {
                    Ok(line) => {
                        if !self.handle_line(&line)? {
                            return Ok(());
                        }
                    }
                    Err(mpsc::RecvTimeoutError::Timeout) => {}
                    Err(mpsc::RecvTimeoutError::Disconnected) => input_open = false,
                }
                while let Some(msg) = self.effects.try_poll() {
                    self.dispatch(msg)?;
                }
            } else {
                // Input is gone; let in-flight calls land before exiting.
                let busy = self.state.loading() || self.state.submitting();
                match drain_step(busy, || self.effects.poll(POLL_INTERVAL)) {
                    Drain::Dispatch(msg) => self.dispatch(msg)?,
                    Drain::Wait => {}
                    Drain::Done => return Ok(()),
                    Drain::GatewayLost => {
                        feed_error!("gateway stopped with calls still in flight");
                        writeln!(self.out, "Lost the connection to the fact store.")?;
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Returns false once the user asked to quit.
    fn handle_line(&mut self, line: &str) -> Result<bool> {
        match input::parse_line(line) {
            Input::Dispatch(msg) => self.dispatch(msg)?,
            Input::Help => writeln!(self.out, "{}", input::HELP)?,
            Input::Quit => return Ok(false),
            Input::Empty => {}
            Input::Invalid(reason) => {
                feed_warn!("rejected input: {}", reason);
                writeln!(self.out, "{reason} (type `help` for commands)")?;
            }
        }
        Ok(true)
    }

    fn dispatch(&mut self, msg: Msg) -> Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let alerts = self.effects.enqueue(effects);
        let was_dirty = state.consume_dirty();
        let view = was_dirty.then(|| state.view());
        self.state = state;

        for alert in alerts {
            writeln!(self.out, "\x07ALERT: {alert}")?;
        }
        if let Some(view) = view {
            write!(self.out, "\n{}", render::render(&view))?;
            self.out.flush().context("writing to the terminal")?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Drain {
    Dispatch(Msg),
    Wait,
    Done,
    GatewayLost,
}

/// One step of waiting for in-flight gateway calls after input has closed.
fn drain_step(
    busy: bool,
    poll: impl FnOnce() -> Result<Msg, mpsc::RecvTimeoutError>,
) -> Drain {
    if !busy {
        return Drain::Done;
    }
    match poll() {
        Ok(msg) => Drain::Dispatch(msg),
        Err(mpsc::RecvTimeoutError::Timeout) => Drain::Wait,
        Err(mpsc::RecvTimeoutError::Disconnected) => Drain::GatewayLost,
    }
}
