//! oscpad bridge application entry point.
//!
//! Wires together configuration, the input actuator, the UDP receiver, and
//! the message dispatcher, then runs the Tokio async event loop.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()        -- `key | value` file, defaults on failure
//!  └─ actuator             -- EnigoActuator, or MockActuator with --simulate
//!  └─ start_receiver()     -- UDP thread, decodes datagrams
//!  └─ dispatch loop        -- one message at a time, to completion
//! ```
//!
//! # Serial dispatch (for beginners)
//!
//! The `tokio::select!` loop is the heart of the bridge.  Messages are
//! processed strictly one at a time: the pointer state machine's
//! current/pending coordinates are not safe under concurrent mutation, so
//! the single dispatch task is the one mutual-exclusion domain of the whole
//! application.  A dispatch failure is logged and the loop moves on — a
//! stuck control surface must never take the bridge down, and physical
//! input actions are never retried because a duplicated click or keystroke
//! has a user-visible effect.

use std::path::PathBuf;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use oscpad_bridge::application::dispatch::{
    InputActuator, MessageDispatcher, Outcome, VirtualButtons,
};
use oscpad_bridge::infrastructure::actuator::enigo::EnigoActuator;
use oscpad_bridge::infrastructure::actuator::mock::MockActuator;
use oscpad_bridge::infrastructure::network::start_receiver;
use oscpad_bridge::infrastructure::storage::config::{load_config, BridgeConfig};
use oscpad_core::PointerPad;

/// OSC control-pad to input-device bridge.
#[derive(Debug, Parser)]
#[command(name = "oscpad-bridge", version, about)]
struct Cli {
    /// Path to the `key | value` config file (default: platform config dir).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Record actions instead of injecting OS input (protocol debugging).
    #[arg(long)]
    simulate: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    info!("oscpad bridge starting");

    let cfg = load_config(cli.config);
    log_config(&cfg);

    // ── Actuator ──────────────────────────────────────────────────────────────
    // With --simulate the recording mock stands in for the OS backend; its
    // call log is drained and printed after every message.
    let simulated: Option<Arc<MockActuator>> = cli.simulate.then(|| Arc::new(MockActuator::new()));
    let actuator: Arc<dyn InputActuator> = match &simulated {
        Some(mock) => {
            info!("simulation mode: input actions are logged, not injected");
            Arc::clone(mock) as Arc<dyn InputActuator>
        }
        None => Arc::new(EnigoActuator::new()?),
    };

    let mut dispatcher = MessageDispatcher::new(
        PointerPad::new(cfg.mouse_max_x, cfg.mouse_max_y, cfg.mouse_border),
        VirtualButtons {
            song: (cfg.song_pos_x, cfg.song_pos_y),
            cue: (cfg.cue_pos_x, cfg.cue_pos_y),
            legato: (cfg.legato_pos_x, cfg.legato_pos_y),
        },
        cfg.scroll_base,
        actuator,
    );

    // ── Receiver ──────────────────────────────────────────────────────────────
    let running = Arc::new(AtomicBool::new(true));
    let mut rx = start_receiver(cfg.rx_port, Arc::clone(&running))?;

    info!("oscpad bridge ready.  Press Ctrl-C to exit.");

    // ── Dispatch loop ─────────────────────────────────────────────────────────
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("shutdown signal received");
                break;
            }
            maybe_msg = rx.recv() => {
                let Some(msg) = maybe_msg else {
                    break;
                };
                match dispatcher.dispatch(&msg) {
                    Ok(Outcome::Executed | Outcome::Ignored | Outcome::Unsupported) => {}
                    Err(e) => warn!("dispatch failed for {}: {e}", msg.address),
                }
                if let Some(mock) = &simulated {
                    for call in mock.calls.lock().unwrap().drain(..) {
                        info!(?call, "simulated action");
                    }
                }
            }
        }
    }

    running.store(false, Ordering::Relaxed);
    info!("oscpad bridge stopped");
    Ok(())
}

/// Startup dump of the effective configuration, one value per line.
fn log_config(cfg: &BridgeConfig) {
    info!("configuration:");
    info!("  rx port      : {}", cfg.rx_port);
    info!("  scroll base  : {}", cfg.scroll_base);
    info!("  mouse border : {}", cfg.mouse_border);
    info!("  mouse max x  : {}", cfg.mouse_max_x);
    info!("  mouse max y  : {}", cfg.mouse_max_y);
    info!("  song pos     : ({}, {})", cfg.song_pos_x, cfg.song_pos_y);
    info!("  cue pos      : ({}, {})", cfg.cue_pos_x, cfg.cue_pos_y);
    info!("  legato pos   : ({}, {})", cfg.legato_pos_x, cfg.legato_pos_y);
}
