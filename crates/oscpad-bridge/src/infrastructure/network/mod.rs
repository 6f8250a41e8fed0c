//! UDP transport: receives one OSC datagram per control message.
//!
//! The receiver binds the configured port and runs as a blocking loop on a
//! dedicated thread to avoid blocking the Tokio runtime with synchronous
//! socket I/O.  Decoded messages are forwarded over an mpsc channel to the
//! single dispatch task; malformed datagrams are logged and dropped, never
//! fatal.  The transport is fire-and-forget: no response is ever sent.
//!
//! # Read timeout
//!
//! The socket is configured with a 500 ms read timeout.  On each timeout
//! the loop checks the `running` flag; when the application is shutting
//! down it exits cleanly instead of blocking in `recv_from` forever.

use std::net::{SocketAddr, UdpSocket};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use oscpad_core::protocol::codec::decode_message;
use oscpad_core::protocol::message::OscMessage;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, error, info, trace};

/// Error type for receiver startup.
#[derive(Debug, Error)]
pub enum ReceiverError {
    /// The UDP socket could not be bound.
    #[error("failed to bind receive socket on {addr}: {source}")]
    BindFailed {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Binds a UDP socket on `rx_port` and spawns a background thread that
/// decodes incoming datagrams.
///
/// Returns a receiver from which the dispatch task reads [`OscMessage`]s,
/// one at a time — the channel is the serialization point that keeps
/// pointer-state updates sequentially consistent.
///
/// # Errors
///
/// Returns [`ReceiverError::BindFailed`] if the socket cannot be bound.
pub fn start_receiver(
    rx_port: u16,
    running: Arc<AtomicBool>,
) -> Result<mpsc::Receiver<OscMessage>, ReceiverError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], rx_port));
    let socket =
        UdpSocket::bind(addr).map_err(|source| ReceiverError::BindFailed { addr, source })?;
    socket
        .set_read_timeout(Some(Duration::from_millis(500)))
        .ok();

    let (tx, rx) = mpsc::channel(64);

    std::thread::Builder::new()
        .name("oscpad-rx".to_string())
        .spawn(move || {
            receive_loop(socket, tx, running);
        })
        .expect("failed to spawn receive thread");

    info!("listening for OSC datagrams on UDP {addr}");
    Ok(rx)
}

/// The main receive loop executed on the receiver thread.
fn receive_loop(socket: UdpSocket, tx: mpsc::Sender<OscMessage>, running: Arc<AtomicBool>) {
    let mut buf = vec![0u8; 4096];

    while running.load(Ordering::Relaxed) {
        let (len, src) = match socket.recv_from(&mut buf) {
            Ok(pair) => pair,
            Err(e) if is_timeout_error(&e) => continue,
            Err(e) => {
                error!("receive error: {e}");
                continue;
            }
        };

        match decode_message(&buf[..len]) {
            Ok(msg) => {
                trace!("datagram from {src}: {}", msg.address);
                if tx.blocking_send(msg).is_err() {
                    // Receiver dropped – application is shutting down.
                    break;
                }
            }
            Err(e) => {
                debug!("dropping malformed datagram from {src}: {e}");
            }
        }
    }

    info!("receive loop stopped");
}

/// Returns `true` for OS timeout / would-block errors that should be retried.
fn is_timeout_error(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
