//! Ctrl+C handling.
//!
//! A build is short, so Ctrl+C during `build` (or before the preview server is
//! up) exits at once. Once `serve` has attached its server, Ctrl+C stops the
//! request loop instead and lets requests already in flight finish.

use anyhow::{Context, Result};
use crossbeam::channel::Sender;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use tiny_http::Server;

/// Exit status for an interrupted run (128 + SIGINT).
const INTERRUPTED: i32 = 130;

static STOP_REQUESTED: AtomicBool = AtomicBool::new(false);

static ATTACHED: OnceLock<Attached> = OnceLock::new();

/// The running preview server and the wake-up line of its request loop.
struct Attached {
    server: Arc<Server>,
    wake: Sender<()>,
}

impl Attached {
    fn stop(&self) {
        let _ = self.wake.try_send(());
        self.server.unblock();
    }
}

/// Install the process-wide Ctrl+C handler. Call once, first thing in `main`.
pub fn install_ctrlc() -> Result<()> {
    ctrlc::set_handler(on_interrupt).context("failed to install Ctrl+C handler")
}

fn on_interrupt() {
    STOP_REQUESTED.store(true, Ordering::SeqCst);
    match ATTACHED.get() {
        Some(attached) => {
            crate::log!("serve"; "shutting down...");
            attached.stop();
        }
        None => std::process::exit(INTERRUPTED),
    }
}

/// Route later Ctrl+C presses to `server` and its request loop.
///
/// Only the first server is attached; returns whether this one was.
pub fn attach_server(server: Arc<Server>, wake: Sender<()>) -> bool {
    ATTACHED.set(Attached { server, wake }).is_ok()
}

/// Whether Ctrl+C has been pressed.
pub fn stop_requested() -> bool {
    STOP_REQUESTED.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam::channel;
    use std::time::Duration;

    #[test]
    fn test_stop_wakes_loop_and_server() {
        let server = Arc::new(Server::http("127.0.0.1:0").unwrap());
        let (wake, woken) = channel::bounded(1);
        let attached = Attached {
            server: Arc::clone(&server),
            wake,
        };

        attached.stop();
        // A second stop must not block on the full channel
        attached.stop();

        assert!(woken.try_recv().is_ok());
        assert!(server.recv_timeout(Duration::from_secs(5)).is_err());
    }

    #[test]
    fn test_not_stopped_by_default() {
        assert!(!stop_requested());
    }
}
