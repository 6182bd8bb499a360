use std::io;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, MouseEvent};

use crate::shutdown::ShutdownHandle;

/// Upper bound on how long the input thread goes without checking the
/// shutdown flag.
const SHUTDOWN_POLL: Duration = Duration::from_millis(50);

#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// OS signal received (SIGTERM, SIGINT)
    Shutdown,
    /// Reading the terminal failed; the input thread has stopped.
    Error(io::Error),
}

/// Reads terminal events on a background thread and hands them to the UI
/// thread over a channel. The input thread never touches application state.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();
        let timeout = poll_interval.min(SHUTDOWN_POLL);

        thread::spawn(move || loop {
            if shutdown.is_shutting_down() {
                let _ = tx.send(AppEvent::Shutdown);
                break;
            }

            let ready = match event::poll(timeout) {
                Ok(ready) => ready,
                Err(err) => {
                    tracing::error!(%err, "terminal poll failed");
                    let _ = tx.send(AppEvent::Error(err));
                    break;
                }
            };
            if !ready {
                continue;
            }

            let app_event = match event::read() {
                Ok(Event::Key(key)) => AppEvent::Key(key),
                Ok(Event::Mouse(mouse)) => AppEvent::Mouse(mouse),
                Ok(Event::Resize(cols, rows)) => AppEvent::Resize(cols, rows),
                Ok(_) => continue,
                Err(err) => {
                    tracing::error!(%err, "terminal read failed");
                    let _ = tx.send(AppEvent::Error(err));
                    break;
                }
            };

            if tx.send(app_event).is_err() {
                // UI loop is gone.
                break;
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
