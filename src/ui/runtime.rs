use crate::config::Config;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

/// Run the counter UI until the user quits or a shutdown signal arrives.
///
/// Every event is handled on this thread; when it leaves the view stale the
/// frame is redrawn before the next event is read.
pub fn run(config: &Config, shutdown: ShutdownHandle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let poll_interval = config.ui.poll_interval();
    let mut app = App::new(config.ui.clone());
    let events = EventHandler::new(poll_interval, shutdown);
    let (cols, rows) = resolve_screen_size(crossterm::terminal::size(), || {
        terminal.size().map(|size| (size.width, size.height))
    })?;
    app.on_resize(cols, rows);
    tracing::info!("counter ui started");

    let result = loop {
        if app.take_redraw() {
            if let Err(err) = terminal.draw(|frame| draw(frame, &app)) {
                break Err(err);
            }
        }
        if app.should_quit() {
            break Ok(());
        }
        if let Err(err) = handle_event(&mut app, events.next(poll_interval)) {
            break Err(err);
        }
    };

    drop(guard);
    match &result {
        Ok(()) => tracing::info!(value = app.store().value(), "counter ui stopped"),
        Err(err) => tracing::error!(%err, "counter ui failed"),
    }
    result
}

/// Apply one result of [`EventHandler::next`] to the app.
///
/// A terminal error ends the run with that error. So does a closed channel:
/// the input thread only goes away on its own after sending `Shutdown`,
/// which quits the app before the channel is read again.
pub fn handle_event(
    app: &mut App,
    event: Result<AppEvent, RecvTimeoutError>,
) -> io::Result<()> {
    match event {
        Ok(AppEvent::Key(key)) => handle_key(app, key),
        Ok(AppEvent::Mouse(mouse)) => handle_mouse(app, mouse),
        Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
        Ok(AppEvent::Shutdown) => app.request_quit(),
        Ok(AppEvent::Error(err)) => return Err(err),
        Err(RecvTimeoutError::Timeout) => {}
        Err(RecvTimeoutError::Disconnected) => {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "terminal input stopped unexpectedly",
            ));
        }
    }
    Ok(())
}

/// Screen size from crossterm, or from `fallback` when that query fails.
pub fn resolve_screen_size(
    queried: io::Result<(u16, u16)>,
    fallback: impl FnOnce() -> io::Result<(u16, u16)>,
) -> io::Result<(u16, u16)> {
    match queried {
        Ok(size) => Ok(size),
        Err(err) => {
            tracing::warn!(%err, "terminal size query failed, asking the backend");
            fallback()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queried_size_wins() {
        let size = resolve_screen_size(Ok((80, 24)), || panic!("fallback not needed"));
        assert_eq!(size.unwrap(), (80, 24));
    }

    #[test]
    fn failed_query_uses_fallback() {
        let size = resolve_screen_size(Err(io::Error::other("no tty")), || Ok((100, 30)));
        assert_eq!(size.unwrap(), (100, 30));
    }

    #[test]
    fn both_failing_is_an_error() {
        let size = resolve_screen_size(Err(io::Error::other("no tty")), || {
            Err(io::Error::other("backend gone"))
        });
        assert_eq!(size.unwrap_err().to_string(), "backend gone");
    }
}
