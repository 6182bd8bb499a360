use crate::config::UiConfig;
use crate::ui::counter::CounterStore;
use crate::ui::layout::{control_at, Control};
use crate::ui::view::CounterView;
use ratatui::layout::Rect;

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    config: UiConfig,
    store: CounterStore,
    view: CounterView,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        Self::with_store(config, CounterStore::new())
    }

    /// Build the app around an existing store and mount the view on it.
    pub fn with_store(config: UiConfig, mut store: CounterStore) -> Self {
        let view = CounterView::mount(&mut store);
        Self {
            should_quit: false,
            size: None,
            config,
            store,
            view,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        tracing::info!(value = self.store.value(), "quit requested");
        self.should_quit = true;
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    /// Whether clicks are captured, and so whether the buttons can be clicked.
    pub fn mouse_enabled(&self) -> bool {
        self.config.mouse
    }

    pub fn store(&self) -> &CounterStore {
        &self.store
    }

    pub fn increment(&mut self) {
        self.store.increment();
    }

    pub fn decrement(&mut self) {
        self.store.decrement();
    }

    pub fn press(&mut self, control: Control) {
        match control {
            Control::Decrement => self.decrement(),
            Control::Increment => self.increment(),
        }
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        self.view.invalidate();
    }

    /// Full-screen area as of the last resize.
    pub fn area(&self) -> Option<Rect> {
        self.size.map(|(cols, rows)| Rect::new(0, 0, cols, rows))
    }

    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        self.area().and_then(|area| control_at(area, column, row))
    }

    /// True when the store changed or the screen was resized since the last
    /// call.
    pub fn take_redraw(&mut self) -> bool {
        self.view.take_stale()
    }
}
