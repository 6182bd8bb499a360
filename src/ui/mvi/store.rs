//! Single-owner state container with subscriber notification.

use super::reducer::Reducer;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Listener<S> = Box<dyn FnMut(&S)>;

/// Owns the state for one reducer and the listeners watching it.
///
/// All mutation goes through [`Store::dispatch`]. The reducer output is
/// committed before any listener runs, so every listener sees the same,
/// fully-updated state.
pub struct Store<R: Reducer> {
    state: R::State,
    listeners: Vec<(Subscription, Listener<R::State>)>,
    next_id: u64,
}

impl<R: Reducer> Store<R> {
    pub fn new() -> Self {
        Self::with_state(R::State::default())
    }

    pub fn with_state(state: R::State) -> Self {
        Self {
            state,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Read a derived value from the current state.
    pub fn select<T>(&self, selector: impl FnOnce(&R::State) -> T) -> T {
        selector(&self.state)
    }

    /// Register a listener. Listeners run in registration order after
    /// every dispatch.
    pub fn subscribe<F>(&mut self, listener: F) -> Subscription
    where
        F: FnMut(&R::State) + 'static,
    {
        let subscription = Subscription(self.next_id);
        self.next_id += 1;
        self.listeners.push((subscription, Box::new(listener)));
        tracing::trace!(?subscription, "store listener added");
        subscription
    }

    /// Remove a listener. Returns `false` if the handle is unknown.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| id.0 != subscription.0);
        let removed = self.listeners.len() != before;
        if removed {
            tracing::trace!(?subscription, "store listener removed");
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Apply an intent through the reducer, commit the result, then
    /// notify listeners.
    pub fn dispatch(&mut self, intent: R::Intent) {
        tracing::debug!(?intent, "dispatch");
        self.state = R::reduce(std::mem::take(&mut self.state), intent);
        tracing::debug!(state = ?self.state, "state committed");

        let state = &self.state;
        for (_, listener) in self.listeners.iter_mut() {
            listener(state);
        }
    }
}

impl<R: Reducer> Default for Store<R> {
    fn default() -> Self {
        Self::new()
    }
}
