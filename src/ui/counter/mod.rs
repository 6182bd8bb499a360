//! Counter slice: the single integer the application displays and the
//! two mutations allowed on it.

mod intent;
mod reducer;
mod state;

pub use intent::CounterIntent;
pub use reducer::CounterReducer;
pub use state::CounterState;

use crate::ui::mvi::Store;

pub type CounterStore = Store<CounterReducer>;

impl Store<CounterReducer> {
    pub fn increment(&mut self) {
        self.dispatch(CounterIntent::Increment);
    }

    pub fn decrement(&mut self) {
        self.dispatch(CounterIntent::Decrement);
    }

    pub fn value(&self) -> i64 {
        self.select(|state| state.value)
    }
}
