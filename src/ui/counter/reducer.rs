use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // Wraps at the i64 limits so both mutations stay total.
        let value = match intent {
            CounterIntent::Increment => state.value.wrapping_add(1),
            CounterIntent::Decrement => state.value.wrapping_sub(1),
        };
        CounterState { value }
    }
}
