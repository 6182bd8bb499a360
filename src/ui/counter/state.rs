use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterState {
    pub value: i64,
}

impl UiState for CounterState {}

impl CounterState {
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}
