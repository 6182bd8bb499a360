use std::cell::RefCell;
use std::rc::Rc;

use counter_tui::ui::counter::{CounterIntent, CounterReducer, CounterState, CounterStore};
use counter_tui::ui::mvi::Reducer;

#[test]
fn store_starts_at_zero() {
    let store = CounterStore::new();
    assert_eq!(store.value(), 0);
    assert_eq!(*store.state(), CounterState::default());
}

#[test]
fn n_increments_from_zero_give_n() {
    for n in [0_i64, 1, 2, 7, 100] {
        let mut store = CounterStore::new();
        for _ in 0..n {
            store.increment();
        }
        assert_eq!(store.value(), n);
    }
}

#[test]
fn n_decrements_from_zero_give_minus_n() {
    for n in [0_i64, 1, 2, 7, 100] {
        let mut store = CounterStore::new();
        for _ in 0..n {
            store.decrement();
        }
        assert_eq!(store.value(), -n);
    }
}

#[test]
fn increment_and_decrement_are_inverses() {
    for start in [i64::MIN, -5, 0, 5, i64::MAX] {
        let mut store = CounterStore::with_state(CounterState::new(start));
        store.increment();
        store.decrement();
        assert_eq!(store.value(), start);

        store.decrement();
        store.increment();
        assert_eq!(store.value(), start);
    }
}

#[test]
fn reducer_is_pure() {
    let state = CounterState::new(3);
    let a = CounterReducer::reduce(state, CounterIntent::Increment);
    let b = CounterReducer::reduce(state, CounterIntent::Increment);
    assert_eq!(a, b);
    assert_eq!(state.value, 3);
}

#[test]
fn every_mutation_notifies_with_updated_value() {
    let mut store = CounterStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    store.subscribe(move |state: &CounterState| sink.borrow_mut().push(state.value));

    store.increment();
    store.increment();
    store.decrement();

    assert_eq!(*seen.borrow(), vec![1, 2, 1]);
}

#[test]
fn all_subscribers_observe_the_same_value() {
    let mut store = CounterStore::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    for _ in 0..3 {
        let sink = Rc::clone(&seen);
        store.subscribe(move |state: &CounterState| sink.borrow_mut().push(state.value));
    }

    store.decrement();
    assert_eq!(*seen.borrow(), vec![-1, -1, -1]);
}

#[test]
fn unsubscribed_listener_is_not_called() {
    let mut store = CounterStore::new();
    let calls = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&calls);
    let subscription = store.subscribe(move |_| *sink.borrow_mut() += 1);

    store.increment();
    assert!(store.unsubscribe(subscription));
    store.increment();

    assert_eq!(*calls.borrow(), 1);
    assert_eq!(store.value(), 2);
}

#[test]
fn dispatch_accepts_raw_intents() {
    let mut store = CounterStore::new();
    store.dispatch(CounterIntent::Increment);
    store.dispatch(CounterIntent::Increment);
    store.dispatch(CounterIntent::Decrement);
    assert_eq!(store.select(|state| state.value * 10), 10);
}
