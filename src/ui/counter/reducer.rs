use crate::ui::counter::intent::CounterIntent;
use crate::ui::counter::state::CounterState;
use crate::ui::mvi::Reducer;

pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Intent = CounterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent.delta() {
            Some(delta) => state.offset(delta),
            None => CounterState::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(intents: &[CounterIntent]) -> CounterState {
        intents
            .iter()
            .fold(CounterState::default(), |state, intent| {
                CounterReducer::reduce(state, *intent)
            })
    }

    #[test]
    fn increment_and_decrement_are_unit_steps() {
        let state = CounterReducer::reduce(CounterState::clamped(10), CounterIntent::Increment);
        assert_eq!(state.value(), 11);
        let state = CounterReducer::reduce(state, CounterIntent::Decrement);
        assert_eq!(state.value(), 10);
    }

    #[test]
    fn reset_ignores_prior_state() {
        for value in [0, 1, 49, 50, 99, 100] {
            let state = CounterReducer::reduce(CounterState::clamped(value), CounterIntent::Reset);
            assert_eq!(state.value(), 0);
        }
    }

    #[test]
    fn mixed_sequence_stays_in_range() {
        let state = reduce_all(&[
            CounterIntent::DecrementBy10,
            CounterIntent::Increment,
            CounterIntent::IncrementBy10,
            CounterIntent::Decrement,
        ]);
        assert_eq!(state.value(), 10);
    }
}
