use crate::actions::Action;
use crate::reducers::bugs_reducer;
use crate::state::AppState;

/// Reducer - pure function that produces new state from current state + action
/// This is the root reducer that routes tagged actions to the slice reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Bugs(bugs_action) => {
            state.bugs = bugs_reducer::reduce(state.bugs, bugs_action);
        }
    }

    state
}
