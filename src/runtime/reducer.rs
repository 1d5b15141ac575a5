use crate::runtime::effect::Effect;
use crate::runtime::intent::Intent;
use crate::state::AppState;
use crate::widgets::traits::InteractionResult;

pub struct Reducer;

impl Reducer {
    pub fn reduce(state: &mut AppState, intent: Intent) -> Vec<Effect> {
        match intent {
            Intent::Exit => {
                state.request_exit();
                vec![Effect::RequestRender]
            }
            Intent::NextFocus => {
                state.focus_next();
                vec![Effect::RequestRender]
            }
            Intent::PrevFocus => {
                state.focus_prev();
                vec![Effect::RequestRender]
            }
            Intent::InputKey(key) => {
                let result = state.dispatch_key_to_focused(key);
                collect_effects(state, result)
            }
            Intent::TextAction(action) => {
                let result = state.dispatch_text_action_to_focused(action);
                collect_effects(state, result)
            }
            Intent::TaskCompleted(completion) => {
                state.apply_completion(completion);
                vec![Effect::RequestRender]
            }
            Intent::Noop => vec![],
        }
    }
}

fn collect_effects(state: &mut AppState, result: InteractionResult) -> Vec<Effect> {
    let mut effects = Vec::new();
    for action in result.actions {
        effects.extend(state.handle_action(action).into_iter().map(Effect::Spawn));
    }
    if result.request_render {
        effects.push(Effect::RequestRender);
    }
    effects
}
