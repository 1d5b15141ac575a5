use crate::core::Field;
use crate::form::FormSchema;
use crate::runtime::event::WidgetAction;
use crate::state::focus::FocusEngine;
use crate::state::store::FormStore;
use crate::task::{TaskCompletion, TaskInvocation, TaskOutput};
use crate::terminal::KeyEvent;
use crate::widgets::traits::{FormWidget, InteractionResult, RenderContext, TextAction};
use crate::widgets::{CheckboxInput, Choice, ChoiceInput, SelectInput, SubmitButton, TextInput};
use std::sync::Arc;

pub const SUBMIT_ID: &str = "submit";

/// The whole application state: the form store plus the widgets bound to
/// it, driven through the reducer.
pub struct AppState {
    store: FormStore,
    widgets: Vec<Box<dyn FormWidget>>,
    focus: FocusEngine,
    should_exit: bool,
}

impl AppState {
    /// The registration form: username, favorite language, favorite food,
    /// terms agreement, submit.
    pub fn registration(schema: Arc<FormSchema>) -> Self {
        let widgets: Vec<Box<dyn FormWidget>> = vec![
            Box::new(
                TextInput::new(Field::Username, "Username").with_placeholder("Type Username"),
            ),
            Box::new(ChoiceInput::new(
                Field::FavLanguage,
                "Favorite Language",
                vec![
                    Choice::new("javascript", "JavaScript"),
                    Choice::new("rust", "Rust"),
                ],
            )),
            Box::new(SelectInput::new(
                Field::FavFood,
                "Favorite Food",
                "-- Select Favorite Food --",
                vec![
                    Choice::new("pizza", "Pizza"),
                    Choice::new("spaghetti", "Spaghetti"),
                    Choice::new("broccoli", "Broccoli"),
                ],
            )),
            Box::new(CheckboxInput::new(Field::Agreement, "Agree to our terms")),
            Box::new(SubmitButton::new(SUBMIT_ID, "Submit")),
        ];

        let focus = FocusEngine::from_ids(widgets.iter().map(|w| w.id().to_string()).collect());

        Self {
            store: FormStore::new(schema),
            widgets,
            focus,
            should_exit: false,
        }
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn widgets(&self) -> &[Box<dyn FormWidget>] {
        self.widgets.as_slice()
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    pub fn focused_id(&self) -> Option<&str> {
        self.focus.current_id()
    }

    pub fn focus_next(&mut self) {
        self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus.prev();
    }

    pub fn render_context(&self) -> RenderContext {
        RenderContext {
            focused_id: self.focused_id().map(ToOwned::to_owned),
            submit_enabled: self.store.can_submit(),
        }
    }

    pub fn dispatch_key_to_focused(&mut self, key: KeyEvent) -> InteractionResult {
        match self.focused_widget_mut() {
            Some(widget) => widget.on_key(key),
            None => InteractionResult::ignored(),
        }
    }

    pub fn dispatch_text_action_to_focused(&mut self, action: TextAction) -> InteractionResult {
        match self.focused_widget_mut() {
            Some(widget) => widget.on_text_action(action),
            None => InteractionResult::ignored(),
        }
    }

    /// Apply one widget action to the store. Returns the task invocations
    /// the runner must spawn as a consequence.
    pub fn handle_action(&mut self, action: WidgetAction) -> Vec<TaskInvocation> {
        match action {
            WidgetAction::ValueChanged { field, value } => {
                vec![self.store.apply_change(field, value)]
            }
            WidgetAction::InputDone => {
                self.focus.next();
                vec![]
            }
            WidgetAction::SubmitRequested => self.store.begin_submit().into_iter().collect(),
        }
    }

    /// Fold a finished task back into the store. A reset of the values (on
    /// accepted submission) is pushed back out to the widgets.
    pub fn apply_completion(&mut self, completion: TaskCompletion) {
        match completion.output {
            TaskOutput::Validation { field, result } => {
                self.store
                    .apply_validation(field, completion.run_id, result);
            }
            TaskOutput::Submission { outcome } => {
                if self.store.complete_submit(completion.run_id, outcome) {
                    self.sync_widgets_from_store();
                }
            }
        }
    }

    fn sync_widgets_from_store(&mut self) {
        let values = self.store.values().clone();
        for widget in &mut self.widgets {
            if let Some(field) = Field::from_id(widget.id()) {
                widget.set_value(values.get(field));
            }
        }
    }

    fn focused_widget_mut(&mut self) -> Option<&mut Box<dyn FormWidget>> {
        let id = self.focus.current_id()?.to_string();
        self.widgets.iter_mut().find(|widget| widget.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;
    use crate::core::{Field, Value};
    use crate::form::FormSchema;
    use crate::runtime::event::WidgetAction;
    use crate::submit::SubmitOutcome;
    use crate::task::{TaskCompletion, TaskOutput};
    use crate::terminal::KeyEvent;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::registration(Arc::new(FormSchema::registration()))
    }

    fn set(state: &mut AppState, field: Field, value: impl Into<Value>) {
        state.handle_action(WidgetAction::ValueChanged {
            field,
            value: value.into(),
        });
    }

    #[test]
    fn focus_order_matches_the_screen() {
        let mut state = state();
        let mut visited = Vec::new();
        for _ in 0..5 {
            visited.push(state.focused_id().unwrap().to_string());
            state.focus_next();
        }
        assert_eq!(
            visited,
            ["username", "favLanguage", "favFood", "agreement", "submit"]
        );
        // Wraps back around.
        assert_eq!(state.focused_id(), Some("username"));
    }

    #[test]
    fn accepted_submission_resets_the_widgets_too() {
        let mut state = state();
        // Type into the username widget so it holds real state of its own.
        for ch in "bob".chars() {
            let result = state.dispatch_key_to_focused(KeyEvent::char(ch));
            for action in result.actions {
                state.handle_action(action);
            }
        }
        set(&mut state, Field::FavLanguage, "rust");
        set(&mut state, Field::FavFood, "pizza");
        set(&mut state, Field::Agreement, true);

        let username_widget = &state.widgets()[0];
        assert_eq!(username_widget.value(), Some(Value::text("bob")));

        let invocations = state.handle_action(WidgetAction::SubmitRequested);
        assert_eq!(invocations.len(), 1);

        state.apply_completion(TaskCompletion {
            run_id: invocations[0].run_id,
            output: TaskOutput::Submission {
                outcome: SubmitOutcome::Accepted {
                    message: "success!".into(),
                },
            },
        });

        assert_eq!(state.store().server().success(), Some("success!"));
        for widget in state.widgets() {
            match Field::from_id(widget.id()) {
                Some(Field::Agreement) => assert_eq!(widget.value(), Some(Value::Bool(false))),
                Some(_) => assert_eq!(widget.value(), Some(Value::text(""))),
                None => {}
            }
        }
    }

    #[test]
    fn submit_request_on_invalid_form_spawns_nothing() {
        let mut state = state();
        let invocations = state.handle_action(WidgetAction::SubmitRequested);
        assert!(invocations.is_empty());
    }
}
