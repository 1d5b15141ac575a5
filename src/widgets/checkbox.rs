use crate::core::{Field, Value};
use crate::runtime::event::WidgetAction;
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::WidgetBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext,
};

/// Boolean toggle bound to one form field. Space flips it; every flip emits
/// the new checked state.
pub struct CheckboxInput {
    base: WidgetBase,
    field: Field,
    checked: bool,
}

impl CheckboxInput {
    pub fn new(field: Field, label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(field.id(), label),
            field,
            checked: false,
        }
    }
}

impl Drawable for CheckboxInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    // No label row; the label sits next to the box.
    fn draw(&self, _ctx: &RenderContext) -> DrawOutput {
        let (symbol, style) = if self.checked {
            ("[✓]", Style::new().color(Color::Green))
        } else {
            ("[ ]", Style::new().color(Color::DarkGrey))
        };

        DrawOutput {
            lines: vec![vec![
                Span::styled(symbol, style),
                Span::new(" "),
                Span::new(self.base.label().to_string()),
            ]],
        }
    }
}

impl Interactive for CheckboxInput {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Char(' ') => {
                self.checked = !self.checked;
                InteractionResult::with_action(WidgetAction::ValueChanged {
                    field: self.field,
                    value: Value::Bool(self.checked),
                })
            }
            KeyCode::Enter => InteractionResult::input_done(),
            _ => InteractionResult::ignored(),
        }
    }

    fn value(&self) -> Option<Value> {
        Some(Value::Bool(self.checked))
    }

    fn set_value(&mut self, value: Value) {
        if let Some(flag) = value.to_bool() {
            self.checked = flag;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CheckboxInput;
    use crate::core::{Field, Value};
    use crate::runtime::event::WidgetAction;
    use crate::terminal::KeyEvent;
    use crate::widgets::traits::Interactive;

    #[test]
    fn space_toggles_and_emits_the_new_state() {
        let mut input = CheckboxInput::new(Field::Agreement, "Agree to our terms");
        assert_eq!(input.value(), Some(Value::Bool(false)));

        let result = input.on_key(KeyEvent::char(' '));
        let WidgetAction::ValueChanged { field, value } = &result.actions[0] else {
            panic!("expected value change");
        };
        assert_eq!(*field, Field::Agreement);
        assert_eq!(*value, Value::Bool(true));

        let result = input.on_key(KeyEvent::char(' '));
        let WidgetAction::ValueChanged { value, .. } = &result.actions[0] else {
            panic!("expected value change");
        };
        assert_eq!(*value, Value::Bool(false));
    }
}
