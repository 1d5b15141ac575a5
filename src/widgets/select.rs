use crate::core::{Field, Value};
use crate::runtime::event::WidgetAction;
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::WidgetBase;
use crate::widgets::choice::Choice;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext,
};

/// `‹ option ›` spinner bound to one form field, with a leading placeholder
/// entry standing for "nothing selected" (value "").
pub struct SelectInput {
    base: WidgetBase,
    field: Field,
    placeholder: String,
    options: Vec<Choice>,
    selected: Option<usize>,
}

impl SelectInput {
    pub fn new(
        field: Field,
        label: impl Into<String>,
        placeholder: impl Into<String>,
        options: Vec<Choice>,
    ) -> Self {
        Self {
            base: WidgetBase::new(field.id(), label),
            field,
            placeholder: placeholder.into(),
            options,
            selected: None,
        }
    }

    fn selected_value(&self) -> &str {
        self.selected
            .and_then(|index| self.options.get(index))
            .map(|choice| choice.value.as_str())
            .unwrap_or("")
    }

    fn display_label(&self) -> &str {
        self.selected
            .and_then(|index| self.options.get(index))
            .map(|choice| choice.label.as_str())
            .unwrap_or(self.placeholder.as_str())
    }

    fn apply_selection(&mut self, next: Option<usize>) -> InteractionResult {
        if self.selected == next {
            return InteractionResult::handled();
        }
        self.selected = next;
        InteractionResult::with_action(WidgetAction::ValueChanged {
            field: self.field,
            value: Value::text(self.selected_value()),
        })
    }

    /// Cycle through placeholder → options → placeholder.
    fn move_by(&mut self, direction: isize) -> InteractionResult {
        if self.options.is_empty() {
            return InteractionResult::ignored();
        }
        // Ring of len + 1 positions; slot 0 is the placeholder.
        let len = self.options.len() as isize;
        let slot = match self.selected {
            Some(index) => index as isize + 1,
            None => 0,
        };
        let next = (slot + direction).rem_euclid(len + 1) - 1;
        let next = (next >= 0).then_some(next as usize);
        self.apply_selection(next)
    }
}

impl Drawable for SelectInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, _ctx: &RenderContext) -> DrawOutput {
        let style = if self.selected.is_some() {
            Style::default()
        } else {
            Style::new().color(Color::DarkGrey)
        };
        DrawOutput {
            lines: vec![vec![Span::styled(
                format!("‹ {} ›", self.display_label()),
                style,
            )]],
        }
    }
}

impl Interactive for SelectInput {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Left | KeyCode::Up => self.move_by(-1),
            KeyCode::Right | KeyCode::Down => self.move_by(1),
            KeyCode::Enter => InteractionResult::input_done(),
            _ => InteractionResult::ignored(),
        }
    }

    fn value(&self) -> Option<Value> {
        Some(Value::text(self.selected_value()))
    }

    fn set_value(&mut self, value: Value) {
        let Some(text) = value.as_text() else {
            return;
        };
        self.selected = self
            .options
            .iter()
            .position(|choice| choice.value == text);
    }
}

#[cfg(test)]
mod tests {
    use super::SelectInput;
    use crate::core::{Field, Value};
    use crate::runtime::event::WidgetAction;
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::widgets::choice::Choice;
    use crate::widgets::traits::Interactive;

    fn food_input() -> SelectInput {
        SelectInput::new(
            Field::FavFood,
            "Favorite Food",
            "-- Select Favorite Food --",
            vec![
                Choice::new("pizza", "Pizza"),
                Choice::new("spaghetti", "Spaghetti"),
                Choice::new("broccoli", "Broccoli"),
            ],
        )
    }

    #[test]
    fn starts_on_the_placeholder() {
        let input = food_input();
        assert_eq!(input.value(), Some(Value::text("")));
    }

    #[test]
    fn cycling_right_walks_options_then_wraps_to_placeholder() {
        let mut input = food_input();

        let result = input.on_key(KeyEvent::key(KeyCode::Right));
        let WidgetAction::ValueChanged { value, .. } = &result.actions[0] else {
            panic!("expected value change");
        };
        assert_eq!(*value, Value::text("pizza"));

        input.on_key(KeyEvent::key(KeyCode::Right));
        input.on_key(KeyEvent::key(KeyCode::Right));
        assert_eq!(input.value(), Some(Value::text("broccoli")));

        let result = input.on_key(KeyEvent::key(KeyCode::Right));
        let WidgetAction::ValueChanged { value, .. } = &result.actions[0] else {
            panic!("expected value change");
        };
        assert_eq!(*value, Value::text(""));
    }

    #[test]
    fn cycling_left_from_placeholder_lands_on_the_last_option() {
        let mut input = food_input();
        let result = input.on_key(KeyEvent::key(KeyCode::Left));
        let WidgetAction::ValueChanged { value, .. } = &result.actions[0] else {
            panic!("expected value change");
        };
        assert_eq!(*value, Value::text("broccoli"));
    }

    #[test]
    fn set_value_restores_by_payload_value() {
        let mut input = food_input();
        input.set_value(Value::text("spaghetti"));
        assert_eq!(input.value(), Some(Value::text("spaghetti")));
        input.set_value(Value::text(""));
        assert_eq!(input.value(), Some(Value::text("")));
    }
}
