use crate::core::{Field, Value};
use crate::runtime::event::WidgetAction;
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::WidgetBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext,
};

/// One selectable option: the payload value plus its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Inline radio-style picker bound to one form field. Starts with nothing
/// chosen; the field's value stays empty until the user picks.
pub struct ChoiceInput {
    base: WidgetBase,
    field: Field,
    options: Vec<Choice>,
    selected: Option<usize>,
}

impl ChoiceInput {
    pub fn new(field: Field, label: impl Into<String>, options: Vec<Choice>) -> Self {
        Self {
            base: WidgetBase::new(field.id(), label),
            field,
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

    fn select(&mut self, index: usize) -> InteractionResult {
        if self.selected == Some(index) {
            return InteractionResult::handled();
        }
        self.selected = Some(index);
        InteractionResult::with_action(WidgetAction::ValueChanged {
            field: self.field,
            value: Value::text(self.selected_value()),
        })
    }

    fn move_by(&mut self, direction: isize) -> InteractionResult {
        if self.options.is_empty() {
            return InteractionResult::ignored();
        }
        let len = self.options.len() as isize;
        let next = match self.selected {
            Some(current) => (current as isize + direction + len) % len,
            None if direction < 0 => len - 1,
            None => 0,
        };
        self.select(next as usize)
    }

    fn select_by_letter(&mut self, ch: char) -> InteractionResult {
        let needle = ch.to_ascii_lowercase();
        let index = self.options.iter().position(|choice| {
            choice
                .label
                .chars()
                .next()
                .is_some_and(|c| c.to_ascii_lowercase() == needle)
        });
        match index {
            Some(index) => self.select(index),
            None => InteractionResult::ignored(),
        }
    }
}

impl Drawable for ChoiceInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, _ctx: &RenderContext) -> DrawOutput {
        let active_style = Style::new().color(Color::Cyan).bold();
        let inactive_style = Style::new().color(Color::DarkGrey);

        let mut spans = vec![];
        for (index, choice) in self.options.iter().enumerate() {
            if index > 0 {
                spans.push(Span::new(" / "));
            }
            let chosen = self.selected == Some(index);
            if chosen {
                spans.push(Span::styled("●", Style::new().color(Color::Green).bold()));
            } else {
                spans.push(Span::styled("○", inactive_style));
            }
            spans.push(Span::new(" "));
            let style = if chosen { active_style } else { inactive_style };
            spans.push(Span::styled(choice.label.clone(), style));
        }

        DrawOutput { lines: vec![spans] }
    }
}

impl Interactive for ChoiceInput {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Left | KeyCode::Up => self.move_by(-1),
            KeyCode::Right | KeyCode::Down => self.move_by(1),
            KeyCode::Char(ch) => self.select_by_letter(ch),
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
    use super::{Choice, ChoiceInput};
    use crate::core::{Field, Value};
    use crate::runtime::event::WidgetAction;
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::widgets::traits::Interactive;

    fn language_input() -> ChoiceInput {
        ChoiceInput::new(
            Field::FavLanguage,
            "Favorite Language",
            vec![
                Choice::new("javascript", "JavaScript"),
                Choice::new("rust", "Rust"),
            ],
        )
    }

    #[test]
    fn starts_with_nothing_chosen() {
        let input = language_input();
        assert_eq!(input.value(), Some(Value::text("")));
    }

    #[test]
    fn picking_emits_the_option_value_not_its_label() {
        let mut input = language_input();
        let result = input.on_key(KeyEvent::key(KeyCode::Right));
        let WidgetAction::ValueChanged { field, value } = &result.actions[0] else {
            panic!("expected value change");
        };
        assert_eq!(*field, Field::FavLanguage);
        assert_eq!(*value, Value::text("javascript"));
    }

    #[test]
    fn first_letter_selects() {
        let mut input = language_input();
        let result = input.on_key(KeyEvent::char('r'));
        let WidgetAction::ValueChanged { value, .. } = &result.actions[0] else {
            panic!("expected value change");
        };
        assert_eq!(*value, Value::text("rust"));
    }

    #[test]
    fn reselecting_the_same_option_emits_nothing() {
        let mut input = language_input();
        input.on_key(KeyEvent::char('r'));
        let result = input.on_key(KeyEvent::char('r'));
        assert!(result.actions.is_empty());
    }

    #[test]
    fn set_value_restores_by_payload_value() {
        let mut input = language_input();
        input.set_value(Value::text("rust"));
        assert_eq!(input.value(), Some(Value::text("rust")));
        input.set_value(Value::text(""));
        assert_eq!(input.value(), Some(Value::text("")));
    }
}
