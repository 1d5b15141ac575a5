use crate::core::{Field, Value};
use crate::runtime::event::WidgetAction;
use crate::terminal::{CursorPos, KeyCode, KeyEvent};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::WidgetBase;
use crate::widgets::text_edit;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext, TextAction, TextEditState,
};
use unicode_width::UnicodeWidthChar;

/// Free-text input bound to one form field. Every edit emits a
/// `ValueChanged` action for the reducer.
pub struct TextInput {
    base: WidgetBase,
    field: Field,
    value: String,
    cursor: usize,
    placeholder: Option<String>,
}

impl TextInput {
    pub fn new(field: Field, label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(field.id(), label),
            field,
            value: String::new(),
            cursor: 0,
            placeholder: None,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    fn edited_result(&self) -> InteractionResult {
        InteractionResult::with_action(WidgetAction::ValueChanged {
            field: self.field,
            value: Value::text(self.value.clone()),
        })
    }
}

impl Drawable for TextInput {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn label(&self) -> &str {
        self.base.label()
    }

    fn draw(&self, _ctx: &RenderContext) -> DrawOutput {
        let line = if self.value.is_empty() {
            match &self.placeholder {
                Some(ph) => vec![Span::styled(
                    ph.clone(),
                    Style::new().color(Color::DarkGrey),
                )],
                None => vec![Span::new("")],
            }
        } else {
            vec![Span::new(self.value.clone())]
        };

        DrawOutput { lines: vec![line] }
    }
}

impl Interactive for TextInput {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Char(ch) => {
                text_edit::insert_char(&mut self.value, &mut self.cursor, ch);
                self.edited_result()
            }
            KeyCode::Backspace => {
                if text_edit::backspace_char(&mut self.value, &mut self.cursor) {
                    return self.edited_result();
                }
                InteractionResult::ignored()
            }
            KeyCode::Delete => {
                if text_edit::delete_char(&mut self.value, &mut self.cursor) {
                    return self.edited_result();
                }
                InteractionResult::ignored()
            }
            KeyCode::Left => {
                if text_edit::move_left(&mut self.cursor, &self.value) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Right => {
                if text_edit::move_right(&mut self.cursor, &self.value) {
                    return InteractionResult::handled();
                }
                InteractionResult::ignored()
            }
            KeyCode::Home => {
                self.cursor = 0;
                InteractionResult::handled()
            }
            KeyCode::End => {
                self.cursor = text_edit::char_count(&self.value);
                InteractionResult::handled()
            }
            KeyCode::Enter => InteractionResult::input_done(),
            _ => InteractionResult::ignored(),
        }
    }

    fn text_editing(&mut self) -> Option<TextEditState<'_>> {
        Some(TextEditState {
            value: &mut self.value,
            cursor: &mut self.cursor,
        })
    }

    fn on_text_action(&mut self, action: TextAction) -> InteractionResult {
        let Some(mut state) = self.text_editing() else {
            return InteractionResult::ignored();
        };
        if action.apply(&mut state) {
            return self.edited_result();
        }
        InteractionResult::ignored()
    }

    fn value(&self) -> Option<Value> {
        Some(Value::text(self.value.clone()))
    }

    fn set_value(&mut self, value: Value) {
        if let Some(text) = value.as_text() {
            self.value = text.to_string();
            self.cursor = text_edit::char_count(&self.value);
        }
    }

    fn cursor_pos(&self) -> Option<CursorPos> {
        let col: usize = self
            .value
            .chars()
            .take(text_edit::clamp_cursor(self.cursor, &self.value))
            .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
            .sum();
        Some(CursorPos {
            col: col as u16,
            row: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::TextInput;
    use crate::core::{Field, Value};
    use crate::runtime::event::WidgetAction;
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::widgets::traits::Interactive;

    fn type_text(input: &mut TextInput, text: &str) -> Vec<WidgetAction> {
        let mut actions = Vec::new();
        for ch in text.chars() {
            actions.extend(input.on_key(KeyEvent::char(ch)).actions);
        }
        actions
    }

    #[test]
    fn every_keystroke_emits_the_new_value() {
        let mut input = TextInput::new(Field::Username, "Username");
        let actions = type_text(&mut input, "bob");

        assert_eq!(actions.len(), 3);
        let WidgetAction::ValueChanged { field, value } = actions.last().unwrap() else {
            panic!("expected value change");
        };
        assert_eq!(*field, Field::Username);
        assert_eq!(*value, Value::text("bob"));
    }

    #[test]
    fn backspace_emits_the_shortened_value() {
        let mut input = TextInput::new(Field::Username, "Username");
        type_text(&mut input, "bob");

        let result = input.on_key(KeyEvent::key(KeyCode::Backspace));
        let WidgetAction::ValueChanged { value, .. } = &result.actions[0] else {
            panic!("expected value change");
        };
        assert_eq!(*value, Value::text("bo"));
    }

    #[test]
    fn set_value_moves_cursor_to_end() {
        let mut input = TextInput::new(Field::Username, "Username");
        input.set_value(Value::text("alice"));
        assert_eq!(input.value(), Some(Value::text("alice")));
        assert_eq!(input.cursor_pos().unwrap().col, 5);
    }
}
