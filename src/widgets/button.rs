use crate::runtime::event::WidgetAction;
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::widgets::base::WidgetBase;
use crate::widgets::traits::{
    DrawOutput, Drawable, InteractionResult, Interactive, RenderContext,
};

/// The submit button. Activation always emits `SubmitRequested`; whether
/// the submission actually starts is the store's call.
pub struct SubmitButton {
    base: WidgetBase,
}

impl SubmitButton {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            base: WidgetBase::new(id, label),
        }
    }
}

impl Drawable for SubmitButton {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let focused = self.base.is_focused(ctx);
        let style = if !ctx.submit_enabled {
            Style::new().color(Color::DarkGrey)
        } else if focused {
            Style::new().color(Color::White).background(Color::Blue).bold()
        } else {
            Style::new().color(Color::Cyan)
        };

        DrawOutput {
            lines: vec![vec![Span::styled(
                format!("[ {} ]", self.base.label()),
                style,
            )]],
        }
    }
}

impl Interactive for SubmitButton {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                InteractionResult::with_action(WidgetAction::SubmitRequested)
            }
            _ => InteractionResult::ignored(),
        }
    }
}
