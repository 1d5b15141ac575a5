use crate::core::Value;
use crate::runtime::event::WidgetAction;
use crate::terminal::{CursorPos, KeyEvent};
use crate::ui::span::SpanLine;
use crate::widgets::text_edit;

#[derive(Debug, Clone, Default)]
pub struct RenderContext {
    pub focused_id: Option<String>,
    pub submit_enabled: bool,
}

impl RenderContext {
    pub fn is_focused(&self, id: &str) -> bool {
        self.focused_id.as_deref() == Some(id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DrawOutput {
    pub lines: Vec<SpanLine>,
}

#[derive(Debug, Clone, Default)]
pub struct InteractionResult {
    pub handled: bool,
    pub request_render: bool,
    pub actions: Vec<WidgetAction>,
}

impl InteractionResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: Vec::new(),
        }
    }

    pub fn with_action(action: WidgetAction) -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: vec![action],
        }
    }

    pub fn input_done() -> Self {
        Self::with_action(WidgetAction::InputDone)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAction {
    DeleteWordLeft,
    DeleteWordRight,
}

pub struct TextEditState<'a> {
    pub value: &'a mut String,
    pub cursor: &'a mut usize,
}

impl TextAction {
    pub(crate) fn apply(self, state: &mut TextEditState<'_>) -> bool {
        match self {
            Self::DeleteWordLeft => text_edit::delete_word_left(state.value, state.cursor),
            Self::DeleteWordRight => text_edit::delete_word_right(state.value, state.cursor),
        }
    }
}

pub trait Drawable: Send {
    fn id(&self) -> &str;
    fn label(&self) -> &str {
        ""
    }
    fn draw(&self, ctx: &RenderContext) -> DrawOutput;
}

pub trait Interactive: Send {
    fn on_key(&mut self, key: KeyEvent) -> InteractionResult;

    fn text_editing(&mut self) -> Option<TextEditState<'_>> {
        None
    }

    fn on_text_action(&mut self, action: TextAction) -> InteractionResult {
        let Some(mut state) = self.text_editing() else {
            return InteractionResult::ignored();
        };
        if action.apply(&mut state) {
            InteractionResult::handled()
        } else {
            InteractionResult::ignored()
        }
    }

    fn value(&self) -> Option<Value> {
        None
    }
    fn set_value(&mut self, _value: Value) {}

    fn cursor_pos(&self) -> Option<CursorPos> {
        None
    }
}

pub trait FormWidget: Drawable + Interactive {}
impl<T> FormWidget for T where T: Drawable + Interactive {}
