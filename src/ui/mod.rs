pub mod renderer;
pub mod span;
pub mod style;

pub use renderer::{RenderFrame, Renderer};
pub use span::{Span, SpanLine};
pub use style::{Color, Style};
