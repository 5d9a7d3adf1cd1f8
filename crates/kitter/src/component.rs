//! The component trait and leaf content.

use crate::context::RenderContext;
use crate::html::{Element, Node};

/// A presentational unit: given the render context, produce markup.
///
/// Rendering is infallible and pure with respect to its inputs:
/// resolution always yields a usable style bundle, and the same context
/// and props always produce the same node tree.
pub trait Component {
    fn render(&self, ctx: &RenderContext<'_>) -> Node;

    /// Boxes the component for use as a child.
    fn boxed(self) -> Box<dyn Component>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl Component for Box<dyn Component> {
    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        (**self).render(ctx)
    }
}

/// Plain text content, escaped on write.
pub struct Text {
    content: String,
}

impl Text {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

impl Component for Text {
    fn render(&self, _ctx: &RenderContext<'_>) -> Node {
        Node::Text(self.content.clone())
    }
}

// Raw elements can sit between components, so a page can carry markup
// the library has no component for.
impl Component for Element {
    fn render(&self, _ctx: &RenderContext<'_>) -> Node {
        Node::Element(self.clone())
    }
}
