//! Layout components for documentation pages.
//!
//! These are the structural pieces of a page: the outer wrapper, pages
//! and their titles/descriptions/sections, the table of contents, and
//! the scroll-to-top link. Each one resolves its classes through the
//! field rules declared beside it; the rule states the built-in default
//! and whether configured/call-site layers append or replace.

use crate::component::Component;
use crate::config::CssDimension;
use crate::context::RenderContext;
use crate::html::{Element, Node};
use crate::resolve::{FieldRule, join_classes, resolve_value};

/// Anchor id the scroll-to-top link targets. The [`Documentation`]
/// wrapper renders the matching anchor at the top of the document.
pub const SCROLL_ANCHOR_ID: &str = "scroll-to-top-anchor";

const DOCUMENTATION_CLASS: FieldRule = FieldRule::concat("flex min-h-screen justify-center");
const DOCUMENTATION_MAX_WIDTH: &str = "1000px";

/// Wraps an entire document: renders the scroll-to-top anchor target and
/// the centered page column.
pub struct Documentation {
    children: Vec<Box<dyn Component>>,
    max_width: Option<CssDimension>,
    class_name: Option<String>,
}

impl Documentation {
    pub fn new(children: Vec<Box<dyn Component>>) -> Self {
        Self {
            children,
            max_width: None,
            class_name: None,
        }
    }

    /// Maximum width of the page column (default `1000px`).
    pub fn with_max_width(mut self, max_width: impl Into<CssDimension>) -> Self {
        self.max_width = Some(max_width.into());
        self
    }

    /// Classes appended after the wrapper's built-in classes.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

impl Component for Documentation {
    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let cfg = &ctx.config().styles.documentation;
        let class = DOCUMENTATION_CLASS.resolve(cfg.class_name.as_deref(), self.class_name.as_deref());
        let max_width = resolve_value(
            self.max_width.as_ref(),
            cfg.max_width.as_ref(),
            CssDimension::from(DOCUMENTATION_MAX_WIDTH),
        );

        let column = Element::new("div")
            .class("w-full")
            .attr("style", format!("max-width:{}", max_width))
            .children(self.children.iter().map(|child| child.render(ctx)));

        Node::Fragment(vec![
            Element::new("a").attr("id", SCROLL_ANCHOR_ID).into_node(),
            Element::new("div")
                .class(&class)
                .child(column.into_node())
                .into_node(),
        ])
    }
}

const SCROLL_TO_TOP_CLASS: &str = "fixed top-4 right-4 flex flex-row items-center gap-4";
const SCROLL_TEXT_CLASS: FieldRule = FieldRule::concat("font-mono");
const SCROLL_ICON_CLASS: FieldRule = FieldRule::concat("w-4 h-4");
const SCROLL_LABEL: FieldRule = FieldRule::overriding("table of contents");
const SCROLL_ICON_COLOR: FieldRule = FieldRule::overriding("black");

/// A fixed link in the top right corner that returns the reader to the
/// top of the document.
///
/// Scrolling itself is the user agent's fragment navigation. The link
/// only points at the anchor the [`Documentation`] wrapper rendered;
/// nothing happens at render time.
#[derive(Default)]
pub struct ScrollToTop {
    text_class_name: Option<String>,
    icon_class_name: Option<String>,
    icon_color: Option<String>,
    icon_override: Option<Element>,
    text_override: Option<String>,
}

impl ScrollToTop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classes appended to the label span.
    pub fn with_text_class(mut self, class_name: impl Into<String>) -> Self {
        self.text_class_name = Some(class_name.into());
        self
    }

    /// Classes appended to the default icon.
    pub fn with_icon_class(mut self, class_name: impl Into<String>) -> Self {
        self.icon_class_name = Some(class_name.into());
        self
    }

    /// Stroke color for the default chevron icon (default `black`).
    pub fn with_icon_color(mut self, color: impl Into<String>) -> Self {
        self.icon_color = Some(color.into());
        self
    }

    /// Replaces the default icon wholesale.
    pub fn with_icon(mut self, icon: Element) -> Self {
        self.icon_override = Some(icon);
        self
    }

    /// Replaces the label text (default `table of contents`).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text_override = Some(text.into());
        self
    }
}

impl Component for ScrollToTop {
    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let cfg = &ctx.config().styles.scroll_to_top;
        let text_class =
            SCROLL_TEXT_CLASS.resolve(cfg.text_class_name.as_deref(), self.text_class_name.as_deref());
        let icon_class =
            SCROLL_ICON_CLASS.resolve(cfg.icon_class_name.as_deref(), self.icon_class_name.as_deref());
        let label = SCROLL_LABEL.resolve(cfg.text_override.as_deref(), self.text_override.as_deref());
        let icon_color =
            SCROLL_ICON_COLOR.resolve(cfg.icon_color.as_deref(), self.icon_color.as_deref());

        let icon = match &self.icon_override {
            Some(element) => element.clone().into_node(),
            None => chevron_up(&icon_color, &icon_class),
        };

        Element::new("a")
            .attr("href", format!("#{}", SCROLL_ANCHOR_ID))
            .class(SCROLL_TO_TOP_CLASS)
            .attr("role", "button")
            .attr("aria-label", "Scroll to top")
            .child(Element::new("span").class(&text_class).text(&label).into_node())
            .child(icon)
            .into_node()
    }
}

/// The default chevron-up icon.
fn chevron_up(color: &str, class: &str) -> Node {
    Element::new("svg")
        .class(class)
        .attr("viewBox", "0 0 24 24")
        .attr("fill", "none")
        .attr("stroke", color)
        .attr("stroke-width", "2")
        .attr("stroke-linecap", "round")
        .attr("stroke-linejoin", "round")
        .child(
            Element::self_closing("path")
                .attr("d", "m18 15-6-6-6 6")
                .into_node(),
        )
        .into_node()
}

const PAGE_CLASS: FieldRule = FieldRule::concat("min-h-screen w-full");
const PAGE_CENTER_CLASS: &str = "flex flex-col justify-center";

/// One page of a document. Set `id` to make the page reachable from a
/// [`DocumentContents`] entry.
pub struct Page {
    children: Vec<Box<dyn Component>>,
    class_name: Option<String>,
    center: Option<bool>,
    id: Option<String>,
}

impl Page {
    pub fn new(children: Vec<Box<dyn Component>>) -> Self {
        Self {
            children,
            class_name: None,
            center: None,
            id: None,
        }
    }

    /// Classes appended after the page's built-in classes.
    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Vertically center the page content (default false).
    pub fn center(mut self, center: bool) -> Self {
        self.center = Some(center);
        self
    }

    /// Anchor identifier for in-page navigation.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

impl Component for Page {
    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let cfg = &ctx.config().styles.page;
        let container = PAGE_CLASS.resolve(cfg.class_name.as_deref(), self.class_name.as_deref());
        let center = resolve_value(self.center.as_ref(), cfg.center.as_ref(), false);
        let layout = if center { PAGE_CENTER_CLASS } else { "" };

        let mut element = Element::new("div").class(&join_classes(&[container.as_str(), layout]));
        if let Some(id) = &self.id {
            element = element.attr("id", id);
        }
        element
            .children(self.children.iter().map(|child| child.render(ctx)))
            .into_node()
    }
}

const PAGE_TITLE_CLASS: FieldRule =
    FieldRule::concat("text-center text-4xl font-light mb-12 pt-20 text-fg font-mono");

/// The title of the current page.
pub struct PageTitle {
    title: String,
    class_name: Option<String>,
}

impl PageTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            class_name: None,
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

impl Component for PageTitle {
    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let cfg = &ctx.config().styles.page_title;
        let class = PAGE_TITLE_CLASS.resolve(cfg.class_name.as_deref(), self.class_name.as_deref());
        Element::new("h2").class(&class).text(&self.title).into_node()
    }
}

const PAGE_DESCRIPTION_CLASS: FieldRule = FieldRule::concat(
    "text-left text-md font-light mb-20 text-fg-light flex flex-col gap-8 font-mono",
);

/// Introductory copy for the current page.
pub struct PageDescription {
    children: Vec<Box<dyn Component>>,
    class_name: Option<String>,
}

impl PageDescription {
    pub fn new(children: Vec<Box<dyn Component>>) -> Self {
        Self {
            children,
            class_name: None,
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

impl Component for PageDescription {
    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let cfg = &ctx.config().styles.page_description;
        let class =
            PAGE_DESCRIPTION_CLASS.resolve(cfg.class_name.as_deref(), self.class_name.as_deref());
        Element::new("div")
            .class(&class)
            .children(self.children.iter().map(|child| child.render(ctx)))
            .into_node()
    }
}

const PAGE_SECTION_CLASS: &str = "flex w-full flex-col items-center justify-center gap-4";
const PAGE_SECTION_TITLE_CLASS: FieldRule =
    FieldRule::concat("text-2xl font-light text-left w-full font-mono text-fg-light");

/// Builds a titled section wrapper. Shared by [`PageSection`] and the
/// group components in the color and typography modules.
pub(crate) fn section_node(
    ctx: &RenderContext<'_>,
    title: &str,
    explicit_title_class: Option<&str>,
    body: Node,
) -> Node {
    let cfg = &ctx.config().styles.page_section;
    let title_class =
        PAGE_SECTION_TITLE_CLASS.resolve(cfg.title_class_name.as_deref(), explicit_title_class);

    Element::new("div")
        .class(PAGE_SECTION_CLASS)
        .child(Element::new("h2").class(&title_class).text(title).into_node())
        .child(body)
        .into_node()
}

/// A titled section on the current page.
pub struct PageSection {
    title: String,
    title_class_name: Option<String>,
    children: Vec<Box<dyn Component>>,
}

impl PageSection {
    pub fn new(title: impl Into<String>, children: Vec<Box<dyn Component>>) -> Self {
        Self {
            title: title.into(),
            title_class_name: None,
            children,
        }
    }

    /// Classes appended to the section title.
    pub fn with_title_class(mut self, class_name: impl Into<String>) -> Self {
        self.title_class_name = Some(class_name.into());
        self
    }
}

impl Component for PageSection {
    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let body = Node::Fragment(self.children.iter().map(|child| child.render(ctx)).collect());
        section_node(ctx, &self.title, self.title_class_name.as_deref(), body)
    }
}

/// One table-of-contents entry: a label and the anchor id it links to.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentsItem {
    pub label: String,
    pub id: String,
}

impl ContentsItem {
    pub fn new(label: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            id: id.into(),
        }
    }
}

impl<L: Into<String>, I: Into<String>> From<(L, I)> for ContentsItem {
    fn from((label, id): (L, I)) -> Self {
        Self::new(label, id)
    }
}

const DOCUMENT_CONTENTS_CLASS: FieldRule = FieldRule::concat(
    "grid grid-cols-4 gap-8 items-center w-full font-mono underline decoration-dotted justify-center mt-8",
);

/// The table of contents for the current document.
///
/// Entries render in input order, one link per entry. Ids need not be
/// unique: duplicates simply produce duplicate links, and nothing is
/// deduplicated or filtered.
pub struct DocumentContents {
    contents: Vec<ContentsItem>,
    class_name: Option<String>,
}

impl DocumentContents {
    pub fn new(contents: Vec<ContentsItem>) -> Self {
        Self {
            contents,
            class_name: None,
        }
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }
}

impl Component for DocumentContents {
    fn render(&self, ctx: &RenderContext<'_>) -> Node {
        let cfg = &ctx.config().styles.document_contents;
        let class =
            DOCUMENT_CONTENTS_CLASS.resolve(cfg.class_name.as_deref(), self.class_name.as_deref());

        Element::new("div")
            .class(&class)
            .children(self.contents.iter().map(|item| {
                Element::new("a")
                    .attr("href", format!("#{}", item.id))
                    .text(&item.label)
                    .into_node()
            }))
            .into_node()
    }
}
