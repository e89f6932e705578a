//! Tree serialization.
//!
//! A single depth-first walker emits every node; the [`Layout`] decides what
//! surrounds each line. [`Indented`] prefixes lines with one indent unit per
//! nesting level and ends them with a newline, [`Minified`] adds nothing.
//!
//! The walker keeps pending work on an explicit stack, so tree depth is not
//! bounded by the call stack. [`RenderOptions::max_depth`] sets an optional
//! limit.

use crate::attrs::{escape_value, open_tag_fragment};
use crate::error::RenderError;
use crate::node::{ContainerElement, Node};
use crate::options::{Escape, RenderOptions, RenderStyle};

/// Line layout used by the serializer.
///
/// Every emitted tag or text run is one "line": `begin_line` runs before it and
/// `end_line` after it.
pub trait Layout {
    /// Called before a line at nesting `depth` (the rendered node is depth 0).
    fn begin_line(&self, depth: usize, out: &mut String);

    /// Called after a line.
    fn end_line(&self, out: &mut String);
}

/// Multi-line layout with depth-proportional indentation.
#[derive(Clone, Copy, Debug)]
pub struct Indented<'a> {
    unit: &'a str,
}

impl<'a> Indented<'a> {
    /// Indent each level with `unit`.
    #[must_use]
    pub fn new(unit: &'a str) -> Self {
        Self { unit }
    }
}

impl Layout for Indented<'_> {
    fn begin_line(&self, depth: usize, out: &mut String) {
        for _ in 0..depth {
            out.push_str(self.unit);
        }
    }

    fn end_line(&self, out: &mut String) {
        out.push('\n');
    }
}

/// Single-line layout without any whitespace between tags.
#[derive(Clone, Copy, Debug, Default)]
pub struct Minified;

impl Layout for Minified {
    fn begin_line(&self, _depth: usize, _out: &mut String) {}

    fn end_line(&self, _out: &mut String) {}
}

/// Pending walker work.
enum Step<'a> {
    /// Emit a node and schedule its children.
    Enter(&'a Node, usize),
    /// Emit the opening tag of a container and schedule its children.
    Open(&'a ContainerElement, usize),
    /// Emit the closing tag of a container.
    Close(&'a ContainerElement, usize),
}

/// Render `node` and its descendants with `options`.
///
/// Returns [`RenderError::DepthLimitExceeded`] if `options.max_depth` is set
/// and any node lies deeper; no partial output is returned in that case.
pub fn render_node(node: &Node, options: &RenderOptions) -> Result<String, RenderError> {
    render_from(Step::Enter(node, 0), options)
}

/// Render a container element and its descendants with `options`.
pub(crate) fn render_container(
    element: &ContainerElement,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    render_from(Step::Open(element, 0), options)
}

fn render_from(start: Step<'_>, options: &RenderOptions) -> Result<String, RenderError> {
    let html = match options.style {
        RenderStyle::Indented => write_tree(start, &Indented::new(&options.indent), options)?,
        RenderStyle::Minified => write_tree(start, &Minified, options)?,
    };
    tracing::debug!(style = ?options.style, bytes = html.len(), "Rendered tree");
    Ok(html)
}

/// Render `node` with a custom [`Layout`].
///
/// `options.style` and `options.indent` are ignored; the layout decides line
/// framing.
pub fn render_with_layout<L: Layout>(
    node: &Node,
    layout: &L,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    write_tree(Step::Enter(node, 0), layout, options)
}

fn write_tree<L: Layout>(
    start: Step<'_>,
    layout: &L,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let escape = options.escape;
    let mut out = String::with_capacity(4096);
    let mut stack = vec![start];

    while let Some(step) = stack.pop() {
        match step {
            Step::Enter(node, depth) => {
                check_depth(depth, options.max_depth)?;
                match node {
                    Node::Plain(text) => {
                        layout.begin_line(depth, &mut out);
                        out.push_str(&escape_value(text.content(), escape));
                        layout.end_line(&mut out);
                    }
                    Node::Void(el) => {
                        layout.begin_line(depth, &mut out);
                        out.push('<');
                        out.push_str(&open_tag_fragment(el.tag(), el.self_closing_slash(), escape));
                        out.push('>');
                        layout.end_line(&mut out);
                    }
                    Node::Content(el) => {
                        layout.begin_line(depth, &mut out);
                        out.push('<');
                        out.push_str(&open_tag_fragment(el.tag(), false, escape));
                        out.push('>');
                        out.push_str(&escape_value(el.content(), escape));
                        push_close_tag(el.name(), &mut out);
                        layout.end_line(&mut out);
                    }
                    Node::Container(el) => {
                        open_container(el, depth, layout, escape, &mut stack, &mut out);
                    }
                }
            }
            Step::Open(el, depth) => {
                check_depth(depth, options.max_depth)?;
                open_container(el, depth, layout, escape, &mut stack, &mut out);
            }
            Step::Close(el, depth) => {
                layout.begin_line(depth, &mut out);
                push_close_tag(el.name(), &mut out);
                layout.end_line(&mut out);
            }
        }
    }

    Ok(out)
}

fn check_depth(depth: usize, max_depth: Option<usize>) -> Result<(), RenderError> {
    if let Some(limit) = max_depth
        && depth > limit
    {
        tracing::warn!(limit, "Tree depth limit exceeded");
        return Err(RenderError::DepthLimitExceeded { limit });
    }
    Ok(())
}

/// Emit the opening tag line and schedule children followed by the closing tag.
fn open_container<'a, L: Layout>(
    el: &'a ContainerElement,
    depth: usize,
    layout: &L,
    escape: Escape,
    stack: &mut Vec<Step<'a>>,
    out: &mut String,
) {
    layout.begin_line(depth, out);
    out.push('<');
    out.push_str(&open_tag_fragment(el.tag(), false, escape));
    out.push('>');
    layout.end_line(out);

    stack.push(Step::Close(el, depth));
    stack.extend(
        el.children()
            .iter()
            .rev()
            .map(|child| Step::Enter(child, depth + 1)),
    );
}

fn push_close_tag(name: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}
