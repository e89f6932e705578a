//! Markup tree node model.
//!
//! A tree is made of [`Node`]s. Every element variant embeds a [`Tag`] carrying
//! the fields shared by all elements (name, id, classes, attributes):
//!
//! - [`PlainText`]: raw text inlined into the tree, no tag of its own
//! - [`VoidElement`]: self-closing element without children or content
//! - [`ContentElement`]: element whose body is a single text string
//! - [`ContainerElement`]: element owning an ordered list of child nodes
//!
//! Nodes are immutable once built, except for a container's child list which
//! only grows through [`ContainerElement::append_child`].

use std::mem;

/// Name reported by [`Node::name`] for plain text nodes.
pub const PLAIN_NAME: &str = "_plain";

/// Attribute key with an optional value.
///
/// Attributes without a value are kept in the list but never rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute key (e.g., `href`).
    pub key: String,
    /// Attribute value, `None` suppresses the attribute in output.
    pub value: Option<String>,
}

impl Attribute {
    /// Create an attribute from a key and an optional value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        Self {
            key: key.into(),
            value: value.map(Into::into),
        }
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, Option<V>)> for Attribute {
    fn from((key, value): (K, Option<V>)) -> Self {
        Self::new(key, value)
    }
}

impl<K: Into<String>> From<(K, &str)> for Attribute {
    fn from((key, value): (K, &str)) -> Self {
        Self::new(key, Some(value))
    }
}

/// Fields shared by every element variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tag {
    name: String,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<Attribute>,
}

impl Tag {
    /// Create a tag with the given name and no id, classes or attributes.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
        }
    }

    /// Element name (e.g., `div`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Element id, if set.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Class names in insertion order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Attributes in insertion order, including those without a value.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    fn set_id(&mut self, id: Option<String>) {
        self.id = id;
    }

    fn push_class(&mut self, class: String) {
        self.classes.push(class);
    }

    fn push_attr(&mut self, attr: Attribute) {
        self.attributes.push(attr);
    }

    /// Replace the value of the first attribute named `key`, appending it if
    /// no such attribute exists.
    pub(crate) fn set_attr(&mut self, key: &str, value: Option<String>) {
        match self.attributes.iter_mut().find(|attr| attr.key == key) {
            Some(attr) => attr.value = value,
            None => self.push_attr(Attribute { key: key.to_owned(), value }),
        }
    }
}

/// Implements the builder methods shared by all element types.
macro_rules! tag_builders {
    ($ty:ty) => {
        impl $ty {
            /// Shared element fields.
            pub fn tag(&self) -> &Tag {
                &self.tag
            }

            /// Element name.
            pub fn name(&self) -> &str {
                self.tag.name()
            }

            /// Set or clear the id.
            #[must_use]
            pub fn with_id(mut self, id: Option<impl Into<String>>) -> Self {
                self.tag.set_id(id.map(Into::into));
                self
            }

            /// Append a class name. Duplicates are kept.
            #[must_use]
            pub fn with_class(mut self, class: impl Into<String>) -> Self {
                self.tag.push_class(class.into());
                self
            }

            /// Append several class names in order.
            #[must_use]
            pub fn with_classes<I, S>(mut self, classes: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                for class in classes {
                    self.tag.push_class(class.into());
                }
                self
            }

            /// Append an attribute. A `None` value keeps the key but renders nothing.
            #[must_use]
            pub fn with_attr(
                mut self,
                key: impl Into<String>,
                value: Option<impl Into<String>>,
            ) -> Self {
                self.tag.push_attr(Attribute::new(key, value));
                self
            }

            /// Append several attributes in order.
            #[must_use]
            pub fn with_attrs<I, A>(mut self, attrs: I) -> Self
            where
                I: IntoIterator<Item = A>,
                A: Into<Attribute>,
            {
                for attr in attrs {
                    self.tag.push_attr(attr.into());
                }
                self
            }
        }
    };
}

/// Raw text inlined into the tree.
///
/// Carries no id, classes or attributes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlainText {
    content: String,
}

impl PlainText {
    /// Create a text node.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Text content.
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Self-closing element such as `br` or `img`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoidElement {
    tag: Tag,
    slash: bool,
}

impl VoidElement {
    /// Create a void element rendered as `<name>`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            tag: Tag::new(name),
            slash: false,
        }
    }

    /// Whether the opening tag ends in `/>`.
    pub fn self_closing_slash(&self) -> bool {
        self.slash
    }

    /// Set whether the opening tag ends in `/>` rather than `>`.
    #[must_use]
    pub fn with_slash(mut self, slash: bool) -> Self {
        self.slash = slash;
        self
    }
}

tag_builders!(VoidElement);

/// Element whose body is a single text string, e.g. `<h1>Title</h1>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentElement {
    tag: Tag,
    content: String,
}

impl ContentElement {
    /// Create a content element.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tag: Tag::new(name),
            content: content.into(),
        }
    }

    /// Text between the opening and closing tags.
    pub fn content(&self) -> &str {
        &self.content
    }
}

tag_builders!(ContentElement);

/// Element owning an ordered list of child nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerElement {
    tag: Tag,
    children: Vec<Node>,
}

impl ContainerElement {
    /// Create an empty container.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            tag: Tag::new(name),
            children: Vec::new(),
        }
    }

    /// Children in append order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn tag_mut(&mut self) -> &mut Tag {
        &mut self.tag
    }

    /// Append a child to the end of the child list.
    ///
    /// Any node is accepted under any container; nesting legality is not
    /// checked. Always returns `true`.
    pub fn append_child(&mut self, child: impl Into<Node>) -> bool {
        self.children.push(child.into());
        true
    }

    /// Append a child, consuming and returning the container.
    #[must_use]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.append_child(child);
        self
    }

    /// Append a text node.
    pub fn plain(&mut self, content: impl Into<String>) -> &mut Self {
        self.append_child(PlainText::new(content));
        self
    }

    /// Append a void element.
    pub fn void(&mut self, element: VoidElement) -> &mut Self {
        self.append_child(element);
        self
    }

    /// Append a content element.
    pub fn content(&mut self, element: ContentElement) -> &mut Self {
        self.append_child(element);
        self
    }

    /// Populate `element` through `children`, then append it.
    pub fn container<F>(&mut self, mut element: ContainerElement, children: F) -> &mut Self
    where
        F: FnOnce(&mut ContainerElement),
    {
        children(&mut element);
        self.append_child(element);
        self
    }
}

tag_builders!(ContainerElement);

impl Drop for ContainerElement {
    // Flattens descendants so dropping a deep tree does not recurse.
    fn drop(&mut self) {
        let mut pending = mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Container(mut container) = node {
                pending.append(&mut container.children);
            }
        }
    }
}

/// One node of a markup tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Raw text.
    Plain(PlainText),
    /// Self-closing element.
    Void(VoidElement),
    /// Single-line element with text content.
    Content(ContentElement),
    /// Element with child nodes.
    Container(ContainerElement),
}

impl Node {
    /// Element name, or [`PLAIN_NAME`] for text nodes.
    pub fn name(&self) -> &str {
        match self {
            Node::Plain(_) => PLAIN_NAME,
            Node::Void(el) => el.name(),
            Node::Content(el) => el.name(),
            Node::Container(el) => el.name(),
        }
    }

    /// Shared element fields, `None` for text nodes.
    pub fn tag(&self) -> Option<&Tag> {
        match self {
            Node::Plain(_) => None,
            Node::Void(el) => Some(el.tag()),
            Node::Content(el) => Some(el.tag()),
            Node::Container(el) => Some(el.tag()),
        }
    }

    /// Child nodes, empty for every variant but containers.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Container(el) => el.children(),
            _ => &[],
        }
    }
}

impl From<PlainText> for Node {
    fn from(node: PlainText) -> Self {
        Node::Plain(node)
    }
}

impl From<VoidElement> for Node {
    fn from(node: VoidElement) -> Self {
        Node::Void(node)
    }
}

impl From<ContentElement> for Node {
    fn from(node: ContentElement) -> Self {
        Node::Content(node)
    }
}

impl From<ContainerElement> for Node {
    fn from(node: ContainerElement) -> Self {
        Node::Container(node)
    }
}
