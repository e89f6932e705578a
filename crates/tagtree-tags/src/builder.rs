//! Building tree nodes from catalog entries.

use tagtree::{Attribute, ContainerElement, ContentElement, Node, VoidElement};

use crate::catalog::{TagKind, TagSpec, lookup, lookup_any};
use crate::error::TagError;

/// Arguments for a catalog element.
///
/// Unset fields take the element defaults: no id, no classes, no slash, empty
/// content, every recognized attribute absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagArgs {
    id: Option<String>,
    classes: Vec<String>,
    slash: bool,
    content: Option<String>,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl TagArgs {
    /// Empty arguments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Append a class name.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Append several class names in order.
    #[must_use]
    pub fn classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    /// End a void element's opening tag with `/>`.
    #[must_use]
    pub fn slash(mut self, slash: bool) -> Self {
        self.slash = slash;
        self
    }

    /// Set a content element's text.
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set a recognized attribute. Setting a key twice keeps the last value.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    /// Append a child node to a container element.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }
}

impl TagSpec {
    /// Build a node for this entry.
    ///
    /// Recognized attributes are emitted in catalog order; keys the caller did
    /// not set are kept without a value and therefore not rendered.
    pub fn build(&self, args: TagArgs) -> Result<Node, TagError> {
        let TagArgs {
            id,
            classes,
            slash,
            content,
            attrs,
            children,
        } = args;

        if let Some((key, _)) = attrs.iter().find(|(key, _)| !self.recognizes(key)) {
            return Err(TagError::UnknownAttribute {
                tag: self.name.to_owned(),
                key: key.clone(),
            });
        }
        if slash && self.kind != TagKind::Void {
            return Err(TagError::SlashNotAllowed(self.name.to_owned()));
        }
        if content.is_some() && self.kind != TagKind::Content {
            return Err(TagError::ContentNotAllowed(self.name.to_owned()));
        }
        if !children.is_empty() && self.kind != TagKind::Container {
            return Err(TagError::ChildrenNotAllowed(self.name.to_owned()));
        }

        let attributes = self.attributes.iter().map(|key| {
            let value = attrs
                .iter()
                .rev()
                .find(|(k, _)| k.as_str() == *key)
                .map(|(_, v)| v.clone());
            Attribute::new(*key, value)
        });

        let node = match self.kind {
            TagKind::Void => VoidElement::new(self.name)
                .with_slash(slash)
                .with_id(id)
                .with_classes(classes)
                .with_attrs(attributes)
                .into(),
            TagKind::Content => ContentElement::new(self.name, content.unwrap_or_default())
                .with_id(id)
                .with_classes(classes)
                .with_attrs(attributes)
                .into(),
            TagKind::Container => {
                let mut element = ContainerElement::new(self.name)
                    .with_id(id)
                    .with_classes(classes)
                    .with_attrs(attributes);
                for child in children {
                    element.append_child(child);
                }
                element.into()
            }
        };
        Ok(node)
    }
}

/// Resolve the catalog entry for `name` given the arguments.
///
/// Arguments with children prefer a container entry; otherwise the first
/// entry for the name is used.
fn resolve(name: &str, args: &TagArgs) -> Result<&'static TagSpec, TagError> {
    let preferred = if args.children.is_empty() {
        None
    } else {
        lookup(name, TagKind::Container)
    };
    preferred
        .or_else(|| lookup_any(name))
        .ok_or_else(|| TagError::UnknownTag(name.to_owned()))
}

/// Build a node for the catalog element `name`.
///
/// # Example
///
/// ```
/// use tagtree::{render_node, RenderOptions};
/// use tagtree_tags::{TagArgs, build};
///
/// let link = build("a", TagArgs::new().content("Home").attr("href", "/"))?;
/// let html = render_node(&link, &RenderOptions::minified())?;
/// assert_eq!(html, r#"<a href="/">Home</a>"#);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn build(name: &str, args: TagArgs) -> Result<Node, TagError> {
    let spec = resolve(name, &args)?;
    spec.build(args).inspect_err(|e| {
        tracing::debug!(tag = name, error = %e, "Rejected tag arguments");
    })
}

/// Catalog-driven building on containers.
pub trait TagsExt {
    /// Build the catalog element `name` and append it.
    fn push_tag(&mut self, name: &str, args: TagArgs) -> Result<&mut Self, TagError>;

    /// Build the catalog container `name`, populate it through `children`,
    /// then append it.
    fn push_container<F>(
        &mut self,
        name: &str,
        args: TagArgs,
        children: F,
    ) -> Result<&mut Self, TagError>
    where
        F: FnOnce(&mut ContainerElement) -> Result<(), TagError>;
}

impl TagsExt for ContainerElement {
    fn push_tag(&mut self, name: &str, args: TagArgs) -> Result<&mut Self, TagError> {
        let node = build(name, args)?;
        self.append_child(node);
        Ok(self)
    }

    fn push_container<F>(
        &mut self,
        name: &str,
        args: TagArgs,
        children: F,
    ) -> Result<&mut Self, TagError>
    where
        F: FnOnce(&mut ContainerElement) -> Result<(), TagError>,
    {
        let spec = lookup(name, TagKind::Container)
            .or_else(|| lookup_any(name))
            .ok_or_else(|| TagError::UnknownTag(name.to_owned()))?;
        let Node::Container(mut element) = spec.build(args)? else {
            return Err(TagError::ChildrenNotAllowed(name.to_owned()));
        };
        children(&mut element)?;
        self.append_child(element);
        Ok(self)
    }
}
