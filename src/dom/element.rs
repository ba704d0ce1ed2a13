use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::warn;

use crate::core::Viewport;

#[derive(Debug, Default)]
struct ElementNode {
    tag: String,
    classes: SmallVec<[String; 4]>,
    attributes: IndexMap<String, String>,
    text: Option<String>,
    children: Vec<Element>,
    parent: Weak<RefCell<ElementNode>>,
    hidden: bool,
    size: Option<Viewport>,
}

/// Shared handle to a node of an in-memory element tree.
///
/// Cloning the handle does not clone the node. Handles are single-threaded
/// and compare by identity through [`Element::ptr_eq`].
#[derive(Debug, Clone)]
pub struct Element {
    node: Rc<RefCell<ElementNode>>,
}

impl Element {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            node: Rc::new(RefCell::new(ElementNode {
                tag: tag.into(),
                ..ElementNode::default()
            })),
        }
    }

    #[must_use]
    pub fn with_class(self, class: impl Into<String>) -> Self {
        self.add_class(class);
        self
    }

    #[must_use]
    pub fn with_attribute(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.set_text(text);
        self
    }

    #[must_use]
    pub fn with_size(self, viewport: Viewport) -> Self {
        self.set_size(Some(viewport));
        self
    }

    #[must_use]
    pub fn tag(&self) -> String {
        self.node.borrow().tag.clone()
    }

    /// Adds a class unless it is already present. Whitespace-separated input
    /// adds each class in turn.
    pub fn add_class(&self, class: impl Into<String>) {
        let class = class.into();
        let mut node = self.node.borrow_mut();
        for name in class.split_whitespace() {
            if !node.classes.iter().any(|existing| existing == name) {
                node.classes.push(name.to_owned());
            }
        }
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.node.borrow().classes.iter().any(|name| name == class)
    }

    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.node.borrow().classes.to_vec()
    }

    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.node
            .borrow_mut()
            .attributes
            .insert(name.into(), value.into());
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.node.borrow().attributes.get(name).cloned()
    }

    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.node.borrow().text.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.node.borrow_mut().text = Some(text.into());
    }

    /// Appends `child`, detaching it from its previous parent first.
    ///
    /// Appending an element to itself or to one of its descendants is ignored.
    pub fn append_child(&self, child: &Element) {
        if self.ptr_eq(child) || child.is_ancestor_of(self) {
            warn!(tag = %child.tag(), "refusing to append an element into its own subtree");
            return;
        }
        child.detach();
        child.node.borrow_mut().parent = Rc::downgrade(&self.node);
        self.node.borrow_mut().children.push(child.clone());
    }

    /// Removes every child, leaving them parentless.
    pub fn clear_children(&self) {
        let children = std::mem::take(&mut self.node.borrow_mut().children);
        for child in children {
            child.node.borrow_mut().parent = Weak::new();
        }
    }

    /// Removes this element from its parent, if any.
    pub fn detach(&self) {
        let Some(parent) = self.parent() else {
            return;
        };
        parent
            .node
            .borrow_mut()
            .children
            .retain(|sibling| !sibling.ptr_eq(self));
        self.node.borrow_mut().parent = Weak::new();
    }

    #[must_use]
    pub fn children(&self) -> Vec<Element> {
        self.node.borrow().children.clone()
    }

    #[must_use]
    pub fn parent(&self) -> Option<Element> {
        self.node
            .borrow()
            .parent
            .upgrade()
            .map(|node| Element { node })
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.node.borrow_mut().hidden = hidden;
    }

    /// An element is visible when neither it nor any ancestor is hidden.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        let mut current = Some(self.clone());
        while let Some(element) = current {
            if element.node.borrow().hidden {
                return false;
            }
            current = element.parent();
        }
        true
    }

    pub fn set_size(&self, size: Option<Viewport>) {
        self.node.borrow_mut().size = size;
    }

    /// Own size if set, otherwise the size of the nearest sized ancestor.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        let mut current = Some(self.clone());
        while let Some(element) = current {
            if let Some(size) = element.node.borrow().size {
                return size;
            }
            current = element.parent();
        }
        Viewport::default()
    }

    /// Depth-first, document-order search of descendants carrying `class`.
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<Element> {
        let mut found = Vec::new();
        for child in self.children() {
            if child.has_class(class) {
                found.push(child.clone());
            }
            found.extend(child.find_by_class(class));
        }
        found
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    #[must_use]
    pub fn is_ancestor_of(&self, other: &Element) -> bool {
        let mut current = other.parent();
        while let Some(element) = current {
            if element.ptr_eq(self) {
                return true;
            }
            current = element.parent();
        }
        false
    }

    /// Serializes the subtree as markup. Text and attribute values are escaped.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let node = self.node.borrow();
        let _ = write!(out, "<{}", node.tag);
        if !node.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&node.classes.join(" ")));
        }
        for (name, value) in &node.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
        out.push('>');
        if let Some(text) = &node.text {
            out.push_str(&escape(text));
        }
        for child in &node.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", node.tag);
    }
}

fn escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
