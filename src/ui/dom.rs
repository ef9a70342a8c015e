//! Retained element tree the views render into.
//!
//! Nodes are shared handles (`Rc<RefCell<Node>>`): a view keeps handles to
//! the elements it patches, containers hold the same handles as children,
//! so a setter called after mounting is visible wherever the node is shown.
//! The tree never leaves the UI thread.

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

use crate::events::{FormKind, ShopEvent};
use crate::model::OrderField;

pub type NodeRef = Rc<RefCell<Node>>;

/// Startup configuration errors. A view that hits one cannot be built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("Element '{selector}' not found")]
    ElementNotFound { selector: String },

    #[error("Template '{id}' not found")]
    TemplateNotFound { id: String },

    #[error("Input '{name}' does not map to an order field")]
    UnknownField { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeKind {
    /// Vertical container.
    #[default]
    Block,
    /// Horizontal container; children share one line.
    Row,
    Text,
    Image,
    Button,
    Input,
}

#[derive(Debug, Clone, Default)]
pub struct Node {
    pub kind: NodeKind,
    pub classes: Vec<String>,
    pub name: Option<String>,
    pub text: String,
    pub src: String,
    pub value: String,
    pub placeholder: String,
    pub disabled: bool,
    /// Event emitted when the node is activated.
    pub on_click: Option<ShopEvent>,
    /// Form that receives a field-change event when the input is edited.
    pub on_input: Option<FormKind>,
    pub children: Vec<NodeRef>,
}

impl Node {
    pub fn new(kind: NodeKind, class: &str) -> Self {
        Self {
            kind,
            classes: vec![class.to_string()],
            ..Self::default()
        }
    }

    pub fn block(class: &str) -> Self {
        Self::new(NodeKind::Block, class)
    }

    pub fn row(class: &str) -> Self {
        Self::new(NodeKind::Row, class)
    }

    pub fn text(class: &str) -> Self {
        Self::new(NodeKind::Text, class)
    }

    pub fn image(class: &str) -> Self {
        Self::new(NodeKind::Image, class)
    }

    pub fn button(class: &str) -> Self {
        Self::new(NodeKind::Button, class)
    }

    pub fn input(class: &str, name: &str) -> Self {
        Self::new(NodeKind::Input, class).with_name(name)
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child.into_ref());
        self
    }

    pub fn into_ref(self) -> NodeRef {
        Rc::new(RefCell::new(self))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_focusable(&self) -> bool {
        !self.disabled && (self.on_click.is_some() || self.kind == NodeKind::Input)
    }
}

fn class_of(selector: &str) -> &str {
    selector.strip_prefix('.').unwrap_or(selector)
}

/// First descendant of `root` carrying the selector's class.
pub fn query_selector(root: &NodeRef, selector: &str) -> Option<NodeRef> {
    let class = class_of(selector);
    let node = root.borrow();
    for child in &node.children {
        if child.borrow().has_class(class) {
            return Some(Rc::clone(child));
        }
        if let Some(found) = query_selector(child, selector) {
            return Some(found);
        }
    }
    None
}

/// Every descendant of `root` carrying the selector's class, in document order.
pub fn query_selector_all(root: &NodeRef, selector: &str) -> Vec<NodeRef> {
    fn walk(node: &NodeRef, class: &str, out: &mut Vec<NodeRef>) {
        for child in &node.borrow().children {
            if child.borrow().has_class(class) {
                out.push(Rc::clone(child));
            }
            walk(child, class, out);
        }
    }

    let mut out = Vec::new();
    walk(root, class_of(selector), &mut out);
    out
}

/// Like [`query_selector`] but a missing element is an error.
pub fn ensure_element(root: &NodeRef, selector: &str) -> Result<NodeRef, DomError> {
    query_selector(root, selector).ok_or_else(|| DomError::ElementNotFound {
        selector: selector.to_string(),
    })
}

/// First descendant input whose `name` matches.
pub fn named_item(root: &NodeRef, name: &str) -> Option<NodeRef> {
    all_nodes(root)
        .into_iter()
        .skip(1)
        .find(|node| node.borrow().name.as_deref() == Some(name))
}

/// `root` and all of its descendants in document order.
pub fn all_nodes(root: &NodeRef) -> Vec<NodeRef> {
    fn walk(node: &NodeRef, out: &mut Vec<NodeRef>) {
        out.push(Rc::clone(node));
        for child in &node.borrow().children {
            walk(child, out);
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Focusable nodes under `root` (inclusive) in document order.
pub fn focusable_nodes(root: &NodeRef) -> Vec<NodeRef> {
    all_nodes(root)
        .into_iter()
        .filter(|node| node.borrow().is_focusable())
        .collect()
}

pub fn set_text(node: &NodeRef, text: impl Into<String>) {
    node.borrow_mut().text = text.into();
}

pub fn set_disabled(node: &NodeRef, disabled: bool) {
    node.borrow_mut().disabled = disabled;
}

pub fn set_image(node: &NodeRef, src: &str, alt: &str) {
    let mut node = node.borrow_mut();
    node.src = src.to_string();
    node.text = alt.to_string();
}

pub fn toggle_class(node: &NodeRef, class: &str, state: bool) {
    let mut node = node.borrow_mut();
    let present = node.has_class(class);
    if state && !present {
        node.classes.push(class.to_string());
    } else if !state && present {
        node.classes.retain(|c| c != class);
    }
}

pub fn replace_children(node: &NodeRef, children: Vec<NodeRef>) {
    node.borrow_mut().children = children;
}

/// Copy a subtree into fresh, unshared nodes.
pub fn deep_clone(node: &NodeRef) -> NodeRef {
    let source = node.borrow();
    let mut copy = source.clone();
    copy.children = source.children.iter().map(deep_clone).collect();
    copy.into_ref()
}

/// Field-change event for an edited input, if the input is bound to a form.
pub fn input_event(node: &NodeRef) -> Option<ShopEvent> {
    let node = node.borrow();
    let form = node.on_input?;
    let field = node.name.as_deref().and_then(OrderField::from_name)?;
    Some(ShopEvent::FieldChange {
        form,
        field,
        value: node.value.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> NodeRef {
        Node::block("card")
            .with_child(Node::text("card__title").with_text("Mug"))
            .with_child(
                Node::row("card__row")
                    .with_child(Node::text("card__price"))
                    .with_child(Node::button("card__button")),
            )
            .into_ref()
    }

    #[test]
    fn ensure_element_finds_nested_nodes() {
        let root = card();
        let price = ensure_element(&root, ".card__price").unwrap();
        set_text(&price, "10 synapses");
        assert_eq!(
            query_selector(&root, ".card__price").unwrap().borrow().text,
            "10 synapses"
        );
    }

    #[test]
    fn ensure_element_reports_missing_selector() {
        let root = card();
        let err = ensure_element(&root, ".card__image").unwrap_err();
        assert_eq!(
            err,
            DomError::ElementNotFound {
                selector: ".card__image".to_string()
            }
        );
    }

    #[test]
    fn query_does_not_match_root() {
        let root = card();
        assert!(query_selector(&root, ".card").is_none());
    }

    #[test]
    fn toggle_class_adds_once_and_removes() {
        let root = card();
        toggle_class(&root, "card_active", true);
        toggle_class(&root, "card_active", true);
        assert_eq!(
            root.borrow().classes.iter().filter(|c| *c == "card_active").count(),
            1
        );
        toggle_class(&root, "card_active", false);
        assert!(!root.borrow().has_class("card_active"));
    }

    #[test]
    fn deep_clone_is_independent() {
        let template = card();
        let copy = deep_clone(&template);
        set_text(&ensure_element(&copy, ".card__title").unwrap(), "Plate");
        assert_eq!(
            ensure_element(&template, ".card__title").unwrap().borrow().text,
            "Mug"
        );
    }

    #[test]
    fn focusable_skips_disabled_and_unbound() {
        let root = card();
        let button = ensure_element(&root, ".card__button").unwrap();
        assert!(focusable_nodes(&root).is_empty());

        button.borrow_mut().on_click = Some(ShopEvent::BasketOpen);
        assert_eq!(focusable_nodes(&root).len(), 1);

        set_disabled(&button, true);
        assert!(focusable_nodes(&root).is_empty());
    }

    #[test]
    fn input_event_carries_field_and_value() {
        let input = Node::input("form__input", "email").into_ref();
        assert!(input_event(&input).is_none());

        {
            let mut node = input.borrow_mut();
            node.on_input = Some(FormKind::Contacts);
            node.value = "a@b.com".to_string();
        }
        assert_eq!(
            input_event(&input),
            Some(ShopEvent::FieldChange {
                form: FormKind::Contacts,
                field: OrderField::Email,
                value: "a@b.com".to_string(),
            })
        );
    }

    #[test]
    fn named_item_finds_inputs() {
        let form = Node::block("form")
            .with_child(Node::input("form__input", "address"))
            .into_ref();
        assert!(named_item(&form, "address").is_some());
        assert!(named_item(&form, "phone").is_none());
    }
}
