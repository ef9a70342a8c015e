use std::rc::Rc;

use crate::events::{Emitter, ShopEvent};
use crate::ui::dom::{ensure_element, replace_children, toggle_class, DomError, NodeRef};

const ACTIVE_CLASS: &str = "modal_active";

/// The single popup. Content is swapped in, never stacked.
pub struct Modal {
    container: NodeRef,
    content: NodeRef,
    events: Emitter,
    escape_bound: bool,
}

impl Modal {
    pub fn new(container: NodeRef, events: Emitter) -> Result<Self, DomError> {
        ensure_element(&container, ".modal__close")?;
        let content = ensure_element(&container, ".modal__content")?;
        Ok(Self {
            container,
            content,
            events,
            escape_bound: false,
        })
    }

    pub fn container(&self) -> &NodeRef {
        &self.container
    }

    pub fn set_content(&self, content: NodeRef) {
        replace_children(&self.content, vec![content]);
    }

    /// Currently mounted content, if any.
    pub fn content(&self) -> Option<NodeRef> {
        self.content.borrow().children.first().cloned()
    }

    pub fn is_open(&self) -> bool {
        self.container.borrow().has_class(ACTIVE_CLASS)
    }

    pub fn open(&mut self) {
        toggle_class(&self.container, ACTIVE_CLASS, true);
        self.escape_bound = true;
        self.events.emit(ShopEvent::ModalOpen);
    }

    /// Hide and clear. Closing a closed modal does nothing.
    pub fn close(&mut self) {
        if !self.is_open() {
            return;
        }
        toggle_class(&self.container, ACTIVE_CLASS, false);
        self.escape_bound = false;
        replace_children(&self.content, Vec::new());
        self.events.emit(ShopEvent::ModalClose);
    }

    /// Escape only closes while the modal holds the listener.
    pub fn handle_escape(&mut self) -> bool {
        if !self.escape_bound {
            return false;
        }
        self.close();
        true
    }

    pub fn click_outside(&mut self) {
        self.close();
    }

    pub fn render(&mut self, content: NodeRef) -> NodeRef {
        self.set_content(content);
        self.open();
        Rc::clone(&self.container)
    }
}
