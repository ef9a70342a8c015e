use std::rc::Rc;

use crate::events::ShopEvent;
use crate::ui::dom::{ensure_element, set_text, DomError, NodeRef};

/// Order confirmation.
pub struct Success {
    container: NodeRef,
    description: NodeRef,
}

impl Success {
    pub fn new(container: NodeRef, total: u64) -> Result<Self, DomError> {
        let description = ensure_element(&container, ".order-success__description")?;
        let close = ensure_element(&container, ".order-success__close")?;
        close.borrow_mut().on_click = Some(ShopEvent::SuccessClose);

        let view = Self {
            container,
            description,
        };
        view.set_total(total);
        Ok(view)
    }

    pub fn set_total(&self, total: u64) {
        set_text(&self.description, format!("Debited {} synapses", total));
    }

    pub fn render(&self) -> NodeRef {
        Rc::clone(&self.container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::templates::{Templates, SUCCESS};

    #[test]
    fn shows_debited_total_and_binds_close() {
        let container = Templates::standard().clone_template(SUCCESS).unwrap();
        let root = Success::new(container, 2200).unwrap().render();

        assert_eq!(
            ensure_element(&root, ".order-success__description")
                .unwrap()
                .borrow()
                .text,
            "Debited 2200 synapses"
        );
        assert_eq!(
            ensure_element(&root, ".order-success__close")
                .unwrap()
                .borrow()
                .on_click,
            Some(ShopEvent::SuccessClose)
        );
    }
}
