use std::rc::Rc;

use crate::events::ShopEvent;
use crate::ui::components::format_price;
use crate::ui::dom::{
    ensure_element, replace_children, set_disabled, set_text, DomError, Node, NodeRef,
};

const EMPTY_TEXT: &str = "Basket is empty";

pub struct Basket {
    container: NodeRef,
    list: NodeRef,
    total: NodeRef,
    button: NodeRef,
}

impl Basket {
    pub fn new(container: NodeRef) -> Result<Self, DomError> {
        let list = ensure_element(&container, ".basket__list")?;
        let total = ensure_element(&container, ".basket__price")?;
        let button = ensure_element(&container, ".basket__button")?;
        button.borrow_mut().on_click = Some(ShopEvent::OrderOpen);

        let basket = Self {
            container,
            list,
            total,
            button,
        };
        basket.set_items(Vec::new());
        Ok(basket)
    }

    /// Replace the rows. An empty basket shows a placeholder and cannot be
    /// checked out.
    pub fn set_items(&self, items: Vec<NodeRef>) {
        let empty = items.is_empty();
        if empty {
            replace_children(
                &self.list,
                vec![Node::text("basket__empty").with_text(EMPTY_TEXT).into_ref()],
            );
        } else {
            replace_children(&self.list, items);
        }
        set_disabled(&self.button, empty);
    }

    pub fn set_total(&self, total: u64) {
        set_text(&self.total, format_price(total));
    }

    pub fn can_checkout(&self) -> bool {
        !self.button.borrow().disabled
    }

    pub fn render(&self) -> NodeRef {
        Rc::clone(&self.container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dom::query_selector;
    use crate::ui::templates::{Templates, BASKET};

    fn basket() -> Basket {
        Basket::new(Templates::standard().clone_template(BASKET).unwrap()).unwrap()
    }

    #[test]
    fn empty_basket_disables_checkout() {
        let basket = basket();
        assert!(!basket.can_checkout());
        assert!(query_selector(&basket.render(), ".basket__empty").is_some());
    }

    #[test]
    fn items_enable_checkout_and_total_is_formatted() {
        let basket = basket();
        basket.set_items(vec![Node::row("basket__item").into_ref()]);
        basket.set_total(350);

        let root = basket.render();
        assert!(basket.can_checkout());
        assert!(query_selector(&root, ".basket__empty").is_none());
        assert_eq!(
            ensure_element(&root, ".basket__price").unwrap().borrow().text,
            "350 synapses"
        );
    }
}
