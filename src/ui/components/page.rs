use crate::events::ShopEvent;
use crate::ui::dom::{ensure_element, replace_children, set_text, toggle_class, DomError, NodeRef};

const LOCKED_CLASS: &str = "page__wrapper_locked";

/// Header counter, gallery and the wrapper that freezes under the modal.
pub struct Page {
    container: NodeRef,
    counter: NodeRef,
    catalog: NodeRef,
    wrapper: NodeRef,
}

impl Page {
    pub fn new(container: NodeRef) -> Result<Self, DomError> {
        let counter = ensure_element(&container, ".header__basket-counter")?;
        let catalog = ensure_element(&container, ".gallery")?;
        let wrapper = ensure_element(&container, ".page__wrapper")?;
        let basket = ensure_element(&container, ".header__basket")?;
        basket.borrow_mut().on_click = Some(ShopEvent::BasketOpen);

        Ok(Self {
            container,
            counter,
            catalog,
            wrapper,
        })
    }

    pub fn container(&self) -> &NodeRef {
        &self.container
    }

    pub fn set_counter(&self, count: usize) {
        set_text(&self.counter, count.to_string());
    }

    pub fn counter(&self) -> String {
        self.counter.borrow().text.clone()
    }

    pub fn set_catalog(&self, items: Vec<NodeRef>) {
        replace_children(&self.catalog, items);
    }

    pub fn catalog(&self) -> Vec<NodeRef> {
        self.catalog.borrow().children.clone()
    }

    pub fn set_locked(&self, locked: bool) {
        toggle_class(&self.wrapper, LOCKED_CLASS, locked);
    }

    pub fn is_locked(&self) -> bool {
        self.wrapper.borrow().has_class(LOCKED_CLASS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dom::Node;
    use crate::ui::templates::{Templates, PAGE};

    fn page() -> Page {
        Page::new(Templates::standard().clone_template(PAGE).unwrap()).unwrap()
    }

    #[test]
    fn locked_toggles_wrapper_class() {
        let page = page();
        page.set_locked(true);
        assert!(page.is_locked());
        page.set_locked(false);
        assert!(!page.is_locked());
    }

    #[test]
    fn counter_and_catalog_patch_nodes() {
        let page = page();
        page.set_counter(3);
        page.set_catalog(vec![
            Node::block("card").into_ref(),
            Node::block("card").into_ref(),
        ]);
        assert_eq!(page.counter(), "3");
        assert_eq!(page.catalog().len(), 2);
        let basket = ensure_element(page.container(), ".header__basket").unwrap();
        assert_eq!(basket.borrow().on_click, Some(ShopEvent::BasketOpen));
    }
}
