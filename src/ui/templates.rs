//! Markup the views are cloned from.

use std::collections::HashMap;

use crate::ui::dom::{deep_clone, DomError, Node, NodeRef};

pub const PAGE: &str = "#page";
pub const MODAL: &str = "#modal-container";
pub const CARD_CATALOG: &str = "#card-catalog";
pub const CARD_PREVIEW: &str = "#card-preview";
pub const CARD_BASKET: &str = "#card-basket";
pub const BASKET: &str = "#basket";
pub const ORDER: &str = "#order";
pub const CONTACTS: &str = "#contacts";
pub const SUCCESS: &str = "#success";

/// Registry of named fragments. Cloning hands out fresh, unshared copies.
#[derive(Default)]
pub struct Templates {
    fragments: HashMap<String, NodeRef>,
}

impl Templates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &str, fragment: Node) {
        self.fragments.insert(id.to_string(), fragment.into_ref());
    }

    pub fn contains(&self, id: &str) -> bool {
        self.fragments.contains_key(id)
    }

    pub fn clone_template(&self, id: &str) -> Result<NodeRef, DomError> {
        self.fragments
            .get(id)
            .map(deep_clone)
            .ok_or_else(|| DomError::TemplateNotFound { id: id.to_string() })
    }

    /// The storefront markup.
    pub fn standard() -> Self {
        let mut templates = Self::new();
        templates.register(PAGE, page());
        templates.register(MODAL, modal());
        templates.register(CARD_CATALOG, card_catalog());
        templates.register(CARD_PREVIEW, card_preview());
        templates.register(CARD_BASKET, card_basket());
        templates.register(BASKET, basket());
        templates.register(ORDER, order());
        templates.register(CONTACTS, contacts());
        templates.register(SUCCESS, success());
        templates
    }
}

fn page() -> Node {
    Node::block("page").with_child(
        Node::block("page__wrapper")
            .with_child(
                Node::row("header")
                    .with_child(Node::text("header__logo").with_text("WEB-LAREK"))
                    .with_child(Node::button("header__basket").with_text("Basket"))
                    .with_child(Node::text("header__basket-counter").with_text("0")),
            )
            .with_child(Node::block("gallery")),
    )
}

fn modal() -> Node {
    Node::block("modal").with_child(
        Node::block("modal__container")
            .with_child(Node::button("modal__close").with_text("Esc"))
            .with_child(Node::block("modal__content")),
    )
}

fn card_catalog() -> Node {
    Node::block("card")
        .with_class("gallery__item")
        .with_child(Node::text("card__category"))
        .with_child(Node::text("card__title"))
        .with_child(Node::image("card__image"))
        .with_child(Node::text("card__price"))
}

fn card_preview() -> Node {
    Node::block("card")
        .with_class("card_full")
        .with_child(Node::image("card__image"))
        .with_child(Node::text("card__category"))
        .with_child(Node::text("card__title"))
        .with_child(Node::text("card__text"))
        .with_child(
            Node::row("card__row")
                .with_child(Node::button("card__button").with_text("Buy"))
                .with_child(Node::text("card__price")),
        )
}

fn card_basket() -> Node {
    Node::row("basket__item")
        .with_class("card")
        .with_class("card_compact")
        .with_child(Node::text("basket__item-index"))
        .with_child(Node::text("card__title"))
        .with_child(Node::text("card__price"))
        .with_child(
            Node::button("basket__item-delete")
                .with_class("card__button")
                .with_text("Delete"),
        )
}

fn basket() -> Node {
    Node::block("basket")
        .with_child(Node::text("modal__title").with_text("Basket"))
        .with_child(Node::block("basket__list"))
        .with_child(
            Node::row("modal__actions")
                .with_child(Node::button("basket__button").with_text("Checkout"))
                .with_child(Node::text("basket__price").with_text("0 synapses")),
        )
}

fn order() -> Node {
    Node::block("form")
        .with_class("order")
        .with_child(
            Node::block("order__field")
                .with_child(Node::text("modal__title").with_text("Payment method"))
                .with_child(
                    Node::row("order__buttons")
                        .with_child(
                            Node::button("button_alt")
                                .with_name("card")
                                .with_text("Online"),
                        )
                        .with_child(
                            Node::button("button_alt")
                                .with_name("cash")
                                .with_text("On delivery"),
                        ),
                ),
        )
        .with_child(
            Node::block("order__field")
                .with_child(Node::text("modal__title").with_text("Delivery address"))
                .with_child(
                    Node::input("form__input", "address").with_placeholder("Enter address"),
                ),
        )
        .with_child(
            Node::row("modal__actions")
                .with_child(Node::button("form__submit").with_text("Next"))
                .with_child(Node::text("form__errors")),
        )
}

fn contacts() -> Node {
    Node::block("form")
        .with_class("contacts")
        .with_child(
            Node::block("order__field")
                .with_child(Node::text("modal__title").with_text("Email"))
                .with_child(Node::input("form__input", "email").with_placeholder("Enter email")),
        )
        .with_child(
            Node::block("order__field")
                .with_child(Node::text("modal__title").with_text("Phone"))
                .with_child(Node::input("form__input", "phone").with_placeholder("+7 (")),
        )
        .with_child(
            Node::row("modal__actions")
                .with_child(Node::button("form__submit").with_text("Pay"))
                .with_child(Node::text("form__errors")),
        )
}

fn success() -> Node {
    Node::block("order-success")
        .with_child(Node::text("order-success__title").with_text("Order placed"))
        .with_child(Node::text("order-success__description"))
        .with_child(Node::button("order-success__close").with_text("Continue shopping"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::dom::{ensure_element, set_text};

    #[test]
    fn standard_registers_every_fragment() {
        let templates = Templates::standard();
        for id in [
            PAGE,
            MODAL,
            CARD_CATALOG,
            CARD_PREVIEW,
            CARD_BASKET,
            BASKET,
            ORDER,
            CONTACTS,
            SUCCESS,
        ] {
            assert!(templates.contains(id), "missing {}", id);
        }
    }

    #[test]
    fn clones_do_not_share_nodes() {
        let templates = Templates::standard();
        let first = templates.clone_template(CARD_CATALOG).unwrap();
        let second = templates.clone_template(CARD_CATALOG).unwrap();
        set_text(&ensure_element(&first, ".card__title").unwrap(), "Mug");
        assert!(ensure_element(&second, ".card__title")
            .unwrap()
            .borrow()
            .text
            .is_empty());
    }

    #[test]
    fn unknown_template_is_an_error() {
        let templates = Templates::new();
        assert_eq!(
            templates.clone_template("#nope").unwrap_err(),
            DomError::TemplateNotFound {
                id: "#nope".to_string()
            }
        );
    }
}
