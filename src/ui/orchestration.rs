//! Subscriptions that drive the checkout flow.
//!
//! This is the only code that both reads the model and calls view setters.
//! Each handler covers one transition:
//!
//! catalog → `card:select` → preview → add/remove → basket updated →
//! `basket:open` → `order:open` → delivery form → `order:submit` →
//! contacts form → `contacts:submit` → success → `success:close` → catalog.

use crate::api::ApiCommand;
use crate::events::{EventBus, EventKind, FormKind, Selector, ShopEvent};
use crate::model::{FormErrors, OrderField, PayMethod};
use crate::ui::components::{
    BasketItemData, Card, CardBasket, CardData, Component, ContactsData, FormState,
    OrderFormData, Success,
};
use crate::ui::dom::DomError;
use crate::ui::shop::Shop;
use crate::ui::templates::{CARD_BASKET, CARD_CATALOG, CARD_PREVIEW, SUCCESS};

pub const BUY_LABEL: &str = "Buy";
pub const REMOVE_LABEL: &str = "Remove";

const DELIVERY_FIELDS: [OrderField; 2] = [OrderField::Payment, OrderField::Address];
const CONTACT_FIELDS: [OrderField; 2] = [OrderField::Phone, OrderField::Email];

type Step = fn(&mut Shop, &ShopEvent) -> Result<(), DomError>;

/// Register every transition on `bus`. Call once at startup.
pub fn wire(bus: &mut EventBus<Shop>) {
    bus.on(EventKind::ItemsChanged, step(render_catalog));
    bus.on(EventKind::CardSelect, step(select_card));
    bus.on(EventKind::PreviewChanged, step(show_preview));
    bus.on(EventKind::ProductAdded, step(add_product));
    bus.on(EventKind::ProductDelete, step(delete_product));
    bus.on(EventKind::BasketRemove, step(remove_basket_row));
    bus.on(EventKind::OrderOpen, step(open_order));
    bus.on(EventKind::FormSubmit(FormKind::Order), step(open_contacts));
    bus.on(EventKind::PaymentChanged, step(change_payment));
    bus.on(EventKind::FormErrorsChange, step(show_delivery_errors));
    bus.on(EventKind::ContactsErrorsChange, step(show_contact_errors));
    bus.on(Selector::Form(FormKind::Contacts), step(change_contact));
    bus.on(
        EventKind::FieldChange(FormKind::Order, OrderField::Address),
        step(change_address),
    );
    bus.on(EventKind::BasketOpen, step(open_basket));
    bus.on(EventKind::BasketChange, step(render_basket));
    bus.on(EventKind::FormSubmit(FormKind::Contacts), step(submit_order));
    bus.on(EventKind::OrderPlaced, step(show_success));
    bus.on(EventKind::OrderFailed, step(report_order_failure));
    bus.on(EventKind::SuccessClose, step(close_success));
    bus.on(EventKind::ModalOpen, step(lock_page));
    bus.on(EventKind::ModalClose, step(unlock_page));
}

fn step(run: Step) -> impl FnMut(&mut Shop, &ShopEvent) {
    move |shop, event| {
        if let Err(err) = run(shop, event) {
            tracing::error!(event = %event.kind(), error = %err, "handler failed");
        }
    }
}

fn render_catalog(shop: &mut Shop, _: &ShopEvent) -> Result<(), DomError> {
    let cards = shop
        .model
        .catalog()
        .iter()
        .map(|item| {
            let card = Card::new(
                "card",
                shop.templates.clone_template(CARD_CATALOG)?,
                ShopEvent::CardSelect(item.clone()),
            )?;
            Ok(card.render(CardData {
                description: None,
                ..CardData::from_product(item)
            }))
        })
        .collect::<Result<Vec<_>, DomError>>()?;

    shop.page.set_catalog(cards);
    shop.page.set_counter(shop.model.basket_items().len());
    Ok(())
}

fn select_card(shop: &mut Shop, event: &ShopEvent) -> Result<(), DomError> {
    if let ShopEvent::CardSelect(item) = event {
        shop.model.set_preview(item);
    }
    Ok(())
}

fn show_preview(shop: &mut Shop, event: &ShopEvent) -> Result<(), DomError> {
    let ShopEvent::PreviewChanged(preview) = event else {
        return Ok(());
    };
    let Some(item) = preview else {
        shop.modal.close();
        return Ok(());
    };

    let in_basket = shop.model.is_in_basket(item);
    let (intent, label) = if in_basket {
        (ShopEvent::ProductDelete(item.clone()), REMOVE_LABEL)
    } else {
        (ShopEvent::ProductAdded(item.clone()), BUY_LABEL)
    };
    let card = Card::new("card", shop.templates.clone_template(CARD_PREVIEW)?, intent)?;
    let content = card.render(CardData::from_product(item).with_button(label));
    shop.modal.render(content);
    Ok(())
}

fn add_product(shop: &mut Shop, event: &ShopEvent) -> Result<(), DomError> {
    if let ShopEvent::ProductAdded(item) = event {
        shop.model.add_to_basket(item);
        shop.modal.close();
    }
    Ok(())
}

fn delete_product(shop: &mut Shop, event: &ShopEvent) -> Result<(), DomError> {
    if let ShopEvent::ProductDelete(item) = event {
        shop.model.remove_from_basket(&item.id);
        shop.modal.close();
    }
    Ok(())
}

fn remove_basket_row(shop: &mut Shop, event: &ShopEvent) -> Result<(), DomError> {
    if let ShopEvent::BasketRemove { id } = event {
        shop.model.remove_from_basket(id);
    }
    Ok(())
}

fn open_order(shop: &mut Shop, _: &ShopEvent) -> Result<(), DomError> {
    shop.model.preset_payment(PayMethod::Card);
    let order = shop.model.order();
    let content = shop.order.render(OrderFormData {
        payment: order.payment,
        address: order.address.clone(),
        state: FormState::default(),
    });
    shop.modal.render(content);
    Ok(())
}

fn open_contacts(shop: &mut Shop, _: &ShopEvent) -> Result<(), DomError> {
    let order = shop.model.order();
    let content = shop.contacts.render(ContactsData {
        email: order.email.clone(),
        phone: order.phone.clone(),
        state: FormState {
            valid: shop.model.contacts_complete(),
            errors: Vec::new(),
        },
    });
    shop.modal.render(content);
    Ok(())
}

fn change_payment(shop: &mut Shop, event: &ShopEvent) -> Result<(), DomError> {
    if let ShopEvent::PaymentChanged(method) = event {
        shop.model.set_payment(*method);
        shop.order.set_payment(Some(*method));
    }
    Ok(())
}

fn show_delivery_errors(shop: &mut Shop, event: &ShopEvent) -> Result<(), DomError> {
    if let ShopEvent::FormErrorsChange(errors) = event {
        shop.order.form().apply_state(form_state(errors, &DELIVERY_FIELDS));
    }
    Ok(())
}

fn show_contact_errors(shop: &mut Shop, event: &ShopEvent) -> Result<(), DomError> {
    if let ShopEvent::ContactsErrorsChange(errors) = event {
        shop.contacts
            .form()
            .apply_state(form_state(errors, &CONTACT_FIELDS));
    }
    Ok(())
}

/// Non-empty messages for `fields`, in order. Valid when there are none.
fn form_state(errors: &FormErrors, fields: &[OrderField]) -> FormState {
    let messages: Vec<String> = fields
        .iter()
        .filter_map(|field| errors.get(field))
        .filter(|message| !message.is_empty())
        .cloned()
        .collect();
    FormState {
        valid: messages.is_empty(),
        errors: messages,
    }
}

fn change_contact(shop: &mut Shop, event: &ShopEvent) -> Result<(), DomError> {
    if let ShopEvent::FieldChange { field, value, .. } = event {
        shop.model.set_order_field(*field, value);
    }
    Ok(())
}

fn change_address(shop: &mut Shop, event: &ShopEvent) -> Result<(), DomError> {
    if let ShopEvent::FieldChange { value, .. } = event {
        shop.model.set_address(value);
    }
    Ok(())
}

fn open_basket(shop: &mut Shop, _: &ShopEvent) -> Result<(), DomError> {
    let content = shop.basket.render();
    shop.modal.render(content);
    Ok(())
}

fn render_basket(shop: &mut Shop, _: &ShopEvent) -> Result<(), DomError> {
    let rows = shop
        .model
        .basket_items()
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let row = CardBasket::new(
                index,
                shop.templates.clone_template(CARD_BASKET)?,
                ShopEvent::BasketRemove {
                    id: item.id.clone(),
                },
            )?;
            Ok(row.render(BasketItemData::from_product(item)))
        })
        .collect::<Result<Vec<_>, DomError>>()?;

    shop.page.set_counter(rows.len());
    shop.basket.set_items(rows);
    shop.basket.set_total(shop.model.basket_total());
    Ok(())
}

fn submit_order(shop: &mut Shop, _: &ShopEvent) -> Result<(), DomError> {
    if shop.order_in_flight {
        tracing::warn!("order already submitted, waiting for the shop to answer");
        return Ok(());
    }

    let order = shop.model.finalize_order().clone();
    tracing::info!(items = order.items.len(), total = order.total, "submitting order");
    if shop.send(ApiCommand::SubmitOrder(order)) {
        shop.order_in_flight = true;
    }
    Ok(())
}

fn show_success(shop: &mut Shop, event: &ShopEvent) -> Result<(), DomError> {
    let ShopEvent::OrderPlaced(result) = event else {
        return Ok(());
    };
    shop.order_in_flight = false;
    tracing::info!(id = %result.id, total = result.total, "order confirmed");

    let success = Success::new(
        shop.templates.clone_template(SUCCESS)?,
        shop.model.order().total,
    )?;
    shop.modal.render(success.render());
    shop.model.clear_basket();
    Ok(())
}

fn report_order_failure(shop: &mut Shop, event: &ShopEvent) -> Result<(), DomError> {
    if let ShopEvent::OrderFailed(message) = event {
        shop.order_in_flight = false;
        tracing::error!(message = %message, "order was not placed");
        shop.contacts.form().set_errors(message);
    }
    Ok(())
}

fn close_success(shop: &mut Shop, _: &ShopEvent) -> Result<(), DomError> {
    shop.modal.close();
    shop.model.clear_basket();
    shop.order.set_payment(None);
    Ok(())
}

fn lock_page(shop: &mut Shop, _: &ShopEvent) -> Result<(), DomError> {
    shop.page.set_locked(true);
    shop.focus.reset();
    Ok(())
}

fn unlock_page(shop: &mut Shop, _: &ShopEvent) -> Result<(), DomError> {
    shop.page.set_locked(false);
    shop.focus.reset();
    shop.model.clear_preview();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_state_skips_empty_messages_in_field_order() {
        let mut errors = FormErrors::new();
        errors.insert(OrderField::Email, "Enter an email".to_string());
        errors.insert(OrderField::Phone, String::new());

        let state = form_state(&errors, &CONTACT_FIELDS);
        assert!(!state.valid);
        assert_eq!(state.errors, vec!["Enter an email".to_string()]);

        errors.insert(OrderField::Phone, "Enter a phone number".to_string());
        let state = form_state(&errors, &CONTACT_FIELDS);
        assert_eq!(
            state.errors,
            vec!["Enter a phone number".to_string(), "Enter an email".to_string()]
        );
    }

    #[test]
    fn empty_error_map_is_valid() {
        let state = form_state(&FormErrors::new(), &DELIVERY_FIELDS);
        assert_eq!(state, FormState { valid: true, errors: Vec::new() });
    }
}
