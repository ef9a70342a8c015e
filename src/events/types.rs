use std::fmt;

use crate::model::{FormErrors, OrderField, OrderResult, PayMethod, Product, ProductId};

/// Forms that emit field-change and submit events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormKind {
    Order,
    Contacts,
}

impl FormKind {
    /// Block name used as the event-name prefix (`order.address:change`).
    pub fn block_name(&self) -> &'static str {
        match self {
            FormKind::Order => "order",
            FormKind::Contacts => "contacts",
        }
    }
}

/// Every event that travels over the shop bus.
#[derive(Debug, Clone, PartialEq)]
pub enum ShopEvent {
    ItemsChanged { catalog: Vec<Product> },
    CardSelect(Product),
    /// `None` closes the preview.
    PreviewChanged(Option<Product>),
    ProductAdded(Product),
    ProductDelete(Product),
    BasketChange,
    BasketOpen,
    BasketRemove { id: ProductId },
    OrderOpen,
    PaymentChanged(PayMethod),
    FieldChange {
        form: FormKind,
        field: OrderField,
        value: String,
    },
    FormSubmit(FormKind),
    FormErrorsChange(FormErrors),
    ContactsErrorsChange(FormErrors),
    ModalOpen,
    ModalClose,
    SuccessClose,
    OrderPlaced(OrderResult),
    OrderFailed(String),
}

/// Payload-free discriminant of [`ShopEvent`], used for exact subscriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ItemsChanged,
    CardSelect,
    PreviewChanged,
    ProductAdded,
    ProductDelete,
    BasketChange,
    BasketOpen,
    BasketRemove,
    OrderOpen,
    PaymentChanged,
    FieldChange(FormKind, OrderField),
    FormSubmit(FormKind),
    FormErrorsChange,
    ContactsErrorsChange,
    ModalOpen,
    ModalClose,
    SuccessClose,
    OrderPlaced,
    OrderFailed,
}

impl ShopEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ShopEvent::ItemsChanged { .. } => EventKind::ItemsChanged,
            ShopEvent::CardSelect(_) => EventKind::CardSelect,
            ShopEvent::PreviewChanged(_) => EventKind::PreviewChanged,
            ShopEvent::ProductAdded(_) => EventKind::ProductAdded,
            ShopEvent::ProductDelete(_) => EventKind::ProductDelete,
            ShopEvent::BasketChange => EventKind::BasketChange,
            ShopEvent::BasketOpen => EventKind::BasketOpen,
            ShopEvent::BasketRemove { .. } => EventKind::BasketRemove,
            ShopEvent::OrderOpen => EventKind::OrderOpen,
            ShopEvent::PaymentChanged(_) => EventKind::PaymentChanged,
            ShopEvent::FieldChange { form, field, .. } => EventKind::FieldChange(*form, *field),
            ShopEvent::FormSubmit(form) => EventKind::FormSubmit(*form),
            ShopEvent::FormErrorsChange(_) => EventKind::FormErrorsChange,
            ShopEvent::ContactsErrorsChange(_) => EventKind::ContactsErrorsChange,
            ShopEvent::ModalOpen => EventKind::ModalOpen,
            ShopEvent::ModalClose => EventKind::ModalClose,
            ShopEvent::SuccessClose => EventKind::SuccessClose,
            ShopEvent::OrderPlaced(_) => EventKind::OrderPlaced,
            ShopEvent::OrderFailed(_) => EventKind::OrderFailed,
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::ItemsChanged => "items:changed",
            EventKind::CardSelect => "card:select",
            EventKind::PreviewChanged => "preview:changed",
            EventKind::ProductAdded => "product:added",
            EventKind::ProductDelete => "product:delete",
            EventKind::BasketChange => "basket:change",
            EventKind::BasketOpen => "basket:open",
            EventKind::BasketRemove => "basket:remove",
            EventKind::OrderOpen => "order:open",
            EventKind::PaymentChanged => "payment:changed",
            EventKind::FieldChange(form, field) => {
                return write!(f, "{}.{}:change", form.block_name(), field);
            }
            EventKind::FormSubmit(form) => {
                return write!(f, "{}:submit", form.block_name());
            }
            EventKind::FormErrorsChange => "formErrors:change",
            EventKind::ContactsErrorsChange => "formContactsErrors:change",
            EventKind::ModalOpen => "modal:open",
            EventKind::ModalClose => "modal:close",
            EventKind::SuccessClose => "success:close",
            EventKind::OrderPlaced => "order:placed",
            EventKind::OrderFailed => "order:failed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_change_names_carry_form_and_field() {
        let event = ShopEvent::FieldChange {
            form: FormKind::Contacts,
            field: OrderField::Email,
            value: "a@b.com".to_string(),
        };
        assert_eq!(event.kind().to_string(), "contacts.email:change");
        assert_eq!(
            EventKind::FieldChange(FormKind::Order, OrderField::Address).to_string(),
            "order.address:change"
        );
    }

    #[test]
    fn submit_names_use_block_name() {
        assert_eq!(
            ShopEvent::FormSubmit(FormKind::Order).kind().to_string(),
            "order:submit"
        );
        assert_eq!(EventKind::ContactsErrorsChange.to_string(), "formContactsErrors:change");
    }
}
