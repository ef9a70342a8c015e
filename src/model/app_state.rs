use crate::events::{Emitter, ShopEvent};
use crate::model::types::{
    FieldGroup, FormErrors, Order, OrderField, PayMethod, Product, ProductId,
};

pub const PAYMENT_REQUIRED: &str = "Select a payment method";
pub const ADDRESS_REQUIRED: &str = "Enter a delivery address";
pub const EMAIL_REQUIRED: &str = "Enter an email";
pub const PHONE_REQUIRED: &str = "Enter a phone number";

/// The single owned model of the storefront.
///
/// Commands mutate state and queue one change event on the bus; queries
/// never emit. Priceless products never enter the basket, so every sum over
/// the basket is a plain sum of prices.
pub struct AppState {
    catalog: Vec<Product>,
    basket: Vec<Product>,
    order: Order,
    preview: Option<ProductId>,
    form_errors: FormErrors,
    events: Emitter,
}

impl AppState {
    pub fn new(events: Emitter) -> Self {
        Self {
            catalog: Vec::new(),
            basket: Vec::new(),
            order: Order::default(),
            preview: None,
            form_errors: FormErrors::new(),
            events,
        }
    }

    // ---------------------------------------------------------------------
    // Catalog & preview
    // ---------------------------------------------------------------------

    pub fn set_catalog(&mut self, items: Vec<Product>) {
        tracing::debug!(count = items.len(), "catalog replaced");
        self.catalog = items;
        self.events.emit(ShopEvent::ItemsChanged {
            catalog: self.catalog.clone(),
        });
    }

    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }

    pub fn set_preview(&mut self, item: &Product) {
        self.preview = Some(item.id.clone());
        self.events.emit(ShopEvent::PreviewChanged(Some(item.clone())));
    }

    /// Drop the preview pointer. Emits only if a preview was set.
    pub fn clear_preview(&mut self) {
        if self.preview.take().is_some() {
            self.events.emit(ShopEvent::PreviewChanged(None));
        }
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    // ---------------------------------------------------------------------
    // Basket
    // ---------------------------------------------------------------------

    /// Append `item` to the basket.
    ///
    /// Priceless items are refused: nothing changes, nothing is emitted and
    /// `false` is returned.
    pub fn add_to_basket(&mut self, item: &Product) -> bool {
        if item.is_priceless() {
            tracing::warn!(id = %item.id, "refusing to add priceless product to basket");
            return false;
        }
        self.basket.push(item.clone());
        tracing::debug!(id = %item.id, size = self.basket.len(), "added to basket");
        self.events.emit(ShopEvent::BasketChange);
        true
    }

    /// Remove every basket entry with `id`. Removing an absent id is a no-op
    /// on the contents but still reports the change.
    pub fn remove_from_basket(&mut self, id: &str) {
        self.basket.retain(|item| item.id != id);
        tracing::debug!(id, size = self.basket.len(), "removed from basket");
        self.events.emit(ShopEvent::BasketChange);
    }

    /// Empty the basket and reset the draft order.
    pub fn clear_basket(&mut self) {
        self.basket.clear();
        self.clear_order();
        self.events.emit(ShopEvent::BasketChange);
    }

    pub fn basket_items(&self) -> &[Product] {
        &self.basket
    }

    pub fn basket_total(&self) -> u64 {
        self.basket.iter().filter_map(|item| item.price).sum()
    }

    /// Basket membership by product id.
    pub fn is_in_basket(&self, item: &Product) -> bool {
        self.basket.iter().any(|entry| entry.id == item.id)
    }

    // ---------------------------------------------------------------------
    // Order
    // ---------------------------------------------------------------------

    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Snapshot basket ids and total into the draft order.
    pub fn finalize_order(&mut self) -> &Order {
        self.order.total = self.basket_total();
        self.order.items = self.basket.iter().map(|item| item.id.clone()).collect();
        &self.order
    }

    fn clear_order(&mut self) {
        self.order = Order::default();
    }

    pub fn set_order_field(&mut self, field: OrderField, value: &str) -> bool {
        match field {
            OrderField::Email => self.order.email = value.to_string(),
            OrderField::Phone => self.order.phone = value.to_string(),
            OrderField::Address => self.order.address = value.to_string(),
            OrderField::Payment => self.order.payment = PayMethod::from_name(value),
        }
        match field.group() {
            FieldGroup::Contacts => self.validate_contacts(),
            FieldGroup::Delivery => self.validate_delivery(),
        }
    }

    pub fn set_email(&mut self, email: &str) -> bool {
        self.set_order_field(OrderField::Email, email)
    }

    pub fn set_phone(&mut self, phone: &str) -> bool {
        self.set_order_field(OrderField::Phone, phone)
    }

    pub fn set_address(&mut self, address: &str) -> bool {
        self.set_order_field(OrderField::Address, address)
    }

    pub fn set_payment(&mut self, method: PayMethod) -> bool {
        self.order.payment = Some(method);
        self.validate_delivery()
    }

    /// Set the payment method without a validation pass, for forms that are
    /// about to render their own initial state.
    pub fn preset_payment(&mut self, method: PayMethod) {
        self.order.payment = Some(method);
    }

    // ---------------------------------------------------------------------
    // Validation
    // ---------------------------------------------------------------------

    pub fn form_errors(&self) -> &FormErrors {
        &self.form_errors
    }

    /// Whether both contact fields are filled, without publishing errors.
    pub fn contacts_complete(&self) -> bool {
        !self.order.email.is_empty() && !self.order.phone.is_empty()
    }

    /// Recompute delivery errors and publish them as `formErrors:change`.
    pub fn validate_delivery(&mut self) -> bool {
        let mut errors = FormErrors::new();
        if self.order.payment.is_none() {
            errors.insert(OrderField::Payment, PAYMENT_REQUIRED.to_string());
        }
        if self.order.address.is_empty() {
            errors.insert(OrderField::Address, ADDRESS_REQUIRED.to_string());
        }
        let valid = errors.is_empty();
        self.form_errors = errors;
        self.events
            .emit(ShopEvent::FormErrorsChange(self.form_errors.clone()));
        valid
    }

    /// Recompute contact errors and publish them as
    /// `formContactsErrors:change`. Both keys are always present; an empty
    /// message means the field is fine.
    pub fn validate_contacts(&mut self) -> bool {
        let mut errors = FormErrors::new();
        errors.insert(
            OrderField::Email,
            required(&self.order.email, EMAIL_REQUIRED),
        );
        errors.insert(
            OrderField::Phone,
            required(&self.order.phone, PHONE_REQUIRED),
        );
        let valid = errors.values().all(String::is_empty);
        self.form_errors = errors;
        self.events
            .emit(ShopEvent::ContactsErrorsChange(self.form_errors.clone()));
        valid
    }
}

fn required(value: &str, message: &str) -> String {
    if value.is_empty() {
        message.to_string()
    } else {
        String::new()
    }
}
