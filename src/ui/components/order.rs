use crate::events::{FormKind, ShopEvent};
use crate::model::{OrderField, PayMethod};
use crate::ui::components::{Component, Form, FormState};
use crate::ui::dom::{query_selector_all, toggle_class, DomError, NodeRef};

const ACTIVE_CLASS: &str = "button_alt-active";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderFormData {
    pub payment: Option<PayMethod>,
    pub address: String,
    pub state: FormState,
}

/// Delivery step: payment toggle group and address.
pub struct OrderForm {
    form: Form,
    buttons: Vec<(PayMethod, NodeRef)>,
}

impl OrderForm {
    pub fn new(container: NodeRef) -> Result<Self, DomError> {
        let form = Form::new(FormKind::Order, container)?;

        let mut buttons = Vec::new();
        for button in query_selector_all(form.container(), ".button_alt") {
            let name = button.borrow().name.clone().unwrap_or_default();
            let method =
                PayMethod::from_name(&name).ok_or(DomError::UnknownField { name })?;
            button.borrow_mut().on_click = Some(ShopEvent::PaymentChanged(method));
            buttons.push((method, button));
        }

        Ok(Self { form, buttons })
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Mark the button named after `method` active; `None` clears the group.
    pub fn set_payment(&self, method: Option<PayMethod>) {
        for (candidate, button) in &self.buttons {
            toggle_class(button, ACTIVE_CLASS, Some(*candidate) == method);
        }
    }

    pub fn active_payment(&self) -> Option<PayMethod> {
        self.buttons
            .iter()
            .find(|(_, button)| button.borrow().has_class(ACTIVE_CLASS))
            .map(|(method, _)| *method)
    }

    pub fn set_address(&self, address: &str) {
        self.form.set_input_value(OrderField::Address, address);
    }
}

impl Component for OrderForm {
    type Data = OrderFormData;

    fn container(&self) -> &NodeRef {
        self.form.container()
    }

    fn apply(&self, data: OrderFormData) {
        self.set_payment(data.payment);
        self.set_address(&data.address);
        self.form.apply_state(data.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::templates::{Templates, ORDER};

    fn order_form() -> OrderForm {
        OrderForm::new(Templates::standard().clone_template(ORDER).unwrap()).unwrap()
    }

    #[test]
    fn exactly_one_payment_button_is_active() {
        let view = order_form();
        view.set_payment(Some(PayMethod::Card));
        assert_eq!(view.active_payment(), Some(PayMethod::Card));

        view.set_payment(Some(PayMethod::Cash));
        assert_eq!(view.active_payment(), Some(PayMethod::Cash));
        let active = query_selector_all(view.container(), ".button_alt-active");
        assert_eq!(active.len(), 1);

        view.set_payment(None);
        assert_eq!(view.active_payment(), None);
    }

    #[test]
    fn payment_buttons_emit_their_method() {
        let view = order_form();
        let buttons = query_selector_all(view.container(), ".button_alt");
        let bound: Vec<_> = buttons
            .iter()
            .map(|button| button.borrow().on_click.clone())
            .collect();
        assert_eq!(
            bound,
            vec![
                Some(ShopEvent::PaymentChanged(PayMethod::Card)),
                Some(ShopEvent::PaymentChanged(PayMethod::Cash)),
            ]
        );
    }

    #[test]
    fn render_fills_address_and_state() {
        let view = order_form();
        view.render(OrderFormData {
            payment: Some(PayMethod::Card),
            address: "Moscow".to_string(),
            state: FormState {
                valid: true,
                errors: Vec::new(),
            },
        });
        assert_eq!(
            view.form().input_value(OrderField::Address).as_deref(),
            Some("Moscow")
        );
        assert!(view.form().is_valid());
    }
}
