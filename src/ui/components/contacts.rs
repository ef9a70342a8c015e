use crate::events::FormKind;
use crate::model::OrderField;
use crate::ui::components::{Component, Form, FormState};
use crate::ui::dom::{DomError, NodeRef};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactsData {
    pub email: String,
    pub phone: String,
    pub state: FormState,
}

/// Contacts step: email and phone.
pub struct ContactsForm {
    form: Form,
}

impl ContactsForm {
    pub fn new(container: NodeRef) -> Result<Self, DomError> {
        Ok(Self {
            form: Form::new(FormKind::Contacts, container)?,
        })
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn set_email(&self, email: &str) {
        self.form.set_input_value(OrderField::Email, email);
    }

    pub fn set_phone(&self, phone: &str) {
        self.form.set_input_value(OrderField::Phone, phone);
    }
}

impl Component for ContactsForm {
    type Data = ContactsData;

    fn container(&self) -> &NodeRef {
        self.form.container()
    }

    fn apply(&self, data: ContactsData) {
        self.set_email(&data.email);
        self.set_phone(&data.phone);
        self.form.apply_state(data.state);
    }
}
