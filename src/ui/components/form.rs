use crate::events::{FormKind, ShopEvent};
use crate::model::OrderField;
use crate::ui::dom::{
    all_nodes, ensure_element, named_item, set_disabled, set_text, DomError, NodeKind, NodeRef,
};

const ERROR_SEPARATOR: &str = "; ";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// Shared form behaviour: every named input reports edits as a field
/// change of this form, the submit button reports `<form>:submit`.
pub struct Form {
    kind: FormKind,
    container: NodeRef,
    submit: NodeRef,
    errors: NodeRef,
}

impl Form {
    pub fn new(kind: FormKind, container: NodeRef) -> Result<Self, DomError> {
        let submit = ensure_element(&container, ".form__submit")?;
        let errors = ensure_element(&container, ".form__errors")?;

        for node in all_nodes(&container) {
            let mut node = node.borrow_mut();
            if node.kind != NodeKind::Input {
                continue;
            }
            let name = node.name.clone().unwrap_or_default();
            if OrderField::from_name(&name).is_none() {
                return Err(DomError::UnknownField { name });
            }
            node.on_input = Some(kind);
        }
        submit.borrow_mut().on_click = Some(ShopEvent::FormSubmit(kind));

        Ok(Self {
            kind,
            container,
            submit,
            errors,
        })
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn container(&self) -> &NodeRef {
        &self.container
    }

    pub fn set_valid(&self, valid: bool) {
        set_disabled(&self.submit, !valid);
    }

    pub fn is_valid(&self) -> bool {
        !self.submit.borrow().disabled
    }

    pub fn set_errors(&self, errors: &str) {
        set_text(&self.errors, errors);
    }

    pub fn errors(&self) -> String {
        self.errors.borrow().text.clone()
    }

    pub fn set_input_value(&self, field: OrderField, value: &str) {
        if let Some(input) = named_item(&self.container, field.as_str()) {
            input.borrow_mut().value = value.to_string();
        }
    }

    pub fn input_value(&self, field: OrderField) -> Option<String> {
        let input = named_item(&self.container, field.as_str())?;
        let value = input.borrow().value.clone();
        Some(value)
    }

    pub fn apply_state(&self, state: FormState) {
        self.set_valid(state.valid);
        self.set_errors(&state.errors.join(ERROR_SEPARATOR));
    }
}
