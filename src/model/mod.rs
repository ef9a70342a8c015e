mod app_state;
mod types;

pub use app_state::{AppState, ADDRESS_REQUIRED, EMAIL_REQUIRED, PAYMENT_REQUIRED, PHONE_REQUIRED};
pub use types::{
    FieldGroup, FormErrors, Order, OrderField, OrderId, OrderResult, PayMethod, Product,
    ProductId,
};
