//! Views. Each owns a fragment of the node tree and patches it through
//! typed setters; intents leave as events bound to nodes.

mod basket;
mod card;
mod contacts;
mod form;
mod modal;
mod order;
mod page;
mod success;

use std::rc::Rc;

use crate::ui::dom::NodeRef;

pub use basket::Basket;
pub use card::{category_class, format_price, BasketItemData, Card, CardBasket, CardData, PRICELESS};
pub use contacts::{ContactsData, ContactsForm};
pub use form::{Form, FormState};
pub use modal::Modal;
pub use order::{OrderForm, OrderFormData};
pub use page::Page;
pub use success::Success;

/// A view that renders a whole data snapshot into its container.
pub trait Component {
    type Data;

    fn container(&self) -> &NodeRef;

    fn apply(&self, data: Self::Data);

    fn render(&self, data: Self::Data) -> NodeRef {
        self.apply(data);
        Rc::clone(self.container())
    }
}
