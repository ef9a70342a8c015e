//! Typed publish/subscribe plumbing shared by the model and the views.

mod bus;
mod types;

pub use bus::{Emitter, EventBus, Handler, Selector};
pub use types::{EventKind, FormKind, ShopEvent};
