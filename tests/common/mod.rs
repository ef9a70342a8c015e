//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_shop;

use tokio::sync::mpsc;
use weblarek::api::ApiCommand;
use weblarek::events::{FormKind, ShopEvent};
use weblarek::model::{OrderField, Product};
use weblarek::ui::app::App;
use weblarek::ui::events::AppEvent;
use weblarek::ui::templates::Templates;

pub fn product(id: &str, price: Option<u64>) -> Product {
    Product {
        id: id.to_string(),
        title: format!("Product {}", id),
        name: String::new(),
        price,
        description: Some(format!("About product {}", id)),
        image: format!("https://cdn.test/{}.svg", id),
        category: "софт-скил".to_string(),
    }
}

/// `1` costs 100, `2` is priceless, `3` costs 250.
pub fn sample_catalog() -> Vec<Product> {
    vec![
        product("1", Some(100)),
        product("2", None),
        product("3", Some(250)),
    ]
}

/// App wired to a command channel the test can inspect, with the sample
/// catalog already loaded.
pub fn shop_app() -> (App, mpsc::Receiver<ApiCommand>) {
    let (tx, rx) = mpsc::channel(16);
    let mut app = App::new(Templates::standard(), Some(tx)).expect("standard templates");
    app.on_app_event(AppEvent::CatalogLoaded(sample_catalog()));
    (app, rx)
}

pub fn drain_commands(rx: &mut mpsc::Receiver<ApiCommand>) -> Vec<ApiCommand> {
    let mut commands = Vec::new();
    while let Ok(command) = rx.try_recv() {
        commands.push(command);
    }
    commands
}

pub fn type_field(app: &mut App, form: FormKind, field: OrderField, value: &str) {
    app.dispatch(ShopEvent::FieldChange {
        form,
        field,
        value: value.to_string(),
    });
}

/// Walk from the basket to a filled-in contacts form.
pub fn checkout(app: &mut App, address: &str, email: &str, phone: &str) {
    app.dispatch(ShopEvent::BasketOpen);
    app.dispatch(ShopEvent::OrderOpen);
    type_field(app, FormKind::Order, OrderField::Address, address);
    app.dispatch(ShopEvent::FormSubmit(FormKind::Order));
    type_field(app, FormKind::Contacts, OrderField::Email, email);
    type_field(app, FormKind::Contacts, OrderField::Phone, phone);
}
