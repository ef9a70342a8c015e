mod common;

use common::{checkout, drain_commands, product, shop_app, type_field};
use weblarek::api::ApiCommand;
use weblarek::events::{FormKind, ShopEvent};
use weblarek::model::{Order, OrderField, OrderId, OrderResult, PayMethod, ADDRESS_REQUIRED};
use weblarek::ui::dom::{ensure_element, query_selector};
use weblarek::ui::events::AppEvent;

fn submitted_orders(commands: Vec<ApiCommand>) -> Vec<Order> {
    commands
        .into_iter()
        .filter_map(|command| match command {
            ApiCommand::SubmitOrder(order) => Some(order),
            ApiCommand::LoadCatalog => None,
        })
        .collect()
}

#[test]
fn valid_checkout_sends_exactly_one_order() {
    let (mut app, mut rx) = shop_app();
    app.dispatch(ShopEvent::CardSelect(product("1", Some(100))));
    app.dispatch(ShopEvent::ProductAdded(product("1", Some(100))));
    checkout(&mut app, "Tver, Main st 1", "a@b.com", "+7 900 000");
    assert!(app.shop().contacts_form().form().is_valid());

    app.dispatch(ShopEvent::FormSubmit(FormKind::Contacts));

    let orders = submitted_orders(drain_commands(&mut rx));
    assert_eq!(
        orders,
        vec![Order {
            payment: Some(PayMethod::Card),
            email: "a@b.com".to_string(),
            phone: "+7 900 000".to_string(),
            address: "Tver, Main st 1".to_string(),
            total: 100,
            items: vec!["1".to_string()],
        }]
    );
    assert!(app.shop().is_order_in_flight());
}

#[test]
fn submitted_items_are_the_basket_at_finalize_time() {
    let (mut app, mut rx) = shop_app();
    app.dispatch(ShopEvent::ProductAdded(product("1", Some(100))));
    app.dispatch(ShopEvent::ProductAdded(product("3", Some(250))));
    checkout(&mut app, "Tver", "a@b.com", "+7");
    app.dispatch(ShopEvent::BasketRemove {
        id: "3".to_string(),
    });

    app.dispatch(ShopEvent::FormSubmit(FormKind::Contacts));
    app.dispatch(ShopEvent::ProductAdded(product("3", Some(250))));

    let orders = submitted_orders(drain_commands(&mut rx));
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].items, vec!["1".to_string()]);
    assert_eq!(orders[0].total, 100);
    assert_eq!(app.shop().model().basket_total(), 350);
}

#[test]
fn second_submit_is_ignored_until_the_shop_answers() {
    let (mut app, mut rx) = shop_app();
    app.dispatch(ShopEvent::ProductAdded(product("1", Some(100))));
    checkout(&mut app, "Tver", "a@b.com", "+7");

    app.dispatch(ShopEvent::FormSubmit(FormKind::Contacts));
    app.dispatch(ShopEvent::FormSubmit(FormKind::Contacts));
    assert_eq!(submitted_orders(drain_commands(&mut rx)).len(), 1);

    app.on_app_event(AppEvent::OrderFailed("Shop is unreachable".to_string()));
    assert!(!app.shop().is_order_in_flight());

    app.dispatch(ShopEvent::FormSubmit(FormKind::Contacts));
    assert_eq!(submitted_orders(drain_commands(&mut rx)).len(), 1);
}

#[test]
fn failed_order_keeps_modal_and_basket() {
    let (mut app, mut rx) = shop_app();
    app.dispatch(ShopEvent::ProductAdded(product("1", Some(100))));
    checkout(&mut app, "Tver", "a@b.com", "+7");
    app.dispatch(ShopEvent::FormSubmit(FormKind::Contacts));
    drain_commands(&mut rx);

    app.on_app_event(AppEvent::OrderFailed("Shop rejected the request".to_string()));

    assert!(app.modal_is_open());
    assert_eq!(app.shop().model().basket_items().len(), 1);
    assert_eq!(
        app.shop().contacts_form().form().errors(),
        "Shop rejected the request"
    );
    assert!(drain_commands(&mut rx).is_empty());
}

#[test]
fn placed_order_shows_success_and_clears_basket() {
    let (mut app, mut rx) = shop_app();
    app.dispatch(ShopEvent::ProductAdded(product("1", Some(100))));
    app.dispatch(ShopEvent::ProductAdded(product("3", Some(250))));
    checkout(&mut app, "Tver", "a@b.com", "+7");
    app.dispatch(ShopEvent::FormSubmit(FormKind::Contacts));
    drain_commands(&mut rx);

    app.on_app_event(AppEvent::OrderPlaced(OrderResult {
        id: OrderId::Text("28c57cb4".to_string()),
        total: 350,
    }));

    let content = app.shop().modal().content().expect("success is shown");
    let description = ensure_element(&content, ".order-success__description").unwrap();
    assert_eq!(description.borrow().text, "Debited 350 synapses");
    assert!(app.shop().model().basket_items().is_empty());
    assert_eq!(app.shop().model().order(), &Order::default());
    assert_eq!(app.shop().page().counter(), "0");
    assert!(!app.shop().basket().can_checkout());

    app.dispatch(ShopEvent::SuccessClose);
    assert!(!app.modal_is_open());
    assert!(!app.shop().page().is_locked());
    assert_eq!(app.shop().order_form().active_payment(), None);
}

#[test]
fn priceless_product_cannot_be_bought() {
    let (mut app, _rx) = shop_app();
    app.dispatch(ShopEvent::ProductAdded(product("1", Some(100))));

    app.dispatch(ShopEvent::CardSelect(product("2", None)));
    let content = app.shop().modal().content().unwrap();
    let button = ensure_element(&content, ".card__button").unwrap();
    assert!(button.borrow().disabled);

    app.dispatch(ShopEvent::ProductAdded(product("2", None)));
    assert_eq!(app.shop().model().basket_items().len(), 1);
    assert_eq!(app.shop().model().basket_total(), 100);
}

#[test]
fn preview_offers_removal_for_basket_items() {
    let (mut app, _rx) = shop_app();
    let mug = product("1", Some(100));
    app.dispatch(ShopEvent::ProductAdded(mug.clone()));
    assert_eq!(app.shop().page().counter(), "1");

    app.dispatch(ShopEvent::CardSelect(mug.clone()));
    let content = app.shop().modal().content().unwrap();
    let button = ensure_element(&content, ".card__button").unwrap();
    assert_eq!(button.borrow().text, "Remove");
    let intent = button.borrow().on_click.clone();
    assert_eq!(intent, Some(ShopEvent::ProductDelete(mug)));

    app.dispatch(intent.unwrap());
    assert!(app.shop().model().basket_items().is_empty());
    assert!(!app.modal_is_open());
    assert_eq!(app.shop().model().preview(), None);
}

#[test]
fn delivery_form_opens_with_card_and_no_errors_shown() {
    let (mut app, _rx) = shop_app();
    app.dispatch(ShopEvent::ProductAdded(product("1", Some(100))));
    app.dispatch(ShopEvent::BasketOpen);
    app.dispatch(ShopEvent::OrderOpen);

    let order = app.shop().order_form();
    assert_eq!(order.active_payment(), Some(PayMethod::Card));
    assert!(!order.form().is_valid());
    assert_eq!(order.form().errors(), "");
    assert_eq!(app.shop().model().order().payment, Some(PayMethod::Card));

    type_field(&mut app, FormKind::Order, OrderField::Address, "T");
    type_field(&mut app, FormKind::Order, OrderField::Address, "");
    assert_eq!(app.shop().order_form().form().errors(), ADDRESS_REQUIRED);
    assert!(!app.shop().order_form().form().is_valid());

    app.dispatch(ShopEvent::PaymentChanged(PayMethod::Cash));
    assert_eq!(app.shop().order_form().active_payment(), Some(PayMethod::Cash));
    assert_eq!(app.shop().model().order().payment, Some(PayMethod::Cash));
}

#[test]
fn contact_fields_route_through_one_subscription() {
    let (mut app, _rx) = shop_app();
    app.dispatch(ShopEvent::ProductAdded(product("1", Some(100))));
    checkout(&mut app, "Tver", "", "");

    type_field(&mut app, FormKind::Contacts, OrderField::Email, "a@b.com");
    let form = app.shop().contacts_form().form();
    assert!(!form.is_valid());
    assert_eq!(form.errors(), "Enter a phone number");
    assert_eq!(app.shop().model().order().email, "a@b.com");

    type_field(&mut app, FormKind::Contacts, OrderField::Phone, "+7");
    assert!(app.shop().contacts_form().form().is_valid());
    assert_eq!(app.shop().contacts_form().form().errors(), "");
}

#[test]
fn basket_rows_remove_their_product() {
    let (mut app, _rx) = shop_app();
    app.dispatch(ShopEvent::ProductAdded(product("1", Some(100))));
    app.dispatch(ShopEvent::ProductAdded(product("3", Some(250))));
    app.dispatch(ShopEvent::BasketOpen);

    let basket = app.shop().basket().render();
    let price = ensure_element(&basket, ".basket__price").unwrap();
    assert_eq!(price.borrow().text, "350 synapses");

    app.dispatch(ShopEvent::BasketRemove {
        id: "1".to_string(),
    });
    assert!(app.modal_is_open());
    assert_eq!(price.borrow().text, "250 synapses");
    let index = query_selector(&basket, ".basket__item-index").unwrap();
    assert_eq!(index.borrow().text, "1");
    assert_eq!(app.shop().page().counter(), "1");
}

#[test]
fn empty_preview_closes_the_modal() {
    let (mut app, _rx) = shop_app();
    app.dispatch(ShopEvent::CardSelect(product("3", Some(250))));
    assert!(app.modal_is_open());
    assert!(app.shop().page().is_locked());

    app.dispatch(ShopEvent::PreviewChanged(None));

    assert!(!app.modal_is_open());
    assert!(!app.shop().page().is_locked());
    assert!(app.shop().modal().content().is_none());
}
