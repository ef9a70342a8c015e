use crate::api::{ApiCommand, ApiCommandSender};
use crate::events::{Emitter, ShopEvent};
use crate::model::AppState;
use crate::ui::components::{
    Basket, Card, CardBasket, ContactsForm, Modal, OrderForm, Page, Success,
};
use crate::ui::dom::{DomError, NodeRef};
use crate::ui::input::FocusRing;
use crate::ui::templates::{
    Templates, BASKET, CARD_BASKET, CARD_CATALOG, CARD_PREVIEW, CONTACTS, MODAL, ORDER, PAGE,
    SUCCESS,
};

/// Everything the bus handlers operate on: the model, the persistent views
/// and the outbound command channel.
pub struct Shop {
    pub(crate) model: AppState,
    pub(crate) templates: Templates,
    pub(crate) page: Page,
    pub(crate) modal: Modal,
    pub(crate) basket: Basket,
    pub(crate) order: OrderForm,
    pub(crate) contacts: ContactsForm,
    pub(crate) focus: FocusRing,
    pub(crate) order_in_flight: bool,
    events: Emitter,
    api: Option<ApiCommandSender>,
}

impl Shop {
    /// Build the persistent views and check every per-item template once, so
    /// broken markup fails here instead of mid-checkout.
    pub fn new(
        templates: Templates,
        events: Emitter,
        api: Option<ApiCommandSender>,
    ) -> Result<Self, DomError> {
        let page = Page::new(templates.clone_template(PAGE)?)?;
        let modal = Modal::new(templates.clone_template(MODAL)?, events.clone())?;
        let basket = Basket::new(templates.clone_template(BASKET)?)?;
        let order = OrderForm::new(templates.clone_template(ORDER)?)?;
        let contacts = ContactsForm::new(templates.clone_template(CONTACTS)?)?;

        Card::new(
            "card",
            templates.clone_template(CARD_CATALOG)?,
            ShopEvent::BasketOpen,
        )?;
        Card::new(
            "card",
            templates.clone_template(CARD_PREVIEW)?,
            ShopEvent::BasketOpen,
        )?;
        CardBasket::new(0, templates.clone_template(CARD_BASKET)?, ShopEvent::BasketOpen)?;
        Success::new(templates.clone_template(SUCCESS)?, 0)?;

        Ok(Self {
            model: AppState::new(events.clone()),
            templates,
            page,
            modal,
            basket,
            order,
            contacts,
            focus: FocusRing::default(),
            order_in_flight: false,
            events,
            api,
        })
    }

    pub fn model(&self) -> &AppState {
        &self.model
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub fn order_form(&self) -> &OrderForm {
        &self.order
    }

    pub fn contacts_form(&self) -> &ContactsForm {
        &self.contacts
    }

    pub fn is_order_in_flight(&self) -> bool {
        self.order_in_flight
    }

    pub fn emitter(&self) -> &Emitter {
        &self.events
    }

    /// Root of whatever currently takes input: the modal while it is open,
    /// the page otherwise.
    pub fn surface(&self) -> NodeRef {
        if self.modal.is_open() {
            self.modal.container().clone()
        } else {
            self.page.container().clone()
        }
    }

    /// Hand a command to the API worker. Returns whether it was queued.
    pub(crate) fn send(&self, command: ApiCommand) -> bool {
        let Some(api) = &self.api else {
            tracing::warn!(?command, "no API worker attached, command dropped");
            return false;
        };
        match api.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(error = %err, "failed to queue API command");
                false
            }
        }
    }
}
