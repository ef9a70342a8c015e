use ratatui::layout::Rect;

use crate::api::{ApiCommand, ApiCommandSender};
use crate::events::{Emitter, EventBus, ShopEvent};
use crate::ui::dom::{input_event, DomError, NodeKind, NodeRef};
use crate::ui::events::AppEvent;
use crate::ui::input::{handle_key, handle_mouse, Edit};
use crate::ui::orchestration::wire;
use crate::ui::shop::Shop;
use crate::ui::templates::Templates;

/// The storefront as driven by the terminal loop.
pub struct App {
    shop: Shop,
    bus: EventBus<Shop>,
    should_quit: bool,
    modal_area: Option<Rect>,
}

impl App {
    pub fn new(templates: Templates, api: Option<ApiCommandSender>) -> Result<Self, DomError> {
        let emitter = Emitter::new();
        let shop = Shop::new(templates, emitter.clone(), api)?;
        let mut bus = EventBus::new(emitter);
        wire(&mut bus);
        tracing::info!(subscriptions = bus.subscriber_count(), "storefront wired");

        Ok(Self {
            shop,
            bus,
            should_quit: false,
            modal_area: None,
        })
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Queue `event` and run everything it triggers.
    pub fn dispatch(&mut self, event: ShopEvent) -> usize {
        self.bus.emit(event);
        self.pump()
    }

    /// Run whatever commands and views have queued on their own.
    pub fn pump(&mut self) -> usize {
        self.bus.pump(&mut self.shop)
    }

    pub fn request_catalog(&mut self) {
        self.shop.send(ApiCommand::LoadCatalog);
    }

    pub fn on_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(key) => handle_key(self, key),
            AppEvent::Mouse(mouse) => handle_mouse(self, mouse),
            AppEvent::CatalogLoaded(items) => {
                self.shop.model.set_catalog(items);
                self.pump();
            }
            AppEvent::OrderPlaced(result) => {
                self.dispatch(ShopEvent::OrderPlaced(result));
            }
            AppEvent::OrderFailed(message) => {
                self.dispatch(ShopEvent::OrderFailed(message));
            }
            AppEvent::Tick | AppEvent::Resize(..) => {}
        }
    }

    pub fn modal_is_open(&self) -> bool {
        self.shop.modal.is_open()
    }

    pub fn modal_area(&self) -> Option<Rect> {
        self.modal_area
    }

    pub fn set_modal_area(&mut self, area: Option<Rect>) {
        self.modal_area = area;
    }

    pub fn focused(&self) -> Option<NodeRef> {
        self.shop.focus.current(&self.shop.surface())
    }

    pub fn focused_is_input(&self) -> bool {
        self.focused().is_some_and(|node| {
            let kind = node.borrow().kind;
            kind == NodeKind::Input
        })
    }

    pub fn move_focus(&mut self, step: isize) {
        let surface = self.shop.surface();
        self.shop.focus.advance(&surface, step);
    }

    /// Fire the click binding of the focused node.
    pub fn activate(&mut self) {
        let Some(node) = self.focused() else {
            return;
        };
        let event = {
            let node = node.borrow();
            if node.disabled {
                None
            } else {
                node.on_click.clone()
            }
        };
        if let Some(event) = event {
            self.dispatch(event);
        }
    }

    /// Edit the focused input and report the new value to its form.
    pub fn edit(&mut self, edit: Edit) {
        let Some(node) = self.focused() else {
            return;
        };
        {
            let mut input = node.borrow_mut();
            if input.kind != NodeKind::Input {
                return;
            }
            match edit {
                Edit::Insert(ch) => input.value.push(ch),
                Edit::Backspace => {
                    input.value.pop();
                }
            }
        }
        if let Some(event) = input_event(&node) {
            self.dispatch(event);
        }
    }

    pub fn escape(&mut self) -> bool {
        let closed = self.shop.modal.handle_escape();
        self.pump();
        closed
    }

    pub fn click_outside(&mut self) {
        self.shop.modal.click_outside();
        self.pump();
    }
}
