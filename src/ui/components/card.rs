use crate::events::ShopEvent;
use crate::model::Product;
use crate::ui::components::Component;
use crate::ui::dom::{
    ensure_element, query_selector, set_disabled, set_image, set_text, toggle_class, DomError,
    NodeRef,
};

pub const PRICELESS: &str = "Priceless";

const PRICE_UNIT: &str = "synapses";

const CATEGORY_CLASSES: [(&str, &str); 5] = [
    ("софт-скил", "soft"),
    ("хард-скил", "hard"),
    ("другое", "other"),
    ("дополнительное", "additional"),
    ("кнопка", "button"),
];

/// Style class for a known category.
pub fn category_class(category: &str) -> Option<String> {
    CATEGORY_CLASSES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, suffix)| format!("card__category_{}", suffix))
}

pub fn format_price(price: u64) -> String {
    format!("{} {}", price, PRICE_UNIT)
}

/// Everything a product card can show. `description` and `button` are only
/// applied when present, since catalog tiles have neither.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardData {
    pub title: String,
    pub image: String,
    pub category: String,
    pub price: Option<u64>,
    pub description: Option<String>,
    pub button: Option<String>,
}

impl CardData {
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
            price: product.price,
            description: product.description.clone(),
            button: None,
        }
    }

    pub fn with_button(mut self, label: &str) -> Self {
        self.button = Some(label.to_string());
        self
    }
}

pub struct Card {
    container: NodeRef,
    title: NodeRef,
    image: NodeRef,
    price: NodeRef,
    category: NodeRef,
    description: Option<NodeRef>,
    button: Option<NodeRef>,
}

impl Card {
    /// Bind a card fragment whose element classes are prefixed with `block`.
    ///
    /// `on_click` goes to the card's button when it has one, otherwise to
    /// the whole card.
    pub fn new(block: &str, container: NodeRef, on_click: ShopEvent) -> Result<Self, DomError> {
        let title = ensure_element(&container, &format!(".{}__title", block))?;
        let image = ensure_element(&container, &format!(".{}__image", block))?;
        let price = ensure_element(&container, &format!(".{}__price", block))?;
        let category = ensure_element(&container, &format!(".{}__category", block))?;
        let description = query_selector(&container, &format!(".{}__text", block));
        let button = query_selector(&container, &format!(".{}__button", block));

        match &button {
            Some(button) => button.borrow_mut().on_click = Some(on_click),
            None => container.borrow_mut().on_click = Some(on_click),
        }

        Ok(Self {
            container,
            title,
            image,
            price,
            category,
            description,
            button,
        })
    }

    pub fn set_title(&self, title: &str) {
        set_text(&self.title, title);
    }

    pub fn set_description(&self, description: &str) {
        if let Some(node) = &self.description {
            set_text(node, description);
        }
    }

    pub fn set_image(&self, src: &str) {
        let alt = self.title.borrow().text.clone();
        set_image(&self.image, src, &alt);
    }

    /// Show the price; a priceless card cannot be bought.
    pub fn set_price(&self, price: Option<u64>) {
        match price {
            Some(price) => set_text(&self.price, format_price(price)),
            None => set_text(&self.price, PRICELESS),
        }
        if let Some(button) = &self.button {
            set_disabled(button, price.is_none());
        }
    }

    /// Price as currently rendered.
    pub fn price(&self) -> Option<u64> {
        self.price
            .borrow()
            .text
            .split_whitespace()
            .next()
            .and_then(|amount| amount.parse().ok())
    }

    pub fn set_category(&self, category: &str) {
        set_text(&self.category, category);
        if let Some(class) = category_class(category) {
            toggle_class(&self.category, &class, true);
        }
    }

    pub fn set_button(&self, label: &str) {
        if let Some(button) = &self.button {
            set_text(button, label);
        }
    }
}

impl Component for Card {
    type Data = CardData;

    fn container(&self) -> &NodeRef {
        &self.container
    }

    fn apply(&self, data: CardData) {
        self.set_title(&data.title);
        self.set_image(&data.image);
        self.set_category(&data.category);
        self.set_price(data.price);
        if let Some(description) = &data.description {
            self.set_description(description);
        }
        if let Some(label) = &data.button {
            self.set_button(label);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasketItemData {
    pub title: String,
    pub price: Option<u64>,
}

impl BasketItemData {
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price,
        }
    }
}

/// A basket row: position, title, price and a delete button.
pub struct CardBasket {
    container: NodeRef,
    index: NodeRef,
    title: NodeRef,
    price: NodeRef,
}

impl CardBasket {
    /// `index` is zero-based; the row shows it one-based.
    pub fn new(index: usize, container: NodeRef, on_click: ShopEvent) -> Result<Self, DomError> {
        let index_node = ensure_element(&container, ".basket__item-index")?;
        let title = ensure_element(&container, ".card__title")?;
        let price = ensure_element(&container, ".card__price")?;
        let button = ensure_element(&container, ".card__button")?;
        button.borrow_mut().on_click = Some(on_click);

        let row = Self {
            container,
            index: index_node,
            title,
            price,
        };
        row.set_index(index + 1);
        Ok(row)
    }

    pub fn set_index(&self, index: usize) {
        set_text(&self.index, index.to_string());
    }

    pub fn set_title(&self, title: &str) {
        set_text(&self.title, title);
    }

    pub fn set_price(&self, price: Option<u64>) {
        match price {
            Some(price) => set_text(&self.price, format_price(price)),
            None => set_text(&self.price, PRICELESS),
        }
    }
}

impl Component for CardBasket {
    type Data = BasketItemData;

    fn container(&self) -> &NodeRef {
        &self.container
    }

    fn apply(&self, data: BasketItemData) {
        self.set_title(&data.title);
        self.set_price(data.price);
    }
}
