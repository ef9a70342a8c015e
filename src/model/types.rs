use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub type ProductId = String;

/// A catalog entry as served by the shop API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Internal product name. The live API omits it for most items.
    #[serde(default)]
    pub name: String,
    /// `None` marks a priceless item that cannot be bought.
    pub price: Option<u64>,
    #[serde(default)]
    pub description: Option<String>,
    pub image: String,
    pub category: String,
}

impl Product {
    pub fn is_priceless(&self) -> bool {
        self.price.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayMethod {
    Cash,
    Card,
}

impl PayMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayMethod::Cash => "cash",
            PayMethod::Card => "card",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "cash" => Some(PayMethod::Cash),
            "card" => Some(PayMethod::Card),
            _ => None,
        }
    }
}

/// Draft order assembled during checkout and posted as-is to the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub payment: Option<PayMethod>,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total: u64,
    pub items: Vec<ProductId>,
}

impl Default for Order {
    fn default() -> Self {
        Self {
            payment: Some(PayMethod::Card),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            total: 0,
            items: Vec::new(),
        }
    }
}

/// Which validation group a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    Delivery,
    Contacts,
}

/// User-editable order fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderField {
    Payment,
    Address,
    Email,
    Phone,
}

impl OrderField {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderField::Payment => "payment",
            OrderField::Address => "address",
            OrderField::Email => "email",
            OrderField::Phone => "phone",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "payment" => Some(OrderField::Payment),
            "address" => Some(OrderField::Address),
            "email" => Some(OrderField::Email),
            "phone" => Some(OrderField::Phone),
            _ => None,
        }
    }

    pub fn group(&self) -> FieldGroup {
        match self {
            OrderField::Payment | OrderField::Address => FieldGroup::Delivery,
            OrderField::Email | OrderField::Phone => FieldGroup::Contacts,
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation messages keyed by field. Replaced wholesale on every pass.
pub type FormErrors = BTreeMap<OrderField, String>;

/// Order id as returned by the API, which has served both numbers and uuids.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OrderId {
    Number(u64),
    Text(String),
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderId::Number(id) => write!(f, "{}", id),
            OrderId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderResult {
    pub id: OrderId,
    pub total: u64,
}
