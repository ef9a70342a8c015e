//! Terminal storefront: retained node tree, views, orchestration and the
//! event loop that renders them.

pub mod app;
pub mod components;
pub mod dom;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod orchestration;
pub mod render;
pub mod runtime;
pub mod shop;
pub mod templates;
pub mod terminal_guard;
pub mod theme;

pub use app::App;
pub use runtime::run;
pub use shop::Shop;
