//! HTTP access to the shop API and the worker task that runs it.

mod client;
mod error;
mod worker;

pub use client::{LarekApi, ListResponse};
pub use error::ApiError;
pub use worker::{spawn_worker, ApiCommand, ApiCommandSender};
