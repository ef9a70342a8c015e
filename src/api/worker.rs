use std::sync::mpsc as std_mpsc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::api::client::LarekApi;
use crate::model::Order;
use crate::ui::events::AppEvent;

const COMMAND_BUFFER: usize = 16;

/// Network requests issued by the UI thread.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    LoadCatalog,
    SubmitOrder(Order),
}

pub type ApiCommandSender = mpsc::Sender<ApiCommand>;

/// Spawn the task that owns the HTTP client.
///
/// Commands are served one at a time; results come back to the UI loop as
/// [`AppEvent`]s. Catalog failures are only logged.
pub fn spawn_worker(
    handle: &Handle,
    api: LarekApi,
    events: std_mpsc::Sender<AppEvent>,
) -> ApiCommandSender {
    let (tx, mut rx) = mpsc::channel(COMMAND_BUFFER);

    handle.spawn(async move {
        while let Some(command) = rx.recv().await {
            let reply = match command {
                ApiCommand::LoadCatalog => match api.get_product_list().await {
                    Ok(items) => {
                        tracing::info!(count = items.len(), "catalog loaded");
                        Some(AppEvent::CatalogLoaded(items))
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "catalog fetch failed");
                        None
                    }
                },
                ApiCommand::SubmitOrder(order) => match api.order_products(&order).await {
                    Ok(result) => {
                        tracing::info!(id = %result.id, total = result.total, "order placed");
                        Some(AppEvent::OrderPlaced(result))
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "order submission failed");
                        Some(AppEvent::OrderFailed(err.user_message().to_string()))
                    }
                },
            };

            if let Some(event) = reply {
                if events.send(event).is_err() {
                    tracing::trace!("API reply dropped (UI loop gone)");
                    break;
                }
            }
        }
    });

    tx
}
