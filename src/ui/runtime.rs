use crate::api::{spawn_worker, LarekApi};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::templates::Templates;
use crate::ui::terminal_guard::enter_terminal;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

/// Run the storefront until the user quits.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;
    let api = LarekApi::new(&config.api)?;
    tracing::info!(api = api.api_url(), "starting storefront");

    let (mut terminal, guard) = enter_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);
    let commands = spawn_worker(runtime.handle(), api, events.sender());
    let mut app = App::new(Templates::standard(), Some(commands))?;
    app.request_catalog();

    loop {
        let mut modal_area = None;
        terminal.draw(|frame| modal_area = draw(frame, &app))?;
        app.set_modal_area(modal_area);
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => app.on_app_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_timeout(SHUTDOWN_GRACE);
    tracing::info!("storefront closed");
    Ok(())
}
