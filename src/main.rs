use std::future::Future;
use std::pin::Pin;

use anyhow::{Context, Result};
use log::{debug, info};
use respondo::Responder;
use tokio::signal;

use crate::hallbot::message_bus::{Message, MessageBus, UiCommand};
use crate::hallbot::{store, HallBot};
use crate::utils::{print_err, unwrap_or_def_verbose};

mod api;
mod hallbot;
mod logging;
mod utils;

async fn terminate_on_signal() -> Result<()> {
    let interrupt_signal: Pin<Box<dyn Future<Output = _>>> = Box::pin(async {
        signal::unix::signal(signal::unix::SignalKind::interrupt())
            .context("Failed to register terminate signal handlers!")?
            .recv()
            .await;
        Ok(())
    });
    let terminate_signal = Box::pin(async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to register terminate signal handlers!")?
            .recv()
            .await;
        Ok(())
    });
    futures_util::future::select_all([interrupt_signal, terminate_signal])
        .await
        .0
}

#[tokio::main]
async fn main() {
    logging::init();
    let config = unwrap_or_def_verbose(store::load_config());
    let message_bus = MessageBus::new();
    let bot = HallBot::new(config.clone(), Responder::new(), message_bus.clone());
    let bot_task = tokio::spawn(bot.run());
    tokio::spawn(api::serve(config, message_bus.clone()));

    info!("Running");
    let _ = terminate_on_signal().await.inspect_err(print_err);
    info!("Terminating.");
    message_bus.send(Message::UiCommand(UiCommand::CloseApplication));

    debug!("Waiting for workers to stop...");
    let _ = bot_task.await.inspect_err(print_err);
    debug!("All workers stopped.")
}
