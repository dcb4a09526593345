//! Composition root for runtime wiring.

use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::adapter::inbound::http::{self, AppState};
#[cfg(feature = "telegram")]
use crate::adapter::outbound::telegram::{spawn_command_worker, TelegramChannel};
use crate::application::{Notifier, ServiceStatus, WebhookDispatcher};
use crate::error::Result;
#[cfg(not(feature = "telegram"))]
use crate::port::LogChannel;

use super::config::Config;

/// A connected chat channel and its optional command listener.
struct Chat {
    notifier: Notifier,
    worker: Option<JoinHandle<()>>,
}

/// Run the service until a shutdown signal arrives.
///
/// # Errors
///
/// Returns an error if the chat login fails or the listener cannot be bound.
pub async fn run(config: Config) -> Result<()> {
    let status = ServiceStatus::new(config.server.port);
    let chat = connect_chat(&config, &status).await?;

    if let Err(e) = chat.notifier.send_startup_notification().await {
        warn!(error = %e, "Startup message not delivered");
    }

    let addr = config.server.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, secret = config.webhook_secret.is_some(), "Webhook server listening");

    let state = Arc::new(AppState {
        dispatcher: WebhookDispatcher::new(chat.notifier),
        secret: config.webhook_secret,
    });

    let served = http::serve(listener, state, shutdown_signal()).await;

    if let Some(worker) = chat.worker {
        worker.abort();
    }
    info!("mintwatch stopped");
    served
}

#[cfg(feature = "telegram")]
async fn connect_chat(config: &Config, status: &ServiceStatus) -> Result<Chat> {
    let channel = Arc::new(TelegramChannel::new(&config.telegram));
    channel
        .login()
        .await
        .map_err(|e| crate::error::Error::Startup(format!("Telegram login failed: {e}")))?;

    if let Err(e) = channel.resolve().await {
        warn!(error = %e, "Could not resolve Telegram chat; notifications may fail");
    }

    let bot = channel.bot().clone();
    let notifier = Notifier::new(channel);
    let worker = spawn_command_worker(bot, notifier.clone(), status.clone());

    Ok(Chat {
        notifier,
        worker: Some(worker),
    })
}

#[cfg(not(feature = "telegram"))]
async fn connect_chat(_config: &Config, _status: &ServiceStatus) -> Result<Chat> {
    warn!("Built without the telegram feature; notifications are only logged");
    Ok(Chat {
        notifier: Notifier::new(Arc::new(LogChannel)),
        worker: None,
    })
}

/// Resolve on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C"),
        () = terminate => info!("Received terminate signal"),
    }
}
