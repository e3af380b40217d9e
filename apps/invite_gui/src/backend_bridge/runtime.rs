//! Worker thread bridging the UI command queue to the RSVP transport.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use page_core::transport::{HttpRsvpTransport, RsvpTransport};

use crate::backend_bridge::commands::BackendCommand;
use crate::config::Settings;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(settings: Settings, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::RsvpFailed(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("submission worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build submission worker runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let transport = HttpRsvpTransport::new(settings.rsvp_endpoint.clone());
            tracing::info!(endpoint = %transport.endpoint(), "submission worker ready");
            let _ = ui_tx.try_send(UiEvent::Info("Submission worker ready".to_string()));

            while let Ok(command) = cmd_rx.recv() {
                match command {
                    BackendCommand::SubmitRsvp { payload } => {
                        match transport.dispatch(&payload).await {
                            Ok(()) => {
                                let _ = ui_tx.try_send(UiEvent::RsvpAccepted);
                            }
                            Err(err) => {
                                tracing::warn!("rsvp dispatch failed: {err}");
                                let _ = ui_tx.try_send(UiEvent::RsvpFailed(
                                    UiError::from_message(
                                        UiErrorContext::SubmitRsvp,
                                        err.to_string(),
                                    ),
                                ));
                            }
                        }
                    }
                }
            }
        });
    });
}
