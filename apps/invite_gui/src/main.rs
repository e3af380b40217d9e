//! Desktop rendition of the event-invitation page.
//!
//! The page logic lives in `page_core`; this binary supplies the hosts the
//! core abstracts over: egui widgets as the markup layer, a frame-polled
//! intersection observer, a rodio sink as the audio element, a worker
//! thread with a tokio runtime as the network edge, and a language toggle
//! playing the content-swap collaborator.

mod audio;
mod backend_bridge;
mod config;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;

#[derive(Debug, Parser)]
#[command(name = "invite_gui", about = "Event invitation page")]
struct Args {
    /// Settings file; defaults to ./invite.toml when present.
    #[arg(long)]
    config: Option<std::path::PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let args = Args::parse();
    let settings = config::load_settings(args.config.as_deref());

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(settings.clone(), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Event Invitation")
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Event Invitation",
        options,
        Box::new(move |cc| {
            let persisted = cc.storage.and_then(|storage| {
                storage
                    .get_string(ui::app::SETTINGS_STORAGE_KEY)
                    .and_then(|text| {
                        serde_json::from_str::<ui::app::PersistedSettings>(&text).ok()
                    })
            });
            Ok(Box::new(ui::app::InviteApp::new(
                cmd_tx, ui_rx, settings, persisted,
            )))
        }),
    )
}
