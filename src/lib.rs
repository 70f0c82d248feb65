// Sortviz - Sorting Algorithm Visualizer
// Module declarations

pub mod algorithms;
#[cfg(feature = "desktop")]
mod commands;
pub mod config;
pub mod events;
pub mod replay;
pub mod session;
pub mod state;

pub use algorithms::{run_algorithm, Algorithm, SortOutcome};
pub use config::{ConfigError, VisualizerConfig};
pub use events::{Event, Trace};
pub use replay::{replay, Channel, HighlightSink, ReplayConfig};
pub use session::{SortError, SortHandle, SortRun, Visualizer};
pub use state::{HighlightState, RecordingSink, SinkCall};

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use tauri::Manager;

    tauri::Builder::default()
        .setup(|app| {
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            app.manage(commands::VisualizerState::default());

            log::info!("Sortviz initialized successfully");
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::sort,
            commands::generate_array,
            commands::is_running,
            commands::list_algorithms,
            commands::array_settings_for_slider,
            commands::initial_array_settings,
            commands::encode_trace_command,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
