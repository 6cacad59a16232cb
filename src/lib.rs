pub mod config;
pub mod host;
pub mod ipc;

use config::HostConfig;
use host::HostRuntime;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hostbar=info,hostbar_lib=info".into()),
        )
        .init();

    tracing::info!("Starting hostbar");

    let config = HostConfig::load();
    let (runtime, events) = HostRuntime::new();

    tauri::Builder::default()
        .manage(runtime)
        .invoke_handler(tauri::generate_handler![
            ipc::commands::post_message,
            ipc::commands::list_host_events,
        ])
        .setup(move |app| {
            let handle = app.handle().clone();
            host::window::create_main_window(&handle, &config)?;

            events.spawn_dispatcher(config, move || host::window::main_window(&handle))?;

            tracing::info!("hostbar setup complete. Waiting for host events.");
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("Failed to run hostbar");
}
