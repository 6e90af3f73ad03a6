use tauri::webview::PageLoadEvent;
use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindowBuilder};

mod api;
mod bridge;
mod config;

use config::BackendConfig;

pub const MAIN_WINDOW: &str = "main";

/// Shared application state: backend endpoint config plus the HTTP client.
/// Read-only after setup, so no locking is needed.
pub struct AppState {
    pub config: BackendConfig,
    pub client: vulnora_core::BackendClient,
}

/// Create the main window hidden; it is shown once the page has finished
/// loading to avoid a flash of unstyled content.
fn create_main_window(app: &AppHandle) -> tauri::Result<()> {
    if let Some(window) = app.get_webview_window(MAIN_WINDOW) {
        let _ = window.set_focus();
        return Ok(());
    }
    WebviewWindowBuilder::new(app, MAIN_WINDOW, WebviewUrl::App("index.html".into()))
        .title("Vulnora AI - Security Scanner")
        .inner_size(1400.0, 900.0)
        .min_inner_size(1200.0, 700.0)
        .visible(false)
        .build()?;
    Ok(())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let app = tauri::Builder::default()
        .plugin(
            tauri_plugin_log::Builder::default()
                .level(log::LevelFilter::Info)
                .build(),
        )
        .plugin(tauri_plugin_dialog::init())
        .setup(|app| {
            let config = BackendConfig::from_env();
            log::info!("scanner backend at {}", config.base_url());
            let client = vulnora_core::BackendClient::new(config.base_url())?;
            app.manage(AppState { config, client });
            create_main_window(app.handle())?;
            Ok(())
        })
        .on_page_load(|webview, payload| {
            if payload.event() == PageLoadEvent::Finished && webview.label() == MAIN_WINDOW {
                if let Some(window) = webview.app_handle().get_webview_window(MAIN_WINDOW) {
                    if let Err(e) = window.show() {
                        log::warn!("failed to show main window: {e}");
                    }
                }
            }
        })
        .invoke_handler(tauri::generate_handler![
            bridge::select_directory,
            bridge::check_server_health,
            bridge::get_server_url,
            bridge::is_native_shell,
            api::run_scan,
            api::fetch_history,
            api::fetch_scan_details,
            api::export_report
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(|_app_handle, event| match event {
        // macOS convention: the app stays resident with zero windows until an
        // explicit quit (app.exit sets a code, window-close does not).
        #[cfg(target_os = "macos")]
        tauri::RunEvent::ExitRequested { api, code, .. } => {
            if code.is_none() {
                api.prevent_exit();
            }
        }
        #[cfg(target_os = "macos")]
        tauri::RunEvent::Reopen {
            has_visible_windows,
            ..
        } => {
            if !has_visible_windows {
                if let Err(e) = create_main_window(_app_handle) {
                    log::error!("failed to recreate main window: {e}");
                }
            }
        }
        _ => {}
    });
}
