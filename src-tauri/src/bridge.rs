// Capability bridge: the only operations the sandboxed webview can reach.
// The invoke handler in lib.rs is a closed allow-list; nothing here hands the
// UI a generic primitive, filesystem access, or process control.

use tauri::{AppHandle, State};
use tauri_plugin_dialog::DialogExt;

use crate::AppState;

/// Open the native directory picker. Resolves to the absolute path of the
/// first selection, or `None` when the user cancels the dialog.
#[tauri::command]
pub async fn select_directory(app: AppHandle) -> Result<Option<String>, String> {
    // blocking_pick_folder returns Option<FilePath>
    let folder = app
        .dialog()
        .file()
        .set_title("Select Project Directory to Scan")
        .blocking_pick_folder();
    Ok(folder.map(|path| path.to_string()))
}

/// Probe the scanner backend. Never errors: any failure is just `false`.
#[tauri::command]
pub async fn check_server_health(state: State<'_, AppState>) -> Result<bool, String> {
    Ok(state.client.health().await)
}

/// The backend base URL the shell was configured with.
#[tauri::command]
pub fn get_server_url(state: State<'_, AppState>) -> String {
    state.config.base_url()
}

/// Environment probe for the webview: always true inside the native shell.
#[tauri::command]
pub fn is_native_shell() -> bool {
    true
}
