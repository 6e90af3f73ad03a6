// Typed proxy commands for the scanner backend. The webview never talks to
// the network itself; every backend operation crosses the same closed
// invoke surface as the capability bridge.

use tauri::{AppHandle, State};
use tauri_plugin_dialog::DialogExt;
use vulnora_core::{ScanRequest, ScanResult, ScanSummary};

use crate::AppState;

/// Submit a scan for the given project path.
#[tauri::command]
pub async fn run_scan(
    state: State<'_, AppState>,
    path: String,
    model: Option<String>,
) -> Result<ScanResult, String> {
    let request = ScanRequest::new(path, model);
    log::info!(
        "scan requested for {} (model {})",
        request.path,
        request.model
    );

    let result = state.client.scan(&request).await.map_err(|err| {
        log::error!("scan request failed: {err:?}");
        err.user_message()
    })?;

    log::info!(
        "scan finished: {} issues across {} files in {:.2}s ({})",
        result.issues.len(),
        result.files_scanned,
        result.scan_duration,
        result.severity_breakdown()
    );
    log::debug!("issue types: {:?}", result.issue_types());
    Ok(result)
}

#[tauri::command]
pub async fn fetch_history(state: State<'_, AppState>) -> Result<Vec<ScanSummary>, String> {
    state.client.history().await.map_err(|err| {
        log::error!("history fetch failed: {err:?}");
        err.user_message()
    })
}

#[tauri::command]
pub async fn fetch_scan_details(
    state: State<'_, AppState>,
    scan_id: i64,
) -> Result<ScanResult, String> {
    state.client.scan_details(scan_id).await.map_err(|err| {
        log::error!("failed to load scan {scan_id}: {err:?}");
        err.user_message()
    })
}

/// Download the PDF report for a scan and save it where the user chooses.
/// Resolves to the saved path, or `None` when the save dialog is canceled.
#[tauri::command]
pub async fn export_report(
    app: AppHandle,
    state: State<'_, AppState>,
    scan_id: i64,
) -> Result<Option<String>, String> {
    let bytes = state.client.export_report(scan_id).await.map_err(|err| {
        log::error!("report export failed for scan {scan_id}: {err:?}");
        err.user_message()
    })?;

    let target = app
        .dialog()
        .file()
        .set_file_name(format!("vulnora_report_{scan_id}.pdf"))
        .add_filter("PDF report", &["pdf"])
        .blocking_save_file();

    let Some(target) = target else {
        return Ok(None);
    };
    let path = target.to_string();

    let write_path = path.clone();
    tauri::async_runtime::spawn_blocking(move || std::fs::write(&write_path, &bytes))
        .await
        .map_err(|e| e.to_string())?
        .map_err(|e| format!("Failed to save report: {e}"))?;

    log::info!("report for scan {scan_id} saved to {path}");
    Ok(Some(path))
}
