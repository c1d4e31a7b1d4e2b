//! Clipboard Commands

use wasm_bindgen_futures::JsFuture;

use super::window::browser_window;

/// Write text to the system clipboard
pub async fn copy_text(text: &str) -> Result<(), String> {
    let promise = browser_window()?.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| format!("Clipboard write failed: {:?}", e))
}
