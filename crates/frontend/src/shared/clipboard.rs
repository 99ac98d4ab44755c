//! Sharing text: clipboard first, a downloaded `.txt` file when the
//! clipboard is missing or refuses, and nothing at all when both fail.

use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};

use super::export::download_text_file;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Copied,
    Downloaded,
    Failed,
}

impl ShareOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            ShareOutcome::Copied => "Copied to clipboard",
            ShareOutcome::Downloaded => "Saved as a text file",
            ShareOutcome::Failed => "Sharing is not available",
        }
    }
}

/// Older browsers and insecure origins have no `navigator.clipboard`
fn has_clipboard() -> bool {
    web_sys::window()
        .map(|w| w.navigator())
        .and_then(|n| js_sys::Reflect::get(&n, &JsValue::from_str("clipboard")).ok())
        .is_some_and(|c| !c.is_undefined() && !c.is_null())
}

async fn write_clipboard(text: &str) -> Result<(), String> {
    if !has_clipboard() {
        return Err("clipboard API unavailable".to_string());
    }
    let window = web_sys::window().ok_or("No window object")?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| format!("clipboard write rejected: {:?}", e))
}

/// Shares `text` and reports which route worked
pub fn share_text<F>(text: &str, filename: &str, on_done: F)
where
    F: FnOnce(ShareOutcome) + 'static,
{
    let text = text.to_owned();
    let filename = filename.to_owned();
    spawn_local(async move {
        let outcome = match write_clipboard(&text).await {
            Ok(()) => ShareOutcome::Copied,
            Err(e) => {
                log::warn!("share: {}, falling back to download", e);
                match download_text_file(&text, &filename) {
                    Ok(()) => ShareOutcome::Downloaded,
                    Err(e) => {
                        log::warn!("share: download failed: {}", e);
                        ShareOutcome::Failed
                    }
                }
            }
        };
        on_done(outcome);
    });
}
