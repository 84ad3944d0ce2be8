//! Clipboard handling for the copy-row buttons.
//!
//! Writes plain text to the system clipboard and reports whether the write
//! went through, so callers can show a "Copied" acknowledgement only when it
//! did.

use egui::Context;

/// Puts `text` on the system clipboard.
///
/// # Platform Support
/// * Native (Windows, macOS, Linux): via the arboard crate
/// * Web (WASM): via the egui context, which eframe bridges to the browser
///   clipboard
#[cfg(not(target_arch = "wasm32"))]
pub fn copy_text(_ctx: &Context, text: &str) -> bool {
    use arboard::Clipboard;

    match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(text) {
            Ok(()) => {
                log::debug!("copied {} bytes to clipboard", text.len());
                true
            }
            Err(e) => {
                log::warn!("Failed to write clipboard text: {e}");
                false
            }
        },
        Err(e) => {
            log::warn!("Failed to access clipboard: {e}");
            false
        }
    }
}

/// On web the browser clipboard is only reachable through the egui context;
/// eframe forwards the copy to the async Clipboard API. The write is fire and
/// forget, so it is reported as successful.
#[cfg(target_arch = "wasm32")]
pub fn copy_text(ctx: &Context, text: &str) -> bool {
    ctx.copy_text(text.to_owned());
    true
}
