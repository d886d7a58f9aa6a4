//! Progress bar rendering for the summary display.

/// Render a bounded bar for an unclamped ratio.
///
/// The bar itself clamps to [0, 1]; the trailing percentage stays raw so a
/// surpassed goal reads e.g. "112%".
pub fn render_bar(ratio: f64, width: usize) -> String {
    let clamped = ratio.clamp(0.0, 1.0);
    let filled = (clamped * width as f64).round() as usize;
    format!(
        "[{}{}] {:.0}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        ratio * 100.0
    )
}
