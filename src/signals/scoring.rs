//! Score normalization for progress display

/// Percentage of `total` reached by `score`, for the phase progress bar.
///
/// A zero total uses 1 as denominator, so an empty phase renders 0% instead
/// of NaN or infinity. The result is clamped to `0..=100`.
pub fn fill_percentage(score: u32, total: u32) -> f64 {
    let denominator = total.max(1) as f64;
    (score as f64 / denominator * 100.0).clamp(0.0, 100.0)
}

/// Text bar of `width` cells filled to `percentage`
pub fn progress_bar(percentage: f64, width: usize) -> String {
    let filled = ((percentage / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "#".repeat(filled), "-".repeat(width - filled))
}
