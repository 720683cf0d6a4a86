//! CLI command implementations
//!
//! Commands are organized by screen:
//! - `core` - Core commands (init, status) and shared utilities (open_db)
//! - `transactions` - Entry commands (add, edit, list)
//! - `reports` - Dashboard, forecast and goal tracker
//! - `suggestions` - Rule-based spending suggestions

pub mod core;
pub mod reports;
pub mod suggestions;
pub mod transactions;

// Re-export command functions for main.rs
pub use self::core::*;
pub use self::reports::*;
pub use self::suggestions::*;
pub use self::transactions::*;

/// Truncate a string to a maximum length, adding "..." if truncated
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format an amount with two decimals and thousands separators (48900 -> "48,900.00")
pub fn format_amount(amount: f64) -> String {
    let formatted = format!("{:.2}", amount.abs());
    let (whole, frac) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && formatted != "0.00" { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac)
}

/// Text progress bar for a 0-100 percentage
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled.min(width)))
}
