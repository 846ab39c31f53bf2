// Startup configuration read from the environment
//
// The only setting is the terminal width used by auto-fit layouts.
use log::warn;

/// Width used when nothing better is known
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Environment variable that overrides the detected width
pub const COLUMNS_VAR: &str = "COLUMNS";

/// Parse a width override; only positive integers count
pub fn parse_width(value: &str) -> Option<usize> {
    value.trim().parse::<usize>().ok().filter(|&width| width > 0)
}

/// Pick the terminal width from an override and a detected size
///
/// Order: a valid override, then the detected width, then 80.
pub fn resolve_width(override_value: Option<&str>, detected: Option<usize>) -> usize {
    if let Some(raw) = override_value {
        match parse_width(raw) {
            Some(width) => return width,
            None => warn!("ignoring {}={:?}: not a positive integer", COLUMNS_VAR, raw),
        }
    }
    detected
        .filter(|&width| width > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}

/// Terminal width for this run
///
/// Reads `COLUMNS` and asks the terminal for its size. Call once at startup.
pub fn terminal_width() -> usize {
    let override_value = std::env::var(COLUMNS_VAR).ok();
    let detected = crossterm::terminal::size()
        .ok()
        .map(|(columns, _rows)| columns as usize);
    resolve_width(override_value.as_deref(), detected)
}
