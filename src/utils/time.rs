//! Time utilities: millisecond → H:MM formatting and percentage labels.

/// Split a millisecond duration into whole hours and minutes.
/// Seconds are discarded by floor division, not rounded.
pub fn hh_mm_parts(ms: i64) -> (i64, i64) {
    let totsec = ms / 1000;
    let h = totsec / 3600;
    let m = (totsec % 3600) / 60;
    (h, m)
}

/// Format a millisecond duration as `H:MM` (no day wrap, no seconds).
pub fn format_hh_mm(ms: i64) -> String {
    let (h, m) = hh_mm_parts(ms);
    format!("{}:{:02}", h, m)
}

/// Label for a share of a total duration: `H:MM\n(P%)`.
///
/// H:MM comes from `pcg * total_ms / 100` with the same floor rule as
/// [`format_hh_mm`]; the percentage is truncated to an integer.
pub fn hh_mm_from_pcg(pcg: f64, total_ms: i64) -> String {
    let ms = pcg * total_ms as f64 / 100.0;
    let (h, m) = hh_mm_parts(ms as i64);
    format!("{}:{:02}\n({}%)", h, m, pcg as i64)
}
