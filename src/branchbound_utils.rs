use std::time::SystemTime;

/// Current wall clock time in seconds since the unix epoch, used by the
/// solver logger to report run time.
pub fn get_current_time() -> f64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map_or(0.0, |d| d.as_secs_f64())
}

/// Rounds a value to a fixed number of decimal places. Node objectives are
/// reported at 2 decimals, deduplication keys are built at
/// [`crate::assignment::KEY_DECIMALS`] decimals.
pub fn round_decimals(value: f64, decimals: u32) -> f64 {
    let scale = 10.0f64.powi(decimals as i32);
    (value * scale).round() / scale
}
