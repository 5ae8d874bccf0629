use std::time::Duration;

const SECONDS_PER_DAY: i64 = 24 * 3600;

/// Renders elapsed seconds as `H:MM:SS` on a 24 hour clock.
///
/// The value is rounded to the nearest second (ties to even) and reduced
/// modulo one day, so `90061` seconds reads as `1:01:01`. Negative input wraps
/// into the previous day.
pub fn convert_time(seconds: f64) -> String {
    let mut seconds = (seconds.round_ties_even() as i64).rem_euclid(SECONDS_PER_DAY);
    let hour = seconds / 3600;
    seconds %= 3600;
    let minutes = seconds / 60;
    seconds %= 60;

    format!("{}:{:02}:{:02}", hour, minutes, seconds)
}

#[inline]
pub fn format_elapsed(elapsed: Duration) -> String {
    convert_time(elapsed.as_secs_f64())
}
