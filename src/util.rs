/// Sleep until the next clock-aligned tick.
///
/// For example, with `interval_secs = 900` (15 min), if the current time is
/// 14:03:22, this sleeps until 14:15:00.
pub async fn sleep_until_aligned(interval_secs: u64) {
    let interval_secs = interval_secs.max(1);
    let now = chrono::Utc::now();
    let current_secs = now.timestamp() as u64;
    let next_tick = (current_secs / interval_secs + 1) * interval_secs;
    let sleep_secs = next_tick - current_secs;

    tracing::debug!(
        next_tick_in_secs = sleep_secs,
        next_tick_at = %chrono::DateTime::from_timestamp(next_tick as i64, 0).unwrap_or_default(),
        "sleeping until next aligned tick"
    );

    tokio::time::sleep(std::time::Duration::from_secs(sleep_secs)).await;
}

/// Today's date in UTC, which is what the schedule endpoint keys games on.
pub fn today() -> chrono::NaiveDate {
    chrono::Utc::now().date_naive()
}
