use std::sync::Arc;

use chrono::Duration;

use crate::global::Global;
use crate::util::{sleep_until_aligned, today};

/// Keep the cached pages around today fresh so games that were still being
/// played the last time we looked get their final state.
#[tracing::instrument(name = "Refresher", skip_all)]
pub async fn run(global: Arc<Global>) -> anyhow::Result<()> {
    if !global.config.refresh.enabled {
        tracing::info!("refresher is disabled");
        // Park forever so tokio::select doesn't exit
        std::future::pending::<()>().await;
        return Ok(());
    }

    let interval_secs = global.config.refresh.interval_secs;
    tracing::info!(interval_secs, "starting refresher");

    loop {
        if let Err(e) = refresh_recent(&global).await {
            tracing::error!("refresh cycle failed: {:#}", e);
        }

        sleep_until_aligned(interval_secs).await;
    }
}

#[tracing::instrument(skip_all)]
async fn refresh_recent(global: &Arc<Global>) -> anyhow::Result<()> {
    let to = today();
    let from = to - Duration::days(i64::from(global.config.refresh.lookback_days));

    let games = global.schedule.refresh(from, to).await?;

    tracing::info!(%from, %to, games, "refreshed schedule");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::time::Duration as StdDuration;

    use async_trait::async_trait;
    use chrono::NaiveDate;
    use tracing_test::traced_test;

    use super::*;
    use crate::config::Config;
    use crate::error::Result;
    use crate::schedule::{Schedule, ScheduleResponse, ScheduleSource};

    #[derive(Default)]
    struct Recorder {
        fetched: Mutex<Vec<(NaiveDate, NaiveDate, bool)>>,
        invalidated: Mutex<Vec<(NaiveDate, NaiveDate)>>,
    }

    #[async_trait]
    impl ScheduleSource for Recorder {
        async fn fetch_range(&self, from: NaiveDate, to: NaiveDate, force: bool) -> Result<ScheduleResponse> {
            self.fetched.lock().unwrap().push((from, to, force));
            Ok(ScheduleResponse::default())
        }

        async fn invalidate(&self, from: NaiveDate, to: NaiveDate) -> Result<usize> {
            self.invalidated.lock().unwrap().push((from, to));
            Ok(0)
        }
    }

    fn global(recorder: Arc<Recorder>, enabled: bool) -> Arc<Global> {
        let mut config = Config::default();
        config.refresh.enabled = enabled;
        config.refresh.lookback_days = 3;
        config.refresh.interval_secs = 3600;

        Global::with_schedule(config, Schedule::new(recorder, 100))
    }

    #[tokio::test]
    #[traced_test]
    async fn refresh_recent_rereads_lookback_window() {
        let recorder = Arc::new(Recorder::default());

        refresh_recent(&global(recorder.clone(), true)).await.unwrap();

        let to = today();
        let from = to - Duration::days(3);
        assert_eq!(*recorder.invalidated.lock().unwrap(), vec![(from, to)]);
        assert_eq!(*recorder.fetched.lock().unwrap(), vec![(from, to, true)]);
        assert!(logs_contain("refreshed schedule"));
    }

    #[tokio::test]
    async fn disabled_refresher_never_fetches() {
        let recorder = Arc::new(Recorder::default());

        let res = tokio::time::timeout(StdDuration::from_millis(50), run(global(recorder.clone(), false))).await;

        assert!(res.is_err(), "disabled refresher should park");
        assert!(recorder.fetched.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn enabled_refresher_refreshes_right_away() {
        let recorder = Arc::new(Recorder::default());

        let res = tokio::time::timeout(StdDuration::from_millis(200), run(global(recorder.clone(), true))).await;

        assert!(res.is_err(), "refresher loops until stopped");
        assert_eq!(recorder.fetched.lock().unwrap().len(), 1);
        assert!(recorder.fetched.lock().unwrap()[0].2);
    }
}
