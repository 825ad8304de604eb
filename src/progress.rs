//! Cosmetic progress animation shown while an upload is in flight.
//!
//! The percentage is not derived from transferred bytes: it grows by a random
//! step on every tick and never passes [`PROGRESS_CAP`] until the caller stops
//! the task and sets the final value itself.

use crate::view::ProgressBar;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

pub const PROGRESS_TICK: Duration = Duration::from_millis(500);
pub const PROGRESS_CAP: f32 = 90.0;
pub const PROGRESS_MAX_STEP: f32 = 30.0;

/// A running animation. Stop it with [`SimulatedProgress::stop`]; dropping
/// the guard aborts the task instead.
#[derive(Debug)]
pub struct SimulatedProgress {
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl SimulatedProgress {
    /// Starts ticking `bar` from zero with random steps in `[0, 30)`.
    pub fn start(bar: ProgressBar, tick: Duration) -> Self {
        Self::start_with(bar, tick, || rand::random::<f32>() * PROGRESS_MAX_STEP)
    }

    pub fn start_with<F>(bar: ProgressBar, tick: Duration, mut next_step: F) -> Self
    where
        F: FnMut() -> f32 + Send + 'static,
    {
        let (stop_tx, mut stop_rx) = oneshot::channel();
        bar.set_percent(0.0);

        let task = tokio::spawn(async move {
            // first increment lands one tick after the start
            let mut ticks = interval_at(Instant::now() + tick, tick);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut progress = 0.0_f32;

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticks.tick() => {
                        progress = (progress + next_step()).min(PROGRESS_CAP);
                        bar.set_percent(progress);
                    }
                }
            }
        });

        Self {
            stop: Some(stop_tx),
            task: Some(task),
        }
    }

    /// Signals the task and waits for it to exit.
    pub async fn stop(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                if !e.is_cancelled() {
                    log::warn!("Progress animation ended abnormally: {}", e);
                }
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }
}

impl Drop for SimulatedProgress {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn climbs_but_never_passes_cap() {
        let bar = ProgressBar::default();
        let progress = SimulatedProgress::start_with(bar.clone(), PROGRESS_TICK, || 29.0);

        tokio::time::sleep(Duration::from_millis(1250)).await;
        assert_eq!(bar.percent(), 58.0);

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(bar.percent(), PROGRESS_CAP);

        progress.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn random_steps_stay_in_range() {
        let bar = ProgressBar::default();
        let progress = SimulatedProgress::start(bar.clone(), PROGRESS_TICK);

        // check between ticks
        tokio::time::sleep(PROGRESS_TICK / 2).await;
        let mut last = 0.0;
        for _ in 0..20 {
            tokio::time::sleep(PROGRESS_TICK).await;
            let now = bar.percent();
            assert!(now >= last && now - last < PROGRESS_MAX_STEP);
            assert!(now <= PROGRESS_CAP);
            last = now;
        }

        progress.stop().await;
    }

    #[tokio::test(start_paused = true)]
    async fn stopped_task_leaves_bar_alone() {
        let bar = ProgressBar::default();
        let progress = SimulatedProgress::start_with(bar.clone(), PROGRESS_TICK, || 10.0);
        tokio::time::sleep(Duration::from_millis(600)).await;
        progress.stop().await;

        let frozen = bar.percent();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(bar.percent(), frozen);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_guard_aborts() {
        let bar = ProgressBar::default();
        let progress = SimulatedProgress::start_with(bar.clone(), PROGRESS_TICK, || 10.0);
        assert!(progress.is_running());
        drop(progress);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(bar.percent(), 0.0);
    }
}
