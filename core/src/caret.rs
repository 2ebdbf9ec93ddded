//! Blinking caret
//!
//! Runs on its own fixed period, independent of the typewriter. Visible for
//! the first half of each period, hidden for the second.

use std::time::Duration;

use folio_types::CaretConfig;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};

pub struct CaretBlinker {
    half_period: Duration,
    visible: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl CaretBlinker {
    /// A zero period is clamped to 2ms so the blink loop cannot spin.
    pub fn new(period: Duration) -> (Self, watch::Receiver<bool>) {
        let half_period = (period / 2).max(Duration::from_millis(1));
        let (visible, rx) = watch::channel(true);
        (
            Self {
                half_period,
                visible,
                task: None,
            },
            rx,
        )
    }

    pub fn from_config(config: &CaretConfig) -> (Self, watch::Receiver<bool>) {
        Self::new(Duration::from_millis(config.period_ms))
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let visible = self.visible.clone();
        let half_period = self.half_period;
        visible.send_replace(true);

        self.task = Some(tokio::spawn(async move {
            let mut ticker = interval(half_period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                visible.send_modify(|on| *on = !*on);
            }
        }));
    }

    /// Stops blinking and leaves the caret visible.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            self.visible.send_replace(true);
        }
    }
}

impl Drop for CaretBlinker {
    fn drop(&mut self) {
        self.stop();
    }
}
