use folio_core::{AppConfig, AppConfigExt, BackgroundTasks, CursorTracker, PointerEvents};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Holds all shared state for the shell.
/// This is a lightweight container - logic lives in the individual state types.
#[derive(Clone)]
pub struct FolioContext {
    pub config: Arc<RwLock<AppConfig>>,
    pub tasks: Arc<Mutex<BackgroundTasks>>,
    /// Pointer source for the page; the shell feeds it from `move`
    pub pointer: PointerEvents,
    /// Cursor overlay, present while the page is mounted
    tracker: Arc<Mutex<Option<CursorTracker>>>,
    /// Write config edits back to disk
    persist: bool,
}

impl FolioContext {
    pub fn new() -> Self {
        Self {
            persist: true,
            ..Self::with_config(AppConfig::load())
        }
    }

    pub fn with_config(config: AppConfig) -> Self {
        let pointer = PointerEvents::new();
        let tracker = CursorTracker::from_config(&pointer, &config.cursor);
        Self {
            config: Arc::new(RwLock::new(config)),
            tasks: Arc::new(Mutex::new(BackgroundTasks::default())),
            pointer,
            tracker: Arc::new(Mutex::new(Some(tracker))),
            persist: false,
        }
    }

    pub fn persists_config(&self) -> bool {
        self.persist
    }

    pub fn tracker(&self) -> &Mutex<Option<CursorTracker>> {
        &self.tracker
    }

    /// Tear the page down: stop every background task and drop the tracker.
    pub async fn unmount(&self) {
        self.tasks.lock().await.abort_all();
        self.tracker.lock().await.take();
        tracing::debug!("page unmounted");
    }
}

impl Default for FolioContext {
    fn default() -> Self {
        Self::new()
    }
}
