use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::caret::CaretBlinker;
use crate::typewriter::TypewriterAnimator;

/// Everything the hero line keeps running in the background.
#[derive(Default)]
pub struct BackgroundTasks {
    pub typewriter: Option<TypewriterAnimator<watch::Sender<String>>>,
    pub caret: Option<CaretBlinker>,
    pub render: Option<JoinHandle<()>>,
}

impl BackgroundTasks {
    pub fn is_playing(&self) -> bool {
        self.typewriter.as_ref().is_some_and(|t| t.is_running())
    }

    pub fn abort_all(&mut self) {
        if let Some(mut typewriter) = self.typewriter.take() {
            typewriter.stop();
        }
        if let Some(mut caret) = self.caret.take() {
            caret.stop();
        }
        if let Some(handle) = self.render.take() {
            handle.abort();
        }
    }
}
