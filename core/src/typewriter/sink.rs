use tokio::sync::{mpsc, watch};

/// Receives the typewriter's visible text on every tick.
pub trait DisplaySink: Send + 'static {
    fn display(&mut self, text: &str);
}

/// Keeps only the latest text; renderers redraw on change.
impl DisplaySink for watch::Sender<String> {
    fn display(&mut self, text: &str) {
        self.send_replace(text.to_string());
    }
}

/// Forwards every emission, including repeats.
impl DisplaySink for mpsc::UnboundedSender<String> {
    fn display(&mut self, text: &str) {
        // Receiver gone means the view was torn down
        let _ = self.send(text.to_string());
    }
}
