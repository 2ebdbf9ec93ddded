//! Cosmetic cursor overlay that follows the pointer

use folio_types::CursorConfig;
use tokio::sync::watch;

use super::{PointerEvents, Position, Subscription};

/// Holds the latest pointer position for as long as it is alive.
pub struct CursorTracker {
    latest: watch::Receiver<Position>,
    radius: i32,
    _subscription: Subscription,
}

impl CursorTracker {
    pub fn activate(events: &PointerEvents, radius: i32) -> Self {
        let (tx, latest) = watch::channel(Position::default());
        let subscription = events.subscribe(move |position| {
            tx.send_replace(position);
        });
        tracing::debug!(radius, "cursor tracker activated");

        Self {
            latest,
            radius,
            _subscription: subscription,
        }
    }

    pub fn from_config(events: &PointerEvents, config: &CursorConfig) -> Self {
        Self::activate(events, config.radius)
    }

    /// Latest pointer position; the origin until the first move.
    pub fn position(&self) -> Position {
        *self.latest.borrow()
    }

    /// Top-left corner of the overlay, centered on the pointer.
    pub fn overlay(&self) -> Position {
        self.position().offset(-self.radius, -self.radius)
    }

    /// A receiver that observes every position update.
    pub fn watch(&self) -> watch::Receiver<Position> {
        self.latest.clone()
    }
}
