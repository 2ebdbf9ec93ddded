//! Process-wide pointer-move source
//!
//! Listeners are registered with [`PointerEvents::subscribe`] and stay
//! registered exactly as long as the returned [`Subscription`] lives.
//!
//! Dispatch runs listeners outside the registry lock, so a listener may
//! subscribe or drop subscriptions while handling a move. A listener removed
//! mid-dispatch can still see the move being delivered.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Pointer coordinates in terminal cells (or pixels, for a graphical host).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

type Listener = Arc<Mutex<dyn FnMut(Position) + Send>>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

#[derive(Clone, Default)]
pub struct PointerEvents {
    registry: Arc<Mutex<Registry>>,
}

impl PointerEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: FnMut(Position) + Send + 'static,
    {
        let mut registry = lock(&self.registry);
        let id = registry.next_id;
        registry.next_id += 1;
        let listener: Listener = Arc::new(Mutex::new(listener));
        registry.listeners.push((id, listener));
        tracing::trace!(listener = id, "pointer listener added");

        Subscription {
            id,
            registry: Arc::downgrade(&self.registry),
        }
    }

    /// Deliver a pointer move to every live listener, in subscription order.
    pub fn dispatch(&self, position: Position) {
        let listeners: Vec<Listener> = lock(&self.registry)
            .listeners
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for entry in listeners {
            let mut listener = entry.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            (*listener)(position);
        }
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.registry).listeners.len()
    }
}

/// Registration handle. Dropping it removes the listener.
#[must_use = "dropping a subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Mutex<Registry>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        // Source already gone: nothing left to detach from
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        lock(&registry).listeners.retain(|(id, _)| *id != self.id);
        tracing::trace!(listener = self.id, "pointer listener removed");
    }
}

fn lock(registry: &Mutex<Registry>) -> MutexGuard<'_, Registry> {
    registry.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
