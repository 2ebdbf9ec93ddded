//! Pointer tracking
//!
//! - **Events**: the pointer-move source and scoped subscriptions
//! - **Tracker**: the cursor overlay position, held only while subscribed

mod events;
mod tracker;

pub use events::{PointerEvents, Position, Subscription};
pub use tracker::CursorTracker;
