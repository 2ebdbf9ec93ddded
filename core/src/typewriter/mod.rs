//! Typing-text animation
//!
//! This module provides:
//! - **Machine**: the `Growing | Holding | Shrinking` state machine, steppable
//!   without timers
//! - **Animator**: a tokio task that ticks the machine on its own delays
//! - **Sinks**: where each tick's visible text is delivered

mod animator;
mod error;
mod machine;
mod sink;

#[cfg(test)]
mod animator_tests;

pub use animator::TypewriterAnimator;
pub use error::ConfigurationError;
pub use machine::{Frame, Typewriter, TypewriterMode, TypingDelays};
pub use sink::DisplaySink;
