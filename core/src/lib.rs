pub mod caret;
pub mod content;
pub mod context;
pub mod pointer;
pub mod typewriter;

// Re-exports for convenience
pub use caret::CaretBlinker;
pub use context::{AppConfig, AppConfigExt, BackgroundTasks, ConfigError};
pub use pointer::{CursorTracker, PointerEvents, Position, Subscription};
pub use typewriter::{
    ConfigurationError, DisplaySink, Frame, Typewriter, TypewriterAnimator, TypewriterMode,
    TypingDelays,
};
