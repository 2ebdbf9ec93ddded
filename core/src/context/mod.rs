mod background_tasks;
mod config;
mod error;

pub use background_tasks::BackgroundTasks;
pub use config::{
    AppConfig, AppConfigExt, CaretConfig, CursorConfig, DelayKind, TypewriterConfig,
};
pub use error::ConfigError;
