pub mod commands;
pub mod context;
pub mod logging;
pub mod render;
pub mod repl;

pub use context::FolioContext;
pub use repl::readline;
