//! Shared configuration types for folio
//!
//! This crate contains the serializable configuration types shared between
//! the animation engine (folio-core) and the terminal shell (folio).

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Defaults
// ─────────────────────────────────────────────────────────────────────────────

/// Phrases cycled by the hero typewriter when no config file overrides them.
pub const DEFAULT_PHRASES: [&str; 6] = [
    "Welcome to my portfolio 🚀",
    "I build cross-platform apps 📱",
    "Clean code, smooth UX, scalable architecture ✨",
    "Turning coffee into code ☕",
    "Dream coder by night 🌙",
    "Let's build something great together! 🔥",
];

fn default_phrases() -> Vec<String> {
    DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect()
}

fn default_type_delay_ms() -> u64 {
    80
}

fn default_pause_delay_ms() -> u64 {
    2000
}

fn default_delete_delay_ms() -> u64 {
    40
}

fn default_caret_glyph() -> String {
    "|".to_string()
}

fn default_caret_period_ms() -> u64 {
    800
}

fn default_cursor_radius() -> i32 {
    12
}

// ─────────────────────────────────────────────────────────────────────────────
// Typewriter
// ─────────────────────────────────────────────────────────────────────────────

/// Hero typewriter settings.
///
/// Typing should stay slower than deleting, and the pause long enough to read
/// a full phrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypewriterConfig {
    /// Phrases in playback order
    #[serde(default = "default_phrases")]
    pub phrases: Vec<String>,

    /// Delay between revealed characters
    #[serde(default = "default_type_delay_ms")]
    pub type_delay_ms: u64,

    /// How long a completed phrase stays on screen
    #[serde(default = "default_pause_delay_ms")]
    pub pause_delay_ms: u64,

    /// Delay between removed characters
    #[serde(default = "default_delete_delay_ms")]
    pub delete_delay_ms: u64,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            phrases: default_phrases(),
            type_delay_ms: default_type_delay_ms(),
            pause_delay_ms: default_pause_delay_ms(),
            delete_delay_ms: default_delete_delay_ms(),
        }
    }
}

/// Which typewriter delay a setting refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DelayKind {
    Type,
    Pause,
    Delete,
}

impl DelayKind {
    pub fn label(&self) -> &'static str {
        match self {
            DelayKind::Type => "type",
            DelayKind::Pause => "pause",
            DelayKind::Delete => "delete",
        }
    }
}

impl std::fmt::Display for DelayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TypewriterConfig {
    pub fn delay_ms(&self, kind: DelayKind) -> u64 {
        match kind {
            DelayKind::Type => self.type_delay_ms,
            DelayKind::Pause => self.pause_delay_ms,
            DelayKind::Delete => self.delete_delay_ms,
        }
    }

    pub fn set_delay_ms(&mut self, kind: DelayKind, ms: u64) {
        match kind {
            DelayKind::Type => self.type_delay_ms = ms,
            DelayKind::Pause => self.pause_delay_ms = ms,
            DelayKind::Delete => self.delete_delay_ms = ms,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Caret & Cursor
// ─────────────────────────────────────────────────────────────────────────────

/// Blinking caret drawn after the typed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaretConfig {
    #[serde(default = "default_caret_glyph")]
    pub glyph: String,

    /// Full on/off cycle; the caret is visible for the first half
    #[serde(default = "default_caret_period_ms")]
    pub period_ms: u64,
}

impl Default for CaretConfig {
    fn default() -> Self {
        Self {
            glyph: default_caret_glyph(),
            period_ms: default_caret_period_ms(),
        }
    }
}

/// Cosmetic cursor overlay that follows the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorConfig {
    /// Half the overlay's size; the overlay is drawn this far up and left of
    /// the pointer so it stays centered on it
    #[serde(default = "default_cursor_radius")]
    pub radius: i32,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            radius: default_cursor_radius(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub typewriter: TypewriterConfig,
    #[serde(default)]
    pub caret: CaretConfig,
    #[serde(default)]
    pub cursor: CursorConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_hero_timing() {
        let config = AppConfig::default();
        assert_eq!(config.typewriter.phrases.len(), 6);
        assert_eq!(config.typewriter.type_delay_ms, 80);
        assert_eq!(config.typewriter.pause_delay_ms, 2000);
        assert_eq!(config.typewriter.delete_delay_ms, 40);
        assert!(config.typewriter.delete_delay_ms < config.typewriter.type_delay_ms);
        assert_eq!(config.caret.glyph, "|");
        assert_eq!(config.cursor.radius, 12);
    }

    #[test]
    fn set_delay_updates_only_that_kind() {
        let mut config = TypewriterConfig::default();
        config.set_delay_ms(DelayKind::Pause, 500);
        assert_eq!(config.delay_ms(DelayKind::Pause), 500);
        assert_eq!(config.delay_ms(DelayKind::Type), 80);
        assert_eq!(config.delay_ms(DelayKind::Delete), 40);
    }

    #[test]
    fn delay_kind_labels() {
        assert_eq!(DelayKind::Type.to_string(), "type");
        assert_eq!(DelayKind::Delete.label(), "delete");
    }
}
