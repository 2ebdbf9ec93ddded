//! Typewriter state machine
//!
//! Pure state with no timers attached. Each call to [`Typewriter::tick`]
//! performs exactly one step and [`Typewriter::next_delay`] says how long the
//! driver should wait before the following step.
//!
//! ```text
//!   Growing ──(phrase complete)──▶ Holding ──▶ Shrinking
//!      ▲                                          │
//!      └──────(text empty, next phrase)───────────┘
//! ```

use std::time::Duration;

use folio_types::{DelayKind, TypewriterConfig};

use super::ConfigurationError;

/// What the visible text is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypewriterMode {
    #[default]
    Growing,
    Holding,
    Shrinking,
}

/// Delays between ticks, one per mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingDelays {
    pub type_delay: Duration,
    pub pause_delay: Duration,
    pub delete_delay: Duration,
}

impl Default for TypingDelays {
    fn default() -> Self {
        Self::from(&TypewriterConfig::default())
    }
}

impl From<&TypewriterConfig> for TypingDelays {
    fn from(config: &TypewriterConfig) -> Self {
        Self {
            type_delay: Duration::from_millis(config.type_delay_ms),
            pause_delay: Duration::from_millis(config.pause_delay_ms),
            delete_delay: Duration::from_millis(config.delete_delay_ms),
        }
    }
}

impl TypingDelays {
    fn validate(&self) -> Result<(), ConfigurationError> {
        for (which, delay) in [
            (DelayKind::Type, self.type_delay),
            (DelayKind::Pause, self.pause_delay),
            (DelayKind::Delete, self.delete_delay),
        ] {
            if delay.is_zero() {
                return Err(ConfigurationError::ZeroDelay { which });
            }
        }
        Ok(())
    }
}

/// Snapshot of the typewriter, as seen by the display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub phrase_index: usize,
    pub mode: TypewriterMode,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    delays: TypingDelays,
    active: usize,
    /// Length of the visible prefix, in chars
    visible: usize,
    mode: TypewriterMode,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, delays: TypingDelays) -> Result<Self, ConfigurationError> {
        if phrases.is_empty() {
            return Err(ConfigurationError::NoPhrases);
        }
        delays.validate()?;

        Ok(Self {
            phrases,
            delays,
            active: 0,
            visible: 0,
            mode: TypewriterMode::Growing,
        })
    }

    pub fn from_config(config: &TypewriterConfig) -> Result<Self, ConfigurationError> {
        Self::new(config.phrases.clone(), TypingDelays::from(config))
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn phrase_index(&self) -> usize {
        self.active
    }

    pub fn mode(&self) -> TypewriterMode {
        self.mode
    }

    pub fn active_phrase(&self) -> &str {
        &self.phrases[self.active]
    }

    /// Visible prefix of the active phrase.
    pub fn visible_text(&self) -> &str {
        let phrase = self.active_phrase();
        let end = phrase
            .char_indices()
            .nth(self.visible)
            .map(|(idx, _)| idx)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    pub fn frame(&self) -> Frame {
        Frame {
            text: self.visible_text().to_string(),
            phrase_index: self.active,
            mode: self.mode,
        }
    }

    /// Wait before the next tick. Depends only on the current mode.
    pub fn next_delay(&self) -> Duration {
        match self.mode {
            TypewriterMode::Growing => self.delays.type_delay,
            TypewriterMode::Holding => self.delays.pause_delay,
            TypewriterMode::Shrinking => self.delays.delete_delay,
        }
    }

    /// Advance by one step and return the text to display.
    pub fn tick(&mut self) -> &str {
        match self.mode {
            TypewriterMode::Growing => {
                if self.visible < self.active_phrase().chars().count() {
                    self.visible += 1;
                } else {
                    self.mode = TypewriterMode::Holding;
                }
            }
            TypewriterMode::Holding => {
                self.mode = TypewriterMode::Shrinking;
            }
            TypewriterMode::Shrinking => {
                self.visible = self.visible.saturating_sub(1);
                if self.visible == 0 {
                    self.advance_phrase();
                }
            }
        }
        self.visible_text()
    }

    fn advance_phrase(&mut self) {
        self.active = (self.active + 1) % self.phrases.len();
        self.visible = 0;
        self.mode = TypewriterMode::Growing;
        tracing::trace!(phrase_index = self.active, "typewriter advanced phrase");
    }
}
