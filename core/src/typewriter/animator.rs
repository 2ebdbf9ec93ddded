//! Timer-driven typewriter
//!
//! Drives a [`Typewriter`] from a single tokio task: tick, emit, sleep for the
//! delay the new mode asks for, repeat. The state machine and the sink live
//! behind one mutex shared only with that task.
//!
//! # Lifecycle
//!
//! 1. `new()` validates phrases and delays
//! 2. `start()` emits the current text and spawns the tick loop
//! 3. `stop()` (or drop) bumps the generation and aborts the task
//!
//! Each spawned loop captures the generation it was started under and checks
//! it under the same lock that guards emission. Once `stop()` returns nothing
//! reaches the sink again, and a loop left over from before a restart can
//! never tick alongside its replacement.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::sleep;

use super::{ConfigurationError, DisplaySink, Frame, Typewriter, TypingDelays};

struct Shared<S> {
    machine: Typewriter,
    sink: S,
    /// Generation of the loop allowed to tick; `None` while stopped
    active: Option<u64>,
    generation: u64,
}

pub struct TypewriterAnimator<S: DisplaySink> {
    shared: Arc<Mutex<Shared<S>>>,
    task: Option<JoinHandle<()>>,
}

impl<S: DisplaySink> TypewriterAnimator<S> {
    pub fn new(
        phrases: Vec<String>,
        delays: TypingDelays,
        sink: S,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::with_machine(Typewriter::new(phrases, delays)?, sink))
    }

    pub fn with_machine(machine: Typewriter, sink: S) -> Self {
        Self {
            shared: Arc::new(Mutex::new(Shared {
                machine,
                sink,
                active: None,
                generation: 0,
            })),
            task: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn frame(&self) -> Frame {
        lock(&self.shared).machine.frame()
    }

    /// Begin ticking. Must be called from within a tokio runtime.
    /// Does nothing if already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let (generation, first_delay) = {
            let mut guard = lock(&self.shared);
            let shared = &mut *guard;
            shared.generation += 1;
            shared.active = Some(shared.generation);
            shared.sink.display(shared.machine.visible_text());
            (shared.generation, shared.machine.next_delay())
        };

        tracing::debug!(delay_ms = first_delay.as_millis() as u64, "typewriter started");

        let shared = Arc::clone(&self.shared);
        self.task = Some(tokio::spawn(async move {
            let mut delay = first_delay;
            loop {
                sleep(delay).await;
                match step(&shared, generation) {
                    Some(next) => delay = next,
                    None => break,
                }
            }
        }));
    }

    /// Cancel the pending tick. The current text stays frozen.
    pub fn stop(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };
        lock(&self.shared).active = None;
        task.abort();
        tracing::debug!("typewriter stopped");
    }
}

impl<S: DisplaySink> Drop for TypewriterAnimator<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Advance one tick on behalf of the loop started as `generation`.
/// Returns the next delay, or `None` if that loop has been superseded.
fn step<S: DisplaySink>(shared: &Mutex<Shared<S>>, generation: u64) -> Option<Duration> {
    let mut guard = lock(shared);
    let state = &mut *guard;
    if state.active != Some(generation) {
        return None;
    }
    let text = state.machine.tick();
    state.sink.display(text);
    Some(state.machine.next_delay())
}

fn lock<S>(shared: &Mutex<Shared<S>>) -> MutexGuard<'_, Shared<S>> {
    // A panicking sink must not wedge teardown
    shared.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
