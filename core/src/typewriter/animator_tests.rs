//! Tests for the timer-driven animator on tokio's paused clock

use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::time::{Instant, sleep};

use super::{ConfigurationError, TypewriterAnimator, TypewriterMode, TypingDelays};

fn delays() -> TypingDelays {
    TypingDelays {
        type_delay: Duration::from_millis(80),
        pause_delay: Duration::from_millis(2000),
        delete_delay: Duration::from_millis(40),
    }
}

fn phrases(list: &[&str]) -> Vec<String> {
    list.iter().map(|p| p.to_string()).collect()
}

type Recorded = (
    TypewriterAnimator<mpsc::UnboundedSender<String>>,
    mpsc::UnboundedReceiver<String>,
);

fn recorded(list: &[&str]) -> Recorded {
    let (tx, rx) = mpsc::unbounded_channel();
    let animator = TypewriterAnimator::new(phrases(list), delays(), tx).expect("valid animator");
    (animator, rx)
}

#[test]
fn empty_phrases_fail_before_anything_runs() {
    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let result = TypewriterAnimator::new(Vec::new(), delays(), tx);
    assert!(matches!(result, Err(ConfigurationError::NoPhrases)));
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn emits_expected_sequence_with_timing() {
    let (mut animator, mut rx) = recorded(&["Hi", "Yo"]);
    let started = Instant::now();
    animator.start();

    let mut seen = Vec::new();
    let mut at = Vec::new();
    for _ in 0..14 {
        seen.push(rx.recv().await.expect("emission"));
        at.push(started.elapsed().as_millis() as u64);
    }

    assert_eq!(
        seen,
        vec![
            "", "H", "Hi", "Hi", "Hi", "H", "", "Y", "Yo", "Yo", "Yo", "Y", "", "H"
        ]
    );
    // type, type, type, pause, delete, delete, type ...
    assert_eq!(
        at,
        vec![
            0, 80, 160, 240, 2240, 2280, 2320, 2400, 2480, 2560, 4560, 4600, 4640, 4720
        ]
    );
    animator.stop();
}

#[tokio::test(start_paused = true)]
async fn start_is_idempotent() {
    let (mut animator, mut rx) = recorded(&["abc"]);
    animator.start();
    animator.start();
    assert!(animator.is_running());

    assert_eq!(rx.recv().await.as_deref(), Some(""));
    assert_eq!(rx.recv().await.as_deref(), Some("a"));
    assert_eq!(rx.recv().await.as_deref(), Some("ab"));
    // A second loop would have produced a duplicate "" or "a"
    assert!(rx.try_recv().is_err());
    animator.stop();
}

#[tokio::test(start_paused = true)]
async fn stop_freezes_text() {
    let (mut animator, mut rx) = recorded(&["Hello"]);
    animator.start();
    rx.recv().await;
    rx.recv().await;
    assert_eq!(rx.recv().await.as_deref(), Some("He"));

    animator.stop();
    assert!(!animator.is_running());
    let frozen = animator.frame();

    sleep(Duration::from_secs(60)).await;

    assert!(rx.try_recv().is_err());
    assert_eq!(animator.frame(), frozen);
    assert_eq!(frozen.text, "He");
    assert_eq!(frozen.mode, TypewriterMode::Growing);
}

#[tokio::test(start_paused = true)]
async fn stop_when_idle_is_noop() {
    let (mut animator, mut rx) = recorded(&["x"]);
    animator.stop();
    assert!(!animator.is_running());
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn restart_resumes_from_frozen_state() {
    let (mut animator, mut rx) = recorded(&["abc"]);
    animator.start();
    rx.recv().await; // ""
    rx.recv().await; // "a"
    animator.stop();

    animator.start();
    assert_eq!(rx.recv().await.as_deref(), Some("a"));
    assert_eq!(rx.recv().await.as_deref(), Some("ab"));
    animator.stop();
}

#[tokio::test(start_paused = true)]
async fn drop_cancels_ticks() {
    let (tx, mut rx) = watch::channel(String::new());
    {
        let mut animator =
            TypewriterAnimator::new(phrases(&["Hello"]), delays(), tx).expect("valid animator");
        animator.start();
        sleep(Duration::from_millis(170)).await;
        assert_eq!(*rx.borrow_and_update(), "He");
    }

    sleep(Duration::from_secs(10)).await;
    // Sender dropped with the animator and nothing new was published
    assert!(!rx.has_changed().unwrap_or(false));
    assert_eq!(*rx.borrow(), "He");
}

#[tokio::test(start_paused = true)]
async fn watch_sink_tracks_latest_text() {
    let (tx, rx) = watch::channel(String::from("stale"));
    let mut animator =
        TypewriterAnimator::new(phrases(&["Yo"]), delays(), tx).expect("valid animator");
    animator.start();
    assert_eq!(*rx.borrow(), "");

    sleep(Duration::from_millis(250)).await;
    assert_eq!(*rx.borrow(), "Yo");
    assert_eq!(animator.frame().mode, TypewriterMode::Holding);
    animator.stop();
}

#[tokio::test(start_paused = true)]
async fn cycles_through_phrases_in_order() {
    let list = ["one", "two", "three"];
    let (mut animator, mut rx) = recorded(&list);
    animator.start();

    let mut completed = Vec::new();
    let mut previous = String::new();
    while completed.len() < list.len() * 3 {
        let text = rx.recv().await.expect("emission");
        // A full phrase is emitted three times in a row: reveal, hold, release
        if list.contains(&text.as_str()) && text == previous && completed.last() != Some(&text) {
            completed.push(text.clone());
        }
        previous = text;
    }
    animator.stop();

    for (i, text) in completed.iter().enumerate() {
        assert_eq!(text, list[i % list.len()]);
    }
}
