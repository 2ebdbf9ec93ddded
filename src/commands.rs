use folio_core::context::DelayKind;
use folio_core::{AppConfigExt, CaretBlinker, Position, Typewriter, TypewriterAnimator};
use std::io::Write;
use time::OffsetDateTime;
use tokio::sync::watch;

use crate::context::FolioContext;
use crate::render::{self, Section};

pub async fn play(ctx: &FolioContext) -> Result<(), String> {
    let mut guard = ctx.tasks.lock().await;
    let tasks = &mut *guard;
    if tasks.is_playing() {
        println!("already playing");
        return Ok(());
    }

    // Resume a stopped animation where it froze
    if let (Some(typewriter), Some(caret)) = (tasks.typewriter.as_mut(), tasks.caret.as_mut()) {
        typewriter.start();
        caret.start();
        return Ok(());
    }

    let config = ctx.config.read().await.clone();
    let machine = Typewriter::from_config(&config.typewriter).map_err(|e| e.to_string())?;

    let (text_tx, text_rx) = watch::channel(String::new());
    let mut typewriter = TypewriterAnimator::with_machine(machine, text_tx);
    let (mut caret, caret_rx) = CaretBlinker::from_config(&config.caret);

    typewriter.start();
    caret.start();

    let glyph = config.caret.glyph;
    tasks.render = Some(tokio::spawn(async move {
        draw_hero_line(text_rx, caret_rx, glyph, std::io::stdout()).await;
    }));
    tasks.typewriter = Some(typewriter);
    tasks.caret = Some(caret);

    tracing::info!(
        phrases = config.typewriter.phrases.len(),
        "hero animation started"
    );
    Ok(())
}

/// Redraw the hero line whenever the text or the caret changes.
/// Returns once either source is dropped.
pub async fn draw_hero_line<W: Write>(
    mut text: watch::Receiver<String>,
    mut caret: watch::Receiver<bool>,
    glyph: String,
    mut out: W,
) {
    loop {
        let line = render::hero_line(&text.borrow_and_update(), &glyph, *caret.borrow_and_update());
        if write!(out, "\r\x1b[2K{line}").and_then(|_| out.flush()).is_err() {
            break;
        }

        let changed = tokio::select! {
            r = text.changed() => r,
            r = caret.changed() => r,
        };
        if changed.is_err() {
            break;
        }
    }
}

pub async fn stop(ctx: &FolioContext) {
    let mut tasks = ctx.tasks.lock().await;
    if !tasks.is_playing() {
        println!("not playing");
        return;
    }
    if let Some(typewriter) = tasks.typewriter.as_mut() {
        typewriter.stop();
    }
    if let Some(caret) = tasks.caret.as_mut() {
        caret.stop();
    }
    println!();
    tracing::info!("hero animation stopped");
}

/// Drop the current animation so the next `play` picks up config changes.
pub async fn reset(ctx: &FolioContext) {
    ctx.tasks.lock().await.abort_all();
    println!("animation reset");
}

pub async fn status(ctx: &FolioContext) {
    let tasks = ctx.tasks.lock().await;
    let Some(typewriter) = tasks.typewriter.as_ref() else {
        println!("animation not started");
        return;
    };

    let frame = typewriter.frame();
    let state = if typewriter.is_running() { "playing" } else { "stopped" };
    println!("state:  {state}");
    println!("phrase: {}", frame.phrase_index);
    println!("mode:   {:?}", frame.mode);
    println!("text:   {:?}", frame.text);
}

pub fn show_section(name: &str) -> Result<(), String> {
    let section = Section::lookup(name)
        .ok_or_else(|| format!("unknown section '{name}', try `sections`\n"))?;
    println!("{}", section.render(current_year()));
    Ok(())
}

pub fn show_page() {
    println!("{}", render::render_page(current_year()));
}

pub fn list_sections() {
    for section in Section::ALL {
        println!("{}", section.name());
    }
}

pub fn move_pointer(ctx: &FolioContext, x: i32, y: i32) {
    ctx.pointer.dispatch(Position::new(x, y));
}

pub async fn show_cursor(ctx: &FolioContext) {
    match ctx.tracker().lock().await.as_ref() {
        Some(tracker) => {
            println!("pointer: {}", tracker.position());
            println!("overlay: {}", tracker.overlay());
        }
        None => println!("cursor tracker inactive"),
    }
}

pub async fn show_config(ctx: &FolioContext) -> Result<(), String> {
    let rendered = ctx.config.read().await.to_toml().map_err(|e| e.to_string())?;
    println!("{rendered}");
    Ok(())
}

pub async fn set_delay(ctx: &FolioContext, kind: DelayKind, ms: u64) -> Result<(), String> {
    let mut config = ctx.config.write().await;
    config.set_delay(kind, ms).map_err(|e| e.to_string())?;
    if ctx.persists_config() {
        config.save().map_err(|e| e.to_string())?;
    }
    println!("{kind} delay set to {ms}ms (run `reset` then `play` to apply)");
    Ok(())
}

pub async fn exit(ctx: &FolioContext) -> Result<(), String> {
    ctx.unmount().await;
    write!(std::io::stdout(), "quitting...").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())
}

fn current_year() -> i32 {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .year()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{AppConfig, TypewriterMode};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::time::sleep;

    fn test_context(phrases: &[&str]) -> FolioContext {
        let mut config = AppConfig::default();
        config.typewriter.phrases = phrases.iter().map(|p| p.to_string()).collect();
        FolioContext::with_config(config)
    }

    #[derive(Clone, Default)]
    struct Screen(Arc<Mutex<Vec<u8>>>);

    impl Write for Screen {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl Screen {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[tokio::test(start_paused = true)]
    async fn play_stop_and_resume() {
        let ctx = test_context(&["Hi"]);
        play(&ctx).await.unwrap();
        assert!(ctx.tasks.lock().await.is_playing());

        sleep(Duration::from_millis(170)).await;
        stop(&ctx).await;

        {
            let tasks = ctx.tasks.lock().await;
            assert!(!tasks.is_playing());
            let frame = tasks.typewriter.as_ref().unwrap().frame();
            assert_eq!(frame.text, "Hi");
            assert_eq!(frame.mode, TypewriterMode::Growing);
        }

        play(&ctx).await.unwrap();
        sleep(Duration::from_millis(90)).await;
        let tasks = ctx.tasks.lock().await;
        assert!(tasks.is_playing());
        assert_eq!(
            tasks.typewriter.as_ref().unwrap().frame().mode,
            TypewriterMode::Holding
        );
    }

    #[tokio::test(start_paused = true)]
    async fn play_with_no_phrases_reports_error() {
        let ctx = test_context(&[]);
        let err = play(&ctx).await.unwrap_err();
        assert!(err.contains("at least one phrase"));
        assert!(!ctx.tasks.lock().await.is_playing());
    }

    #[tokio::test(start_paused = true)]
    async fn hero_line_redraws_on_text_and_caret() {
        let (text_tx, text_rx) = watch::channel(String::new());
        let (caret_tx, caret_rx) = watch::channel(true);
        let screen = Screen::default();
        let drawer = tokio::spawn(draw_hero_line(
            text_rx,
            caret_rx,
            "|".to_string(),
            screen.clone(),
        ));

        sleep(Duration::from_millis(1)).await;
        text_tx.send_replace("Hi".to_string());
        sleep(Duration::from_millis(1)).await;
        caret_tx.send_replace(false);
        sleep(Duration::from_millis(1)).await;

        drop(text_tx);
        drawer.await.unwrap();

        let drawn = screen.contents();
        assert_eq!(drawn, "\r\x1b[2K> |\r\x1b[2K> Hi|\r\x1b[2K> Hi ");
    }

    #[tokio::test]
    async fn set_delay_validates() {
        let ctx = test_context(&["Hi"]);
        assert!(set_delay(&ctx, DelayKind::Pause, 0).await.is_err());
        set_delay(&ctx, DelayKind::Pause, 750).await.unwrap();
        assert_eq!(ctx.config.read().await.typewriter.pause_delay_ms, 750);
    }

    #[tokio::test]
    async fn pointer_moves_reach_tracker_until_exit() {
        let ctx = test_context(&["Hi"]);
        move_pointer(&ctx, 40, 30);
        {
            let tracker = ctx.tracker().lock().await;
            assert_eq!(tracker.as_ref().unwrap().overlay(), Position::new(28, 18));
        }
        assert_eq!(ctx.pointer.listener_count(), 1);

        exit(&ctx).await.unwrap();
        assert_eq!(ctx.pointer.listener_count(), 0);
        assert!(ctx.tracker().lock().await.is_none());
    }

    #[test]
    fn unknown_section_is_an_error() {
        assert!(show_section("blog").is_err());
        assert!(show_section("quote").is_ok());
    }
}
