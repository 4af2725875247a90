//! The page sequence played in a terminal.
//!
//! Splash bar, start prompt, then the message carousel driven by typed
//! commands. Timers run on tokio, so tests use paused time.

use std::io::{self, Write};
use std::time::Duration;

use rand::Rng;
use tokio::io::{AsyncBufRead, Lines};
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval, sleep};
use tracing::{debug, info};
use vitrine_core::{
    CarouselDriver, CarouselView, Position, SessionStore, SplashConfig, SplashProgress,
    mark_session_started,
};

use crate::command::{Command, HELP};
use crate::error::Result;

/// Width of the progress bar in cells.
const BAR_WIDTH: usize = 20;

/// Prompt shown once the bar is full.
pub const START_PROMPT: &str = "Pressione Enter para começar";

/// Progress bar line, e.g. `[#########-----------]  45%`.
#[must_use]
pub fn render_bar(progress: &SplashProgress) -> String {
    let filled = ((progress.percent() / 100.0) * BAR_WIDTH as f64).floor() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!(
        "[{}{}] {:>4}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        progress.label()
    )
}

/// Fill the splash bar tick by tick, then reveal the start prompt.
///
/// Jitter comes from `rng`. Returns the progress in the ready phase.
pub async fn run_splash<G: Rng, W: Write>(
    splash: &SplashConfig,
    rng: &mut G,
    out: &mut W,
) -> io::Result<SplashProgress> {
    let mut progress = SplashProgress::new(splash);
    let mut ticker = interval(splash.tick_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;

    loop {
        ticker.tick().await;
        let full = progress.tick(rng.gen_range(0.0..1.0), rng.gen_range(0.0..1.0));
        write!(out, "\r  {}", render_bar(&progress))?;
        out.flush()?;
        if full {
            break;
        }
    }
    writeln!(out)?;

    sleep(splash.finish_delay()).await;
    progress.mark_ready();
    if let Some(banner) = progress.banner_text() {
        writeln!(out, "\n  {banner}")?;
    }
    writeln!(out, "  {START_PROMPT}")?;
    debug!(phase = %progress.phase(), "Splash finished loading");
    Ok(progress)
}

/// Press start: record the session and play the exit delay.
///
/// Returns `false` if the splash was not ready or already left.
pub async fn enter<S: SessionStore, W: Write>(
    progress: &mut SplashProgress,
    store: &mut S,
    splash: &SplashConfig,
    out: &mut W,
) -> io::Result<bool> {
    if !progress.start() {
        return Ok(false);
    }
    writeln!(out, "  {}", progress.button_label(START_PROMPT))?;
    mark_session_started(store);
    sleep(splash.exit_delay()).await;
    info!("Entered the page sequence");
    Ok(true)
}

/// Run the carousel until `q` or end of input.
///
/// The first message appears after `intro_delay`. Every command line is
/// applied as soon as it is read; a navigation still settling when input
/// ends is awaited before returning the final position.
pub async fn run_carousel<V, R, W>(
    driver: &CarouselDriver<V>,
    intro_delay: Duration,
    input: &mut Lines<R>,
    out: &mut W,
) -> Result<Position>
where
    V: CarouselView + Send + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    sleep(intro_delay).await;
    driver.show_initial().await;
    writeln!(out, "  {HELP}")?;

    let mut pending: Option<JoinHandle<bool>> = None;
    while let Some(line) = input.next_line().await? {
        let scheduled = match Command::parse(&line) {
            Some(Command::Next) => driver.next().await,
            Some(Command::Previous) => driver.previous().await,
            Some(Command::Jump(number)) => match Command::jump_index(number) {
                Some(index) => driver.go_to(index).await,
                None => None,
            },
            Some(Command::Quit) => break,
            None => {
                writeln!(out, "  {HELP}")?;
                None
            }
        };
        if scheduled.is_some() {
            pending = scheduled;
        }
    }

    if let Some(handle) = pending {
        // Earlier handles share the same delay and finish first.
        if let Err(e) = handle.await {
            debug!("Settle task ended early: {}", e);
        }
    }

    let position = driver.position().await;
    info!(index = position.index, len = position.len, "Carousel closed");
    Ok(position)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use tokio::io::AsyncBufReadExt;
    use vitrine_core::{
        MemorySessionStore, MessageList, READY_TEXT, SplashPhase, TimingConfig, VitrineConfig,
        session_started,
    };

    use crate::terminal::TerminalView;

    fn driver(messages: &[&str]) -> CarouselDriver<TerminalView<Vec<u8>>> {
        let messages = MessageList::new(messages.iter().copied()).expect("non-empty");
        CarouselDriver::with_timings(
            messages,
            TerminalView::new(Vec::new()),
            &TimingConfig::default(),
        )
    }

    async fn printed(driver: &CarouselDriver<TerminalView<Vec<u8>>>) -> String {
        driver
            .with_view(|view| String::from_utf8_lossy(view.writer()).into_owned())
            .await
    }

    #[test]
    fn test_render_bar_bounds() {
        let config = SplashConfig::default();
        let mut progress = SplashProgress::new(&config);
        assert_eq!(render_bar(&progress), format!("[{}]   0%", "-".repeat(20)));

        while !progress.tick(0.0, 0.0) {}
        assert_eq!(render_bar(&progress), format!("[{}] 100%", "#".repeat(20)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_splash_fills_and_waits_for_start() {
        let config = SplashConfig::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut out = Vec::new();

        let progress = run_splash(&config, &mut rng, &mut out)
            .await
            .expect("write to memory");

        assert_eq!(progress.phase(), SplashPhase::Ready);
        assert!(progress.is_complete());
        let text = String::from_utf8(out).expect("utf-8");
        assert!(text.contains("100%"));
        assert!(text.contains(READY_TEXT));
        assert!(text.contains(START_PROMPT));
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_marks_session_once() {
        let config = SplashConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut out = Vec::new();
        let mut store = MemorySessionStore::new();

        let mut progress = run_splash(&config, &mut rng, &mut out)
            .await
            .expect("write to memory");
        assert!(
            enter(&mut progress, &mut store, &config, &mut out)
                .await
                .expect("write to memory")
        );
        assert!(session_started(&store));
        assert_eq!(progress.phase(), SplashPhase::Entering);

        assert!(
            !enter(&mut progress, &mut store, &config, &mut out)
                .await
                .expect("write to memory")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_carousel_follows_commands() {
        let driver = driver(&["A", "B", "C"]);
        let mut input = "n\nn\n".as_bytes().lines();
        let mut out = Vec::new();

        let position = run_carousel(&driver, Duration::ZERO, &mut input, &mut out)
            .await
            .expect("run");

        assert_eq!(position, Position { index: 2, len: 3 });
        let shown = printed(&driver).await;
        assert!(shown.contains("“C”"));
        assert!(shown.ends_with("[‹] ○ ○ ● [ ]  3/3\n"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_carousel_ignores_bad_jumps() {
        let driver = driver(&["A", "B", "C"]);
        let mut input = "0\n9\nhello\nq\nn\n".as_bytes().lines();
        let mut out = Vec::new();

        let position = run_carousel(&driver, Duration::ZERO, &mut input, &mut out)
            .await
            .expect("run");

        // `q` stops before the trailing `n`.
        assert_eq!(position, Position { index: 0, len: 3 });
        let prompt = String::from_utf8(out).expect("utf-8");
        assert_eq!(prompt.matches(HELP).count(), 2);
        assert!(!printed(&driver).await.contains("  ~"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_carousel_from_config_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{ "messages": ["Um", "Dois"], "timings": { "settle_delay_ms": 50 } }"#,
        )
        .expect("write config");

        let config = VitrineConfig::load_from(&path).expect("valid config");
        let driver = CarouselDriver::with_timings(
            config.message_list().expect("non-empty"),
            TerminalView::new(Vec::new()),
            &config.timings,
        );
        assert_eq!(driver.settle_delay(), Duration::from_millis(50));

        let mut input = "n\n".as_bytes().lines();
        let mut out = Vec::new();
        let position = run_carousel(&driver, config.timings.intro_delay(), &mut input, &mut out)
            .await
            .expect("run");

        assert_eq!(position, Position { index: 1, len: 2 });
        assert!(printed(&driver).await.contains("“Dois”"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_carousel_jump_then_previous() {
        let driver = driver(&["A", "B", "C", "D"]);
        let mut input = "4\np\n".as_bytes().lines();
        let mut out = Vec::new();

        let position = run_carousel(&driver, Duration::ZERO, &mut input, &mut out)
            .await
            .expect("run");

        assert_eq!(position, Position { index: 2, len: 4 });
        let shown = printed(&driver).await;
        // Both commands land within one settle delay; only "C" is rendered.
        assert!(!shown.contains("“D”"));
        assert!(shown.contains("“C”"));
    }
}
