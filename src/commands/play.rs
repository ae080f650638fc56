//! `scriptcut play` - interactive playback against a simulated media clock.
//!
//! Space toggles play/pause, left/right arrows seek in display time, `0`
//! rewinds, `q` (or Esc/Ctrl-C) quits. One status line is redrawn per tick;
//! excluded spans never show up in it.

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use scriptcut::player::{ClockMedia, FrameTicker, PlaybackDriver};
use scriptcut::timecode::format_timecode;
use scriptcut::timeline::SegmentMap;
use scriptcut::transcript::Transcript;
use scriptcut::Config;

const BAR_WIDTH: usize = 40;

pub fn handle_play(path: &Path, duration: Option<f64>, config: &Config) -> Result<()> {
    let transcript = Transcript::load(path)?;
    let map = SegmentMap::derive(&transcript);

    if map.is_empty() {
        println!("Nothing to play: every span is removed.");
        return Ok(());
    }

    let media_duration =
        duration.unwrap_or_else(|| transcript.items().last().map(|i| i.end).unwrap_or(0.0));
    let mut driver = PlaybackDriver::new(ClockMedia::with_duration(media_duration), map);
    driver.play();

    let _guard = RawModeGuard::enable()?;
    let result = play_loop(&mut driver, config);
    drop(_guard);

    println!();
    result
}

fn play_loop(driver: &mut PlaybackDriver<ClockMedia>, config: &Config) -> Result<()> {
    let step = config.player.seek_step_secs;
    // The ticker lives exactly as long as this loop; leaving the loop is
    // the cancellation.
    let mut ticker = FrameTicker::new(Duration::from_millis(config.player.tick_ms.max(1)));

    render_status(driver)?;
    loop {
        if event::poll(ticker.remaining())? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char(' ') => driver.toggle(),
                    KeyCode::Left => driver.seek(driver.display_time() - step),
                    KeyCode::Right => driver.seek(driver.display_time() + step),
                    KeyCode::Char('0') | KeyCode::Home => driver.seek(0.0),
                    _ => {}
                }
                render_status(driver)?;
            }
        }

        if ticker.due() {
            driver.tick();
            render_status(driver)?;
            ticker.advance();
        }
    }

    Ok(())
}

fn render_status(driver: &PlaybackDriver<ClockMedia>) -> Result<()> {
    let total = driver.map().total_display_duration();
    let display = driver.display_time();
    let filled = if total > 0.0 {
        ((display / total) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    }
    .min(BAR_WIDTH);

    let state = if driver.is_playing() {
        "playing"
    } else {
        "paused "
    };

    let mut stdout = io::stdout();
    write!(
        stdout,
        "\r[{}{}] {} / {} ({})",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        format_timecode(display),
        format_timecode(total),
        state
    )?;
    stdout.flush()?;
    Ok(())
}

/// Raw-mode handle that restores the terminal on drop, including on the
/// error paths out of the play loop.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}
