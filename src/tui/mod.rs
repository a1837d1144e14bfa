//! Interactive generator view.

mod view;
mod widget;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};

use widget::{Action, Widget};

use crate::clipboard::Clipboard;
use crate::entropy::{Engine, Rand};
use crate::error::Result;
use crate::settings::GenerationConfig;
use crate::terminal::{RawModeGuard, clear};

/// Upper bound on how long the loop sleeps, so the copy acknowledgment
/// resets on time without input.
const TICK: Duration = Duration::from_millis(100);

/// Run TUI interactive mode until the user quits. Returns the options the
/// user left the view with.
pub fn run(config: GenerationConfig, engine: Engine) -> Result<GenerationConfig> {
    let mut widget = Widget::new(config, Rand::new(engine));
    let mut clipboard = Clipboard::new();

    let mut guard = RawModeGuard::new()?;
    tracing::debug!(config = ?widget.config, "interactive view opened");
    view::draw(&widget, Instant::now(), engine);

    loop {
        let timeout = widget.copied.remaining(Instant::now()).map_or(TICK, |left| left.min(TICK));
        let redraw = if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match widget.handle_key(key) {
                        Action::Quit => break,
                        Action::Copy => {
                            let copied = clipboard.copy_or_log(&widget.password);
                            widget.copy_result(copied, Instant::now());
                            true
                        }
                        Action::Redraw => true,
                        Action::Ignore => false,
                    }
                }
                Event::Resize(..) => {
                    clear();
                    true
                }
                _ => false,
            }
        } else {
            widget.copied.tick(Instant::now())
        };

        if redraw {
            view::draw(&widget, Instant::now(), engine);
        }
    }

    guard.disable();
    tracing::debug!(config = ?widget.config, "interactive view closed");
    Ok(widget.config)
}
