//! Best-effort clipboard copy, plus the transient "copied" acknowledgment.

use std::time::{Duration, Instant};

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::pass::is_placeholder;

/// How long the "Copied!" acknowledgment stays up.
pub const ACK_DURATION: Duration = Duration::from_secs(2);

/// Lazily opened system clipboard.
#[derive(Default)]
pub struct Clipboard {
    ctx: Option<ClipboardContext>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `text` on the clipboard. Empty text and the placeholder are
    /// skipped and report `Ok(false)`.
    pub fn copy(&mut self, text: &str) -> Result<bool> {
        if text.is_empty() || is_placeholder(text) {
            return Ok(false);
        }

        if self.ctx.is_none() {
            self.ctx = Some(ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?);
        }
        let Some(ctx) = self.ctx.as_mut() else {
            return Err(Error::Clipboard("clipboard unavailable".into()));
        };

        ctx.set_contents(text.to_owned())
            .map_err(|e| Error::Clipboard(e.to_string()))?;

        // Some providers keep a copy around after a read; wipe ours.
        if let Ok(mut retrieved) = ctx.get_contents() {
            retrieved.zeroize();
        }
        tracing::debug!(len = text.len(), "password copied to clipboard");
        Ok(true)
    }

    /// Copy and log any failure instead of returning it.
    pub fn copy_or_log(&mut self, text: &str) -> bool {
        match self.copy(text) {
            Ok(copied) => copied,
            Err(e) => {
                tracing::warn!("error copying text: {e}");
                false
            }
        }
    }
}

/// Transient "copied" flag with a fixed deadline. A newer event simply
/// overwrites it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyAck {
    until: Option<Instant>,
}

impl CopyAck {
    pub fn mark(&mut self, now: Instant) {
        self.until = Some(now + ACK_DURATION);
    }

    pub fn clear(&mut self) {
        self.until = None;
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.until.is_some_and(|until| now < until)
    }

    /// Drop an expired deadline. Returns true when the flag just went off.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.until.is_some() && !self.is_active(now) {
            self.until = None;
            return true;
        }
        false
    }

    /// Time left before the flag resets, if armed.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.until.map(|until| until.saturating_duration_since(now))
    }
}
