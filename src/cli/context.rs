//! CLI context - bundles settings, flags, and clipboard state.

use std::io::{self, Write};

use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::clipboard::Clipboard;
use crate::entropy::Rand;
use crate::pass::{self, charset, color, strength::StrengthColor};
use crate::settings::GenerationConfig;
use crate::terminal::{RESET, meter};

/// Most passwords one clipboard copy will hold.
pub const CLIPBOARD_MAX: u64 = 1000;

/// Application context for CLI mode.
pub struct Context {
    pub config: GenerationConfig,
    pub flags: CliFlags,
    clipboard: Clipboard,
    rng: Rand,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        Self {
            config: super::config_from(&flags),
            rng: Rand::new(flags.engine()),
            clipboard: Clipboard::new(),
            flags,
        }
    }

    /// Run CLI. Everything here is best-effort and reports through prompts.
    pub fn run(&mut self) {
        quiet::set(self.flags.quiet);

        if let Some((requested, clamped)) = self.flags.clamped_length() {
            tracing::info!(requested, clamped, "length clamped");
            prompts::length_clamped(requested, clamped);
        }

        if self.flags.save {
            self.save_settings();
        }

        tracing::debug!(config = ?self.config, engine = self.rng.engine().name(), "generating");
        self.generate_output();
    }

    fn save_settings(&self) {
        match self.config.save_to_file() {
            Ok(()) => {
                prompts::settings_saved(&GenerationConfig::file_path().display().to_string())
            }
            Err(e) => {
                tracing::warn!("failed to save settings: {e}");
                prompts::settings_error(&e.to_string());
            }
        }
    }

    /// Generate passwords and handle output. A reader that goes away early
    /// (`| head`) just ends the run.
    pub fn generate_output(&mut self) {
        let colored = quiet::stdout_is_tty();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.write_output(&mut out, colored).and_then(|()| out.flush()) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                tracing::debug!("stdout closed, stopping");
            }
            Err(e) => {
                tracing::warn!("failed to write passwords: {e}");
                prompts::error(&format!("Output error: {e}"));
            }
        }
    }

    /// Stream passwords to `out` one at a time through a single reused
    /// buffer, or hand them to the clipboard with `-b`.
    fn write_output<W: Write>(&mut self, out: &mut W, colored: bool) -> io::Result<()> {
        let chars = charset::build(&self.config);
        if chars.is_empty() {
            prompts::no_class_selected(pass::NO_CLASS_SELECTED);
            return Ok(());
        }

        let count = self.flags.number.unwrap_or(1);
        if self.flags.clipboard {
            self.copy_batch(&chars, count);
            return Ok(());
        }

        let tier = self.strength_line(colored);
        let length = self.config.length();
        let mut buf = Vec::with_capacity(length + 1);
        let mut result = Ok(());

        for _ in 0..count {
            pass::generate_from_charset(&chars, length, &mut buf, &mut self.rng);
            result = write_password(out, &buf, colored).and_then(|()| match &tier {
                Some(line) => writeln!(out, "{line}"),
                None => Ok(()),
            });
            buf.zeroize();
            if result.is_err() {
                break;
            }
        }
        result
    }

    fn copy_batch(&mut self, chars: &[u8], requested: u64) {
        let count = requested.min(CLIPBOARD_MAX);
        if count < requested {
            tracing::info!(requested, count, "clipboard batch capped");
            prompts::clipboard_capped(requested, CLIPBOARD_MAX);
        }

        let length = self.config.length();
        let mut joined = String::with_capacity(count as usize * (length + 1));
        let mut buf = Vec::with_capacity(length);
        for i in 0..count {
            if i > 0 {
                joined.push('\n');
            }
            pass::generate_from_charset(chars, length, &mut buf, &mut self.rng);
            joined.extend(buf.iter().map(|&b| b as char));
            buf.zeroize();
        }

        match self.clipboard.copy(&joined) {
            Ok(_) => prompts::clipboard_copied(count),
            Err(e) => {
                tracing::warn!("error copying text: {e}");
                prompts::clipboard_error(&e.to_string());
            }
        }
        joined.zeroize();
    }

    fn strength_line(&self, colored: bool) -> Option<String> {
        if !self.flags.strength {
            return None;
        }
        let tier = pass::estimate_strength(self.config.length());
        Some(if colored {
            let fg = color::fg(tier.color.rgb());
            format!(
                "{} {fg}{:>3}% {}{RESET}",
                meter(tier.percentage, 20, &fg),
                tier.percentage,
                tier.label
            )
        } else {
            format!("{:>3}% {} ({})", tier.percentage, tier.label, tier_name(tier.color))
        })
    }
}

/// Charset bytes are ASCII, so each byte is one `char`.
fn write_password<W: Write>(out: &mut W, buf: &[u8], colored: bool) -> io::Result<()> {
    if !colored {
        out.write_all(buf)?;
        return out.write_all(b"\n");
    }
    let mut plain: String = buf.iter().map(|&b| b as char).collect();
    let mut painted = color::colorize(&plain);
    let result = writeln!(out, "{painted}");
    plain.zeroize();
    painted.zeroize();
    result
}

fn tier_name(color: StrengthColor) -> &'static str {
    match color {
        StrengthColor::Weak => "weak",
        StrengthColor::Medium => "medium",
        StrengthColor::Strong => "strong",
        StrengthColor::Maximum => "maximum",
    }
}
