//! Interactive generator state and key handling.
//!
//! Nothing here touches the terminal, so every transition is testable.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use zeroize::Zeroize;

use crate::clipboard::CopyAck;
use crate::entropy::RandomSource;
use crate::pass::{self, StrengthTier};
use crate::settings::{GenerationConfig, MAX_LENGTH, MIN_LENGTH};

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Redraw,
    Copy,
    Quit,
    Ignore,
}

pub struct Widget<R: RandomSource> {
    pub config: GenerationConfig,
    pub password: String,
    pub tier: StrengthTier,
    pub copied: CopyAck,
    pub show_help: bool,
    rng: R,
}

impl<R: RandomSource> Widget<R> {
    pub fn new(config: GenerationConfig, rng: R) -> Self {
        let mut widget = Self {
            config,
            password: String::new(),
            tier: pass::estimate_strength(config.length()),
            copied: CopyAck::default(),
            show_help: false,
            rng,
        };
        widget.regenerate();
        widget
    }

    /// Replace the password with a fresh draw. Any pending "copied" flag
    /// belongs to the old password and goes away with it.
    pub fn regenerate(&mut self) {
        self.password.zeroize();
        self.password = pass::generate(&self.config, &mut self.rng);
        self.copied.clear();
    }

    pub fn set_length(&mut self, length: usize) {
        self.resize(|c| c.set_length(length));
    }

    /// Only a length that actually moved triggers a new draw.
    fn resize(&mut self, change: impl FnOnce(&mut GenerationConfig)) {
        let before = self.config.length();
        change(&mut self.config);
        if self.config.length() != before {
            self.tier = pass::estimate_strength(self.config.length());
            self.regenerate();
        }
    }

    fn update(&mut self, change: impl FnOnce(&mut GenerationConfig)) {
        change(&mut self.config);
        self.regenerate();
    }

    /// True when the copy button has something real to copy.
    pub fn can_copy(&self) -> bool {
        !self.password.is_empty() && !pass::is_placeholder(&self.password)
    }

    /// Record how a copy attempt went. Only a real copy shows "Copied!".
    pub fn copy_result(&mut self, copied: bool, now: Instant) {
        if copied {
            self.copied.mark(now);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
                _ => Action::Ignore,
            };
        }

        if self.show_help {
            self.show_help = false;
            return match key.code {
                KeyCode::Char('q') => Action::Quit,
                _ => Action::Redraw,
            };
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => return Action::Quit,
            KeyCode::Left | KeyCode::Char('-') => self.resize(GenerationConfig::shorten),
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => {
                self.resize(GenerationConfig::lengthen)
            }
            KeyCode::PageDown => self.set_length(self.config.length().saturating_sub(5)),
            KeyCode::PageUp => self.set_length(self.config.length() + 5),
            KeyCode::Home => self.set_length(MIN_LENGTH),
            KeyCode::End => self.set_length(MAX_LENGTH),
            KeyCode::Char('d') => self.update(|c| c.include_digits = !c.include_digits),
            KeyCode::Char('l') => self.update(|c| c.include_letters = !c.include_letters),
            KeyCode::Char('s') => self.update(|c| c.include_symbols = !c.include_symbols),
            KeyCode::Char('x') => self.update(|c| c.exclude_similar = !c.exclude_similar),
            KeyCode::Char('r') | KeyCode::Char(' ') | KeyCode::Enter => self.regenerate(),
            KeyCode::Char('c') | KeyCode::Char('y') => {
                return if self.can_copy() { Action::Copy } else { Action::Ignore };
            }
            KeyCode::Char('?') => self.show_help = true,
            _ => return Action::Ignore,
        }
        Action::Redraw
    }
}

impl<R: RandomSource> Drop for Widget<R> {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::NO_CLASS_SELECTED;
    use crate::pass::strength::StrengthColor;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn widget() -> Widget<StdRng> {
        Widget::new(GenerationConfig::default(), StdRng::seed_from_u64(9))
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn starts_with_a_password_and_tier() {
        let w = widget();
        assert_eq!(w.password.len(), 16);
        assert_eq!(w.tier.color, StrengthColor::Maximum);
        assert!(w.can_copy());
    }

    #[test]
    fn length_keys_regenerate_and_retier() {
        let mut w = widget();
        w.set_length(11);
        let before = w.password.clone();

        assert_eq!(w.handle_key(key(KeyCode::Left)), Action::Redraw);
        assert_eq!(w.config.length(), 10);
        assert_eq!(w.password.len(), 10);
        assert_ne!(w.password, before);
        assert_eq!(w.tier.percentage, 75);

        w.handle_key(key(KeyCode::Right));
        assert_eq!(w.tier.percentage, 100);
    }

    #[test]
    fn length_stops_at_bounds_without_regenerating() {
        let mut w = widget();
        w.handle_key(key(KeyCode::Home));
        assert_eq!(w.config.length(), 4);
        let at_min = w.password.clone();
        w.handle_key(key(KeyCode::Left));
        assert_eq!(w.config.length(), 4);
        assert_eq!(w.password, at_min);

        w.handle_key(key(KeyCode::End));
        assert_eq!(w.config.length(), 40);
        w.handle_key(key(KeyCode::PageUp));
        assert_eq!(w.config.length(), 40);
        w.handle_key(key(KeyCode::PageDown));
        assert_eq!(w.config.length(), 35);
    }

    #[test]
    fn toggles_flip_classes() {
        let mut w = widget();
        w.handle_key(key(KeyCode::Char('d')));
        w.handle_key(key(KeyCode::Char('s')));
        assert!(!w.config.include_digits && !w.config.include_symbols);
        assert!(w.password.chars().all(|c| c.is_ascii_alphabetic()));

        w.handle_key(key(KeyCode::Char('x')));
        assert!(w.config.exclude_similar);
        assert!(!w.password.bytes().any(crate::pass::charset::is_similar));
    }

    #[test]
    fn all_classes_off_shows_placeholder_and_blocks_copy() {
        let mut w = widget();
        for c in ['d', 'l', 's'] {
            w.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(w.password, NO_CLASS_SELECTED);
        assert!(!w.can_copy());
        assert_eq!(w.handle_key(key(KeyCode::Char('c'))), Action::Ignore);

        w.handle_key(key(KeyCode::Char('l')));
        assert_eq!(w.password.len(), 16);
        assert_eq!(w.handle_key(key(KeyCode::Char('c'))), Action::Copy);
    }

    #[test]
    fn regenerate_clears_copied_flag() {
        let mut w = widget();
        let now = Instant::now();
        w.copy_result(true, now);
        assert!(w.copied.is_active(now));

        assert_eq!(w.handle_key(key(KeyCode::Char('r'))), Action::Redraw);
        assert!(!w.copied.is_active(now));
    }

    #[test]
    fn failed_copy_shows_no_acknowledgment() {
        let mut w = widget();
        let now = Instant::now();
        assert_eq!(w.handle_key(key(KeyCode::Char('c'))), Action::Copy);
        w.copy_result(false, now);
        assert!(!w.copied.is_active(now));
        assert_eq!(w.copied.remaining(now), None);

        w.copy_result(true, now);
        assert!(w.copied.is_active(now));
        w.copy_result(false, now);
        assert!(w.copied.is_active(now));
    }

    #[test]
    fn quit_keys() {
        let mut w = widget();
        assert_eq!(w.handle_key(key(KeyCode::Esc)), Action::Quit);
        assert_eq!(w.handle_key(key(KeyCode::Char('q'))), Action::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(w.handle_key(ctrl_c), Action::Quit);
    }

    #[test]
    fn help_is_dismissed_by_any_key() {
        let mut w = widget();
        w.handle_key(key(KeyCode::Char('?')));
        assert!(w.show_help);
        let before = w.password.clone();
        assert_eq!(w.handle_key(key(KeyCode::Char('d'))), Action::Redraw);
        assert!(!w.show_help);
        assert!(w.config.include_digits);
        assert_eq!(w.password, before);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut w = widget();
        assert_eq!(w.handle_key(key(KeyCode::Char('z'))), Action::Ignore);
        assert_eq!(w.handle_key(key(KeyCode::Tab)), Action::Ignore);
    }
}
