use std::time::Instant;

use super::widget::Widget;
use crate::entropy::{Engine, RandomSource};
use crate::pass::{charset, color};
use crate::settings::{MAX_LENGTH, MIN_LENGTH};
use crate::terminal::{
    BOLD, DIM, GREEN, INNER_WIDTH, RESET, UNDERLINE, box_bottom, box_line, box_line_center,
    box_line_split, box_opt, box_top, calculate_entropy, clear_below, emit, flush, home, meter,
    print_rule, slider,
};

/// Redraw the whole widget from the top-left corner.
pub fn draw<R: RandomSource>(widget: &Widget<R>, now: Instant, engine: Engine) {
    home();
    if widget.show_help {
        print_help();
    } else {
        print_generator(widget, now, engine);
    }
    clear_below();
}

fn print_generator<R: RandomSource>(widget: &Widget<R>, now: Instant, engine: Engine) {
    let config = &widget.config;
    let tier = &widget.tier;
    let tier_fg = color::fg(tier.color.rgb());

    box_top("Generator");
    box_line("");
    box_line_split(&format!("  {BOLD}{}{RESET}", color::colorize(&widget.password)), "[r] ⟳ ");
    box_line("");
    box_line(&format!("  {}", meter(tier.percentage, INNER_WIDTH - 4, &tier_fg)));
    box_line(&format!("  {tier_fg}{}{RESET}", tier.label));
    box_line("");
    if widget.copied.is_active(now) {
        box_line_center(&format!("{GREEN}✔ Copied!{RESET}"));
    } else if widget.can_copy() {
        box_line_center("[c] Copy this password");
    } else {
        box_line_center(&format!("{DIM}[c] Copy this password{RESET}"));
    }
    box_line("");
    print_rule();

    box_line(&format!("{UNDERLINE}LENGTH{RESET}: {}", config.length()));
    box_line(&format!(
        "  {MIN_LENGTH} {} {MAX_LENGTH}",
        slider(config.length(), MIN_LENGTH, MAX_LENGTH, INNER_WIDTH - 10)
    ));
    print_rule();

    box_line(&format!("{UNDERLINE}OPTIONS{RESET}:"));
    print_switch('d', "Digits", "( e.g. 345 )", config.include_digits);
    print_switch('l', "Letters", "( e.g. Aa )", config.include_letters);
    print_switch('s', "Symbols", "( e.g. @$# )", config.include_symbols);
    print_switch('x', "Similar characters", "( e.g. 1l | O0 Z2 )", config.exclude_similar);
    print_rule();

    let size = charset::size(config);
    box_line(&format!(
        "{DIM}Charset: {} chars • {:.1} bits • {}{RESET}",
        size,
        calculate_entropy(config.length(), size),
        engine.name()
    ));
    box_bottom();
    emit(&format!(
        "{DIM} ←/→ length  d/l/s/x options  r regenerate  c copy  ? help  q quit{RESET}"
    ));
    flush();
}

fn print_switch(key: char, label: &str, hint: &str, on: bool) {
    let state = if on {
        format!("{GREEN}● on {RESET}")
    } else {
        format!("{DIM}○ off{RESET}")
    };
    box_line_split(&format!("  [{key}] {label:<20}{DIM}{hint}{RESET}"), &state);
}

pub fn print_help() {
    box_top("Strongpass");
    box_line_center("Password generator");
    box_line("");
    box_line("KEYS:");
    box_opt("  ←, -", "Shorter password (minimum 4)");
    box_opt("  →, +", "Longer password (maximum 40)");
    box_opt("  PgDn / PgUp", "Length -5 / +5");
    box_opt("  Home / End", "Jump to 4 / 40 characters");
    box_opt("  d", "Toggle digits");
    box_opt("  l", "Toggle letters");
    box_opt("  s", "Toggle symbols");
    box_opt("  x", "Toggle exclusion of look-alike characters (i l 1 L o 0 O 2 Z z 5 s S)");
    box_opt("  r, Space, Enter", "Generate a new password");
    box_opt("  c", "Copy the password to the clipboard");
    box_opt("  q, Esc, Ctrl+C", "Quit");
    box_line("");
    box_line("STRENGTH:");
    box_line("  4-6 chars: 25%   7-8: 50%   9-10: 75%   11+: 100%");
    box_line("");
    box_line_center(&format!("{DIM}press any key to return{RESET}"));
    box_bottom();
    flush();
}
