use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

static FORCE_NO_COLOR: AtomicBool = AtomicBool::new(false);
static COLOR: OnceLock<bool> = OnceLock::new();

pub(crate) fn disable_color() {
    FORCE_NO_COLOR.store(true, Ordering::Relaxed);
}

/// Diagnostics go to stderr, so color keys off stderr being a terminal.
pub(crate) fn use_color() -> bool {
    if FORCE_NO_COLOR.load(Ordering::Relaxed) {
        return false;
    }
    *COLOR.get_or_init(|| std::env::var("NO_COLOR").is_err() && atty::is(atty::Stream::Stderr))
}

pub(crate) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_esc = false;
    for ch in s.chars() {
        if in_esc {
            if ch == 'm' {
                in_esc = false;
            }
        } else if ch == '\x1b' {
            in_esc = true;
        } else {
            out.push(ch);
        }
    }
    out
}

macro_rules! ceprintln {
    () => { eprintln!() };
    ($($arg:tt)*) => {{
        let s = format!($($arg)*);
        if $crate::fmt::use_color() {
            eprintln!("{s}");
        } else {
            eprintln!("{}", $crate::fmt::strip_ansi(&s));
        }
    }};
}
pub(crate) use ceprintln;

pub(crate) const RESET: &str = "\x1b[0m";
pub(crate) const BOLD: &str = "\x1b[1m";
pub(crate) const DIM: &str = "\x1b[2m";
