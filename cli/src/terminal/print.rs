// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

use std::{cell::Cell, fmt::Display, sync::OnceLock};

use crate::terminal::{banner, colors};
use anyhow::bail;
use colored::*;
use monerowallet_common::config::Config;
use unicode_width::UnicodeWidthStr;

pub const TOTAL_WIDTH: usize = 64;

static PRINT: OnceLock<Print> = OnceLock::new();

thread_local! {
    pub static GLOBAL_KEY_WIDTH: Cell<usize> = const { Cell::new(10) }
}

pub type Detail = (String, ColoredString);

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::mprint!("");
    };
    ($($arg:tt)*) => {
        tracing::info!(
            target: "monerowallet::print",
            raw_msg = %format_args!($($arg)*)
        );
    };
}

pub trait WithDefaultColor {
    fn with_default(self, default_color: Color) -> ColoredString;
}

impl WithDefaultColor for &str {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for String {
    fn with_default(self, default_color: Color) -> ColoredString {
        self.color(default_color)
    }
}

impl WithDefaultColor for ColoredString {
    fn with_default(self, _default_color: Color) -> ColoredString {
        self
    }
}

#[derive(Default)]
pub struct Print {
    no_banner: bool,
    q_level: u8,
    redact: bool,
}

impl Print {
    fn new(cfg: &Config) -> Self {
        Self {
            no_banner: cfg.no_banner,
            q_level: cfg.quiet,
            redact: cfg.redact,
        }
    }

    pub fn init(cfg: &Config) -> anyhow::Result<()> {
        let term = Self::new(cfg);
        if PRINT.set(term).is_err() {
            bail!("terminal has already been initialized")
        }
        Ok(())
    }

    /// Settings in effect. Falls back to plain defaults before `init`.
    fn get() -> &'static Self {
        PRINT.get_or_init(Self::default)
    }

    pub fn quiet() -> u8 {
        Self::get().q_level
    }

    pub fn redact() -> bool {
        Self::get().redact
    }

    pub fn banner() {
        let p = Self::get();
        if p.no_banner || p.q_level > 0 {
            return;
        }

        let text_content: String = format!("⟦ MONEROWALLET v{} ⟧ ", env!("CARGO_PKG_VERSION"));
        let text_width: usize = UnicodeWidthStr::width(text_content.as_str());
        let text: ColoredString = text_content.color(colors::ADDRESS).bold();
        let sep: ColoredString = "═"
            .repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2)
            .bright_black();

        mprint!("{}{}{}", sep, text, sep);
        banner::print();
    }

    pub fn header(msg: &str) {
        let p = Self::get();
        if p.q_level > 1 {
            return;
        }
        if p.q_level > 0 {
            mprint!();
            return;
        }

        let formatted: String = format!("⟦ {} ⟧", msg);
        let msg_len: usize = formatted.chars().count();

        let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
        let left: usize = dash_count / 2;
        let right: usize = dash_count - left;

        let line: ColoredString = format!(
            "{}{}{}",
            "─".repeat(left),
            formatted.to_uppercase().color(colors::ACCENT),
            "─".repeat(right)
        )
        .bright_black();

        mprint!("{}", line);
    }

    /// Bare value for `-qq`, meant for piping into other tools.
    pub fn raw<V: Display>(value: V) {
        mprint!("{}", value);
    }

    /// Prints `value` alone under `-qq`, otherwise as an aligned key/value line.
    pub fn value<V>(key: &str, value: V)
    where
        V: Display + WithDefaultColor,
    {
        if Self::quiet() > 1 {
            Self::raw(value);
        } else {
            aligned_line(key, value);
        }
    }

    pub fn no_results(what: &str) {
        let p = Self::get();
        if p.q_level == 0 && !p.no_banner {
            Self::header(&format!("no {what}"));
            mprint!("{}", banner::NO_RESULTS_0.red().bold());
            return;
        }
        monerowallet_common::warn!("The wallet returned no {what}");
    }

    pub fn end_of_program() {
        let p = Self::get();
        if p.q_level > 0 {
            return;
        }
        mprint!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR));
    }
}

pub fn divider() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).bright_black();
    mprint!("{}", sep);
}

pub fn aligned_line<V>(key: &str, value: V)
where
    V: Display + WithDefaultColor,
{
    let whitespace: String = ".".repeat((GLOBAL_KEY_WIDTH.get() + 1).saturating_sub(key.len()));
    let colon: String = format!(
        "{}{}",
        whitespace.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR)
    );
    let value: ColoredString = value.with_default(colors::TEXT_DEFAULT);
    print_status(format!("{}{} {}", key.color(colors::PRIMARY), colon, value));
}

pub fn print_status<T: AsRef<str>>(msg: T) {
    mprint!(
        "{} {}",
        ">".color(colors::SEPARATOR),
        msg.as_ref().color(colors::TEXT_DEFAULT)
    );
}

pub fn tree_head(idx: usize, name: &str) {
    let idx_str: String = format!("[{}]", idx.to_string().color(colors::ACCENT));
    mprint!(
        "{} {}",
        idx_str.color(colors::SEPARATOR),
        name.color(colors::PRIMARY)
    );
}

pub fn as_tree(details: Vec<Detail>) {
    let padding_width: usize = details.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

    for (i, (key, value)) in details.iter().enumerate() {
        let last: bool = i + 1 == details.len();
        let branch: ColoredString = if !last { "├─" } else { "└─" }.bright_black();

        let dots_count: usize = padding_width.saturating_sub(key.len());
        let dots: ColoredString = ".".repeat(dots_count).color(colors::SEPARATOR);

        mprint!(
            " {} {}{}{} {}",
            branch,
            key.color(colors::TEXT_DEFAULT),
            dots,
            ":".color(colors::SEPARATOR),
            value
        );
    }
}

/// Prints a list of trees, one `[idx] name` head per entry.
pub fn trees<I>(entries: I)
where
    I: IntoIterator<Item = (String, Vec<Detail>)>,
{
    for (idx, (name, details)) in entries.into_iter().enumerate() {
        if idx > 0 {
            mprint!();
        }
        tree_head(idx, &name);
        as_tree(details);
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    mprint!("{}{}{}", space, msg, space);
}

pub fn summary(msg: &str) {
    if Print::quiet() > 0 {
        monerowallet_common::success!("{msg}");
        return;
    }
    divider();
    centerln(msg);
}
