// Copyright 2026, Trestle Contributors
// For licensing, see https://github.com/trestle-rs/trestle/blob/main/licenses/COPYRIGHT.md

//! ANSI color helpers for terminal output.

use std::fmt::Display;

pub const RED: &str = "\x1b[31;1m";
pub const GREY: &str = "\x1b[0;0m\x1b[36m";
pub const MINT: &str = "\x1b[38;5;48;1m";
pub const PINK: &str = "\x1b[38;5;161;1m";
pub const YELLOW: &str = "\x1b[33;1m";
pub const LAVENDER: &str = "\x1b[38;5;183;1m";
pub const DEFAULT: &str = "\x1b[0;0m";

pub trait Color: Display {
    fn color(&self, color: &str) -> String {
        format!("{color}{self}{DEFAULT}")
    }

    fn red(&self) -> String {
        self.color(RED)
    }
    fn grey(&self) -> String {
        self.color(GREY)
    }
    fn mint(&self) -> String {
        self.color(MINT)
    }
    fn pink(&self) -> String {
        self.color(PINK)
    }
    fn yellow(&self) -> String {
        self.color(YELLOW)
    }
    fn lavender(&self) -> String {
        self.color(LAVENDER)
    }
}

impl<T: Display> Color for T {}
