//! Console message helpers. Every helper writes to the given sink so the
//! interactive session can be driven by tests.

use crate::utils::colors::{BLUE, BOLD, CYAN, GREY, RESET, YELLOW};
use crate::utils::formatting::separator;
use std::fmt;
use std::io::{self, Write};

pub fn info<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "{}{}ℹ️{} {}", BLUE, BOLD, RESET, msg)
}

pub fn warning<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "{}{}⚠️{} {}", YELLOW, BOLD, RESET, msg)
}

/// Grey "no data" line used when a statistic has nothing to report.
pub fn no_data<W: Write, T: fmt::Display>(out: &mut W, label: T) -> io::Result<()> {
    writeln!(out, "{}{}: no data available{}", GREY, label, RESET)
}

/// `• label: value` line used by every statistics report.
pub fn stat<W: Write, L: fmt::Display, V: fmt::Display>(
    out: &mut W,
    label: L,
    value: V,
) -> io::Result<()> {
    writeln!(out, "{}• {}:{} {}", CYAN, label, RESET, value)
}

/// Section header printed before a report is computed.
pub fn header<W: Write, T: fmt::Display>(out: &mut W, msg: T) -> io::Result<()> {
    writeln!(out, "\n{}{}{}{}\n", BLUE, BOLD, msg, RESET)
}

pub fn rule<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", separator())
}
