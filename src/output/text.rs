//! Plain-text outline formatter
//!
//! `TextFormatter` writes one line per entry into any `io::Write` sink, so
//! the same code path serves the output file and in-memory buffers.

use std::io::{self, Write};

use crate::tree::{IndentStyle, StructureOutput, WalkSummary};

use super::config::RULE_WIDTH;

pub struct TextFormatter<W: Write> {
    style: IndentStyle,
    out: W,
}

impl<W: Write> TextFormatter<W> {
    pub fn new(style: IndentStyle, out: W) -> Self {
        Self { style, out }
    }

    /// Write the title block that precedes the tree.
    pub fn write_header(&mut self, title: &str) -> io::Result<()> {
        writeln!(self.out, "{}:", title)?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StructureOutput for TextFormatter<W> {
    fn output_node(&mut self, name: &str, depth: usize, _is_dir: bool) -> io::Result<()> {
        writeln!(self.out, "{}", self.style.render(depth, name))
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        self.out.flush()
    }
}
