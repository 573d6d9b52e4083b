//! Terminal output

use crate::buffer::FrameBuffer;
use crossterm::{
    cursor, queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufWriter, Stdout, Write, stdout};

/// Streams frames to a terminal (or anything else that takes bytes)
pub struct TerminalSink<W: Write> {
    out: W,
    line: String,
}

impl TerminalSink<BufWriter<Stdout>> {
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(stdout()))
    }
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, line: String::new() }
    }

    /// Clear the screen once before the first frame
    pub fn begin(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All))?;
        self.out.flush()
    }

    /// Home the cursor and redraw the grid, each row preceded by a newline
    pub fn present(&mut self, frame: &FrameBuffer) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0))?;

        self.line.clear();
        for row in frame.chars.rows() {
            self.line.push('\n');
            self.line.extend(row.iter());
        }
        self.out.write_all(self.line.as_bytes())?;

        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
