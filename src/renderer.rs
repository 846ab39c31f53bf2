// Terminal output for finished gardens
use std::io::{self, Write};

// crossterm writes the escape sequences for clearing the screen
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use crate::error::Result;

/// What to do with earlier terminal output before drawing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClearMode {
    /// Leave the terminal alone
    #[default]
    None,

    /// Erase the screen and move the cursor home
    Ansi,

    /// Scroll old output away with this many empty lines
    BlankLines(usize),
}

/// Prints composed garden lines
///
/// Knows nothing about canvases or layouts; it only receives lines.
#[derive(Clone, Debug, Default)]
pub struct GardenRenderer {
    pub clear: ClearMode,

    /// Strip trailing whitespace from each line when printing
    /// The composed lines themselves stay rectangular.
    pub trim_trailing: bool,
}

impl GardenRenderer {
    pub fn new(clear: ClearMode, trim_trailing: bool) -> Self {
        Self {
            clear,
            trim_trailing,
        }
    }

    /// Write `lines` to standard output
    pub fn render(&self, lines: &[String]) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, lines)
    }

    /// Write `lines` to `out`, one per line, each followed by `\n`
    pub fn render_to<W: Write>(&self, out: &mut W, lines: &[String]) -> Result<()> {
        match self.clear {
            ClearMode::None => {}
            ClearMode::Ansi => queue!(out, Clear(ClearType::All), MoveTo(0, 0))?,
            ClearMode::BlankLines(count) => {
                for _ in 0..count {
                    writeln!(out)?;
                }
            }
        }

        for line in lines {
            let line = if self.trim_trailing {
                line.trim_end()
            } else {
                line.as_str()
            };
            writeln!(out, "{}", line)?;
        }

        out.flush()?;
        Ok(())
    }
}
