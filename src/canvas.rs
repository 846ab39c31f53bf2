// Import the block type we paint onto the grid
use crate::block::TextBlock;
use crate::error::{GardenError, Result};

use std::fmt;

/// Background character used when none is given
pub const DEFAULT_BACKGROUND: char = ' ';

/// A fixed-size 2D character grid that plant blocks are painted onto
///
/// This is the garden's equivalent of an image buffer: it starts filled with
/// the background character and every `write` paints over whatever is
/// already there. Later writes win (painter's algorithm), nothing is blended.
///
/// **Rust Concept: Vec<Vec<char>>**
/// Each row is its own `Vec<char>`, so indexing is `cells[y][x]`.
/// `char` (not `u8`) lets plants use glyphs like `✿` without splitting bytes.
#[derive(Clone, Debug)]
pub struct Canvas {
    width: usize,
    height: usize,
    background: char,
    cells: Vec<Vec<char>>,
}

impl Canvas {
    /// Create a canvas filled with spaces
    ///
    /// # Errors
    /// `InvalidDimension` if either side is zero.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::with_background(width, height, DEFAULT_BACKGROUND)
    }

    /// Create a canvas filled with `background`
    pub fn with_background(width: usize, height: usize, background: char) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GardenError::InvalidDimension {
                width,
                height,
                reason: "canvas sides must be positive".to_string(),
            });
        }

        Ok(Self {
            width,
            height,
            background,
            cells: vec![vec![background; width]; height],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn background(&self) -> char {
        self.background
    }

    /// Character at `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Paint `block` with its top-left corner at `(x, y)`
    ///
    /// Source line `i`, column `j` lands on cell `(x + j, y + i)`. Every
    /// character of a line is written, including interior spaces; the
    /// implicit padding after a short line is not.
    ///
    /// With `clip` set, cells outside the grid are skipped. Without it, every
    /// character must land on the grid or the call fails and the grid is left
    /// exactly as it was. Empty lines carry no characters, so they may hang
    /// past the bottom edge. A cell whose coordinate overflows `i64` is
    /// outside the grid.
    ///
    /// # Errors
    /// `OutOfBounds` when `clip` is false and some character falls outside.
    pub fn write(&mut self, block: &TextBlock, x: i64, y: i64, clip: bool) -> Result<()> {
        if block.is_empty() {
            return Ok(());
        }

        if !clip && !self.fits(block, x, y) {
            return Err(GardenError::OutOfBounds {
                x,
                y,
                block_width: block.width(),
                block_height: block.height(),
                canvas_width: self.width,
                canvas_height: self.height,
            });
        }

        for (i, line) in block.lines().iter().enumerate() {
            let Some(row) = offset(y, i).and_then(|y| self.row_index(y)) else {
                continue;
            };
            for (j, ch) in line.chars().enumerate() {
                if let Some(col) = offset(x, j).and_then(|x| self.col_index(x)) {
                    self.cells[row][col] = ch;
                }
            }
        }

        Ok(())
    }

    /// One string per row, each exactly `width` characters long
    ///
    /// Trailing background is kept so the output stays rectangular.
    pub fn render(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect()
    }

    /// True when every character of `block` lands inside the grid
    ///
    /// Only the first and last character of each non-empty line need
    /// checking: the columns in between lie between them.
    fn fits(&self, block: &TextBlock, x: i64, y: i64) -> bool {
        block
            .lines()
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .all(|(i, line)| {
                let last = line.chars().count() - 1;
                offset(y, i).and_then(|y| self.row_index(y)).is_some()
                    && self.col_index(x).is_some()
                    && offset(x, last).and_then(|x| self.col_index(x)).is_some()
            })
    }

    fn row_index(&self, y: i64) -> Option<usize> {
        usize::try_from(y).ok().filter(|&row| row < self.height)
    }

    fn col_index(&self, x: i64) -> Option<usize> {
        usize::try_from(x).ok().filter(|&col| col < self.width)
    }
}

/// `origin + step`, or `None` once the sum leaves the `i64` range
fn offset(origin: i64, step: usize) -> Option<i64> {
    i64::try_from(step).ok().and_then(|step| origin.checked_add(step))
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render().join("\n"))
    }
}
