// Pure arrangement math: block sizes in, canvas size and origins out.
//
// Nothing here touches a Canvas, so every policy can be tested with plain
// numbers before any characters are painted.
use crate::block::TextBlock;
use crate::error::{GardenError, Result};

/// How the composer positions plants on the canvas
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LayoutPolicy {
    /// One row, left to right, every plant standing on the bottom line
    #[default]
    Row,

    /// Rows of at most `columns` plants, each row bottom aligned
    Grid { columns: usize },

    /// Grid whose column count is the most plants of the widest kind that
    /// fit in `terminal_width`
    AutoFit { terminal_width: usize },

    /// Plants one under another, left aligned
    Stack,

    /// Caller-chosen top-left origins, paired with plants by index
    Explicit(Vec<(i64, i64)>),
}

/// Result of running a layout policy
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Arrangement {
    pub width: usize,
    pub height: usize,
    /// Top-left origin per block, same order as the input
    pub origins: Vec<(i64, i64)>,
}

impl LayoutPolicy {
    /// Compute canvas size and origins for `blocks`
    ///
    /// `gap` is the number of background columns between neighbours in a
    /// row; `row_gap` the number of blank lines between rows or stacked
    /// plants. Empty blocks take no space and get no gap.
    ///
    /// The returned size is never smaller than 1x1.
    pub fn arrange(&self, blocks: &[TextBlock], gap: usize, row_gap: usize) -> Result<Arrangement> {
        let arrangement = match self {
            LayoutPolicy::Row => row(blocks, gap),
            LayoutPolicy::Grid { columns } => grid(blocks, *columns, gap, row_gap),
            LayoutPolicy::AutoFit { terminal_width } => {
                let columns = auto_fit_columns(blocks, *terminal_width, gap);
                grid(blocks, columns, gap, row_gap)
            }
            LayoutPolicy::Stack => stack(blocks, row_gap),
            LayoutPolicy::Explicit(origins) => {
                if origins.len() != blocks.len() {
                    return Err(GardenError::PlacementMismatch {
                        plants: blocks.len(),
                        origins: origins.len(),
                    });
                }
                let (width, height) = bounding_box(blocks.iter().zip(origins.iter().copied()));
                Arrangement {
                    width,
                    height,
                    origins: origins.clone(),
                }
            }
        };

        Ok(Arrangement {
            width: arrangement.width.max(1),
            height: arrangement.height.max(1),
            origins: arrangement.origins,
        })
    }
}

/// Number of grid columns that fit in `terminal_width`
///
/// Sized for the widest plant so no row can overflow: `(W + gap) / (w + gap)`,
/// never less than one.
pub fn auto_fit_columns(blocks: &[TextBlock], terminal_width: usize, gap: usize) -> usize {
    let widest = blocks.iter().map(TextBlock::width).max().unwrap_or(0).max(1);
    (terminal_width.saturating_add(gap) / widest.saturating_add(gap)).max(1)
}

/// Smallest canvas holding the positive extent of every placed block
///
/// Extents that overflow saturate, so a far-away origin yields an oversized
/// box for the ceiling check to reject.
pub fn bounding_box<'a>(placed: impl IntoIterator<Item = (&'a TextBlock, (i64, i64))>) -> (usize, usize) {
    placed
        .into_iter()
        .filter(|(block, _)| !block.is_empty())
        .fold((0, 0), |(w, h), (block, (x, y))| {
            let right = extent(x, block.width());
            let bottom = extent(y, block.height());
            (w.max(right), h.max(bottom))
        })
}

/// `origin + len` clamped to `0..=usize::MAX`
fn extent(origin: i64, len: usize) -> usize {
    let end = origin.saturating_add(coord(len));
    usize::try_from(end.max(0)).unwrap_or(usize::MAX)
}

/// Cursor position as a signed origin, saturating at `i64::MAX`
fn coord(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn row(blocks: &[TextBlock], gap: usize) -> Arrangement {
    let height = blocks
        .iter()
        .filter(|block| !block.is_empty())
        .map(TextBlock::height)
        .max()
        .unwrap_or(0);
    let mut origins = Vec::with_capacity(blocks.len());
    let mut cursor = 0usize;
    let mut placed_any = false;

    for block in blocks {
        if block.is_empty() {
            origins.push((coord(cursor), coord(height)));
            continue;
        }
        if placed_any {
            cursor = cursor.saturating_add(gap);
        }
        // Bottom align: short plants start lower so all share one ground line
        origins.push((coord(cursor), coord(height - block.height())));
        cursor = cursor.saturating_add(block.width());
        placed_any = true;
    }

    Arrangement {
        width: cursor,
        height,
        origins,
    }
}

fn grid(blocks: &[TextBlock], columns: usize, gap: usize, row_gap: usize) -> Arrangement {
    let columns = columns.max(1);
    let mut origins = Vec::with_capacity(blocks.len());
    let mut width = 0;
    let mut top = 0usize;

    for chunk in blocks.chunks(columns) {
        let line = row(chunk, gap);
        // A row of nothing but empty blocks adds no height and no gap
        if line.height > 0 && top > 0 {
            top = top.saturating_add(row_gap);
        }
        origins.extend(line.origins.iter().map(|&(x, y)| (x, y.saturating_add(coord(top)))));
        width = width.max(line.width);
        top = top.saturating_add(line.height);
    }

    Arrangement {
        width,
        height: top,
        origins,
    }
}

fn stack(blocks: &[TextBlock], row_gap: usize) -> Arrangement {
    let mut origins = Vec::with_capacity(blocks.len());
    let mut width = 0;
    let mut top = 0usize;

    for block in blocks {
        if block.is_empty() {
            origins.push((0, coord(top)));
            continue;
        }
        if top > 0 {
            top = top.saturating_add(row_gap);
        }
        origins.push((0, coord(top)));
        width = width.max(block.width());
        top = top.saturating_add(block.height());
    }

    Arrangement {
        width,
        height: top,
        origins,
    }
}
