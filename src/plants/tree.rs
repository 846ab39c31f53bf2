use rand::Rng;

use super::{pad, pick, PlantParams};
use crate::block::TextBlock;

/// Foliage character of broad canopies before any re-skinning
const CANOPY_CHAR: char = '#';

/// Trees stand on trunks made of this, several columns wide
const TRUNK_CHAR: char = '|';

/// Hand-drawn tree used as the base of the stylized style
const STYLIZED_ART: [&str; 11] = [
    r"           \\/ |    |/",
    r"        \\/ / \\||/  /_/___/_",
    r"         \\/   |/ \\/",
    r"    _\__\_\   |  /_____/ _",
    r"           \  | /          /",
    r"  __ _-----`  |{,-----------~",
    r"            \ }{",
    r"             }{{",
    r"             }}{",
    r"             {{{}",
    r"       , -=-~{ .-^- _",
];

/// The different tree shapes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreeStyle {
    Pine,
    Broad,
    Bonsai,
    Cherry,
    Stylized,
}

impl TreeStyle {
    pub const ALL: [TreeStyle; 5] = [
        TreeStyle::Pine,
        TreeStyle::Broad,
        TreeStyle::Bonsai,
        TreeStyle::Cherry,
        TreeStyle::Stylized,
    ];

    /// Kind name used in the plant registry
    pub fn name(self) -> &'static str {
        match self {
            TreeStyle::Pine => "pine",
            TreeStyle::Broad => "broad",
            TreeStyle::Bonsai => "bonsai",
            TreeStyle::Cherry => "cherry",
            TreeStyle::Stylized => "stylized",
        }
    }

    /// Draw this tree with a fresh RNG seeded from `params`
    pub fn draw(self, params: &PlantParams) -> TextBlock {
        let mut rng = params.rng();
        self.render(params.clamped_size(), params.unicode, &mut rng)
    }

    /// Bonsai is a shrunken broad tree, cherry and stylized are grown one
    /// size up so their detail has room.
    fn render(self, size: usize, unicode: bool, rng: &mut impl Rng) -> TextBlock {
        match self {
            TreeStyle::Pine => TextBlock::new(pine_lines(size)),
            TreeStyle::Broad => TextBlock::new(broad_lines(size)),
            TreeStyle::Bonsai => TextBlock::new(broad_lines(size.saturating_sub(1).max(1))),
            TreeStyle::Cherry => {
                let blossom = if unicode { '✿' } else { 'o' };
                TextBlock::new(broad_lines(size + 1))
                    .map_chars(|c| if c == CANOPY_CHAR { blossom } else { c })
            }
            TreeStyle::Stylized => TextBlock::new(stylized_lines(size + 1, rng)),
        }
    }
}

/// Draw a tree of a randomly chosen style
pub fn random_tree(params: &PlantParams) -> TextBlock {
    let mut rng = params.rng();
    let style = pick(&mut rng, &TreeStyle::ALL);
    style.render(params.clamped_size(), params.unicode, &mut rng)
}

/// `count` rows of a trunk `width` columns wide starting at column `col`
fn trunk(col: usize, width: usize, count: usize) -> impl Iterator<Item = String> {
    let bark: String = std::iter::repeat(TRUNK_CHAR).take(width).collect();
    (0..count).map(move |_| format!("{}{}", pad(col), bark))
}

/// Three stacked triangles of `^`, each wider than the one above
fn pine_lines(size: usize) -> Vec<String> {
    let s = size.max(1);
    let apex = 4 * s + 2;

    let mut lines = Vec::new();
    for layer in 0..3 {
        let rows = 1 + 2 * (layer + s);
        for row in 0..rows {
            lines.push(format!("{}{}", pad(apex - row), "^".repeat(1 + 2 * row)));
        }
    }

    let trunk_width = 1 + s;
    lines.extend(trunk(apex - trunk_width / 2, trunk_width, 1 + s));
    lines
}

/// Filled elliptical canopy on a wide trunk
fn broad_lines(size: usize) -> Vec<String> {
    let radius = 2 + size as i64;
    let limit = (radius as f64 + 0.2).powi(2);

    let mut lines = Vec::new();
    for y in -radius..=radius {
        let row: String = (-2 * radius..=2 * radius)
            .map(|x| {
                let dx = x as f64 / 2.0;
                if dx * dx + (y * y) as f64 <= limit {
                    CANOPY_CHAR
                } else {
                    ' '
                }
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }

    let trunk_width = 1 + 2 * size;
    let center = 2 * radius as usize;
    lines.extend(trunk(center - trunk_width / 2, trunk_width, 1 + size));
    lines
}

/// The fixed stylized art with a random ragged crown above it
///
/// Larger sizes add more crown rows, jitter them more, and grow the trunk.
fn stylized_lines(size: usize, rng: &mut impl Rng) -> Vec<String> {
    let s = size.max(1);
    let crown_rows = 2 * s;
    let jitter = s;

    let mut lines = Vec::new();
    for r in 0..crown_rows {
        let pattern = pick(rng, &["\\/", "\\/ \\/", " \\/ \\/"]);
        let indent = 6usize.saturating_sub(r) + rng.gen_range(0..=jitter);
        let repeats = 1 + r % (1 + jitter);
        lines.push(format!("{}{}", pad(indent), pattern.repeat(repeats)));
    }

    lines.extend(STYLIZED_ART.iter().map(|line| line.to_string()));

    let trunk_width = 1 + 2 * s;
    let widest = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(trunk_width);
    let col = (widest / 2).saturating_sub(trunk_width / 2);

    // Big trees get a band of roots
    if s >= 3 {
        lines.push(format!(
            "{}{}",
            pad(col.saturating_sub(2)),
            "~".repeat(trunk_width + 4)
        ));
    }

    lines.extend(trunk(col, trunk_width, 2 + s));
    lines
}
