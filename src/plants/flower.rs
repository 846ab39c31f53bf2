// Import the random number generator trait from the rand crate
use rand::Rng;

use super::{pad, pick, PlantParams};
use crate::block::TextBlock;

/// Characters a petal can be drawn with
const PETAL_CHARS: [char; 8] = ['*', 'o', '@', 'O', '0', '+', 'x', 'X'];

/// Characters for the middle of a flower head
const CENTER_CHARS: [char; 4] = ['@', '*', 'O', '.'];

/// Flowers always stand on a plain stalk
const STEM_CHAR: char = '|';

/// The different flower shapes
///
/// **Rust Concept: Fieldless enums as a closed set**
/// `ALL` lists every variant, so the registry and `random_flower` can never
/// forget a style when a new one is added here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlowerStyle {
    Round,
    Star,
    Tulip,
    Sunflower,
    Blossom,
}

impl FlowerStyle {
    pub const ALL: [FlowerStyle; 5] = [
        FlowerStyle::Round,
        FlowerStyle::Star,
        FlowerStyle::Tulip,
        FlowerStyle::Sunflower,
        FlowerStyle::Blossom,
    ];

    /// Kind name used in the plant registry
    pub fn name(self) -> &'static str {
        match self {
            FlowerStyle::Round => "round",
            FlowerStyle::Star => "star",
            FlowerStyle::Tulip => "tulip",
            FlowerStyle::Sunflower => "sunflower",
            FlowerStyle::Blossom => "blossom",
        }
    }

    /// Draw this flower with a fresh RNG seeded from `params`
    pub fn draw(self, params: &PlantParams) -> TextBlock {
        let mut rng = params.rng();
        self.render(params.clamped_size(), params.unicode, &mut rng)
    }

    fn render(self, size: usize, unicode: bool, rng: &mut impl Rng) -> TextBlock {
        let lines = match self {
            FlowerStyle::Round => round_lines(size, rng),
            FlowerStyle::Star => star_lines(size, rng),
            FlowerStyle::Tulip => tulip_lines(size, rng),
            FlowerStyle::Sunflower => sunflower_lines(size, rng),
            FlowerStyle::Blossom => blossom_lines(size, unicode, rng),
        };
        TextBlock::new(lines)
    }
}

/// Draw a flower of a randomly chosen style
///
/// The style is picked with the same seeded RNG that then draws the flower,
/// so one seed always gives the same flower.
pub fn random_flower(params: &PlantParams) -> TextBlock {
    let mut rng = params.rng();
    let style = pick(&mut rng, &FlowerStyle::ALL);
    style.render(params.clamped_size(), params.unicode, &mut rng)
}

/// `count` copies of a stalk at column `col`
fn stem(col: usize, count: usize) -> impl Iterator<Item = String> {
    (0..count).map(move |_| format!("{}{}", pad(col), STEM_CHAR))
}

/// A roughly circular head with a noisy edge, on a stalk
///
/// Columns are stretched 2:1 so the head looks round in a terminal cell grid.
fn round_lines(size: usize, rng: &mut impl Rng) -> Vec<String> {
    let radius = 1 + size as i64;
    let petal = pick(rng, &PETAL_CHARS);
    let center = pick(rng, &CENTER_CHARS);

    let mut lines = Vec::new();
    for y in -radius..=radius {
        let row: String = (-2 * radius..=2 * radius)
            .map(|x| {
                let dx = x as f64 / 2.0;
                let d2 = dx * dx + (y * y) as f64;
                let noise = rng.gen::<f64>() * 0.6;
                let edge = radius as f64 + 0.25 - noise;
                if d2 > edge * edge {
                    ' '
                } else if x.abs() <= 1 && y.abs() <= 1 {
                    center
                } else {
                    petal
                }
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }

    let stem_height = rng.gen_range(1 + size..=2 + 2 * size);
    lines.extend(stem(2 * radius as usize, stem_height));
    lines
}

/// Five petals around a center, on a stalk
fn star_lines(s: usize, rng: &mut impl Rng) -> Vec<String> {
    let petal = pick(rng, &PETAL_CHARS);
    let center = pick(rng, &CENTER_CHARS);

    let side = format!("{}{}{}{}", pad(s), petal, pad(2 * s - 1), petal);
    let mut lines = vec![
        format!("{}{}", pad(2 * s), petal),
        side.clone(),
        format!("{}{}{}", petal, pad(4 * s - 1), petal),
        side,
        format!("{}{}", pad(2 * s), center),
    ];

    let stem_height = 1 + s + rng.gen_range(0..=s);
    lines.extend(stem(2 * s, stem_height));
    lines
}

fn tulip_lines(s: usize, rng: &mut impl Rng) -> Vec<String> {
    let petal = pick(rng, &PETAL_CHARS);
    let center = pick(rng, &CENTER_CHARS);

    let mut lines = vec![
        format!("{}{}{}{}", pad(1 + s), petal, pad(s), petal),
        format!(
            "{}{}{}{}{}{}",
            pad(s),
            petal,
            pad(1 + s),
            center,
            pad(s),
            petal
        ),
        format!("{}{}{}", petal, pad(3 + s), petal),
    ];

    let leaves = pick(rng, &["<>", "/\\", "()", "~~"]);
    lines.push(format!("{}{}", pad(1 + s), leaves));

    let stem_height = 1 + s + rng.gen_range(0..=2);
    lines.extend(stem(2 + s, stem_height));
    lines
}

fn sunflower_lines(s: usize, rng: &mut impl Rng) -> Vec<String> {
    let petal = pick(rng, &['0', 'O', '*', '@']);
    let center = pick(rng, &['@', '0', 'O']);

    let crown: String = std::iter::repeat(petal).take(3 + s).collect();
    let mut lines = vec![
        format!("{}{}", pad(2 + s), crown),
        format!(
            "{}{}{}{}{}{}",
            pad(1 + s),
            petal,
            pad(1 + s),
            center,
            pad(1 + s),
            petal
        ),
        format!("{}{}{}", petal, pad(3 + s), petal),
    ];

    lines.extend(stem(2 + s, 2 + s));
    lines
}

/// Small five-petal blossom
///
/// Uses `✿`/`❀` petals unless `unicode` is off.
fn blossom_lines(s: usize, unicode: bool, rng: &mut impl Rng) -> Vec<String> {
    let petal = if unicode {
        pick(rng, &['o', '✿', '❀'])
    } else {
        pick(rng, &['o', '*'])
    };
    let center = pick(rng, &['.', '@']);

    let mut lines = vec![
        format!("{}{} {}", pad(1 + s), petal, petal),
        format!("{}{}{}{}", pad(s), petal, center, petal),
        format!("{}{}{}", petal, pad(1 + s), petal),
    ];

    lines.extend(stem(2 + s, 1 + s));
    lines
}
