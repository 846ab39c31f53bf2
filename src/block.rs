/// A rectangular fragment of ASCII art, usually one plant
///
/// Lines may be ragged. The block's width is the length of its longest line
/// (counted in characters, not bytes); shorter lines are treated as if they
/// were padded on the right with background.
///
/// **Rust Concept: Private fields + constructor**
/// `lines` and `width` are private, so the only way to build a block is
/// through `new`, which computes `width` once. A block can't be mutated
/// afterwards, so the cached width can never go stale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextBlock {
    lines: Vec<String>,
    width: usize,
}

impl TextBlock {
    /// Build a block from its lines
    pub fn new(lines: Vec<String>) -> Self {
        let width = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        Self { lines, width }
    }

    /// Build a block from anything that yields string-like lines
    ///
    /// Handy in tests: `TextBlock::from_lines(["/\\", "| |"])`
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(lines.into_iter().map(Into::into).collect())
    }

    /// Split multi-line text into a block, one line per `\n`
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Width in characters of the longest line
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of lines
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// A block with no width or no height takes up no space on a canvas
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.lines.is_empty()
    }

    /// Apply `f` to every character, keeping the shape
    ///
    /// Used to re-skin a plant, e.g. turning `#` foliage into blossoms.
    pub fn map_chars(&self, f: impl Fn(char) -> char) -> Self {
        Self::new(
            self.lines
                .iter()
                .map(|line| line.chars().map(&f).collect())
                .collect(),
        )
    }
}
