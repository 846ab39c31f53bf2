// Import the pieces the composer drives
use crate::block::TextBlock;
use crate::canvas::{Canvas, DEFAULT_BACKGROUND};
use crate::error::{GardenError, Result};
use crate::layout::{bounding_box, LayoutPolicy};
use crate::plants::PlantParams;
use crate::registry::PlantRegistry;

use log::debug;

/// One plant to draw: a registered kind plus its parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlantSpec {
    pub kind: String,
    pub params: PlantParams,
}

impl PlantSpec {
    pub fn new(kind: impl Into<String>, params: PlantParams) -> Self {
        Self {
            kind: kind.into(),
            params,
        }
    }

    /// A plant of `kind` with default parameters
    pub fn of(kind: impl Into<String>) -> Self {
        Self::new(kind, PlantParams::default())
    }
}

/// A block and the top-left cell it is painted at
///
/// Origins are signed: explicit layouts may hang a plant off the top or
/// left edge, where it gets clipped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub block: TextBlock,
    pub x: i64,
    pub y: i64,
}

impl Placement {
    pub fn new(block: TextBlock, x: i64, y: i64) -> Self {
        Self { block, x, y }
    }
}

/// Knobs for a single composition
///
/// These are the only configuration the composer takes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Background columns between neighbouring plants in a row
    pub gap: usize,

    /// Blank lines between grid rows or stacked plants
    pub row_gap: usize,

    /// Fill character of the canvas
    pub background: char,

    /// Canvas size ceiling; anything larger is rejected before allocating
    pub max_width: usize,
    pub max_height: usize,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            gap: 2,
            row_gap: 1,
            background: DEFAULT_BACKGROUND,
            max_width: 1024,
            max_height: 1024,
        }
    }
}

/// Turns a list of requested plants into the lines of one garden picture
///
/// **Rust Concept: Ownership of collaborators**
/// The composer owns its registry. Nothing global is consulted, so two
/// composers with different registries can exist side by side.
pub struct GardenComposer {
    registry: PlantRegistry,
    options: ComposeOptions,
}

impl GardenComposer {
    /// Composer with default options
    pub fn new(registry: PlantRegistry) -> Self {
        Self::with_options(registry, ComposeOptions::default())
    }

    pub fn with_options(registry: PlantRegistry, options: ComposeOptions) -> Self {
        Self { registry, options }
    }

    pub fn registry(&self) -> &PlantRegistry {
        &self.registry
    }

    pub fn options(&self) -> &ComposeOptions {
        &self.options
    }

    /// Draw every plant and lay them out with `layout`
    ///
    /// Plants are drawn in order; the first unknown kind aborts the whole
    /// composition. Computed layouts are painted without clipping, so a
    /// plant that doesn't fit its computed slot is reported as `OutOfBounds`
    /// rather than quietly cut off. Explicit origins are clipped.
    ///
    /// # Errors
    /// - `UnknownPlantKind` for an unregistered kind
    /// - `InvalidDimension` if the canvas would exceed the ceiling
    /// - `PlacementMismatch` if explicit origins don't match the plant count
    pub fn compose(&self, plants: &[PlantSpec], layout: &LayoutPolicy) -> Result<Vec<String>> {
        let blocks = plants
            .iter()
            .map(|plant| self.registry.get_plant_block(&plant.kind, &plant.params))
            .collect::<Result<Vec<_>>>()?;

        let arrangement = layout.arrange(&blocks, self.options.gap, self.options.row_gap)?;
        let clip = matches!(layout, LayoutPolicy::Explicit(_));

        debug!(
            "composing {} plants on a {}x{} canvas ({:?})",
            blocks.len(),
            arrangement.width,
            arrangement.height,
            layout
        );

        let mut canvas = self.canvas(arrangement.width, arrangement.height)?;
        for (block, &(x, y)) in blocks.iter().zip(&arrangement.origins) {
            canvas.write(block, x, y, clip)?;
        }

        Ok(canvas.render())
    }

    /// Paint caller-built placements in order, later ones on top
    ///
    /// With `size` the canvas has exactly that size; without it the canvas
    /// is the bounding box of everything placed (at least 1x1). Anything
    /// outside the canvas is clipped.
    pub fn compose_explicit(
        &self,
        placements: &[Placement],
        size: Option<(usize, usize)>,
    ) -> Result<Vec<String>> {
        let (width, height) = size.unwrap_or_else(|| {
            let (w, h) = bounding_box(placements.iter().map(|p| (&p.block, (p.x, p.y))));
            (w.max(1), h.max(1))
        });

        debug!(
            "composing {} explicit placements on a {}x{} canvas",
            placements.len(),
            width,
            height
        );

        let mut canvas = self.canvas(width, height)?;
        for placement in placements {
            canvas.write(&placement.block, placement.x, placement.y, true)?;
        }

        Ok(canvas.render())
    }

    /// Fresh canvas, after checking the size ceiling
    fn canvas(&self, width: usize, height: usize) -> Result<Canvas> {
        if width > self.options.max_width || height > self.options.max_height {
            return Err(GardenError::InvalidDimension {
                width,
                height,
                reason: format!(
                    "exceeds the {}x{} limit",
                    self.options.max_width, self.options.max_height
                ),
            });
        }
        Canvas::with_background(width, height, self.options.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Registry with the two fixed shapes used throughout these tests
    fn fake_registry() -> PlantRegistry {
        let mut registry = PlantRegistry::new();
        registry.register("flower", |_: &PlantParams| TextBlock::from_lines(["/\\", "| |"]));
        registry.register("tree", |_: &PlantParams| {
            TextBlock::from_lines([" /^\\ ", "/^^^\\", " ||| ", " ||| "])
        });
        registry.register("nothing", |_: &PlantParams| TextBlock::default());
        registry
    }

    #[test]
    fn test_flower_and_tree_row() {
        let composer = GardenComposer::new(fake_registry());
        let lines = composer
            .compose(&[PlantSpec::of("flower"), PlantSpec::of("tree")], &LayoutPolicy::Row)
            .unwrap();

        assert_eq!(
            lines,
            vec![
                "      /^\\ ",
                "     /^^^\\",
                "/\\    ||| ",
                "| |   ||| ",
            ]
        );
        assert!(lines.iter().all(|line| line.chars().count() == 10));
    }

    #[test]
    fn test_no_plants_is_one_blank_cell() {
        let composer = GardenComposer::new(fake_registry());
        let lines = composer.compose(&[], &LayoutPolicy::Row).unwrap();
        assert_eq!(lines, vec![" "]);
    }

    #[test]
    fn test_empty_block_has_no_footprint() {
        let composer = GardenComposer::new(fake_registry());
        let lines = composer
            .compose(&[PlantSpec::of("nothing")], &LayoutPolicy::Row)
            .unwrap();
        assert_eq!(lines, vec![" "]);

        let lines = composer
            .compose(
                &[PlantSpec::of("flower"), PlantSpec::of("nothing"), PlantSpec::of("flower")],
                &LayoutPolicy::Row,
            )
            .unwrap();
        assert_eq!(lines, vec!["/\\   /\\ ", "| |  | |"]);
    }

    #[test]
    fn test_unknown_kind_aborts() {
        let composer = GardenComposer::new(fake_registry());
        let result = composer.compose(
            &[PlantSpec::of("flower"), PlantSpec::of("cactus")],
            &LayoutPolicy::Row,
        );
        assert!(matches!(
            result,
            Err(GardenError::UnknownPlantKind { ref kind }) if kind == "cactus"
        ));
    }

    #[test]
    fn test_ceiling_rejects_huge_canvas() {
        let options = ComposeOptions {
            max_width: 8,
            ..ComposeOptions::default()
        };
        let composer = GardenComposer::with_options(fake_registry(), options);
        let result = composer.compose(
            &[PlantSpec::of("flower"), PlantSpec::of("tree")],
            &LayoutPolicy::Row,
        );
        assert!(matches!(
            result,
            Err(GardenError::InvalidDimension { width: 10, height: 4, .. })
        ));
    }

    #[test]
    fn test_huge_gap_hits_the_ceiling() {
        let options = ComposeOptions {
            gap: usize::MAX,
            ..ComposeOptions::default()
        };
        let composer = GardenComposer::with_options(fake_registry(), options);
        let result = composer.compose(
            &[PlantSpec::of("flower"), PlantSpec::of("flower")],
            &LayoutPolicy::Row,
        );
        assert!(matches!(
            result,
            Err(GardenError::InvalidDimension { width: usize::MAX, .. })
        ));
    }

    #[test]
    fn test_far_away_placements() {
        let composer = GardenComposer::new(fake_registry());
        let far = [Placement::new(TextBlock::from_lines(["ab"]), i64::MAX, i64::MAX)];

        let lines = composer.compose_explicit(&far, Some((2, 1))).unwrap();
        assert_eq!(lines, vec!["  "]);

        let result = composer.compose_explicit(&far, None);
        assert!(matches!(result, Err(GardenError::InvalidDimension { .. })));
    }

    #[test]
    fn test_custom_gap_and_background() {
        let options = ComposeOptions {
            gap: 1,
            background: '.',
            ..ComposeOptions::default()
        };
        let composer = GardenComposer::with_options(fake_registry(), options);
        let lines = composer
            .compose(&[PlantSpec::of("flower"), PlantSpec::of("flower")], &LayoutPolicy::Row)
            .unwrap();
        // The flower's own trailing padding is background too
        assert_eq!(lines, vec!["/\\../\\.", "| |.| |"]);
    }

    #[test]
    fn test_grid_layout() {
        let composer = GardenComposer::new(fake_registry());
        let plants = vec![PlantSpec::of("flower"); 3];
        let lines = composer
            .compose(&plants, &LayoutPolicy::Grid { columns: 2 })
            .unwrap();
        assert_eq!(lines, vec!["/\\   /\\ ", "| |  | |", "        ", "/\\      ", "| |     "]);
    }

    #[test]
    fn test_stack_layout() {
        let composer = GardenComposer::new(fake_registry());
        let lines = composer
            .compose(&[PlantSpec::of("flower"), PlantSpec::of("flower")], &LayoutPolicy::Stack)
            .unwrap();
        assert_eq!(lines, vec!["/\\ ", "| |", "   ", "/\\ ", "| |"]);
    }

    #[test]
    fn test_explicit_origins_overlap_in_order() {
        let composer = GardenComposer::new(fake_registry());
        let layout = LayoutPolicy::Explicit(vec![(0, 0), (1, 0)]);
        let lines = composer
            .compose(&[PlantSpec::of("flower"), PlantSpec::of("flower")], &layout)
            .unwrap();
        // Second flower paints over the first, interior space included
        assert_eq!(lines, vec!["//\\ ", "|| |"]);
    }

    #[test]
    fn test_compose_explicit_clips() {
        let composer = GardenComposer::new(fake_registry());
        let flower = TextBlock::from_lines(["/\\", "| |"]);
        let placements = [
            Placement::new(flower.clone(), -1, 0),
            Placement::new(flower, 2, 1),
        ];
        let lines = composer.compose_explicit(&placements, Some((4, 2))).unwrap();
        assert_eq!(lines, vec!["\\   ", " |/\\"]);
    }

    #[test]
    fn test_compose_explicit_bounding_box() {
        let composer = GardenComposer::new(fake_registry());
        let placements = [Placement::new(TextBlock::from_lines(["ab"]), 1, 1)];
        let lines = composer.compose_explicit(&placements, None).unwrap();
        assert_eq!(lines, vec!["   ", " ab"]);

        let lines = composer.compose_explicit(&[], None).unwrap();
        assert_eq!(lines, vec![" "]);
    }

    #[test]
    fn test_compose_explicit_zero_size() {
        let composer = GardenComposer::new(fake_registry());
        let result = composer.compose_explicit(&[], Some((0, 3)));
        assert!(matches!(result, Err(GardenError::InvalidDimension { .. })));
    }
}
