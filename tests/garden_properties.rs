// Property tests for the canvas and the row layout
//
// Run with: cargo test --test garden_properties

use ascii_garden::{
    Canvas, GardenComposer, GardenError, LayoutPolicy, PlantParams, PlantRegistry, PlantSpec,
    TextBlock,
};
use proptest::prelude::*;

/// Blocks drawn from non-background characters, possibly ragged
fn block_strategy(max_w: usize, max_h: usize) -> impl Strategy<Value = TextBlock> {
    prop::collection::vec("[a-z#@]{0,8}", 0..=max_h).prop_map(move |lines| {
        TextBlock::new(
            lines
                .into_iter()
                .map(|line| line.chars().take(max_w).collect())
                .collect(),
        )
    })
}

/// A solid `w` x `h` block of one character
fn solid(ch: char, w: usize, h: usize) -> TextBlock {
    TextBlock::new(vec![std::iter::repeat(ch).take(w).collect(); h])
}

fn grid_of(canvas: &Canvas) -> Vec<Vec<char>> {
    canvas.render().iter().map(|row| row.chars().collect()).collect()
}

proptest! {
    #[test]
    fn blank_canvas_is_all_background(w in 1usize..60, h in 1usize..30) {
        let canvas = Canvas::new(w, h).unwrap();
        let lines = canvas.render();
        prop_assert_eq!(lines.len(), h);
        for line in lines {
            prop_assert_eq!(line, " ".repeat(w));
        }
    }

    #[test]
    fn write_in_bounds_changes_only_the_block(
        block in block_strategy(8, 6),
        x in 0usize..10,
        y in 0usize..10,
    ) {
        let mut canvas = Canvas::with_background(20, 20, '.').unwrap();
        canvas.write(&block, x as i64, y as i64, false).unwrap();
        let grid = grid_of(&canvas);

        for (row, cells) in grid.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                let source = row
                    .checked_sub(y)
                    .and_then(|i| block.lines().get(i))
                    .and_then(|line| col.checked_sub(x).and_then(|j| line.chars().nth(j)));
                prop_assert_eq!(cell, source.unwrap_or('.'));
            }
        }
    }

    #[test]
    fn later_write_wins_where_it_covers(
        (aw, ah) in (1usize..8, 1usize..8),
        (bw, bh) in (1usize..8, 1usize..8),
        (bx, by) in (0usize..8, 0usize..8),
    ) {
        let mut canvas = Canvas::new(16, 16).unwrap();
        canvas.write(&solid('A', aw, ah), 0, 0, false).unwrap();
        canvas.write(&solid('B', bw, bh), bx as i64, by as i64, false).unwrap();
        let grid = grid_of(&canvas);

        for (row, cells) in grid.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                let in_b = (bx..bx + bw).contains(&col) && (by..by + bh).contains(&row);
                let in_a = col < aw && row < ah;
                let expected = if in_b { 'B' } else if in_a { 'A' } else { ' ' };
                prop_assert_eq!(cell, expected);
            }
        }
    }

    #[test]
    fn clipping_keeps_only_in_bounds_cells(
        (w, h) in (1usize..6, 1usize..6),
        x in -8i64..12,
        y in -8i64..12,
    ) {
        let block = solid('#', w, h);

        let mut clipped = Canvas::new(6, 6).unwrap();
        clipped.write(&block, x, y, true).unwrap();
        for (row, cells) in grid_of(&clipped).iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                let (r, c) = (row as i64, col as i64);
                let covered = c >= x && c < x + w as i64 && r >= y && r < y + h as i64;
                prop_assert_eq!(cell, if covered { '#' } else { ' ' });
            }
        }

        let fits = x >= 0 && y >= 0 && x + w as i64 <= 6 && y + h as i64 <= 6;
        let mut strict = Canvas::new(6, 6).unwrap();
        strict.write(&solid('o', 2, 2), 2, 2, false).unwrap();
        let before = strict.render();
        let result = strict.write(&block, x, y, false);
        if fits {
            prop_assert!(result.is_ok());
        } else {
            let out_of_bounds = matches!(result, Err(GardenError::OutOfBounds { .. }));
            prop_assert!(out_of_bounds);
            prop_assert_eq!(strict.render(), before);
        }
    }

    #[test]
    fn strict_write_succeeds_exactly_when_every_character_fits(
        block in block_strategy(8, 6),
        x in -4i64..10,
        y in -4i64..10,
    ) {
        let (w, h) = (6i64, 5i64);
        let every_char_fits = block.lines().iter().enumerate().all(|(i, line)| {
            let len = line.chars().count() as i64;
            let row = y + i as i64;
            len == 0 || (x >= 0 && x + len <= w && row >= 0 && row < h)
        });

        let mut canvas = Canvas::with_background(w as usize, h as usize, '.').unwrap();
        let result = canvas.write(&block, x, y, false);

        if every_char_fits {
            prop_assert!(result.is_ok());
            // Same picture as a clipped write, since nothing needed clipping
            let mut clipped = Canvas::with_background(w as usize, h as usize, '.').unwrap();
            clipped.write(&block, x, y, true).unwrap();
            prop_assert_eq!(canvas.render(), clipped.render());
        } else {
            let out_of_bounds = matches!(result, Err(GardenError::OutOfBounds { .. }));
            prop_assert!(out_of_bounds);
            prop_assert_eq!(canvas.render(), vec![".".repeat(w as usize); h as usize]);
        }
    }

    #[test]
    fn row_layout_shares_one_ground_line(heights in prop::collection::vec(0usize..6, 0..6)) {
        let mut registry = PlantRegistry::new();
        for (i, &h) in heights.iter().enumerate() {
            registry.register(format!("p{}", i), move |_: &PlantParams| solid('*', 2, h));
        }
        let plants: Vec<_> = (0..heights.len()).map(|i| PlantSpec::of(format!("p{}", i))).collect();

        let composer = GardenComposer::new(registry);
        let lines = composer.compose(&plants, &LayoutPolicy::Row).unwrap();
        let tallest = heights.iter().copied().max().unwrap_or(0);

        prop_assert_eq!(lines.len(), tallest.max(1));
        if tallest > 0 {
            // Every non-empty plant has a '*' on the bottom line
            let placed = heights.iter().filter(|&&h| h > 0).count();
            let bottom = lines.last().unwrap();
            prop_assert_eq!(bottom.matches("**").count(), placed);
        }
    }
}
