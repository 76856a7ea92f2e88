//! Property-based tests for grid construction and adjacency queries

use proptest::prelude::*;
use puzzle_grid::{Adjacency, CellInit, Coordinates, Grid, Metric, ShapeError};

/// Build a `width × height` grid whose values record their own coordinates.
fn coordinate_grid(width: usize, height: usize) -> Grid<(usize, usize)> {
    let rows = (0..height)
        .map(|y| (0..width).map(|x| (x, y)).collect())
        .collect();
    Grid::from_values(rows).expect("rectangular by construction")
}

/// How many neighbors a position of a `width × height` grid must have.
fn expected_neighbors(x: usize, y: usize, width: usize, height: usize, adjacency: Adjacency) -> usize {
    let horizontal = usize::from(x > 0) + usize::from(x + 1 < width);
    let vertical = usize::from(y > 0) + usize::from(y + 1 < height);
    match adjacency {
        Adjacency::Cardinal => horizontal + vertical,
        Adjacency::Diagonal => (horizontal + 1) * (vertical + 1) - 1,
    }
}

proptest! {
    /// *For all* dense inputs whose rows are not all equal length,
    /// construction fails with a shape error before any cell exists.
    #[test]
    fn ragged_dense_input_is_rejected(
        width in 1usize..8,
        height in 2usize..8,
        bad_row in 0usize..8,
        shrink in 1usize..8,
    ) {
        let bad_row = bad_row % height;
        // Never produce the expected width for the bad row. A bad row of
        // width zero in row 0 would legitimately fix the grid width at 0,
        // so steer clear of that case too.
        let bad_width = if shrink % (width + 1) == width || (bad_row == 0 && shrink % (width + 1) == 0) {
            width + 1
        } else {
            shrink % (width + 1)
        };

        let rows: Vec<Vec<u8>> = (0..height)
            .map(|y| vec![0u8; if y == bad_row { bad_width } else { width }])
            .collect();

        let is_ragged = matches!(
            Grid::from_values(rows),
            Err(ShapeError::RaggedRows { .. })
        );
        prop_assert!(is_ragged);
    }

    /// *For every* constructed grid of width W and height H, `cells` yields
    /// exactly W×H handles and every coordinate appears exactly once, in
    /// row-major order.
    #[test]
    fn cells_cover_every_coordinate_exactly_once(width in 1usize..10, height in 1usize..10) {
        let grid = coordinate_grid(width, height);

        prop_assert_eq!(grid.len(), width * height);
        let mut expected = (0..height).flat_map(|y| (0..width).map(move |x| (x, y)));
        for cell in grid.cells() {
            let c = cell.coordinates();
            prop_assert_eq!(Some((c.x, c.y)), expected.next());
            prop_assert_eq!(*cell.value(), (c.x, c.y));
        }
        prop_assert_eq!(expected.next(), None);
    }

    /// Interior positions have 4 cardinal / 8 diagonal neighbors; edges and
    /// corners lose exactly the out-of-bounds ones.
    #[test]
    fn neighbor_counts_match_the_position_class(width in 1usize..10, height in 1usize..10) {
        let grid = coordinate_grid(width, height);

        for cell in grid.cells() {
            let c = cell.coordinates();
            for adjacency in [Adjacency::Cardinal, Adjacency::Diagonal] {
                prop_assert_eq!(
                    cell.adjacent(adjacency).len(),
                    expected_neighbors(c.x, c.y, width, height, adjacency),
                    "at {} with {:?}", c, adjacency
                );
            }
        }
    }

    /// Every reported neighbor is exactly one step away under the metric
    /// matching the adjacency mode.
    #[test]
    fn neighbors_are_one_step_away(width in 2usize..8, height in 2usize..8) {
        let grid = coordinate_grid(width, height);

        for cell in grid.cells() {
            for neighbor in cell.adjacent(Adjacency::Cardinal) {
                prop_assert_eq!(cell.distance_to(neighbor, Metric::Cardinal), Ok(1));
            }
            for neighbor in cell.adjacent(Adjacency::Diagonal) {
                prop_assert_eq!(cell.distance_to(neighbor, Metric::Diagonal), Ok(1));
            }
        }
    }

    /// Distance is symmetric and matches the Manhattan/Chebyshev formulas.
    #[test]
    fn distance_metrics_hold(
        x1 in 0usize..10_000,
        y1 in 0usize..10_000,
        x2 in 0usize..10_000,
        y2 in 0usize..10_000,
    ) {
        let a = Coordinates::new(x1, y1);
        let b = Coordinates::new(x2, y2);
        let (dx, dy) = (x1.abs_diff(x2), y1.abs_diff(y2));

        prop_assert_eq!(a.distance_to(b, Metric::Cardinal), dx + dy);
        prop_assert_eq!(a.distance_to(b, Metric::Diagonal), dx.max(dy));
        for metric in [Metric::Cardinal, Metric::Diagonal] {
            prop_assert_eq!(a.distance_to(b, metric), b.distance_to(a, metric));
        }
    }

    /// Sparse construction covers the bounding rectangle of its keys, using
    /// the explicit constructor where one is mapped and the default elsewhere.
    #[test]
    fn sparse_fill_respects_the_bounding_rectangle(
        max_x in 0usize..8,
        max_y in 0usize..8,
    ) {
        let mut entries: std::collections::HashMap<Coordinates, CellInit<bool>> =
            std::collections::HashMap::new();
        entries.insert(Coordinates::new(max_x, max_y), Box::new(|_| true));
        entries.insert(Coordinates::new(0, 0), Box::new(|_| true));
        let grid = Grid::from_sparse(entries, |_| false);

        prop_assert_eq!(grid.width(), max_x + 1);
        prop_assert_eq!(grid.height(), max_y + 1);
        let mapped = grid.cells().filter(|cell| *cell.value()).count();
        let expected_mapped = if max_x == 0 && max_y == 0 { 1 } else { 2 };
        prop_assert_eq!(mapped, expected_mapped);
    }
}

#[test]
fn scan_order_is_preserved_literally() {
    // 3×3 grid centered on (1,1): the full diagonal scan hits every
    // neighbor and must come back as N, NE, E, SE, S, SW, W, NW.
    let grid = coordinate_grid(3, 3);
    let center = grid.cell(Coordinates::new(1, 1)).unwrap();

    let order: Vec<(usize, usize)> = center
        .adjacent(Adjacency::Diagonal)
        .into_iter()
        .map(|cell| *cell.value())
        .collect();
    assert_eq!(
        order,
        [
            (1, 0), // N
            (2, 0), // NE
            (2, 1), // E
            (2, 2), // SE
            (1, 2), // S
            (0, 2), // SW
            (0, 1), // W
            (0, 0), // NW
        ]
    );

    let cardinal: Vec<(usize, usize)> = center
        .adjacent(Adjacency::Cardinal)
        .into_iter()
        .map(|cell| *cell.value())
        .collect();
    assert_eq!(cardinal, [(1, 0), (2, 1), (1, 2), (0, 1)]);
}
