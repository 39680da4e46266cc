use std::collections::BTreeSet;

use polyfold::{
    Direction2, PlanePolycube, Polycube, Position2, Position3, SquareType, SurfaceGraph, Unfolding,
};
use proptest::prelude::*;

/// The 4-connected component of `cells` containing the first cell, in
/// the order it is discovered.
fn component(cells: &[(i64, i64)]) -> Vec<Position2> {
    let all: BTreeSet<Position2> = cells.iter().map(|(x, y)| Position2::new(*x, *y)).collect();
    let start = Position2::new(cells[0].0, cells[0].1);

    let mut seen = vec![start];
    let mut i = 0;
    while i < seen.len() {
        for n in seen[i].neighbors() {
            if all.contains(&n) && !seen.contains(&n) {
                seen.push(n);
            }
        }
        i += 1;
    }
    seen
}

fn arb_shape() -> impl Strategy<Value = Vec<Position2>> {
    prop::collection::vec((0i64..7, 0i64..7), 1..40).prop_map(|cells| component(&cells))
}

/// Squares of `unfolding` with no occupied 4-neighbour.
fn loose_squares(unfolding: &Unfolding) -> Vec<Position2> {
    if unfolding.len() < 2 {
        return Vec::new();
    }
    unfolding
        .squares()
        .map(|s| s.pos)
        .filter(|p| p.neighbors().iter().all(|n| unfolding.get(*n).is_none()))
        .collect()
}

fn flat(cells: &[Position2], z: i64) -> Polycube {
    cells.iter().map(|p| Position3::new(p.x, p.y, z)).collect()
}

proptest! {
    #[test]
    fn projection_round_trips(shape in arb_shape(), z in -5i64..5) {
        let cube = flat(&shape, z);
        let plane = PlanePolycube::project(&cube).unwrap();

        prop_assert_eq!(plane.lift(), cube);
    }

    #[test]
    fn circumference_and_hole_sides_cover_perimeter(shape in arb_shape()) {
        let plane = PlanePolycube::project(&flat(&shape, 0)).unwrap();

        let perimeter = plane
            .cubes()
            .flat_map(|c| c.pos.neighbors())
            .filter(|n| !plane.contains(*n))
            .count();

        prop_assert_eq!(plane.circumference().len() + plane.hole_sides().count(), perimeter);
        if plane.holes().is_empty() {
            prop_assert_eq!(plane.circumference().len(), perimeter);
        }

        // Every traced side is marked on its cube, and nothing else is.
        let marked: usize = plane
            .cubes()
            .map(|c| Direction2::ALL.iter().filter(|d| c.on_circumference(**d)).count())
            .sum();
        prop_assert_eq!(marked, plane.circumference().len());
    }

    #[test]
    fn holes_partition_hole_cubes(shape in arb_shape()) {
        let plane = PlanePolycube::project(&flat(&shape, 0)).unwrap();

        let mut union = BTreeSet::new();
        for hole in plane.holes() {
            prop_assert!(!hole.is_empty());
            for cell in hole {
                prop_assert!(union.insert(*cell), "{:?} is in two holes", cell);
                prop_assert!(!plane.contains(*cell));
            }
        }
        prop_assert_eq!(&union, plane.hole_cubes());
    }

    #[test]
    fn unfoldings_never_overlap(shape in arb_shape()) {
        let plane = PlanePolycube::project(&flat(&shape, 0)).unwrap();

        if let Some(unfolding) = plane.unfold() {
            let n = plane.len();
            let p = plane.circumference().len();
            let walls = plane.hole_sides().count();

            prop_assert_eq!(unfolding.count(SquareType::TopBase), n);
            prop_assert_eq!(unfolding.count(SquareType::BottomBase), n);
            prop_assert_eq!(unfolding.count(SquareType::Circumference), p);
            prop_assert_eq!(unfolding.count(SquareType::Hole), walls);
            prop_assert_eq!(unfolding.len(), 2 * n + p + walls);
        }
    }

    #[test]
    fn every_strategy_keeps_squares_apart(shape in arb_shape()) {
        let plane = PlanePolycube::project(&flat(&shape, 0)).unwrap();
        let expected = 2 * plane.len() + plane.circumference().len() + plane.hole_sides().count();

        for unfolding in [
            plane.unfold_orthotree(),
            plane.unfold_no_holes(),
            plane.unfold_unit_holes(),
            plane.unfold_wide_holes(),
        ]
        .into_iter()
        .flatten()
        {
            prop_assert_eq!(unfolding.len(), expected);
        }
    }

    #[test]
    fn no_square_is_left_loose(shape in arb_shape()) {
        let plane = PlanePolycube::project(&flat(&shape, 0)).unwrap();

        for unfolding in [
            plane.unfold(),
            plane.unfold_orthotree(),
            plane.unfold_no_holes(),
            plane.unfold_unit_holes(),
            plane.unfold_wide_holes(),
        ]
        .into_iter()
        .flatten()
        {
            let loose = loose_squares(&unfolding);
            prop_assert!(loose.is_empty(), "{:?} touch nothing", loose);
        }
    }

    #[test]
    fn connected_matches_reachability(cells in prop::collection::vec((0i64..4, 0i64..4, 0i64..4), 1..20)) {
        let cube: Polycube = cells.iter().map(|(x, y, z)| Position3::new(*x, *y, *z)).collect();

        // Reference: grow the set of reached cubes until it stops changing.
        let all: BTreeSet<Position3> = cube.cubes().map(|c| c.pos).collect();
        let mut reached = BTreeSet::from([*all.iter().next().unwrap()]);
        loop {
            let next: BTreeSet<Position3> = reached
                .iter()
                .flat_map(|p| p.neighbors())
                .filter(|p| all.contains(p))
                .chain(reached.iter().copied())
                .collect();
            if next.len() == reached.len() {
                break;
            }
            reached = next;
        }

        prop_assert_eq!(cube.connected(), reached.len() == all.len());
        if cube.orthotree() {
            prop_assert!(cube.connected());
        }
    }

    #[test]
    fn surface_graph_is_reciprocal(cells in prop::collection::vec((0i64..3, 0i64..3, 0i64..3), 1..15)) {
        let cube: Polycube = cells.iter().map(|(x, y, z)| Position3::new(*x, *y, *z)).collect();
        let graph = SurfaceGraph::build(&cube);

        let exposed = cube
            .cubes()
            .flat_map(|c| c.pos.neighbors())
            .filter(|n| !cube.contains(*n))
            .count();

        prop_assert_eq!(graph.len(), exposed);
        prop_assert!(graph.reciprocal());
    }
}
