//! The three connector shape searches.
//!
//! Every search is written against a [`Clearance`] view, so the two tiles being connected never
//! block their own runs. Bends that land on a sentinel line outside the board are never handed to
//! the clearance primitive; only the in-board runs leading to them are checked.

use strum::VariantArray;

use crate::clearance::Clearance;
use crate::path::Path;
use crate::position::{Axis, Coord, Position};
use crate::rules::Rules;
use crate::shape::{Shape, SquareStep};

/// Run the search for one shape family. The path found always runs from `a` to `b`.
pub(crate) fn find<V: Copy>(shape: Shape, clear: &Clearance<V>, a: Position, b: Position, rules: &Rules) -> Option<Path> {
    let path = match shape {
        Shape::Straight => straight(clear, a, b),
        Shape::OneBend => one_bend(clear, a, b),
        Shape::TwoBend => two_bend(clear, a, b, rules),
    }?;

    // bent searches order the tiles near-to-far along their sweep
    Some(if path.start() == a { path } else { path.reversed() })
}

/// `a` and `b` share a row or column and the run between them is clear.
pub(crate) fn straight<V: Copy>(clear: &Clearance<V>, a: Position, b: Position) -> Option<Path> {
    if !a.is_aligned_with(b) {
        return None;
    }

    clear.line(a, b).then(|| Path::straight(a, b))
}

/// A single turn between the two tiles: vertical-first (sweeping rows) before horizontal-first (sweeping columns).
pub(crate) fn one_bend<V: Copy>(clear: &Clearance<V>, a: Position, b: Position) -> Option<Path> {
    [Axis::Row, Axis::Column].into_iter()
        .find_map(|sweep| bend_between(clear, a, b, sweep))
}

/// Try each `sweep` coordinate after the nearer tile's, up to and including the farther tile's own line.
///
/// Lines strictly between the tiles give a Z; the farther tile's line gives an L, whose last segment is empty.
fn bend_between<V: Copy>(clear: &Clearance<V>, a: Position, b: Position, sweep: Axis) -> Option<Path> {
    let (near, far) = if a.along(sweep) > b.along(sweep) { (b, a) } else { (a, b) };

    (near.along(sweep) + 1..=far.along(sweep))
        .find_map(|at| u_turn(clear, near, far, sweep, at, Shape::OneBend))
}

/// The three-run test shared by every bent shape: from `near` out to line `at` on `sweep`,
/// across that line, and back in to `far`.
fn u_turn<V: Copy>(clear: &Clearance<V>, near: Position, far: Position, sweep: Axis, at: Coord, shape: Shape) -> Option<Path> {
    let (near_bend, far_bend) = (near.with(sweep, at), far.with(sweep, at));

    (clear.line(near, near_bend) && clear.line(near_bend, far_bend) && clear.line(far_bend, far))
        .then(|| Path::bent(shape, [near, near_bend, far_bend, far]))
}

/// Detours past the tiles' span: first the same-border shortcut, then one probe per [`SquareStep`] in order.
pub(crate) fn two_bend<V: Copy>(clear: &Clearance<V>, a: Position, b: Position, rules: &Rules) -> Option<Path> {
    if rules.wraparound {
        if let Some(path) = along_border(clear, a, b) {
            return Some(path);
        }
    }

    SquareStep::VARIANTS.iter()
        .find_map(|step| probe(clear, a, b, *step, rules))
}

/// Both tiles sit on the same outer line, so the connector can step straight off the board and back on.
/// No clearance is needed: each tile's run to the sentinel line is only the tile itself.
fn along_border<V: Copy>(clear: &Clearance<V>, a: Position, b: Position) -> Option<Path> {
    let dims = clear.dims();

    SquareStep::VARIANTS.iter().find_map(|step| {
        let axis = step.axis();
        let border = step.border(dims);
        (a.along(axis) == border && b.along(axis) == border).then(|| {
            let outside = step.sentinel(dims);
            Path::bent(Shape::TwoBend, [a, a.with(axis, outside), b.with(axis, outside), b])
        })
    })
}

/// Sweep lines from just past the nearer tile toward the border in the direction of `step`.
///
/// Vertical steps order the tiles by column and sweep rows; horizontal steps order them by row and sweep columns.
/// If no in-board line works, both tiles may still run clear to the border and meet on the sentinel line beyond it.
fn probe<V: Copy>(clear: &Clearance<V>, a: Position, b: Position, step: SquareStep, rules: &Rules) -> Option<Path> {
    let dims = clear.dims();
    let sweep = step.axis();
    let lane = sweep.other();
    let (near, far) = if a.along(lane) > b.along(lane) { (b, a) } else { (a, b) };

    let delta = step.delta();
    let border = step.border(dims);
    let start = near.along(sweep) + delta;
    // zero or negative when `near` already sits on the border
    let candidates = (border - start) * delta + 1;

    let inside = (0..candidates.max(0))
        .map(|k| start + k * delta)
        .find_map(|at| u_turn(clear, near, far, sweep, at, Shape::TwoBend));
    if inside.is_some() || !rules.wraparound {
        return inside;
    }

    (clear.line(near, near.with(sweep, border)) && clear.line(far, far.with(sweep, border))).then(|| {
        let outside = step.sentinel(dims);
        Path::bent(Shape::TwoBend, [near, near.with(sweep, outside), far.with(sweep, outside), far])
    })
}
