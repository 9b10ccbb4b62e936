//! Corner conflict repair between differently oriented sides.

use tracing::debug;

use super::Solution;
use crate::config::float_cmp::round2;
use crate::config::PULL_DISTANCE;
use crate::geometry::{End, Line};
use crate::model::{Facing, Side};

impl Solution {
    /// Separate sides whose rooms would overlap at a shared corner.
    ///
    /// Each side gets a ghost line offset by [`PULL_DISTANCE`] towards its
    /// facing. Sides whose ghosts cross are in conflict; for a conflicting
    /// pair that is not parallel and meets at a shared endpoint, both
    /// endpoints are pulled back along their own sides. Capacities are reset
    /// afterwards, so this must run before any room is placed.
    pub fn resolve_conflicts(&mut self) {
        let ghosts: Vec<Line> = self.sides.iter().map(ghost_line).collect();

        let mut conflicts = Vec::new();
        for i in 0..ghosts.len() {
            for j in i + 1..ghosts.len() {
                if ghosts[i].intersects_within_bounds(&ghosts[j]) {
                    conflicts.push((i, j));
                }
            }
        }

        for (i, j) in conflicts {
            let first = self.sides[i].line().clone();
            let second = self.sides[j].line().clone();

            if first.slope().map(round2) == second.slope().map(round2) {
                continue;
            }

            if let Some((ei, ej)) = shared_corner(&first, &second) {
                debug!(
                    "Pulling apart {} ({:?}) and {} ({:?})",
                    self.sides[i].name, ei, self.sides[j].name, ej
                );
                self.sides[i].pull_endpoint(ei, PULL_DISTANCE);
                self.sides[j].pull_endpoint(ej, PULL_DISTANCE);
            }
        }

        for side in &mut self.sides {
            side.reset_capacity();
        }
    }
}

/// The side's line offset towards the direction it faces.
fn ghost_line(side: &Side) -> Line {
    let (first, second) = side.line().offset_pair(PULL_DISTANCE);
    let a = side.line().a();
    let g = first.a();

    let pick_first = match side.facing {
        Facing::KD => g.x > a.x && g.y < a.y,
        Facing::K => g.y < a.y,
        Facing::KB => g.x < a.x && g.y < a.y,
        Facing::B => g.x < a.x,
        Facing::GB => g.x < a.x && g.y > a.y,
        Facing::G => g.y > a.y,
        Facing::GD => g.x > a.x && g.y > a.y,
        Facing::D => g.x > a.x,
    };

    if pick_first {
        first
    } else {
        second
    }
}

/// Shared endpoint of two lines, provided neither far end lies inside the
/// other line's bounds.
fn shared_corner(first: &Line, second: &Line) -> Option<(End, End)> {
    [(End::A, End::A), (End::A, End::B), (End::B, End::A), (End::B, End::B)]
        .into_iter()
        .find(|&(ei, ej)| {
            first.endpoint(ei) == second.endpoint(ej)
                && !(first.contains(&second.endpoint(ej.other()), true)
                    || second.contains(&first.endpoint(ei.other()), true))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::model::Corridor;

    fn seed(lines: &[((f64, f64), (f64, f64))]) -> Solution {
        let lines: Vec<Line> = lines
            .iter()
            .map(|&(a, b)| Line::new(a.into(), b.into()))
            .collect();
        let mut solution = Solution::new(crate::model::Climate::Cold, lines.clone());
        for (i, line) in lines.into_iter().enumerate() {
            let corridor = Corridor::template(line);
            solution.push_side(corridor.side(End::A, format!("{}a", i + 1)));
            solution.push_side(corridor.side(End::B, format!("{}b", i + 1)));
        }
        solution
    }

    #[test]
    fn test_single_corridor_has_no_conflict() {
        let mut s = seed(&[((0.0, 0.0), (20.0, 0.0))]);
        s.resolve_conflicts();
        for side in s.sides() {
            assert!((side.length() - 20.0).abs() < 1e-9);
            assert!((side.remaining() - 20.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_l_corner_pulls_inner_sides() {
        // Horizontal corridor meeting a vertical one at (20, 0).
        let mut s = seed(&[((0.0, 0.0), (20.0, 0.0)), ((20.0, 0.0), (20.0, 20.0))]);
        s.resolve_conflicts();

        let shortened: Vec<&Side> = s
            .sides()
            .iter()
            .filter(|side| side.length() < 20.0 - 1e-6)
            .collect();
        // Only the two sides facing into the inner corner overlap.
        let names: Vec<&str> = shortened.iter().map(|side| &*side.name).collect();
        assert_eq!(names, vec!["1b", "2b"]);
        let corner = Point::new(20.0, 0.0);
        for side in &shortened {
            assert!((side.length() - 18.0).abs() < 1e-6);
            assert!((side.remaining() - side.length()).abs() < 1e-9);
            assert!(side.line().a() != corner && side.line().b() != corner);
        }
    }

    #[test]
    fn test_ghost_follows_facing() {
        let line = Line::new(Point::new(0.0, 0.0), Point::new(20.0, 0.0));
        let north = Side::new(0, End::A, Facing::K, "1a", line.clone());
        let south = Side::new(0, End::B, Facing::G, "1b", line);
        assert!(ghost_line(&north).a().y < 0.0);
        assert!(ghost_line(&south).a().y > 0.0);
    }
}
