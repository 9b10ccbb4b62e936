//! Corridor topology normalization.

use tracing::debug;

use crate::config::float_cmp::round2;
use crate::geometry::Point;
use crate::model::Corridor;

/// A proper crossing between corridors `first` and `second`.
#[derive(Debug, Clone, Copy)]
struct Crossing {
    first: usize,
    second: usize,
    point: Point,
    split_first: bool,
    split_second: bool,
}

/// Split corridors at interior crossings until none remain.
///
/// Afterwards corridors meet only at shared endpoints. Returns the number
/// of splitting passes performed.
pub fn explode(corridors: &mut Vec<Corridor>) -> usize {
    let mut passes = 0;

    while let Some(crossing) = find_crossing(corridors) {
        debug!(
            "Exploding corridors {} and {} at {}",
            crossing.first, crossing.second, crossing.point
        );

        let mut next = Vec::with_capacity(corridors.len() + 2);
        for (idx, corridor) in corridors.drain(..).enumerate() {
            let split = (idx == crossing.first && crossing.split_first)
                || (idx == crossing.second && crossing.split_second);

            if split {
                let (x, y) = corridor.explode_at(crossing.point);
                next.extend(x);
                next.extend(y);
            } else {
                next.push(corridor);
            }
        }

        *corridors = next;
        passes += 1;
    }

    passes
}

fn find_crossing(corridors: &[Corridor]) -> Option<Crossing> {
    for i in 0..corridors.len() {
        for j in i + 1..corridors.len() {
            let (first, second) = (&corridors[i].line, &corridors[j].line);

            if first.same_segment(second) || first.is_head_on(second) {
                continue;
            }

            let Some(point) = first.intersection(second) else {
                continue;
            };

            if point == first.a() || point == first.b() || point == second.a() || point == second.b()
            {
                continue;
            }

            let split_first = first.contains(&point, false);
            let split_second = second.contains(&point, false);
            if split_first || split_second {
                return Some(Crossing {
                    first: i,
                    second: j,
                    point,
                    split_first,
                    split_second,
                });
            }
        }
    }

    None
}

/// Check whether any two corridors meet (shared endpoint, T or crossing).
///
/// Parallel corridors never count: two collinear pieces of one split
/// corridor share an endpoint without forming a junction.
pub fn has_junction(corridors: &[Corridor]) -> bool {
    (0..corridors.len()).any(|i| {
        (i + 1..corridors.len()).any(|j| {
            let (first, second) = (&corridors[i].line, &corridors[j].line);
            first.slope().map(round2) != second.slope().map(round2) && first.touches(second)
        })
    })
}
