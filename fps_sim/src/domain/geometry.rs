// Ray and sphere-cast queries against the flat arena.

use super::state::{Arena, Vec2};

/// Distance along a unit `direction` until the ray touches the circle.
///
/// Returns `Some(0.0)` when the origin already lies inside the circle.
pub fn ray_circle(origin: Vec2, direction: Vec2, center: Vec2, radius: f32) -> Option<f32> {
    let to_origin = origin - center;
    let c = to_origin.dot(to_origin) - radius * radius;
    if c <= 0.0 {
        return Some(0.0);
    }
    let b = to_origin.dot(direction);
    if b > 0.0 {
        // Origin outside and pointing away.
        return None;
    }
    let discriminant = b * b - c;
    if discriminant < 0.0 {
        return None;
    }
    Some(-b - discriminant.sqrt())
}

/// Distance along a unit `direction` until the ray leaves the square `half_extent`.
pub fn ray_walls(origin: Vec2, direction: Vec2, half_extent: f32) -> Option<f32> {
    let exit = |position: f32, heading: f32| -> Option<f32> {
        if heading > 0.0 {
            Some((half_extent - position) / heading)
        } else if heading < 0.0 {
            Some((-half_extent - position) / heading)
        } else {
            None
        }
    };

    match (exit(origin.x, direction.x), exit(origin.z, direction.z)) {
        (Some(x), Some(z)) => Some(x.min(z).max(0.0)),
        (Some(t), None) | (None, Some(t)) => Some(t.max(0.0)),
        (None, None) => None,
    }
}

/// What a cast ran into first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CastTarget {
    Wall,
    Player,
    Enemy(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastHit {
    pub target: CastTarget,
    pub distance: f32,
}

impl CastHit {
    fn nearest(current: Option<CastHit>, candidate: Option<CastHit>) -> Option<CastHit> {
        match (current, candidate) {
            (Some(a), Some(b)) => Some(if b.distance < a.distance { b } else { a }),
            (a, b) => a.or(b),
        }
    }
}

/// Sweeps a sphere of `cast_radius` and reports the closest hit.
///
/// Circles are inflated and walls pulled in by `cast_radius`; a zero radius
/// degrades into a plain raycast.
pub fn sphere_cast(
    origin: Vec2,
    direction: Vec2,
    cast_radius: f32,
    arena: &Arena,
    bodies: impl IntoIterator<Item = (CastTarget, Vec2, f32)>,
) -> Option<CastHit> {
    let wall = ray_walls(origin, direction, arena.half_extent - cast_radius).map(|distance| {
        CastHit {
            target: CastTarget::Wall,
            distance,
        }
    });

    bodies
        .into_iter()
        .filter_map(|(target, center, radius)| {
            ray_circle(origin, direction, center, radius + cast_radius)
                .map(|distance| CastHit { target, distance })
        })
        .fold(wall, |nearest, hit| CastHit::nearest(nearest, Some(hit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_ray_points_at_circle_then_distance_is_to_its_edge() {
        let hit = ray_circle(Vec2::ZERO, Vec2::new(0.0, 1.0), Vec2::new(0.0, 10.0), 1.0);

        assert_eq!(hit, Some(9.0));
    }

    #[test]
    fn when_ray_points_away_then_circle_is_missed() {
        let hit = ray_circle(Vec2::ZERO, Vec2::new(0.0, -1.0), Vec2::new(0.0, 10.0), 1.0);

        assert_eq!(hit, None);
    }

    #[test]
    fn when_ray_passes_beside_circle_then_it_misses() {
        let hit = ray_circle(Vec2::ZERO, Vec2::new(0.0, 1.0), Vec2::new(3.0, 10.0), 1.0);

        assert_eq!(hit, None);
    }

    #[test]
    fn when_origin_is_inside_circle_then_distance_is_zero() {
        let hit = ray_circle(Vec2::new(0.2, 0.0), Vec2::new(1.0, 0.0), Vec2::ZERO, 1.0);

        assert_eq!(hit, Some(0.0));
    }

    #[test]
    fn when_ray_is_diagonal_then_nearest_wall_wins() {
        let direction = Vec2::new(1.0, 1.0).clamp_length(1.0);
        let hit = ray_walls(Vec2::new(5.0, 0.0), direction, 10.0).expect("walls surround");

        assert!((hit - 5.0 * std::f32::consts::SQRT_2).abs() < 1e-4);
    }

    #[test]
    fn when_body_is_closer_than_wall_then_sphere_cast_reports_body() {
        let arena = Arena { half_extent: 20.0 };
        let bodies = [
            (CastTarget::Enemy(7), Vec2::new(0.0, 12.0), 0.5),
            (CastTarget::Player, Vec2::new(0.0, 5.0), 0.5),
        ];

        let hit = sphere_cast(Vec2::ZERO, Vec2::new(0.0, 1.0), 0.75, &arena, bodies)
            .expect("something ahead");

        assert_eq!(hit.target, CastTarget::Player);
        assert!((hit.distance - 3.75).abs() < 1e-4);
    }

    #[test]
    fn when_nothing_is_ahead_then_sphere_cast_reports_wall() {
        let arena = Arena { half_extent: 10.0 };

        let hit = sphere_cast(Vec2::ZERO, Vec2::new(-1.0, 0.0), 0.75, &arena, [])
            .expect("walls surround");

        assert_eq!(hit.target, CastTarget::Wall);
        assert!((hit.distance - 9.25).abs() < 1e-4);
    }
}
