//! Reflection and overlap math for axis-aligned table geometry
//!
//! The ball travels along an angle measured from the +x axis,
//! counter-clockwise. Paddle faces are vertical surfaces, table walls are
//! horizontal ones, so both reflections reduce to fixed angle maps.

use std::f32::consts::PI;

use crate::normalize_angle;

/// Does the ball's vertical extent overlap the paddle's?
///
/// Two-sided test: the ball's top edge must be above the paddle's bottom edge
/// and its bottom edge below the paddle's top edge.
#[inline]
pub fn vertical_overlap(
    ball_y: f32,
    ball_radius: f32,
    paddle_y: f32,
    paddle_half_y: f32,
) -> bool {
    ball_y + ball_radius > paddle_y - paddle_half_y
        && ball_y - ball_radius < paddle_y + paddle_half_y
}

/// Reflect a travel angle off a paddle face (vertical surface).
///
/// `-(direction + π)` flips the horizontal velocity component and preserves
/// the vertical one: `cos(-(d + π)) = -cos d`, `sin(-(d + π)) = sin d`.
/// The result is normalized to [-π, π).
#[inline]
pub fn reflect_off_paddle(direction: f32) -> f32 {
    normalize_angle(-(direction + PI))
}

/// Reflect a travel angle off a horizontal wall.
///
/// Negation flips the vertical velocity component and preserves the
/// horizontal one.
#[inline]
pub fn reflect_off_wall(direction: f32) -> f32 {
    -direction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertical_overlap_hit_and_miss() {
        // Paddle centered at y=0, half height 0.5
        assert!(vertical_overlap(0.0, 0.1, 0.0, 0.5));
        assert!(vertical_overlap(0.55, 0.1, 0.0, 0.5));
        assert!(!vertical_overlap(0.7, 0.1, 0.0, 0.5));
        assert!(!vertical_overlap(-0.7, 0.1, 0.0, 0.5));
    }

    #[test]
    fn test_vertical_overlap_edge_touch_is_miss() {
        // Strict inequalities: exact edge contact does not count
        assert!(!vertical_overlap(0.6, 0.1, 0.0, 0.5));
    }

    #[test]
    fn test_paddle_reflection_flips_horizontal() {
        let d = 0.3_f32;
        let r = reflect_off_paddle(d);
        assert!((r.cos() + d.cos()).abs() < 1e-5);
        assert!((r.sin() - d.sin()).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_reflection_preserves_vertical_for_downward_travel() {
        let d = -0.8_f32;
        let r = reflect_off_paddle(d);
        assert!((r.cos() + d.cos()).abs() < 1e-5);
        assert!((r.sin() - d.sin()).abs() < 1e-5);
    }

    #[test]
    fn test_wall_reflection_flips_vertical() {
        let d = 0.3_f32;
        let r = reflect_off_wall(d);
        assert!((r.cos() - d.cos()).abs() < 1e-5);
        assert!((r.sin() + d.sin()).abs() < 1e-5);
    }

    #[test]
    fn test_reflections_are_involutions() {
        let d = 1.1_f32;
        let twice = reflect_off_wall(reflect_off_wall(d));
        assert!((twice - d).abs() < 1e-6);
        let twice = reflect_off_paddle(reflect_off_paddle(d));
        assert!((twice.cos() - d.cos()).abs() < 1e-5);
        assert!((twice.sin() - d.sin()).abs() < 1e-5);
    }
}
