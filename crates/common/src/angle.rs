/// Wrap an angle in degrees into `[0, 360)`.
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Wrap an angle in degrees into `(-180, 180]`.
pub fn wrap_signed_degrees(degrees: f32) -> f32 {
    let wrapped = wrap_degrees(degrees);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Clamp a pitch angle to `[-limit, limit]`.
///
/// The sign of `limit` is ignored and a NaN limit falls back to 90.
pub fn clamp_pitch(pitch: f32, limit: f32) -> f32 {
    let limit = if limit.is_nan() {
        90.0
    } else {
        limit.abs().min(90.0)
    };
    pitch.max(-limit).min(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_keeps_range() {
        for a in [-720.5, -360.0, -1.0, -1e-8, 0.0, 359.9, 360.0, 725.0] {
            let w = wrap_degrees(a);
            assert!((0.0..360.0).contains(&w), "{a} wrapped to {w}");
        }
    }

    #[test]
    fn wrap_negative_comes_around() {
        assert!((wrap_degrees(-10.0) - 350.0).abs() < 1e-4);
        assert!((wrap_degrees(370.0) - 10.0).abs() < 1e-4);
    }

    #[test]
    fn signed_wrap() {
        assert!((wrap_signed_degrees(350.0) + 10.0).abs() < 1e-4);
        assert_eq!(wrap_signed_degrees(180.0), 180.0);
        assert!((wrap_signed_degrees(-190.0) - 170.0).abs() < 1e-4);
    }

    #[test]
    fn pitch_clamp() {
        assert_eq!(clamp_pitch(95.0, 80.0), 80.0);
        assert_eq!(clamp_pitch(-95.0, 80.0), -80.0);
        assert_eq!(clamp_pitch(12.5, 80.0), 12.5);
    }

    #[test]
    fn pitch_clamp_tolerates_bad_limits() {
        assert_eq!(clamp_pitch(30.0, -10.0), 10.0);
        assert_eq!(clamp_pitch(-30.0, -10.0), -10.0);
        assert_eq!(clamp_pitch(95.0, f32::NAN), 90.0);
        assert_eq!(clamp_pitch(40.0, f32::INFINITY), 40.0);
        assert_eq!(clamp_pitch(120.0, f32::INFINITY), 90.0);
    }
}
