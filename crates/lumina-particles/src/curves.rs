//! Interpolation helpers shared by the simulator and scene animation

/// Linear interpolation between two floats
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Component-wise linear interpolation between two points
pub fn lerp_vec3(a: [f32; 3], b: [f32; 3], t: f32) -> [f32; 3] {
    [
        lerp_f32(a[0], b[0], t),
        lerp_f32(a[1], b[1], t),
        lerp_f32(a[2], b[2], t),
    ]
}

/// Frame-rate aware approach: move toward `target` by `rate * dt`, never past it.
pub fn approach(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    lerp_f32(current, target, (rate * dt).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_f32_endpoints() {
        assert!((lerp_f32(0.0, 10.0, 0.0) - 0.0).abs() < 1e-6);
        assert!((lerp_f32(0.0, 10.0, 1.0) - 10.0).abs() < 1e-6);
        assert!((lerp_f32(0.0, 10.0, 0.5) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn lerp_vec3_midpoint() {
        let mid = lerp_vec3([0.0, 2.0, -4.0], [2.0, 4.0, 0.0], 0.5);
        assert_eq!(mid, [1.0, 3.0, -2.0]);
    }

    #[test]
    fn approach_never_overshoots() {
        assert_eq!(approach(1.0, 1.05, 5.0, 1.0), 1.05);
        let stepped = approach(1.0, 1.05, 5.0, 0.1);
        assert!(stepped > 1.0 && stepped < 1.05);
    }
}
