//! Scene description: bar layout, colors, camera, and lighting.
//!
//! Everything here is pure math over the bar index and elapsed time; the
//! GPU renderer consumes the instance records this module produces.

pub mod playhead;

pub use playhead::{bar_height, start_index, Playhead, MIN_BAR_HEIGHT};

use glam::{Mat4, Vec3};

/// Number of bars in the row.
pub const BAR_COUNT: usize = 64;

/// Center-to-center spacing between neighbouring bars.
pub const BAR_SPACING: f32 = 0.5;

/// Bar width along the row axis.
pub const BAR_WIDTH: f32 = 0.4;

/// Bar depth toward the camera.
pub const BAR_DEPTH: f32 = 0.1;

/// Per-instance bar data uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BarInstance {
    pub position: [f32; 3],
    pub height: f32,
    pub color: [f32; 3],
    pub _padding: f32,
}

/// X position of bar `i`, centered around the origin.
pub fn bar_x(index: usize) -> f32 {
    (index as f32 - BAR_COUNT as f32 / 2.0) * BAR_SPACING
}

/// Color of bar `i`: warm gradient, green and blue ramp with the index.
pub fn bar_color(index: usize) -> [f32; 3] {
    let t = index as f32 / BAR_COUNT as f32;
    [1.0, (0.5 + t).min(1.0), (0.2 + t).min(1.0)]
}

/// The full row of bars at their initial flattened height.
pub fn initial_instances() -> Vec<BarInstance> {
    (0..BAR_COUNT)
        .map(|i| BarInstance {
            position: [bar_x(i), 0.0, 0.0],
            height: MIN_BAR_HEIGHT,
            color: bar_color(i),
            _padding: 0.0,
        })
        .collect()
}

/// Distance from the camera to the origin.
pub const CAMERA_DISTANCE: f32 = 48.0;

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEGREES: f32 = 45.0;

/// Ambient light intensity (uniform grey).
pub const AMBIENT_INTENSITY: f32 = 0.2;

/// Directional light intensity (uniform grey).
pub const DIRECTIONAL_INTENSITY: f32 = 0.8;

/// Direction the key light shines toward: 45 degree yaw, 45 degrees down.
pub fn light_direction() -> Vec3 {
    Vec3::new(-0.5, -0.707, -0.5).normalize()
}

/// View-projection matrix for the fixed camera.
///
/// The camera sits level with the bars, pulled straight back from the
/// origin, and never moves.
pub fn view_proj(aspect_ratio: f32) -> Mat4 {
    let eye = Vec3::new(0.0, 0.0, CAMERA_DISTANCE);
    let target = Vec3::ZERO;

    let view = Mat4::look_at_rh(eye, target, Vec3::Y);
    let proj = Mat4::perspective_rh(
        CAMERA_FOV_DEGREES.to_radians(),
        aspect_ratio,
        0.1,
        200.0,
    );

    proj * view
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_positions_centered() {
        assert_eq!(bar_x(0), -16.0);
        assert_eq!(bar_x(32), 0.0);
        assert_eq!(bar_x(63), 15.5);

        // Row is symmetric about the origin up to one half-spacing
        let center: f32 = (0..BAR_COUNT).map(bar_x).sum::<f32>() / BAR_COUNT as f32;
        assert!((center + BAR_SPACING / 2.0).abs() < 0.001);
    }

    #[test]
    fn test_bar_spacing_uniform() {
        for i in 1..BAR_COUNT {
            assert!((bar_x(i) - bar_x(i - 1) - BAR_SPACING).abs() < 1e-6);
        }
    }

    #[test]
    fn test_bar_colors_ramp_with_index() {
        let first = bar_color(0);
        let last = bar_color(BAR_COUNT - 1);

        assert_eq!(first, [1.0, 0.5, 0.2]);
        assert!(last[1] > first[1]);
        assert!(last[2] > first[2]);

        // All channels stay displayable
        for i in 0..BAR_COUNT {
            let c = bar_color(i);
            assert!(c.iter().all(|&v| (0.0..=1.0).contains(&v)), "bar {} color {:?}", i, c);
        }
    }

    #[test]
    fn test_initial_instances_flattened() {
        let instances = initial_instances();
        assert_eq!(instances.len(), BAR_COUNT);
        for inst in &instances {
            assert_eq!(inst.height, MIN_BAR_HEIGHT);
        }
    }

    #[test]
    fn test_view_proj_is_valid() {
        let m = view_proj(16.0 / 9.0);
        assert_ne!(m, Mat4::IDENTITY);
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));

        // The origin should project in front of the camera, centered
        let clip = m * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(clip.w > 0.0);
        assert!((clip.x / clip.w).abs() < 0.001);
        assert!((clip.y / clip.w).abs() < 0.001);
    }

    #[test]
    fn test_light_direction_points_down() {
        let dir = light_direction();
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!(dir.y < 0.0);
    }
}
