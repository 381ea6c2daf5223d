// Copyright @yucwang 2026

use crate::math::constants::{EPSILON, Float, Vector3f};

/// Pinhole camera state as declared in the scene description. Raw fields
/// hold whatever the document provided; the viewing basis and the screen
/// extents are derived and must be refreshed with [`Camera::recompute_attributes`]
/// after the raw fields change.
pub struct Camera {
    pub eye: Vector3f,
    pub target: Vector3f,
    pub world_up: Vector3f,
    pub width: Float,
    pub height: Float,
    pub fov: Float,
    pub near_clip: Float,
    pub far_clip: Float,
    pub lens_radius: Float,
    pub focal_length: Float,
    look: Vector3f,
    right: Vector3f,
    up: Vector3f,
    aspect: Float,
    screen_h: Vector3f,
    screen_v: Vector3f,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vector3f::zeros(),
            target: Vector3f::zeros(),
            world_up: Vector3f::zeros(),
            width: 0.0,
            height: 0.0,
            fov: 0.0,
            near_clip: 0.0,
            far_clip: 0.0,
            lens_radius: 0.0,
            focal_length: 0.0,
            look: Vector3f::zeros(),
            right: Vector3f::zeros(),
            up: Vector3f::zeros(),
            aspect: 0.0,
            screen_h: Vector3f::zeros(),
            screen_v: Vector3f::zeros(),
        }
    }
}

impl Camera {
    pub fn look(&self) -> Vector3f {
        self.look
    }

    pub fn right(&self) -> Vector3f {
        self.right
    }

    pub fn up(&self) -> Vector3f {
        self.up
    }

    pub fn aspect(&self) -> Float {
        self.aspect
    }

    pub fn screen_h(&self) -> Vector3f {
        self.screen_h
    }

    pub fn screen_v(&self) -> Vector3f {
        self.screen_v
    }

    /// Rebuilds the orthonormal viewing basis and the screen extents.
    /// Degenerate input never produces NaN: a zero view direction falls
    /// back to -z, and a world up parallel to the view direction is
    /// replaced with the world axis least aligned with it.
    pub fn recompute_attributes(&mut self) {
        let mut look = self.target - self.eye;
        if look.norm() < EPSILON {
            look = Vector3f::new(0.0, 0.0, -1.0);
        }
        self.look = look.normalize();

        let mut right = self.look.cross(&self.world_up);
        if right.norm() < EPSILON {
            let axis = if self.look[1].abs() < 0.9 {
                Vector3f::new(0.0, 1.0, 0.0)
            } else {
                Vector3f::new(1.0, 0.0, 0.0)
            };
            right = self.look.cross(&axis);
        }
        self.right = right.normalize();
        self.up = self.right.cross(&self.look).normalize();

        self.aspect = if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        };

        let tan_half_fov = (0.5 * self.fov.to_radians()).tan();
        self.screen_v = self.up * tan_half_fov;
        self.screen_h = self.right * tan_half_fov * self.aspect;
    }
}
