// Copyright 2020 @TwoCookingMice

use nalgebra::Rotation3;

use super::constants::{ Vector3f, Matrix4f };

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform {
    translate: Vector3f,
    rotate: Vector3f,
    scale: Vector3f,
    matrix: Matrix4f,
    inv_matrix: Matrix4f
}

impl Default for Transform {
    fn default() -> Self {
        Self { translate: Vector3f::new(0.0, 0.0, 0.0),
               rotate: Vector3f::new(0.0, 0.0, 0.0),
               scale: Vector3f::new(1.0, 1.0, 1.0),
               matrix: Matrix4f::identity(),
               inv_matrix: Matrix4f::identity() }
    }
}

impl Transform {
    // Euler angles are in degrees, applied in x, y, z order.
    pub fn from_trs(translate: Vector3f, rotate: Vector3f, scale: Vector3f) -> Self {
        let t = Matrix4f::new_translation(&translate);
        let rx = Rotation3::from_axis_angle(&Vector3f::x_axis(),
                                            rotate[0].to_radians()).to_homogeneous();
        let ry = Rotation3::from_axis_angle(&Vector3f::y_axis(),
                                            rotate[1].to_radians()).to_homogeneous();
        let rz = Rotation3::from_axis_angle(&Vector3f::z_axis(),
                                            rotate[2].to_radians()).to_homogeneous();
        let s = Matrix4f::new_nonuniform_scaling(&scale);
        let matrix = t * rx * ry * rz * s;

        Self { translate: translate,
               rotate: rotate,
               scale: scale,
               matrix: matrix,
               inv_matrix: matrix.try_inverse().unwrap_or(Matrix4f::identity()) }
    }

    pub fn translate(&self) -> Vector3f {
        self.translate
    }

    pub fn rotate(&self) -> Vector3f {
        self.rotate
    }

    pub fn scale(&self) -> Vector3f {
        self.scale
    }

    pub fn apply_point(&self, p: Vector3f) -> Vector3f {
        let x = p[0] * self.matrix[(0, 0)] + p[1] * self.matrix[(0, 1)] +
            p[2] * self.matrix[(0, 2)] + self.matrix[(0, 3)];
        let y = p[0] * self.matrix[(1, 0)] + p[1] * self.matrix[(1, 1)] +
            p[2] * self.matrix[(1, 2)] + self.matrix[(1, 3)];
        let z = p[0] * self.matrix[(2, 0)] + p[1] * self.matrix[(2, 1)] +
            p[2] * self.matrix[(2, 2)] + self.matrix[(2, 3)];
        let w = p[0] * self.matrix[(3, 0)] + p[1] * self.matrix[(3, 1)] +
            p[2] * self.matrix[(3, 2)] + self.matrix[(3, 3)];

        Vector3f::new(x / w, y / w, z / w)
    }

    pub fn apply_vector(&self, v: Vector3f) -> Vector3f {
        let x = v[0] * self.matrix[(0, 0)] + v[1] * self.matrix[(0, 1)] + v[2] * self.matrix[(0, 2)];
        let y = v[0] * self.matrix[(1, 0)] + v[1] * self.matrix[(1, 1)] + v[2] * self.matrix[(1, 2)];
        let z = v[0] * self.matrix[(2, 0)] + v[1] * self.matrix[(2, 1)] + v[2] * self.matrix[(2, 2)];

        Vector3f::new(x, y, z)
    }

    // Normal transformation is different from point transformation.
    // Before transformation, we have n^Tx = 0
    // After transformation, we have (Sn)^T(Mx) = 0
    // Then, we will get: S = (M^{-1})^T
    pub fn apply_normal(&self, n: Vector3f) -> Vector3f {
        let transpose_inv = self.inv_matrix.transpose();
        let x = n[0] * transpose_inv[(0, 0)] + n[1] * transpose_inv[(0, 1)] + n[2] * transpose_inv[(0, 2)];
        let y = n[0] * transpose_inv[(1, 0)] + n[1] * transpose_inv[(1, 1)] + n[2] * transpose_inv[(1, 2)];
        let z = n[0] * transpose_inv[(2, 0)] + n[1] * transpose_inv[(2, 1)] + n[2] * transpose_inv[(2, 2)];

        Vector3f::new(x, y, z)
    }

    pub fn inv_apply_point(&self, p: Vector3f) -> Vector3f {
        let x = p[0] * self.inv_matrix[(0, 0)] + p[1] * self.inv_matrix[(0, 1)] +
            p[2] * self.inv_matrix[(0, 2)] + self.inv_matrix[(0, 3)];
        let y = p[0] * self.inv_matrix[(1, 0)] + p[1] * self.inv_matrix[(1, 1)] +
            p[2] * self.inv_matrix[(1, 2)] + self.inv_matrix[(1, 3)];
        let z = p[0] * self.inv_matrix[(2, 0)] + p[1] * self.inv_matrix[(2, 1)] +
            p[2] * self.inv_matrix[(2, 2)] + self.inv_matrix[(2, 3)];
        let w = p[0] * self.inv_matrix[(3, 0)] + p[1] * self.inv_matrix[(3, 1)] +
            p[2] * self.inv_matrix[(3, 2)] + self.inv_matrix[(3, 3)];

        Vector3f::new(x / w, y / w, z / w)
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix4f::identity()
    }
}
