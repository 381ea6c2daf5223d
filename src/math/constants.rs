/* Copyright 2020 @Yuchen Wong */

use nalgebra::{ Matrix4, Vector2, Vector3 };

pub type Float = f32;
pub type Int = i32;
pub type UInt = u32;

pub type Vector2f = Vector2<Float>;
pub type Vector3f = Vector3<Float>;
pub type Matrix4f = Matrix4<Float>;

pub const EPSILON: Float = 1e-4;
pub const PI: Float = 3.14159265359;

pub const FLOAT_MAX: Float = std::f32::MAX;
pub const FLOAT_MIN: Float = std::f32::MIN;
