// Copyright @yucwang 2026

pub mod bvh;
pub mod bxdf;
pub mod camera;
pub mod geometry;
pub mod integrator;
pub mod material;
pub mod scene;
pub mod scene_loader;
