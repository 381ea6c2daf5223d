// Copyright @yucwang 2026

use crate::core::bxdf::BxDF;
use crate::core::camera::Camera;
use crate::core::geometry::Geometry;
use crate::core::integrator::Integrator;
use crate::core::material::Material;
use crate::math::aabb::AABB;
use crate::math::constants::UInt;

/// The loaded scene graph. Geometries, materials and bxdfs live in flat
/// lists ordered by declaration; cross references between them are plain
/// indices into those lists. The light list is derived after material
/// binding and holds indices of geometries whose material emits.
pub struct Scene {
    geometries: Vec<Geometry>,
    materials: Vec<Material>,
    bxdfs: Vec<BxDF>,
    lights: Vec<usize>,
    camera: Camera,
    integrator: Option<Integrator>,
    pixel_sample_length: UInt,
    base_dir: std::path::PathBuf,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            geometries: Vec::new(),
            materials: Vec::new(),
            bxdfs: Vec::new(),
            lights: Vec::new(),
            camera: Camera::default(),
            integrator: None,
            pixel_sample_length: 1,
            base_dir: std::path::PathBuf::new(),
        }
    }

    pub fn geometries(&self) -> &Vec<Geometry> {
        &self.geometries
    }

    pub fn geometries_mut(&mut self) -> &mut Vec<Geometry> {
        &mut self.geometries
    }

    pub fn add_geometry(&mut self, geometry: Geometry) {
        self.geometries.push(geometry);
    }

    pub fn materials(&self) -> &Vec<Material> {
        &self.materials
    }

    pub fn materials_mut(&mut self) -> &mut Vec<Material> {
        &mut self.materials
    }

    pub fn add_material(&mut self, material: Material) {
        self.materials.push(material);
    }

    pub fn bxdfs(&self) -> &Vec<BxDF> {
        &self.bxdfs
    }

    pub fn add_bxdf(&mut self, bxdf: BxDF) {
        self.bxdfs.push(bxdf);
    }

    pub fn lights(&self) -> &Vec<usize> {
        &self.lights
    }

    pub fn add_light(&mut self, geometry_index: usize) {
        self.lights.push(geometry_index);
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = camera;
    }

    pub fn integrator(&self) -> Option<&Integrator> {
        self.integrator.as_ref()
    }

    pub fn set_integrator(&mut self, integrator: Integrator) {
        self.integrator = Some(integrator);
    }

    pub fn pixel_sample_length(&self) -> UInt {
        self.pixel_sample_length
    }

    pub fn set_pixel_sample_length(&mut self, pixel_sample_length: UInt) {
        self.pixel_sample_length = pixel_sample_length;
    }

    pub fn set_base_dir(&mut self, base_dir: std::path::PathBuf) {
        self.base_dir = base_dir;
    }

    pub fn base_dir(&self) -> &std::path::Path {
        &self.base_dir
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// Union of the world bounds of every finalized geometry.
    pub fn bounds(&self) -> AABB {
        let mut bounds = AABB::default();
        for geometry in &self.geometries {
            if geometry.bounds().is_valid() {
                bounds.expand_by_aabb(&geometry.bounds());
            }
        }
        bounds
    }
}
