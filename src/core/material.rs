// Copyright @yucwang 2026

use crate::math::bitmap::Bitmap;
use crate::math::constants::Float;
use crate::math::spectrum::RGBSpectrum;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MaterialKind {
    Default,
    Light,
    Weighted,
}

/// A named surface description. Bound scattering models are indices into
/// the scene's bxdf list, appended in bxdf declaration order. Weights are
/// recorded as declared and are not reconciled against the binding count.
pub struct Material {
    name: String,
    kind: MaterialKind,
    base_color: RGBSpectrum,
    texture: Option<Bitmap>,
    normal_map: Option<Bitmap>,
    is_light_source: bool,
    intensity: Float,
    bxdfs: Vec<usize>,
    bxdf_weights: Vec<Float>,
}

impl Material {
    pub fn new(name: String, kind: MaterialKind) -> Self {
        Self {
            name,
            kind,
            base_color: RGBSpectrum::new(0.5, 0.5, 0.5),
            texture: None,
            normal_map: None,
            is_light_source: matches!(kind, MaterialKind::Light),
            intensity: 1.0,
            bxdfs: Vec::new(),
            bxdf_weights: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> MaterialKind {
        self.kind
    }

    pub fn type_name(&self) -> &'static str {
        match self.kind {
            MaterialKind::Default => "default",
            MaterialKind::Light => "light",
            MaterialKind::Weighted => "weighted",
        }
    }

    pub fn base_color(&self) -> RGBSpectrum {
        self.base_color
    }

    pub fn set_base_color(&mut self, base_color: RGBSpectrum) {
        self.base_color = base_color;
    }

    pub fn texture(&self) -> Option<&Bitmap> {
        self.texture.as_ref()
    }

    pub fn set_texture(&mut self, texture: Option<Bitmap>) {
        self.texture = texture;
    }

    pub fn normal_map(&self) -> Option<&Bitmap> {
        self.normal_map.as_ref()
    }

    pub fn set_normal_map(&mut self, normal_map: Option<Bitmap>) {
        self.normal_map = normal_map;
    }

    pub fn is_light_source(&self) -> bool {
        self.is_light_source
    }

    pub fn intensity(&self) -> Float {
        self.intensity
    }

    pub fn set_intensity(&mut self, intensity: Float) {
        self.intensity = intensity;
    }

    pub fn bxdfs(&self) -> &Vec<usize> {
        &self.bxdfs
    }

    pub fn add_bxdf(&mut self, bxdf: usize) {
        self.bxdfs.push(bxdf);
    }

    pub fn bxdf_weights(&self) -> &Vec<Float> {
        &self.bxdf_weights
    }

    pub fn add_bxdf_weight(&mut self, weight: Float) {
        self.bxdf_weights.push(weight);
    }
}
