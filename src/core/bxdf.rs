// Copyright @yucwang 2026

use crate::math::constants::Float;
use crate::math::spectrum::RGBSpectrum;

/// Scattering model variants, fully parameterized at declaration time.
/// Every parameter has a default so a bare declaration is still valid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum BxDFKind {
    Lambert {
        diffuse_color: RGBSpectrum,
    },
    SpecularReflection {
        reflection_color: RGBSpectrum,
    },
    BlinnMicrofacet {
        reflection_color: RGBSpectrum,
        exponent: Float,
    },
    Anisotropic {
        reflection_color: RGBSpectrum,
        exponent1: Float,
        exponent2: Float,
    },
    Phong {
        diffuse_color: RGBSpectrum,
        specular_color: RGBSpectrum,
        specular_power: Float,
    },
    Transmission {
        eta_i: Float,
        eta_t: Float,
        transmission_color: RGBSpectrum,
    },
}

pub struct BxDF {
    name: String,
    kind: BxDFKind,
}

impl BxDF {
    pub fn new(name: String, kind: BxDFKind) -> Self {
        Self { name, kind }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &BxDFKind {
        &self.kind
    }

    pub fn type_name(&self) -> &'static str {
        match self.kind {
            BxDFKind::Lambert { .. } => "lambert",
            BxDFKind::SpecularReflection { .. } => "specularReflection",
            BxDFKind::BlinnMicrofacet { .. } => "blinnMicrofacet",
            BxDFKind::Anisotropic { .. } => "anisotropic",
            BxDFKind::Phong { .. } => "phong",
            BxDFKind::Transmission { .. } => "transmission",
        }
    }
}
