// Copyright @yucwang 2026

use crate::math::constants::UInt;

pub const DEFAULT_MAX_DEPTH: UInt = 5;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IntegratorKind {
    DirectLighting,
    Indirect,
    Bidirectional,
}

/// Rendering strategy selection plus its sampling knobs. Only the
/// configuration is modeled here; the scene description never carries
/// the light transport code itself.
pub struct Integrator {
    kind: IntegratorKind,
    max_depth: Option<UInt>,
    light_sample_number: UInt,
    brdf_sample_number: UInt,
}

impl Integrator {
    pub fn new(kind: IntegratorKind) -> Self {
        Self {
            kind,
            max_depth: None,
            light_sample_number: 1,
            brdf_sample_number: 1,
        }
    }

    pub fn kind(&self) -> IntegratorKind {
        self.kind
    }

    pub fn type_name(&self) -> &'static str {
        match self.kind {
            IntegratorKind::DirectLighting => "directLighting",
            IntegratorKind::Indirect => "indirectLighting",
            IntegratorKind::Bidirectional => "bidirectional",
        }
    }

    pub fn max_depth(&self) -> UInt {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    pub fn set_max_depth(&mut self, max_depth: UInt) {
        self.max_depth = Some(max_depth);
    }

    pub fn light_sample_number(&self) -> UInt {
        self.light_sample_number
    }

    pub fn set_light_sample_number(&mut self, light_sample_number: UInt) {
        self.light_sample_number = light_sample_number;
    }

    pub fn brdf_sample_number(&self) -> UInt {
        self.brdf_sample_number
    }

    pub fn set_brdf_sample_number(&mut self, brdf_sample_number: UInt) {
        self.brdf_sample_number = brdf_sample_number;
    }
}
