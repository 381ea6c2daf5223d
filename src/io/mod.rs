// Copyright @yucwang 2026

pub mod image_utils;
pub mod obj_utils;
