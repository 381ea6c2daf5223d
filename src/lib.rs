// Copyright @yucwang 2026

#![allow(dead_code)]

pub mod core;
pub mod math;
pub mod io;
