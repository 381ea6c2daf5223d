// Copyright @yucwang 2026

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::core::bxdf::{BxDF, BxDFKind};
use crate::core::camera::Camera;
use crate::core::geometry::{Geometry, GeometryKind, Mesh};
use crate::core::integrator::{Integrator, IntegratorKind};
use crate::core::material::{Material, MaterialKind};
use crate::core::scene::Scene;
use crate::io::image_utils;
use crate::io::obj_utils::ObjLoadError;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, UInt, Vector3f};
use crate::math::spectrum::RGBSpectrum;
use crate::math::transform::Transform;

#[derive(Debug)]
pub enum SceneLoadError {
    Io(std::io::Error),
    Xml(quick_xml::Error),
    Mesh(ObjLoadError),
    Parse(String),
    MalformedVector(String),
    MalformedGeometry(String),
    MalformedMaterial(String),
    MalformedBxDF(String),
    MalformedIntegrator(String),
    MalformedPixelSampleLength,
}

impl From<std::io::Error> for SceneLoadError {
    fn from(err: std::io::Error) -> Self {
        SceneLoadError::Io(err)
    }
}

impl From<quick_xml::Error> for SceneLoadError {
    fn from(err: quick_xml::Error) -> Self {
        SceneLoadError::Xml(err)
    }
}

impl From<ObjLoadError> for SceneLoadError {
    fn from(err: ObjLoadError) -> Self {
        SceneLoadError::Mesh(err)
    }
}

impl fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneLoadError::Io(err) => write!(f, "io error: {}", err),
            SceneLoadError::Xml(err) => write!(f, "xml error: {}", err),
            SceneLoadError::Mesh(err) => write!(f, "mesh import error: {}", err),
            SceneLoadError::Parse(msg) => write!(f, "parse error: {}", msg),
            SceneLoadError::MalformedVector(msg) => write!(f, "malformed vector: {}", msg),
            SceneLoadError::MalformedGeometry(msg) => write!(f, "malformed geometry: {}", msg),
            SceneLoadError::MalformedMaterial(msg) => write!(f, "malformed material: {}", msg),
            SceneLoadError::MalformedBxDF(msg) => write!(f, "malformed bxdf: {}", msg),
            SceneLoadError::MalformedIntegrator(msg) => write!(f, "malformed integrator: {}", msg),
            SceneLoadError::MalformedPixelSampleLength => write!(f, "malformed pixel sample length"),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// Loads a scene description from an XML file. Relative resource paths
/// inside the document are resolved against the file's directory.
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, SceneLoadError> {
    let path = path.as_ref();
    log::info!("Starting loading scene from: {}.", path.display());
    let xml = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    load_scene_from_str(&xml, base_dir)
}

/// Loads a scene description from in-memory XML. The load runs in two
/// phases: a single forward pass collects every declared entity while
/// recording name references, then the references are resolved into
/// indices and the geometries are finalized.
pub fn load_scene_from_str(xml: &str, base_dir: &Path) -> Result<Scene, SceneLoadError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();

    let mut scene = Scene::new();
    scene.set_base_dir(base_dir.to_path_buf());

    // Pending name references, keyed by the referenced name. Values are
    // indices of the entities that declared the reference.
    let mut material_refs: HashMap<String, Vec<usize>> = HashMap::new();
    let mut bxdf_refs: HashMap<String, Vec<usize>> = HashMap::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) => {
                dispatch_element(&mut reader, &e, true, base_dir, &mut scene,
                                 &mut material_refs, &mut bxdf_refs)?;
            }
            Ok(Event::Empty(e)) => {
                dispatch_element(&mut reader, &e, false, base_dir, &mut scene,
                                 &mut material_refs, &mut bxdf_refs)?;
            }
            Err(e) => {
                return Err(SceneLoadError::Xml(e));
            }
            _ => {}
        }

        buf.clear();
    }

    // Bind materials to the geometries that referenced them. Materials are
    // visited in declaration order, so a later material with the same name
    // rebinds the geometry.
    for material_index in 0..scene.materials().len() {
        let name = scene.materials()[material_index].name().to_string();
        if let Some(geometry_indices) = material_refs.get(&name) {
            for &geometry_index in geometry_indices {
                scene.geometries_mut()[geometry_index].set_material(material_index);
            }
        }
    }

    // Bind bxdfs to the materials that referenced them. The outer loop runs
    // in bxdf declaration order, so a material's bound list is ordered by
    // declaration, not by reference order, and every reference occurrence
    // appends one entry.
    for bxdf_index in 0..scene.bxdfs().len() {
        let name = scene.bxdfs()[bxdf_index].name().to_string();
        if let Some(material_indices) = bxdf_refs.get(&name) {
            for &material_index in material_indices {
                scene.materials_mut()[material_index].add_bxdf(bxdf_index);
            }
        }
    }

    // Finalize every geometry and derive the light list in declaration
    // order. A geometry without a bound material is never a light.
    let mut lights = Vec::new();
    for geometry_index in 0..scene.len() {
        scene.geometries_mut()[geometry_index].finalize();
        let is_light = match scene.geometries()[geometry_index].material() {
            Some(material_index) => scene.materials()[material_index].is_light_source(),
            None => false,
        };
        if is_light {
            lights.push(geometry_index);
        }
    }
    for geometry_index in lights {
        scene.add_light(geometry_index);
    }

    log::info!("Loaded scene: {} geometries, {} materials, {} bxdfs, {} lights.",
               scene.len(), scene.materials().len(), scene.bxdfs().len(),
               scene.lights().len());

    Ok(scene)
}

fn dispatch_element(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart,
    has_children: bool,
    base_dir: &Path,
    scene: &mut Scene,
    material_refs: &mut HashMap<String, Vec<usize>>,
    bxdf_refs: &mut HashMap<String, Vec<usize>>,
) -> Result<(), SceneLoadError> {
    match start.name().as_ref() {
        b"camera" => {
            let camera = load_camera(reader, has_children)?;
            scene.set_camera(camera);
        }
        b"geometry" => {
            let geometry_index = scene.len();
            let geometry = load_geometry(reader, start, has_children, base_dir,
                                         geometry_index, material_refs)?;
            scene.add_geometry(geometry);
        }
        b"material" => {
            let material_index = scene.materials().len();
            let material = load_material(reader, start, has_children, base_dir,
                                         material_index, bxdf_refs)?;
            scene.add_material(material);
        }
        b"bxdf" => {
            let bxdf = load_bxdf(start)?;
            if has_children {
                skip_to_end(reader, b"bxdf")?;
            }
            scene.add_bxdf(bxdf);
        }
        b"integrator" => {
            let integrator = load_integrator(reader, start, has_children)?;
            scene.set_integrator(integrator);
        }
        name if name.eq_ignore_ascii_case(b"pixelSampleLength") => {
            if !has_children {
                return Err(SceneLoadError::MalformedPixelSampleLength);
            }
            let samples = load_pixel_sample_length(reader, name)?;
            scene.set_pixel_sample_length(samples);
        }
        // Unknown elements are structural wrappers: their children still
        // flow through this dispatcher.
        _ => {}
    }

    Ok(())
}

fn load_geometry(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart,
    has_children: bool,
    base_dir: &Path,
    geometry_index: usize,
    material_refs: &mut HashMap<String, Vec<usize>>,
) -> Result<Geometry, SceneLoadError> {
    let type_attr = attribute_value(start, b"type")
        .ok_or_else(|| SceneLoadError::MalformedGeometry(String::from("missing type attribute")))?;
    let kind = match type_attr.as_str() {
        "obj" => GeometryKind::Mesh(Mesh::new()),
        "sphere" => GeometryKind::Sphere,
        "square" => GeometryKind::Square,
        "cube" => GeometryKind::Cube,
        "disc" => GeometryKind::Disc,
        "ring" => GeometryKind::Ring,
        other => {
            return Err(SceneLoadError::MalformedGeometry(
                format!("unknown geometry type: {}", other)));
        }
    };
    let is_mesh = matches!(kind, GeometryKind::Mesh(_));
    let name = attribute_value(start, b"name").unwrap_or_default();
    let mut result = Geometry::new(name, kind);

    if has_children {
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"filename" if is_mesh => {
                        if let Some(text) = read_element_text(reader)? {
                            let filename = if Path::new(&text).is_absolute() {
                                text
                            } else {
                                base_dir.join(text).to_string_lossy().to_string()
                            };
                            if let GeometryKind::Mesh(mesh) = result.kind_mut() {
                                *mesh = Mesh::from_obj(&filename)?;
                            }
                        }
                    }
                    b"transform" => {
                        let transform = load_transform(reader)?;
                        result.set_transform(transform);
                    }
                    b"material" => {
                        if let Some(text) = read_element_text(reader)? {
                            material_refs.entry(text)
                                .or_insert_with(Vec::new)
                                .push(geometry_index);
                        }
                    }
                    _ => {}
                },
                Ok(Event::Empty(e)) => {
                    if e.name().as_ref() == b"transform" {
                        result.set_transform(Transform::default());
                    }
                }
                Ok(Event::End(e)) if e.name().as_ref() == b"geometry" => break,
                Ok(Event::Eof) => return Err(unexpected_eof(b"geometry")),
                Err(e) => return Err(SceneLoadError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }
    }

    // The world bounds are known as soon as parsing ends; a mesh also gets
    // its acceleration structure here, over local-space triangles.
    result.compute_bounds();
    if let GeometryKind::Mesh(mesh) = result.kind_mut() {
        mesh.build_bvh();
    }

    Ok(result)
}

fn load_material(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart,
    has_children: bool,
    base_dir: &Path,
    material_index: usize,
    bxdf_refs: &mut HashMap<String, Vec<usize>>,
) -> Result<Material, SceneLoadError> {
    let type_attr = attribute_value(start, b"type")
        .ok_or_else(|| SceneLoadError::MalformedMaterial(String::from("missing type attribute")))?;
    let kind = match type_attr.as_str() {
        "default" => MaterialKind::Default,
        "light" => MaterialKind::Light,
        "weighted" => MaterialKind::Weighted,
        other => {
            return Err(SceneLoadError::MalformedMaterial(
                format!("unknown material type: {}", other)));
        }
    };
    let is_weighted = matches!(kind, MaterialKind::Weighted);
    let name = attribute_value(start, b"name").unwrap_or_default();
    let mut result = Material::new(name, kind);

    if matches!(kind, MaterialKind::Light) {
        if let Some(value) = attribute_value(start, b"intensity") {
            result.set_intensity(parse_float(&value)?);
        }
    }

    if has_children {
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"baseColor" => {
                        if let Some(text) = read_element_text(reader)? {
                            result.set_base_color(parse_color(&text)?);
                        }
                    }
                    b"bxdf" => {
                        if let Some(text) = read_element_text(reader)? {
                            bxdf_refs.entry(text)
                                .or_insert_with(Vec::new)
                                .push(material_index);
                        }
                    }
                    b"texture" => {
                        result.set_texture(load_texture(reader, base_dir)?);
                    }
                    b"normalMap" => {
                        result.set_normal_map(load_texture(reader, base_dir)?);
                    }
                    b"weight" if is_weighted => {
                        if let Some(text) = read_element_text(reader)? {
                            result.add_bxdf_weight(parse_float(&text)?);
                        }
                    }
                    _ => {}
                },
                Ok(Event::Empty(e)) => match e.name().as_ref() {
                    b"texture" => result.set_texture(None),
                    b"normalMap" => result.set_normal_map(None),
                    _ => {}
                },
                Ok(Event::End(e)) if e.name().as_ref() == b"material" => break,
                Ok(Event::Eof) => return Err(unexpected_eof(b"material")),
                Err(e) => return Err(SceneLoadError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }
    }

    Ok(result)
}

// A texture child holds the image path as text. Everything that can go
// wrong with the image itself is non-fatal and collapses to None.
fn load_texture(
    reader: &mut Reader<&[u8]>,
    base_dir: &Path,
) -> Result<Option<Bitmap>, SceneLoadError> {
    let bitmap = match read_element_text(reader)? {
        Some(text) => {
            let filename = if Path::new(&text).is_absolute() {
                text
            } else {
                base_dir.join(text).to_string_lossy().to_string()
            };
            image_utils::decode_image(&filename)
        }
        None => None,
    };
    Ok(bitmap)
}

fn load_bxdf(start: &BytesStart) -> Result<BxDF, SceneLoadError> {
    let type_attr = attribute_value(start, b"type")
        .ok_or_else(|| SceneLoadError::MalformedBxDF(String::from("missing type attribute")))?;
    let kind = match type_attr.as_str() {
        "lambert" => BxDFKind::Lambert {
            diffuse_color: color_attribute(start, b"diffuseColor", 0.5)?,
        },
        "specularReflection" => BxDFKind::SpecularReflection {
            reflection_color: color_attribute(start, b"reflectionColor", 0.5)?,
        },
        "blinnMicrofacet" => BxDFKind::BlinnMicrofacet {
            reflection_color: color_attribute(start, b"reflectionColor", 0.5)?,
            exponent: float_attribute(start, b"exponent", 8.0)?,
        },
        "anisotropic" => BxDFKind::Anisotropic {
            reflection_color: color_attribute(start, b"reflectionColor", 0.5)?,
            exponent1: float_attribute(start, b"exponent1", 4.0)?,
            exponent2: float_attribute(start, b"exponent2", 20.0)?,
        },
        "phong" => BxDFKind::Phong {
            diffuse_color: color_attribute(start, b"diffuseColor", 0.5)?,
            specular_color: color_attribute(start, b"specularColor", 1.0)?,
            specular_power: float_attribute(start, b"specularPower", 5.0)?,
        },
        "transmission" => BxDFKind::Transmission {
            eta_i: float_attribute(start, b"etai", 1.0)?,
            eta_t: float_attribute(start, b"etat", 1.0)?,
            transmission_color: color_attribute(start, b"transmissionColor", 1.0)?,
        },
        other => {
            return Err(SceneLoadError::MalformedBxDF(
                format!("unknown bxdf type: {}", other)));
        }
    };
    let name = attribute_value(start, b"name").unwrap_or_default();

    Ok(BxDF::new(name, kind))
}

fn load_camera(reader: &mut Reader<&[u8]>, has_children: bool) -> Result<Camera, SceneLoadError> {
    let mut result = Camera::default();

    if has_children {
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"target" => {
                        if let Some(text) = read_element_text(reader)? {
                            result.target = parse_vec3(&text)?;
                        }
                    }
                    b"eye" => {
                        if let Some(text) = read_element_text(reader)? {
                            result.eye = parse_vec3(&text)?;
                        }
                    }
                    b"worldUp" => {
                        if let Some(text) = read_element_text(reader)? {
                            result.world_up = parse_vec3(&text)?;
                        }
                    }
                    b"width" => {
                        if let Some(text) = read_element_text(reader)? {
                            result.width = parse_float(&text)?;
                        }
                    }
                    b"height" => {
                        if let Some(text) = read_element_text(reader)? {
                            result.height = parse_float(&text)?;
                        }
                    }
                    b"fov" => {
                        if let Some(text) = read_element_text(reader)? {
                            result.fov = parse_float(&text)?;
                        }
                    }
                    b"nearClip" => {
                        if let Some(text) = read_element_text(reader)? {
                            result.near_clip = parse_float(&text)?;
                        }
                    }
                    b"farClip" => {
                        if let Some(text) = read_element_text(reader)? {
                            result.far_clip = parse_float(&text)?;
                        }
                    }
                    b"lensRadius" => {
                        if let Some(text) = read_element_text(reader)? {
                            result.lens_radius = parse_float(&text)?;
                        }
                    }
                    b"focalLength" => {
                        if let Some(text) = read_element_text(reader)? {
                            result.focal_length = parse_float(&text)?;
                        }
                    }
                    _ => {}
                },
                Ok(Event::End(e)) if e.name().as_ref() == b"camera" => break,
                Ok(Event::Eof) => return Err(unexpected_eof(b"camera")),
                Err(e) => return Err(SceneLoadError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }
    }

    result.recompute_attributes();
    Ok(result)
}

fn load_integrator(
    reader: &mut Reader<&[u8]>,
    start: &BytesStart,
    has_children: bool,
) -> Result<Integrator, SceneLoadError> {
    let type_attr = attribute_value(start, b"type")
        .ok_or_else(|| SceneLoadError::MalformedIntegrator(String::from("missing type attribute")))?;
    let kind = match type_attr.as_str() {
        "directLighting" | "raytrace" => IntegratorKind::DirectLighting,
        "indirectLighting" => IntegratorKind::Indirect,
        "bidirectionalIntegrator" => IntegratorKind::Bidirectional,
        other => {
            return Err(SceneLoadError::MalformedIntegrator(
                format!("unknown integrator type: {}", other)));
        }
    };
    let mut result = Integrator::new(kind);

    if has_children {
        let mut buf = Vec::new();
        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"maxDepth" => {
                        if let Some(text) = read_element_text(reader)? {
                            result.set_max_depth(parse_uint(&text)?);
                        }
                    }
                    b"lightSampleNumber" => {
                        if let Some(text) = read_element_text(reader)? {
                            result.set_light_sample_number(parse_uint(&text)?);
                        }
                    }
                    b"BRDFSampleNumber" => {
                        if let Some(text) = read_element_text(reader)? {
                            result.set_brdf_sample_number(parse_uint(&text)?);
                        }
                    }
                    _ => {}
                },
                Ok(Event::End(e)) if e.name().as_ref() == b"integrator" => break,
                Ok(Event::Eof) => return Err(unexpected_eof(b"integrator")),
                Err(e) => return Err(SceneLoadError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }
    }

    Ok(result)
}

fn load_transform(reader: &mut Reader<&[u8]>) -> Result<Transform, SceneLoadError> {
    let mut translate = Vector3f::new(0.0, 0.0, 0.0);
    let mut rotate = Vector3f::new(0.0, 0.0, 0.0);
    let mut scale = Vector3f::new(1.0, 1.0, 1.0);

    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"translate" => {
                    if let Some(text) = read_element_text(reader)? {
                        translate = parse_vec3(&text)?;
                    }
                }
                b"rotate" => {
                    if let Some(text) = read_element_text(reader)? {
                        rotate = parse_vec3(&text)?;
                    }
                }
                b"scale" => {
                    if let Some(text) = read_element_text(reader)? {
                        scale = parse_vec3(&text)?;
                    }
                }
                _ => {}
            },
            Ok(Event::End(e)) if e.name().as_ref() == b"transform" => break,
            Ok(Event::Eof) => return Err(unexpected_eof(b"transform")),
            Err(e) => return Err(SceneLoadError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(Transform::from_trs(translate, rotate, scale))
}

// The first text run decides the value, wherever it sits before the end
// tag. No text at all is an error: a declared sample length must carry
// a count.
fn load_pixel_sample_length(reader: &mut Reader<&[u8]>, tag: &[u8]) -> Result<UInt, SceneLoadError> {
    let mut buf = Vec::new();
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(SceneLoadError::Xml)?;
                return text.trim().parse::<UInt>()
                    .map_err(|_| SceneLoadError::MalformedPixelSampleLength);
            }
            Ok(Event::End(e)) if e.name().as_ref() == tag => break,
            Ok(Event::Eof) => return Err(unexpected_eof(tag)),
            Err(e) => return Err(SceneLoadError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Err(SceneLoadError::MalformedPixelSampleLength)
}

// A document that ends inside an element is truncated, not complete.
// Reported the way quick-xml itself reports a missed end tag.
fn unexpected_eof(tag: &[u8]) -> SceneLoadError {
    SceneLoadError::Xml(quick_xml::Error::UnexpectedEof(
        format!("</{}>", String::from_utf8_lossy(tag))))
}

// Reads the element's immediate text content. The cursor reads exactly
// one event, plus the end tag when text was found; whitespace-only
// content was trimmed away by the reader and counts as absent.
fn read_element_text(reader: &mut Reader<&[u8]>) -> Result<Option<String>, SceneLoadError> {
    let mut buf = Vec::new();
    match reader.read_event_into(&mut buf) {
        Ok(Event::Text(e)) => {
            let text = e.unescape().map_err(SceneLoadError::Xml)?.to_string();
            let mut end_buf = Vec::new();
            if let Err(err) = reader.read_event_into(&mut end_buf) {
                return Err(SceneLoadError::Xml(err));
            }
            Ok(Some(text))
        }
        Ok(_) => Ok(None),
        Err(e) => Err(SceneLoadError::Xml(e)),
    }
}

fn skip_to_end(reader: &mut Reader<&[u8]>, tag: &[u8]) -> Result<(), SceneLoadError> {
    let mut buf = Vec::new();
    let mut depth = 0usize;
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.name().as_ref() == tag {
                    depth += 1;
                }
            }
            Ok(Event::End(e)) if e.name().as_ref() == tag => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
            }
            Ok(Event::Eof) => return Err(unexpected_eof(tag)),
            Err(e) => return Err(SceneLoadError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }
    Ok(())
}

// An attribute set to the empty string is treated the same as an absent
// attribute.
fn attribute_value(start: &BytesStart, key: &[u8]) -> Option<String> {
    for attr in start.attributes().flatten() {
        if attr.key.as_ref() == key {
            let value = attr.unescape_value().unwrap_or_default().to_string();
            if value.is_empty() {
                return None;
            }
            return Some(value);
        }
    }
    None
}

fn float_attribute(start: &BytesStart, key: &[u8], default: Float) -> Result<Float, SceneLoadError> {
    match attribute_value(start, key) {
        Some(value) => parse_float(&value),
        None => Ok(default),
    }
}

fn color_attribute(start: &BytesStart, key: &[u8], default: Float) -> Result<RGBSpectrum, SceneLoadError> {
    match attribute_value(start, key) {
        Some(value) => parse_color(&value),
        None => Ok(RGBSpectrum::new(default, default, default)),
    }
}

fn parse_float(value: &str) -> Result<Float, SceneLoadError> {
    value.parse::<Float>().map_err(|_| SceneLoadError::Parse(format!("invalid float: {}", value)))
}

fn parse_uint(value: &str) -> Result<UInt, SceneLoadError> {
    value.parse::<UInt>().map_err(|_| SceneLoadError::Parse(format!("invalid integer: {}", value)))
}

// Vector literals are whitespace separated. Fewer than three components
// is an error; surplus tokens are ignored.
fn parse_vec3(value: &str) -> Result<Vector3f, SceneLoadError> {
    let mut parts = value.split_whitespace();
    let mut result = Vector3f::new(0.0, 0.0, 0.0);
    for idx in 0..3 {
        let token = parts.next().ok_or_else(|| {
            SceneLoadError::MalformedVector(
                format!("expected 3 components, found {}: {}", idx, value))
        })?;
        result[idx] = token.parse::<Float>().map_err(|_| {
            SceneLoadError::MalformedVector(format!("invalid component: {}", token))
        })?;
    }
    Ok(result)
}

fn parse_color(value: &str) -> Result<RGBSpectrum, SceneLoadError> {
    let v = parse_vec3(value)?;
    Ok(RGBSpectrum::new(v.x, v.y, v.z))
}
