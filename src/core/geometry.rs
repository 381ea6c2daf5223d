// Copyright @yucwang 2026

use std::path::Path;

use wavefront_obj::obj;

use crate::core::bvh::BVH;
use crate::io::obj_utils::{self, ObjLoadError};
use crate::math::aabb::AABB;
use crate::math::constants::{Float, PI, Vector2f, Vector3f};
use crate::math::transform::Transform;

// Inner radius of the unit ring, as a fraction of the outer radius.
pub const RING_INNER_RADIUS: Float = 0.5;

pub struct Triangle {
    p0: Vector3f,
    p1: Vector3f,
    p2: Vector3f,
}

impl Triangle {
    pub fn new(p0: Vector3f, p1: Vector3f, p2: Vector3f) -> Self {
        Self { p0, p1, p2 }
    }

    pub fn vertices(&self) -> (Vector3f, Vector3f, Vector3f) {
        (self.p0, self.p1, self.p2)
    }

    pub fn bounding_box(&self) -> AABB {
        let mut bounds = AABB::new(self.p0, self.p1);
        bounds.expand_by_point(&self.p2);
        bounds
    }

    pub fn surface_area(&self) -> Float {
        0.5 * ((self.p1 - self.p0).cross(&(self.p2 - self.p0))).norm()
    }

    pub fn geometric_normal(&self) -> Vector3f {
        (self.p1 - self.p0).cross(&(self.p2 - self.p0)).normalize()
    }

    pub fn transformed(&self, transform: &Transform) -> Triangle {
        Triangle::new(transform.apply_point(self.p0),
                      transform.apply_point(self.p1),
                      transform.apply_point(self.p2))
    }
}

/// Triangle soup imported from a wavefront obj file. Vertex positions are
/// kept in the object's local space; the owning [`Geometry`] carries the
/// transform into world space.
pub struct Mesh {
    triangles: Vec<Triangle>,
    tri_normals: Vec<Vector3f>,
    tri_uvs: Vec<[Vector2f; 3]>,
    bvh: Option<BVH>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
            tri_normals: Vec::new(),
            tri_uvs: Vec::new(),
            bvh: None,
        }
    }

    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, ObjLoadError> {
        let obj_set = obj_utils::load_obj_from_file(path)?;
        Ok(Self::from_obj_set(obj_set))
    }

    pub fn from_obj_str<S: AsRef<str>>(input: S) -> Result<Self, ObjLoadError> {
        let obj_set = obj_utils::load_obj_from_str(input)?;
        Ok(Self::from_obj_set(obj_set))
    }

    fn from_obj_set(obj_set: obj::ObjSet) -> Self {
        let mut mesh = Mesh::new();

        for object in obj_set.objects {
            let vertices: Vec<Vector3f> = object.vertices.iter()
                .map(|v| Vector3f::new(v.x as f32, v.y as f32, v.z as f32))
                .collect();
            let normals: Vec<Vector3f> = object.normals.iter()
                .map(|n| Vector3f::new(n.x as f32, n.y as f32, n.z as f32))
                .collect();
            let uvs: Vec<Vector2f> = object.tex_vertices.iter()
                .map(|vt| Vector2f::new(vt.u as f32, vt.v as f32))
                .collect();

            for group in &object.geometry {
                for shape in &group.shapes {
                    if let obj::Primitive::Triangle(a, b, c) = shape.primitive {
                        let p0 = vertices[a.0];
                        let p1 = vertices[b.0];
                        let p2 = vertices[c.0];

                        // Averaged vertex normals when the file carries them,
                        // geometric normal otherwise.
                        let normal = match (a.2, b.2, c.2) {
                            (Some(n0), Some(n1), Some(n2)) => {
                                (normals[n0] + normals[n1] + normals[n2]).normalize()
                            }
                            _ => (p1 - p0).cross(&(p2 - p0)).normalize(),
                        };

                        let uv = [
                            a.1.map(|i| uvs[i]).unwrap_or_else(Vector2f::zeros),
                            b.1.map(|i| uvs[i]).unwrap_or_else(Vector2f::zeros),
                            c.1.map(|i| uvs[i]).unwrap_or_else(Vector2f::zeros),
                        ];

                        mesh.triangles.push(Triangle::new(p0, p1, p2));
                        mesh.tri_normals.push(normal);
                        mesh.tri_uvs.push(uv);
                    }
                }
            }
        }

        mesh
    }

    pub fn triangles(&self) -> &Vec<Triangle> {
        &self.triangles
    }

    pub fn tri_normals(&self) -> &Vec<Vector3f> {
        &self.tri_normals
    }

    pub fn tri_uvs(&self) -> &Vec<[Vector2f; 3]> {
        &self.tri_uvs
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn build_bvh(&mut self) {
        if self.triangles.is_empty() {
            self.bvh = None;
            return;
        }

        let mut prim_bounds = Vec::with_capacity(self.triangles.len());
        let mut prim_centroids = Vec::with_capacity(self.triangles.len());
        for tri in &self.triangles {
            let bounds = tri.bounding_box();
            prim_centroids.push(bounds.center());
            prim_bounds.push(bounds);
        }

        self.bvh = Some(BVH::new(prim_bounds, prim_centroids));
    }

    pub fn bvh(&self) -> Option<&BVH> {
        self.bvh.as_ref()
    }
}

pub enum GeometryKind {
    Mesh(Mesh),
    Sphere,
    Square,
    Cube,
    Disc,
    Ring,
}

/// A scene object: a shape in its local space plus the transform that
/// places it in the world. The bound material is an index into the
/// scene's material list; `None` means no declared material referenced
/// this geometry by name.
pub struct Geometry {
    name: String,
    kind: GeometryKind,
    transform: Transform,
    material: Option<usize>,
    bounds: AABB,
    area: Float,
}

impl Geometry {
    pub fn new(name: String, kind: GeometryKind) -> Self {
        Self {
            name,
            kind,
            transform: Transform::default(),
            material: None,
            bounds: AABB::default(),
            area: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &GeometryKind {
        &self.kind
    }

    pub fn kind_mut(&mut self) -> &mut GeometryKind {
        &mut self.kind
    }

    pub fn type_name(&self) -> &'static str {
        match self.kind {
            GeometryKind::Mesh(_) => "obj",
            GeometryKind::Sphere => "sphere",
            GeometryKind::Square => "square",
            GeometryKind::Cube => "cube",
            GeometryKind::Disc => "disc",
            GeometryKind::Ring => "ring",
        }
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    pub fn material(&self) -> Option<usize> {
        self.material
    }

    pub fn set_material(&mut self, material: usize) {
        self.material = Some(material);
    }

    pub fn bounds(&self) -> AABB {
        self.bounds
    }

    pub fn area(&self) -> Float {
        self.area
    }

    /// Recomputes the world-space bounding box from the local shape and
    /// the current transform. An empty mesh keeps the default inverted box.
    pub fn compute_bounds(&mut self) {
        let mut bounds = AABB::default();
        match &self.kind {
            GeometryKind::Mesh(mesh) => {
                for tri in mesh.triangles() {
                    let (p0, p1, p2) = tri.vertices();
                    bounds.expand_by_point(&self.transform.apply_point(p0));
                    bounds.expand_by_point(&self.transform.apply_point(p1));
                    bounds.expand_by_point(&self.transform.apply_point(p2));
                }
            }
            GeometryKind::Sphere | GeometryKind::Cube => {
                for ix in 0..2 {
                    for iy in 0..2 {
                        for iz in 0..2 {
                            let corner = Vector3f::new(ix as Float * 2.0 - 1.0,
                                                       iy as Float * 2.0 - 1.0,
                                                       iz as Float * 2.0 - 1.0);
                            bounds.expand_by_point(&self.transform.apply_point(corner));
                        }
                    }
                }
            }
            GeometryKind::Square | GeometryKind::Disc | GeometryKind::Ring => {
                let corners = [
                    Vector3f::new(-1.0, -1.0, 0.0),
                    Vector3f::new(1.0, -1.0, 0.0),
                    Vector3f::new(1.0, 1.0, 0.0),
                    Vector3f::new(-1.0, 1.0, 0.0),
                ];
                for corner in corners.iter() {
                    bounds.expand_by_point(&self.transform.apply_point(*corner));
                }
            }
        }
        self.bounds = bounds;
    }

    /// Finalizes the geometry once parsing and binding are done: the
    /// world bounds and the world-space surface area.
    pub fn finalize(&mut self) {
        self.compute_bounds();
        self.area = self.compute_area();
    }

    fn compute_area(&self) -> Float {
        match &self.kind {
            GeometryKind::Mesh(mesh) => mesh.triangles().iter()
                .map(|tri| tri.transformed(&self.transform).surface_area())
                .sum(),
            GeometryKind::Sphere => {
                // Thomsen's approximation over the transformed principal axes.
                let a = self.transform.apply_vector(Vector3f::new(1.0, 0.0, 0.0)).norm();
                let b = self.transform.apply_vector(Vector3f::new(0.0, 1.0, 0.0)).norm();
                let c = self.transform.apply_vector(Vector3f::new(0.0, 0.0, 1.0)).norm();
                let p = 1.6075;
                let ap = a.powf(p);
                let bp = b.powf(p);
                let cp = c.powf(p);
                4.0 * PI * ((ap * bp + ap * cp + bp * cp) / 3.0).powf(1.0 / p)
            }
            GeometryKind::Square => {
                let dp_du = self.transform.apply_vector(Vector3f::new(2.0, 0.0, 0.0));
                let dp_dv = self.transform.apply_vector(Vector3f::new(0.0, 2.0, 0.0));
                dp_du.cross(&dp_dv).norm()
            }
            GeometryKind::Cube => {
                let dx = self.transform.apply_vector(Vector3f::new(2.0, 0.0, 0.0));
                let dy = self.transform.apply_vector(Vector3f::new(0.0, 2.0, 0.0));
                let dz = self.transform.apply_vector(Vector3f::new(0.0, 0.0, 2.0));
                let area_xy = dx.cross(&dy).norm();
                let area_xz = dx.cross(&dz).norm();
                let area_yz = dy.cross(&dz).norm();
                2.0 * (area_xy + area_xz + area_yz)
            }
            GeometryKind::Disc => {
                let du = self.transform.apply_vector(Vector3f::new(1.0, 0.0, 0.0));
                let dv = self.transform.apply_vector(Vector3f::new(0.0, 1.0, 0.0));
                PI * du.cross(&dv).norm()
            }
            GeometryKind::Ring => {
                let du = self.transform.apply_vector(Vector3f::new(1.0, 0.0, 0.0));
                let dv = self.transform.apply_vector(Vector3f::new(0.0, 1.0, 0.0));
                (1.0 - RING_INNER_RADIUS * RING_INNER_RADIUS) * PI * du.cross(&dv).norm()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: Float = 1e-3;

    #[test]
    fn test_triangle_geometry() {
        let tri = Triangle::new(Vector3f::new(0.0, 0.0, 0.0),
                                Vector3f::new(2.0, 0.0, 0.0),
                                Vector3f::new(0.0, 2.0, 0.0));

        let bounds = tri.bounding_box();
        assert_eq!(bounds.p_min, Vector3f::new(0.0, 0.0, 0.0));
        assert_eq!(bounds.p_max, Vector3f::new(2.0, 2.0, 0.0));

        assert!((tri.surface_area() - 2.0).abs() < TOLERANCE);
        assert_eq!(tri.geometric_normal(), Vector3f::new(0.0, 0.0, 1.0));

        let moved = tri.transformed(&Transform::from_trs(
            Vector3f::new(0.0, 0.0, 5.0),
            Vector3f::new(0.0, 0.0, 0.0),
            Vector3f::new(1.0, 1.0, 1.0)));
        assert!((moved.vertices().0[2] - 5.0).abs() < TOLERANCE);
        assert!((moved.surface_area() - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_mesh_from_obj_str() {
        let input = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0.0 1.0 0.0
f 1 2 3 4
";
        let mut mesh = Mesh::from_obj_str(input).expect("failed to parse obj");
        assert_eq!(mesh.triangle_count(), 2);
        // No vertex normals in the file: geometric normals are used.
        assert_eq!(mesh.tri_normals()[0], Vector3f::new(0.0, 0.0, 1.0));

        mesh.build_bvh();
        let bvh = mesh.bvh().expect("bvh missing after build");
        assert_eq!(bvh.primitive_count(), 2);
    }

    #[test]
    fn test_empty_mesh_has_no_bvh() {
        let mut mesh = Mesh::new();
        mesh.build_bvh();
        assert!(mesh.bvh().is_none());
    }

    #[test]
    fn test_sphere_area() {
        let mut sphere = Geometry::new(String::from("ball"), GeometryKind::Sphere);
        sphere.finalize();
        assert!((sphere.area() - 4.0 * PI).abs() < TOLERANCE);

        // Uniform scale keeps the approximation exact.
        sphere.set_transform(Transform::from_trs(Vector3f::new(0.0, 0.0, 0.0),
                                                 Vector3f::new(0.0, 0.0, 0.0),
                                                 Vector3f::new(2.0, 2.0, 2.0)));
        sphere.finalize();
        assert!((sphere.area() - 16.0 * PI).abs() < 16.0 * PI * 1e-4);
    }

    #[test]
    fn test_flat_shape_areas() {
        let mut square = Geometry::new(String::new(), GeometryKind::Square);
        square.finalize();
        assert!((square.area() - 4.0).abs() < TOLERANCE);

        square.set_transform(Transform::from_trs(Vector3f::new(1.0, 2.0, 3.0),
                                                 Vector3f::new(0.0, 0.0, 0.0),
                                                 Vector3f::new(3.0, 2.0, 1.0)));
        square.finalize();
        assert!((square.area() - 24.0).abs() < TOLERANCE);

        let mut disc = Geometry::new(String::new(), GeometryKind::Disc);
        disc.finalize();
        assert!((disc.area() - PI).abs() < TOLERANCE);

        let mut ring = Geometry::new(String::new(), GeometryKind::Ring);
        ring.finalize();
        assert!((ring.area() - 0.75 * PI).abs() < TOLERANCE);
    }

    #[test]
    fn test_cube_area_and_bounds() {
        let mut cube = Geometry::new(String::new(), GeometryKind::Cube);
        cube.set_transform(Transform::from_trs(Vector3f::new(5.0, 0.0, 0.0),
                                               Vector3f::new(0.0, 0.0, 0.0),
                                               Vector3f::new(1.0, 1.0, 1.0)));
        cube.finalize();

        // Translation moves the bounds but never changes surface area.
        assert!((cube.area() - 24.0).abs() < TOLERANCE);
        let bounds = cube.bounds();
        assert!((bounds.p_min[0] - 4.0).abs() < TOLERANCE);
        assert!((bounds.p_max[0] - 6.0).abs() < TOLERANCE);
        assert!((bounds.p_min[1] + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_mesh_area_follows_transform() {
        let input = "\
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 0.0 1.0 0.0
f 1 2 3
";
        let mesh = Mesh::from_obj_str(input).expect("failed to parse obj");
        let mut geometry = Geometry::new(String::from("tri"), GeometryKind::Mesh(mesh));
        geometry.set_transform(Transform::from_trs(Vector3f::new(0.0, 0.0, 0.0),
                                                   Vector3f::new(0.0, 0.0, 0.0),
                                                   Vector3f::new(2.0, 2.0, 1.0)));
        geometry.finalize();

        // A half-unit triangle scaled by 2 in x and y.
        assert!((geometry.area() - 2.0).abs() < TOLERANCE);
        assert!(geometry.bounds().is_valid());
        assert!((geometry.bounds().p_max[0] - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_empty_mesh_bounds_stay_invalid() {
        let mut geometry = Geometry::new(String::new(), GeometryKind::Mesh(Mesh::new()));
        geometry.finalize();
        assert!(!geometry.bounds().is_valid());
        assert_eq!(geometry.area(), 0.0);
    }
}
