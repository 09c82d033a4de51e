/*
 * Mesh Module
 *
 * The feather template every feather instance is drawn with.
 * Local +X runs along the shaft from the quill (x = 0) to the tip,
 * local +Z spans the vane and local +Y is its thickness.
 *
 * A simple procedural vane is built in; a Wavefront OBJ file can be
 * loaded instead.
 */

use std::fs;
use std::path::Path;

use nannou::prelude::*;

use crate::error::{Result, WingError};

#[derive(Clone, Debug, PartialEq)]
pub struct FeatherMesh {
    pub positions: Vec<Vec3>,
    pub triangles: Vec<[u32; 3]>,
}

impl Default for FeatherMesh {
    fn default() -> Self {
        Self::vane()
    }
}

impl FeatherMesh {
    // Procedural vane: a strip of quads narrowing to a rounded tip
    pub fn vane() -> Self {
        // (distance along shaft, half width of the vane, camber)
        const STATIONS: [(f32, f32, f32); 7] = [
            (0.0, 0.015, 0.0),
            (0.12, 0.05, 0.004),
            (0.3, 0.075, 0.008),
            (0.5, 0.08, 0.01),
            (0.7, 0.075, 0.008),
            (0.86, 0.055, 0.005),
            (0.96, 0.025, 0.002),
        ];

        let mut positions = Vec::with_capacity(STATIONS.len() * 2 + 1);
        for &(x, half_width, camber) in &STATIONS {
            positions.push(vec3(x, camber, -half_width));
            positions.push(vec3(x, camber, half_width));
        }
        positions.push(vec3(1.0, 0.0, 0.0));

        let mut triangles = Vec::with_capacity(STATIONS.len() * 2);
        for s in 0..STATIONS.len() as u32 - 1 {
            let (a, b, c, d) = (2 * s, 2 * s + 1, 2 * s + 2, 2 * s + 3);
            triangles.push([a, c, b]);
            triangles.push([b, c, d]);
        }
        let tip = positions.len() as u32 - 1;
        triangles.push([tip - 2, tip, tip - 1]);

        Self { positions, triangles }
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    // Load an OBJ file from disk
    pub fn load_obj(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path).map_err(|source| WingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mesh = Self::parse_obj(&source)?;
        tracing::info!(
            path = %path.display(),
            vertices = mesh.positions.len(),
            triangles = mesh.triangles.len(),
            "loaded feather mesh"
        );
        Ok(mesh)
    }

    /// Parse the geometry of a Wavefront OBJ document.
    ///
    /// Only `v` and `f` records are used; all objects and groups are merged.
    /// Polygons are fan-triangulated and face indices may be 1-based or
    /// negative (relative to the vertices read so far).
    pub fn parse_obj(source: &str) -> Result<Self> {
        let mut positions = Vec::new();
        let mut triangles = Vec::new();

        for (line_index, line) in source.lines().enumerate() {
            let line_number = line_index + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split_whitespace();
            match parts.next() {
                Some("v") => {
                    let coords: Vec<f32> = parts
                        .take(3)
                        .map(|p| p.parse::<f32>())
                        .collect::<std::result::Result<_, _>>()
                        .map_err(|err| obj_error(line_number, format!("bad vertex coordinate: {err}")))?;
                    if coords.len() < 3 {
                        return Err(obj_error(line_number, "vertex needs three coordinates".into()));
                    }
                    positions.push(vec3(coords[0], coords[1], coords[2]));
                }
                Some("f") => {
                    let face = parts
                        .map(|p| resolve_index(p, positions.len()).ok_or_else(|| obj_error(line_number, format!("bad face index '{p}'"))))
                        .collect::<Result<Vec<u32>>>()?;
                    if face.len() < 3 {
                        return Err(obj_error(line_number, "face needs at least three vertices".into()));
                    }
                    // Fan triangulation for convex polygons
                    for i in 1..face.len() - 1 {
                        triangles.push([face[0], face[i], face[i + 1]]);
                    }
                }
                _ => {}
            }
        }

        if triangles.is_empty() {
            return Err(WingError::EmptyMesh);
        }

        Ok(Self { positions, triangles })
    }
}

fn obj_error(line: usize, message: String) -> WingError {
    WingError::ObjParse { line, message }
}

// Resolve "v", "v/vt", "v//vn" or "v/vt/vn" to a 0-based position index
fn resolve_index(reference: &str, vertex_count: usize) -> Option<u32> {
    let raw: i64 = reference.split('/').next()?.parse().ok()?;
    let index = if raw > 0 {
        raw - 1
    } else if raw < 0 {
        vertex_count as i64 + raw
    } else {
        return None;
    };
    if index < 0 || index >= vertex_count as i64 {
        return None;
    }
    Some(index as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vane_indices_are_in_bounds() {
        let mesh = FeatherMesh::vane();
        assert_eq!(mesh.triangle_count(), 13);
        let count = mesh.positions.len() as u32;
        assert!(mesh.triangles.iter().flatten().all(|&i| i < count));
        // Shaft runs from the quill to the tip along +X
        assert_eq!(mesh.positions.last().copied(), Some(vec3(1.0, 0.0, 0.0)));
    }

    #[test]
    fn parses_triangles_and_fans_quads() {
        let source = "\
# feather
o feather
v 0 0 0
v 1 0 0
v 1 0 1
v 0 0 1
vt 0 0
vn 0 1 0
f 1/1/1 2/1/1 3/1/1
f 1//1 2//1 3//1 4//1
";
        let mesh = FeatherMesh::parse_obj(source).unwrap();
        assert_eq!(mesh.positions.len(), 4);
        assert_eq!(mesh.triangles, vec![[0, 1, 2], [0, 1, 2], [0, 2, 3]]);
    }

    #[test]
    fn negative_indices_are_relative() {
        let source = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf -3 -2 -1\n";
        let mesh = FeatherMesh::parse_obj(source).unwrap();
        assert_eq!(mesh.triangles, vec![[0, 1, 2]]);
    }

    #[test]
    fn rejects_out_of_range_faces() {
        let err = FeatherMesh::parse_obj("v 0 0 0\nv 1 0 0\nf 1 2 3\n").unwrap_err();
        assert!(matches!(err, WingError::ObjParse { line: 3, .. }));
    }

    #[test]
    fn rejects_malformed_vertices() {
        let err = FeatherMesh::parse_obj("v 0 zero 0\n").unwrap_err();
        assert!(matches!(err, WingError::ObjParse { line: 1, .. }));
        let err = FeatherMesh::parse_obj("v 0 0\n").unwrap_err();
        assert!(matches!(err, WingError::ObjParse { line: 1, .. }));
    }

    #[test]
    fn mesh_without_faces_is_empty() {
        let err = FeatherMesh::parse_obj("v 0 0 0\nv 1 1 1\n").unwrap_err();
        assert!(matches!(err, WingError::EmptyMesh));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FeatherMesh::load_obj(Path::new("/definitely/not/here.obj")).unwrap_err();
        assert!(err.to_string().contains("here.obj"));
    }
}
