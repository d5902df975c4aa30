//! CPU-side triangle geometry.
//!
//! [`Geometry`] is what the merged representation is built from: the base
//! cube is cloned per instance, its transform baked into the vertex data and
//! all copies concatenated into one buffer. Upload happens later through
//! [`Mesh::from_geometry`](crate::data_structures::model::Mesh::from_geometry).

use cgmath::{InnerSpace, Matrix, SquareMatrix};

use crate::data_structures::model::ModelVertex;

/// Vertices per cube: four per face so every face gets its own normal.
pub const CUBE_VERTICES: usize = 24;
/// Indices per cube: two triangles per face.
pub const CUBE_INDICES: usize = 36;

/// An indexed triangle list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub vertices: Vec<ModelVertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    /// Axis-aligned cube centred on the origin with edge length `size`.
    ///
    /// Faces wind counter-clockwise when seen from outside.
    pub fn cube(size: f32) -> Self {
        // (normal, u, v) with u x v = normal
        let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
            ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
            ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
            ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ];
        let half = size / 2.0;
        let mut geometry = Geometry {
            vertices: Vec::with_capacity(CUBE_VERTICES),
            indices: Vec::with_capacity(CUBE_INDICES),
        };
        for (normal, u, v) in faces {
            let n: cgmath::Vector3<f32> = normal.into();
            let u: cgmath::Vector3<f32> = u.into();
            let v: cgmath::Vector3<f32> = v.into();
            let base = geometry.vertices.len() as u32;
            for (su, sv) in [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)] {
                let position = (n + u * su + v * sv) * half;
                geometry.vertices.push(ModelVertex {
                    position: position.into(),
                    normal,
                });
            }
            geometry
                .indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
        geometry
    }

    /// Copy of `self` with `matrix` baked into positions and normals.
    pub fn transformed(&self, matrix: &cgmath::Matrix4<f32>) -> Self {
        let linear = cgmath::Matrix3::from_cols(
            matrix.x.truncate(),
            matrix.y.truncate(),
            matrix.z.truncate(),
        );
        // Inverse transpose keeps normals perpendicular under non-uniform scale
        let normal_matrix = linear
            .invert()
            .map(|inverse| inverse.transpose())
            .unwrap_or(linear);
        let vertices = self
            .vertices
            .iter()
            .map(|vertex| {
                let position: cgmath::Vector3<f32> = vertex.position.into();
                let normal: cgmath::Vector3<f32> = vertex.normal.into();
                ModelVertex {
                    position: (*matrix * position.extend(1.0)).truncate().into(),
                    normal: (normal_matrix * normal).normalize().into(),
                }
            })
            .collect();
        Self {
            vertices,
            indices: self.indices.clone(),
        }
    }

    /// Concatenate `parts` into one geometry, rebasing each part's indices.
    pub fn merge<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Geometry>,
    {
        let mut merged = Geometry::default();
        for mut part in parts {
            let offset = merged.vertices.len() as u32;
            merged.vertices.append(&mut part.vertices);
            merged
                .indices
                .extend(part.indices.into_iter().map(|index| index + offset));
        }
        merged
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
