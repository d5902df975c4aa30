use cgmath::{InnerSpace, Matrix4, Rad, Vector3};
use cubefield::data_structures::{
    geometry::{CUBE_INDICES, CUBE_VERTICES, Geometry},
    instance::{InstanceRaw, Transform},
};

use crate::common::approx_eq;

mod common;

#[test]
fn cube_has_outward_counter_clockwise_faces() {
    let cube = Geometry::cube(2.0);
    assert_eq!(cube.vertex_count(), CUBE_VERTICES);
    assert_eq!(cube.index_count(), CUBE_INDICES);

    for triangle in cube.indices.chunks(3) {
        let [a, b, c] = [0, 1, 2].map(|k| {
            let position: Vector3<f32> = cube.vertices[triangle[k] as usize].position.into();
            position
        });
        let normal: Vector3<f32> = cube.vertices[triangle[0] as usize].normal.into();
        let winding = (b - a).cross(c - a).normalize();
        assert!(approx_eq(winding.dot(normal), 1.0));
        // Faces sit one half edge away from the centre
        assert!(approx_eq(a.dot(normal), 1.0));
    }
}

#[test]
fn transformed_moves_positions_and_turns_normals() {
    let cube = Geometry::cube(1.0);
    let matrix = Matrix4::from_translation(Vector3::new(10.0, 0.0, 0.0))
        * Matrix4::from_angle_z(Rad(std::f32::consts::FRAC_PI_2));
    let moved = cube.transformed(&matrix);

    assert_eq!(moved.indices, cube.indices);
    // +X face normal rotates to +Y
    let normal = moved.vertices[0].normal;
    assert!(approx_eq(normal[0], 0.0));
    assert!(approx_eq(normal[1], 1.0));
    let centre_x =
        moved.vertices.iter().map(|v| v.position[0]).sum::<f32>() / CUBE_VERTICES as f32;
    assert!(approx_eq(centre_x, 10.0));
}

#[test]
fn merge_rebases_indices() {
    let cube = Geometry::cube(1.0);
    let merged = Geometry::merge(vec![cube.clone(), cube.clone(), cube.clone()]);
    assert_eq!(merged.vertex_count(), 3 * CUBE_VERTICES);
    assert_eq!(merged.index_count(), 3 * CUBE_INDICES);
    assert_eq!(merged.indices[CUBE_INDICES], CUBE_VERTICES as u32);
    assert_eq!(merged.indices[2 * CUBE_INDICES], 2 * CUBE_VERTICES as u32);
    assert_eq!(
        *merged.indices.iter().max().unwrap_or(&0),
        3 * CUBE_VERTICES as u32 - 1
    );
}

#[test]
fn merging_nothing_is_empty() {
    assert!(Geometry::merge(Vec::new()).is_empty());
}

#[test]
fn transform_packs_translation_into_the_last_column() {
    let transform = Transform::from(Vector3::new(4.0, -2.0, 7.5));
    let raw = transform.to_instance().to_raw();
    assert_eq!(raw.model[3], [4.0, -2.0, 7.5, 1.0]);
    assert_eq!(raw.normal, InstanceRaw::identity().normal);
}
