use cgmath::Rad;
use cubefield::{
    data_structures::geometry::{CUBE_INDICES, CUBE_VERTICES, Geometry},
    layout::grid_x,
    representation::{Mode, Representation},
};

use crate::common::{approx_eq, seeded_rng};

mod common;

#[test]
fn object_count_per_mode() {
    let base = Geometry::cube(1.0);
    let mut rng = seeded_rng();
    let count = 2000;

    let instanced = Representation::build(Mode::Instanced, count, &base, &mut rng);
    let merged = Representation::build(Mode::Merged, count, &base, &mut rng);
    let individual = Representation::build(Mode::Individual, count, &base, &mut rng);

    assert_eq!(instanced.object_count(), 1);
    assert_eq!(merged.object_count(), 1);
    assert_eq!(individual.object_count(), count);
    for representation in [&instanced, &merged, &individual] {
        assert_eq!(representation.cube_count(), count);
    }
    assert_eq!(instanced.mode(), Mode::Instanced);
    assert_eq!(merged.mode(), Mode::Merged);
    assert_eq!(individual.mode(), Mode::Individual);
}

#[test]
fn individual_meshes_follow_the_grid() {
    let representation = Representation::individual(1000, &mut seeded_rng());
    let Representation::Individual(individual) = &representation else {
        panic!("expected individual meshes");
    };
    assert_eq!(individual.meshes.len(), 1000);
    for (i, mesh) in individual.meshes.iter().enumerate() {
        assert_eq!(mesh.position.x, grid_x(i));
        assert_eq!(mesh.position.x, (i % 100) as f32 * 2.0 - 100.0);
    }
}

#[test]
fn merged_geometry_bakes_every_cube() {
    let count = 1000;
    let base = Geometry::cube(1.0);
    let Representation::Merged(merged) = Representation::merged(count, &base, &mut seeded_rng())
    else {
        panic!("expected a merged mesh");
    };
    assert_eq!(merged.geometry.vertex_count(), count * CUBE_VERTICES);
    assert_eq!(merged.geometry.index_count(), count * CUBE_INDICES);

    // Baked cube centres match the layout used by the other representations
    let Representation::Individual(individual) =
        Representation::individual(count, &mut seeded_rng())
    else {
        panic!("expected individual meshes");
    };
    for (i, cube) in merged.geometry.vertices.chunks(CUBE_VERTICES).enumerate() {
        let sum = cube.iter().fold([0.0f32; 3], |acc, v| {
            [acc[0] + v.position[0], acc[1] + v.position[1], acc[2] + v.position[2]]
        });
        let centre = sum.map(|c| c / CUBE_VERTICES as f32);
        let expected = individual.meshes[i].position;
        assert!(approx_eq(centre[0], expected.x));
        assert!(approx_eq(centre[1], expected.y));
        assert!(approx_eq(centre[2], expected.z));
    }

    let indices = &merged.geometry.indices;
    for (i, cube) in indices.chunks(CUBE_INDICES).enumerate() {
        let first = (i * CUBE_VERTICES) as u32;
        assert!(
            cube.iter()
                .all(|&index| (first..first + CUBE_VERTICES as u32).contains(&index))
        );
    }
}

#[test]
fn hundred_ticks_rotate_one_radian() {
    let mut representation = Representation::instanced(1000, &mut seeded_rng());
    for _ in 0..100 {
        representation.rotate(Rad(0.01));
    }
    let object = representation.objects()[0];
    assert!(approx_eq(object.rotation.x.0, 1.0));
    assert!(approx_eq(object.rotation.y.0, 1.0));
    assert_eq!(object.rotation.z.0, 0.0);
}

#[test]
fn rotating_individual_meshes_turns_each_cube() {
    let mut representation = Representation::individual(1000, &mut seeded_rng());
    representation.rotate(Rad(0.01));
    assert!(
        representation
            .objects()
            .iter()
            .all(|object| approx_eq(object.rotation.x.0, 0.01) && approx_eq(object.rotation.y.0, 0.01))
    );
}

#[test]
fn instanced_slots_are_not_rotated() {
    let mut representation = Representation::instanced(1000, &mut seeded_rng());
    representation.rotate(Rad(0.5));
    let Representation::Instanced(batch) = &representation else {
        panic!("expected an instanced batch");
    };
    assert!(batch.instances.iter().all(|slot| slot.rotation.x.0 == 0.0));
    assert!(approx_eq(batch.transform.rotation.x.0, 0.5));
}

#[test]
fn mode_from_toggle() {
    assert_eq!(Mode::from_use_merged(true), Mode::Merged);
    assert_eq!(Mode::from_use_merged(false), Mode::Individual);
    assert_eq!(Mode::Individual.to_string(), "individual");
}
