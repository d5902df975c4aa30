use cgmath::Rad;
use cubefield::{
    data_structures::geometry::Geometry,
    representation::{Mode, Representation},
    scene::Scene,
};

use crate::common::{approx_eq, seeded_rng};

mod common;

#[test]
fn empty_scene_has_no_objects() {
    let scene = Scene::new();
    assert_eq!(scene.object_count(), 0);
    assert_eq!(scene.mode(), None);
    assert_eq!(scene.generation(), 0);
}

#[test]
fn switching_modes_keeps_only_the_new_objects() {
    let base = Geometry::cube(1.0);
    let mut rng = seeded_rng();
    let mut scene = Scene::new();
    let count = 3000;

    assert!(
        scene
            .set_active(Representation::build(Mode::Individual, count, &base, &mut rng))
            .is_none()
    );
    assert_eq!(scene.object_count(), count);

    let detached = scene.set_active(Representation::build(Mode::Merged, count, &base, &mut rng));
    assert_eq!(detached.map(|r| r.mode()), Some(Mode::Individual));
    assert_eq!(scene.object_count(), 1);

    scene.set_active(Representation::build(Mode::Individual, count, &base, &mut rng));
    assert_eq!(scene.object_count(), count);
    assert_eq!(scene.mode(), Some(Mode::Individual));
    assert_eq!(scene.generation(), 3);
}

#[test]
fn shrinking_the_count_drops_the_old_objects() {
    let base = Geometry::cube(1.0);
    let mut rng = seeded_rng();
    let mut scene = Scene::new();

    scene.set_active(Representation::build(Mode::Individual, 20_000, &base, &mut rng));
    let detached = scene.set_active(Representation::build(Mode::Individual, 1000, &base, &mut rng));

    assert_eq!(detached.map(|r| r.object_count()), Some(20_000));
    assert_eq!(scene.object_count(), 1000);
}

#[test]
fn tick_rotates_the_active_representation() {
    let mut scene = Scene::new();
    scene.tick(Rad(0.01));

    scene.set_active(Representation::instanced(1000, &mut seeded_rng()));
    for _ in 0..100 {
        scene.tick(Rad(0.01));
    }
    let object = scene.active().map(|active| active.objects()[0]);
    let object = object.expect("scene has an active representation");
    assert!(approx_eq(object.rotation.x.0, 1.0));
    assert!(approx_eq(object.rotation.y.0, 1.0));
}

#[test]
fn clear_detaches_everything() {
    let mut scene = Scene::new();
    assert!(scene.clear().is_none());
    assert_eq!(scene.generation(), 0);

    scene.set_active(Representation::individual(1000, &mut seeded_rng()));
    let detached = scene.clear();
    assert_eq!(detached.map(|r| r.object_count()), Some(1000));
    assert_eq!(scene.object_count(), 0);
    assert_eq!(scene.generation(), 2);
}
