//! # Storage Churn Scenario
//!
//! End-to-end exercise of the deferred-compaction contract at editor
//! scale: 100,000 entities with components across several storages,
//! random removal of a tenth of them, compaction, then an ordered
//! removal wave and a second compaction.
//!
//! Run with: cargo test --test churn_scenario

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};

use ember_world::{Component, Entity, World};

const ENTITY_COUNT: usize = 100_000;
const WAVE: usize = ENTITY_COUNT / 10;

#[derive(Default)]
struct Placement {
    slot: u64,
}

impl Component for Placement {}

#[derive(Default)]
struct Tag;

impl Component for Tag {}

fn populate(world: &mut World) -> Vec<Entity> {
    let entities: Vec<Entity> = (0..ENTITY_COUNT).map(|_| world.create_entity()).collect();
    for &entity in &entities {
        world.create_component::<Placement>(entity).slot = u64::from(entity.raw());
        world.create_component::<Tag>(entity);
    }
    entities
}

fn assert_survivors_intact(world: &World, survivors: &[Entity]) {
    let placements = world.components::<Placement>();
    for &entity in survivors {
        assert!(placements.contains(entity), "{entity} vanished");
        let placement = placements.get(entity).expect("live entity must resolve");
        assert_eq!(
            placement.slot,
            u64::from(entity.raw()),
            "{entity} came back with someone else's data"
        );
    }
}

#[test]
fn churn_hundred_thousand_entities() {
    let mut world = World::new();
    world.register::<Placement>();
    world.register::<Tag>();

    let entities = populate(&mut world);
    assert_eq!(world.components::<Placement>().count(), ENTITY_COUNT);
    assert_eq!(world.components::<Placement>().capacity(), ENTITY_COUNT);
    assert_eq!(world.components::<Tag>().count(), ENTITY_COUNT);

    // Wave 1: remove a tenth of the entities in random order. Capacity
    // must hold steady while the slots sit waiting as garbage.
    let mut first_wave: Vec<Entity> = entities[WAVE..2 * WAVE].to_vec();
    first_wave.shuffle(&mut StdRng::seed_from_u64(0x0E3B));
    for &entity in &first_wave {
        world.remove_component::<Placement>(entity);
        world.remove_component::<Tag>(entity);
    }

    assert_eq!(world.components::<Placement>().count(), ENTITY_COUNT - WAVE);
    assert_eq!(world.components::<Placement>().capacity(), ENTITY_COUNT);

    world.components_mut::<Placement>().clean_unused();
    world.components_mut::<Tag>().clean_unused();

    assert_eq!(world.components::<Placement>().count(), ENTITY_COUNT - WAVE);
    assert_eq!(world.components::<Placement>().capacity(), ENTITY_COUNT - WAVE);
    assert_eq!(world.components::<Tag>().capacity(), ENTITY_COUNT - WAVE);

    let removed: HashSet<Entity> = entities[WAVE..2 * WAVE].iter().copied().collect();
    let survivors: Vec<Entity> = entities
        .iter()
        .copied()
        .filter(|entity| !removed.contains(entity))
        .collect();
    assert_survivors_intact(&world, &survivors);

    // Wave 2: remove a contiguous range in ascending order, then compact
    // again. This drives the all-skip path of the scan hard.
    for &entity in &entities[2 * WAVE..3 * WAVE] {
        world.remove_component::<Placement>(entity);
        world.remove_component::<Tag>(entity);
    }
    world.components_mut::<Placement>().clean_unused();
    world.components_mut::<Tag>().clean_unused();

    assert_eq!(world.components::<Placement>().count(), ENTITY_COUNT - 2 * WAVE);
    assert_eq!(
        world.components::<Placement>().capacity(),
        ENTITY_COUNT - 2 * WAVE
    );

    let removed: HashSet<Entity> = entities[2 * WAVE..3 * WAVE].iter().copied().collect();
    let survivors: Vec<Entity> = survivors
        .into_iter()
        .filter(|entity| !removed.contains(entity))
        .collect();
    assert_survivors_intact(&world, &survivors);
}
