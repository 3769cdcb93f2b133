//! Variant rings and the registry.

mod common;

use chisel_engine::error::ConfigError;
use chisel_engine::variant::{VariantRegistry, VariantRing};
use chisel_engine::world::block::BlockType;

use common::{block, ring};

fn ids(range: std::ops::Range<u16>) -> Vec<BlockType> {
    range.map(BlockType).collect()
}

#[test]
fn next_and_previous_wrap() {
    let r = VariantRing::new("test", ids(10..14)).unwrap();
    assert_eq!(r.next(BlockType(10)), Some(BlockType(11)));
    assert_eq!(r.next(BlockType(13)), Some(BlockType(10)));
    assert_eq!(r.previous(BlockType(10)), Some(BlockType(13)));
    assert_eq!(r.previous(BlockType(12)), Some(BlockType(11)));
    assert_eq!(r.next(BlockType(99)), None);
    assert_eq!(r.previous(BlockType(99)), None);
}

#[test]
fn next_and_previous_are_inverse() {
    let r = VariantRing::new("test", ids(1..8)).unwrap();
    for member in r.members() {
        assert_eq!(r.previous(r.next(member).unwrap()), Some(member));
        assert_eq!(r.next(r.previous(member).unwrap()), Some(member));
    }
}

#[test]
fn stepping_size_times_returns_home() {
    let r = VariantRing::new("test", ids(3..9)).unwrap();
    let mut cur = BlockType(5);
    for _ in 0..r.size() {
        cur = r.next(cur).unwrap();
    }
    assert_eq!(cur, BlockType(5));
}

#[test]
fn single_member_ring_maps_to_itself() {
    let r = VariantRing::new("solo", [BlockType(7)]).unwrap();
    assert_eq!(r.next(BlockType(7)), Some(BlockType(7)));
    assert_eq!(r.previous(BlockType(7)), Some(BlockType(7)));
}

#[test]
fn ring_keeps_order_and_reports_itself() {
    let r = VariantRing::new("oak", [BlockType(4), BlockType(2), BlockType(9)]).unwrap();
    assert_eq!(r.members().collect::<Vec<_>>(), vec![BlockType(4), BlockType(2), BlockType(9)]);
    assert!(r.contains(BlockType(2)));
    assert!(!r.contains(BlockType(3)));
    assert_eq!(r.family(), "oak");
    assert_eq!(r.to_string(), "VariantRing{family='oak', size=3}");
}

#[test]
fn invalid_rings_are_rejected() {
    assert_eq!(
        VariantRing::new("empty", Vec::<BlockType>::new()).err(),
        Some(ConfigError::EmptyRing("empty".into()))
    );
    assert_eq!(
        VariantRing::new("dup", [BlockType(1), BlockType(2), BlockType(1)]).err(),
        Some(ConfigError::DuplicateMember {
            family: "dup".into(),
            block: BlockType(1),
        })
    );

    let catalog = common::catalog();
    let err = VariantRing::builder("typo")
        .add_named(&catalog, "stone")
        .add_named(&catalog, "stone_brick")
        .build()
        .err();
    assert_eq!(
        err,
        Some(ConfigError::UnknownBlock {
            family: "typo".into(),
            name: "stone_brick".into(),
        })
    );
}

#[test]
fn registry_indexes_every_member() {
    let catalog = common::catalog();
    let registry = common::registry(&catalog);
    assert_eq!(registry.ring_count(), 3);
    assert_eq!(registry.registered_block_count(), 4 + 6 + 1);

    let stairs = block(&catalog, "oak_stairs");
    assert_eq!(registry.ring_for(stairs).map(|r| r.family()), Some("oak"));
    assert!(registry.ring_for(block(&catalog, "dirt")).is_none());

    for r in registry.rings() {
        for member in r.members() {
            assert_eq!(registry.ring_for(member).map(|o| o.family()), Some(r.family()));
        }
    }
}

#[test]
fn overlapping_ring_is_rejected_atomically() {
    let catalog = common::catalog();
    let mut registry = common::registry(&catalog);

    let overlap = ring(&catalog, "bad", &["dirt", "stone"]);
    let err = registry.register_ring(overlap).err();
    assert_eq!(
        err,
        Some(ConfigError::AlreadyRegistered {
            block: block(&catalog, "stone"),
            family: "bad".into(),
            existing: "stone".into(),
        })
    );
    // dirt was listed first but must not have been indexed.
    assert!(registry.ring_for(block(&catalog, "dirt")).is_none());
    assert_eq!(registry.ring_count(), 3);
}

#[test]
fn clear_and_rebuild() {
    let catalog = common::catalog();
    let mut registry = common::registry(&catalog);
    registry.clear();
    assert_eq!(registry.ring_count(), 0);
    assert_eq!(registry.registered_block_count(), 0);

    registry
        .rebuild([ring(&catalog, "dirt", &["dirt", "terracotta"])])
        .unwrap();
    assert_eq!(registry.ring_count(), 1);
    assert_eq!(registry.registered_block_count(), 2);

    let mut fresh = VariantRegistry::new();
    let result = fresh.rebuild([
        ring(&catalog, "a", &["dirt"]),
        ring(&catalog, "b", &["dirt", "stone"]),
    ]);
    assert!(result.is_err());
    assert_eq!(fresh.ring_count(), 0);
}
