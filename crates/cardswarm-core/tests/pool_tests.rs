// Host-side tests for card pool sync and launching.

use cardswarm_core::constants::{
    CARD_HEIGHT, EMITTER_JITTER, EMITTER_POSITION, MIN_ASPECT, SPAWN_SCALE,
};
use cardswarm_core::pool::spawn_card;
use cardswarm_core::{CardId, CardPool, DeckImage, Mode, Motion, Space};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn deck(n: usize) -> Vec<DeckImage> {
    (0..n).map(|i| DeckImage::new(i as u32, 0.7)).collect()
}

fn ids(pool: &CardPool) -> Vec<u32> {
    pool.cards().iter().map(|c| c.id.0).collect()
}

#[test]
fn pool_grows_and_shrinks_from_the_tail() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut pool = CardPool::new();
    assert!(pool.is_empty());

    let change = pool.ensure_pool(&deck(5), 1.0, &mut rng);
    assert_eq!(pool.len(), 5);
    assert_eq!(change.added.len(), 5);
    assert!(change.is_dirty());

    let change = pool.ensure_pool(&deck(3), 1.0, &mut rng);
    assert_eq!(ids(&pool), vec![0, 1, 2]);
    assert_eq!(change.removed, vec![CardId(4), CardId(3)]);

    // ids are never reused
    let change = pool.ensure_pool(&deck(4), 1.0, &mut rng);
    assert_eq!(ids(&pool), vec![0, 1, 2, 5]);
    assert_eq!(change.added, vec![CardId(5)]);

    let change = pool.ensure_pool(&deck(4), 1.0, &mut rng);
    assert!(!change.is_dirty());
}

#[test]
fn new_image_aspect_resizes_card() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut pool = CardPool::new();
    pool.ensure_pool(&deck(3), 1.0, &mut rng);

    let mut next = deck(3);
    next[1] = DeckImage::new(1, 1.5);
    let change = pool.ensure_pool(&next, 1.0, &mut rng);
    assert_eq!(change.resized, 1);
    assert!(change.added.is_empty() && change.removed.is_empty());
    assert!((pool.get(CardId(1)).unwrap().width - 1.5).abs() < 1e-6);

    // swapping the texture alone does not change the span
    next[2] = DeckImage::new(9, 0.7);
    let change = pool.ensure_pool(&next, 1.0, &mut rng);
    assert_eq!(change.resized, 0);
    assert_eq!(pool.get(CardId(2)).unwrap().image.texture, 9);
}

#[test]
fn degenerate_aspect_is_clamped() {
    assert_eq!(DeckImage::new(0, 0.0).card_width(), CARD_HEIGHT * MIN_ASPECT);
    assert_eq!(DeckImage::new(0, -3.0).card_width(), CARD_HEIGHT * MIN_ASPECT);
    assert_eq!(DeckImage::new(0, f32::NAN).card_width(), CARD_HEIGHT * MIN_ASPECT);
    assert_eq!(DeckImage::new(0, 2.0).card_width(), CARD_HEIGHT * 2.0);
}

#[test]
fn spawn_launches_from_the_emitter() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut pool = CardPool::new();
    pool.ensure_pool(&deck(10), 1.0, &mut rng);
    for card in pool.cards() {
        let p = card.transform.translation;
        assert!((p.x - EMITTER_POSITION.x).abs() <= EMITTER_JITTER);
        assert!((p.z - EMITTER_POSITION.z).abs() <= EMITTER_JITTER);
        assert_eq!(p.y, EMITTER_POSITION.y);
        assert!(card.velocity.y > 0.0);
        assert_eq!(card.transform.scale, SPAWN_SCALE);
        assert_eq!(card.opacity, 0.0);
        assert_eq!(card.space, Space::World);
        assert!(card.alive);
        assert!(matches!(card.mode, Mode::Normal(Motion::Flying { .. })));
    }
}

#[test]
fn more_power_launches_higher() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut pool = CardPool::new();
    pool.ensure_pool(&deck(1), 1.0, &mut rng);
    let mut weak = pool.cards()[0].clone();
    let mut strong = weak.clone();
    spawn_card(&mut weak, 0.5, &mut rng);
    spawn_card(&mut strong, 2.0, &mut rng);
    assert!(strong.velocity.y > weak.velocity.y);

    // out-of-range power is clamped, not rejected
    spawn_card(&mut strong, f32::NAN, &mut rng);
    assert!(strong.velocity.is_finite());
    spawn_card(&mut strong, 1e9, &mut rng);
    assert!(strong.velocity.is_finite());
}
