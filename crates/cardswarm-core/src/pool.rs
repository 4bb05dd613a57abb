use crate::card::{Card, CardId, Mode, Motion, Space, Transform};
use crate::constants::*;
use glam::{Quat, Vec3};
use rand::Rng;

/// One loaded deck image as seen by the core: an opaque texture handle
/// owned by the renderer plus the image's width/height ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DeckImage {
    pub texture: u32,
    pub aspect: f32,
}

impl DeckImage {
    pub fn new(texture: u32, aspect: f32) -> Self {
        Self { texture, aspect }
    }

    /// Card width for this image at the fixed card height.
    pub fn card_width(&self) -> f32 {
        let aspect = if self.aspect.is_finite() {
            self.aspect.max(MIN_ASPECT)
        } else {
            MIN_ASPECT
        };
        CARD_HEIGHT * aspect
    }
}

/// What changed during a pool sync.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PoolChange {
    pub added: Vec<CardId>,
    pub removed: Vec<CardId>,
    pub resized: usize,
}

impl PoolChange {
    /// Targets need regenerating after any of these.
    pub fn is_dirty(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty() || self.resized > 0
    }
}

#[derive(Clone, Debug, Default)]
pub struct CardPool {
    cards: Vec<Card>,
    next_id: u32,
}

impl CardPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == id)
    }

    /// Grow or shrink so there is exactly one card per deck image. New cards
    /// launch immediately; removed cards are dropped from the tail.
    pub fn ensure_pool<R: Rng + ?Sized>(
        &mut self,
        deck: &[DeckImage],
        power: f32,
        rng: &mut R,
    ) -> PoolChange {
        let mut change = PoolChange::default();

        while self.cards.len() > deck.len() {
            if let Some(card) = self.cards.pop() {
                change.removed.push(card.id);
            }
        }

        for (card, image) in self.cards.iter_mut().zip(deck) {
            if card.image != *image {
                card.image = *image;
                let width = image.card_width();
                if (width - card.width).abs() > f32::EPSILON {
                    card.width = width;
                    change.resized += 1;
                }
            }
        }

        for image in &deck[self.cards.len()..] {
            let id = CardId(self.next_id);
            self.next_id += 1;
            let mut card = Card::new(id, *image, image.card_width(), CARD_HEIGHT);
            spawn_card(&mut card, power, rng);
            change.added.push(id);
            self.cards.push(card);
        }

        if change.is_dirty() {
            log::debug!(
                "[pool] size={} added={} removed={} resized={}",
                self.cards.len(),
                change.added.len(),
                change.removed.len(),
                change.resized
            );
        }
        change
    }
}

/// Reset a card to emitter launch conditions. Higher `power` launches faster.
pub fn spawn_card<R: Rng + ?Sized>(card: &mut Card, power: f32, rng: &mut R) {
    let power = if power.is_finite() {
        power.clamp(POWER_MIN, POWER_MAX)
    } else {
        DEFAULT_POWER
    };
    let jitter = Vec3::new(
        rng.gen_range(-EMITTER_JITTER..=EMITTER_JITTER),
        0.0,
        rng.gen_range(-EMITTER_JITTER..=EMITTER_JITTER),
    );
    card.transform = Transform {
        translation: EMITTER_POSITION + jitter,
        rotation: Quat::IDENTITY,
        scale: SPAWN_SCALE,
    };
    card.space = Space::World;
    let h = LAUNCH_HORIZONTAL_SPEED * power;
    card.velocity = Vec3::new(
        rng.gen_range(-h..=h),
        rng.gen_range(LAUNCH_VERTICAL_MIN..=LAUNCH_VERTICAL_MAX) * power,
        rng.gen_range(-h..=h),
    );
    card.angular_velocity = Vec3::new(
        rng.gen_range(-LAUNCH_ANGULAR_SPEED..=LAUNCH_ANGULAR_SPEED),
        rng.gen_range(-LAUNCH_ANGULAR_SPEED..=LAUNCH_ANGULAR_SPEED),
        rng.gen_range(-LAUNCH_ANGULAR_SPEED..=LAUNCH_ANGULAR_SPEED),
    );
    card.age = 0.0;
    card.alive = true;
    card.opacity = 0.0;
    card.trail.clear();
    card.mode = Mode::Normal(Motion::Flying {
        homing_delay: rng.gen_range(HOMING_DELAY_MIN_SEC..=HOMING_DELAY_MAX_SEC),
    });
}
