//! The owned simulation context driven once per display frame.
//!
//! Nothing here is global: several swarms can run side by side (tests do).
//! Hosts call [`Swarm::step`] from their animation-frame callback and read
//! card transforms back out for rendering.

use crate::billboard::billboard_toward_camera;
use crate::camera::Camera;
use crate::card::{Card, CardId, Mode, Motion};
use crate::config::{SwarmConfig, UiState};
use crate::constants::{FRAME_ANCHOR, MAX_DT_SEC};
use crate::facing::CameraFacingFrame;
use crate::focus::FocusController;
use crate::morph::MorphDirector;
use crate::perimeter::{sample, OutlineError, Polygon};
use crate::physics::{is_corrupt, step_fade_in, step_flying, step_homing};
use crate::pick::pick_card;
use crate::pool::{spawn_card, CardPool, DeckImage};
use crate::shapes::{ShapeId, ShapeRegistry};
use crate::trail::drive_trail;
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Things that finished during a step, for the host to react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwarmEvent {
    FocusEntered(CardId),
    FocusReleased(CardId),
    MorphFinished,
    CardsRespawned(usize),
}

pub struct Swarm {
    config: SwarmConfig,
    shapes: ShapeRegistry,
    outline: Polygon,
    outline_scale: f32,
    frame: CameraFacingFrame,
    pool: CardPool,
    focus: FocusController,
    morph: MorphDirector,
    camera: Camera,
    rng: StdRng,
    targets_dirty: bool,
    events: Vec<SwarmEvent>,
}

impl Swarm {
    pub fn new(config: SwarmConfig) -> Result<Self, OutlineError> {
        Self::with_shapes(config, ShapeRegistry::default())
    }

    pub fn with_shapes(config: SwarmConfig, shapes: ShapeRegistry) -> Result<Self, OutlineError> {
        let outline = shapes.outline_for(shapes.current_shape())?;
        let rng = StdRng::seed_from_u64(config.seed);
        Ok(Self {
            config,
            shapes,
            outline,
            outline_scale: 0.0,
            frame: CameraFacingFrame::new(FRAME_ANCHOR),
            pool: CardPool::new(),
            focus: FocusController::new(),
            morph: MorphDirector::new(),
            camera: Camera::default(),
            rng,
            targets_dirty: true,
            events: Vec::new(),
        })
    }

    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    pub fn cards(&self) -> &[Card] {
        self.pool.cards()
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.pool.get(id)
    }

    /// Direct access for hosts that poke at a card between frames. A card
    /// left non-finite is respawned on the next step.
    pub fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.pool.cards_mut().iter_mut().find(|c| c.id == id)
    }

    pub fn current_shape(&self) -> ShapeId {
        self.shapes.current_shape()
    }

    pub fn frame(&self) -> &CameraFacingFrame {
        &self.frame
    }

    pub fn focused(&self) -> Option<CardId> {
        self.focus.focused()
    }

    pub fn is_morphing(&self) -> bool {
        self.morph.is_running()
    }

    pub fn targets_dirty(&self) -> bool {
        self.targets_dirty
    }

    pub fn drain_events(&mut self) -> Vec<SwarmEvent> {
        std::mem::take(&mut self.events)
    }

    /// Match the pool to the loaded deck: one card per image.
    pub fn ensure_card_count(&mut self, deck: &[DeckImage], power: f32) {
        let change = self.pool.ensure_pool(deck, power, &mut self.rng);
        for id in &change.removed {
            self.focus.forget(*id);
            self.morph.forget(*id, &mut self.events);
        }
        if change.is_dirty() {
            self.targets_dirty = true;
        }
    }

    /// Relaunch every card from the emitter.
    pub fn reset(&mut self, power: f32) {
        self.focus.clear(self.pool.cards_mut(), &self.camera);
        self.morph.clear();
        for card in self.pool.cards_mut() {
            spawn_card(card, power, &mut self.rng);
        }
        log::info!("[swarm] reset {} card(s) power={:.2}", self.pool.len(), power);
    }

    /// Advance to the next outline. Targets go stale; follow with
    /// [`Swarm::morph_to_current`] to animate the change.
    pub fn cycle_shape(&mut self) -> Result<ShapeId, OutlineError> {
        let next = self.shapes.cycle_shape();
        self.outline = self.shapes.outline_for(next)?;
        self.targets_dirty = true;
        log::info!("[shape] now {}", next.name());
        Ok(next)
    }

    /// Regenerate targets for the active outline and fly every card onto it.
    pub fn morph_to_current(&mut self) {
        self.focus.clear(self.pool.cards_mut(), &self.camera);
        self.regenerate_targets();
        self.morph
            .begin(self.pool.cards_mut(), &self.frame, &self.config);
    }

    pub fn cycle_shape_and_morph(&mut self) -> Result<ShapeId, OutlineError> {
        let next = self.cycle_shape()?;
        self.morph_to_current();
        Ok(next)
    }

    /// Recompute every card's outline slot from the current widths.
    pub fn regenerate_targets(&mut self) {
        let safety = self.config.perimeter_safety.max(f32::EPSILON);
        let spans: Vec<f32> = self
            .pool
            .cards()
            .iter()
            .map(|c| c.span(self.config.card_margin, self.config.card_side_buffer) * safety)
            .collect();
        let points = sample(&self.outline, &spans);
        let total: f32 = spans.iter().sum();
        self.outline_scale = if spans.is_empty() {
            0.0
        } else {
            self.outline.fit_scale(total)
        };
        for (card, p) in self.pool.cards_mut().iter_mut().zip(points) {
            card.target = p;
        }
        self.targets_dirty = false;
        log::debug!(
            "[swarm] targets for {} card(s) on {} scale={:.4}",
            spans.len(),
            self.shapes.current_shape().name(),
            self.outline_scale
        );
    }

    /// World-space position of a card's outline slot.
    pub fn target_world(&self, id: CardId) -> Option<Vec3> {
        self.pool
            .get(id)
            .map(|c| self.frame.local_to_world(c.target))
    }

    /// One frame of simulation. `dt_sec <= 0` does nothing; large steps are
    /// clamped.
    pub fn step(&mut self, dt_sec: f32, ui: &UiState, camera: &Camera) {
        if !(dt_sec.is_finite() && dt_sec > 0.0) {
            return;
        }
        let dt = dt_sec.min(MAX_DT_SEC);
        self.camera = camera.clone();
        self.frame.update(camera);
        if self.targets_dirty {
            self.regenerate_targets();
        }

        let mut respawned = 0;
        for card in self.pool.cards_mut() {
            if card.alive && is_corrupt(card) {
                log::warn!("[swarm] card {} went non-finite, respawning", card.id.0);
                card.alive = false;
                self.focus.forget(card.id);
                self.morph.forget(card.id, &mut self.events);
            }
            if !card.alive {
                spawn_card(card, ui.power, &mut self.rng);
                respawned += 1;
                continue;
            }
            match card.mode {
                Mode::Normal(Motion::Flying { .. }) => {
                    if step_flying(card, dt, ui.spin) {
                        log::debug!("[swarm] card {} homing", card.id.0);
                    }
                    if !ui.spin {
                        billboard_toward_camera(card, camera, self.config.billboard, dt);
                    }
                    step_fade_in(card, dt);
                }
                Mode::Normal(Motion::Homing) => {
                    let target = self.frame.local_to_world(card.target);
                    step_homing(card, target, dt, self.config.homing_speed);
                    billboard_toward_camera(card, camera, self.config.billboard, dt);
                    step_fade_in(card, dt);
                }
                _ => {}
            }
        }

        self.focus.step(
            self.pool.cards_mut(),
            camera,
            &self.config,
            dt,
            &mut self.events,
        );
        self.morph.step(
            self.pool.cards_mut(),
            camera,
            &self.config,
            dt,
            &mut self.events,
        );

        for card in self.pool.cards_mut() {
            if card.mode.is_focus() && ui.show_paths {
                continue;
            }
            drive_trail(&mut card.trail, card.transform.translation, ui.show_paths);
        }

        if respawned > 0 {
            self.events.push(SwarmEvent::CardsRespawned(respawned));
        }
    }

    /// Resolve a click at normalized device coordinates. Returns the card
    /// that was hit, if any.
    pub fn click(&mut self, camera: &Camera, ndc: Vec2) -> Option<CardId> {
        let ray = camera.ray_from_ndc(ndc);
        let picked = pick_card(self.pool.cards(), camera, &ray);
        if let Some(id) = picked {
            self.morph.forget(id, &mut self.events);
        }
        self.focus.handle_click(
            self.pool.cards_mut(),
            picked,
            camera,
            &self.frame,
            &self.config,
        );
        picked
    }

    /// Viewport changed (fov or aspect); re-fit a held card.
    pub fn resize(&mut self, camera: &Camera) {
        self.camera = camera.clone();
        self.focus
            .on_resize(self.pool.cards_mut(), camera, &self.config);
    }

    /// Fly the focused card back to its slot.
    pub fn release_focus(&mut self) {
        if let Some(id) = self.focus.focused() {
            self.focus.release(
                self.pool.cards_mut(),
                id,
                &self.camera,
                &self.frame,
                &self.config,
            );
        }
    }

    /// Drop focus on every card, leaving them where they are.
    pub fn clear_focus(&mut self) {
        self.focus.clear(self.pool.cards_mut(), &self.camera);
    }

    fn outline_world_points(&self) -> impl Iterator<Item = Vec3> + '_ {
        let scale = self.outline_scale;
        self.outline
            .points()
            .iter()
            .map(move |p| self.frame.local_to_world((*p * scale).extend(0.0)))
    }

    /// Axis-aligned world bounds of the current target outline. `None` until
    /// targets have been generated for the current shape and pool.
    pub fn target_bounds(&self) -> Option<(Vec3, Vec3)> {
        if self.targets_dirty || self.outline_scale <= 0.0 {
            return None;
        }
        self.outline_world_points().fold(None, |acc, p| match acc {
            None => Some((p, p)),
            Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
        })
    }

    /// Lowest world-space point of the current target outline.
    pub fn lowest_point(&self) -> Option<Vec3> {
        if self.targets_dirty || self.outline_scale <= 0.0 {
            return None;
        }
        self.outline_world_points()
            .min_by(|a, b| a.y.total_cmp(&b.y))
    }
}
