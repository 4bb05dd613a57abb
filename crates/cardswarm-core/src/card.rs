//! Card entities and their per-mode state.
//!
//! A card is always in exactly one [`Mode`]. Only `Normal` cards are driven
//! by physics/homing; the focus and morph variants carry their own flight
//! data and own the card's transform while active.

use crate::camera::Camera;
use crate::math::CubicBezier;
use crate::pool::DeckImage;
use crate::trail::Trail;
use glam::{Mat4, Quat, Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: 1.0,
        }
    }
}

impl Transform {
    pub fn to_mat4(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation, self.translation)
    }

    /// `self` applied after `child`, i.e. `child` expressed in `self`'s parent space.
    pub fn compose(&self, child: &Transform) -> Transform {
        Transform {
            translation: self.translation + self.rotation * (child.translation * self.scale),
            rotation: (self.rotation * child.rotation).normalize(),
            scale: self.scale * child.scale,
        }
    }

    pub fn inverse(&self) -> Transform {
        let inv_scale = if self.scale.abs() > f32::EPSILON {
            1.0 / self.scale
        } else {
            1.0
        };
        let inv_rot = self.rotation.inverse();
        Transform {
            translation: inv_rot * (-self.translation * inv_scale),
            rotation: inv_rot,
            scale: inv_scale,
        }
    }
}

/// Which coordinate space a card's transform is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Space {
    #[default]
    World,
    /// Relative to the camera; the card rides along with it.
    Camera,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    Flying { homing_delay: f32 },
    Homing,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusFlight {
    pub curve: CubicBezier,
    pub from_rotation: Quat,
    pub to_rotation: Quat,
    pub from_scale: f32,
    pub to_scale: f32,
    pub elapsed: f32,
    pub duration: f32,
    /// World orientation captured before focusing, restored on release.
    pub pre_focus_rotation: Quat,
}

impl FocusFlight {
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MorphFlight {
    pub curve: CubicBezier,
    pub elapsed: f32,
    pub duration: f32,
    /// Spin angle already applied, so each step adds only the delta.
    pub prev_spin: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Mode {
    Normal(Motion),
    FocusIn(FocusFlight),
    Focused { pre_focus_rotation: Quat },
    FocusOut(FocusFlight),
    Morph(MorphFlight),
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Normal(Motion::Flying { .. }) => "flying",
            Mode::Normal(Motion::Homing) => "homing",
            Mode::FocusIn(_) => "focus_in",
            Mode::Focused { .. } => "focused",
            Mode::FocusOut(_) => "focus_out",
            Mode::Morph(_) => "morph",
        }
    }

    pub fn is_focus(&self) -> bool {
        matches!(
            self,
            Mode::FocusIn(_) | Mode::Focused { .. } | Mode::FocusOut(_)
        )
    }
}

#[derive(Clone, Debug)]
pub struct Card {
    pub id: CardId,
    pub image: DeckImage,
    pub width: f32,
    pub height: f32,
    pub transform: Transform,
    pub space: Space,
    pub velocity: Vec3,
    pub angular_velocity: Vec3,
    pub age: f32,
    pub alive: bool,
    pub opacity: f32,
    /// Assigned outline slot in shape-local space.
    pub target: Vec3,
    pub mode: Mode,
    pub trail: Trail,
}

impl Card {
    pub fn new(id: CardId, image: DeckImage, width: f32, height: f32) -> Self {
        Self {
            id,
            image,
            width,
            height,
            transform: Transform::default(),
            space: Space::World,
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            age: 0.0,
            alive: false,
            opacity: 0.0,
            target: Vec3::ZERO,
            mode: Mode::Normal(Motion::Homing),
            trail: Trail::default(),
        }
    }

    /// Arc length this card needs along the outline.
    pub fn span(&self, margin: f32, side_buffer: f32) -> f32 {
        self.width + margin + side_buffer
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn world_transform(&self, camera: &Camera) -> Transform {
        match self.space {
            Space::World => self.transform,
            Space::Camera => camera_transform(camera).compose(&self.transform),
        }
    }
}

pub fn camera_transform(camera: &Camera) -> Transform {
    Transform {
        translation: camera.eye,
        rotation: camera.orientation(),
        scale: 1.0,
    }
}

/// Re-express a world-space card relative to the camera, keeping its pose.
pub fn attach_to_camera(card: &mut Card, camera: &Camera) {
    if card.space == Space::Camera {
        return;
    }
    card.transform = camera_transform(camera).inverse().compose(&card.transform);
    card.space = Space::Camera;
}

/// Move a camera-relative card back to world space, keeping its pose.
pub fn detach_to_world(card: &mut Card, camera: &Camera) {
    if card.space == Space::World {
        return;
    }
    card.transform = camera_transform(camera).compose(&card.transform);
    card.space = Space::World;
}
