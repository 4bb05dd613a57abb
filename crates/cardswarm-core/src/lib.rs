//! Card choreography for the cardswarm installation.
//!
//! Cards launch from an emitter, fall under simple physics and home into a
//! sampled outline (heart, star, hourglass) that always faces the camera.
//! Clicking a card flies it up to the camera for a closer look; cycling the
//! shape morphs the whole swarm onto the next outline.
//!
//! Rendering, input and asset loading live with the host; this crate only
//! owns card transforms.

pub mod billboard;
pub mod camera;
pub mod card;
pub mod config;
pub mod constants;
pub mod facing;
pub mod focus;
pub mod math;
pub mod morph;
pub mod perimeter;
pub mod physics;
pub mod pick;
pub mod pool;
pub mod shapes;
pub mod swarm;
pub mod trail;

pub use camera::{Camera, Ray};
pub use card::{Card, CardId, Mode, Motion, Space, Transform};
pub use config::{BillboardMode, FitMode, SwarmConfig, UiState};
pub use facing::CameraFacingFrame;
pub use perimeter::{sample, OutlineError, Polygon};
pub use pool::{CardPool, DeckImage};
pub use shapes::{ShapeId, ShapeRegistry};
pub use swarm::{Swarm, SwarmEvent};
