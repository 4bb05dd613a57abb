#![cfg(target_arch = "wasm32")]
use crate::camera::OrbitCamera;
use crate::input::Gesture;
use cardswarm_core::{Camera, Swarm, SwarmConfig, UiState};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod camera;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

/// Everything the frame loop and the input handlers share.
pub(crate) struct AppState {
    pub swarm: Swarm,
    pub ui: UiState,
    pub orbit: OrbitCamera,
    pub aspect: f32,
}

impl AppState {
    pub fn camera(&self) -> Camera {
        self.orbit.to_camera(self.aspect)
    }

    pub fn refresh_hint(&self, document: &web::Document) {
        overlay::update_hint(document, self.swarm.current_shape().name(), &self.ui);
    }
}

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cardswarm-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Keep the backing store at CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);
    let presenter = render::Presenter::new(&canvas)?;

    let config = SwarmConfig {
        seed: (js_sys::Math::random() * u32::MAX as f64) as u64,
        ..SwarmConfig::default()
    };
    let mut swarm = Swarm::new(config)?;
    let ui = UiState::default();
    let deck = dom::read_deck(&canvas);
    swarm.ensure_card_count(&deck, ui.power);
    log::info!(
        "[init] deck={} shape={}",
        deck.len(),
        swarm.current_shape().name()
    );

    let size = dom::canvas_size(&canvas);
    let state = Rc::new(RefCell::new(AppState {
        swarm,
        ui,
        orbit: OrbitCamera::default(),
        aspect: size.x / size.y,
    }));
    state.borrow().refresh_hint(&document);

    events::wire_global_keydown(state.clone(), document.clone());
    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        state: state.clone(),
        gesture: Rc::new(RefCell::new(Gesture::default())),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        state,
        canvas,
        presenter,
        last_instant: Instant::now(),
        last_size: size,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
