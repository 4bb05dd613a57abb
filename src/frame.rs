use crate::dom;
use crate::render::Presenter;
use crate::AppState;
use cardswarm_core::SwarmEvent;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub struct FrameContext {
    pub state: Rc<RefCell<AppState>>,
    pub canvas: web::HtmlCanvasElement,
    pub presenter: Presenter,
    pub last_instant: Instant,
    pub last_size: Vec2,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let size = dom::canvas_size(&self.canvas);
        let mut guard = self.state.borrow_mut();
        let app = &mut *guard;

        if size != self.last_size {
            self.last_size = size;
            app.aspect = size.x / size.y;
            let camera = app.camera();
            app.swarm.resize(&camera);
            log::debug!("[frame] viewport {}x{}", size.x, size.y);
        }

        let camera = app.camera();
        app.swarm.step(dt_sec, &app.ui, &camera);
        for ev in app.swarm.drain_events() {
            match ev {
                SwarmEvent::FocusEntered(id) => log::info!("[focus] card {} in focus", id.0),
                SwarmEvent::FocusReleased(id) => log::info!("[focus] card {} back home", id.0),
                SwarmEvent::MorphFinished => {
                    log::info!("[morph] settled on {}", app.swarm.current_shape().name())
                }
                SwarmEvent::CardsRespawned(n) => log::warn!("[frame] respawned {} card(s)", n),
            }
        }

        self.presenter.draw(&app.swarm, &camera, &app.ui, size);
    }
}

fn request_frame(tick: &TickSlot) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
