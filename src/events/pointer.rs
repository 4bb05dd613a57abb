use crate::dom;
use crate::input::{pixel_to_ndc, Gesture};
use crate::AppState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub state: Rc<RefCell<AppState>>,
    pub gesture: Rc<RefCell<Gesture>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointerdown(&w);
    wire_pointermove(&w);
    wire_pointerup(&w);
    wire_pointercancel(&w);
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let px = dom::pointer_canvas_px(&ev, &w.canvas);
        w.gesture.borrow_mut().press(px);
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.gesture.borrow().is_pressed() {
            return;
        }
        let px = dom::pointer_canvas_px(&ev, &w.canvas);
        let delta = w.gesture.borrow_mut().drag(px);
        if let Some(d) = delta {
            w.state.borrow_mut().orbit.orbit(d);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let px = dom::pointer_canvas_px(&ev, &w.canvas);
        let clicked = w.gesture.borrow_mut().release(px);
        if !clicked {
            return;
        }
        let ndc = pixel_to_ndc(px, dom::canvas_size(&w.canvas));
        let mut guard = w.state.borrow_mut();
        let app = &mut *guard;
        let camera = app.camera();
        match app.swarm.click(&camera, ndc) {
            Some(id) => log::info!("[click] card {}", id.0),
            None => log::debug!("[click] nothing at ({:.2}, {:.2})", ndc.x, ndc.y),
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointercancel(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        w.gesture.borrow_mut().cancel();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
