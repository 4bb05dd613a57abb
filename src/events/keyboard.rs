use crate::input::{action_for_key, adjust_power, KeyAction};
use crate::overlay;
use crate::AppState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    state: &Rc<RefCell<AppState>>,
    document: &web::Document,
) {
    let Some(action) = action_for_key(&ev.key()) else {
        return;
    };
    ev.prevent_default();
    if action == KeyAction::ToggleHint {
        overlay::toggle(document);
        return;
    }

    let mut guard = state.borrow_mut();
    let app = &mut *guard;
    match action {
        KeyAction::Reset => app.swarm.reset(app.ui.power),
        KeyAction::CycleShape => {
            if let Err(e) = app.swarm.cycle_shape_and_morph() {
                log::error!("[keys] shape change failed: {}", e);
            }
        }
        KeyAction::ToggleTrails => {
            app.ui.show_paths = !app.ui.show_paths;
            log::info!("[keys] trails={}", app.ui.show_paths);
        }
        KeyAction::ToggleSpin => {
            app.ui.spin = !app.ui.spin;
            log::info!("[keys] spin={}", app.ui.spin);
        }
        KeyAction::ReleaseFocus => app.swarm.release_focus(),
        KeyAction::PowerDown => app.ui.power = adjust_power(app.ui.power, -1),
        KeyAction::PowerUp => app.ui.power = adjust_power(app.ui.power, 1),
        KeyAction::ToggleHint => {}
    }
    app.refresh_hint(document);
}

pub fn wire_global_keydown(state: Rc<RefCell<AppState>>, document: web::Document) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &state, &document);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
