use cardswarm_core::UiState;
use web_sys as web;

const HINT_ID: &str = "hint-overlay";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag {
        "on"
    } else {
        "off"
    }
}

/// Refresh the hint text with the current shape and toggles.
pub fn update_hint(document: &web::Document, shape_name: &str, ui: &UiState) {
    if let Some(el) = document.get_element_by_id(HINT_ID) {
        let status = format!(
            "Shape: {} • Power: {:.1} • Trails: {} • Spin: {}",
            shape_name,
            ui.power,
            on_off(ui.show_paths),
            on_off(ui.spin)
        );
        let keys = "s shape • r relaunch • [ ] power • p trails • x spin • Esc release • h hide";
        let hint_html = format!(
            "<div style='color: #cfe7ff; font: 13px system-ui; background: rgba(10, 14, 24, 0.8); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(80, 110, 150, 0.35);'>{}<br><span style='opacity: 0.7'>{}</span></div>",
            status, keys
        );
        el.set_inner_html(&hint_html);
    }
}
