use crate::constants::DEFAULT_DECK_ASPECTS;
use crate::input::parse_aspects;
use cardswarm_core::DeckImage;
use glam::Vec2;
use web_sys as web;

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn canvas_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    Vec2::new(canvas.width().max(1) as f32, canvas.height().max(1) as f32)
}

/// Pointer position in the canvas' backing-store pixels.
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = (rect.width() as f32).max(1.0);
    let h = (rect.height() as f32).max(1.0);
    Vec2::new(
        x_css / w * canvas.width() as f32,
        y_css / h * canvas.height() as f32,
    )
}

/// Deck described by the canvas' `data-aspects` attribute, or the built-in
/// deck when it is missing or holds nothing usable.
pub fn read_deck(canvas: &web::HtmlCanvasElement) -> Vec<DeckImage> {
    let parsed = canvas
        .get_attribute("data-aspects")
        .map(|raw| parse_aspects(&raw))
        .unwrap_or_default();
    let aspects: &[f32] = if parsed.is_empty() {
        &DEFAULT_DECK_ASPECTS
    } else {
        &parsed
    };
    aspects
        .iter()
        .enumerate()
        .map(|(i, a)| DeckImage::new(i as u32, *a))
        .collect()
}
