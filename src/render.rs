// 2D canvas presenter: projects card quads and trails with the simulation
// camera and paints them back to front.

use crate::constants::*;
use crate::input::ndc_to_pixel;
use cardswarm_core::{Camera, Card, CardId, Swarm, Transform, UiState};
use glam::{Mat4, Vec2, Vec3};
use wasm_bindgen::JsCast;
use web_sys as web;

const MIN_CLIP_W: f32 = 1e-4;

pub struct Presenter {
    ctx: web::CanvasRenderingContext2d,
}

/// Screen position of a world point, or None when it is behind the eye.
#[inline]
fn project(view_proj: &Mat4, p: Vec3, size: Vec2) -> Option<Vec2> {
    let clip = *view_proj * p.extend(1.0);
    if clip.w <= MIN_CLIP_W {
        return None;
    }
    Some(ndc_to_pixel(Vec2::new(clip.x / clip.w, clip.y / clip.w), size))
}

fn card_corners(card: &Card, tf: &Transform) -> [Vec3; 4] {
    let hw = card.width * 0.5;
    let hh = card.height * 0.5;
    let model = tf.to_mat4();
    [
        Vec2::new(-hw, -hh),
        Vec2::new(hw, -hh),
        Vec2::new(hw, hh),
        Vec2::new(-hw, hh),
    ]
    .map(|c| model.transform_point3(c.extend(0.0)))
}

fn card_fill(card: &Card, tf: &Transform, camera: &Camera) -> String {
    let hue = card.image.texture.wrapping_mul(HUE_STEP_DEG) % 360;
    let facing = (tf.rotation * Vec3::Z).dot(camera.eye - tf.translation) >= 0.0;
    // backs are drawn darker so spins read clearly
    let lightness = if facing {
        CARD_LIGHTNESS
    } else {
        CARD_LIGHTNESS / 2
    };
    format!("hsl({}, {}%, {}%)", hue, CARD_SATURATION, lightness)
}

impl Presenter {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("canvas has no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self { ctx })
    }

    pub fn draw(&self, swarm: &Swarm, camera: &Camera, ui: &UiState, size: Vec2) {
        let ctx = &self.ctx;
        ctx.set_global_alpha(1.0);
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);

        let view_proj = camera.view_projection();
        if ui.show_paths {
            self.draw_trails(swarm, &view_proj, size);
        }

        let mut order: Vec<(f32, &Card, Transform)> = swarm
            .cards()
            .iter()
            .filter(|c| c.alive && c.opacity > 0.0)
            .map(|c| {
                let tf = c.world_transform(camera);
                (tf.translation.distance_squared(camera.eye), c, tf)
            })
            .collect();
        order.sort_by(|a, b| b.0.total_cmp(&a.0));

        let focused = swarm.focused();
        for (_, card, tf) in &order {
            self.draw_card(card, tf, camera, &view_proj, size, focused);
        }
        ctx.set_global_alpha(1.0);
    }

    fn draw_trails(&self, swarm: &Swarm, view_proj: &Mat4, size: Vec2) {
        let ctx = &self.ctx;
        ctx.set_stroke_style_str(TRAIL_STROKE);
        ctx.set_line_width(1.5);
        for card in swarm.cards().iter().filter(|c| c.trail.len() > 1) {
            ctx.begin_path();
            let mut pen_down = false;
            for p in card.trail.points() {
                match project(view_proj, p, size) {
                    Some(s) if pen_down => ctx.line_to(s.x as f64, s.y as f64),
                    Some(s) => {
                        ctx.move_to(s.x as f64, s.y as f64);
                        pen_down = true;
                    }
                    None => pen_down = false,
                }
            }
            ctx.stroke();
        }
    }

    fn draw_card(
        &self,
        card: &Card,
        tf: &Transform,
        camera: &Camera,
        view_proj: &Mat4,
        size: Vec2,
        focused: Option<CardId>,
    ) {
        let mut screen = [Vec2::ZERO; 4];
        for (dst, corner) in screen.iter_mut().zip(card_corners(card, tf)) {
            match project(view_proj, corner, size) {
                Some(s) => *dst = s,
                None => return,
            }
        }
        let ctx = &self.ctx;
        ctx.begin_path();
        ctx.move_to(screen[0].x as f64, screen[0].y as f64);
        for s in &screen[1..] {
            ctx.line_to(s.x as f64, s.y as f64);
        }
        ctx.close_path();
        ctx.set_global_alpha(card.opacity.clamp(0.0, 1.0) as f64);
        ctx.set_fill_style_str(&card_fill(card, tf, camera));
        ctx.fill();
        if focused == Some(card.id) {
            ctx.set_stroke_style_str(FOCUS_STROKE);
            ctx.set_line_width(3.0);
        } else {
            ctx.set_stroke_style_str(CARD_STROKE);
            ctx.set_line_width(1.0);
        }
        ctx.stroke();
    }
}
