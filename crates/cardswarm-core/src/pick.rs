use crate::camera::{Camera, Ray};
use crate::card::{Card, CardId, Transform};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let t = -b - sq;
    if t >= 0.0 {
        return Some(t);
    }
    // origin inside the sphere
    let t = -b + sq;
    (t >= 0.0).then_some(t)
}

/// Intersect a ray with a card-sized rectangle lying in the transform's
/// local XY plane. Returns the ray parameter of the hit.
pub fn ray_quad(ray: &Ray, transform: &Transform, size: Vec2) -> Option<f32> {
    let normal = transform.rotation * Vec3::Z;
    let denom = normal.dot(ray.dir);
    if denom.abs() < 1e-6 {
        return None;
    }
    let t = normal.dot(transform.translation - ray.origin) / denom;
    if t < 0.0 {
        return None;
    }
    let scale = transform.scale.abs().max(f32::EPSILON);
    let local = transform.rotation.inverse() * (ray.at(t) - transform.translation) / scale;
    let half = size * 0.5;
    (local.x.abs() <= half.x && local.y.abs() <= half.y).then_some(t)
}

/// Nearest card under the ray, if any.
pub fn pick_card(cards: &[Card], camera: &Camera, ray: &Ray) -> Option<CardId> {
    let mut hits: SmallVec<[(CardId, f32); 8]> = SmallVec::new();
    for card in cards.iter().filter(|c| c.alive) {
        let tf = card.world_transform(camera);
        let radius = card.size().length() * 0.5 * tf.scale.abs();
        if ray_sphere(ray.origin, ray.dir, tf.translation, radius).is_none() {
            continue;
        }
        if let Some(t) = ray_quad(ray, &tf, card.size()) {
            hits.push((card.id, t));
        }
    }
    hits.into_iter()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(id, _)| id)
}
