// Host-side tests for click-to-focus and release.

use cardswarm_core::card::{attach_to_camera, detach_to_world};
use cardswarm_core::constants::FRAME_ANCHOR;
use cardswarm_core::focus::{fit_scale, FocusController};
use cardswarm_core::math::angle_between;
use cardswarm_core::{
    Camera, CameraFacingFrame, Card, CardId, DeckImage, FitMode, Mode, Motion, Space, Swarm,
    SwarmConfig, SwarmEvent, Transform, UiState,
};
use glam::{Quat, Vec2, Vec3};

const DT: f32 = 1.0 / 60.0;

fn deck(n: usize) -> Vec<DeckImage> {
    (0..n)
        .map(|i| DeckImage::new(i as u32, 0.6 + 0.05 * i as f32))
        .collect()
}

fn settled_swarm(n: usize) -> (Swarm, Camera) {
    let camera = Camera::default();
    let mut swarm = Swarm::new(SwarmConfig::default()).unwrap();
    swarm.ensure_card_count(&deck(n), 1.0);
    let ui = UiState::default();
    for _ in 0..600 {
        swarm.step(DT, &ui, &camera);
    }
    (swarm, camera)
}

fn ndc_of(camera: &Camera, p: Vec3) -> Vec2 {
    let clip = camera.view_projection() * p.extend(1.0);
    Vec2::new(clip.x / clip.w, clip.y / clip.w)
}

fn run_until(
    swarm: &mut Swarm,
    camera: &Camera,
    max_steps: usize,
    want: SwarmEvent,
) -> Vec<SwarmEvent> {
    let ui = UiState::default();
    let mut seen = Vec::new();
    for _ in 0..max_steps {
        swarm.step(DT, &ui, camera);
        let events = swarm.drain_events();
        let done = events.contains(&want);
        seen.extend(events);
        if done {
            return seen;
        }
    }
    panic!("never saw {want:?}, got {seen:?}");
}

fn click_first_card(swarm: &mut Swarm, camera: &Camera) -> (CardId, Quat) {
    let pos = swarm.cards()[0].transform.translation;
    let rotations: Vec<(CardId, Quat)> = swarm
        .cards()
        .iter()
        .map(|c| (c.id, c.transform.rotation))
        .collect();
    let id = swarm
        .click(camera, ndc_of(camera, pos))
        .expect("click on a settled card should hit");
    let pre = rotations
        .iter()
        .find(|(cid, _)| *cid == id)
        .map(|(_, r)| *r)
        .unwrap();
    (id, pre)
}

#[test]
fn fit_scale_modes() {
    let camera = Camera {
        fovy_radians: std::f32::consts::FRAC_PI_2,
        aspect: 2.0,
        ..Camera::default()
    };
    // at distance 1 the view is 4 wide and 2 tall
    let square = Vec2::new(1.0, 1.0);
    assert!((fit_scale(square, &camera, 1.0, 0.0, FitMode::Contain) - 2.0).abs() < 1e-4);
    let wide = Vec2::new(4.0, 1.0);
    assert!((fit_scale(wide, &camera, 1.0, 0.0, FitMode::Contain) - 1.0).abs() < 1e-4);
    assert!((fit_scale(wide, &camera, 1.0, 0.0, FitMode::Height) - 2.0).abs() < 1e-4);
    // margin shrinks the fit
    assert!((fit_scale(square, &camera, 1.0, 0.5, FitMode::Contain) - 1.0).abs() < 1e-4);
}

#[test]
fn click_focuses_then_second_click_releases() {
    let (mut swarm, camera) = settled_swarm(6);
    let (id, pre) = click_first_card(&mut swarm, &camera);
    assert_eq!(swarm.focused(), Some(id));
    assert!(matches!(swarm.card(id).unwrap().mode, Mode::FocusIn(_)));

    run_until(&mut swarm, &camera, 120, SwarmEvent::FocusEntered(id));
    let card = swarm.card(id).unwrap();
    assert!(matches!(card.mode, Mode::Focused { .. }));
    assert_eq!(card.space, Space::Camera);

    let world = card.world_transform(&camera);
    let expected = camera.eye + camera.forward() * swarm.config().focus_distance;
    assert!(world.translation.distance(expected) < 1e-3);
    assert!(angle_between(world.rotation, camera.orientation()) < 1e-3);
    let fit = fit_scale(
        card.size(),
        &camera,
        swarm.config().focus_distance,
        swarm.config().focus_margin,
        swarm.config().focus_fit,
    );
    assert!((world.scale - fit).abs() < 1e-4);

    // the focused card now covers the middle of the screen
    assert_eq!(swarm.click(&camera, Vec2::ZERO), Some(id));
    assert_eq!(swarm.focused(), None);
    assert!(matches!(swarm.card(id).unwrap().mode, Mode::FocusOut(_)));

    run_until(&mut swarm, &camera, 120, SwarmEvent::FocusReleased(id));
    let card = swarm.card(id).unwrap();
    assert_eq!(card.mode, Mode::Normal(Motion::Homing));
    assert_eq!(card.space, Space::World);
    assert_eq!(card.velocity, Vec3::ZERO);
    assert!((card.transform.scale - 1.0).abs() < 1e-6);
    assert!(angle_between(card.transform.rotation, pre) < 1e-3);
}

#[test]
fn immediate_release_restores_orientation() {
    let (mut swarm, camera) = settled_swarm(5);
    let (id, pre) = click_first_card(&mut swarm, &camera);
    swarm.release_focus();
    assert!(matches!(swarm.card(id).unwrap().mode, Mode::FocusOut(_)));
    run_until(&mut swarm, &camera, 120, SwarmEvent::FocusReleased(id));
    let card = swarm.card(id).unwrap();
    assert_eq!(card.mode, Mode::Normal(Motion::Homing));
    assert!(angle_between(card.transform.rotation, pre) < 1e-3);
}

#[test]
fn clicking_empty_space_does_nothing() {
    let (mut swarm, camera) = settled_swarm(4);
    assert_eq!(swarm.click(&camera, Vec2::new(0.95, 0.95)), None);
    assert_eq!(swarm.focused(), None);
    assert!(swarm
        .cards()
        .iter()
        .all(|c| c.mode == Mode::Normal(Motion::Homing)));
}

#[test]
fn resize_refits_focused_card() {
    let (mut swarm, camera) = settled_swarm(4);
    let (id, _) = click_first_card(&mut swarm, &camera);
    run_until(&mut swarm, &camera, 120, SwarmEvent::FocusEntered(id));

    let portrait = Camera {
        aspect: 0.5,
        ..camera.clone()
    };
    swarm.resize(&portrait);
    let card = swarm.card(id).unwrap();
    let want = fit_scale(
        card.size(),
        &portrait,
        swarm.config().focus_distance,
        swarm.config().focus_margin,
        swarm.config().focus_fit,
    );
    assert!((card.transform.scale - want).abs() < 1e-5);
    assert!(matches!(card.mode, Mode::Focused { .. }));
}

#[test]
fn clear_keeps_pose_and_is_idempotent() {
    let (mut swarm, camera) = settled_swarm(4);
    let (id, _) = click_first_card(&mut swarm, &camera);
    run_until(&mut swarm, &camera, 120, SwarmEvent::FocusEntered(id));

    let before = swarm.card(id).unwrap().world_transform(&camera);
    swarm.clear_focus();
    swarm.clear_focus();
    let card = swarm.card(id).unwrap();
    assert_eq!(card.space, Space::World);
    assert_eq!(card.mode, Mode::Normal(Motion::Homing));
    assert!(card.transform.translation.distance(before.translation) < 1e-4);
    assert!(angle_between(card.transform.rotation, before.rotation) < 1e-3);
    assert_eq!(swarm.focused(), None);
}

#[test]
fn shrinking_pool_drops_focus_tracking() {
    let (mut swarm, camera) = settled_swarm(4);
    let (id, _) = click_first_card(&mut swarm, &camera);
    assert_eq!(swarm.focused(), Some(id));
    swarm.ensure_card_count(&[], 1.0);
    assert!(swarm.cards().is_empty());
    assert_eq!(swarm.focused(), None);
    // stepping an empty swarm is fine
    swarm.step(DT, &UiState::default(), &camera);
}

#[test]
fn clicking_another_card_releases_the_first() {
    let camera = Camera::default();
    let mut frame = CameraFacingFrame::new(FRAME_ANCHOR);
    frame.update(&camera);
    let config = SwarmConfig::default();

    let mut cards: Vec<Card> = (0..2)
        .map(|i| {
            let image = DeckImage::new(i, 0.7);
            let mut c = Card::new(CardId(i), image, image.card_width(), 1.0);
            c.alive = true;
            c.transform.translation = Vec3::new(i as f32 * 2.0 - 1.0, 4.0, 0.0);
            c
        })
        .collect();

    let mut ctl = FocusController::new();
    let mut events = Vec::new();
    ctl.handle_click(&mut cards, Some(CardId(0)), &camera, &frame, &config);
    for _ in 0..120 {
        ctl.step(&mut cards, &camera, &config, DT, &mut events);
    }
    assert_eq!(events, vec![SwarmEvent::FocusEntered(CardId(0))]);

    ctl.handle_click(&mut cards, Some(CardId(1)), &camera, &frame, &config);
    assert_eq!(ctl.focused(), Some(CardId(1)));
    assert!(matches!(cards[0].mode, Mode::FocusOut(_)));
    assert!(matches!(cards[1].mode, Mode::FocusIn(_)));
    assert_eq!(cards[0].space, Space::World);

    // clicking nothing leaves everything as is
    ctl.handle_click(&mut cards, None, &camera, &frame, &config);
    assert_eq!(ctl.focused(), Some(CardId(1)));
}

fn assert_in_front(swarm: &Swarm, id: CardId, camera: &Camera) {
    let world = swarm.card(id).unwrap().world_transform(camera);
    let expected = camera.eye + camera.forward() * swarm.config().focus_distance;
    assert!(
        world.translation.distance(expected) < 1e-3,
        "{} is {} off center",
        world.translation,
        world.translation.distance(expected)
    );
    assert!(angle_between(world.rotation, camera.orientation()) < 1e-3);
}

#[test]
fn orbiting_during_focus_in_still_lands_in_front() {
    let (mut swarm, camera) = settled_swarm(5);
    let (id, _) = click_first_card(&mut swarm, &camera);
    let ui = UiState::default();
    for _ in 0..20 {
        swarm.step(DT, &ui, &camera);
    }
    assert!(matches!(swarm.card(id).unwrap().mode, Mode::FocusIn(_)));

    let orbited = Camera {
        eye: Vec3::new(8.0, 6.0, 9.0),
        ..camera.clone()
    };
    run_until(&mut swarm, &orbited, 120, SwarmEvent::FocusEntered(id));
    assert_eq!(swarm.card(id).unwrap().space, Space::Camera);
    assert_in_front(&swarm, id, &orbited);

    // once held, the card rides along with the camera
    let again = Camera {
        eye: Vec3::new(-6.0, 3.0, 10.0),
        ..camera.clone()
    };
    swarm.step(DT, &ui, &again);
    assert_in_front(&swarm, id, &again);
}

#[test]
fn camera_attach_round_trip_keeps_pose() {
    let camera = Camera {
        eye: Vec3::new(3.0, 5.0, 7.0),
        ..Camera::default()
    };
    let image = DeckImage::new(0, 0.7);
    let mut card = Card::new(CardId(0), image, image.card_width(), 1.0);
    card.transform = Transform {
        translation: Vec3::new(1.0, 2.0, -0.5),
        rotation: Quat::from_rotation_y(0.4),
        scale: 1.7,
    };
    let before = card.transform;

    attach_to_camera(&mut card, &camera);
    assert_eq!(card.space, Space::Camera);
    let world = card.world_transform(&camera);
    assert!(world.translation.distance(before.translation) < 1e-4);
    assert!(angle_between(world.rotation, before.rotation) < 1e-3);
    assert!((world.scale - before.scale).abs() < 1e-5);
    // the matrix form agrees with the decomposed transform
    let corner = Vec3::new(0.35, 0.5, 0.0);
    let via_mat = world.to_mat4().transform_point3(corner);
    let via_tf = world.translation + world.rotation * (corner * world.scale);
    assert!(via_mat.distance(via_tf) < 1e-4);

    detach_to_world(&mut card, &camera);
    assert_eq!(card.space, Space::World);
    assert!(card.transform.translation.distance(before.translation) < 1e-4);
    assert!(angle_between(card.transform.rotation, before.rotation) < 1e-3);
}
