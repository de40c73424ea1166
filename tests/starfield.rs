use glyphwarp::config::StarfieldConfig;
use glyphwarp::starfield::{advance, Star, Starfield};
use glyphwarp::surface::{DrawCommand, Recorder};
use glyphwarp::viewport::Viewport;
use glyphwarp::Vec2;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn starfield(width: f32, height: f32) -> Starfield<SmallRng> {
    let mut field = Starfield::new(StarfieldConfig::default(), SmallRng::seed_from_u64(42)).unwrap();
    field.resize(Viewport::new(width, height));
    field
}

#[test]
fn spawns_fixed_population_inside_volume() {
    let field = starfield(1200.0, 600.0);
    assert_eq!(field.stars().len(), 400);
    for s in field.stars() {
        assert!(s.position.x >= -600.0 && s.position.x < 600.0);
        assert!(s.position.y >= -300.0 && s.position.y < 300.0);
        assert!(s.depth > 0.0 && s.depth <= 1200.0);
        assert_eq!(s.previous_depth, s.depth);
    }
}

#[test]
fn empty_canvas_has_no_stars() {
    let mut field = starfield(1200.0, 600.0);
    field.resize(Viewport::new(0.0, 600.0));
    assert!(field.stars().is_empty());

    let mut surface = Recorder::new();
    field.frame(&mut surface, true);
    assert_eq!(surface.lines().count(), 0);
}

#[test]
fn star_reaching_camera_respawns_at_far_plane() {
    let vp = Viewport::new(800.0, 400.0);
    let mut rng = SmallRng::seed_from_u64(1);
    let mut star = Star {
        position: Vec2::new(5.0, 5.0),
        depth: 15.0,
        previous_depth: 15.0,
    };
    assert!(advance(&mut star, 15.0, &vp, &mut rng));
    assert_eq!(star.depth, 800.0);
    assert_eq!(star.previous_depth, 800.0);
    assert!(star.position.x >= -400.0 && star.position.x < 400.0);
    assert!(star.position.y >= -200.0 && star.position.y < 200.0);
}

#[test]
fn depth_decreases_by_decay_or_resets_to_width() {
    let mut field = starfield(800.0, 400.0);
    let mut surface = Recorder::new();
    for _ in 0..200 {
        let before: Vec<f32> = field.stars().iter().map(|s| s.depth).collect();
        field.frame(&mut surface, true);
        for (prev, s) in before.iter().zip(field.stars()) {
            assert!(s.depth > 0.0);
            if prev - 15.0 > 0.0 {
                assert_eq!(s.depth, prev - 15.0);
            } else {
                assert_eq!(s.depth, 800.0);
            }
            assert_eq!(s.previous_depth, s.depth);
        }
    }
}

#[test]
fn off_screen_frame_freezes_stars_but_paints_background() {
    let mut field = starfield(800.0, 400.0);
    let before = field.stars().to_vec();
    let mut surface = Recorder::new();

    field.frame(&mut surface, false);

    assert_eq!(field.stars(), &before[..]);
    assert_eq!(
        surface.commands,
        vec![DrawCommand::Fill {
            color: "#0a0a0a",
            width: 800.0,
            height: 400.0
        }]
    );
}

#[test]
fn streaks_skip_fresh_stars_and_brighten_near_camera() {
    let mut field = starfield(800.0, 400.0);
    {
        let stars = field.stars_mut();
        // depth after this frame: 700 (hidden), 400, 100
        for (s, depth) in stars.iter_mut().zip([715.0, 415.0, 115.0]) {
            s.position = Vec2::new(40.0, 20.0);
            s.depth = depth;
            s.previous_depth = depth;
        }
        for s in stars.iter_mut().skip(3) {
            s.depth = 790.0;
            s.previous_depth = 790.0;
        }
    }

    let mut surface = Recorder::new();
    field.frame(&mut surface, true);

    let lines: Vec<_> = surface.lines().collect();
    assert_eq!(lines.len(), 2);
    let (_, _, mid) = lines[0];
    let (_, near_to, near) = lines[1];
    assert!((mid.alpha - 0.5).abs() < 1e-6);
    assert!((near.alpha - 0.875).abs() < 1e-6);
    assert!((near.width - 1.75).abs() < 1e-6);
    assert!(near.alpha > mid.alpha && near.width > mid.width);
    assert_eq!(mid.color, "#ffffff");

    // (40/100)*400+400, (20/100)*200+200
    assert!(near_to.distance(Vec2::new(560.0, 240.0)) < 1e-3);
}

#[test]
fn resize_replaces_population() {
    let mut field = starfield(800.0, 400.0);
    let before = field.stars().to_vec();
    field.resize(Viewport::new(1000.0, 500.0));
    assert_eq!(field.stars().len(), 400);
    for s in field.stars() {
        assert!(!before.contains(s));
        assert!(s.depth <= 1000.0);
    }
}
