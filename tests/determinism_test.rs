//! Integration test to verify physics determinism across color seeds

use orrery::resources::RenderingRng;
use orrery::utils::color::random_body_color;
use orrery::{PhysicsEngine, Vector, circular_layout};

#[test]
fn test_color_seed_does_not_affect_trajectories() {
    let center = Vector::new(600.0, 390.0, 0.0);

    let mut rng1 = RenderingRng::from_seed(1);
    let mut rng2 = RenderingRng::from_seed(2);
    let mut store1 = circular_layout(5, center, 1000.0, || random_body_color(&mut rng1)).unwrap();
    let mut store2 = circular_layout(5, center, 1000.0, || random_body_color(&mut rng2)).unwrap();

    assert_ne!(
        store1.iter().map(|body| body.color).collect::<Vec<_>>(),
        store2.iter().map(|body| body.color).collect::<Vec<_>>(),
        "Different seeds should produce different colors"
    );

    let mut engine = PhysicsEngine::default();
    for _ in 0..100 {
        engine.step(&mut store1, 1.0 / 60.0).unwrap();
        engine.step(&mut store2, 1.0 / 60.0).unwrap();
    }

    for (body1, body2) in store1.iter().zip(store2.iter()) {
        assert_eq!(body1.position, body2.position);
        assert_eq!(body1.velocity, body2.velocity);
    }
}

#[test]
fn test_color_seed_repeats_colors() {
    let center = Vector::new(600.0, 390.0, 0.0);

    let mut rng1 = RenderingRng::from_seed(42);
    let mut rng2 = RenderingRng::from_seed(42);
    let store1 = circular_layout(8, center, 1000.0, || random_body_color(&mut rng1)).unwrap();
    let store2 = circular_layout(8, center, 1000.0, || random_body_color(&mut rng2)).unwrap();

    assert_eq!(store1, store2);
}
