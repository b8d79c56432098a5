use super::cfg::DIST_EPS;
use super::rand::{draw_lattice, draw_uniform, CloudCfg, PointCount, ReplayToken};
use super::*;
use proptest::prelude::*;
use ::rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

fn sample() -> Vec<Point> {
    vec![
        Point::new(32.0, 4.0),
        Point::new(7.0, 4.0),
        Point::new(6.0, 9.0),
        Point::new(2.0, 96.0),
    ]
}

fn assert_same_distance(points: &[Point]) {
    let dc = closest_pair_match(points).unwrap();
    let bf = closest_pair_brute_force(points).unwrap();
    assert!(
        (dc.distance - bf.distance).abs() < DIST_EPS,
        "n={} dc={} bf={}",
        points.len(),
        dc.distance,
        bf.distance
    );
    assert!((dc.a.distance(&dc.b) - dc.distance).abs() < DIST_EPS);
    assert_eq!(points[dc.i], dc.a);
    assert_eq!(points[dc.j], dc.b);
    assert_ne!(dc.i, dc.j);
}

#[test]
fn sample_set_returns_expected_pair() {
    let (a, b) = closest_pair(&sample()).unwrap();
    let mut got = [a, b];
    got.sort_by(|p, q| p.x.total_cmp(&q.x));
    assert_eq!(got, [Point::new(6.0, 9.0), Point::new(7.0, 4.0)]);
    assert!((a.distance(&b) - 26f64.sqrt()).abs() < 1e-12);
    assert!((a.distance(&b) - 5.0990).abs() < 1e-4);
}

#[test]
fn degenerate_inputs() {
    let p = Point::new(1.5, -2.0);
    assert_eq!(
        closest_pair(&[]),
        Err(PairError::InsufficientPoints { found: 0 })
    );
    assert_eq!(
        closest_pair(&[p]),
        Err(PairError::InsufficientPoints { found: 1 })
    );
    let m = closest_pair_match(&[p, p]).unwrap();
    assert_eq!(m.distance, 0.0);
    assert_eq!(m.points(), (p, p));
    assert_eq!(
        PairError::InsufficientPoints { found: 1 }.to_string(),
        "closest pair needs at least 2 points, got 1"
    );
}

#[test]
fn base_cases_match_hand_computed() {
    let two = [Point::new(0.0, 0.0), Point::new(3.0, 4.0)];
    let m = closest_pair_match(&two).unwrap();
    assert_eq!(m.distance, 5.0);
    assert_eq!(m.index_pair(), (0, 1));

    // Distances: (0,1)=√2, (0,2)=5, (1,2)=√13.
    let three = [
        Point::new(0.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(4.0, 3.0),
    ];
    let dc = closest_pair_match(&three).unwrap();
    let bf = closest_pair_brute_force(&three).unwrap();
    assert_eq!(dc.index_pair(), (0, 1));
    assert_eq!(bf.index_pair(), (0, 1));
    assert_eq!(dc.distance, 2f64.sqrt());
    assert_eq!(bf.distance, dc.distance);
}

#[test]
fn duplicates_anywhere_give_zero() {
    let tok = ReplayToken { seed: 11, index: 0 };
    let base = draw_uniform(
        CloudCfg {
            count: PointCount::Fixed(150),
            ..CloudCfg::default()
        },
        tok,
    )
    .unwrap();
    for (src, dst) in [(0, 0), (3, 149), (149, 75), (42, 42)] {
        let mut pts = base.clone();
        pts.insert(dst, base[src]);
        let m = closest_pair_match(&pts).unwrap();
        assert_eq!(m.distance, 0.0);
        assert_eq!(m.a, m.b);
    }
}

#[test]
fn matches_brute_force_on_random_clouds() {
    let mut tok = ReplayToken { seed: 2024, index: 0 };
    for n in 2..=200 {
        let cfg = CloudCfg {
            count: PointCount::Fixed(n),
            half_extent: 100.0,
            ..CloudCfg::default()
        };
        let pts = draw_uniform(cfg, tok).unwrap();
        assert_same_distance(&pts);
        tok = tok.next();
    }
}

#[test]
fn matches_brute_force_with_ties_and_duplicates() {
    let cfg = CloudCfg {
        count: PointCount::Uniform { min: 2, max: 200 },
        half_extent: 5.0,
        snap: Some(1.0),
        duplicate_frac: 0.02,
    };
    for index in 0..100 {
        let pts = draw_uniform(cfg, ReplayToken { seed: 9, index }).unwrap();
        assert_same_distance(&pts);
    }
}

#[test]
fn collinear_sets() {
    let vertical: Vec<Point> = (0..40)
        .map(|k| Point::new(1.0, (k * k) as f64 * 0.25))
        .collect();
    assert_same_distance(&vertical);
    let m = closest_pair_match(&vertical).unwrap();
    assert_eq!(m.distance, 0.25);

    let horizontal: Vec<Point> = (0..40).map(|k| Point::new(3.0 * k as f64, -7.0)).collect();
    let m = closest_pair_match(&horizontal).unwrap();
    assert_eq!(m.distance, 3.0);

    let diagonal: Vec<Point> = (0..33)
        .rev()
        .map(|k| Point::new(k as f64, 2.0 * k as f64))
        .collect();
    assert_same_distance(&diagonal);
}

#[test]
fn lattice_distance_is_spacing() {
    let pts = draw_lattice(12, 9, 0.75);
    let m = closest_pair_match(&pts).unwrap();
    assert_eq!(m.distance, 0.75);
    assert_same_distance(&pts);
}

#[test]
fn permutation_invariance() {
    let pts = draw_uniform(
        CloudCfg {
            count: PointCount::Fixed(120),
            snap: Some(0.05),
            ..CloudCfg::default()
        },
        ReplayToken { seed: 5, index: 1 },
    )
    .unwrap();
    let reference = closest_pair_match(&pts).unwrap().distance;
    let mut rng = StdRng::seed_from_u64(17);
    let mut shuffled = pts.clone();
    for _ in 0..25 {
        shuffled.shuffle(&mut rng);
        let d = closest_pair_match(&shuffled).unwrap().distance;
        assert!((d - reference).abs() < DIST_EPS);
    }
    shuffled.reverse();
    assert!((closest_pair_match(&shuffled).unwrap().distance - reference).abs() < DIST_EPS);
}

#[test]
fn scaling_scales_distance_and_keeps_pair() {
    let pts = draw_uniform(
        CloudCfg {
            count: PointCount::Fixed(90),
            half_extent: 10.0,
            ..CloudCfg::default()
        },
        ReplayToken { seed: 77, index: 3 },
    )
    .unwrap();
    let base = closest_pair_match(&pts).unwrap();
    // Powers of two scale every intermediate exactly.
    for k in [0.25, 2.0, 4.0, 1024.0] {
        let scaled: Vec<Point> = pts.iter().map(|p| p.scaled(k)).collect();
        let m = closest_pair_match(&scaled).unwrap();
        assert_eq!(m.distance, base.distance * k);
        assert_eq!(m.index_pair(), base.index_pair());
    }
    for k in [3.0, 0.1, 17.5] {
        let scaled: Vec<Point> = pts.iter().map(|p| p.scaled(k)).collect();
        let m = closest_pair_match(&scaled).unwrap();
        assert!((m.distance - base.distance * k).abs() < DIST_EPS * k.max(1.0));
        assert_eq!(m.index_pair(), base.index_pair());
    }
}

#[test]
fn caller_slice_is_untouched() {
    let pts = sample();
    let before = pts.clone();
    let _ = closest_pair(&pts).unwrap();
    let _ = closest_pair_brute_force(&pts).unwrap();
    assert_eq!(pts, before);
}

fn grid_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-15i32..15, -15i32..15), 2..200).prop_map(|raw| {
        raw.into_iter()
            .map(|(x, y)| Point::new(x as f64, y as f64))
            .collect()
    })
}

fn real_points() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 2..200)
        .prop_map(|raw| raw.into_iter().map(Point::from).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_real_points_match_brute_force(pts in real_points()) {
        let dc = closest_pair_match(&pts).unwrap();
        let bf = closest_pair_brute_force(&pts).unwrap();
        prop_assert!((dc.distance - bf.distance).abs() < DIST_EPS);
    }

    #[test]
    fn prop_grid_points_match_brute_force(pts in grid_points()) {
        let dc = closest_pair_match(&pts).unwrap();
        let bf = closest_pair_brute_force(&pts).unwrap();
        prop_assert!((dc.distance - bf.distance).abs() < DIST_EPS);
    }

    #[test]
    fn prop_reversal_keeps_distance(pts in real_points()) {
        let d = closest_pair_match(&pts).unwrap().distance;
        let mut rev = pts.clone();
        rev.reverse();
        prop_assert!((closest_pair_match(&rev).unwrap().distance - d).abs() < DIST_EPS);
    }
}
