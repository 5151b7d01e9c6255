use super::*;
use crate::error::EngineError;
use nalgebra::Vector2;

fn square_viewport(half: f64) -> Viewport {
    Viewport::new(-half, half, -half, half).unwrap()
}

fn clip_seeded(line: &Line, vp: &Viewport, seed: u64) -> crate::error::Result<ClippedLine> {
    let mut rng = TieToken { seed }.to_std_rng();
    clip_line(line, vp, GeomCfg::default(), &mut rng)
}

#[test]
fn flat_connector_gives_vertical_bisector_zero_b() {
    let points = vec![Vector2::new(-1.0, 0.0), Vector2::new(1.0, 0.0)];
    let g = build_reference_geometry(
        &points,
        ReferencePair { a: 0, b: 1 },
        0.25,
        0.2,
        GeomCfg::default(),
    )
    .unwrap();
    assert_eq!(g.connector.direction, Direction::Flat);
    assert_eq!(g.bisector.direction, Direction::Vertical);

    let clipped = clip_seeded(&g.bisector, &square_viewport(2.0), 1).unwrap();
    assert_eq!(clipped.case, LineCase::ZeroB);
    assert!(clipped.crossings.top && clipped.crossings.bottom);
    // Through x = 0, top to bottom.
    assert!(clipped.start.x.abs() < 1e-12);
    assert!((clipped.start.y - 2.0).abs() < 1e-12);
    assert!(clipped.end.x.abs() < 1e-12);
    assert!((clipped.end.y + 2.0).abs() < 1e-12);
}

#[test]
fn vertical_connector_gives_flat_bisector_zero_a() {
    let points = vec![Vector2::new(0.0, -1.0), Vector2::new(0.0, 1.0)];
    let g = build_reference_geometry(
        &points,
        ReferencePair { a: 0, b: 1 },
        0.25,
        0.2,
        GeomCfg::default(),
    )
    .unwrap();
    assert_eq!(g.connector.direction, Direction::Vertical);
    assert_eq!(g.bisector.direction, Direction::Flat);

    let clipped = clip_seeded(&g.bisector, &square_viewport(2.0), 1).unwrap();
    assert_eq!(clipped.case, LineCase::ZeroA);
    // Through y = 0, left to right.
    assert!((clipped.start.x + 2.0).abs() < 1e-12);
    assert!(clipped.start.y.abs() < 1e-12);
    assert!((clipped.end.x - 2.0).abs() < 1e-12);
    assert!(clipped.end.y.abs() < 1e-12);
}

#[test]
fn bisector_is_perpendicular_and_direction_inverted() {
    let points = vec![Vector2::new(0.3, -0.7), Vector2::new(1.9, 1.2)];
    let g = build_reference_geometry(
        &points,
        ReferencePair { a: 0, b: 1 },
        0.25,
        0.2,
        GeomCfg::default(),
    )
    .unwrap();
    assert_eq!(g.connector.direction, Direction::UpwardSlope);
    assert_eq!(g.bisector.direction, Direction::DownwardSlope);
    assert!((g.connector.slope * g.bisector.slope + 1.0).abs() < 1e-12);
    // Bisector passes through the midpoint.
    assert!(g.bisector.side_of(g.midpoint, g.cfg).abs() < 1e-12);
}

#[test]
fn corridor_offset_is_tolerance_times_length() {
    let points = vec![Vector2::new(-1.0, -1.0), Vector2::new(1.0, 1.0)];
    let g = build_reference_geometry(
        &points,
        ReferencePair { a: 0, b: 1 },
        0.25,
        0.2,
        GeomCfg::default(),
    )
    .unwrap();
    let offset = 0.25 * g.connector_length;
    assert!((offset - 0.7071).abs() < 1e-3);
    assert_eq!(g.bisector.direction, Direction::DownwardSlope);
    assert!((g.bisector.intercept).abs() < 1e-12);
    // West shifts toward a = (-1, -1), east the other way; slopes match.
    assert!((g.corridor.west.intercept + offset).abs() < 1e-12);
    assert!((g.corridor.east.intercept - offset).abs() < 1e-12);
    assert!((g.corridor.west.slope - g.bisector.slope).abs() < 1e-12);
    assert!((g.corridor.east.slope - g.bisector.slope).abs() < 1e-12);
    // And west really is nearer a.
    let d = |line: &Line| line.side_of(g.a, g.cfg).abs();
    assert!(d(&g.corridor.west) < d(&g.corridor.east));
}

#[test]
fn sloped_cases_cover_all_edge_pairs() {
    let vp = square_viewport(2.0);
    let up = |slope, intercept| Line {
        slope,
        intercept,
        direction: Direction::UpwardSlope,
    };
    let down = |slope, intercept| Line {
        slope,
        intercept,
        direction: Direction::DownwardSlope,
    };
    let cases = [
        (up(0.25, 0.0), LineCase::Ia),
        (up(1.0, 0.5), LineCase::IIa),
        (up(1.0, -0.5), LineCase::IIIa),
        (up(4.0, 0.0), LineCase::IVa),
        (down(-0.25, 0.0), LineCase::Ib),
        (down(-1.0, -0.5), LineCase::IIb),
        (down(-1.0, 0.5), LineCase::IIIb),
        (down(-4.0, 0.0), LineCase::IVb),
    ];
    for (line, expected) in cases {
        let clipped = clip_seeded(&line, &vp, 3).unwrap();
        assert_eq!(clipped.case, expected, "line {line:?}");
        assert!(vp.contains(clipped.start));
        assert!(vp.contains(clipped.end));
        // Endpoints lie on the line.
        assert!((clipped.start.y - line.y_at(clipped.start.x)).abs() < 1e-9);
        assert!((clipped.end.y - line.y_at(clipped.end.x)).abs() < 1e-9);
    }
}

#[test]
fn case_defined_endpoint_order() {
    let vp = square_viewport(2.0);
    // IVa runs bottom to top.
    let steep = Line {
        slope: 4.0,
        intercept: 0.0,
        direction: Direction::UpwardSlope,
    };
    let clipped = clip_seeded(&steep, &vp, 3).unwrap();
    assert!((clipped.start.y + 2.0).abs() < 1e-12);
    assert!((clipped.end.y - 2.0).abs() < 1e-12);
    // IIb runs left to bottom.
    let diag = Line {
        slope: -1.0,
        intercept: -0.5,
        direction: Direction::DownwardSlope,
    };
    let clipped = clip_seeded(&diag, &vp, 3).unwrap();
    assert!((clipped.start.x + 2.0).abs() < 1e-12);
    assert!((clipped.end.y + 2.0).abs() < 1e-12);
}

#[test]
fn corner_tie_break_yields_valid_upward_case() {
    // y = x passes exactly through two opposite corners.
    let diag = Line {
        slope: 1.0,
        intercept: 0.0,
        direction: Direction::UpwardSlope,
    };
    let vp = square_viewport(2.0);
    for seed in 0..32 {
        let clipped = clip_seeded(&diag, &vp, seed).unwrap();
        assert!(matches!(
            clipped.case,
            LineCase::Ia | LineCase::IIa | LineCase::IIIa | LineCase::IVa
        ));
        assert!(vp.contains(clipped.start));
        assert!(vp.contains(clipped.end));
    }
    // Same seed, same resolution.
    let first = clip_seeded(&diag, &vp, 9).unwrap();
    let second = clip_seeded(&diag, &vp, 9).unwrap();
    assert_eq!(first.case, second.case);
    assert_eq!(first.start, second.start);
}

#[test]
fn clipping_is_idempotent() {
    let line = Line {
        slope: 0.6,
        intercept: 0.3,
        direction: Direction::UpwardSlope,
    };
    let vp = square_viewport(2.0);
    let first = clip_seeded(&line, &vp, 5).unwrap();
    let second = clip_seeded(&first.line, &vp, 5).unwrap();
    assert_eq!(first.case, second.case);
    assert_eq!(first.start, second.start);
    assert_eq!(first.end, second.end);
}

#[test]
fn line_missing_viewport_is_unclassifiable() {
    let far = Line {
        slope: 1.0,
        intercept: 10.0,
        direction: Direction::UpwardSlope,
    };
    let err = clip_seeded(&far, &square_viewport(2.0), 1).unwrap_err();
    assert!(matches!(err, EngineError::UnclassifiableLine { .. }));
}

#[test]
fn invalid_reference_pairs_are_rejected() {
    let points = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(0.0, 0.0),
    ];
    let cfg = GeomCfg::default();
    let build = |a, b| build_reference_geometry(&points, ReferencePair { a, b }, 0.25, 0.2, cfg);
    assert!(matches!(
        build(1, 1),
        Err(EngineError::InvalidReferencePoints { .. })
    ));
    assert!(matches!(
        build(0, 5),
        Err(EngineError::InvalidReferencePoints { .. })
    ));
    // Distinct indices, coincident coordinates.
    assert!(matches!(
        build(0, 2),
        Err(EngineError::InvalidReferencePoints { .. })
    ));
}

#[test]
fn viewport_around_rounds_up_and_adds_margin() {
    let points = vec![Vector2::new(1.2, -3.4)];
    let vp = Viewport::around(&points, 0.5).unwrap();
    assert_eq!(vp, Viewport::new(-4.5, 4.5, -4.5, 4.5).unwrap());
}

#[test]
fn viewport_rejects_inverted_bounds() {
    assert!(matches!(
        Viewport::new(1.0, -1.0, 0.0, 1.0),
        Err(EngineError::InvalidViewport { .. })
    ));
}

mod props {
    use super::*;
    use proptest::prelude::*;

    fn coords() -> impl Strategy<Value = f64> {
        -3.0..3.0f64
    }

    proptest! {
        #[test]
        fn bisector_invariants(ax in coords(), ay in coords(), bx in coords(), by in coords()) {
            prop_assume!((ax - bx).abs() > 1e-6 || (ay - by).abs() > 1e-6);
            let points = vec![Vector2::new(ax, ay), Vector2::new(bx, by)];
            let g = build_reference_geometry(
                &points,
                ReferencePair { a: 0, b: 1 },
                0.25,
                0.2,
                GeomCfg::default(),
            )
            .unwrap();
            prop_assert_eq!(g.bisector.direction, g.connector.direction.inverted());
            if matches!(
                g.connector.direction,
                Direction::UpwardSlope | Direction::DownwardSlope
            ) {
                prop_assert!((g.connector.slope * g.bisector.slope + 1.0).abs() < 1e-6);
            }
        }

        #[test]
        fn bisector_endpoints_stay_inside(
            ax in coords(), ay in coords(), bx in coords(), by in coords(), seed in 0u64..1024,
        ) {
            prop_assume!((ax - bx).abs() > 1e-6 || (ay - by).abs() > 1e-6);
            let points = vec![Vector2::new(ax, ay), Vector2::new(bx, by)];
            let vp = Viewport::around(&points, 1.0).unwrap();
            let g = build_reference_geometry(
                &points,
                ReferencePair { a: 0, b: 1 },
                0.25,
                0.2,
                GeomCfg::default(),
            )
            .unwrap();
            let mut rng = TieToken { seed }.to_std_rng();
            // The bisector runs through the midpoint, which is inside the
            // viewport, so it must always classify.
            let clipped = clip_line(&g.bisector, &vp, g.cfg, &mut rng).unwrap();
            prop_assert!(vp.contains(clipped.start));
            prop_assert!(vp.contains(clipped.end));
            // Corridor lines may fall outside a tight viewport; when they
            // classify, their endpoints are inside too.
            for line in [&g.corridor.west, &g.corridor.east] {
                if let Ok(c) = clip_line(line, &vp, g.cfg, &mut rng) {
                    prop_assert!(vp.contains(c.start));
                    prop_assert!(vp.contains(c.end));
                }
            }
        }
    }
}
