//! Integration tests for shape_outline

use shape_outline::*;

fn pts(coords: &[(f32, f32)]) -> Vec<Vec2> {
    coords.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

/// Rotate so the lexicographically smallest vertex comes first
fn normalized(points: &[Vec2]) -> Vec<Vec2> {
    let start = points
        .iter()
        .enumerate()
        .min_by(|a, b| {
            (a.1.y, a.1.x)
                .partial_cmp(&(b.1.y, b.1.x))
                .expect("finite coordinates")
        })
        .map(|(i, _)| i)
        .unwrap_or(0);
    let mut rotated = points.to_vec();
    rotated.rotate_left(start);
    rotated
}

#[test]
fn test_solid_rectangles_trace_to_their_corners() {
    for (w, h) in [(1u32, 1u32), (2, 1), (1, 3), (5, 4), (16, 9)] {
        let mask = SolidMask::from_fn(w, h, |_, _| true);
        let raw = trace(&mask);

        assert_eq!(raw.len(), 2 * (w + h) as usize, "{}x{}", w, h);

        let corners = normalized(raw.merge_collinear().points());
        let (wf, hf) = (w as f32, h as f32);
        assert_eq!(
            corners,
            pts(&[(0.0, 0.0), (wf, 0.0), (wf, hf), (0.0, hf)]),
            "{}x{}",
            w,
            h
        );
    }
}

#[test]
fn test_fully_transparent_traces_empty() {
    let mask = SolidMask::from_fn(8, 8, |_, _| false);
    assert!(trace(&mask).is_empty());
}

#[test]
fn test_ring_ignores_hole() {
    let mask = SolidMask::from_rows(&["###", "#.#", "###"]);
    let outline = trace(&mask);

    assert!(outline.is_usable());
    assert!(!outline.points().contains(&Vec2::new(1.0, 1.0)));
    assert!(!outline.points().contains(&Vec2::new(2.0, 2.0)));
    assert_eq!(outline.signed_area(), 9.0);
}

#[test]
fn test_traced_loops_are_closed_chains() {
    let mask = SolidMask::from_rows(&[
        "..####..",
        ".######.",
        "###..###",
        "##....##",
        "###..###",
        ".######.",
        "..####..",
    ]);

    for outline in trace_all(&mask) {
        let points = outline.points();
        for i in 0..points.len() {
            let a = points[i];
            let b = points[(i + 1) % points.len()];
            assert_eq!((b - a).length(), 1.0, "gap between {:?} and {:?}", a, b);
        }
    }
}

#[test]
fn test_simplify_is_idempotent_on_traced_sprite() {
    // Rough circle
    let mask = SolidMask::from_fn(24, 24, |x, y| {
        let dx = x as f32 - 11.5;
        let dy = y as f32 - 11.5;
        dx * dx + dy * dy < 100.0
    });
    let raw = trace(&mask);
    assert!(raw.is_usable());

    for epsilon in [0.0, 0.5, 0.8, 1.5, 4.0] {
        let once = raw.simplified(epsilon);
        let twice = once.simplified(epsilon);
        assert_eq!(once, twice, "epsilon {}", epsilon);
        assert!(once.len() <= raw.len());
    }
}

#[test]
fn test_zero_epsilon_only_drops_collinear_points() {
    let triangle = pts(&[(0.0, 0.0), (4.0, 1.0), (1.0, 3.0)]);
    assert_eq!(simplify(&triangle, 0.0), triangle);

    let with_midpoint = pts(&[(0.0, 0.0), (2.0, 0.0), (4.0, 0.0), (2.0, 3.0)]);
    assert_eq!(
        simplify(&with_midpoint, 0.0),
        pts(&[(0.0, 0.0), (4.0, 0.0), (2.0, 3.0)])
    );
}

#[test]
fn test_pipeline_with_ignored_background() {
    // 6x4 sprite: magenta background, opaque 3x2 body
    let magenta = [255, 0, 255, 255];
    let body = [40, 90, 200, 255];
    let mut data = Vec::new();
    for y in 0..4 {
        for x in 0..6 {
            let inside = (1..4).contains(&x) && (1..3).contains(&y);
            data.extend_from_slice(if inside { &body } else { &magenta });
        }
    }
    let pixels = PixelBuffer::new(&data, 6, 4);

    // Without ignoring magenta the whole sprite is solid
    let plain = OutlineGenerator::new(OutlineSettings::default().with_simplify_tolerance(0.0))
        .unwrap()
        .generate(&pixels, pixels.full_region())
        .unwrap();
    assert_eq!(plain.merge_collinear().len(), 4);
    assert_eq!(plain.signed_area(), 24.0);

    let mut settings = OutlineSettings::default().with_simplify_tolerance(0.0);
    assert!(settings.ignore_color(Rgb::from_rgb8(255, 0, 255)));
    let body_outline = OutlineGenerator::new(settings)
        .unwrap()
        .generate(&pixels, pixels.full_region())
        .unwrap();

    assert_eq!(
        normalized(body_outline.merge_collinear().points()),
        pts(&[(1.0, 1.0), (4.0, 1.0), (4.0, 3.0), (1.0, 3.0)])
    );
}

#[test]
fn test_everything_ignored_is_empty_outline() {
    let data = [255u8, 255, 255, 255].repeat(9);
    let pixels = PixelBuffer::new(&data, 3, 3);
    let settings = OutlineSettings::default().with_ignored_color(Rgb::WHITE);
    let result = OutlineGenerator::new(settings)
        .unwrap()
        .generate(&pixels, pixels.full_region());

    assert_eq!(result, Err(OutlineError::EmptyOutline));
}
