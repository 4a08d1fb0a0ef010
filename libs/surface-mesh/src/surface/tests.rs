use super::*;
use crate::error::MeshError;
use approx::assert_abs_diff_eq;
use config::constants::EPSILON;
use std::sync::atomic::{AtomicUsize, Ordering};

fn plane(n: usize, k: usize) -> MeshResult<ParametricSurface> {
    ParametricSurface::new(|s, _| s, |_, _| 0.0, |_, t| t, -1.0, 1.0, -1.0, 1.0, n, k)
}

#[test]
fn test_counts_match_resolution() {
    for (n, k) in [(2, 2), (2, 7), (5, 3), (10, 10)] {
        let surface = plane(n, k).unwrap();
        let mesh = surface.mesh();
        assert_eq!(mesh.vertex_count(), n * k);
        assert_eq!(mesh.segment_count(), n * (k - 1) + (n - 1) * k);
    }
}

#[test]
fn test_invalid_resolution() {
    assert_eq!(plane(1, 5).unwrap_err(), MeshError::invalid_resolution(1, 5));
    assert_eq!(plane(5, 1).unwrap_err(), MeshError::invalid_resolution(5, 1));
    assert_eq!(plane(0, 0).unwrap_err(), MeshError::invalid_resolution(0, 0));
}

#[test]
fn test_invalid_resolution_evaluates_nothing() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let result = build(
        move |s, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            s
        },
        |_, _| 0.0,
        |_, t| t,
        0.0,
        1.0,
        0.0,
        1.0,
        1,
        4,
    );
    assert!(result.is_err());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_each_component_evaluated_once_per_sample() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mesh = build(
        move |s, _| {
            counter.fetch_add(1, Ordering::SeqCst);
            s
        },
        |_, _| 0.0,
        |_, t| t,
        0.0,
        1.0,
        0.0,
        1.0,
        3,
        4,
    )
    .unwrap();
    assert_eq!(mesh.vertex_count(), 12);
    assert_eq!(calls.load(Ordering::SeqCst), 12);
}

#[test]
fn test_vertices_row_major() {
    let surface = plane(3, 4).unwrap();
    let mesh = surface.mesh();
    let (ds, dt) = surface.bounds().steps(surface.resolution());
    assert_abs_diff_eq!(ds, 1.0);
    assert_abs_diff_eq!(dt, 2.0 / 3.0);
    for i in 0..3 {
        for j in 0..4 {
            let v = mesh.vertex((i * 4 + j) as u32);
            assert_abs_diff_eq!(v.x, -1.0 + i as f64 * ds, epsilon = 1e-12);
            assert_abs_diff_eq!(v.z, -1.0 + j as f64 * dt, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_horizontal_segments_first_then_vertical() {
    let mesh = plane(2, 3).unwrap().into_mesh();
    // n*(k-1) = 4 horizontal, row by row
    assert_eq!(&mesh.segments()[..4], &[[0, 1], [1, 2], [3, 4], [4, 5]]);
    // (n-1)*k = 3 vertical, column by column
    assert_eq!(&mesh.segments()[4..], &[[0, 3], [1, 4], [2, 5]]);
}

#[test]
fn test_vertical_segments_column_by_column() {
    let mesh = plane(3, 2).unwrap().into_mesh();
    let vertical = &mesh.segments()[3 * (2 - 1)..];
    assert_eq!(vertical, &[[0, 2], [2, 4], [1, 3], [3, 5]]);
}

#[test]
fn test_no_wraparound_segments() {
    let (n, k) = (4, 5);
    let mesh = plane(n, k).unwrap().into_mesh();
    for &[a, b] in mesh.segments() {
        let (ai, aj) = (a as usize / k, a as usize % k);
        let (bi, bj) = (b as usize / k, b as usize % k);
        let neighbours = (ai == bi && bj == aj + 1) || (aj == bj && bi == ai + 1);
        assert!(neighbours, "segment [{a}, {b}] is not between grid neighbours");
    }
}

#[test]
fn test_segments_valid() {
    let mesh = plane(7, 9).unwrap().into_mesh();
    assert!(mesh.validate());
}

#[test]
fn test_boundary_samples() {
    let surface = ParametricSurface::new(
        |s, t| s * s + t,
        |s, t| s - t,
        |s, t| (s * t).sin(),
        0.3,
        2.9,
        -1.7,
        0.4,
        13,
        11,
    )
    .unwrap();
    let mesh = surface.mesh();
    let f = surface.functions();

    let first = mesh.vertex(0);
    let expected = f.evaluate(0.3, -1.7);
    assert_abs_diff_eq!(first.x, expected.x, epsilon = EPSILON);
    assert_abs_diff_eq!(first.y, expected.y, epsilon = EPSILON);
    assert_abs_diff_eq!(first.z, expected.z, epsilon = EPSILON);

    let last = mesh.vertex((13 * 11 - 1) as u32);
    let expected = f.evaluate(2.9, 0.4);
    assert_abs_diff_eq!(last.x, expected.x, epsilon = EPSILON);
    assert_abs_diff_eq!(last.y, expected.y, epsilon = EPSILON);
    assert_abs_diff_eq!(last.z, expected.z, epsilon = EPSILON);
}

#[test]
fn test_reversed_range_samples_backwards() {
    let mesh = build(|s, _| s, |_, _| 0.0, |_, t| t, 1.0, -1.0, 0.0, 1.0, 3, 2).unwrap();
    assert_abs_diff_eq!(mesh.vertex(0).x, 1.0);
    assert_abs_diff_eq!(mesh.vertex(2).x, 0.0);
    assert_abs_diff_eq!(mesh.vertex(4).x, -1.0);
}

#[test]
fn test_non_finite_values_pass_through() {
    let mesh = build(|s, _| 1.0 / s, |_, _| f64::NAN, |_, t| t, 0.0, 1.0, 0.0, 1.0, 2, 2).unwrap();
    assert!(mesh.vertex(0).x.is_infinite());
    assert!(mesh.vertex(0).y.is_nan());
    assert_eq!(mesh.vertex_count(), 4);
    assert!(mesh.validate());
}

#[test]
fn test_mesh_name() {
    let surface = plane(3, 8).unwrap();
    assert_eq!(surface.mesh().name(), "Parametric Surface(3,8)");
}

#[test]
fn test_from_graph() {
    let surface = ParametricSurface::from_graph(|x, z| x * z, 0.0, 2.0, 0.0, 3.0, 3, 4).unwrap();
    let last = surface.mesh().vertex(11);
    assert_abs_diff_eq!(last.x, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(last.y, 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(last.z, 3.0, epsilon = 1e-12);
}

#[test]
fn test_default_surface() {
    let surface = ParametricSurface::default();
    assert_eq!(surface.horizontal_count(), 49);
    assert_eq!(surface.vertical_count(), 49);
    assert_eq!(surface.s_range(), (-1.0, 1.0));
    assert_eq!(surface.t_range(), (-1.0, 1.0));
    let (min, max) = surface.mesh().bounding_box();
    assert!(min.y >= -1.0 - 1e-12);
    assert!(max.y <= 1.0 + 1e-12);
    // sin(πx)·sin(πz) vanishes on the boundary
    assert_abs_diff_eq!(surface.mesh().vertex(0).y, 0.0, epsilon = 1e-12);
}

#[test]
fn test_remake_new_resolution() {
    let surface = plane(3, 3).unwrap();
    let remade = surface.remake(5, 7).unwrap();
    assert_eq!(remade.horizontal_count(), 5);
    assert_eq!(remade.vertical_count(), 7);
    assert_eq!(remade.mesh().vertex_count(), 35);
    assert_eq!(remade.mesh().name(), "Parametric Surface(5,7)");
    assert_eq!(remade.bounds(), surface.bounds());

    // Original is untouched
    assert_eq!(surface.resolution(), Resolution::new(3, 3).unwrap());
    assert_eq!(surface.mesh().vertex_count(), 9);
}

#[test]
fn test_remake_same_resolution_is_identical() {
    let surface = ParametricSurface::new(
        |s, t| s.cos() * t,
        |s, t| s.sin() * t,
        |s, _| s,
        0.0,
        3.0,
        1.0,
        2.0,
        6,
        5,
    )
    .unwrap();
    let remade = surface.remake(6, 5).unwrap();
    assert_eq!(remade.mesh().segments(), surface.mesh().segments());
    for (a, b) in remade.mesh().vertices().iter().zip(surface.mesh().vertices()) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-12);
    }
}

#[test]
fn test_remake_invalid_resolution() {
    let surface = plane(3, 3).unwrap();
    assert_eq!(surface.remake(1, 3).unwrap_err(), MeshError::invalid_resolution(1, 3));
    assert_eq!(surface.remake(3, 0).unwrap_err(), MeshError::invalid_resolution(3, 0));
}

#[test]
fn test_sample_surface_uses_given_name() {
    let functions = SurfaceFunctions::graph(|_, _| 1.0);
    let resolution = Resolution::new(2, 2).unwrap();
    let mesh = sample_surface(&functions, ParameterBounds::default(), resolution, "Flat");
    assert_eq!(mesh.name(), "Flat");
    assert!(mesh.vertices().iter().all(|v| v.y == 1.0));
}

#[test]
fn test_surface_functions_debug() {
    let functions = SurfaceFunctions::graph(|_, _| 0.0);
    assert_eq!(format!("{functions:?}"), "SurfaceFunctions { .. }");
}

#[cfg(feature = "parallel")]
#[test]
fn test_parallel_sampling_keeps_row_major_order() {
    // Rows are evaluated on the rayon pool; every vertex must still land on
    // its serial index i*k + j
    let functions = SurfaceFunctions::new(
        |s, t| s * 3.0 + t,
        |s, t| (s - t).cos(),
        |s, t| s * t,
    );
    let bounds = ParameterBounds::new(-2.0, 5.0, 0.5, -1.5);
    let resolution = Resolution::new(97, 31).unwrap();
    let (ds, dt) = bounds.steps(resolution);

    let mut expected = Vec::with_capacity(resolution.vertex_count());
    for i in 0..resolution.n() {
        for j in 0..resolution.k() {
            let s = bounds.s1 + i as f64 * ds;
            let t = bounds.t1 + j as f64 * dt;
            expected.push(functions.evaluate(s, t));
        }
    }

    for _ in 0..4 {
        assert_eq!(sample_vertices(&functions, bounds, resolution), expected);
        let mesh = sample_surface(&functions, bounds, resolution, "Parallel");
        assert_eq!(mesh.vertices(), expected.as_slice());
    }
}
