//! Integration tests for the catalog, sampling, scanning and assembly pipeline.
//!
//! These exercise the public API end to end: resolve a function by name,
//! sample it, scan it, assemble the frame and hand it to a renderer.

use approx::assert_relative_eq;
use stepscan_core::math::catalog::{FunctionCatalog, FunctionId};
use stepscan_core::math::sampling::SampleGenerator;
use stepscan_core::math::solvers::LinearScanSolver;
use stepscan_core::plot::{PlotFrame, Renderer, SeriesRole};
use stepscan_core::types::{CatalogError, SamplePoint};
use stepscan_core::workflow::{run_action, Action, RunError, ScanSettings};

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_catalog_matches_closed_forms() {
    let xs = [-3.0, -1.5, 0.0, 0.5, 1.0, 2.5, 7.0];

    for x in xs {
        let expected = [
            ("x^2 - 4", x * x - 4.0),
            ("x^3 - 2x - 5", x * x * x - 2.0 * x - 5.0),
            ("sin(x) - 0.5", f64::sin(x) - 0.5),
            ("cos(x) - x", f64::cos(x) - x),
            ("e^x - 2", f64::exp(x) - 2.0),
        ];
        for (name, value) in expected {
            let f = FunctionCatalog::resolve(name).unwrap();
            assert_relative_eq!(f.eval(x), value, epsilon = 1e-12);
        }
    }

    assert_eq!(FunctionCatalog::resolve("x^2 - 4").unwrap().eval(3.0_f64), 5.0);
}

#[test]
fn test_catalog_rejects_unsupported() {
    assert_eq!(
        FunctionCatalog::resolve("unsupported"),
        Err(CatalogError::UnknownFunction("unsupported".to_string()))
    );
}

// ============================================================================
// Sampling
// ============================================================================

#[test]
fn test_generate_display_grid() {
    let f = FunctionCatalog::resolve("cos(x) - x").unwrap();
    let curve = SampleGenerator::generate(f.as_fn::<f64>(), -10.0, 10.0, 0.1).unwrap();

    assert_eq!(curve[0].x, -10.0);
    for pair in curve.windows(2) {
        assert!(pair[1].x > pair[0].x);
    }
    for p in &curve {
        assert_eq!(p.y, f.eval(p.x));
    }
}

// ============================================================================
// Scanning
// ============================================================================

#[test]
fn test_scan_quadratic_exact_interpolation() {
    let f = FunctionCatalog::resolve("x^2 - 4").unwrap();
    let result = LinearScanSolver::with_defaults()
        .scan(f.as_fn::<f64>(), 0.0, 0.1, 10.0)
        .unwrap();

    assert_eq!(result.trail[0], SamplePoint::new(0.0, -4.0));

    let n = result.trail.len();
    let before = result.trail[n - 2];
    let after = result.trail[n - 1];
    assert!(before.y < 0.0);
    assert!(after.y > 0.0);
    assert_relative_eq!(before.x, 1.9, epsilon = 1e-9);
    assert_relative_eq!(after.x, 2.0, epsilon = 1e-9);

    let expected = after.x - 0.1 + 0.1 * (0.0 - before.y) / (after.y - before.y);
    let root = result.root.unwrap();
    assert_eq!(root, expected);
    assert!((root - 2.0).abs() < 0.1);
}

#[test]
fn test_scan_exponential_near_ln2() {
    let f = FunctionCatalog::resolve("e^x - 2").unwrap();
    let result = LinearScanSolver::with_defaults()
        .scan(f.as_fn::<f64>(), 0.0, 0.1, 10.0)
        .unwrap();

    assert!((result.root.unwrap() - std::f64::consts::LN_2).abs() < 0.1);
}

#[test]
fn test_scan_short_range_no_root() {
    let f = FunctionCatalog::resolve("x^2 - 4").unwrap();
    let result = LinearScanSolver::with_defaults()
        .scan(f.as_fn::<f64>(), 0.0, 0.1, 1.0)
        .unwrap();

    assert_eq!(result.root, None);
    assert_eq!(result.trail.first().unwrap().x, 0.0);
    let last = result.trail.last().unwrap().x;
    assert!(last <= 1.0 && last > 0.9);
}

#[test]
fn test_scan_zero_range() {
    let f = FunctionCatalog::resolve("x^2 - 4").unwrap();
    let result = LinearScanSolver::with_defaults()
        .scan(f.as_fn::<f64>(), 0.0, 0.1, 0.0)
        .unwrap();

    assert_eq!(result.trail.len(), 1);
    assert_eq!(result.root, None);
}

#[test]
fn test_scan_bit_identical_repeats() {
    for id in FunctionCatalog::all() {
        let f = stepscan_core::math::catalog::Evaluator::new(id);
        let solver = LinearScanSolver::with_defaults();
        let a = solver.scan(f.as_fn::<f64>(), 0.0, 0.1, 10.0).unwrap();
        let b = solver.scan(f.as_fn::<f64>(), 0.0, 0.1, 10.0).unwrap();

        assert_eq!(a.root.map(f64::to_bits), b.root.map(f64::to_bits), "{}", id);
        assert_eq!(a.trail, b.trail, "{}", id);
    }
}

#[test]
fn test_every_catalog_function_has_root_in_default_window() {
    let expected = [
        (FunctionId::QuadraticMinusFour, 2.0),
        (FunctionId::CubicMinusLinear, 2.094_551_481_542_327),
        (FunctionId::SineMinusHalf, std::f64::consts::FRAC_PI_6),
        (FunctionId::CosineMinusX, 0.739_085_133_215_160_7),
        (FunctionId::ExpMinusTwo, std::f64::consts::LN_2),
    ];

    for (id, true_root) in expected {
        let result = LinearScanSolver::with_defaults()
            .scan(|x: f64| id.evaluate(x), 0.0, 0.1, 10.0)
            .unwrap();
        let root = result.root.unwrap();
        assert!(
            (root - true_root).abs() < 0.1,
            "{}: root {} not within a step of {}",
            id,
            root,
            true_root
        );
    }
}

// ============================================================================
// Actions and the render boundary
// ============================================================================

#[derive(Default)]
struct RecordingRenderer {
    frames: Vec<PlotFrame>,
}

impl Renderer for RecordingRenderer {
    type Error = std::io::Error;

    fn render(&mut self, frame: &PlotFrame) -> Result<(), Self::Error> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

struct FailingRenderer;

impl Renderer for FailingRenderer {
    type Error = std::io::Error;

    fn render(&mut self, _frame: &PlotFrame) -> Result<(), Self::Error> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "display gone"))
    }
}

#[test]
fn test_solve_renders_once() {
    let mut renderer = RecordingRenderer::default();
    let scan = run_action(
        Action::Solve,
        "f1(x) = x^2 - 4",
        &ScanSettings::default(),
        &mut renderer,
    )
    .unwrap()
    .unwrap();

    assert_eq!(renderer.frames.len(), 1);
    let frame = &renderer.frames[0];
    assert_eq!(frame.series.len(), 3);

    let solution = frame.series_by_role(SeriesRole::Solution).unwrap();
    assert_eq!(solution.points.len(), 1);
    assert_eq!(solution.points[0].x, scan.root.unwrap());
    assert_eq!(
        frame.status.as_deref(),
        Some(format!("Solution: {}", scan.root.unwrap()).as_str())
    );
}

#[test]
fn test_plot_renders_curve_only() {
    let mut renderer = RecordingRenderer::default();
    let scan = run_action(Action::Plot, "f4", &ScanSettings::default(), &mut renderer).unwrap();

    assert!(scan.is_none());
    assert_eq!(renderer.frames.len(), 1);
    assert_eq!(renderer.frames[0].series.len(), 1);
    assert_eq!(renderer.frames[0].guides.len(), 2);
}

#[test]
fn test_unknown_function_never_renders() {
    let mut renderer = RecordingRenderer::default();
    let result = run_action(Action::Solve, "sqrt(x)", &ScanSettings::default(), &mut renderer);

    assert!(matches!(result, Err(RunError::Action(_))));
    assert!(renderer.frames.is_empty());
}

#[test]
fn test_render_failure_surfaces() {
    let result = run_action(Action::Plot, "f1", &ScanSettings::default(), FailingRenderer);
    match result {
        Err(RunError::Render(e)) => assert_eq!(e.to_string(), "display gone"),
        other => panic!("Expected render error, got {:?}", other),
    }
}
