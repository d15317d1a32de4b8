use function_plotter::{
	PlotController, PlotError, PlotInput, PlotState, ShiftAmount, Viewport, DEFAULT_POINTS,
	INITIAL_LABEL, SHIFTED_LABEL, SHIFT_MAX,
};
use parsing::ExprError;

fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

#[test]
fn square_function_scenario() {
	let mut controller = PlotController::default();
	let output = controller
		.plot(&PlotInput::new("x**2", -5.0, 0.0))
		.unwrap()
		.expect("first plot always draws");

	let initial = &output.curves[0];
	assert_eq!(initial.label, INITIAL_LABEL);
	assert_eq!(initial.x.len(), DEFAULT_POINTS);
	assert_eq!(initial.x.first(), Some(&-5.0));
	assert_eq!(initial.x.last(), Some(&5.0));

	let y_max = initial.y.iter().cloned().fold(f64::MIN, f64::max);
	let y_min = initial.y.iter().cloned().fold(f64::MAX, f64::min);
	assert!(close(y_max, 25.0));
	assert!(y_min >= 0.0);

	assert!(close(output.viewport.x_max, 25.0));
	assert!(close(output.viewport.y_max, 25.0));
	assert_eq!(output.viewport.x_min, -output.viewport.x_max);
	assert_eq!(output.viewport.y_min, -output.viewport.y_max);
	assert_eq!(controller.state(), PlotState::Rendered);
}

#[test]
fn log_scenario() {
	let mut controller = PlotController::default();
	let output = controller
		.plot(&PlotInput::new("log(2*x)", -5.0, 0.0))
		.unwrap()
		.unwrap();

	assert!(output.curves[0].y.iter().any(|y| y.is_nan()));
	assert_eq!(output.viewport, Viewport::square(10.0));
}

#[test]
fn pole_scenario() {
	let mut controller = PlotController::default();
	let output = controller
		.plot(&PlotInput::new("1/(x-3)", -7.0, 0.0))
		.unwrap()
		.unwrap();

	assert_eq!(output.curves[0].x.last(), Some(&3.0));
	assert_eq!(output.curves[0].y.last(), Some(&f64::INFINITY));
	assert!(output.viewport.x_max.is_finite());
}

#[test]
fn parse_error_keeps_state() {
	let mut controller = PlotController::default();
	let input = PlotInput::new("x**2", -5.0, 0.0);
	controller.plot(&input).unwrap();

	let snapshot = controller.last_request().cloned();
	let viewport = controller.viewport();

	let result = controller.plot(&PlotInput::new("x +* 2", -5.0, 0.0));
	assert!(matches!(
		result,
		Err(PlotError::Expr(ExprError::Parse(_)))
	));
	assert_eq!(controller.state(), PlotState::Failed);
	assert_eq!(controller.last_request().cloned(), snapshot);
	assert_eq!(controller.viewport(), viewport);

	// retrying the last good input is a no-op since the snapshot is untouched
	assert_eq!(controller.plot(&input), Ok(None));
	assert_eq!(controller.state(), PlotState::Rendered);
}

#[test]
fn unchanged_request_skipped() {
	let mut controller = PlotController::default();
	let input = PlotInput::new("sin(x)", -5.0, 0.0);
	assert!(controller.plot(&input).unwrap().is_some());
	assert_eq!(controller.plot(&input), Ok(None));
	assert_eq!(controller.shift_then_plot(&input, 0.0), Ok(None));
}

#[test]
fn y_slider_triggers_redraw() {
	let mut controller = PlotController::default();
	controller.plot(&PlotInput::new("sin(x)", -5.0, 0.0)).unwrap();
	assert!(controller
		.plot(&PlotInput::new("sin(x)", -5.0, 2.0))
		.unwrap()
		.is_some());
}

#[test]
fn shift_scenario() {
	let mut controller = PlotController::default();
	let input = PlotInput::new("x^2", -5.0, 0.0);
	let first = controller.plot(&input).unwrap().unwrap();

	let output = controller.shift_then_plot(&input, 2.5).unwrap().unwrap();
	let (initial, shifted) = (&output.curves[0], &output.curves[1]);
	assert_eq!(shifted.label, SHIFTED_LABEL);

	// same y samples against translated x
	assert_eq!(shifted.y, initial.y);
	for (x, x_shifted) in initial.x.iter().zip(shifted.x.iter()) {
		assert!(close(x + 2.5, *x_shifted));
	}

	// viewport only depends on the evaluated samples
	assert_eq!(output.viewport, first.viewport);
	assert_eq!(controller.shift(), ShiftAmount::new(2.5));

	// plain plot keeps the committed shift
	assert_eq!(controller.plot(&input), Ok(None));
	let moved = controller
		.plot(&PlotInput::new("x^2", -4.0, 0.0))
		.unwrap()
		.unwrap();
	assert!(close(moved.curves[1].x[0], -4.0 + 2.5));
}

#[test]
fn failed_shift_not_committed() {
	let mut controller = PlotController::default();
	controller.plot(&PlotInput::new("x", -5.0, 0.0)).unwrap();

	assert!(controller
		.shift_then_plot(&PlotInput::new("foo(x)", -5.0, 0.0), 3.0)
		.is_err());
	assert_eq!(controller.shift(), ShiftAmount::ZERO);
}

#[test]
fn shift_clamped_to_range() {
	let mut controller = PlotController::default();
	let input = PlotInput::new("x", -5.0, 0.0);
	let output = controller.shift_then_plot(&input, 50.0).unwrap().unwrap();
	assert_eq!(controller.shift().get(), SHIFT_MAX);
	assert!(close(output.curves[1].x[0], -5.0 + SHIFT_MAX));
}

#[test]
fn error_message() {
	let mut controller = PlotController::default();
	let error = controller
		.plot(&PlotInput::new("x^a", -5.0, 0.0))
		.unwrap_err();
	assert_eq!(error.to_string(), "Parse error: invalid variable: a");

	let error = controller.plot(&PlotInput::new("", -5.0, 0.0)).unwrap_err();
	assert_eq!(error.to_string(), "Parse error: empty expression");
}
