use parsing::{ExprError, NumericFunction, SUPPORTED_FUNCTIONS};
use std::collections::HashMap;

/// Returns if function with string `func_str` compiles over `x`
fn func_is_valid(func_str: &str) -> bool { parsing::compile(func_str, "x").is_ok() }

/// Used for testing: compiles `func_str`. if `expect_valid` == `true`, it expects no errors to be created.
fn test_func_helper(func_str: &str, expect_valid: bool) {
	let is_valid = func_is_valid(func_str);
	let string = format!(
		"function: {} (expected: {}, got: {})",
		func_str, expect_valid, is_valid
	);

	if is_valid == expect_valid {
		println!("{}", string);
	} else {
		panic!("{}", string);
	}
}

/// Tests to make sure functions that are expected to succeed, succeed.
#[test]
fn test_expected() {
	let values = HashMap::from([
		("x^2", true),
		("x**2", true),
		("x ** 2", true),
		("sin(x)", true),
		("sin(2*x)", true),
		("log(2*x)", true),
		("log10(x)", true),
		("1/(x-3)", true),
		("x/0", true),
		("e^sin(x)", true),
		("2*pi*x", true),
		("-x^2 + 3*x - 1", true),
		("sqrt(abs(x))", true),
		("(x+1)*(x-3)", true),
		("5", true),
		("", false),
		("a", false),
		("y", false),
		("x +* 2", false),
		("log222(x)", false),
		("abcdef", false),
		("log10(x", false),
		("x^a", false),
		("sin(cos(x)))", false),
		("2x", false),
		("sin()", false),
		("x,2", false),
		("import(x)", false),
	]);

	for (key, value) in values {
		test_func_helper(key, value);
	}
}

#[test]
fn supported_functions_compile() {
	for func in SUPPORTED_FUNCTIONS.iter() {
		test_func_helper(&format!("{}(x)", func), true);
		test_func_helper(&format!("{}(2*x+1)", func), true);
	}
}

#[test]
fn invalid_variable_message() {
	assert_eq!(
		parsing::compile("x*a", "x"),
		Err(ExprError::Parse("invalid variable: a".to_owned()))
	);
}

#[test]
fn normalized_power_matches() {
	let caret = parsing::compile(&parsing::normalize("x^2"), "x").unwrap();
	let double_star = parsing::compile("x**2", "x").unwrap();
	assert_eq!(caret, double_star);

	let xs = parsing::linspace(-3.0, 3.0, 25).unwrap();
	assert_eq!(caret.eval_slice(&xs), double_star.eval_slice(&xs));
}

#[test]
fn natural_log() {
	let func = parsing::compile("log(x)", "x").unwrap();
	let y = func.get(std::f64::consts::E).unwrap();
	assert!((y - 1.0).abs() < 1e-12);
}

/// Unary minus binds looser than `^`, and `^` groups to the right
#[test]
fn power_precedence() {
	let sin_sq = 1.0_f64.sin().powi(2);
	let values = [
		("-x^2", 3.0, -9.0),
		("-x**2", 3.0, -9.0),
		("2*-x^2", 3.0, -18.0),
		("-sin(x)^2", 1.0, -sin_sq),
		("2^-x^2", 1.0, 0.5),
		("(-x)^2", 3.0, 9.0),
		("-2^2", 0.0, -4.0),
		("-x^2 + 3*x - 1", 2.0, 1.0),
		("2^3^2", 0.0, 512.0),
		("2**3**2", 0.0, 512.0),
		("x^2^-1", 4.0, 2.0),
		("x-1-2", 0.0, -3.0),
		("8/4/2", 0.0, 1.0),
	];

	for (func_str, x, expected) in values {
		let y = parsing::compile(func_str, "x").unwrap().get(x).unwrap();
		assert!(
			(y - expected).abs() < 1e-12,
			"{} at {}: expected {}, got {}",
			func_str,
			x,
			expected,
			y
		);
	}
}

/// Samples are evenly spaced, strictly increasing and hit both endpoints
#[test]
fn evaluate_spacing() {
	let cases = [
		("x^2", -5.0, 5.0, 1000),
		("sin(x)", 0.0, 1.0, 2),
		("x", -0.5, 123.25, 37),
		("exp(x)", 3.0, 3.5, 500),
	];

	for (func_str, min, max, points) in cases {
		let func = parsing::compile(func_str, "x").unwrap();
		let samples = parsing::evaluate(&func, min, max, points).unwrap();
		assert_eq!(samples.len(), points);
		assert_eq!(samples.first_x(), Some(min));
		assert_eq!(samples.last_x(), Some(max));

		let step = (max - min) / ((points - 1) as f64);
		for window in samples.x().windows(2) {
			assert!(window[1] > window[0]);
			assert!(((window[1] - window[0]) - step).abs() < 1e-9);
		}
	}
}

#[test]
fn evaluate_values() {
	let func = parsing::compile("x^2", "x").unwrap();
	let samples = parsing::evaluate(&func, -1.0, 1.0, 5).unwrap();
	assert_eq!(
		samples.pairs().collect::<Vec<(f64, f64)>>(),
		vec![(-1.0, 1.0), (-0.5, 0.25), (0.0, 0.0), (0.5, 0.25), (1.0, 1.0)]
	);
}

#[test]
fn undefined_points_tolerated() {
	let func = parsing::compile("log(2*x)", "x").unwrap();
	let samples = parsing::evaluate(&func, -5.0, 5.0, 1000).unwrap();
	assert!(samples.y().iter().any(|y| y.is_nan()));
	assert!(samples.y().iter().any(|y| y.is_finite()));
}

#[test]
fn pole_gives_infinity() {
	let func = parsing::compile("1/(x-3)", "x").unwrap();
	let samples = parsing::evaluate(&func, 2.0, 4.0, 3).unwrap();
	assert_eq!(samples.x(), &[2.0, 3.0, 4.0]);
	assert_eq!(samples.y()[1], f64::INFINITY);
	assert_eq!(samples.y()[0], -1.0);
	assert_eq!(samples.y()[2], 1.0);
}

#[test]
fn invalid_domain() {
	let func = parsing::compile("x", "x").unwrap();
	assert_eq!(
		parsing::evaluate(&func, 1.0, -1.0, 10),
		Err(ExprError::InvalidDomain {
			min: 1.0,
			max: -1.0,
			points: 10
		})
	);
}

#[test]
fn declared_variable() {
	let func = NumericFunction::compile("t^3", "t").unwrap();
	assert_eq!(func.variable(), "t");
	assert_eq!(func.get(2.0), Ok(8.0));
	assert!(parsing::compile("t^3", "x").is_err());
}
