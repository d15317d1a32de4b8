use criterion::Criterion;
use std::time::Duration;

/// Expressions exercised by every benchmark
pub const FUNCTIONS: [&str; 10] = [
	"x^2",
	"x**2",
	"sin(2*x)",
	"log(2*x)",
	"1/(x-3)",
	"sin(x)*cos(x)",
	"e^sin(x)",
	"sqrt(abs(x))*pi",
	"-x^3 + 3*x - 1",
	"log10(x)/ln(x)",
];

#[cfg(unix)]
pub fn custom_criterion() -> Criterion {
	use pprof::criterion::{Output, PProfProfiler};

	Criterion::default()
		.warm_up_time(Duration::from_millis(250))
		.with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

#[cfg(not(unix))]
pub fn custom_criterion() -> Criterion { Criterion::default().warm_up_time(Duration::from_millis(250)) }
