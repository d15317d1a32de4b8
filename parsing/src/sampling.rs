use crate::error::ExprError;
use crate::parsing::NumericFunction;

/// Number of samples taken when none is specified
pub const DEFAULT_POINTS: usize = 1000;

/// Paired x/y samples of a function. `y` may hold NaN or infinite entries
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSet {
	x: Vec<f64>,
	y: Vec<f64>,
}

impl SampleSet {
	/// Returns `None` if `x` and `y` differ in length
	pub fn new(x: Vec<f64>, y: Vec<f64>) -> Option<Self> {
		if x.len() != y.len() {
			return None;
		}
		Some(Self { x, y })
	}

	pub fn x(&self) -> &[f64] { &self.x }

	pub fn y(&self) -> &[f64] { &self.y }

	pub fn len(&self) -> usize { self.x.len() }

	pub fn is_empty(&self) -> bool { self.x.is_empty() }

	pub fn first_x(&self) -> Option<f64> { self.x.first().copied() }

	pub fn last_x(&self) -> Option<f64> { self.x.last().copied() }

	/// Iterate over `(x, y)` pairs
	pub fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
		self.x.iter().copied().zip(self.y.iter().copied())
	}
}

/// Returns `points` evenly spaced values from `min` to `max`, both endpoints included
pub fn linspace(min: f64, max: f64, points: usize) -> Result<Vec<f64>, ExprError> {
	if !min.is_finite() || !max.is_finite() || (min >= max) || (points < 2) {
		return Err(ExprError::InvalidDomain { min, max, points });
	}

	let step = (max - min) / ((points - 1) as f64);
	let mut data: Vec<f64> = (0..points).map(|i| min + (i as f64) * step).collect();

	// pin the last sample so rounding never overshoots
	if let Some(last) = data.last_mut() {
		*last = max;
	}
	Ok(data)
}

/// Samples `func` at `points` evenly spaced values across `[min, max]`
pub fn evaluate(
	func: &NumericFunction, min: f64, max: f64, points: usize,
) -> Result<SampleSet, ExprError> {
	let x = linspace(min, max, points)?;
	let y = func.eval_slice(&x)?;
	Ok(SampleSet { x, y })
}
