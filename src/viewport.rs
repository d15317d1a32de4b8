use crate::consts::{FALLBACK_RANGE, MIN_ABS_RANGE};
use crate::error::PlotError;
use crate::request::{PlotRequest, ShiftAmount};
use itertools::{Itertools, MinMaxResult};
use parsing::SampleSet;

/// Display range of both axes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub x_min: f64,
	pub x_max: f64,
	pub y_min: f64,
	pub y_max: f64,
}

impl Viewport {
	/// Square viewport centered on the origin with half-width `abs_range`
	pub fn square(abs_range: f64) -> Self {
		Self {
			x_min: -abs_range,
			x_max: abs_range,
			y_min: -abs_range,
			y_max: abs_range,
		}
	}
}

impl Default for Viewport {
	fn default() -> Self { Self::square(FALLBACK_RANGE) }
}

/// Returns `false` only when `current` is identical to the last rendered snapshot
pub fn should_redraw(current: &PlotRequest, last: Option<&PlotRequest>) -> bool {
	match last {
		Some(last) => current != last,
		None => true,
	}
}

/// Smallest and largest finite value of `data`
fn finite_min_max(data: &[f64]) -> Option<(f64, f64)> {
	match data.iter().copied().filter(|v| v.is_finite()).minmax() {
		MinMaxResult::NoElements => None,
		MinMaxResult::OneElement(v) => Some((v, v)),
		MinMaxResult::MinMax(min, max) => Some((min, max)),
	}
}

/// Computes the square, origin-centered viewport framing `samples`.
///
/// The y extent is the observed finite range, or `±FALLBACK_RANGE` if any y sample is NaN.
/// The x extent is the sampled domain widened to at least the y magnitude. Both axes then
/// take the largest magnitude of the four bounds.
pub fn plan_range(samples: &SampleSet) -> Result<Viewport, PlotError> {
	let (y_min, y_max) = match samples.y().iter().any(|y| y.is_nan()) {
		true => {
			tracing::warn!("Function is undefined over part of the domain, using default y range");
			(-FALLBACK_RANGE, FALLBACK_RANGE)
		}
		false => finite_min_max(samples.y()).unwrap_or((-FALLBACK_RANGE, FALLBACK_RANGE)),
	};
	let y_range = y_max.abs().max(y_min.abs());

	let (x_min, x_max) = match (samples.first_x(), samples.last_x()) {
		(Some(first), Some(last)) if !samples.x().iter().any(|x| x.is_nan()) => {
			(first.min(-y_range), last.max(y_range))
		}
		_ => (-FALLBACK_RANGE, FALLBACK_RANGE),
	};

	let abs_range = [x_min, x_max, y_min, y_max]
		.iter()
		.fold(0.0_f64, |acc, v| acc.max(v.abs()));

	if !abs_range.is_finite() {
		return Err(PlotError::DegenerateRange(abs_range));
	}

	if abs_range < MIN_ABS_RANGE {
		tracing::warn!(
			"Axis range {} is too small, using {} instead",
			abs_range,
			MIN_ABS_RANGE
		);
		return Ok(Viewport::square(MIN_ABS_RANGE));
	}

	Ok(Viewport::square(abs_range))
}

/// Translates every x sample by `shift`. The y samples are reused as they are
pub fn apply_shift(samples: &SampleSet, shift: ShiftAmount) -> Vec<f64> {
	samples.x().iter().map(|x| x + shift.get()).collect()
}
