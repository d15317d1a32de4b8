use crate::consts::*;

/// What the user currently has entered
#[derive(Clone, Debug, PartialEq)]
pub struct PlotInput {
	/// Expression text as typed
	pub func_str: String,

	/// x-center slider value, the x window starts here
	pub x_center: f64,

	/// y-center slider value, the y window is centered here
	pub y_center: f64,
}

impl PlotInput {
	pub fn new(func_str: &str, x_center: f64, y_center: f64) -> Self {
		Self {
			func_str: func_str.to_owned(),
			x_center,
			y_center,
		}
	}
}

impl Default for PlotInput {
	fn default() -> Self { Self::new("", DEFAULT_X_CENTER, DEFAULT_Y_CENTER) }
}

/// Horizontal, display-only translation of the curve, kept inside [`SHIFT_RANGE`]
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct ShiftAmount(f64);

impl ShiftAmount {
	pub const ZERO: ShiftAmount = ShiftAmount(0.0);

	/// Clamps `value` into [`SHIFT_RANGE`]. Non-finite values become zero
	pub fn new(value: f64) -> Self {
		if !value.is_finite() {
			tracing::warn!("Ignoring non-finite shift amount {}", value);
			return Self::ZERO;
		}

		let clamped = value.clamp(SHIFT_MIN, SHIFT_MAX);
		if clamped != value {
			tracing::warn!("Shift amount {} clamped to {}", value, clamped);
		}
		Self(clamped)
	}

	pub const fn get(&self) -> f64 { self.0 }
}

/// Snapshot of a plot request, compared against the last rendered one to skip redundant redraws
#[derive(Clone, Debug)]
pub struct PlotRequest {
	/// Normalized expression text
	pub func_str: String,
	pub x_min: f64,
	pub x_max: f64,
	pub y_min: f64,
	pub y_max: f64,
	pub shift: ShiftAmount,
}

impl PlotRequest {
	/// Derives the requested windows from slider values: x is `[x_center, x_center + width]`,
	/// y is centered on `y_center`
	pub fn from_input(input: &PlotInput, shift: ShiftAmount) -> Self {
		Self {
			func_str: parsing::normalize(input.func_str.trim()),
			x_min: input.x_center,
			x_max: input.x_center + X_WINDOW_WIDTH,
			y_min: input.y_center - (Y_WINDOW_HEIGHT / 2.0),
			y_max: input.y_center + (Y_WINDOW_HEIGHT / 2.0),
			shift,
		}
	}
}

/// Equality where NaN equals NaN, so that a snapshot always equals itself
fn same_value(a: f64, b: f64) -> bool { (a == b) | (a.is_nan() && b.is_nan()) }

impl PartialEq for PlotRequest {
	fn eq(&self, other: &Self) -> bool {
		(self.func_str == other.func_str)
			&& same_value(self.x_min, other.x_min)
			&& same_value(self.x_max, other.x_max)
			&& same_value(self.y_min, other.y_min)
			&& same_value(self.y_max, other.y_max)
			&& same_value(self.shift.get(), other.shift.get())
	}
}
