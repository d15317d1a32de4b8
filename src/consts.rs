use epaint::Color32;
use static_assertions::const_assert;
use std::ops::RangeInclusive;

// Hard-Coded limits

/// Minimum value of the x-center and y-center sliders
pub const CENTER_MIN: f64 = -10.0;

/// Maximum value of the x-center and y-center sliders
pub const CENTER_MAX: f64 = 10.0;

const_assert!(CENTER_MAX > CENTER_MIN);

/// Range of acceptable values for the x-center and y-center sliders
pub const CENTER_RANGE: RangeInclusive<f64> = CENTER_MIN..=CENTER_MAX;

/// Minimum horizontal translation
pub const SHIFT_MIN: f64 = -10.0;

/// Maximum horizontal translation
pub const SHIFT_MAX: f64 = 10.0;

const_assert!(SHIFT_MAX > SHIFT_MIN);

/// Range of acceptable shift amounts
pub const SHIFT_RANGE: RangeInclusive<f64> = SHIFT_MIN..=SHIFT_MAX;

/// Increment used by every slider
pub const SLIDER_STEP: f64 = 0.1;

/// Width of the evaluated x window, which starts at the x-center value
pub const X_WINDOW_WIDTH: f64 = 10.0;

/// Height of the requested y window, centered on the y-center value
pub const Y_WINDOW_HEIGHT: f64 = 10.0;

const_assert!(X_WINDOW_WIDTH > 0.0);
const_assert!(Y_WINDOW_HEIGHT > 0.0);

/// Half-width of the range used when samples cannot be framed (NaN present)
pub const FALLBACK_RANGE: f64 = 10.0;

/// Smallest half-width a viewport may have
pub const MIN_ABS_RANGE: f64 = 1.0;

const_assert!(MIN_ABS_RANGE > 0.0);

// Default values

/// Samples taken across the x window
pub const DEFAULT_POINTS: usize = parsing::DEFAULT_POINTS;

const_assert!(DEFAULT_POINTS >= 2);

/// Default x-center slider value (evaluates `[-5, 5]`)
pub const DEFAULT_X_CENTER: f64 = -5.0;

/// Default y-center slider value
pub const DEFAULT_Y_CENTER: f64 = 0.0;

/// Variable every expression is written in
pub const VARIABLE: &str = "x";

/// Label of the curve as evaluated
pub const INITIAL_LABEL: &str = "Initial Function";

/// Label of the horizontally translated curve
pub const SHIFTED_LABEL: &str = "Shifted Function";

/// Colors used for plotting, in curve order
pub const COLORS: &[Color32; 2] = &[Color32::LIGHT_BLUE, Color32::GOLD];

/// Color of the axes drawn through the origin
pub const AXIS_COLOR: Color32 = Color32::GRAY;
