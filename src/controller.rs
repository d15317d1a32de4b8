use crate::consts::*;
use crate::error::PlotError;
use crate::request::{PlotInput, PlotRequest, ShiftAmount};
use crate::viewport::{apply_shift, plan_range, should_redraw, Viewport};
use parsing::{NumericFunction, SampleSet};

/// Where the controller is in a plot cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PlotState {
	#[default]
	Idle,
	Evaluating,
	Rendered,
	Failed,
}

/// One sequence of points to hand to the renderer
#[derive(Clone, Debug, PartialEq)]
pub struct Curve {
	pub label: &'static str,
	pub x: Vec<f64>,
	pub y: Vec<f64>,
}

/// Everything the renderer needs for one redraw
#[derive(Clone, Debug, PartialEq)]
pub struct PlotOutput {
	pub viewport: Viewport,

	/// Initial curve first, shifted curve second
	pub curves: Vec<Curve>,
}

/// Compiled function and samples for one expression over one x window
#[derive(Clone, Debug)]
struct EvalCache {
	func_str: String,
	x_min: f64,
	x_max: f64,
	function: NumericFunction,
	samples: SampleSet,
}

impl EvalCache {
	fn matches(&self, request: &PlotRequest) -> bool {
		(self.func_str == request.func_str)
			&& (self.x_min == request.x_min)
			&& (self.x_max == request.x_max)
	}
}

/// Owns all state shared between plot requests. Requests are serialized by `&mut self`,
/// and state is only committed once a request fully succeeds.
#[derive(Clone, Debug)]
pub struct PlotController {
	state: PlotState,

	/// Last successfully rendered request
	last_request: Option<PlotRequest>,

	/// Shift applied by "plot", updated by "shift-then-plot"
	shift: ShiftAmount,

	/// Viewport of the last successful plot
	viewport: Viewport,

	cache: Option<EvalCache>,

	points: usize,
}

impl Default for PlotController {
	fn default() -> Self { Self::new(DEFAULT_POINTS) }
}

impl PlotController {
	/// Controller sampling `points` values per curve
	pub fn new(points: usize) -> Self {
		Self {
			state: PlotState::Idle,
			last_request: None,
			shift: ShiftAmount::ZERO,
			viewport: Viewport::default(),
			cache: None,
			points,
		}
	}

	pub fn state(&self) -> PlotState { self.state }

	pub fn shift(&self) -> ShiftAmount { self.shift }

	pub fn viewport(&self) -> Viewport { self.viewport }

	pub fn last_request(&self) -> Option<&PlotRequest> { self.last_request.as_ref() }

	/// Return to [`PlotState::Idle`] once a failure has been shown to the user
	pub fn acknowledge_error(&mut self) {
		if self.state == PlotState::Failed {
			self.state = PlotState::Idle;
		}
	}

	/// Compiled function of the last successful plot
	pub fn function(&self) -> Option<&NumericFunction> {
		self.cache.as_ref().map(|cache| &cache.function)
	}

	/// Plot using the current shift amount. Returns `Ok(None)` when nothing changed since the
	/// last successful plot
	pub fn plot(&mut self, input: &PlotInput) -> Result<Option<PlotOutput>, PlotError> {
		self.run(input, self.shift)
	}

	/// Set a new shift amount and plot with it. The shift is only kept if plotting succeeds
	pub fn shift_then_plot(
		&mut self, input: &PlotInput, shift: f64,
	) -> Result<Option<PlotOutput>, PlotError> {
		self.run(input, ShiftAmount::new(shift))
	}

	fn run(
		&mut self, input: &PlotInput, shift: ShiftAmount,
	) -> Result<Option<PlotOutput>, PlotError> {
		let request = PlotRequest::from_input(input, shift);
		if !should_redraw(&request, self.last_request.as_ref()) {
			tracing::debug!("Plot request unchanged, skipping redraw");
			// the last render is still on screen
			self.state = PlotState::Rendered;
			return Ok(None);
		}

		self.state = PlotState::Evaluating;
		let start = instant::Instant::now();

		match self.evaluate(&request) {
			Ok((cache, viewport)) => {
				let output = PlotOutput {
					viewport,
					curves: vec![
						Curve {
							label: INITIAL_LABEL,
							x: cache.samples.x().to_vec(),
							y: cache.samples.y().to_vec(),
						},
						Curve {
							label: SHIFTED_LABEL,
							x: apply_shift(&cache.samples, shift),
							y: cache.samples.y().to_vec(),
						},
					],
				};

				tracing::info!(
					"Plotted `{}` (shift {}), took: {:?}",
					request.func_str,
					shift.get(),
					start.elapsed()
				);

				self.cache = Some(cache);
				self.viewport = viewport;
				self.shift = shift;
				self.last_request = Some(request);
				self.state = PlotState::Rendered;
				Ok(Some(output))
			}
			Err(error) => {
				tracing::info!("Plot of `{}` failed: {}", request.func_str, error);
				self.state = PlotState::Failed;
				Err(error)
			}
		}
	}

	/// Evaluates `request` without touching any committed state. Samples are reused when only
	/// the shift or the y window changed
	fn evaluate(&self, request: &PlotRequest) -> Result<(EvalCache, Viewport), PlotError> {
		let cache = match &self.cache {
			Some(cache) if cache.matches(request) => {
				tracing::debug!("Reusing samples of `{}`", cache.func_str);
				cache.clone()
			}
			_ => {
				let function = parsing::compile(&request.func_str, VARIABLE)?;
				let samples =
					parsing::evaluate(&function, request.x_min, request.x_max, self.points)?;
				EvalCache {
					func_str: request.func_str.clone(),
					x_min: request.x_min,
					x_max: request.x_max,
					function,
					samples,
				}
			}
		};

		let viewport = plan_range(&cache.samples)?;
		Ok((cache, viewport))
	}
}
