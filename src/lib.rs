mod consts;
mod controller;
mod error;
mod math_app;
mod misc;
mod request;
mod viewport;

pub use crate::{
	consts::*,
	controller::{Curve, PlotController, PlotOutput, PlotState},
	error::PlotError,
	math_app::MathApp,
	misc::{finite_segments, EguiHelper},
	request::{PlotInput, PlotRequest, ShiftAmount},
	viewport::{apply_shift, plan_range, should_redraw, Viewport},
};
