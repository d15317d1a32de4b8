use crate::controller::Curve;
use egui_plot::{Line, PlotPoints};

/// Splits a curve into runs of finite points, so undefined samples break the line
/// instead of being joined across
pub fn finite_segments(x: &[f64], y: &[f64]) -> Vec<Vec<[f64; 2]>> {
	let mut segments: Vec<Vec<[f64; 2]>> = Vec::new();
	let mut current: Vec<[f64; 2]> = Vec::new();

	for (x, y) in x.iter().zip(y.iter()) {
		if x.is_finite() && y.is_finite() {
			current.push([*x, *y]);
		} else if !current.is_empty() {
			segments.push(std::mem::take(&mut current));
		}
	}

	if !current.is_empty() {
		segments.push(current);
	}
	segments
}

pub trait EguiHelper {
	/// Converts to egui `Line`s, one per finite segment, all sharing the curve's name
	fn to_lines(&self) -> Vec<Line>;
}

impl EguiHelper for Curve {
	fn to_lines(&self) -> Vec<Line> {
		finite_segments(&self.x, &self.y)
			.into_iter()
			.map(|segment| Line::new(PlotPoints::from(segment)).name(self.label))
			.collect()
	}
}
