use crate::consts::*;
use crate::controller::{PlotController, PlotOutput};
use crate::error::PlotError;
use crate::misc::EguiHelper;
use crate::request::PlotInput;
use eframe::egui;
use egui::{Button, CentralPanel, Context, Slider, TopBottomPanel, Window};
use egui_plot::{HLine, Legend, Plot, PlotBounds, VLine};
use emath::Align2;

const HELP_TEXT: &str = "Write expressions like x^2, sin(2*x) or log(2*x).\nLogarithms need x > 0 somewhere in the X range.";

/// Which button was pressed this frame
#[derive(Clone, Copy, PartialEq)]
enum Action {
	None,
	Plot,
	Shift,
}

/// Window holding the expression entry, sliders, chart and error dialog
pub struct MathApp {
	input: PlotInput,

	/// Shift slider value, only applied when "Shift" is pressed
	shift: f64,

	controller: PlotController,

	/// Last output handed over by the controller
	output: Option<PlotOutput>,

	/// Message of the last failure, shown until dismissed
	error: Option<String>,
}

impl Default for MathApp {
	fn default() -> Self {
		Self {
			input: PlotInput::default(),
			shift: 0.0,
			controller: PlotController::default(),
			output: None,
			error: None,
		}
	}
}

impl MathApp {
	/// Create new instance of [`MathApp`] and return it
	pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
		cc.egui_ctx.set_visuals(egui::Visuals::dark());
		tracing::info!("egui app initialized.");
		Self::default()
	}

	fn handle(&mut self, result: Result<Option<PlotOutput>, PlotError>) {
		match result {
			Ok(Some(output)) => self.output = Some(output),
			Ok(None) => {}
			Err(error) => self.error = Some(error.to_string()),
		}
	}

	/// Expression entry, range sliders and the two buttons
	fn controls(&mut self, ctx: &Context) -> Action {
		TopBottomPanel::top("controls")
			.show(ctx, |ui| {
				ui.horizontal(|ui| {
					ui.label("y =");
					ui.text_edit_singleline(&mut self.input.func_str);
				});
				ui.label(HELP_TEXT);

				ui.horizontal(|ui| {
					ui.add(
						Slider::new(&mut self.input.x_center, CENTER_RANGE)
							.step_by(SLIDER_STEP)
							.text("X range"),
					);
					ui.add(
						Slider::new(&mut self.input.y_center, CENTER_RANGE)
							.step_by(SLIDER_STEP)
							.text("Y range"),
					);
				});

				ui.horizontal(|ui| {
					ui.add(
						Slider::new(&mut self.shift, SHIFT_RANGE)
							.step_by(SLIDER_STEP)
							.text("Shift"),
					);

					let shift_clicked = ui.add(Button::new("Shift")).clicked();
					let plot_clicked = ui.add(Button::new("Plot")).clicked();

					match (shift_clicked, plot_clicked) {
						(true, _) => Action::Shift,
						(false, true) => Action::Plot,
						(false, false) => Action::None,
					}
				})
				.inner
			})
			.inner
	}

	fn error_window(&mut self, ctx: &Context) {
		let mut open = self.error.is_some();
		if let Some(message) = &self.error {
			Window::new("Error")
				.open(&mut open)
				.anchor(Align2::CENTER_CENTER, [0.0, 0.0])
				.collapsible(false)
				.resizable(false)
				.show(ctx, |ui| {
					ui.label(message.as_str());
				});
		}

		if self.error.is_some() && !open {
			self.error = None;
			self.controller.acknowledge_error();
		}
	}

	fn plot_panel(&self, ctx: &Context) {
		CentralPanel::default().show(ctx, |ui| {
			Plot::new("function_plot")
				.legend(Legend::default())
				.allow_drag(false)
				.allow_zoom(false)
				.allow_scroll(false)
				.allow_boxed_zoom(false)
				.show(ui, |plot_ui| {
					let Some(output) = &self.output else {
						return;
					};

					let viewport = output.viewport;
					plot_ui.set_plot_bounds(PlotBounds::from_min_max(
						[viewport.x_min, viewport.y_min],
						[viewport.x_max, viewport.y_max],
					));

					plot_ui.hline(HLine::new(0.0).color(AXIS_COLOR).width(1.0));
					plot_ui.vline(VLine::new(0.0).color(AXIS_COLOR).width(1.0));

					for (curve, color) in output.curves.iter().zip(COLORS.iter()) {
						for line in curve.to_lines() {
							plot_ui.line(line.color(*color));
						}
					}
				});
		});
	}
}

impl eframe::App for MathApp {
	fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
		match self.controls(ctx) {
			Action::Plot => {
				let result = self.controller.plot(&self.input);
				self.handle(result);
			}
			Action::Shift => {
				let result = self.controller.shift_then_plot(&self.input, self.shift);
				self.handle(result);
			}
			Action::None => {}
		}

		self.error_window(ctx);
		self.plot_panel(ctx);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn axes_distinct_from_curves() {
		assert!(!COLORS.contains(&AXIS_COLOR));
	}
}
