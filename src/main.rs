use eframe::egui;
use function_plotter::MathApp;

fn main() -> eframe::Result<()> {
	tracing_subscriber::fmt()
		.with_max_level(tracing::Level::INFO)
		.init();

	let options = eframe::NativeOptions {
		viewport: egui::ViewportBuilder::default().with_inner_size([620.0, 680.0]),
		..Default::default()
	};

	eframe::run_native(
		"Function Plotter",
		options,
		Box::new(|cc| Box::new(MathApp::new(cc))),
	)
}
