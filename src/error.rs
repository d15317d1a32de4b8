use parsing::ExprError;
use thiserror::Error;

/// Everything that can stop a plot. `Display` is the message shown to the user
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
	#[error(transparent)]
	Expr(#[from] ExprError),

	/// Planned half-width was not a usable number
	#[error("Cannot frame the plot: axis range {0} is not finite")]
	DegenerateRange(f64),
}
