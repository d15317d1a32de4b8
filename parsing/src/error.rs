use thiserror::Error;

/// Errors produced while turning user text into samples
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
	/// Text is not a valid expression over the declared variable
	#[error("Parse error: {0}")]
	Parse(String),

	/// The compiled function failed for a reason other than producing NaN or infinity
	#[error("Evaluation error: {0}")]
	Evaluation(String),

	/// Sampling domain cannot produce strictly increasing samples
	#[error("Invalid domain: [{min}, {max}] with {points} points")]
	InvalidDomain { min: f64, max: f64, points: usize },
}

impl ExprError {
	pub(crate) fn parse(msg: impl Into<String>) -> Self { Self::Parse(msg.into()) }
}
