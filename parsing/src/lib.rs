mod error;
mod normalize;
mod parsing;
mod sampling;

pub use crate::{
	error::ExprError,
	normalize::{is_supported_function, normalize, SUPPORTED_FUNCTIONS},
	parsing::NumericFunction,
	sampling::{evaluate, linspace, SampleSet, DEFAULT_POINTS},
};

/// Parse `func_str` over the single variable `variable` into a [`NumericFunction`]
pub fn compile(func_str: &str, variable: &str) -> Result<NumericFunction, ExprError> {
	NumericFunction::compile(func_str, variable)
}
