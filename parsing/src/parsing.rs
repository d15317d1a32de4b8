use crate::error::ExprError;
use crate::normalize::{canonicalize, validate_variable_name};
use exmex::prelude::*;
use std::fmt;

/// A compiled expression of (at most) one real variable
#[derive(Clone)]
pub struct NumericFunction {
	/// Parsed and flattened expression
	func: FlatEx<f64>,

	/// Text handed to exmex after normalization
	canonical: String,

	/// Declared variable name
	variable: String,

	/// `false` for constant expressions, which take no arguments
	uses_variable: bool,
}

impl NumericFunction {
	/// Parse `func_str` over exactly the variable `variable`
	pub fn compile(func_str: &str, variable: &str) -> Result<Self, ExprError> {
		validate_variable_name(variable)?;
		let canonical = canonicalize(func_str, variable)?;

		let func = exmex::parse::<f64>(&canonical).map_err(|e| ExprError::Parse(e.to_string()))?;

		let var_names_not_declared: Vec<&String> = func
			.var_names()
			.iter()
			.filter(|ele| ele.as_str() != variable)
			.collect();

		if !var_names_not_declared.is_empty() {
			return Err(ExprError::Parse(format!(
				"invalid variable{}",
				match var_names_not_declared.len() {
					1 => String::from(": ") + var_names_not_declared[0].as_str(),
					_ => format!("s: {:?}", var_names_not_declared),
				}
			)));
		}

		let uses_variable = !func.var_names().is_empty();
		tracing::debug!("compiled `{}` as `{}`", func_str, canonical);

		Ok(Self {
			func,
			canonical,
			variable: variable.to_owned(),
			uses_variable,
		})
	}

	pub fn variable(&self) -> &str { &self.variable }

	/// Calculate f(x). NaN and infinity are ordinary results, not errors
	pub fn get(&self, x: f64) -> Result<f64, ExprError> {
		let args: &[f64] = if self.uses_variable { &[x] } else { &[] };
		self.func
			.eval(args)
			.map_err(|e| ExprError::Evaluation(e.to_string()))
	}

	/// Calculate f(x) for every element of `xs`.
	///
	/// exmex evaluates one argument set per call, so the flattened expression is walked once per
	/// element. Constant expressions are evaluated a single time and broadcast.
	pub fn eval_slice(&self, xs: &[f64]) -> Result<Vec<f64>, ExprError> {
		let values: exmex::ExResult<Vec<f64>> = match self.uses_variable {
			true => xs.iter().map(|x| self.func.eval(&[*x])).collect(),
			false => self.func.eval(&[]).map(|y| vec![y; xs.len()]),
		};
		values.map_err(|e| ExprError::Evaluation(e.to_string()))
	}
}

impl fmt::Debug for NumericFunction {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "NumericFunction({} over {})", self.canonical, self.variable)
	}
}

impl PartialEq for NumericFunction {
	fn eq(&self, other: &Self) -> bool {
		(self.canonical == other.canonical) && (self.variable == other.variable)
	}
}
