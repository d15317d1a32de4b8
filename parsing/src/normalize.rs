use crate::error::ExprError;
use std::f64::consts::{E, PI};

include!(concat!(env!("OUT_DIR"), "/codegen.rs"));

/// Spellings rewritten before handing text to exmex
const FUNCTION_ALIASES: [(&str, &str); 1] = [("log", "ln")];

/// Rewrites alternate power spellings into the grammar's power operator (`x**2` becomes `x^2`)
pub fn normalize(text: &str) -> String { text.replace("**", "^") }

/// Returns true if `name` is a function accepted by the expression grammar
pub fn is_supported_function(name: &str) -> bool { SUPPORTED_FUNCTIONS_SET.contains(name) }

fn constant_value(name: &str) -> Option<f64> {
	match name {
		"pi" | "π" => Some(PI),
		"e" => Some(E),
		_ => None,
	}
}

/// Checks that `name` can be used as the free variable of an expression
pub(crate) fn validate_variable_name(name: &str) -> Result<(), ExprError> {
	let mut chars = name.chars();
	let valid_shape = chars.next().map(|c| c.is_alphabetic()).unwrap_or(false)
		&& chars.all(|c| c.is_alphanumeric() || c == '_');

	if !valid_shape || is_supported_function(name) || constant_value(name).is_some() {
		return Err(ExprError::parse(format!("invalid variable name: {}", name)));
	}
	Ok(())
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
	Number(f64),
	Ident(String),
	Op(char),
	Open,
	Close,
}

fn tokenize(text: &str) -> Result<Vec<Token>, ExprError> {
	let chars: Vec<char> = text.chars().collect();
	let mut tokens: Vec<Token> = Vec::new();
	let mut i = 0;

	while i < chars.len() {
		let c = chars[i];
		if c.is_whitespace() {
			i += 1;
			continue;
		}

		if c.is_ascii_digit() || c == '.' {
			let start = i;
			while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
				i += 1;
			}
			let literal: String = chars[start..i].iter().collect();
			let value = literal
				.parse::<f64>()
				.map_err(|_| ExprError::parse(format!("invalid number: {}", literal)))?;
			tokens.push(Token::Number(value));
			continue;
		}

		if c.is_alphabetic() || c == '_' {
			let start = i;
			while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
				i += 1;
			}
			tokens.push(Token::Ident(chars[start..i].iter().collect()));
			continue;
		}

		let token = match c {
			'*' if chars.get(i + 1) == Some(&'*') => {
				i += 1;
				Token::Op('^')
			}
			'+' | '-' | '*' | '/' | '^' => Token::Op(c),
			'(' => Token::Open,
			')' => Token::Close,
			_ => return Err(ExprError::parse(format!("unexpected character: '{}'", c))),
		};
		tokens.push(token);
		i += 1;
	}

	Ok(tokens)
}

/// What an already emitted token means to the one following it
#[derive(Debug, Clone, Copy, PartialEq)]
enum Emitted {
	Start,
	Value,
	Function,
	Op,
	Open,
}

/// Token after the lexical checks, with identifiers resolved
#[derive(Debug, Clone, PartialEq)]
enum Item {
	Value(Node),
	Function(String),
	Op(char),
	Open,
	Close,
}

/// Expression tree, only used to print explicitly grouped text
#[derive(Debug, Clone, PartialEq)]
enum Node {
	Number(f64),
	Variable(String),
	Constant(f64),
	Call(String, Box<Node>),
	Neg(Box<Node>),
	Binary(Box<Node>, char, Box<Node>),
}

impl Node {
	fn write(&self, out: &mut String) {
		match self {
			Node::Number(value) => out.push_str(&value.to_string()),
			Node::Variable(name) => out.push_str(name),
			Node::Constant(value) => {
				out.push('(');
				out.push_str(&value.to_string());
				out.push(')');
			}
			Node::Call(name, arg) => {
				out.push_str(name);
				out.push('(');
				arg.write(out);
				out.push(')');
			}
			Node::Neg(operand) => {
				out.push('-');
				operand.write_operand(out);
			}
			Node::Binary(lhs, op, rhs) => {
				lhs.write_operand(out);
				out.push(*op);
				rhs.write_operand(out);
			}
		}
	}

	/// Compound operands are always parenthesised so exmex never applies its own precedence
	fn write_operand(&self, out: &mut String) {
		if matches!(self, Node::Neg(_) | Node::Binary(..)) {
			out.push('(');
			self.write(out);
			out.push(')');
		} else {
			self.write(out);
		}
	}
}

/// Precedence climbing over checked items. Binds like Python: `^` is right associative and
/// tighter than unary minus on its left, so `-x^2` is `-(x^2)` and `2^3^2` is `2^(3^2)`
struct Grouper<'a> {
	items: &'a [Item],
	pos: usize,
}

impl<'a> Grouper<'a> {
	fn peek_op(&self) -> Option<char> {
		match self.items.get(self.pos) {
			Some(Item::Op(op)) => Some(*op),
			_ => None,
		}
	}

	fn expect_close(&mut self) -> Result<(), ExprError> {
		match self.items.get(self.pos) {
			Some(Item::Close) => {
				self.pos += 1;
				Ok(())
			}
			_ => Err(ExprError::parse("unclosed '('")),
		}
	}

	fn sum(&mut self) -> Result<Node, ExprError> {
		let mut lhs = self.product()?;
		while let Some(op @ ('+' | '-')) = self.peek_op() {
			self.pos += 1;
			let rhs = self.product()?;
			lhs = Node::Binary(Box::new(lhs), op, Box::new(rhs));
		}
		Ok(lhs)
	}

	fn product(&mut self) -> Result<Node, ExprError> {
		let mut lhs = self.unary()?;
		while let Some(op @ ('*' | '/')) = self.peek_op() {
			self.pos += 1;
			let rhs = self.unary()?;
			lhs = Node::Binary(Box::new(lhs), op, Box::new(rhs));
		}
		Ok(lhs)
	}

	fn unary(&mut self) -> Result<Node, ExprError> {
		match self.peek_op() {
			Some('-') => {
				self.pos += 1;
				Ok(Node::Neg(Box::new(self.unary()?)))
			}
			Some('+') => {
				self.pos += 1;
				self.unary()
			}
			_ => self.power(),
		}
	}

	fn power(&mut self) -> Result<Node, ExprError> {
		let base = self.atom()?;
		if self.peek_op() == Some('^') {
			self.pos += 1;
			let exponent = self.unary()?;
			return Ok(Node::Binary(Box::new(base), '^', Box::new(exponent)));
		}
		Ok(base)
	}

	fn atom(&mut self) -> Result<Node, ExprError> {
		let item = self.items.get(self.pos).cloned();
		self.pos += 1;
		match item {
			Some(Item::Value(node)) => Ok(node),
			Some(Item::Function(name)) => {
				if self.items.get(self.pos) != Some(&Item::Open) {
					return Err(ExprError::parse(format!(
						"function {} must be followed by '('",
						name
					)));
				}
				self.pos += 1;
				let arg = self.sum()?;
				self.expect_close()?;
				Ok(Node::Call(name, Box::new(arg)))
			}
			Some(Item::Open) => {
				let inner = self.sum()?;
				self.expect_close()?;
				Ok(inner)
			}
			Some(Item::Op(op)) => Err(ExprError::parse(format!(
				"operator '{}' is missing its left operand",
				op
			))),
			Some(Item::Close) => Err(ExprError::parse("unmatched ')'")),
			None => Err(ExprError::parse("unexpected end of expression")),
		}
	}
}

/// Validates `text` against the restricted grammar and rewrites it into explicitly grouped
/// text exmex understands. Identifiers must be `variable`, a constant, or a supported function
/// followed by `(`.
pub(crate) fn canonicalize(text: &str, variable: &str) -> Result<String, ExprError> {
	let tokens = tokenize(&normalize(text))?;
	if tokens.is_empty() {
		return Err(ExprError::parse("empty expression"));
	}

	let mut items: Vec<Item> = Vec::with_capacity(tokens.len());
	let mut prev = Emitted::Start;
	let mut depth: usize = 0;

	for (i, token) in tokens.iter().enumerate() {
		let next = tokens.get(i + 1);
		let starts_operand = matches!(token, Token::Number(_) | Token::Ident(_) | Token::Open);
		if starts_operand && prev == Emitted::Value {
			return Err(ExprError::parse("missing operator between operands"));
		}

		prev = match token {
			Token::Number(value) => {
				items.push(Item::Value(Node::Number(*value)));
				Emitted::Value
			}
			Token::Ident(name) if name == variable => {
				items.push(Item::Value(Node::Variable(name.clone())));
				Emitted::Value
			}
			Token::Ident(name) => {
				if let Some(value) = constant_value(name) {
					items.push(Item::Value(Node::Constant(value)));
					Emitted::Value
				} else if is_supported_function(name) {
					if next != Some(&Token::Open) {
						return Err(ExprError::parse(format!(
							"function {} must be followed by '('",
							name
						)));
					}
					let canonical = FUNCTION_ALIASES
						.iter()
						.find(|(alias, _)| alias == name)
						.map(|(_, target)| *target)
						.unwrap_or(name.as_str());
					items.push(Item::Function(canonical.to_owned()));
					Emitted::Function
				} else if next == Some(&Token::Open) {
					return Err(ExprError::parse(format!("unknown function: {}", name)));
				} else {
					return Err(ExprError::parse(format!("invalid variable: {}", name)));
				}
			}
			Token::Op(op) => {
				let unary = matches!(op, '+' | '-');
				if !unary && matches!(prev, Emitted::Start | Emitted::Op | Emitted::Open) {
					return Err(ExprError::parse(format!(
						"operator '{}' is missing its left operand",
						op
					)));
				}
				if matches!(next, None | Some(Token::Close)) {
					return Err(ExprError::parse(format!(
						"operator '{}' is missing its right operand",
						op
					)));
				}
				items.push(Item::Op(*op));
				Emitted::Op
			}
			Token::Open => {
				depth += 1;
				items.push(Item::Open);
				Emitted::Open
			}
			Token::Close => {
				if depth == 0 {
					return Err(ExprError::parse("unmatched ')'"));
				}
				if prev == Emitted::Open {
					return Err(ExprError::parse("empty parentheses"));
				}
				depth -= 1;
				items.push(Item::Close);
				Emitted::Value
			}
		};
	}

	if depth != 0 {
		return Err(ExprError::parse("unclosed '('"));
	}

	let mut grouper = Grouper {
		items: &items,
		pos: 0,
	};
	let tree = grouper.sum()?;
	if grouper.pos != items.len() {
		return Err(ExprError::parse("missing operator between operands"));
	}

	let mut out = String::with_capacity(text.len());
	tree.write(&mut out);
	Ok(out)
}
