use std::env;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// REMEMBER TO UPDATE THIS IF THE GRAMMAR GAINS NEW FUNCTIONS
/// (every entry other than `log` must be understood by exmex, `log` is rewritten to `ln`)
const SUPPORTED_FUNCTIONS: [&str; 23] = [
	"abs", "signum", "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh", "tanh", "floor",
	"round", "ceil", "trunc", "fract", "exp", "sqrt", "cbrt", "ln", "log", "log2", "log10",
];

fn main() {
	println!("cargo:rerun-if-changed=build.rs");

	generate_function_set();
}

fn generate_function_set() {
	let path = Path::new(&env::var("OUT_DIR").unwrap()).join("codegen.rs");
	let mut file = BufWriter::new(File::create(&path).expect("Could not create file"));

	let mut set = phf_codegen::Set::new();
	for func in SUPPORTED_FUNCTIONS.iter() {
		set.entry(*func);
	}

	writeln!(
		&mut file,
		"static SUPPORTED_FUNCTIONS_SET: phf::Set<&'static str> = {};",
		set.build()
	)
	.expect("Could not write to file");

	writeln!(
		&mut file,
		"pub const SUPPORTED_FUNCTIONS: [&str; {}] = {:?};",
		SUPPORTED_FUNCTIONS.len(),
		SUPPORTED_FUNCTIONS
	)
	.expect("Could not write to file");
}
