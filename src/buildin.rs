//! # buildin.rs
//!
//! This source file holds the builtin function table and the numeric
//! implementations backing it.
//!
//! The table is built at compile time and never mutated afterwards, so any
//! number of threads may read it without synchronization.

use phf::Map;
use phf_macros::phf_map;

use crate::function::Function;

/// Macro to define unary functions easily from method names on f64.
///
/// For example, define_unary_func!(sqrt) expands to
/// `fn sqrt(args: &[f64]) -> f64 { args[0].sqrt() }`.
/// The two identifier form binds a table name to a differently named
/// method, e.g. define_unary_func!(log, ln).
macro_rules! define_unary_func {
    ($name:ident) => {
        fn $name(args: &[f64]) -> f64 {
            args[0].$name()
        }
    };
    ($name:ident, $method:ident) => {
        fn $name(args: &[f64]) -> f64 {
            args[0].$method()
        }
    };
}

define_unary_func!(sqrt);
define_unary_func!(cbrt);
define_unary_func!(abs);
define_unary_func!(ceil);
define_unary_func!(floor);
define_unary_func!(exp);
define_unary_func!(expm1, exp_m1);
define_unary_func!(log10);
define_unary_func!(log, ln);
define_unary_func!(log1p, ln_1p);

/// Raises the first argument to the power of the second.
fn pow(args: &[f64]) -> f64 {
    args[0].powf(args[1])
}

/// Base-2 logarithm, as the quotient `ln(x) / ln(2)`.
///
/// The result must be exactly that quotient of two natural logarithms,
/// so the native `f64::log2` is not used here.
fn log2(args: &[f64]) -> f64 {
    args[0].ln() / 2f64.ln()
}

/// Logarithm of the second argument in the base given by the first,
/// as the quotient `ln(value) / ln(base)`.
fn logb(args: &[f64]) -> f64 {
    args[1].ln() / args[0].ln()
}

/// Sign of the argument as `1`, `-1` or `0`.
///
/// Only the two comparisons below decide the result: NaN and both zeroes
/// fall through to `0`. `f64::signum` behaves differently there
/// (`±1` for `±0.0`, NaN for NaN) and must not be substituted.
fn signum(args: &[f64]) -> f64 {
    if args[0] > 0.0 {
        1.0
    } else if args[0] < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Converts an angle in degrees to radians, evaluated as `deg / 180 * π`.
///
/// `f64::to_radians` multiplies by a precomputed `π / 180` and rounds
/// differently, so it is not used here.
fn toradian(args: &[f64]) -> f64 {
    args[0] / 180.0 * std::f64::consts::PI
}

/// Converts an angle in radians to degrees, evaluated as `rad * 180 / π`.
fn todegree(args: &[f64]) -> f64 {
    args[0] * 180.0 / std::f64::consts::PI
}

/// Map of builtin functions by their string representation.
pub(crate) static FUNCTIONS: Map<&'static str, Function> = phf_map! {
    "sqrt"     => Function::new(sqrt,     1, "sqrt"),
    "cbrt"     => Function::new(cbrt,     1, "cbrt"),
    "abs"      => Function::new(abs,      1, "abs"),
    "ceil"     => Function::new(ceil,     1, "ceil"),
    "floor"    => Function::new(floor,    1, "floor"),
    "pow"      => Function::new(pow,      2, "pow"),
    "exp"      => Function::new(exp,      1, "exp"),
    "expm1"    => Function::new(expm1,    1, "expm1"),
    "log10"    => Function::new(log10,    1, "log10"),
    "log2"     => Function::new(log2,     1, "log2"),
    "log"      => Function::new(log,      1, "log"),
    "log1p"    => Function::new(log1p,    1, "log1p"),
    "logb"     => Function::new(logb,     2, "logb"),
    "signum"   => Function::new(signum,   1, "signum"),
    "toradian" => Function::new(toradian, 1, "toradian"),
    "todegree" => Function::new(todegree, 1, "todegree"),
};

/// Returns all builtin function names.
///
/// The order of the returned names is unspecified.
pub fn names() -> Vec<&'static str> {
    FUNCTIONS.keys().cloned().collect()
}

/// Checks if a builtin function with the given name exists in the table.
///
/// Returns `true` if the function exists, otherwise `false`. The match is
/// exact and case-sensitive, same as [`crate::lookup`].
pub fn contains(name: &str) -> bool {
    FUNCTIONS.contains_key(name)
}
