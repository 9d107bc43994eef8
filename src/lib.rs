//! # functab
//!
//! `functab` is the builtin function table of a mathematical expression
//! evaluator. It resolves the function names found in parsed expressions
//! (`"sqrt"`, `"log2"`, `"pow"`, ...) to concrete numeric operations over
//! `f64` values, together with the number of arguments each one expects.
//!
//! ## Overview
//! - Fixed set of builtin functions, compiled into a static table.
//! - Lookup by exact, case-sensitive name with an explicit "not found" result.
//! - Plain `fn(&[f64]) -> f64` implementations with no side effects.
//! - The table is never mutated after construction, so lookups need no
//!   synchronization from any number of threads.
//!
//! Internally, the table is a perfect hash map generated at compile time;
//! a lookup hashes the query string once and compares it against at most
//! one candidate entry.
//!
//! ## Feature Highlights
//! - **Compile time table** built with [`phf`], no runtime initialization
//! - **Exact name matching** with absence reported as [`Option`]
//! - **Arity metadata** via [`Function::arity`] for call site validation
//!   in the surrounding parser
//! - **Reproducible rounding**: `log2` and `logb` evaluate the change of
//!   base quotient of natural logarithms, and the degree/radian conversions
//!   follow the `deg / 180 * π` form
//!
//! ## Example
//! ```rust
//! use functab::lookup;
//!
//! let sqrt = lookup("sqrt").expect("sqrt is builtin");
//! assert_eq!(sqrt.arity(), 1);
//! assert_eq!(sqrt.apply(&[9.0]), 3.0);
//!
//! // Lookup misses are a normal outcome, not an error.
//! assert!(lookup("Sqrt").is_none());
//! ```
//!
//! ## Example: Retrieving All Names
//! ```rust
//! use functab::buildin;
//!
//! let function_names: Vec<&'static str> = buildin::names();
//! println!("Functions: {:?}", function_names);
//! ```
//!
//! ## When to Use
//! Use `functab` when you need:
//! - The builtin function vocabulary of an expression parser or evaluator
//! - Arity metadata for validating call sites before evaluation
//! - Results that reproduce the `ln` quotient forms of `log2` and `logb`
//!   bit for bit
//!
//! ## License
//! Licensed under either **MIT** or **Apache-2.0** at your option.

pub mod buildin;
pub mod function;

use crate::function::Function;

/// Looks up a builtin function by its name.
///
/// This is the single query the surrounding parser or evaluator depends on:
/// given the text of an identifier token, it answers whether a builtin
/// function with that name exists, and if so returns the function together
/// with its arity.
///
/// # Parameters
/// - `name`: The function name to resolve. Matching is exact and
///   case-sensitive; no trimming or case folding is applied.
///
/// # Returns
/// - `Some(&Function)` if `name` is a builtin function.
/// - `None` otherwise. A miss is a normal outcome the caller branches on,
///   for example to try user defined names or variables next; it is not
///   an error.
///
/// # Example
/// ```rust
/// use functab::lookup;
///
/// let pow = lookup("pow").expect("pow is builtin");
/// assert_eq!(pow.arity(), 2);
/// assert_eq!(pow.apply(&[2.0, 10.0]), 1024.0);
///
/// assert!(lookup("Pow").is_none());
/// ```
///
/// # Notes
/// - The table behind this call is fixed at compile time; repeated lookups
///   with the same name always resolve to the same function.
/// - Lookups are plain reads of an immutable table and may run from any
///   number of threads concurrently.
pub fn lookup(name: &str) -> Option<&'static Function> {
    buildin::FUNCTIONS.get(name)
}

#[cfg(test)]
mod lookup_test {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_known_name() {
        let func = lookup("sqrt").unwrap();
        assert_eq!(func.name(), "sqrt");
        assert_eq!(func.arity(), 1);
        assert_eq!(func.apply(&[9.0]), 3.0);
    }

    #[test]
    fn test_unknown_name() {
        assert!(lookup("Sqrt").is_none());
        assert!(lookup("SQRT").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("sqrt2").is_none());
        assert!(lookup(" sqrt").is_none());
        assert!(lookup("sqrt ").is_none());
    }

    #[test]
    fn test_every_name_resolves() {
        for name in buildin::names() {
            let func = lookup(name).unwrap();
            assert_eq!(func.name(), name);
        }
    }

    #[test]
    fn test_repeated_lookup_is_stable() {
        let first = lookup("pow").unwrap();
        let second = lookup("pow").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.apply(&[2.0, 10.0]), 1024.0);
        assert_eq!(first.apply(&[2.0, 10.0]), second.apply(&[2.0, 10.0]));
    }

    #[test]
    fn test_concurrent_lookup() {
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    for _ in 0..100 {
                        let func = lookup("log2").unwrap();
                        assert_eq!(func.apply(&[8.0]), 3.0);
                    }
                });
            }
        });
    }

    #[test]
    fn test_irrational_result() {
        let func = lookup("exp").unwrap();
        let e = std::f64::consts::E;
        assert_abs_diff_eq!(func.apply(&[2.0]), e * e, epsilon=1.0e-12);
    }
}
