//! # function.rs
//!
//! This source file defines the value type stored in the builtin function
//! table: a named numeric operation together with its expected argument count.

/// Function pointer type alias representing a mathematical function.
///
/// This type defines a function that takes a slice of double precision values
/// as input arguments and returns a single double precision value as the result.
///
/// The input slice length corresponds to the number of function arguments;
/// implementations read exactly the arguments their arity declares and
/// perform no length check of their own.
pub type Func = fn(&[f64]) -> f64;

/// Represents a mathematical function with its implementation and expected argument count.
#[derive(Debug, Clone)]
pub struct Function {
    /// Function pointer implementing the mathematical function.
    function: Func,
    /// Number of arguments the function accepts.
    arity: u8,
    /// Function name for comparision
    name: &'static str,
}

impl Function {
    /// Creates a new mathematical function.
    ///
    /// # Arguments
    ///
    /// * `function` - Function pointer implementing the function.
    /// * `arity` - Number of expected arguments.
    /// * `name` - Function name.
    pub const fn new(function: Func, arity: u8, name: &'static str) -> Self {
        Self {
            function,
            arity,
            name,
        }
    }

    /// Executes the function with the given arguments.
    ///
    /// `args` must hold exactly [`Function::arity`] values; no count check
    /// happens here, argument count validation belongs to the caller.
    ///
    /// # Arguments
    ///
    /// * `args` - Slice of values as arguments.
    ///
    /// # Returns
    ///
    /// The computed result.
    pub fn apply(&self, args: &[f64]) -> f64 {
        (self.function)(args)
    }

    /// Returns the number of arguments this function expects.
    pub fn arity(&self) -> usize {
        self.arity as usize
    }

    /// Returns the function name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        // function pointer comparisons do not produce meaningful results since their addresses are not guaranteed to be unique,
        // so don't compare function pointers
        (self.arity == other.arity) && (self.name == other.name)
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod function_tests {
    use super::*;

    #[test]
    fn test_apply() {
        let func = Function::new(|args| args[0] + 1.0, 1, "inc");
        assert_eq!(func.apply(&[0.0]), 1.0);
    }

    #[test]
    fn test_arity() {
        let func = Function::new(|args| args[0] + args[1], 2, "sum");
        assert_eq!(func.arity(), 2);
    }

    #[test]
    fn test_name_and_display() {
        let func = Function::new(|args| args[0], 1, "ident");
        assert_eq!(func.name(), "ident");
        assert_eq!(format!("{}", func), "ident");
    }

    #[test]
    fn test_partial_eq() {
        let f1 = Function::new(|args| args[0], 1, "f");
        let f2 = Function::new(|args| args[0] + args[0], 1, "f");
        let f3 = Function::new(|args| args[0], 1, "g");
        let f4 = Function::new(|args| args[0], 2, "f");

        assert_eq!(f1, f2);
        assert_ne!(f1, f3);
        assert_ne!(f1, f4);
    }
}
