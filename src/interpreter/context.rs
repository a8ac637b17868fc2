use crate::{
    ast::ParseTree,
    error::ParseError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        parser::core::Parser,
        variables::VariableTable,
    },
};

/// A session that owns a variable table and parses and evaluates against it.
///
/// Trees parsed by a context only store slot indices, so they stay valid
/// while the context's variables change and can be evaluated again and again.
///
/// # Example
/// ```
/// use parsetree::Context;
///
/// let mut context = Context::new();
/// let tree = context.parse("step(2) * t").unwrap();
///
/// context.set_variable("t", 1.0);
/// assert_eq!(context.evaluate(&tree).unwrap(), 0.0);
///
/// context.set_variable("t", 3.0);
/// assert_eq!(context.evaluate(&tree).unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    variables: VariableTable,
}

impl Context {
    /// Creates a context with the default variable table.
    #[must_use]
    pub const fn new() -> Self {
        Self { variables: VariableTable::new() }
    }

    /// Creates a context around an existing table.
    #[must_use]
    pub const fn with_variables(variables: VariableTable) -> Self {
        Self { variables }
    }

    /// Parses `input` against this context's variables.
    pub fn parse(&self, input: &str) -> Result<ParseTree, ParseError> {
        Parser::new(input, &self.variables).parse()
    }

    /// Evaluates `tree` with the current variable values.
    pub fn evaluate(&self, tree: &ParseTree) -> EvalResult<f64> {
        Evaluator::new(&self.variables).evaluate(tree)
    }

    /// Updates an existing variable. Returns its slot, or `None` if the name
    /// is not in the table.
    pub fn set_variable(&mut self, name: &str, value: f64) -> Option<usize> {
        self.variables.set(name, value)
    }

    /// The variable table.
    #[must_use]
    pub const fn variables(&self) -> &VariableTable {
        &self.variables
    }
}
