use std::fmt;

/// The operator catalog.
///
/// Every operator the grammar recognises has exactly one entry here, with a
/// stable numeric identity. The parser tags tree nodes with these entries and
/// the evaluator dispatches on them.
///
/// `Minus` is shared: it tags binary subtraction and unary negation alike.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Logical not (`!`).
    Not,
    /// Logical and (`&&`).
    And,
    /// Logical or (`||`).
    Or,
    /// Less than or equal (`<=`).
    LessEqual,
    /// Less than (`<`).
    Less,
    /// Greater than or equal (`>=`).
    GreaterEqual,
    /// Greater than (`>`).
    Greater,
    /// Equal to (`==`).
    Equal,
    /// Not equal to (`!=`).
    NotEqual,
    /// Addition (`+`).
    Add,
    /// Subtraction or negation (`-`).
    Minus,
    /// Multiplication (`*`).
    Multiply,
    /// Integer modulo (`%`).
    Modulo,
    /// Division (`/`).
    Divide,
    /// Exponentiation (`^`).
    Power,
    /// `sin(x)`
    Sin,
    /// `cos(x)`
    Cos,
    /// `tan(x)`
    Tan,
    /// `exp(x)`
    Exp,
    /// Base-10 logarithm, `log(x)`.
    Log,
    /// Natural logarithm, `ln(x)`.
    Ln,
    /// `sqrt(x)`
    Sqrt,
    /// `step(x)`: 1 while `x` is below the first table variable, else 0.
    Step,
}

impl Operator {
    /// Every catalog entry, ordered by id.
    pub const ALL: [Self; 23] = [Self::Not,
                                 Self::And,
                                 Self::Or,
                                 Self::LessEqual,
                                 Self::Less,
                                 Self::GreaterEqual,
                                 Self::Greater,
                                 Self::Equal,
                                 Self::NotEqual,
                                 Self::Add,
                                 Self::Minus,
                                 Self::Multiply,
                                 Self::Modulo,
                                 Self::Divide,
                                 Self::Power,
                                 Self::Sin,
                                 Self::Cos,
                                 Self::Tan,
                                 Self::Exp,
                                 Self::Log,
                                 Self::Ln,
                                 Self::Sqrt,
                                 Self::Step];

    /// The functions callable by name, in catalog order.
    pub const FUNCTIONS: [Self; 8] = [Self::Sin,
                                      Self::Cos,
                                      Self::Tan,
                                      Self::Exp,
                                      Self::Log,
                                      Self::Ln,
                                      Self::Sqrt,
                                      Self::Step];

    /// Returns the stable numeric identity of the operator.
    ///
    /// # Example
    /// ```
    /// use parsetree::ast::Operator;
    ///
    /// assert_eq!(Operator::Not.id(), 0);
    /// assert_eq!(Operator::Power.id(), 14);
    /// assert_eq!(Operator::Step.id(), 22);
    /// ```
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Looks up a catalog entry by its numeric identity.
    ///
    /// # Example
    /// ```
    /// use parsetree::ast::Operator;
    ///
    /// assert_eq!(Operator::from_id(13), Some(Operator::Divide));
    /// assert_eq!(Operator::from_id(23), None);
    /// ```
    #[must_use]
    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    /// Resolves a function name by exact match.
    ///
    /// Only the function subset of the catalog is searched, so `"sin"`
    /// resolves but `"sine"` and `"+"` do not.
    #[must_use]
    pub fn function_named(name: &str) -> Option<Self> {
        Self::FUNCTIONS.into_iter()
                       .find(|op| op.symbol() == name)
    }

    /// Returns the source spelling of the operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::And => "&&",
            Self::Or => "||",
            Self::LessEqual => "<=",
            Self::Less => "<",
            Self::GreaterEqual => ">=",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Add => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Modulo => "%",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
            Self::Step => "step",
        }
    }

    /// Returns `true` for operators the evaluator accepts on a binary node.
    #[must_use]
    pub const fn is_binary(self) -> bool {
        matches!(self,
                 Self::And
                 | Self::Or
                 | Self::LessEqual
                 | Self::Less
                 | Self::GreaterEqual
                 | Self::Greater
                 | Self::Equal
                 | Self::NotEqual
                 | Self::Add
                 | Self::Minus
                 | Self::Multiply
                 | Self::Modulo
                 | Self::Divide
                 | Self::Power)
    }

    /// Returns `true` for operators the evaluator accepts on a unary node.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Self::Not | Self::Minus) || self.is_function()
    }

    /// Returns `true` for the named functions (`sin` through `step`).
    #[must_use]
    pub const fn is_function(self) -> bool {
        self.id() >= Self::Sin.id()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of the parse tree.
///
/// Children are boxed and owned by exactly one parent, so a tree is always
/// finite and acyclic and dropping the root releases every node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A binary operation.
    Binary {
        /// The operator.
        op:    Operator,
        /// Left operand, evaluated first.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// A prefix operator or function call.
    Unary {
        /// The operator or function.
        op:      Operator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A numeric constant captured at parse time.
    Literal(f64),
    /// A reference to a variable table slot, read at every evaluation.
    Variable(usize),
}

impl Node {
    /// Builds a binary node.
    #[must_use]
    pub fn binary(op: Operator, left: Self, right: Self) -> Self {
        Self::Binary { op,
                       left: Box::new(left),
                       right: Box::new(right) }
    }

    /// Builds a unary node.
    #[must_use]
    pub fn unary(op: Operator, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand) }
    }

    /// Counts the nodes in this subtree.
    ///
    /// # Example
    /// ```
    /// use parsetree::ast::{Node, Operator};
    ///
    /// let node = Node::binary(Operator::Add, Node::Literal(1.0), Node::Variable(0));
    /// assert_eq!(node.len(), 3);
    /// ```
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        match self {
            Self::Binary { left, right, .. } => 1 + left.len() + right.len(),
            Self::Unary { operand, .. } => 1 + operand.len(),
            Self::Literal(_) | Self::Variable(_) => 1,
        }
    }
}

/// Renders the node fully parenthesised, so grouping is explicit.
///
/// Variables are shown by slot as `$index`, since the tree does not keep
/// names.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Binary { op, left, right } => write!(f, "({left} {op} {right})"),
            Self::Unary { op, operand } if op.is_function() => write!(f, "{op}({operand})"),
            Self::Unary { op, operand } => write!(f, "{op}{operand}"),
            Self::Literal(value) => write!(f, "{value}"),
            Self::Variable(index) => write!(f, "${index}"),
        }
    }
}

/// A successfully parsed expression.
///
/// The tree is immutable once built. It can be evaluated any number of times,
/// and each evaluation re-reads the current variable values.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseTree {
    root: Node,
}

impl ParseTree {
    /// Wraps a root node.
    #[must_use]
    pub const fn new(root: Node) -> Self {
        Self { root }
    }

    /// Returns the root node.
    #[must_use]
    pub const fn root(&self) -> &Node {
        &self.root
    }

    /// Consumes the tree and returns its root node.
    #[must_use]
    pub fn into_root(self) -> Node {
        self.root
    }
}

impl From<Node> for ParseTree {
    fn from(root: Node) -> Self {
        Self::new(root)
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}
