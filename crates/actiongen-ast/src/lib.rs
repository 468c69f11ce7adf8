//! Action-code AST.
//!
//! Grammar rules embed imperative action code written once, in a single
//! reference syntax. The grammar front-end parses that code into the types
//! below; code generators only ever read them.
//!
//! # Shape
//!
//! ```text
//! Expr ─┬─ Name("currentLookaheadToken")
//!       ├─ Invocation { receiver, method, args }
//!       ├─ Allocation { ty: TypeExpr, args }
//!       └─ ...
//!
//! TypeExpr { name: "Map", type_args: [K, V], array_dimensions: 0 }
//! ```
//!
//! Operators are kept as their source tokens (`&&`, `>>>`, `+=`) so each
//! target decides its own spelling.

use serde::{Deserialize, Serialize};

/// An expression in action code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Literal(Literal),

    /// Identifier reference, possibly dotted (`pkg.Node123`).
    Name(String),

    /// Field access (`object.member`).
    Member { object: Box<Expr>, member: String },

    Invocation(Invocation),

    Binary {
        left: Box<Expr>,
        op: String,
        right: Box<Expr>,
    },

    Unary {
        op: String,
        operand: Box<Expr>,
        /// `i++` rather than `++i`.
        #[serde(default)]
        postfix: bool,
    },

    /// Simple or compound assignment (`=`, `+=`, ...).
    Assign {
        target: Box<Expr>,
        op: String,
        value: Box<Expr>,
    },

    /// `test ? consequent : alternate`
    Conditional {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },

    Cast { ty: TypeExpr, expr: Box<Expr> },

    /// Object construction (`new T(args)`).
    Allocation {
        ty: TypeExpr,
        #[serde(default)]
        args: Vec<Expr>,
    },

    InstanceOf { expr: Box<Expr>, ty: TypeExpr },

    Index { object: Box<Expr>, index: Box<Expr> },

    Paren(Box<Expr>),
}

/// A literal value.
///
/// Numeric literals keep their source spelling, suffix included (`10L`,
/// `1.5f`), since targets disagree on how width is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(String),
    Float(String),
    Char(char),
    /// Unescaped string contents.
    String(String),
}

/// A method or function call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invocation {
    /// `None` for calls with an implicit receiver (`foo(x)`).
    #[serde(default)]
    pub receiver: Option<Box<Expr>>,
    pub method: String,
    #[serde(default)]
    pub args: Vec<Expr>,
}

/// A (possibly generic) type reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeExpr {
    pub name: String,
    /// Generic arguments, in positional order.
    #[serde(default)]
    pub type_args: Vec<TypeExpr>,
    /// Number of trailing `[]`.
    #[serde(default)]
    pub array_dimensions: usize,
}

impl Expr {
    pub fn name(ident: impl Into<String>) -> Self {
        Expr::Name(ident.into())
    }

    pub fn null() -> Self {
        Expr::Literal(Literal::Null)
    }

    pub fn bool(value: bool) -> Self {
        Expr::Literal(Literal::Bool(value))
    }

    pub fn int(text: impl Into<String>) -> Self {
        Expr::Literal(Literal::Int(text.into()))
    }

    pub fn float(text: impl Into<String>) -> Self {
        Expr::Literal(Literal::Float(text.into()))
    }

    pub fn string(content: impl Into<String>) -> Self {
        Expr::Literal(Literal::String(content.into()))
    }

    pub fn member(object: Expr, member: impl Into<String>) -> Self {
        Expr::Member {
            object: Box::new(object),
            member: member.into(),
        }
    }

    /// Call with an implicit receiver.
    pub fn call(method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Invocation(Invocation {
            receiver: None,
            method: method.into(),
            args,
        })
    }

    pub fn method_call(receiver: Expr, method: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Invocation(Invocation {
            receiver: Some(Box::new(receiver)),
            method: method.into(),
            args,
        })
    }

    pub fn binary(left: Expr, op: impl Into<String>, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op: op.into(),
            right: Box::new(right),
        }
    }

    pub fn prefix(op: impl Into<String>, operand: Expr) -> Self {
        Expr::Unary {
            op: op.into(),
            operand: Box::new(operand),
            postfix: false,
        }
    }

    pub fn postfix(operand: Expr, op: impl Into<String>) -> Self {
        Expr::Unary {
            op: op.into(),
            operand: Box::new(operand),
            postfix: true,
        }
    }

    pub fn assign(target: Expr, op: impl Into<String>, value: Expr) -> Self {
        Expr::Assign {
            target: Box::new(target),
            op: op.into(),
            value: Box::new(value),
        }
    }

    pub fn conditional(test: Expr, consequent: Expr, alternate: Expr) -> Self {
        Expr::Conditional {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
    }

    pub fn cast(ty: TypeExpr, expr: Expr) -> Self {
        Expr::Cast {
            ty,
            expr: Box::new(expr),
        }
    }

    pub fn allocation(ty: TypeExpr, args: Vec<Expr>) -> Self {
        Expr::Allocation { ty, args }
    }

    pub fn instance_of(expr: Expr, ty: TypeExpr) -> Self {
        Expr::InstanceOf {
            expr: Box::new(expr),
            ty,
        }
    }

    pub fn index(object: Expr, index: Expr) -> Self {
        Expr::Index {
            object: Box::new(object),
            index: Box::new(index),
        }
    }

    pub fn paren(expr: Expr) -> Self {
        Expr::Paren(Box::new(expr))
    }
}

impl Invocation {
    /// Number of arguments passed.
    pub fn arity(&self) -> usize {
        self.args.len()
    }
}

impl TypeExpr {
    /// A plain, non-generic type reference.
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_args: Vec::new(),
            array_dimensions: 0,
        }
    }

    pub fn generic(name: impl Into<String>, type_args: Vec<TypeExpr>) -> Self {
        Self {
            name: name.into(),
            type_args,
            array_dimensions: 0,
        }
    }

    /// Wrap this type in one more array dimension.
    pub fn array(mut self) -> Self {
        self.array_dimensions += 1;
        self
    }

    pub fn is_generic(&self) -> bool {
        !self.type_args.is_empty()
    }
}
