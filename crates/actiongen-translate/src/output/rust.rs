//! Rust translator.
//!
//! Generated Rust parsers have no garbage collector: nodes and tokens live
//! in an arena owned by the parser and are referenced by `NodeId`/`TokenId`
//! handles. The translator therefore maps `Node`/`Token` to handle types,
//! lowers node construction to arena allocation, and lowers type tests to
//! matches on the arena's node enum.
//!
//! # Example
//!
//! ```
//! use actiongen_translate::{
//!     Expr, GrammarNames, RustTranslator, TranslationContext, Translator, TypeExpr,
//! };
//!
//! let t = RustTranslator::new(GrammarNames {
//!     lexer_class: "ArithLexer".into(),
//!     parser_class: "ArithParser".into(),
//!     base_token_class: "Token".into(),
//!     node_package: "org.example.ast".into(),
//! });
//!
//! assert_eq!(t.translate_identifier("myLocalValue", TranslationContext::Variable), "my_local_value");
//! assert_eq!(t.translate_type_name("Boolean"), "Option<bool>");
//!
//! let alloc = Expr::allocation(TypeExpr::simple("NODE_PACKAGE.Primary"), vec![Expr::name("tok")]);
//! assert_eq!(
//!     t.expr_to_string(&alloc).unwrap(),
//!     "self.arena.alloc_node(AstNode::Primary(PrimaryNode::new(tok)))"
//! );
//! ```

use crate::case;
use crate::context::TranslationContext;
use crate::output::split_numeric_suffix;
use crate::registry::Target;
use crate::settings::{GrammarNames, InfrastructureClass};
use crate::traits::{TranslateError, Translator, TranslatorConfig, write_literal};
use actiongen_ast::{Expr, Invocation, Literal, TypeExpr};

/// Parser field holding the node/token arena.
const ARENA: &str = "arena";

/// Enum with one variant per node class.
const NODE_ENUM: &str = "AstNode";

/// Suffix of the struct each `AstNode` variant wraps (`Primary` → `PrimaryNode`).
const NODE_SUFFIX: &str = "Node";

/// Rust keywords that are legal identifiers in action code.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "become", "box", "dyn", "extern", "fn", "gen", "impl", "in", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "struct",
    "trait", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "yield",
];

/// Types an `as` cast can target.
const PRIMITIVES: &[&str] = &[
    "bool", "char", "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "usize", "isize", "f32",
    "f64",
];

pub struct RustTranslator {
    names: GrammarNames,
    config: TranslatorConfig,
}

impl RustTranslator {
    pub fn new(names: GrammarNames) -> Self {
        tracing::debug!(?names, "constructing rust translator");
        Self {
            names,
            config: TranslatorConfig {
                is_typed: true,
                method_indent: 4,
                field_indent: 4,
                // Fields are registered in the arena, not initialized in place.
                include_initializers: false,
            },
        }
    }

    /// Node classes are those named through the node package.
    fn node_class<'a>(&self, ty: &'a TypeExpr) -> Option<&'a str> {
        self.names.strip_node_package(&ty.name)
    }

    fn is_token_class(&self, ty: &TypeExpr) -> bool {
        self.names.infrastructure_class(&ty.name) == Some(InfrastructureClass::BaseToken)
    }

    /// Append `expr` where a method receiver is expected, parenthesized
    /// unless it already binds tightly.
    fn write_receiver_operand(&self, expr: &Expr, out: &mut String) -> Result<(), TranslateError> {
        let composite = matches!(
            expr,
            Expr::Binary { .. }
                | Expr::Unary { .. }
                | Expr::Assign { .. }
                | Expr::Conditional { .. }
                | Expr::Cast { .. }
        );
        if !composite {
            return self.translate_receiver(expr, out);
        }
        out.push('(');
        self.translate_expr(expr, out)?;
        out.push_str(").");
        Ok(())
    }

    fn write_method(
        &self,
        receiver: &Expr,
        method: &str,
        args: &[Expr],
        borrow_args: bool,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        self.write_receiver_operand(receiver, out)?;
        out.push_str(method);
        out.push('(');
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            if borrow_args {
                out.push('&');
            }
            self.translate_expr(arg, out)?;
        }
        out.push(')');
        Ok(())
    }
}

impl Translator for RustTranslator {
    fn target(&self) -> Target {
        Target::Rust
    }

    fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    fn names(&self) -> &GrammarNames {
        &self.names
    }

    fn null_literal(&self) -> &'static str {
        "None"
    }

    fn self_reference(&self) -> &'static str {
        "self"
    }

    fn infrastructure_class(&self, class: InfrastructureClass) -> String {
        match class {
            InfrastructureClass::Lexer => "Lexer",
            InfrastructureClass::Parser => "Parser",
            InfrastructureClass::BaseToken => "Token",
        }
        .to_string()
    }

    fn parser_field(&self, field: &str) -> String {
        format!("self.{}", self.convert_case(field))
    }

    fn convert_case(&self, ident: &str) -> String {
        case::camel_to_snake(ident).to_lowercase()
    }

    fn escape_keyword(&self, ident: String) -> String {
        if ident == "crate" {
            // Not allowed as a raw identifier.
            format!("{ident}_")
        } else if KEYWORDS.contains(&ident.as_str()) {
            format!("r#{ident}")
        } else {
            ident
        }
    }

    fn array_of(&self, element: String) -> String {
        format!("Vec<{element}>")
    }

    /// Associated items of a type are reached with `::`.
    fn member_separator(&self, object: &Expr, translated: &str) -> &'static str {
        let names_type = matches!(object, Expr::Name(_))
            && translated.starts_with(char::is_uppercase)
            && !case::is_screaming_snake(translated);
        if names_type { "::" } else { "." }
    }

    fn has_increment_operators(&self) -> bool {
        false
    }

    fn translate_operator(&self, op: &str) -> String {
        match op {
            ">>>" => ">>",
            ">>>=" => ">>=",
            _ => op,
        }
        .to_string()
    }

    fn translate_type_name(&self, name: &str) -> String {
        match name {
            "boolean" => "bool",
            "Boolean" => "Option<bool>",
            "byte" => "i8",
            "Byte" => "Option<i8>",
            "short" => "i16",
            "Short" => "Option<i16>",
            "int" => "i32",
            "Integer" => "Option<i32>",
            "long" => "i64",
            "Long" => "Option<i64>",
            "float" => "f32",
            "Float" => "Option<f32>",
            "double" => "f64",
            "Double" => "Option<f64>",
            "char" => "char",
            "Character" => "Option<char>",
            "String" | "StringBuilder" => "String",
            "void" => "()",
            "List" | "ArrayList" | "java.util.List" | "java.util.ArrayList" => "Vec",
            "Set" | "HashSet" | "java.util.Set" | "java.util.HashSet" => "HashSet",
            "Map" | "HashMap" | "java.util.Map" | "java.util.HashMap" => "HashMap",
            // Nodes and tokens are arena handles.
            "Node" => "NodeId",
            "Token" => "TokenId",
            _ => {
                tracing::trace!(name, "type name passed through");
                name
            }
        }
        .to_string()
    }

    fn translate_invocation(
        &self,
        inv: &Invocation,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        let Some(receiver) = inv.receiver.as_deref() else {
            out.push_str(self.self_reference());
            out.push('.');
            out.push_str(&self.translate_identifier(&inv.method, TranslationContext::Method));
            return self.translate_arguments(&inv.args, out);
        };

        match (inv.method.as_str(), inv.args.as_slice()) {
            ("toString", []) => self.write_method(receiver, "to_string", &[], false, out),
            ("valueOf", [arg]) if matches!(receiver, Expr::Name(n) if n == "String") => {
                self.write_method(arg, "to_string", &[], false, out)
            }
            ("equals", [other]) => {
                out.push('(');
                self.translate_expr(receiver, out)?;
                out.push_str(" == ");
                self.translate_expr(other, out)?;
                out.push(')');
                Ok(())
            }
            ("size" | "length", []) => self.write_method(receiver, "len", &[], false, out),
            ("add", [_]) => self.write_method(receiver, "push", &inv.args, false, out),
            ("put", [_, _]) => self.write_method(receiver, "insert", &inv.args, false, out),
            ("containsKey", [_]) => {
                self.write_method(receiver, "contains_key", &inv.args, true, out)
            }
            ("contains", [_]) => self.write_method(receiver, "contains", &inv.args, true, out),
            _ => {
                self.translate_receiver(receiver, out)?;
                out.push_str(&self.translate_identifier(&inv.method, TranslationContext::Method));
                self.translate_arguments(&inv.args, out)
            }
        }
    }

    /// Width suffixes become Rust's typed literals (`10L` → `10i64`).
    fn translate_literal(&self, lit: &Literal, out: &mut String) {
        match lit {
            Literal::Int(text) | Literal::Float(text) => {
                let (digits, suffix) = split_numeric_suffix(text);
                out.push_str(digits);
                match suffix {
                    Some('L' | 'l') => out.push_str("i64"),
                    Some('f' | 'F') => out.push_str("f32"),
                    Some('d' | 'D') => out.push_str("f64"),
                    _ => {}
                }
            }
            _ => write_literal(self, lit, out),
        }
    }

    fn translate_member(
        &self,
        object: &Expr,
        member: &str,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        if member == "length" {
            return self.write_method(object, "len", &[], false, out);
        }
        self.translate_receiver(object, out)?;
        out.push_str(&self.translate_identifier(member, TranslationContext::Variable));
        Ok(())
    }

    /// Comparisons against `None` become `is_none()`/`is_some()`.
    fn translate_binary(
        &self,
        left: &Expr,
        op: &str,
        right: &Expr,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        let is_null = |e: &Expr| matches!(e, Expr::Literal(Literal::Null));
        let method = match op {
            "==" => "is_none",
            "!=" => "is_some",
            _ => "",
        };
        if !method.is_empty() && is_null(right) {
            return self.write_method(left, method, &[], false, out);
        }
        if !method.is_empty() && is_null(left) {
            return self.write_method(right, method, &[], false, out);
        }
        self.translate_expr(left, out)?;
        out.push(' ');
        out.push_str(&self.translate_operator(op));
        out.push(' ');
        self.translate_expr(right, out)
    }

    fn translate_conditional(
        &self,
        test: &Expr,
        consequent: &Expr,
        alternate: &Expr,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        out.push_str("if ");
        self.translate_expr(test, out)?;
        out.push_str(" { ");
        self.translate_expr(consequent, out)?;
        out.push_str(" } else { ");
        self.translate_expr(alternate, out)?;
        out.push_str(" }");
        Ok(())
    }

    /// Numeric casts use `as`, boxed casts wrap in `Some`, and casts
    /// between handle types are no-ops.
    fn translate_cast(
        &self,
        ty: &TypeExpr,
        expr: &Expr,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        let target = self.type_to_string(ty)?;
        if is_optional(&target) {
            out.push_str("Some(");
            self.translate_expr(expr, out)?;
            out.push(')');
            return Ok(());
        }
        if !PRIMITIVES.contains(&target.as_str()) {
            return self.translate_expr(expr, out);
        }
        out.push('(');
        self.translate_expr(expr, out)?;
        out.push_str(" as ");
        out.push_str(&target);
        out.push(')');
        Ok(())
    }

    /// Nodes and tokens are allocated in the arena; boxed values become
    /// `Some(..)`.
    fn translate_allocation(
        &self,
        ty: &TypeExpr,
        args: &[Expr],
        out: &mut String,
    ) -> Result<(), TranslateError> {
        // Generic arguments are left to inference.
        let base = self.type_to_string(&TypeExpr::simple(ty.name.clone()))?;
        if let Some(class) = self.node_class(ty) {
            out.push_str(&format!(
                "self.{ARENA}.alloc_node({NODE_ENUM}::{class}({class}{NODE_SUFFIX}::new"
            ));
            self.translate_arguments(args, out)?;
            out.push_str("))");
        } else if self.is_token_class(ty) {
            let token = self.infrastructure_class(InfrastructureClass::BaseToken);
            out.push_str(&format!("self.{ARENA}.alloc_token({token}::new"));
            self.translate_arguments(args, out)?;
            out.push(')');
        } else if is_optional(&base) {
            out.push_str("Some");
            self.translate_arguments(args, out)?;
        } else {
            out.push_str(&path_form(&base));
            out.push_str("::new");
            self.translate_arguments(args, out)?;
        }
        Ok(())
    }

    /// Only node classes have a runtime tag to test against.
    fn translate_instance_of(
        &self,
        expr: &Expr,
        ty: &TypeExpr,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        if ty.name.is_empty() {
            return Err(TranslateError::MissingTypeName {
                arguments: ty.type_args.len(),
            });
        }
        let Some(class) = self.node_class(ty) else {
            return Err(TranslateError::UnsupportedTypeTest {
                type_name: ty.name.clone(),
            });
        };
        out.push_str(&format!("matches!(self.{ARENA}.get_node("));
        self.translate_expr(expr, out)?;
        out.push_str(&format!("), {NODE_ENUM}::{class}(_))"));
        Ok(())
    }
}

/// Whether a translated type is a boxed value.
fn is_optional(ty: &str) -> bool {
    ty.starts_with("Option<")
}

/// A type in expression position, with generic arguments behind `::`.
fn path_form(ty: &str) -> String {
    match ty.find('<') {
        Some(i) => format!("{}::{}", &ty[..i], &ty[i..]),
        None => ty.to_string(),
    }
}
