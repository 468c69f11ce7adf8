//! The capability every target backend implements.
//!
//! The emission engine walks the action AST and calls into exactly one
//! [`Translator`] per generation run. Every method has a default matching
//! the reference syntax the action code is written in, so a backend only
//! overrides what its target spells differently. Unrecognized names fall
//! through unchanged: they are assumed to be valid in the target already.

use crate::case;
use crate::context::TranslationContext;
use crate::output::quote;
use crate::registry::Target;
use crate::settings::{GrammarNames, InfrastructureClass};
use actiongen_ast::{Expr, Invocation, Literal, TypeExpr};

/// Error raised for action-AST shapes a translator cannot express.
///
/// These indicate a defect in the front-end, not in the action code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    #[error("type expression has no base name ({arguments} generic argument(s))")]
    MissingTypeName { arguments: usize },

    #[error("type test against `{type_name}` has no representation in this target")]
    UnsupportedTypeTest { type_name: String },
}

/// Per-target generation settings, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Whether declarations carry types.
    pub is_typed: bool,
    pub method_indent: usize,
    pub field_indent: usize,
    /// Whether field initializers are emitted at the declaration. When
    /// false the emission engine places initialization elsewhere.
    pub include_initializers: bool,
}

/// Parser fields that action code reaches as bare identifiers.
pub const PARSER_FIELDS: &[&str] = &["currentLookaheadToken", "lastConsumedToken"];

/// Source name of the node under construction (`THIS_PRODUCTION`).
pub const THIS_PRODUCTION: &str = "thisProduction";

/// Translates action-AST fragments into one target language.
pub trait Translator: Send + Sync {
    fn target(&self) -> Target;

    fn config(&self) -> &TranslatorConfig;

    fn names(&self) -> &GrammarNames;

    // ------------------------------------------------------------------
    // Spellings
    // ------------------------------------------------------------------

    /// The absent value.
    fn null_literal(&self) -> &'static str {
        "null"
    }

    fn self_reference(&self) -> &'static str {
        "this"
    }

    /// Fixed spellings for identifiers the target writes differently.
    fn substitution(&self, _ident: &str) -> Option<&'static str> {
        None
    }

    fn infrastructure_class(&self, class: InfrastructureClass) -> String {
        self.names().class_name(class).to_string()
    }

    /// A parser field given its source name.
    fn parser_field(&self, field: &str) -> String {
        field.to_string()
    }

    /// Naming convention for values (variables, methods, parameters).
    fn convert_case(&self, ident: &str) -> String {
        ident.to_string()
    }

    /// Rename identifiers that collide with target keywords.
    fn escape_keyword(&self, ident: String) -> String {
        ident
    }

    /// `(open, close)` around generic arguments.
    fn generic_delimiters(&self) -> (&'static str, &'static str) {
        ("<", ">")
    }

    fn array_of(&self, element: String) -> String {
        format!("{element}[]")
    }

    /// Separator between an object and one of its members.
    fn member_separator(&self, _object: &Expr, _translated: &str) -> &'static str {
        "."
    }

    fn has_increment_operators(&self) -> bool {
        true
    }

    // ------------------------------------------------------------------
    // Names
    // ------------------------------------------------------------------

    fn translate_operator(&self, op: &str) -> String {
        op.to_string()
    }

    /// Rewrite an identifier for its syntactic role.
    ///
    /// Rules apply in order: absent value, self reference, the target's
    /// substitution table, parser fields, infrastructure classes, the
    /// current production, node-package elision, and finally the value
    /// naming convention. Constant-style names keep their spelling, so
    /// the emission engine must declare constants through this same
    /// method for declarations and uses to agree.
    fn translate_identifier(&self, ident: &str, context: TranslationContext) -> String {
        if ident == "null" {
            return self.null_literal().to_string();
        }
        if ident == "this" {
            return self.self_reference().to_string();
        }
        if let Some(spelling) = self.substitution(ident) {
            return spelling.to_string();
        }
        if PARSER_FIELDS.contains(&ident) {
            return self.parser_field(ident);
        }
        if let Some(class) = self.names().infrastructure_class(ident) {
            return self.infrastructure_class(class);
        }
        if ident == "THIS_PRODUCTION" || ident == "THIS" {
            return self.escape_keyword(self.convert_case(THIS_PRODUCTION));
        }
        if let Some(simple) = self.names().strip_node_package(ident) {
            return simple.to_string();
        }
        if context.converts_case() && !case::is_screaming_snake(ident) {
            return self.escape_keyword(self.convert_case(ident));
        }

        tracing::trace!(ident, ?context, "identifier passed through");
        ident.to_string()
    }

    fn translate_type_name(&self, name: &str) -> String {
        name.to_string()
    }

    // ------------------------------------------------------------------
    // Types
    // ------------------------------------------------------------------

    /// Append a type expression, generic arguments in their given order.
    fn translate_type(&self, ty: &TypeExpr, out: &mut String) -> Result<(), TranslateError> {
        if ty.name.is_empty() {
            return Err(TranslateError::MissingTypeName {
                arguments: ty.type_args.len(),
            });
        }

        let base = self.translate_identifier(&ty.name, TranslationContext::Type);
        let mut text = self.translate_type_name(&base);
        if ty.is_generic() {
            let (open, close) = self.generic_delimiters();
            text.push_str(open);
            for (i, arg) in ty.type_args.iter().enumerate() {
                if i > 0 {
                    text.push_str(", ");
                }
                self.translate_type(arg, &mut text)?;
            }
            text.push_str(close);
        }
        for _ in 0..ty.array_dimensions {
            text = self.array_of(text);
        }

        out.push_str(&text);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    /// Append a call expression.
    fn translate_invocation(
        &self,
        inv: &Invocation,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        if let Some(receiver) = &inv.receiver {
            self.translate_receiver(receiver, out)?;
        }
        out.push_str(&self.translate_identifier(&inv.method, TranslationContext::Method));
        self.translate_arguments(&inv.args, out)
    }

    /// Append `object` followed by the member separator.
    ///
    /// A capitalized bare name in receiver position names a type
    /// (`TokenType.PLUS`), so it is translated in type context.
    fn translate_receiver(&self, object: &Expr, out: &mut String) -> Result<(), TranslateError> {
        let mut text = String::new();
        match object {
            Expr::Name(name) if name.starts_with(char::is_uppercase) => {
                text.push_str(&self.translate_identifier(name, TranslationContext::Type));
            }
            _ => self.translate_expr(object, &mut text)?,
        }
        out.push_str(&text);
        out.push_str(self.member_separator(object, &text));
        Ok(())
    }

    /// Append a parenthesized, comma-separated argument list.
    fn translate_arguments(&self, args: &[Expr], out: &mut String) -> Result<(), TranslateError> {
        out.push('(');
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            self.translate_expr(arg, out)?;
        }
        out.push(')');
        Ok(())
    }

    /// Append any expression, dispatching to the per-construct hooks.
    fn translate_expr(&self, expr: &Expr, out: &mut String) -> Result<(), TranslateError> {
        match expr {
            Expr::Literal(lit) => self.translate_literal(lit, out),

            Expr::Name(name) => {
                out.push_str(&self.translate_identifier(name, TranslationContext::Variable));
            }

            Expr::Member { object, member } => self.translate_member(object, member, out)?,

            Expr::Invocation(inv) => self.translate_invocation(inv, out)?,

            Expr::Binary { left, op, right } => self.translate_binary(left, op, right, out)?,

            Expr::Unary {
                op,
                operand,
                postfix,
            } => self.translate_unary(op, operand, *postfix, out)?,

            Expr::Assign { target, op, value } => {
                self.translate_expr(target, out)?;
                out.push(' ');
                out.push_str(&self.translate_operator(op));
                out.push(' ');
                self.translate_expr(value, out)?;
            }

            Expr::Conditional {
                test,
                consequent,
                alternate,
            } => self.translate_conditional(test, consequent, alternate, out)?,

            Expr::Cast { ty, expr } => self.translate_cast(ty, expr, out)?,

            Expr::Allocation { ty, args } => self.translate_allocation(ty, args, out)?,

            Expr::InstanceOf { expr, ty } => self.translate_instance_of(expr, ty, out)?,

            Expr::Index { object, index } => {
                self.translate_expr(object, out)?;
                out.push('[');
                self.translate_expr(index, out)?;
                out.push(']');
            }

            Expr::Paren(inner) => {
                out.push('(');
                self.translate_expr(inner, out)?;
                out.push(')');
            }
        }
        Ok(())
    }

    fn translate_literal(&self, lit: &Literal, out: &mut String) {
        write_literal(self, lit, out);
    }

    fn translate_member(
        &self,
        object: &Expr,
        member: &str,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        self.translate_receiver(object, out)?;
        out.push_str(&self.translate_identifier(member, TranslationContext::Variable));
        Ok(())
    }

    fn translate_binary(
        &self,
        left: &Expr,
        op: &str,
        right: &Expr,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        self.translate_expr(left, out)?;
        out.push(' ');
        out.push_str(&self.translate_operator(op));
        out.push(' ');
        self.translate_expr(right, out)
    }

    /// Prefix and postfix operators. Targets without `++`/`--` get a
    /// compound assignment instead, which is only valid in statement
    /// position.
    fn translate_unary(
        &self,
        op: &str,
        operand: &Expr,
        postfix: bool,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        if !self.has_increment_operators() && (op == "++" || op == "--") {
            self.translate_expr(operand, out)?;
            out.push_str(if op == "++" { " += 1" } else { " -= 1" });
            return Ok(());
        }

        let op = self.translate_operator(op);
        if postfix {
            self.translate_expr(operand, out)?;
            out.push_str(&op);
        } else {
            out.push_str(&op);
            if op.ends_with(char::is_alphabetic) {
                out.push(' ');
            }
            self.translate_expr(operand, out)?;
        }
        Ok(())
    }

    fn translate_conditional(
        &self,
        test: &Expr,
        consequent: &Expr,
        alternate: &Expr,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        self.translate_expr(test, out)?;
        out.push_str(" ? ");
        self.translate_expr(consequent, out)?;
        out.push_str(" : ");
        self.translate_expr(alternate, out)
    }

    fn translate_cast(
        &self,
        ty: &TypeExpr,
        expr: &Expr,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        out.push('(');
        self.translate_type(ty, out)?;
        out.push_str(") ");
        self.translate_expr(expr, out)
    }

    fn translate_allocation(
        &self,
        ty: &TypeExpr,
        args: &[Expr],
        out: &mut String,
    ) -> Result<(), TranslateError> {
        out.push_str("new ");
        self.translate_type(ty, out)?;
        self.translate_arguments(args, out)
    }

    fn translate_instance_of(
        &self,
        expr: &Expr,
        ty: &TypeExpr,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        self.translate_expr(expr, out)?;
        out.push_str(" instanceof ");
        self.translate_type(ty, out)
    }

    /// Translate an expression into a fresh string.
    fn expr_to_string(&self, expr: &Expr) -> Result<String, TranslateError> {
        let mut out = String::new();
        self.translate_expr(expr, &mut out)?;
        Ok(out)
    }

    /// Translate a type expression into a fresh string.
    fn type_to_string(&self, ty: &TypeExpr) -> Result<String, TranslateError> {
        let mut out = String::new();
        self.translate_type(ty, &mut out)?;
        Ok(out)
    }
}

/// Literals as the reference syntax spells them. The absent value and
/// booleans go through identifier translation.
pub(crate) fn write_literal<T: Translator + ?Sized>(t: &T, lit: &Literal, out: &mut String) {
    match lit {
        Literal::Null => {
            out.push_str(&t.translate_identifier("null", TranslationContext::Variable));
        }
        Literal::Bool(value) => {
            let ident = if *value { "true" } else { "false" };
            out.push_str(&t.translate_identifier(ident, TranslationContext::Variable));
        }
        Literal::Int(text) | Literal::Float(text) => out.push_str(text),
        Literal::Char(c) => out.push_str(&quote(&c.to_string(), '\'')),
        Literal::String(s) => out.push_str(&quote(s, '"')),
    }
}
