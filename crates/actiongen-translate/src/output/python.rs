//! Python translator.
//!
//! Python keeps the object graph of the reference runtime (garbage-collected
//! references), so nodes and tokens stay plain classes. What changes is
//! spelling: `None`/`self`/`True`, word operators, snake_case values, and
//! type hints with `[...]` generics.

use crate::case;
use crate::context::TranslationContext;
use crate::output::{quote, split_numeric_suffix};
use crate::registry::Target;
use crate::settings::GrammarNames;
use crate::traits::{TranslateError, Translator, TranslatorConfig, write_literal};
use actiongen_ast::{Expr, Invocation, Literal, TypeExpr};

/// Python keywords that are legal identifiers in action code.
const KEYWORDS: &[&str] = &[
    "and", "as", "async", "await", "def", "del", "elif", "except", "from", "global", "in", "is",
    "lambda", "nonlocal", "not", "or", "pass", "raise", "with", "yield", "print", "exec",
];

pub struct PythonTranslator {
    names: GrammarNames,
    config: TranslatorConfig,
}

impl PythonTranslator {
    pub fn new(names: GrammarNames) -> Self {
        tracing::debug!(?names, "constructing python translator");
        Self {
            names,
            config: TranslatorConfig {
                is_typed: false,
                method_indent: 4,
                field_indent: 8,
                include_initializers: true,
            },
        }
    }

    fn write_builtin_call(
        &self,
        builtin: &str,
        arg: &Expr,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        out.push_str(builtin);
        out.push('(');
        self.translate_expr(arg, out)?;
        out.push(')');
        Ok(())
    }
}

impl Translator for PythonTranslator {
    fn target(&self) -> Target {
        Target::Python
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

    fn substitution(&self, ident: &str) -> Option<&'static str> {
        match ident {
            "true" => Some("True"),
            "false" => Some("False"),
            _ => None,
        }
    }

    fn parser_field(&self, field: &str) -> String {
        format!("self.{}", self.convert_case(field))
    }

    fn convert_case(&self, ident: &str) -> String {
        case::camel_to_snake(ident).to_lowercase()
    }

    fn escape_keyword(&self, ident: String) -> String {
        if KEYWORDS.contains(&ident.as_str()) {
            format!("{ident}_")
        } else {
            ident
        }
    }

    fn generic_delimiters(&self) -> (&'static str, &'static str) {
        ("[", "]")
    }

    fn array_of(&self, element: String) -> String {
        format!("list[{element}]")
    }

    fn has_increment_operators(&self) -> bool {
        false
    }

    fn translate_operator(&self, op: &str) -> String {
        match op {
            "&&" => "and",
            "||" => "or",
            "!" => "not",
            ">>>" => ">>",
            ">>>=" => ">>=",
            _ => op,
        }
        .to_string()
    }

    fn translate_type_name(&self, name: &str) -> String {
        match name {
            "boolean" => "bool",
            "Boolean" => "Optional[bool]",
            "int" | "long" | "short" | "byte" => "int",
            "Integer" | "Long" | "Short" | "Byte" => "Optional[int]",
            "float" | "double" => "float",
            "Float" | "Double" => "Optional[float]",
            "char" | "String" | "CharSequence" | "StringBuilder" => "str",
            "Character" => "Optional[str]",
            "void" => "None",
            "Object" => "object",
            "List" | "ArrayList" | "LinkedList" | "java.util.List" | "java.util.ArrayList" => {
                "list"
            }
            "Set" | "HashSet" | "LinkedHashSet" | "java.util.Set" | "java.util.HashSet" => "set",
            "Map" | "HashMap" | "LinkedHashMap" | "java.util.Map" | "java.util.HashMap" => "dict",
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
            ("toString", []) => self.write_builtin_call("str", receiver, out),
            ("valueOf", [arg]) if matches!(receiver, Expr::Name(n) if n == "String") => {
                self.write_builtin_call("str", arg, out)
            }
            ("size" | "length", []) => self.write_builtin_call("len", receiver, out),
            ("isEmpty", []) => {
                out.push_str("(not ");
                self.translate_expr(receiver, out)?;
                out.push(')');
                Ok(())
            }
            ("equals", [other]) if is_null(other) || is_null(receiver) => {
                self.translate_binary(receiver, "==", other, out)
            }
            ("equals", [other]) => {
                out.push('(');
                self.translate_expr(receiver, out)?;
                out.push_str(" == ");
                self.translate_expr(other, out)?;
                out.push(')');
                Ok(())
            }
            ("containsKey" | "contains", [key]) => {
                out.push('(');
                self.translate_expr(key, out)?;
                out.push_str(" in ");
                self.translate_expr(receiver, out)?;
                out.push(')');
                Ok(())
            }
            ("add", [item]) => {
                self.translate_receiver(receiver, out)?;
                out.push_str("append(");
                self.translate_expr(item, out)?;
                out.push(')');
                Ok(())
            }
            _ => {
                self.translate_receiver(receiver, out)?;
                out.push_str(&self.translate_identifier(&inv.method, TranslationContext::Method));
                self.translate_arguments(&inv.args, out)
            }
        }
    }

    fn translate_literal(&self, lit: &Literal, out: &mut String) {
        match lit {
            Literal::Int(text) | Literal::Float(text) => {
                out.push_str(split_numeric_suffix(text).0);
            }
            Literal::Char(c) => out.push_str(&quote(&c.to_string(), '"')),
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
            return self.write_builtin_call("len", object, out);
        }
        self.translate_receiver(object, out)?;
        out.push_str(&self.translate_identifier(member, TranslationContext::Variable));
        Ok(())
    }

    /// Comparisons against `None` use identity.
    fn translate_binary(
        &self,
        left: &Expr,
        op: &str,
        right: &Expr,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        let op = match op {
            "==" if is_null(left) || is_null(right) => "is".to_string(),
            "!=" if is_null(left) || is_null(right) => "is not".to_string(),
            _ => self.translate_operator(op),
        };
        self.translate_expr(left, out)?;
        out.push(' ');
        out.push_str(&op);
        out.push(' ');
        self.translate_expr(right, out)
    }

    /// `not` binds looser than comparisons, so it is always parenthesized.
    fn translate_unary(
        &self,
        op: &str,
        operand: &Expr,
        postfix: bool,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        match op {
            "!" => {
                out.push_str("(not ");
                self.translate_expr(operand, out)?;
                out.push(')');
                Ok(())
            }
            "++" => {
                self.translate_expr(operand, out)?;
                out.push_str(" += 1");
                Ok(())
            }
            "--" => {
                self.translate_expr(operand, out)?;
                out.push_str(" -= 1");
                Ok(())
            }
            _ if postfix => {
                self.translate_expr(operand, out)?;
                out.push_str(&self.translate_operator(op));
                Ok(())
            }
            _ => {
                out.push_str(&self.translate_operator(op));
                self.translate_expr(operand, out)
            }
        }
    }

    fn translate_conditional(
        &self,
        test: &Expr,
        consequent: &Expr,
        alternate: &Expr,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        self.translate_expr(consequent, out)?;
        out.push_str(" if ");
        self.translate_expr(test, out)?;
        out.push_str(" else ");
        self.translate_expr(alternate, out)
    }

    /// Casts vanish under dynamic typing.
    fn translate_cast(
        &self,
        _ty: &TypeExpr,
        expr: &Expr,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        self.translate_expr(expr, out)
    }

    fn translate_allocation(
        &self,
        ty: &TypeExpr,
        args: &[Expr],
        out: &mut String,
    ) -> Result<(), TranslateError> {
        // Constructors are called without generic arguments.
        self.translate_type(&TypeExpr::simple(ty.name.clone()), out)?;
        self.translate_arguments(args, out)
    }

    fn translate_instance_of(
        &self,
        expr: &Expr,
        ty: &TypeExpr,
        out: &mut String,
    ) -> Result<(), TranslateError> {
        out.push_str("isinstance(");
        self.translate_expr(expr, out)?;
        out.push_str(", ");
        self.translate_type(&TypeExpr::simple(ty.name.clone()), out)?;
        out.push(')');
        Ok(())
    }
}

fn is_null(expr: &Expr) -> bool {
    matches!(expr, Expr::Literal(Literal::Null))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> PythonTranslator {
        PythonTranslator::new(GrammarNames {
            lexer_class: "ArithLexer".into(),
            parser_class: "ArithParser".into(),
            base_token_class: "Token".into(),
            node_package: "pkg".into(),
        })
    }

    fn emit(expr: &Expr) -> String {
        translator().expr_to_string(expr).unwrap()
    }

    #[test]
    fn test_identifiers() {
        let t = translator();
        assert_eq!(t.translate_identifier("null", TranslationContext::Variable), "None");
        assert_eq!(t.translate_identifier("this", TranslationContext::Variable), "self");
        assert_eq!(t.translate_identifier("true", TranslationContext::Variable), "True");
        assert_eq!(
            t.translate_identifier("myLocalValue", TranslationContext::Variable),
            "my_local_value"
        );
        assert_eq!(
            t.translate_identifier("lastConsumedToken", TranslationContext::Variable),
            "self.last_consumed_token"
        );
        assert_eq!(
            t.translate_identifier("LEXER_CLASS", TranslationContext::Type),
            "ArithLexer"
        );
        assert_eq!(t.translate_identifier("pkg.Node123", TranslationContext::Variable), "Node123");
    }

    #[test]
    fn test_keywords_escaped() {
        let t = translator();
        assert_eq!(t.translate_identifier("lambda", TranslationContext::Variable), "lambda_");
        assert_eq!(t.translate_identifier("isIn", TranslationContext::Method), "is_in");
        assert_eq!(t.translate_identifier("pass", TranslationContext::Parameter), "pass_");
    }

    #[test]
    fn test_type_hints() {
        let t = translator();
        assert_eq!(t.translate_type_name("boolean"), "bool");
        assert_eq!(t.translate_type_name("Boolean"), "Optional[bool]");
        assert_eq!(t.translate_type_name("Node"), "Node");
        assert_eq!(t.translate_type_name("MyCustomType"), "MyCustomType");
        let map = TypeExpr::generic(
            "Map",
            vec![
                TypeExpr::simple("String"),
                TypeExpr::generic("List", vec![TypeExpr::simple("Token")]),
            ],
        );
        assert_eq!(t.type_to_string(&map).unwrap(), "dict[str, list[Token]]");
        assert_eq!(
            t.type_to_string(&TypeExpr::simple("int").array()).unwrap(),
            "list[int]"
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            emit(&Expr::binary(Expr::name("a"), "&&", Expr::prefix("!", Expr::name("b")))),
            "a and (not b)"
        );
        assert_eq!(emit(&Expr::binary(Expr::name("x"), "==", Expr::null())), "x is None");
        assert_eq!(emit(&Expr::binary(Expr::name("x"), "!=", Expr::null())), "x is not None");
        assert_eq!(emit(&Expr::postfix(Expr::name("depth"), "++")), "depth += 1");
    }

    #[test]
    fn test_negation_keeps_precedence() {
        assert_eq!(
            emit(&Expr::binary(Expr::prefix("!", Expr::name("done")), "==", Expr::name("flag"))),
            "(not done) == flag"
        );
        assert_eq!(
            emit(&Expr::binary(
                Expr::method_call(Expr::name("items"), "isEmpty", vec![]),
                "==",
                Expr::name("flag"),
            )),
            "(not items) == flag"
        );
        assert_eq!(emit(&Expr::prefix("-", Expr::name("x"))), "-x");
        assert_eq!(emit(&Expr::prefix("--", Expr::name("depth"))), "depth -= 1");
    }

    #[test]
    fn test_equals_null_uses_identity() {
        assert_eq!(
            emit(&Expr::method_call(Expr::name("x"), "equals", vec![Expr::null()])),
            "x is None"
        );
        assert_eq!(
            emit(&Expr::method_call(Expr::name("a"), "equals", vec![Expr::name("b")])),
            "(a == b)"
        );
    }

    #[test]
    fn test_invocations() {
        assert_eq!(
            emit(&Expr::method_call(Expr::name("tok"), "toString", vec![])),
            "str(tok)"
        );
        assert_eq!(
            emit(&Expr::method_call(Expr::name("String"), "valueOf", vec![Expr::int("3")])),
            "str(3)"
        );
        assert_eq!(
            emit(&Expr::method_call(Expr::name("children"), "size", vec![])),
            "len(children)"
        );
        assert_eq!(
            emit(&Expr::method_call(Expr::name("names"), "add", vec![Expr::name("n")])),
            "names.append(n)"
        );
        assert_eq!(
            emit(&Expr::method_call(Expr::name("seen"), "containsKey", vec![Expr::name("k")])),
            "(k in seen)"
        );
        assert_eq!(emit(&Expr::call("peekNode", vec![])), "self.peek_node()");
    }

    #[test]
    fn test_lowered_expressions() {
        assert_eq!(
            emit(&Expr::conditional(Expr::name("ok"), Expr::int("1"), Expr::int("0"))),
            "1 if ok else 0"
        );
        assert_eq!(
            emit(&Expr::cast(TypeExpr::simple("Token"), Expr::name("n"))),
            "n"
        );
        assert_eq!(
            emit(&Expr::allocation(
                TypeExpr::generic("ArrayList", vec![TypeExpr::simple("Node")]),
                vec![],
            )),
            "list()"
        );
        assert_eq!(
            emit(&Expr::instance_of(Expr::name("n"), TypeExpr::simple("pkg.Primary"))),
            "isinstance(n, Primary)"
        );
        assert_eq!(emit(&Expr::member(Expr::name("items"), "length")), "len(items)");
        assert_eq!(emit(&Expr::int("10L")), "10");
        assert_eq!(emit(&Expr::Literal(Literal::Char('a'))), "\"a\"");
        assert_eq!(emit(&Expr::bool(false)), "False");
    }
}
