//! Translation of grammar action code into target languages.
//!
//! Grammar rules carry action code written once, in a reference syntax.
//! `actiongen-translate` rewrites parsed fragments of that code (names,
//! types, calls) into each target language the parser generator emits.
//! It maps syntax and a small set of idioms, not program semantics.
//!
//! # Architecture
//!
//! ```text
//! Front-end               Core                     Targets
//! ──────────────     ──────────────────     ─────────────────────
//!                                           ┌─> JavaTranslator
//! action code ──> Expr / TypeExpr ──> Target ┼─> PythonTranslator
//!                 (actiongen-ast)  (registry)└─> RustTranslator
//! ```
//!
//! Exactly one [`Translator`] is selected per generation run and every
//! emission call goes through it.
//!
//! # Example
//!
//! ```
//! use actiongen_translate::{Expr, Settings, TranslationContext, translator_for};
//!
//! let settings = Settings::from_toml_str(
//!     r#"
//!     grammar_name = "Arith"
//!     parser_package = "org.example.arith"
//!     "#,
//! )?;
//! let translator = translator_for("python", &settings)?;
//!
//! assert_eq!(
//!     translator.translate_identifier("lastConsumedToken", TranslationContext::Variable),
//!     "self.last_consumed_token"
//! );
//!
//! let call = Expr::method_call(Expr::name("tok"), "toString", vec![]);
//! assert_eq!(translator.expr_to_string(&call)?, "str(tok)");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod case;
pub mod context;
pub mod output;
pub mod registry;
pub mod settings;
pub mod traits;

// Re-exports: action-AST
pub use actiongen_ast::{Expr, Invocation, Literal, TypeExpr};

// Re-exports: core types
pub use context::TranslationContext;
pub use settings::{GrammarNames, InfrastructureClass, Settings, SettingsError};
pub use traits::{TranslateError, Translator, TranslatorConfig};

// Re-exports: registry
pub use registry::{SelectError, Target, UnknownTarget, languages, translator_for};

// Re-exports: built-in backends
pub use output::{JavaTranslator, PythonTranslator, RustTranslator};
