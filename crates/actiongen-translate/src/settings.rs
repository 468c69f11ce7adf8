//! Grammar settings visible to translators.
//!
//! Settings come from the grammar's options (or a TOML file such as
//! `actiongen.toml`):
//!
//! ```toml
//! grammar_name = "Arithmetic"
//! parser_package = "org.example.arith"
//! # node_package = "org.example.arith.ast"
//! ```
//!
//! Translators never read [`Settings`] directly. They are constructed with
//! [`GrammarNames`], the validated view in which every name a
//! pseudo-identifier rule depends on is known to be present.

use serde::Deserialize;
use std::path::Path;

/// Error raised while loading or resolving settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("missing required setting `{key}`")]
    MissingName { key: &'static str },
}

/// Raw settings as configured for a grammar.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Grammar name; class names derive from it when not set explicitly.
    pub grammar_name: Option<String>,
    /// Package of the generated parser; the node package derives from it.
    pub parser_package: Option<String>,
    pub lexer_class_name: Option<String>,
    pub parser_class_name: Option<String>,
    pub base_token_class_name: Option<String>,
    pub node_package: Option<String>,
}

impl Settings {
    /// Parse settings from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn lexer_class_name(&self) -> Option<String> {
        self.lexer_class_name.clone().or_else(|| {
            self.grammar_name
                .as_ref()
                .map(|name| format!("{name}Lexer"))
        })
    }

    pub fn parser_class_name(&self) -> Option<String> {
        self.parser_class_name.clone().or_else(|| {
            self.grammar_name
                .as_ref()
                .map(|name| format!("{name}Parser"))
        })
    }

    pub fn base_token_class_name(&self) -> String {
        self.base_token_class_name
            .clone()
            .unwrap_or_else(|| "Token".to_string())
    }

    pub fn node_package(&self) -> Option<String> {
        self.node_package.clone().or_else(|| {
            self.parser_package
                .as_ref()
                .map(|package| format!("{package}.ast"))
        })
    }
}

/// Infrastructure classes generated alongside every parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfrastructureClass {
    Lexer,
    Parser,
    BaseToken,
}

/// Configured names, fixed for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarNames {
    pub lexer_class: String,
    pub parser_class: String,
    pub base_token_class: String,
    pub node_package: String,
}

impl GrammarNames {
    pub fn class_name(&self, class: InfrastructureClass) -> &str {
        match class {
            InfrastructureClass::Lexer => &self.lexer_class,
            InfrastructureClass::Parser => &self.parser_class,
            InfrastructureClass::BaseToken => &self.base_token_class,
        }
    }

    /// Which infrastructure class, if any, `ident` refers to.
    ///
    /// Matches both the template placeholders (`LEXER_CLASS`) and the
    /// configured class names themselves.
    pub fn infrastructure_class(&self, ident: &str) -> Option<InfrastructureClass> {
        if ident == "LEXER_CLASS" || ident == self.lexer_class {
            Some(InfrastructureClass::Lexer)
        } else if ident == "PARSER_CLASS" || ident == self.parser_class {
            Some(InfrastructureClass::Parser)
        } else if ident == "BASE_TOKEN_CLASS" || ident == self.base_token_class {
            Some(InfrastructureClass::BaseToken)
        } else {
            None
        }
    }

    /// Strip the node-package qualifier (`pkg.Node123` → `Node123`).
    ///
    /// Also recognizes the `NODE_PACKAGE.` template placeholder.
    pub fn strip_node_package<'a>(&self, ident: &'a str) -> Option<&'a str> {
        ident
            .strip_prefix(self.node_package.as_str())
            .and_then(|rest| rest.strip_prefix('.'))
            .or_else(|| ident.strip_prefix("NODE_PACKAGE."))
            .filter(|rest| !rest.is_empty())
    }
}

impl TryFrom<&Settings> for GrammarNames {
    type Error = SettingsError;

    fn try_from(settings: &Settings) -> Result<Self, Self::Error> {
        Ok(Self {
            lexer_class: settings
                .lexer_class_name()
                .ok_or(SettingsError::MissingName {
                    key: "lexer_class_name",
                })?,
            parser_class: settings
                .parser_class_name()
                .ok_or(SettingsError::MissingName {
                    key: "parser_class_name",
                })?,
            base_token_class: settings.base_token_class_name(),
            node_package: settings
                .node_package()
                .ok_or(SettingsError::MissingName {
                    key: "node_package",
                })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> GrammarNames {
        GrammarNames {
            lexer_class: "ArithLexer".into(),
            parser_class: "ArithParser".into(),
            base_token_class: "Token".into(),
            node_package: "pkg".into(),
        }
    }

    #[test]
    fn test_names_derive_from_grammar() {
        let settings = Settings::from_toml_str(
            r#"
grammar_name = "Arith"
parser_package = "org.example"
"#,
        )
        .unwrap();
        let names = GrammarNames::try_from(&settings).unwrap();
        assert_eq!(names.lexer_class, "ArithLexer");
        assert_eq!(names.parser_class, "ArithParser");
        assert_eq!(names.base_token_class, "Token");
        assert_eq!(names.node_package, "org.example.ast");
    }

    #[test]
    fn test_explicit_names_win() {
        let settings = Settings {
            grammar_name: Some("Arith".into()),
            lexer_class_name: Some("Scanner".into()),
            base_token_class_name: Some("Tok".into()),
            node_package: Some("nodes".into()),
            ..Default::default()
        };
        let names = GrammarNames::try_from(&settings).unwrap();
        assert_eq!(names.lexer_class, "Scanner");
        assert_eq!(names.parser_class, "ArithParser");
        assert_eq!(names.base_token_class, "Tok");
        assert_eq!(names.node_package, "nodes");
    }

    #[test]
    fn test_missing_name_is_an_error() {
        let settings = Settings {
            grammar_name: Some("Arith".into()),
            ..Default::default()
        };
        let err = GrammarNames::try_from(&settings).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::MissingName {
                key: "node_package"
            }
        ));

        let err = GrammarNames::try_from(&Settings::default()).unwrap_err();
        assert_eq!(err.to_string(), "missing required setting `lexer_class_name`");
    }

    #[test]
    fn test_invalid_toml() {
        let err = Settings::from_toml_str("grammar_name = ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_infrastructure_class_lookup() {
        let names = names();
        assert_eq!(
            names.infrastructure_class("LEXER_CLASS"),
            Some(InfrastructureClass::Lexer)
        );
        assert_eq!(
            names.infrastructure_class("ArithParser"),
            Some(InfrastructureClass::Parser)
        );
        assert_eq!(
            names.infrastructure_class("BASE_TOKEN_CLASS"),
            Some(InfrastructureClass::BaseToken)
        );
        assert_eq!(names.infrastructure_class("Arith"), None);
    }

    #[test]
    fn test_strip_node_package() {
        let names = names();
        assert_eq!(names.strip_node_package("pkg.Node123"), Some("Node123"));
        assert_eq!(names.strip_node_package("NODE_PACKAGE.Primary"), Some("Primary"));
        assert_eq!(names.strip_node_package("pkgx.Node123"), None);
        assert_eq!(names.strip_node_package("pkg."), None);
        assert_eq!(names.strip_node_package("Node123"), None);
    }
}
