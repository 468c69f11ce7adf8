//! Registry of target languages.
//!
//! The set of targets is closed; one is selected per generation run and
//! produces the only translator used for that run.

use crate::output::{JavaTranslator, PythonTranslator, RustTranslator};
use crate::settings::{GrammarNames, Settings, SettingsError};
use crate::traits::Translator;
use std::fmt;
use std::str::FromStr;

/// Error for a target name no backend answers to.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown target language: {0}")]
pub struct UnknownTarget(pub String);

/// Error raised while selecting a translator.
#[derive(Debug, thiserror::Error)]
pub enum SelectError {
    #[error(transparent)]
    Target(#[from] UnknownTarget),

    #[error(transparent)]
    Settings(#[from] SettingsError),
}

/// A target language for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Java,
    Python,
    Rust,
}

impl Target {
    pub const ALL: [Target; 3] = [Target::Java, Target::Python, Target::Rust];

    /// Language identifier (e.g., "java", "rust").
    pub fn language(self) -> &'static str {
        match self {
            Target::Java => "java",
            Target::Python => "python",
            Target::Rust => "rust",
        }
    }

    /// File extension for generated code.
    pub fn extension(self) -> &'static str {
        match self {
            Target::Java => "java",
            Target::Python => "py",
            Target::Rust => "rs",
        }
    }

    /// Construct this target's translator for one run.
    pub fn translator(self, names: GrammarNames) -> Box<dyn Translator> {
        match self {
            Target::Java => Box::new(JavaTranslator::new(names)),
            Target::Python => Box::new(PythonTranslator::new(names)),
            Target::Rust => Box::new(RustTranslator::new(names)),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.language())
    }
}

impl FromStr for Target {
    type Err = UnknownTarget;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        Target::ALL
            .into_iter()
            .find(|t| t.language() == lower || t.extension() == lower)
            .ok_or_else(|| UnknownTarget(s.to_string()))
    }
}

/// Resolve a target by name and build its translator from raw settings.
pub fn translator_for(
    language: &str,
    settings: &Settings,
) -> Result<Box<dyn Translator>, SelectError> {
    let target: Target = language.parse()?;
    let names = GrammarNames::try_from(settings)?;
    Ok(target.translator(names))
}

/// All supported language identifiers.
pub fn languages() -> Vec<&'static str> {
    Target::ALL.iter().map(|t| t.language()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings {
            grammar_name: Some("Arith".into()),
            parser_package: Some("org.example".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_target_lookup() {
        assert_eq!("rust".parse::<Target>(), Ok(Target::Rust));
        assert_eq!("RS".parse::<Target>(), Ok(Target::Rust));
        assert_eq!("py".parse::<Target>(), Ok(Target::Python));
        assert_eq!("Java".parse::<Target>(), Ok(Target::Java));
        assert_eq!(
            "cobol".parse::<Target>(),
            Err(UnknownTarget("cobol".into()))
        );
    }

    #[test]
    fn test_languages() {
        assert_eq!(languages(), ["java", "python", "rust"]);
        assert_eq!(Target::Python.to_string(), "python");
    }

    #[test]
    fn test_translator_for() {
        for language in languages() {
            let translator = translator_for(language, &settings()).unwrap();
            assert_eq!(translator.target().language(), language);
            assert_eq!(translator.names().parser_class, "ArithParser");
        }
    }

    #[test]
    fn test_translator_for_errors() {
        let err = translator_for("cobol", &settings()).err().unwrap();
        assert!(matches!(err, SelectError::Target(_)));

        let err = translator_for("rust", &Settings::default()).err().unwrap();
        assert!(matches!(
            err,
            SelectError::Settings(SettingsError::MissingName { .. })
        ));
    }
}
