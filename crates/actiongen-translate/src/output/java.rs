//! Java translator.
//!
//! Java is the syntax action code is written in, so every rule keeps its
//! default: operators, type names and calls pass through untouched. Only
//! the framework pseudo-identifiers and node-package references change.

use crate::registry::Target;
use crate::settings::GrammarNames;
use crate::traits::{Translator, TranslatorConfig};

pub struct JavaTranslator {
    names: GrammarNames,
    config: TranslatorConfig,
}

impl JavaTranslator {
    pub fn new(names: GrammarNames) -> Self {
        tracing::debug!(?names, "constructing java translator");
        Self {
            names,
            config: TranslatorConfig {
                is_typed: true,
                method_indent: 4,
                field_indent: 4,
                include_initializers: true,
            },
        }
    }
}

impl Translator for JavaTranslator {
    fn target(&self) -> Target {
        Target::Java
    }

    fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    fn names(&self) -> &GrammarNames {
        &self.names
    }
}
