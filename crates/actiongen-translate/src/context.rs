//! Syntactic role of an identifier.

/// Where an identifier appears, so one name can be rewritten differently
/// depending on its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranslationContext {
    Variable,
    Method,
    Parameter,
    Type,
}

impl TranslationContext {
    /// Whether identifiers in this role follow the target's value-naming
    /// convention. Type names keep their own casing.
    pub fn converts_case(self) -> bool {
        matches!(self, Self::Variable | Self::Method | Self::Parameter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_value_roles_convert_case() {
        assert!(TranslationContext::Variable.converts_case());
        assert!(TranslationContext::Method.converts_case());
        assert!(TranslationContext::Parameter.converts_case());
        assert!(!TranslationContext::Type.converts_case());
    }
}
