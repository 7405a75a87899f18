use parambits_core::FieldError;

/// Errors from laying out a definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyzeError {
    #[error("{definition}.{field}: {source}")]
    Field {
        definition: String,
        field: String,
        source: FieldError,
    },

    #[error("{definition}.{field}: bit offset exceeds the 32-bit record offset range")]
    OffsetOverflow { definition: String, field: String },

    #[error("{definition}: too many tracked fields for a 32-bit uid")]
    UidOverflow { definition: String },
}
