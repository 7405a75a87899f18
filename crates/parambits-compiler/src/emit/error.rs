/// Errors from linking and writing a blob.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    #[error("blob of {size} bytes exceeds the 32-bit offset range")]
    BlobTooLarge { size: u64 },

    #[error("definition name {name:?} contains a NUL byte")]
    NameContainsNul { name: String },
}
