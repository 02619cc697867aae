//! Error types for scope resolution, storage, and configuration.

/// Failure resolving, providing, or mutating a context slice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    /// A consumer asked for a slice kind that no enclosing scope provides.
    #[error("no provider for `{slice}` above scope `{scope}`")]
    MissingProvider { slice: &'static str, scope: String },
    /// The scope already owns a slice of this kind.
    #[error("scope `{scope}` already provides `{slice}`")]
    DuplicateProvider { slice: &'static str, scope: String },
    /// A composer provider declared a requirement that is not mounted above it.
    #[error("provider `{provider}` requires `{slice}`, which is not provided above it")]
    MissingDependency { provider: String, slice: &'static str },
    /// The owning scope was unmounted; the binding is dead.
    #[error("`{slice}` was used after its scope unmounted")]
    Unmounted { slice: &'static str },
}

/// Failure talking to a key/value storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is available in this environment (SSR, private mode).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend refused the write.
    #[error("storage quota exceeded for key `{0}`")]
    QuotaExceeded(String),
    /// Any other backend failure, carried as text.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Failure parsing runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: `{value}`")]
    InvalidNumber { var: &'static str, value: String },
    #[error("tablet breakpoint ({tablet_min}px) must be below desktop breakpoint ({desktop_min}px)")]
    BreakpointOrder { tablet_min: u32, desktop_min: u32 },
    #[error("storage namespace must not be empty")]
    EmptyNamespace,
}
