use thiserror::Error;

/// The two outcomes the generator reports itself instead of failing with an error chain.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaffoldError {
    #[error("Usage: {bin} <project-name>")]
    MissingProjectName { bin: &'static str },

    /// Operator declined to overwrite an existing directory.
    #[error("Aborted.")]
    Aborted,
}
