//! Input from user but after parse

use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use crate::args::AppArgs;
use crate::error::ScaffoldError;
use crate::utils::absolute_path;

// Contains parsed information from user.
#[derive(Debug, Clone, PartialEq)]
pub struct UserParsedInput {
    name: String,
    destination: PathBuf,
    overwrite: bool,
    verbose: bool,
}

impl UserParsedInput {
    /// Validate `args` for the binary `bin`. A missing or empty project name
    /// is [`ScaffoldError::MissingProjectName`].
    pub fn try_from_args(args: &AppArgs, bin: &'static str) -> Result<Self> {
        let name = match args.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => return Err(ScaffoldError::MissingProjectName { bin }.into()),
        };

        let destination = match &args.destination {
            Some(path) => absolute_path(path)?,
            None => env::current_dir().context("cannot read the current directory")?,
        };

        Ok(Self {
            name,
            destination,
            overwrite: args.overwrite,
            verbose: args.verbose,
        })
    }

    pub fn new(name: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            destination: destination.into(),
            overwrite: false,
            verbose: false,
        }
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn destination(&self) -> &PathBuf {
        &self.destination
    }

    pub const fn overwrite(&self) -> bool {
        self.overwrite
    }

    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }
}
