use crate::signature::DeclarationSignature;
use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// A file to rewrite plus the declarations it holds, in the order they are
/// stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetFile {
    pub path: Utf8PathBuf,
    pub declarations: Vec<DeclarationSignature>,
}

impl TargetFile {
    pub fn new(
        path: impl Into<Utf8PathBuf>,
        declarations: impl IntoIterator<Item = DeclarationSignature>,
    ) -> Self {
        Self {
            path: path.into(),
            declarations: declarations.into_iter().collect(),
        }
    }

    /// Convenience constructor for a file holding a single declaration.
    pub fn single(path: impl Into<Utf8PathBuf>, name: &str, element_type: &str) -> Self {
        Self::new(path, [DeclarationSignature::new(name, element_type)])
    }
}

/// The complete, ordered set of targets for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StripConfig {
    #[serde(rename = "target", default)]
    pub targets: Vec<TargetFile>,
}

impl StripConfig {
    pub fn new(targets: Vec<TargetFile>) -> Self {
        Self { targets }
    }

    /// Total number of declaration signatures across all targets.
    pub fn declaration_count(&self) -> usize {
        self.targets.iter().map(|t| t.declarations.len()).sum()
    }

    /// Validate the configuration before any file is touched.
    ///
    /// Targets must be disjoint files, every target must name at least one
    /// declaration, and signatures must be unique within their file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.targets.is_empty() {
            return Err(ConfigError::NoTargets);
        }

        let mut paths = HashSet::new();
        for target in &self.targets {
            if target.path.as_str().trim().is_empty() {
                return Err(ConfigError::EmptyPath);
            }
            if !paths.insert(target.path.as_path()) {
                return Err(ConfigError::DuplicateTarget {
                    path: target.path.clone(),
                });
            }
            if target.declarations.is_empty() {
                return Err(ConfigError::NoDeclarations {
                    path: target.path.clone(),
                });
            }

            let mut seen = HashSet::new();
            for sig in &target.declarations {
                sig.validate()?;
                if !seen.insert(sig) {
                    return Err(ConfigError::DuplicateSignature {
                        path: target.path.clone(),
                        signature: sig.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Configuration-level problems. These are the only errors that abort a run.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no targets configured")]
    NoTargets,

    #[error("target path is empty")]
    EmptyPath,

    #[error("target {path} is listed more than once")]
    DuplicateTarget { path: Utf8PathBuf },

    #[error("target {path} names no declarations")]
    NoDeclarations { path: Utf8PathBuf },

    #[error("declaration `{signature}` is listed more than once for {path}")]
    DuplicateSignature { path: Utf8PathBuf, signature: String },

    #[error("malformed declaration `{input}`: expected `name: Type`")]
    MalformedSignature { input: String },

    #[error("invalid declaration name `{name}`: {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("invalid element type `{element_type}` for `{name}`: {reason}")]
    InvalidElementType {
        name: String,
        element_type: String,
        reason: &'static str,
    },
}
