//! Template name resolution.
//!
//! A template name selects the scaffold a new project is generated from.
//! The same string can look like several things at once, so the grammars
//! are tried in a fixed order and the first match wins:
//!
//! 1. Repository shorthand (`github:user/foo`)
//! 2. Absolute URL (`https://example.com/foo.hsfiles`)
//! 3. Absolute file path (`/srv/templates/foo`)
//! 4. Relative file path (`foo`)
//!
//! # Example
//!
//! ```
//! use scaffold::template::{parse_template_name, TemplatePath};
//!
//! let name = parse_template_name("github:foo").unwrap();
//! assert_eq!(name.prefix(), "github:foo");
//! assert!(matches!(name.path(), TemplatePath::Repo(_)));
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::grammar::{parse_abs_file, parse_rel_file, parse_url};
use super::repo::{parse_repo_path, RepoTemplatePath};
use super::{DEFAULT_TEMPLATE, TEMPLATE_NAME_HELP, TEMPLATE_SUFFIX};
use crate::error::{Result, ScaffoldError};

/// Where a template's content comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemplatePath {
    /// Absolute path to a template file.
    Abs(PathBuf),
    /// Path relative to the working directory or a template repository.
    Rel(PathBuf),
    /// Absolute URL, stored as given.
    Url(String),
    /// Template on a code-hosting service.
    Repo(RepoTemplatePath),
}

impl TemplatePath {
    /// Short label for the kind of location.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Abs(_) => "absolute path",
            Self::Rel(_) => "relative path",
            Self::Url(_) => "url",
            Self::Repo(_) => "repository",
        }
    }

    /// The location rendered as text. Repository templates render as the
    /// raw download URL.
    pub fn location(&self) -> String {
        match self {
            Self::Abs(path) | Self::Rel(path) => path.display().to_string(),
            Self::Url(url) => url.clone(),
            Self::Repo(repo) => repo.raw_url(),
        }
    }
}

/// A parsed template name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TemplateName {
    prefix: String,
    path: TemplatePath,
}

impl TemplateName {
    /// The display name. Never carries the `.hsfiles` suffix, except for
    /// URLs, whose display name is the full URL.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Where the template lives.
    pub fn path(&self) -> &TemplatePath {
        &self.path
    }

    /// Split into display name and location.
    pub fn into_parts(self) -> (String, TemplatePath) {
        (self.prefix, self.path)
    }

    /// The template used when none is requested.
    pub fn default_template() -> Self {
        Self {
            prefix: DEFAULT_TEMPLATE.to_string(),
            path: TemplatePath::Rel(PathBuf::from(format!(
                "{}{}",
                DEFAULT_TEMPLATE, TEMPLATE_SUFFIX
            ))),
        }
    }
}

type Grammar = for<'a> fn(&Candidate<'a>) -> Option<TemplateName>;

/// Grammars in priority order.
const GRAMMARS: [(&str, Grammar); 4] = [
    ("repository", repo_grammar),
    ("url", url_grammar),
    ("absolute path", abs_grammar),
    ("relative path", rel_grammar),
];

/// The raw input together with its normalized forms.
struct Candidate<'a> {
    raw: &'a str,
    prefix: &'a str,
    file: String,
}

impl<'a> Candidate<'a> {
    fn new(raw: &'a str) -> Self {
        match raw.strip_suffix(TEMPLATE_SUFFIX) {
            Some(prefix) => Self {
                raw,
                prefix,
                file: raw.to_string(),
            },
            None => Self {
                raw,
                prefix: raw,
                file: format!("{}{}", raw, TEMPLATE_SUFFIX),
            },
        }
    }

    fn named(&self, path: TemplatePath) -> TemplateName {
        TemplateName {
            prefix: self.prefix.to_string(),
            path,
        }
    }
}

fn repo_grammar(candidate: &Candidate<'_>) -> Option<TemplateName> {
    let mut repo = parse_repo_path(&candidate.file)?;
    if let Some(template) = repo.template.strip_suffix(TEMPLATE_SUFFIX) {
        repo.template = template.to_string();
    }
    if repo.user.is_empty() || repo.template.is_empty() {
        return None;
    }
    Some(candidate.named(TemplatePath::Repo(repo)))
}

fn url_grammar(candidate: &Candidate<'_>) -> Option<TemplateName> {
    parse_url(candidate.raw)?;
    Some(TemplateName {
        prefix: candidate.raw.to_string(),
        path: TemplatePath::Url(candidate.raw.to_string()),
    })
}

fn abs_grammar(candidate: &Candidate<'_>) -> Option<TemplateName> {
    parse_abs_file(&candidate.file).map(|path| candidate.named(TemplatePath::Abs(path)))
}

fn rel_grammar(candidate: &Candidate<'_>) -> Option<TemplateName> {
    parse_rel_file(&candidate.file).map(|path| candidate.named(TemplatePath::Rel(path)))
}

/// Resolve a raw template name.
///
/// # Errors
///
/// Returns [`ScaffoldError::InvalidTemplateName`] when no grammar accepts the
/// input. Its message is the same for every input.
pub fn parse_template_name(raw: &str) -> Result<TemplateName> {
    let candidate = Candidate::new(raw);

    for (label, grammar) in GRAMMARS {
        match grammar(&candidate) {
            Some(name) => {
                tracing::debug!("Template name '{}' resolved as {}", raw, label);
                return Ok(name);
            }
            None => tracing::trace!("Template name '{}' is not a {}", raw, label),
        }
    }

    Err(ScaffoldError::InvalidTemplateName {
        input: raw.to_string(),
    })
}

impl FromStr for TemplateName {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self> {
        parse_template_name(s)
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.prefix)
    }
}

impl Serialize for TemplateName {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.prefix)
    }
}

impl<'de> Deserialize<'de> for TemplateName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_template_name(&raw).map_err(|_| serde::de::Error::custom(TEMPLATE_NAME_HELP))
    }
}
