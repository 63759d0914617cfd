//! The outcome of resolving a template request.

use serde::Serialize;

use super::{TemplateName, TemplateParams, TemplatePath};

/// A resolved template together with the parameters it will be rendered
/// with. This is what gets handed to whatever fetches and renders the
/// template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Display name of the template.
    pub name: String,
    /// Kind of location (`repository`, `url`, ...).
    pub kind: &'static str,
    /// Path, URL, or raw download URL.
    pub location: String,
    /// Shorthand form for repository templates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    /// Effective template parameters.
    pub params: TemplateParams,
}

impl Resolution {
    /// Build a resolution from a parsed name and its parameters.
    pub fn new(template: &TemplateName, params: TemplateParams) -> Self {
        let path = template.path();
        let repository = match path {
            TemplatePath::Repo(repo) => Some(repo.to_string()),
            _ => None,
        };

        Self {
            name: template.prefix().to_string(),
            kind: path.kind(),
            location: path.location(),
            repository,
            params,
        }
    }
}
