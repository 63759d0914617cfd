//! Repository shorthand grammar.
//!
//! Templates hosted on a code-hosting service are written as
//! `service:user/name` (or `service:name` when the service has a default
//! user). The service token is case-sensitive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::TEMPLATE_SUFFIX;

/// Repository that holds templates on every supported service.
const TEMPLATES_REPO: &str = "stack-templates";

/// Branch the raw template files are served from.
const TEMPLATES_BRANCH: &str = "master";

/// Code-hosting services that can serve templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoService {
    Github,
    Gitlab,
    Bitbucket,
}

impl RepoService {
    /// Every service, in tag order.
    pub const ALL: [RepoService; 3] = [Self::Github, Self::Gitlab, Self::Bitbucket];

    /// The token used in shorthand strings (`github`, `gitlab`, `bitbucket`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Gitlab => "gitlab",
            Self::Bitbucket => "bitbucket",
        }
    }
}

impl fmt::Display for RepoService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepoService {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "github" => Ok(Self::Github),
            "gitlab" => Ok(Self::Gitlab),
            "bitbucket" => Ok(Self::Bitbucket),
            _ => Err(format!("unknown repository service: {}", s)),
        }
    }
}

/// Fallback user for a `service:name` shorthand with no explicit user.
///
/// Only GitHub has one.
pub fn default_repo_user(service: RepoService) -> Option<&'static str> {
    match service {
        RepoService::Github => Some("commercialhaskell"),
        RepoService::Gitlab | RepoService::Bitbucket => None,
    }
}

/// A template stored in a user's template repository on a hosting service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepoTemplatePath {
    /// Hosting service.
    pub service: RepoService,
    /// Account that owns the template repository.
    pub user: String,
    /// Template identifier on that service.
    pub template: String,
}

impl RepoTemplatePath {
    /// Create a repository template reference.
    pub fn new(service: RepoService, user: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            service,
            user: user.into(),
            template: template.into(),
        }
    }

    /// Name of the template file inside the repository.
    pub fn file_name(&self) -> String {
        if self.template.ends_with(TEMPLATE_SUFFIX) {
            self.template.clone()
        } else {
            format!("{}{}", self.template, TEMPLATE_SUFFIX)
        }
    }

    /// Location of the raw template file on the hosting service.
    pub fn raw_url(&self) -> String {
        let file = self.file_name();
        match self.service {
            RepoService::Github => format!(
                "https://raw.githubusercontent.com/{}/{}/{}/{}",
                self.user, TEMPLATES_REPO, TEMPLATES_BRANCH, file
            ),
            RepoService::Gitlab => format!(
                "https://gitlab.com/{}/{}/raw/{}/{}",
                self.user, TEMPLATES_REPO, TEMPLATES_BRANCH, file
            ),
            RepoService::Bitbucket => format!(
                "https://bitbucket.org/{}/{}/raw/{}/{}",
                self.user, TEMPLATES_REPO, TEMPLATES_BRANCH, file
            ),
        }
    }
}

impl fmt::Display for RepoTemplatePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}/{}", self.service, self.user, self.template)
    }
}

/// Parse `service:user/name` or `service:name`.
///
/// Returns `None` for anything that is not repository shorthand so the
/// caller can try another grammar. `user` and `name` are taken verbatim.
pub fn parse_repo_path(s: &str) -> Option<RepoTemplatePath> {
    let parts: Vec<&str> = s.split(':').collect();
    let [service, rest] = parts.as_slice() else {
        return None;
    };
    let service: RepoService = service.parse().ok()?;

    let segments: Vec<&str> = rest.split('/').collect();
    match segments.as_slice() {
        [user, name] => Some(RepoTemplatePath::new(service, *user, *name)),
        [name] => {
            let user = default_repo_user(service)?;
            Some(RepoTemplatePath::new(service, user, *name))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_service_user_and_name() {
        let repo = parse_repo_path("gitlab:alice/bar.hsfiles").unwrap();
        assert_eq!(repo.service, RepoService::Gitlab);
        assert_eq!(repo.user, "alice");
        assert_eq!(repo.template, "bar.hsfiles");
    }

    #[test]
    fn github_falls_back_to_default_user() {
        let repo = parse_repo_path("github:foo.hsfiles").unwrap();
        assert_eq!(repo.user, "commercialhaskell");
        assert_eq!(repo.template, "foo.hsfiles");
    }

    #[test]
    fn gitlab_and_bitbucket_have_no_default_user() {
        assert!(parse_repo_path("gitlab:foo.hsfiles").is_none());
        assert!(parse_repo_path("bitbucket:foo.hsfiles").is_none());
    }

    #[test]
    fn service_token_is_case_sensitive() {
        assert!(parse_repo_path("GitHub:user/foo").is_none());
        assert!(parse_repo_path("GITLAB:user/foo").is_none());
    }

    #[test]
    fn unknown_service_is_not_a_match() {
        assert!(parse_repo_path("sourcehut:user/foo").is_none());
    }

    #[test]
    fn wrong_colon_arity_is_not_a_match() {
        assert!(parse_repo_path("foo").is_none());
        assert!(parse_repo_path("github:user:foo").is_none());
        assert!(parse_repo_path("https://github.com/user/foo").is_none());
    }

    #[test]
    fn too_many_slashes_is_not_a_match() {
        assert!(parse_repo_path("github:user/dir/foo").is_none());
    }

    #[test]
    fn empty_components_are_taken_verbatim() {
        let repo = parse_repo_path("gitlab:/foo").unwrap();
        assert_eq!(repo.user, "");
        assert_eq!(repo.template, "foo");
    }

    #[test]
    fn default_users() {
        assert_eq!(
            default_repo_user(RepoService::Github),
            Some("commercialhaskell")
        );
        assert_eq!(default_repo_user(RepoService::Gitlab), None);
        assert_eq!(default_repo_user(RepoService::Bitbucket), None);
    }

    #[test]
    fn service_display_and_parse_agree() {
        for service in RepoService::ALL {
            assert_eq!(service.to_string().parse::<RepoService>(), Ok(service));
        }
    }

    #[test]
    fn services_order_by_tag() {
        assert!(RepoService::Github < RepoService::Gitlab);
        assert!(RepoService::Gitlab < RepoService::Bitbucket);
    }

    #[test]
    fn raw_urls_per_service() {
        let github = RepoTemplatePath::new(RepoService::Github, "alice", "foo");
        assert_eq!(
            github.raw_url(),
            "https://raw.githubusercontent.com/alice/stack-templates/master/foo.hsfiles"
        );

        let gitlab = RepoTemplatePath::new(RepoService::Gitlab, "alice", "foo");
        assert_eq!(
            gitlab.raw_url(),
            "https://gitlab.com/alice/stack-templates/raw/master/foo.hsfiles"
        );

        let bitbucket = RepoTemplatePath::new(RepoService::Bitbucket, "alice", "foo.hsfiles");
        assert_eq!(
            bitbucket.raw_url(),
            "https://bitbucket.org/alice/stack-templates/raw/master/foo.hsfiles"
        );
    }

    #[test]
    fn displays_as_shorthand() {
        let repo = RepoTemplatePath::new(RepoService::Gitlab, "alice", "bar");
        assert_eq!(repo.to_string(), "gitlab:alice/bar");
    }
}
