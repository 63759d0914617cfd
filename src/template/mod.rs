//! Template names and metadata.
//!
//! This module turns the template argument a user types into a concrete
//! location:
//! - Repository shorthand in [`repo`] (`github:user/foo`)
//! - URL and file path grammars in [`grammar`]
//! - Priority dispatch in [`name`]
//! - Template metadata in [`info`]
//! - `key:value` parameters in [`params`]
//!
//! Nothing here touches the network or checks that files exist.

pub mod grammar;
pub mod info;
pub mod name;
pub mod params;
pub mod repo;
pub mod resolution;

pub use info::{load_template_info, TemplateInfo};
pub use name::{parse_template_name, TemplateName, TemplatePath};
pub use params::{parse_pair, TemplateParams};
pub use repo::{default_repo_user, parse_repo_path, RepoService, RepoTemplatePath};
pub use resolution::Resolution;

/// Extension carried by template files.
pub const TEMPLATE_SUFFIX: &str = ".hsfiles";

/// Template used when none is requested.
pub const DEFAULT_TEMPLATE: &str = "new-template";

/// Message reported for every unparseable template name.
pub const TEMPLATE_NAME_HELP: &str =
    "Expected a template like: foo or foo.hsfiles or https://example.com/foo.hsfiles or github:user/foo";
