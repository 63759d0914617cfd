//! URL and filesystem path grammars used by template name dispatch.

use std::path::{Component, Path, PathBuf};

use url::Url;

use super::TEMPLATE_SUFFIX;

/// Accept `s` if it is an absolute URL that names a host.
///
/// Opaque URLs such as `github:foo` or `mailto:x` parse as URLs but have no
/// host, so they are rejected here.
pub fn parse_url(s: &str) -> Option<Url> {
    let url = Url::parse(s).ok()?;
    if url.cannot_be_a_base() {
        return None;
    }
    match url.host_str() {
        Some(host) if !host.is_empty() => Some(url),
        _ => None,
    }
}

/// Accept `s` if it is a valid absolute file path.
pub fn parse_abs_file(s: &str) -> Option<PathBuf> {
    let path = Path::new(s);
    if !path.is_absolute() || !is_valid_file_path(s, path) {
        return None;
    }
    Some(path.to_path_buf())
}

/// Accept `s` if it is a valid relative file path.
pub fn parse_rel_file(s: &str) -> Option<PathBuf> {
    let path = Path::new(s);
    if path.is_absolute() || path.has_root() || !is_valid_file_path(s, path) {
        return None;
    }
    if matches!(path.components().next(), Some(Component::Prefix(_))) {
        return None;
    }
    Some(path.to_path_buf())
}

fn is_valid_file_path(s: &str, path: &Path) -> bool {
    if s.is_empty() || s.contains('\0') || ends_with_separator(s) {
        return false;
    }

    for component in path.components() {
        match component {
            Component::ParentDir => return false,
            Component::Normal(segment) => {
                if segment.to_string_lossy().contains(':') {
                    return false;
                }
            }
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
        }
    }

    match path.file_name() {
        Some(name) => name != TEMPLATE_SUFFIX,
        None => false,
    }
}

fn ends_with_separator(s: &str) -> bool {
    s.chars().last().is_some_and(std::path::is_separator)
}
