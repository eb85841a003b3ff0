//! Request path classification.

/// File extensions served without any credential check.
const STATIC_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "svg", "webp", "avif", "ico", "css", "js", "mjs", "map", "woff",
    "woff2", "ttf", "otf", "eot", "mp4", "webm", "webmanifest",
];

/// The path categories the guard distinguishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathClass {
    /// Image, font, style or script asset.
    StaticAsset,
    /// The admin login page.
    AdminLogin,
    /// Any other page under `/admin`.
    Admin,
    /// The showroom root `/`.
    Root,
    /// A page under `/templates`. Carries the `branch/name` slug when the
    /// path is deep enough to name one.
    Template(Option<String>),
    /// Anything else; not restricted here.
    Other,
}

/// Classifies a request path.
pub fn classify(path: &str) -> PathClass {
    if is_static_asset(path) {
        return PathClass::StaticAsset;
    }
    if path == "/" || path.is_empty() {
        return PathClass::Root;
    }
    if let Some(rest) = under(path, "/admin") {
        return match rest.trim_matches('/') {
            "login" => PathClass::AdminLogin,
            _ => PathClass::Admin,
        };
    }
    if let Some(rest) = under(path, "/templates") {
        let mut segments = rest.split('/').filter(|s| !s.is_empty());
        let slug = match (segments.next(), segments.next()) {
            (Some(branch), Some(name)) => Some(format!("{branch}/{name}")),
            _ => None,
        };
        return PathClass::Template(slug);
    }
    PathClass::Other
}

/// Returns the remainder of `path` when it equals `prefix` or continues it
/// with a `/`.
fn under<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    (rest.is_empty() || rest.starts_with('/')).then_some(rest)
}

fn is_static_asset(path: &str) -> bool {
    let last = path.rsplit('/').next().unwrap_or_default();
    match last.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => STATIC_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext)),
        _ => false,
    }
}
