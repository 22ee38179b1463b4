use url::{ParseError, Url};

/// Resolve `path` beneath `base`, keeping every segment of the base path.
/// e.g., `http://host/app` + `api/waitlist` -> `http://host/app/api/waitlist`
///
/// Plain `Url::join` drops the last base segment when it has no trailing slash.
pub fn join_under(base: &Url, path: &str) -> Result<Url, ParseError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let dir = format!("{}/", base.path());
        base.set_path(&dir);
    }
    base.join(path.trim_start_matches('/'))
}
