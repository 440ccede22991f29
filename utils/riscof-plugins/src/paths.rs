use camino::{Utf8Component, Utf8Path, Utf8PathBuf};

/// Replace a leading `~` component with `home`.
///
/// Only the bare `~` form is understood; `~user` and paths without a leading
/// tilde are returned as-is, as is everything when `home` is unknown.
pub fn expand_home(path: &Utf8Path, home: Option<&Utf8Path>) -> Utf8PathBuf {
    match (path.strip_prefix("~"), home) {
        (Ok(rest), Some(home)) if rest.as_str().is_empty() => home.to_path_buf(),
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}

/// Lexically normalize a path without touching the filesystem.
///
/// Symbolic links are not resolved, so `a/link/..` becomes `a`.
pub fn normalize(path: &Utf8Path) -> Utf8PathBuf {
    let mut out = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::Prefix(_) | Utf8Component::RootDir => out.push(component.as_str()),
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => match out.components().next_back() {
                Some(Utf8Component::Normal(_)) => {
                    out.pop();
                }
                // `/..` is `/`
                Some(Utf8Component::RootDir | Utf8Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            Utf8Component::Normal(name) => out.push(name),
        }
    }
    if out.as_str().is_empty() {
        out.push(".");
    }
    out
}

/// Turn `path` into an absolute, normalized path.
///
/// A leading `~` is expanded from `$HOME`. Relative paths are taken relative
/// to `base`.
pub fn make_absolute(path: &Utf8Path, base: &Utf8Path) -> Utf8PathBuf {
    let home = std::env::var("HOME").ok().map(Utf8PathBuf::from);
    let expanded = expand_home(path, home.as_deref());
    if expanded.is_absolute() {
        normalize(&expanded)
    } else {
        normalize(&base.join(expanded))
    }
}
