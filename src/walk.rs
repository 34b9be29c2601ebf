use std::path::Path;

use ignore::WalkBuilder;

/// Directory names excluded from every scan. Matches apply to any path
/// segment, so `pkg/node_modules/x.js` is skipped too.
pub const IGNORED_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    "vendor",
    "__pycache__",
];

/// Build a directory walker over `root` that skips the fixed ignore set.
///
/// Standard gitignore filtering is disabled on purpose: the ignore set above
/// is the only exclusion authority, so `files_scanned` is reproducible
/// regardless of what `.gitignore` files the corpus happens to contain.
pub fn walk(root: &Path) -> ignore::Walk {
    WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false)
        .follow_links(false)
        .filter_entry(|entry| {
            if entry.file_type().is_some_and(|ft| ft.is_dir())
                && let Some(name) = entry.file_name().to_str()
                && IGNORED_DIRS.contains(&name)
            {
                return false;
            }
            true
        })
        .build()
}

#[cfg(test)]
#[path = "walk_test.rs"]
mod tests;
