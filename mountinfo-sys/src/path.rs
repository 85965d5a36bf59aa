// SPDX-License-Identifier: GPL-3.0-only

//! Lexical path handling for mount resolution. Nothing here touches the
//! filesystem: symlinks are not followed and `..` is resolved textually.

use std::path::{Component, Path, PathBuf};

use crate::error::{MountInfoError, Result};

/// A single component of an absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathToken {
    /// The filesystem root. Never equal to any named component.
    Root,
    Component(String),
}

/// Resolve `path` against `cwd` without touching the filesystem.
///
/// `.` components and repeated separators are dropped, and `..` pops the
/// previous component (stopping at the root).
pub fn absolutize(path: &Path, cwd: &Path) -> Result<PathBuf> {
    let mut resolved = PathBuf::from("/");

    if path.is_relative() {
        if cwd.is_relative() {
            return Err(MountInfoError::PathResolution(format!(
                "working directory {} is not absolute",
                cwd.display()
            )));
        }
        push_components(&mut resolved, cwd);
    }
    push_components(&mut resolved, path);

    Ok(resolved)
}

fn push_components(resolved: &mut PathBuf, path: &Path) {
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push("/"),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => resolved.push(name),
        }
    }
}

/// Split an absolute path into `Root` followed by its named components.
///
/// Relative input is anchored at the root, so mount points read from a
/// damaged table still tokenize deterministically.
pub fn tokenize(path: &Path) -> Result<Vec<PathToken>> {
    let normalized = absolutize(path, Path::new("/"))?;

    let mut tokens = vec![PathToken::Root];
    for component in normalized.components() {
        if let Component::Normal(name) = component {
            let name = name.to_str().ok_or_else(|| {
                MountInfoError::PathResolution(format!(
                    "{} is not valid UTF-8",
                    normalized.display()
                ))
            })?;
            tokens.push(PathToken::Component(name.to_string()));
        }
    }

    Ok(tokens)
}

/// Number of leading tokens two sequences share.
pub fn common_prefix_len(left: &[PathToken], right: &[PathToken]) -> usize {
    left.iter()
        .zip(right)
        .take_while(|(a, b)| a == b)
        .count()
}
