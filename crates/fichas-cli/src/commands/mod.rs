pub mod cues;
pub mod extract;
pub mod scope;

use fichas_core::cues::builtin::default_cue_set;
use fichas_core::cues::{load_cue_set, CueSet};
use fichas_core::error::FichasError;
use std::borrow::Cow;
use std::path::Path;

/// The custom cue table at `path`, or the builtin one.
pub fn resolve_cue_set(path: Option<&Path>) -> Result<Cow<'static, CueSet>, FichasError> {
    match path {
        Some(path) => Ok(Cow::Owned(load_cue_set(path)?)),
        None => Ok(Cow::Borrowed(default_cue_set())),
    }
}

pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
