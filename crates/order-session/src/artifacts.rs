//! Lookup of prebuilt game artifacts in the local library.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolve the prebuilt HTML artifact for a game/geo pair.
///
/// Watermarked previews and final builds live side by side as
/// `<geo>_preview.html` / `<geo>_final.html` under the game's directory.
/// Returns `None` when no such build exists in the library.
pub fn library_artifact_path(
    library_dir: &Path,
    game_id: &str,
    geo_id: &str,
    watermarked: bool,
) -> Option<PathBuf> {
    let suffix = if watermarked { "preview" } else { "final" };
    let path = library_dir
        .join(game_id)
        .join(format!("{}_{}.html", geo_id, suffix));

    if path.is_file() {
        Some(path)
    } else {
        debug!("No library artifact at {}", path.display());
        None
    }
}
