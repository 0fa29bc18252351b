use std::path::Path;

use crate::config::TrackDisplayField;

use super::tags::TrackTags;

/// Build the display string for a song according to the provided `fields` and separator.
///
/// Tag fields that are missing are skipped. When nothing was produced the file
/// name is used, so untagged files still read sensibly.
pub fn display_from_fields(
    path: &Path,
    tags: &TrackTags,
    fields: &[TrackDisplayField],
    sep: &str,
) -> String {
    let mut parts: Vec<String> = Vec::new();

    for f in fields {
        match f {
            TrackDisplayField::Title => parts.extend(tags.title.clone()),
            TrackDisplayField::Artist => parts.extend(tags.artist.clone()),
            TrackDisplayField::Album => parts.extend(tags.album.clone()),
            TrackDisplayField::Filename => {
                if let Some(name) = path.file_name().and_then(|s| s.to_str()) {
                    parts.push(name.to_string());
                }
            }
            TrackDisplayField::Path => {
                parts.push(path.display().to_string());
            }
        }
    }

    if parts.is_empty() {
        path.file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    } else {
        parts.join(sep)
    }
}
