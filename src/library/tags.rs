use std::path::Path;

use lofty::prelude::*;

/// The few tag fields used for the now-playing text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
}

fn non_blank(v: Option<std::borrow::Cow<'_, str>>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl TrackTags {
    /// Read tags from `path`. Files without tags, or that lofty cannot
    /// parse, yield empty tags.
    pub fn read(path: &Path) -> Self {
        let Ok(tagged) = lofty::read_from_path(path) else {
            return Self::default();
        };

        match tagged.primary_tag().or_else(|| tagged.first_tag()) {
            Some(tag) => Self {
                title: non_blank(tag.title()),
                artist: non_blank(tag.artist()),
                album: non_blank(tag.album()),
            },
            None => Self::default(),
        }
    }
}
