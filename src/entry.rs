//! Defines the gallery's entry types and the assembly step that pairs each
//! entry with its formatted output.
//!
//! An [`Entry`] is one illustrated post: an image, a raw caption, and a
//! permalink back to the original post. Assembly walks the final
//! oldest-first entry list, skips entries with no image, and produces two
//! parallel, index-aligned record lists: [`Thumbnail`]s for the gallery
//! grid and [`Slide`]s for the lightbox. All text transformation is
//! delegated to [`crate::caption`] and [`crate::preview`].

use crate::caption::{self, Replacement};
use crate::linker::LinkRule;
use crate::preview;
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use url::Url;

/// One illustrated post, from the feed or from the manual-entry table.
#[derive(Clone, Debug)]
pub struct Entry {
    /// The raw caption text, footnote markers and definitions included.
    pub caption: String,

    /// The illustration. Entries without one are skipped by assembly.
    pub image: Option<Url>,

    /// Permalink to the original post, if known.
    pub link: Option<Url>,

    /// Publication timestamp, used to order feed-derived entries. Manual
    /// entries carry none and rely on their configured order.
    pub published: Option<DateTime<FixedOffset>>,
}

/// An entry listed directly in the project file rather than in the feed.
/// These are posts that predate the feed's retention window; configuration
/// lists them oldest-first and the build prepends them ahead of all
/// feed-derived entries.
#[derive(Clone, Debug, Deserialize)]
pub struct ManualEntry {
    #[serde(default)]
    pub caption: String,

    pub image: Option<Url>,

    #[serde(default)]
    pub link: Option<Url>,
}

impl From<&ManualEntry> for Entry {
    /// Converts a configured [`ManualEntry`] into an [`Entry`] with no
    /// timestamp.
    fn from(manual: &ManualEntry) -> Entry {
        Entry {
            caption: manual.caption.clone(),
            image: manual.image.clone(),
            link: manual.link.clone(),
            published: None,
        }
    }
}

/// One cell of the gallery grid.
#[derive(Clone, Debug)]
pub struct Thumbnail {
    /// Zero-based display index, shared with the matching [`Slide`].
    pub index: usize,

    /// The illustration.
    pub image: Url,

    /// Escaped first-sentence teaser shown on hover.
    pub preview: String,
}

/// One lightbox slide.
#[derive(Clone, Debug)]
pub struct Slide {
    /// Zero-based display index, shared with the matching [`Thumbnail`].
    pub index: usize,

    /// The illustration.
    pub image: Url,

    /// The fully rendered caption HTML fragment.
    pub caption: String,

    /// Permalink to the original post, if known.
    pub link: Option<Url>,
}

/// Assembles the ordered entry list into index-aligned thumbnail and slide
/// records. Entries without an image are silently excluded and do not
/// consume a display index. The literal prefix-replacement table is applied
/// to each caption before the preview extractor and the caption renderer
/// see it.
pub fn assemble(
    entries: &[Entry],
    replacements: &[Replacement],
    links: &[LinkRule],
) -> (Vec<Thumbnail>, Vec<Slide>) {
    let mut thumbnails = Vec::with_capacity(entries.len());
    let mut slides = Vec::with_capacity(entries.len());

    for entry in entries {
        let image = match &entry.image {
            Some(image) => image.clone(),
            None => continue,
        };
        let index = slides.len();
        let text = caption::apply_replacements(&entry.caption, replacements);
        thumbnails.push(Thumbnail {
            index,
            image: image.clone(),
            preview: preview::extract(&text),
        });
        slides.push(Slide {
            index,
            image,
            caption: caption::to_html(&text, links),
            link: entry.link.clone(),
        });
    }

    (thumbnails, slides)
}
