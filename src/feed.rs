//! Support for reading gallery entries from an acquired Atom feed document.
//!
//! Fetching the feed over the network is somebody else's job; this module
//! reads the document it left on disk. Per Atom entry, the caption is the
//! entry title, the permalink is the `alternate` link, and the image is the
//! `enclosure` link. Feeds conventionally list newest entries first, so the
//! result is sorted oldest-first to match the gallery's display order.

use crate::entry::Entry;
use atom_syndication::{Error as AtomError, Feed, Link};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use url::Url;

/// Reads the Atom document at `path` and converts its entries into gallery
/// [`Entry`] values, ordered oldest-first. Entries without a parseable
/// `enclosure` link keep `image: None`; assembly filters those later.
pub fn read_entries(path: &Path) -> Result<Vec<Entry>> {
    let file = File::open(path).map_err(|err| Error::Open {
        path: path.to_owned(),
        err,
    })?;
    let feed = Feed::read_from(BufReader::new(file))?;
    let mut entries: Vec<Entry> = feed.entries.iter().map(to_entry).collect();
    // Stable sort: entries without a timestamp keep their relative feed
    // order and sort ahead of dated ones.
    entries.sort_by_key(|entry| entry.published);
    Ok(entries)
}

fn to_entry(entry: &atom_syndication::Entry) -> Entry {
    Entry {
        caption: entry.title.to_string(),
        image: link_href(&entry.links, "enclosure").and_then(|href| Url::parse(href).ok()),
        link: link_href(&entry.links, "alternate")
            .or_else(|| entry.links.first().map(|link| link.href.as_str()))
            .and_then(|href| Url::parse(href).ok()),
        published: entry.published.or(Some(entry.updated)),
    }
}

fn link_href<'a>(links: &'a [Link], rel: &str) -> Option<&'a str> {
    links
        .iter()
        .find(|link| link.rel == rel)
        .map(|link| link.href.as_str())
}

type Result<T> = std::result::Result<T, Error>;

/// Represents a problem reading the feed document. Variants include I/O and
/// Atom syntax issues. Any such problem is fatal to the whole build.
#[derive(Debug)]
pub enum Error {
    /// Returned for I/O problems while opening the feed document.
    Open { path: PathBuf, err: std::io::Error },

    /// Returned when there is an Atom-related error.
    Atom(AtomError),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Open { path, err } => {
                write!(f, "Opening feed document '{}': {}", path.display(), err)
            }
            Error::Atom(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open { path: _, err } => Some(err),
            Error::Atom(err) => Some(err),
        }
    }
}

impl From<AtomError> for Error {
    /// Converts [`AtomError`]s into [`Error`]. This allows us to use the `?`
    /// operator when reading the feed document.
    fn from(err: AtomError) -> Error {
        Error::Atom(err)
    }
}
