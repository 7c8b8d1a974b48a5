//! Exports the [`build_gallery`] function which stitches together the
//! high-level steps of building the output gallery: reading entries from the
//! feed document ([`crate::feed`]), prepending the configured manual
//! entries, assembling the formatted thumbnail and slide records
//! ([`crate::entry`]), and rendering the page and static assets
//! ([`crate::write`]).

use crate::config::Config;
use crate::entry::{self, Entry};
use crate::feed::{self, Error as FeedError};
use crate::write::{copy_static, Error as WriteError, Writer};
use gtmpl::Template;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Builds the gallery from a [`Config`] object. Manual entries come first
/// (they predate the feed's retention window and are configured
/// oldest-first), followed by the feed-derived entries, oldest-first.
pub fn build_gallery(config: Config) -> Result<()> {
    let mut entries: Vec<Entry> = config.manual_entries.iter().map(Entry::from).collect();
    entries.extend(feed::read_entries(&config.feed_path)?);

    let (thumbnails, slides) =
        entry::assemble(&entries, &config.replacements, &config.link_rules);

    let gallery_template = parse_template(config.gallery_template.iter())?;

    // Blow away the old static output directory so stale assets don't
    // linger. The page itself is a single file and is simply overwritten.
    rmdir(&config.static_output_directory)?;

    let writer = Writer {
        gallery_template: &gallery_template,
        title: &config.title,
        output_directory: &config.output_directory,
    };
    writer.write_gallery(&thumbnails, &slides)?;

    copy_static(
        &config.static_source_directory,
        &config.static_output_directory,
    )?;

    Ok(())
}

// Loads the template file contents, concatenates them in order, and parses
// the result into a template.
fn parse_template<P: AsRef<Path>>(template_files: impl Iterator<Item = P>) -> Result<Template> {
    let mut contents = String::new();
    for template_file in template_files {
        use std::io::Read;
        let template_file = template_file.as_ref();
        File::open(&template_file)
            .map_err(|e| Error::OpenTemplateFile {
                path: template_file.to_owned(),
                err: e,
            })?
            .read_to_string(&mut contents)?;
        contents.push(' ');
    }

    let mut template = Template::default();
    template.parse(&contents).map_err(Error::ParseTemplate)?;
    Ok(template)
}

fn rmdir(dir: &Path) -> Result<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(x) => Ok(x),
        Err(e) => match e.kind() {
            std::io::ErrorKind::NotFound => Ok(()),
            _ => Err(Error::Clean {
                path: dir.to_owned(),
                err: e,
            }),
        },
    }
}

type Result<T> = std::result::Result<T, Error>;

/// The error type for building the gallery. Errors can be during feed
/// ingestion, writing, cleaning output directories, parsing template files,
/// and other I/O.
#[derive(Debug)]
pub enum Error {
    /// Returned for errors reading the feed document.
    Feed(FeedError),

    /// Returned for errors writing the gallery page or static assets.
    Write(WriteError),

    /// Returned for I/O problems while cleaning output directories.
    Clean { path: PathBuf, err: std::io::Error },

    /// Returned for I/O problems while opening template files.
    OpenTemplateFile { path: PathBuf, err: std::io::Error },

    /// Returned for errors parsing template files.
    ParseTemplate(String),

    /// Returned for other I/O errors.
    Io(std::io::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Feed(err) => err.fmt(f),
            Error::Write(err) => err.fmt(f),
            Error::Clean { path, err } => {
                write!(f, "Cleaning directory '{}': {}", path.display(), err)
            }
            Error::OpenTemplateFile { path, err } => {
                write!(f, "Opening template file '{}': {}", path.display(), err)
            }
            Error::ParseTemplate(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Feed(err) => Some(err),
            Error::Write(err) => Some(err),
            Error::Clean { path: _, err } => Some(err),
            Error::OpenTemplateFile { path: _, err } => Some(err),
            Error::ParseTemplate(_) => None,
            Error::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for Error {
    /// Converts [`std::io::Error`]s into [`Error`]. This allows us to use the
    /// `?` operator.
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<FeedError> for Error {
    /// Converts [`FeedError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: FeedError) -> Error {
        Error::Feed(err)
    }
}

impl From<WriteError> for Error {
    /// Converts [`WriteError`]s into [`Error`]. This allows us to use the `?`
    /// operator.
    fn from(err: WriteError) -> Error {
        Error::Write(err)
    }
}
