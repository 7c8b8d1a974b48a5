use crate::entry::{Slide, Thumbnail};
use gtmpl::{Template, Value};
use std::fmt;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

/// Responsible for templating the gallery page and writing it to disk,
/// together with the theme's static assets.
pub struct Writer<'a> {
    /// The parsed gallery template.
    pub gallery_template: &'a Template,

    /// The gallery title, made available to the template.
    pub title: &'a str,

    /// The directory into which `index.html` is written.
    pub output_directory: &'a Path,
}

impl Writer<'_> {
    /// Templates the gallery page from the index-aligned thumbnail and
    /// slide records and writes it to `{output_directory}/index.html`.
    pub fn write_gallery(&self, thumbnails: &[Thumbnail], slides: &[Slide]) -> Result<()> {
        use std::collections::HashMap;

        let mut m: HashMap<String, Value> = HashMap::new();
        m.insert("title".to_owned(), Value::String(self.title.to_owned()));
        m.insert(
            "thumbnails".to_owned(),
            Value::Array(thumbnails.iter().map(Value::from).collect()),
        );
        m.insert(
            "slides".to_owned(),
            Value::Array(slides.iter().map(Value::from).collect()),
        );

        std::fs::create_dir_all(self.output_directory)?;
        self.gallery_template.execute(
            &mut std::fs::File::create(self.output_directory.join("index.html"))?,
            &gtmpl::Context::from(Value::Object(m)).unwrap(),
        )?;
        Ok(())
    }
}

/// Copies the theme's static asset directory into the output directory,
/// preserving its layout. A missing source directory is not an error; a
/// theme is allowed to ship without assets.
pub fn copy_static(src: &Path, dst: &Path) -> Result<()> {
    if !src.exists() {
        return Ok(());
    }
    for entry in WalkDir::new(src) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(src).unwrap(); // entries are always under the walk root
        if entry.file_type().is_dir() {
            std::fs::create_dir_all(dst.join(relative))?;
        } else {
            std::fs::copy(entry.path(), dst.join(relative))?;
        }
    }
    Ok(())
}

/// The result of a fallible page-writing operation.
type Result<T> = std::result::Result<T, Error>;

/// Represents an error in a page-writing operation.
#[derive(Debug)]
pub enum Error {
    /// An error during templating.
    Template(String),

    /// An error walking the static asset directory.
    Walk(walkdir::Error),

    /// An error writing the output files.
    Io(io::Error),
}

impl From<io::Error> for Error {
    /// Converts an [`io::Error`] into an [`Error`]. This allows us to use the
    /// `?` operator for fallible I/O operations.
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<String> for Error {
    /// Converts a template error message ([`String`]) into an [`Error`]. This
    /// allows us to use the `?` operator for fallible template operations.
    fn from(err: String) -> Error {
        Error::Template(err)
    }
}

impl From<walkdir::Error> for Error {
    /// Converts a [`walkdir::Error`] into an [`Error`]. This allows us to use
    /// the `?` operator while copying static assets.
    fn from(err: walkdir::Error) -> Error {
        Error::Walk(err)
    }
}

impl fmt::Display for Error {
    /// Displays an [`Error`] as presentable text.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Template(err) => err.fmt(f),
            Error::Walk(err) => err.fmt(f),
            Error::Io(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements the [`std::error::Error`] trait for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Template(_) => None,
            Error::Walk(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn test_output_directory(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("triptych-tests").join(name);
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_write_gallery_renders_records() {
        let mut template = Template::default();
        template
            .parse(
                "{{.title}}|{{range .thumbnails}}[{{.index}} {{.preview}}]{{end}}\
                 |{{range .slides}}({{.index}} {{.caption}}){{end}}",
            )
            .unwrap();

        let thumbnails = vec![Thumbnail {
            index: 0,
            image: Url::parse("https://example.org/0.png").unwrap(),
            preview: "Teaser\u{2026}".to_owned(),
        }];
        let slides = vec![Slide {
            index: 0,
            image: Url::parse("https://example.org/0.png").unwrap(),
            caption: "Full caption.".to_owned(),
            link: None,
        }];

        let output = test_output_directory("write-gallery");
        let writer = Writer {
            gallery_template: &template,
            title: "My Gallery",
            output_directory: &output,
        };
        writer.write_gallery(&thumbnails, &slides).unwrap();

        let html = std::fs::read_to_string(output.join("index.html")).unwrap();
        assert_eq!("My Gallery|[0 Teaser\u{2026}]|(0 Full caption.)", html);
    }

    #[test]
    fn test_copy_static_preserves_layout() {
        let source = test_output_directory("copy-static-src");
        std::fs::create_dir_all(source.join("css")).unwrap();
        std::fs::write(source.join("css/style.css"), "body {}").unwrap();
        std::fs::write(source.join("script.js"), "// js").unwrap();

        let dest = test_output_directory("copy-static-dst");
        copy_static(&source, &dest).unwrap();
        assert_eq!(
            "body {}",
            std::fs::read_to_string(dest.join("css/style.css")).unwrap()
        );
        assert!(dest.join("script.js").exists());
    }

    #[test]
    fn test_copy_static_missing_source_is_ok() {
        let source = test_output_directory("copy-static-missing");
        let dest = test_output_directory("copy-static-missing-dst");
        copy_static(&source, &dest).unwrap();
        assert!(!dest.exists());
    }
}
