//! Project configuration. A gallery project is a directory containing a
//! `triptych.yaml` file, the acquired feed document it names, and a `theme`
//! directory with the template fragments and static assets. The rule tables
//! (term links, caption replacements, manual entries) live in the project
//! file so the formatting pipeline stays table-driven.

use crate::caption::Replacement;
use crate::entry::ManualEntry;
use crate::linker::LinkRule;
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};

const PROJECT_FILE: &str = "triptych.yaml";

#[derive(Deserialize)]
struct Project {
    #[serde(default)]
    title: String,

    /// Path to the acquired Atom feed document, relative to the project
    /// root.
    feed: PathBuf,

    #[serde(default)]
    link_rules: Vec<LinkRule>,

    #[serde(default)]
    replacements: Vec<Replacement>,

    #[serde(default)]
    manual_entries: Vec<ManualEntry>,
}

#[derive(Deserialize)]
struct Theme {
    /// The template fragments, relative to the theme directory, which are
    /// concatenated in order into the gallery template.
    gallery_template: Vec<PathBuf>,
}

/// The fully resolved build configuration: the project file and theme file
/// flattened together with the output directory provided on the command
/// line.
pub struct Config {
    pub title: String,
    pub feed_path: PathBuf,
    pub link_rules: Vec<LinkRule>,
    pub replacements: Vec<Replacement>,
    pub manual_entries: Vec<ManualEntry>,
    pub gallery_template: Vec<PathBuf>,
    pub static_source_directory: PathBuf,
    pub static_output_directory: PathBuf,
    pub output_directory: PathBuf,
}

impl Config {
    /// Searches `dir` and its parent directories for a `triptych.yaml` file
    /// and loads the configuration from the first one found.
    pub fn from_directory(dir: &Path, output_directory: &Path) -> Result<Config> {
        let path = dir.join(PROJECT_FILE);
        if path.exists() {
            Config::from_project_file(&path, output_directory)
        } else {
            match dir.parent() {
                Some(parent) => Config::from_directory(parent, output_directory),
                None => Err(Error::NotFound),
            }
        }
    }

    /// Loads the configuration from a specific project file. The theme is
    /// expected in a `theme` directory next to the project file.
    pub fn from_project_file(path: &Path, output_directory: &Path) -> Result<Config> {
        let project: Project = serde_yaml::from_reader(open(path)?)?;
        let project_root = match path.parent() {
            Some(parent) => parent,
            None => return Err(Error::NotFound),
        };
        let theme_dir = project_root.join("theme");
        let theme: Theme = serde_yaml::from_reader(open(&theme_dir.join("theme.yaml"))?)?;
        Ok(Config {
            title: project.title,
            feed_path: project_root.join(project.feed),
            link_rules: project.link_rules,
            replacements: project.replacements,
            manual_entries: project.manual_entries,
            gallery_template: theme
                .gallery_template
                .iter()
                .map(|relpath| theme_dir.join(relpath))
                .collect(),
            static_source_directory: theme_dir.join("static"),
            static_output_directory: output_directory.join("static"),
            output_directory: output_directory.to_owned(),
        })
    }
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|err| Error::Open {
        path: path.to_owned(),
        err,
    })
}

type Result<T> = std::result::Result<T, Error>;

/// Represents a problem loading the configuration. Variants include missing
/// project files, I/O problems, and YAML syntax errors.
#[derive(Debug)]
pub enum Error {
    /// Returned when no `triptych.yaml` exists in the starting directory or
    /// any of its parents.
    NotFound,

    /// Returned for I/O problems while opening a project or theme file.
    Open { path: PathBuf, err: std::io::Error },

    /// Returned for errors deserializing a project or theme file.
    Deserialize(serde_yaml::Error),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotFound => write!(
                f,
                "Could not find `{}` in any parent directory",
                PROJECT_FILE
            ),
            Error::Open { path, err } => {
                write!(f, "Opening config file '{}': {}", path.display(), err)
            }
            Error::Deserialize(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::NotFound => None,
            Error::Open { path: _, err } => Some(err),
            Error::Deserialize(err) => Some(err),
        }
    }
}

impl From<serde_yaml::Error> for Error {
    /// Converts [`serde_yaml::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator when deserializing config files.
    fn from(err: serde_yaml::Error) -> Error {
        Error::Deserialize(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_directory_loads_project_and_theme() {
        let config =
            Config::from_directory(Path::new("./testdata"), Path::new("/tmp/out")).unwrap();
        assert_eq!("Test Gallery", config.title);
        assert!(config.feed_path.ends_with("testdata/feed.atom"));
        assert_eq!(1, config.link_rules.len());
        assert_eq!("Minor Mage", config.link_rules[0].phrase);
        assert_eq!(1, config.replacements.len());
        assert_eq!(1, config.manual_entries.len());
        assert_eq!(2, config.gallery_template.len());
        assert!(config.gallery_template[0].ends_with("theme/base.html"));
        assert!(config
            .static_source_directory
            .ends_with("testdata/theme/static"));
        assert!(config.static_output_directory.ends_with("out/static"));
    }

    #[test]
    fn test_from_directory_searches_parents() {
        let config = Config::from_directory(Path::new("./testdata/theme/static"), Path::new("/tmp"))
            .unwrap();
        assert_eq!("Test Gallery", config.title);
    }
}
