//! The library code for the `triptych` static gallery generator. The
//! architecture can be generally broken down into two distinct steps:
//!
//! 1. Ingesting entries from an already-acquired Atom feed document
//!    ([`crate::feed`]) and from the project configuration
//!    ([`crate::config`])
//! 2. Converting the entries into the output gallery page on disk
//!    ([`crate::write`])
//!
//! Between the two sits the caption-formatting pipeline, which is where the
//! interesting work happens. For each entry, the raw caption is patched by
//! the literal-replacement table, split into body text and footnote
//! definitions ([`crate::footnote`]), typography-normalized
//! ([`crate::typography`]), HTML-escaped ([`crate::escape`]), and rendered
//! with interactive footnote markup ([`crate::caption`]); footnote text
//! additionally passes through the term linker ([`crate::linker`]). A short
//! plain preview is derived from the first sentence ([`crate::preview`]).
//! The pipeline is pure: the same caption always formats to the same
//! output, and nothing is carried between captions.
//!
//! The final step pairs each entry with its formatted output
//! ([`crate::entry`]), applies the gallery template, and writes the page
//! and static assets to disk.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod build;
pub mod caption;
pub mod config;
pub mod entry;
pub mod escape;
pub mod feed;
pub mod footnote;
pub mod linker;
pub mod preview;
pub mod typography;
pub mod value;
pub mod write;
