//! Heading anchors and table-of-contents extraction for HTML manual pages.
//!
//! Manual content is processed in one of two modes: TOC extraction produces
//! the ordered heading records a host persists alongside the page, while
//! content annotation rewrites the HTML for display (anchor markers plus
//! optional back-to-top links and lightbox tagging of image links).
//!
//! The crate is synchronous, performs no I/O and owns no persistent state;
//! storage, routing and rendering around it belong to the host application.

mod anchor;
pub mod annotate;
pub mod config;
pub mod text;
pub mod toc;
pub mod utils;

pub use annotate::annotate_content;
pub use config::{validate_config, ManualConfig};
pub use toc::{extract_toc, render_toc_list, TocEntry};
