//! nutrigen: batch content-generation utilities for a mobile app's asset
//! pipeline.
//!
//! Two independent tools live in this crate:
//!
//! - The **Record Formatter** ([`CsvImporter`]) reads a comma-delimited
//!   nutrition table and emits one data-file declaration line per row.
//! - The **Icon Renderer** ([`IconRenderer`]) procedurally draws the app
//!   icon from a fixed plan of proportional geometry.
//!
//! No data flows between them; each is driven by its own binary
//! (`nutrition-data` and `app-icon`).
//!
//! # Examples
//!
//! Converting records:
//!
//! ```
//! use nutrigen::{CsvImporter, RecordKind};
//!
//! let importer = CsvImporter::swift(RecordKind::Food);
//! let mut out = Vec::new();
//! let count = importer
//!     .import_reader(
//!         "name,carbohydrates,protein,calories,category\n\
//!          Shrimp,0.2,24.0,99,Protein\n"
//!             .as_bytes(),
//!         &mut out,
//!     )
//!     .unwrap();
//!
//! assert_eq!(count, 1);
//! assert!(String::from_utf8(out).unwrap().contains("\"Shrimp\""));
//! ```
//!
//! Rendering the icon:
//!
//! ```
//! use nutrigen::IconRenderer;
//!
//! let icon = IconRenderer::with_size(64).render();
//! assert_eq!(icon.width(), 64);
//! ```

pub mod canvas;
pub mod error;
pub mod formatter;
pub mod icon;
pub mod importer;
pub mod logging;
pub mod record;
pub mod sample;

pub use canvas::Canvas;
pub use error::{ImportError, RenderError};
pub use formatter::{DeclarationFormatter, SwiftTemplateFormatter};
pub use icon::{build_draw_plan, ColorRgb, DrawOp, IconProfile, IconRenderer};
pub use importer::CsvImporter;
pub use record::{parse_flag, NutritionRecord, NutritionValue, RecordKind, TRUTHY_TOKENS};
pub use sample::{write_sample, write_sample_in};
