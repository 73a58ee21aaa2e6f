//! Output module for analysis results
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs        ← This file
//! ├── render.rs     ← Terminal matrix rendering (box, brackets, grid, simple)
//! └── export/       ← Data export
//!     ├── mod.rs    ← Exporter trait + ExportRecord
//!     ├── csv.rs
//!     └── json.rs
//! ```
//!
//! # Design Philosophy
//!
//! The output module separates concerns:
//! - **Rendering**: for human eyes at the terminal (aligned text)
//! - **Export**: for programmatic consumers (CSV, JSON)
//!
//! Both paths render cells through `Entry`'s `Display`, so exact
//! rational values never degrade to floats on the way out.

pub mod export;
pub mod render;

pub use export::{CsvConfig, CsvExporter, ExportRecord, Exporter, JsonExporter};
pub use render::{format_matrix, RenderStyle};
