//! cg-sql - SQL generation for cohortgen
//!
//! Renders code-list, criteria and union views from value sets, builds count
//! cubes from a Jinja template and rewrites them as views, and writes every
//! generated statement to `<output_dir>/<table_name>.sql`.

pub mod artifacts;
pub mod counts;
pub mod cube;
pub mod error;
pub mod render;

pub use counts::{CountBuilder, TemplateCountBuilder};
pub use cube::{cube, render_cube, CubeSpec};
pub use error::{SqlGenError, SqlGenResult};
pub use render::table_as_view;
