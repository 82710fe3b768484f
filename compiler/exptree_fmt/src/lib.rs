//! Exptree Fmt - diagnostic rendering of expression trees.
//!
//! - [`render`]: indented box-drawing text, one node per line.
//! - [`render_svg`]: a standalone SVG diagram with circle nodes.
//!
//! Both are also available as `Display` adapters ([`TreeText`], [`TreeSvg`])
//! for writing straight into a formatter.

mod svg;
mod text;

pub use svg::{render_svg, TreeSvg};
pub use text::{render, TreeText};
