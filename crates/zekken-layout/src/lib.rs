#![forbid(unsafe_code)]

//! Layout resolution + badge-tree composition for zekken badges (headless).
//!
//! Design goals:
//! - pure, total functions over validated identities (no error paths)
//! - deterministic output: the same identity always yields the same tree
//! - rendering behind a seam: the tree carries logical font families only

pub mod model;
pub mod resolve;
pub mod text;
pub mod tree;

pub use model::LayoutSpec;
pub use resolve::resolve;
pub use text::FontFamily;
pub use tree::{BadgeNode, BadgeTree, BoxStyle, ComposeOptions, TextPlacement, TextRun, compose};

/// Boxed error returned by rendering collaborators.
pub type RenderError = Box<dyn std::error::Error + Send + Sync>;

/// Rendering collaborator seam: turns a badge tree into SVG markup.
///
/// Implementors own font loading and the box-layout algorithm. The tree
/// names logical [`FontFamily`] values per run; font bytes never pass
/// through this crate.
pub trait BadgeRenderer {
    fn render(&self, tree: &BadgeTree) -> std::result::Result<String, RenderError>;
}
