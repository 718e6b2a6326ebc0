#![forbid(unsafe_code)]

//! `zekken` is a headless racing-badge ("zekken") engine.
//!
//! Raw request attributes (name, number, badge type) are validated into a
//! typed identity, resolved into concrete layout parameters and composed
//! into a declarative badge tree. Rendering the tree to SVG is behind the
//! [`layout::BadgeRenderer`] seam: bring your own box-layout/SVG
//! collaborator, along with its fonts.
//!
//! ```
//! use zekken::Engine;
//!
//! let engine = Engine::new();
//! let identity = engine.validate(Some("ハルウララ"), Some("7"), Some("g1"))?;
//! let spec = engine.resolve(&identity);
//! assert_eq!(spec.theme.background_color, "#132a63");
//! # Ok::<(), zekken::BadgeError>(())
//! ```

pub use zekken_core::*;

pub mod layout {
    pub use zekken_layout::model::LayoutSpec;
    pub use zekken_layout::resolve::resolve;
    pub use zekken_layout::text::FontFamily;
    pub use zekken_layout::tree::{
        BadgeNode, BadgeTree, BoxStyle, ComposeOptions, TextPlacement, TextRun, compose,
    };
    pub use zekken_layout::{BadgeRenderer, RenderError};
}

/// Pipeline failures, split by who should read them.
///
/// Validation messages are user-displayable and surface verbatim (the
/// client-error class). Renderer failures display a fixed opaque message;
/// the collaborator's own error stays reachable through `source()` for logs
/// (the server-error class).
#[derive(Debug, thiserror::Error)]
pub enum BadgeError {
    #[error(transparent)]
    Validation(#[from] zekken_core::Error),

    #[error("badge rendering failed")]
    Render(#[source] layout::RenderError),
}

pub type Result<T> = std::result::Result<T, BadgeError>;

/// Bundles a [`BadgeConfig`] with the badge pipeline.
///
/// All stages are pure and synchronous; an `Engine` is cheap to clone and
/// safe to share across threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: BadgeConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: BadgeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &BadgeConfig {
        &self.config
    }

    /// Validates raw request attributes, substituting the configured default
    /// category when `category` is absent.
    pub fn validate(
        &self,
        name: Option<&str>,
        number: Option<&str>,
        category: Option<&str>,
    ) -> Result<IdentityRecord> {
        match validate_attributes(name, number, category, self.config.default_category) {
            Ok(identity) => {
                tracing::debug!(
                    name_len = identity.name_len(),
                    number = identity.number(),
                    category = %identity.category(),
                    "attributes validated"
                );
                Ok(identity)
            }
            Err(err) => {
                tracing::debug!(error = %err, "attribute validation failed");
                Err(err.into())
            }
        }
    }

    /// Resolves the layout parameters for a validated identity.
    pub fn resolve(&self, identity: &IdentityRecord) -> layout::LayoutSpec {
        layout::resolve(identity)
    }

    /// Composes the declarative badge tree for a validated identity.
    pub fn compose(
        &self,
        identity: &IdentityRecord,
        options: &layout::ComposeOptions,
    ) -> layout::BadgeTree {
        let tree = layout::compose(identity, options);
        tracing::debug!(
            number = identity.number(),
            category = %identity.category(),
            "badge tree composed"
        );
        tree
    }

    /// Composes the badge tree and hands it to `renderer`.
    pub fn render_svg(
        &self,
        identity: &IdentityRecord,
        options: &layout::ComposeOptions,
        renderer: &dyn layout::BadgeRenderer,
    ) -> Result<String> {
        let tree = self.compose(identity, options);
        renderer.render(&tree).map_err(|source| {
            tracing::error!(error = %source, "badge renderer failed");
            BadgeError::Render(source)
        })
    }

    /// One-shot pipeline from raw attributes to SVG markup.
    pub fn render_badge(
        &self,
        name: Option<&str>,
        number: Option<&str>,
        category: Option<&str>,
        options: &layout::ComposeOptions,
        renderer: &dyn layout::BadgeRenderer,
    ) -> Result<String> {
        let identity = self.validate(name, number, category)?;
        self.render_svg(&identity, options, renderer)
    }
}
