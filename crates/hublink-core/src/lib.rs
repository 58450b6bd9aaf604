//! Hublink Core - Page model for the internal-linking graph
//!
//! This crate holds the plain data types every other Hublink crate works
//! with: pages, their layers, the anchor-text vocabulary each page offers
//! as a link target, and the contexts a link can appear in.
//!
//! There is no graph logic here. `hublink-graph` owns lookups, validation
//! and anchor-text selection.
//!
//! # Example
//!
//! ```
//! use hublink_core::{AnchorTextVariants, Layer, PageNode, PageType};
//!
//! let node = PageNode::new("mesa", "Mesa", "/cabinet-refacing-mesa", Layer::Anchor, PageType::City)
//!     .with_parent("homepage")
//!     .with_variants(AnchorTextVariants::new(
//!         vec!["Cabinet Refacing Mesa".into()],
//!         vec!["Mesa kitchen experts".into()],
//!         vec!["Vulpine Mesa".into()],
//!     ))
//!     .with_priority(9);
//!
//! assert_eq!(node.layer, Layer::Anchor);
//! ```

mod context;
mod error;
mod layer;
mod node;

pub use context::{AnchorCategory, LinkContext};
pub use error::ModelError;
pub use layer::{Layer, PageType, MAX_DEPTH};
pub use node::{AnchorTextVariants, NodeMetadata, PageNode, MAX_PRIORITY, MIN_PRIORITY};
