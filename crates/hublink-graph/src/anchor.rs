//! Deterministic anchor-text selection.
//!
//! Links to the same page should not all read the same, yet a page must
//! render identically every time it is built. Selection is therefore a
//! pure function of `(from, to, context)`: the triple is hashed, the hash
//! picks a category using per-context thresholds, and the same hash picks
//! a phrasing inside that category.
//!
//! The hash is part of the contract. Changing it changes which text every
//! link on the site renders.

use crate::graph::SiteGraph;
use hublink_core::{AnchorCategory, AnchorTextVariants, LinkContext};
use serde::Serialize;
use tracing::debug;

/// Polynomial rolling hash over the UTF-16 code units of `key`.
///
/// `h = h * 31 + unit` with 32-bit signed wrap-around at every step,
/// absolute value at the end. `i32::MIN` maps to `2^31`.
pub fn anchor_hash(key: &str) -> u32 {
    key.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
        .unsigned_abs()
}

/// The hash key for a link: `"{from}-{to}-{context}"`.
pub fn anchor_key(from: &str, to: &str, context: LinkContext) -> String {
    format!("{from}-{to}-{context}")
}

/// Maps a bucket in `0..100` to a category for the given context.
///
/// | context    | exact  | partial | branded |
/// |------------|--------|---------|---------|
/// | upward     | 90-99  | 0-69    | 70-89   |
/// | downward   | 0-59   | 60-84   | 85-99   |
/// | sideways   | 50-79  | 0-49    | 80-99   |
/// | conversion | always |         |         |
pub fn category_for(context: LinkContext, bucket: u32) -> AnchorCategory {
    use AnchorCategory::{Branded, Exact, Partial};

    match context {
        LinkContext::Upward => match bucket {
            0..=69 => Partial,
            70..=89 => Branded,
            _ => Exact,
        },
        LinkContext::Downward => match bucket {
            0..=59 => Exact,
            60..=84 => Partial,
            _ => Branded,
        },
        LinkContext::Sideways => match bucket {
            0..=49 => Partial,
            50..=79 => Exact,
            _ => Branded,
        },
        LinkContext::Conversion => Exact,
    }
}

/// A phrasing picked from a page's vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnchorVariant<'a> {
    pub category: AnchorCategory,
    pub index: usize,
    pub text: &'a str,
}

/// Picks a phrasing from `variants` for the link `(from, to, context)`.
///
/// Returns `None` only if the chosen category is empty, which a built
/// graph rules out.
pub fn select_variant<'a>(
    variants: &'a AnchorTextVariants,
    from: &str,
    to: &str,
    context: LinkContext,
) -> Option<AnchorVariant<'a>> {
    let hash = anchor_hash(&anchor_key(from, to, context));
    let category = category_for(context, hash % 100);

    let phrasings = variants.get(category);
    if phrasings.is_empty() {
        return None;
    }
    let index = hash as usize % phrasings.len();

    Some(AnchorVariant {
        category,
        index,
        text: &phrasings[index],
    })
}

/// The text to display for a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnchorText<'a> {
    /// A phrasing from the target's vocabulary.
    Variant(AnchorVariant<'a>),
    /// The target is unknown; its raw id stands in as the text.
    Fallback { text: &'a str },
}

impl<'a> AnchorText<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            AnchorText::Variant(variant) => variant.text,
            AnchorText::Fallback { text } => text,
        }
    }

    pub fn category(&self) -> Option<AnchorCategory> {
        match self {
            AnchorText::Variant(variant) => Some(variant.category),
            AnchorText::Fallback { .. } => None,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, AnchorText::Fallback { .. })
    }
}

impl std::fmt::Display for AnchorText<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SiteGraph {
    /// Selects the anchor text for a link from `from` to `to`.
    ///
    /// `from` does not need to exist; it only feeds the hash. An unknown
    /// `to` yields [`AnchorText::Fallback`] carrying `to` itself.
    pub fn select_anchor_text<'a>(
        &'a self,
        from: &str,
        to: &'a str,
        context: LinkContext,
    ) -> AnchorText<'a> {
        let selected = self
            .get(to)
            .and_then(|target| select_variant(&target.anchor_text_variants, from, to, context));

        match selected {
            Some(variant) => AnchorText::Variant(variant),
            None => {
                debug!(from, to, %context, "anchor text falling back to target id");
                AnchorText::Fallback { text: to }
            }
        }
    }
}
