//! Page fixtures shared by unit tests.

use hublink_core::{AnchorTextVariants, Layer, PageNode, PageType};

/// A page named after its id ("east" -> "East") with one phrasing per
/// category and priority 5.
pub(crate) fn node(id: &str, layer: Layer, page_type: PageType, parent: Option<&str>) -> PageNode {
    let mut chars = id.chars();
    let name: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    };

    let mut node = PageNode::new(id, name.clone(), format!("/{id}"), layer, page_type)
        .with_variants(AnchorTextVariants::new(
            vec![format!("{name} exact")],
            vec![format!("{name} partial")],
            vec![format!("{name} branded")],
        ))
        .with_priority(5)
        .with_description(format!("{name} page"));
    node.parent = parent.map(str::to_string);
    node
}

/// A layer-3 conversion page.
pub(crate) fn quote(id: &str) -> PageNode {
    node(id, Layer::Conversion, PageType::Conversion, None)
}
