//! Z-ordered collection of SVG nodes.
//!
//! Surfaces push nodes tagged with a [`RenderLayer`] in draw order;
//! [`LayeredOutput::render`] groups them into one `<g data-layer=...>` per
//! layer, bottom to top, keeping draw order within each layer.

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Canvas fill
    Background,
    /// Beams, component glyphs and routes, in board insertion order
    Content,
    /// Annotation leaders, free arrows and label backgrounds
    Annotation,
    /// Label text
    Text,
}

impl RenderLayer {
    /// Returns the value used for the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Content => "content",
            Self::Annotation => "annotation",
            Self::Text => "text",
        }
    }
}

/// SVG nodes tagged with their layer.
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node to `layer`, after any node already in that layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Moves every node of `other` into this output.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of nodes across all layers.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Renders all layers to SVG groups, consuming the output.
    ///
    /// Each non-empty layer becomes one `<g>` element; empty layers are
    /// skipped.
    ///
    /// ```
    /// use optika_core::draw::{LayeredOutput, RenderLayer};
    /// use svg::node::element::{Path, Rectangle};
    ///
    /// let mut output = LayeredOutput::new();
    /// output.add_to_layer(RenderLayer::Content, Box::new(Path::new()));
    /// output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));
    ///
    /// // Background group comes first although it was added last
    /// assert_eq!(output.render().len(), 2);
    /// ```
    pub fn render(mut self) -> Vec<SvgNode> {
        // Stable: draw order survives within a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut layers: Vec<(RenderLayer, Vec<SvgNode>)> = Vec::new();
        for (layer, node) in self.items {
            match layers.last_mut() {
                Some((current, nodes)) if *current == layer => nodes.push(node),
                _ => layers.push((layer, vec![node])),
            }
        }

        layers
            .into_iter()
            .map(|(layer, nodes)| {
                let group = nodes.into_iter().fold(
                    svg_element::Group::new().set("data-layer", layer.name()),
                    |group, node| group.add(node),
                );
                Box::new(group) as SvgNode
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Path, Rectangle};

    use super::*;

    #[test]
    fn test_layer_order() {
        assert!(RenderLayer::Background < RenderLayer::Content);
        assert!(RenderLayer::Content < RenderLayer::Annotation);
        assert!(RenderLayer::Annotation < RenderLayer::Text);
    }

    #[test]
    fn test_empty_output_renders_nothing() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_one_group_per_layer() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Content, Box::new(Path::new()));
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Content, Box::new(Path::new()));
        assert_eq!(output.len(), 3);

        let groups = output.render();
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn test_groups_emitted_bottom_to_top() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Text, Box::new(Rectangle::new()));
        output.add_to_layer(RenderLayer::Background, Box::new(Rectangle::new()));

        let rendered: String = output
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect();
        let background = rendered.find("background").unwrap();
        let text = rendered.find("\"text\"").unwrap();
        assert!(background < text);
    }

    #[test]
    fn test_merge_keeps_nodes() {
        let mut first = LayeredOutput::new();
        first.add_to_layer(RenderLayer::Content, Box::new(Path::new()));

        let mut second = LayeredOutput::new();
        second.add_to_layer(RenderLayer::Annotation, Box::new(Path::new()));

        first.merge(second);
        assert_eq!(first.render().len(), 2);
    }
}
