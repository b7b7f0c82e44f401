//! Visual definitions shared by every drawn scene item.
//!
//! - [`StrokeDefinition`] and friends describe how lines are stroked.
//! - [`LayeredOutput`] collects SVG nodes per [`RenderLayer`] so later layers
//!   always sit on top of earlier ones.
//! - [`TextDefinition`] and [`Text`] describe and measure annotation labels.

mod layer;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeCap, StrokeDefinition, StrokeJoin, StrokeStyle};
pub use text::{Text, TextDefinition};
