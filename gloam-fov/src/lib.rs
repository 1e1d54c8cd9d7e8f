//! Per-tick line-of-sight visibility via recursive octant shadow-casting.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod shadowcast;
pub mod visibility;

pub use shadowcast::cast;
pub use visibility::{
    NoVisuals, ViewBounds, VisibilityCell, VisibilityMap, VisualSink, DIM_TINT, FADE_SCALE,
    LIT_TINT,
};
