//! Play zones: which player an input belongs to and where drops land.

pub mod geometry;
pub mod resolver;

pub use geometry::{Point, Rect};
pub use resolver::{
    is_within_target, owner_at, resolve_owner, LayoutProvider, StaticLayout, DEFAULT_DROP_PADDING,
};
