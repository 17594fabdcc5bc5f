//! The pairwise collision tests.
//!
//! Every unordered pair of shape kinds has exactly one test here, taking its arguments in a fixed order.  The shape
//! types and [crate::Shape] route both orders of a pair to the same function, which is what keeps collision symmetric.
pub(crate) mod circle_circle;
pub(crate) mod line_circle;
pub(crate) mod line_line;
pub(crate) mod line_polygon;
pub(crate) mod polygon_circle;
pub(crate) mod polygon_polygon;
pub(crate) mod sat;

pub(crate) use circle_circle::*;
pub(crate) use line_circle::*;
pub(crate) use line_line::*;
pub(crate) use line_polygon::*;
pub(crate) use polygon_circle::*;
pub(crate) use polygon_polygon::*;
