//! Two-dimensional collision detection for segments, circles, and convex polygons.
//!
//! Pairwise tests use the separating axis theorem.  Everything here is detection only: shapes are tested in their
//! current pose and nothing is resolved or moved.
mod aabb;
mod axis;
mod circle;
mod collision_tests;
mod errors;
mod line;
mod polygon;
mod shape;
pub mod tolerance;
mod v2;


pub use aabb::*;
pub use axis::*;
pub use circle::*;
pub use errors::*;
pub use line::*;
pub use polygon::*;
pub use shape::*;
pub use v2::*;
