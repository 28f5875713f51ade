//! Schemata Core Types and Definitions
//!
//! This crate provides the drawing primitives that Schemata diagrams are built
//! from. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Shape, arrow and text drawing routines that emit layered SVG
//!   ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
