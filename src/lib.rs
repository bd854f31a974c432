// Copyright 2026 the Morphpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Smooth outlines built from lines and arcs tangent to a sequence of circles.
//!
//! The morphpath library walks an ordered list of circles, each with a winding
//! [`Direction`], and produces one continuous outline: a straight line onto
//! each circle, an arc around it, and a common tangent over to the next one.
//! It was designed for morphing bottom-navigation bars, where the selected
//! item pushes a circular bump out of the bar between two corner fillets,
//! but the core is plain computational geometry and knows nothing about any
//! UI toolkit.
//!
//! # Examples
//!
//! Joining two circles with their lower exterior tangent:
//! ```
//! use morphpath::{assemble, CircleShape, Direction, PathSegment, Point};
//!
//! let circles = [
//!     CircleShape::new((0.0, 0.0), 5.0, Direction::Clockwise),
//!     CircleShape::new((20.0, 0.0), 5.0, Direction::Clockwise),
//! ];
//! let path = assemble(Point::new(-10.0, 0.0), Point::new(30.0, 0.0), &circles).unwrap();
//! assert_eq!(path.len(), 6);
//! if let PathSegment::LineTo(p) = path.segments()[3] {
//!     assert!(p.distance(Point::new(20.0, -5.0)) < 1e-9);
//! }
//! ```
//!
//! Building the edge of a navigation bar mid-animation:
//! ```
//! use morphpath::MorphEdge;
//!
//! let mut edge = MorphEdge::new(4, 24.0, 8.0, 16.0);
//! edge.select(2);
//! let path = edge.edge_path(400.0, 0.5).unwrap();
//! assert!(path.to_svg().starts_with("M0 16"));
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The crate uses `alloc` regardless.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(
    clippy::many_single_char_names,
    reason = "geometry formulas read best with their textbook names"
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("morphpath requires either the `std` or `libm` feature");

extern crate alloc;

mod angle;
mod builder;
mod circle;
mod common;
mod direction;
mod line;
mod morph;
mod path;
mod point;
mod rect;
mod tangent;
mod vec2;

pub use crate::angle::*;
pub use crate::builder::*;
pub use crate::circle::*;
pub use crate::direction::*;
pub use crate::line::*;
pub use crate::morph::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::rect::*;
pub use crate::tangent::*;
pub use crate::vec2::*;
