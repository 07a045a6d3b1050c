// Copyright 2026 the Vecpath Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D vector path model, with the geometry needed to render it.
//!
//! A [`Path`] is an ordered list of drawing commands ([`Segment`]s): moves,
//! lines, quadratic and cubic Bézier curves, and elliptical arcs. On top of
//! that list the crate provides:
//!
//! - endpoint-to-center conversion of elliptical arcs ([`Arc::from_svg_arc`]),
//! - flattening of curves into [`Line`]s, with the bounding box accumulated
//!   in the same pass and cached on the path ([`Path::split_lines`],
//!   [`Path::bounding_box`]),
//! - stroke-to-fill conversion ([`stroke`], [`Path::stroke_to_fill`]),
//! - affine transformation ([`Path::copy_transformed`]),
//! - a compact path-command text form ([`Path`] implements `Display` and
//!   `FromStr`).
//!
//! # Examples
//!
//! ```
//! use vecpath::{Affine, Path, Point, Rect};
//!
//! let mut path = Path::new();
//! path.move_to((0.0, 0.0));
//! path.line_to((10.0, 0.0));
//! path.line_to((10.0, 10.0));
//! path.close();
//!
//! assert_eq!(path.bounding_box(), Rect::new(0.0, 0.0, 10.0, 10.0));
//! assert_eq!(path.to_string(), "M0,0 L10,0 L10,10 L0,0");
//!
//! let moved = path.copy_transformed(Affine::translate((5.0, 5.0)));
//! assert_eq!(moved.bounding_box(), Rect::new(5.0, 5.0, 15.0, 15.0));
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. The `alloc` crate is
//! used regardless.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("vecpath requires either the `std` or `libm` feature");

extern crate alloc;

mod affine;
mod arc;
pub mod common;
mod flatten;
mod line;
mod path;
mod point;
mod rect;
mod segment;
mod stroke;
mod svg;
mod vec2;

pub use crate::affine::Affine;
pub use crate::arc::{Arc, SvgArc};
pub use crate::flatten::{flatten, Flattened, Polylines, FLATTEN_TOLERANCE};
pub use crate::line::Line;
pub use crate::path::Path;
pub use crate::point::Point;
pub use crate::rect::Rect;
pub use crate::segment::{EllipticalArc, Segment};
pub use crate::stroke::{stroke, Cap, Join, Stroke};
pub use crate::svg::PathParseError;
pub use crate::vec2::Vec2;
