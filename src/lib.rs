//! Album layout: tile geometry for grouped photo/video messages.
//!
//! Pure geometry: no decoding, no I/O, `no_std` + `alloc` compatible.
//!
//! # Modules
//!
//! - [`engine`]: the [`compute`] entry point with the 1–4 item conventions
//! - [`balance`]: row partitioning for five or more items
//! - [`layout`]: output types (positions, edge flags, the grouped layout)
//! - [`config`]: display width, spacing, row bounds, balance targets
//! - [`cache`]: caller-owned memo keyed by ids and content version
//! - [`source`]: descriptor snapshots with placeholder substitution
//! - `svg`: debug visualization (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod balance;
pub mod cache;
pub mod config;
mod distribute;
pub mod engine;
pub mod error;
mod geometry;
pub mod layout;
pub mod media;
pub mod source;
#[cfg(feature = "svg")]
pub mod svg;

pub use cache::LayoutCache;
pub use config::AlbumConfig;
pub use engine::compute;
pub use error::{AlbumError, ConfigError, InputError};
pub use geometry::Size;
pub use layout::{Arrangement, Corners, Edges, GroupedLayout, PairLayout, Position, RowDeviation};
pub use media::{ItemId, MediaDescriptor, MediaKind};
pub use source::{DimensionSource, Placeholder, snapshot};
