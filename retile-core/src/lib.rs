//! Core types and shared primitives for the `retile` texture swizzling
//! toolkit.
//!
//! This crate defines the data model ([`ImageGeometry`], [`BlockShape`],
//! [`SwizzleDirection`]), the common remapper contract
//! ([`TextureRemapper`]), the error taxonomy ([`RemapError`]), the
//! [`Platform`] registry enum, and the two building blocks most platform
//! layouts are made of: Morton index calculation ([`morton`]) and
//! generic block/tile reordering ([`blocks`]).
//!
//! The per-platform remappers live in the vendor crates
//! (`retile-nintendo`, `retile-sony`, `retile-sega`,
//! `retile-microsoft`).

pub mod blocks;
pub mod error;
pub mod geometry;
pub mod morton;
pub mod platform;
pub mod remapper;

pub use error::RemapError;
pub use geometry::{BlockShape, ImageGeometry, SwizzleDirection};
pub use platform::{Platform, PlatformParseError};
pub use remapper::TextureRemapper;
