//! Sega console texture remappers.
//!
//! This crate provides swizzle/unswizzle implementations for Sega
//! platforms:
//!
//! - Dreamcast (PowerVR rotated-Morton "twiddled" textures)

pub mod dreamcast;

pub use dreamcast::DreamcastRemapper;
