//! Shared components for planning how picture frames are cut from stock aluminium bars
//! and for pricing the result.

/// Frames, edges, bar plans and the grouped results built from them
pub mod entities;

/// Conversion of frames into the edges that have to be cut
pub mod expand;

/// Importing orders into and exporting quotations out of this library
pub mod io;

/// Retail and batch pricing of frame groups
pub mod pricing;

/// Helper functions which do not belong to any specific module
pub mod util;
