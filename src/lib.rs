//! Isometric tile map rendering with painter's-order depth sorting.
//!
//! The pure core lives in [`rendering::isometric_projection`] (grid/screen
//! transform), [`rendering::depth_order`] (draw list construction) and
//! [`actor`] (movement validation). The Bevy plugins around them only feed
//! input in and turn draw lists into sprites.

pub mod actor;
pub mod config;
pub mod error;
pub mod rendering;
pub mod world;
