//! scrollpin
//!
//! Decides when a continuously growing scrollable view should pin itself to
//! the bottom without fighting the user.
//!
//! The decision core ([`state`]) is pure and clock-free; [`surface`] bundles
//! it with change detection and a clock for one scrollable region. Event
//! sources live in [`source`], and [`view`] is a terminal demo that drives a
//! surface from a synthetic stream.

pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod sink;
pub mod source;
pub mod state;
pub mod surface;
pub mod view;
