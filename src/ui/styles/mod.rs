// SPDX-License-Identifier: MPL-2.0
//! Centralised style functions for buttons, containers and overlays.

pub mod button;
pub mod container;
pub mod overlay;

pub use button::{overlay as button_overlay, primary as button_primary};
