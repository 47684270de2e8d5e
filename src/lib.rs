#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

mod bitgrid;
mod board;
mod common;
mod config;
#[cfg(feature = "std")]
mod logging;
pub mod overlay;
pub mod render;
pub mod shape;
mod ship;
pub mod simulation;

pub use bitgrid::{BitGrid, GridError};
pub use board::*;
pub use common::*;
pub use config::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use overlay::{apply_ability, footprint};
#[cfg(feature = "std")]
pub use render::print_board;
pub use render::BoardView;
pub use shape::{
    build_cone, build_cross, build_diamond, AbilityKit, AbilityMask, AbilityShape, StandardMask,
};
pub use ship::*;
pub use simulation::{Scenario, Simulation};
