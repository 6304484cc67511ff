//! Space Explorer: a single-screen arcade shooter simulation.
//!
//! The library holds the whole game simulation. The binary in `main.rs`
//! only polls the keyboard, calls [`compute::tick`] once per frame, and
//! draws the resulting [`snapshot::RenderSnapshot`].

pub mod audio;
pub mod boss;
pub mod combat;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod menu;
pub mod player;
pub mod progression;
pub mod save;
pub mod snapshot;
pub mod spawner;
