//! Embervale - Terminal Turn-Based RPG Library
//!
//! This module exposes the game logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod battle;
pub mod build_info;
pub mod constants;
pub mod game_state;
pub mod input;
pub mod items;
pub mod tabs;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;
