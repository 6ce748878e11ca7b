//! The three resource commands

pub mod check;
pub mod in_command;
pub mod out;
