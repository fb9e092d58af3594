pub mod commands;
pub mod procedures;
