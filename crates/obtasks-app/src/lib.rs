//! `obsidian-tasks`: reports which recurring tasks in an Obsidian vault are active today.

pub mod app;
pub mod config;
pub mod error;
