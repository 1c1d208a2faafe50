//! Lottery Bot Library
//!
//! A minimal Telegram bot answering a fixed set of commands.
//!
//! This crate provides the core functionality for:
//! - Routing slash commands and inline button presses to replies
//! - Publishing the command menu to Telegram
//! - Delivering replies with a single best-effort fallback

pub mod commands;
pub mod config;
pub mod telegram;
