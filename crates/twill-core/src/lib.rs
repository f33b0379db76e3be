//! Design-token layer for twill.
//!
//! This crate holds everything class resolution reads but never mutates:
//!
//! - **Theme**: [`ThemeConfig`], the built-in defaults and user-theme merging
//! - **Config lookup**: the one-hop [`resolve_config_value`] rule
//! - **Colors**: CSS color parsing for the color/opacity split
//! - **Style objects**: [`StyleObject`], the nested property map fragments
//!   are merged into
//!
//! A [`ThemeConfig`] is plain data and can be shared across threads while
//! many class lists resolve against it.

pub mod color;
pub mod style;
pub mod theme;

mod error;

pub use error::{Error, Result};
pub use style::StyleObject;
pub use theme::{ConfigValue, ThemeConfig, resolve_config_value};
