//! Command-line front end for the ShaderLab dev server.
//!
//! The binary parses [`Cli`], installs logging and hands a
//! [`shaderlab_axum::ServerConfig`] to [`shaderlab_axum::start_server`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used only by the binary target
use anyhow as _;
use dotenvy as _;
use tokio as _;

pub mod logging;
pub mod parser;

pub use logging::init_tracing;
pub use parser::Cli;
