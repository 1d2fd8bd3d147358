//! AIGUMENT Core Library
//!
//! Provides the templated debate composer, its input and transcript
//! records, preset personas, session state and transcript export.

pub mod composer;
pub mod config;
pub mod error;
pub mod input;
pub mod participant;
pub mod persona;
pub mod perspective;
pub mod render;
pub mod session;
pub mod template;
pub mod topics;
pub mod transcript;

pub use composer::{Composer, compose};
pub use config::{Config, default_config};
pub use error::DebateError;
pub use input::{DebateOptions, InputConfig};
pub use participant::{Guest, GuestProfile, Host, Speaker};
pub use persona::{Cast, default_cast};
pub use perspective::{Perspective, available_perspectives};
pub use render::{ExportFormat, download_filename, render_markdown, render_text};
pub use session::SessionState;
pub use template::{TemplateLibrary, TemplateSet};
pub use transcript::{Transcript, Turn};
