//! Projects.

pub mod model;

pub use model::{Project, ProjectCard, ProjectStatus};
