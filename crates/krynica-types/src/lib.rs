//! Foundation types for Krynica: the article data model and the shared
//! error type used across the workspace.

pub mod article;
pub mod error;

pub use article::{Article, ArticleSection};
pub use error::{KrynicaError, Result};
