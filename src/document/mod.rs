//! Instruction, prompt, and plain documents of a playbook.

mod applicability;
mod kind;
mod metadata;
mod reader;

pub use crate::common::extract_frontmatter;
pub use applicability::{Applicability, split_patterns};
pub use kind::DocumentKind;
pub use metadata::DocumentMetadata;
pub use reader::{DocumentReader, DocumentSummary, ProcessedDocument};
