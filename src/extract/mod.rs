//! Comment extraction engine.
//!
//! Turns raw stylesheet text into [`Page`]s:
//!
//! - [`comments`]: find `/* ... */` regions in source order
//! - [`normalize`]: strip delimiters and canonicalize indentation
//! - [`segment`]: split a comment into prose and at most one code example
//! - [`page`]: derive slug, heading, group and output path
//! - [`diagnostics`]: advisory warnings for missing comments or headings
//! - [`groups`]: navigation index keyed by top-level folder
//!
//! Nothing in here touches the filesystem.

pub mod comments;
pub mod diagnostics;
pub mod groups;
pub mod ids;
pub mod normalize;
pub mod page;
pub mod segment;

pub use comments::extract_comments;
pub use diagnostics::{Diagnostic, DiagnosticKind, report};
pub use groups::{Group, GroupIndex, PageSummary};
pub use ids::{IdSource, RandomIds, SequentialIds};
pub use normalize::normalize;
pub use page::{HeadingOrigin, Page, PageBuilder, SourceFile};
pub use segment::{Example, Section, flatten, segment};
