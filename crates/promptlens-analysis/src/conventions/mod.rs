//! Convention discovery: open-ended tags, variable syntaxes, section headers
//! and identifier naming styles.

pub mod aggregate;
pub mod discover;
pub mod headers;
pub mod naming;
pub mod preferred;
pub mod tags;
pub mod types;
pub mod variables;

pub use aggregate::{aggregate, merge_into};
pub use discover::{discover, ConventionDiscoverer};
pub use headers::HeaderScanner;
pub use naming::classify_identifier;
pub use preferred::{preferred_conventions, PreferredConventions, TagStyle};
pub use types::{ConventionProfile, HeaderCount, NamingStyle, VariableSyntax};
