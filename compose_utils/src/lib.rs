pub mod allocator;
pub mod args;
pub mod cli;
pub mod command;
pub mod docker;
pub mod error;
pub mod image;
pub mod links;
pub mod memory;
pub mod naming;
pub mod port;
pub mod restart;

pub use allocator::IdAllocator;
pub use docker::{ContainerSource, DockerEngine};
pub use error::{Error, Result};
pub use naming::{NameGenerator, Namespace};

/// Reads the run of ASCII digits at the start of `s`, after leading
/// whitespace; anything else is 0.
pub(crate) fn leading_integer(s: &str) -> u64 {
    let s = s.trim_start();
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    s[..end].parse().unwrap_or(0)
}

/// Splits shorthand on `:`. Trailing empty fields are dropped, so `"web:"`
/// has one field and `""` has none.
pub(crate) fn split_fields(s: &str) -> Vec<&str> {
    let mut fields: Vec<&str> = s.split(':').collect();
    while fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }
    fields
}
