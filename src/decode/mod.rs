// Author: Dustin Pilgrim
// License: MIT

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::ast::Document;
use crate::binder::{self, Record};
use crate::error::{GcfgError, Result};
use crate::parser::Parser;

/// Tokenize and parse `input` into a value tree.
pub fn parse(input: &[u8]) -> Result<Document> {
    Parser::new(input)?.parse_file()
}

/// Parse `input` and bind it into a new `T`.
///
/// # Examples
/// ```
/// #[derive(Debug, Default, PartialEq)]
/// struct Flags {
///     verbose: bool,
/// }
/// gcfg::record!(Flags { verbose => "verbose" });
///
/// let flags: Flags = gcfg::from_slice(b"verbose = true").unwrap();
/// assert!(flags.verbose);
/// ```
pub fn from_slice<T: Record>(input: &[u8]) -> Result<T> {
    let doc = parse(input)?;
    debug!(target_record = std::any::type_name::<T>(), "binding document");
    binder::bind(&doc)
}

pub fn from_str<T: Record>(input: &str) -> Result<T> {
    from_slice(input.as_bytes())
}

/// Bind `input` into `target`.
///
/// `target` is only overwritten when every field bound; on error it keeps its
/// previous contents.
pub fn unmarshal<T: Record>(input: &[u8], target: &mut T) -> Result<()> {
    *target = from_slice(input)?;
    Ok(())
}

/// Like [`unmarshal`], allocating the record when `holder` is empty.
///
/// An empty holder stays empty if binding fails.
pub fn unmarshal_into<T: Record>(input: &[u8], holder: &mut Option<T>) -> Result<()> {
    *holder = Some(from_slice(input)?);
    Ok(())
}

/// Read a config file and bind it into a new `T`.
///
/// # Example
/// ```ignore
/// let config: AppConfig = gcfg::from_file("app.gcfg")?;
/// ```
pub fn from_file<T: Record, P: AsRef<Path>>(path: P) -> Result<T> {
    let path_ref = path.as_ref();
    let content = fs::read(path_ref).map_err(|e| GcfgError::FileError {
        message: format!("Failed to read file: {}", e),
        path: path_ref.to_string_lossy().to_string(),
        hint: Some("Check that the file exists and is readable".into()),
        code: Some(301),
    })?;
    debug!(path = %path_ref.display(), bytes = content.len(), "loaded config file");
    from_slice(&content)
}

#[cfg(test)]
mod tests;
