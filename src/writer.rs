//! Per-language JSON file output.
//!
//! The [`LocaleWriter`] is the production [`ContentSink`]: at every flush it
//! writes one JSON file per declared language, substituting the language code
//! into the destination template and resolving the result relative to the
//! source file's directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::interpreter::ContentSink;

pub struct LocaleWriter {
    base_dir: PathBuf,
    placeholder: String,
    written: Vec<PathBuf>,
}

impl LocaleWriter {
    /// Output paths are resolved relative to the source file's directory.
    pub fn new(source_path: &Path, placeholder: impl Into<String>) -> Self {
        Self {
            base_dir: source_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
            placeholder: placeholder.into(),
            written: Vec::new(),
        }
    }

    /// Every file written so far, in write order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ContentSink for LocaleWriter {
    fn flush(
        &mut self,
        template: &str,
        languages: &[String],
        content: &[Map<String, Value>],
    ) -> Result<()> {
        for (language, map) in languages.iter().zip(content) {
            // Substitute every placeholder occurrence; the template may put
            // the language code in a directory segment.
            let relative = template.replace(self.placeholder.as_str(), language);
            let path = self.base_dir.join(relative);

            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create directory \"{}\"", parent.display())
                })?;
            }

            let json = serde_json::to_string_pretty(map)
                .with_context(|| format!("failed to serialize content for \"{language}\""))?;
            fs::write(&path, format!("{}\n", json))
                .with_context(|| format!("failed to write \"{}\"", path.display()))?;

            self.written.push(path);
        }
        Ok(())
    }
}
