//! Row interpretation state machine.
//!
//! An [`Interpreter`] consumes sheet rows in top-to-bottom order and
//! accumulates per-language string entries against the current destination.
//! Whenever the destination changes (a new `F` row) or input ends, the
//! accumulated content is handed to a [`ContentSink`] - the file writer in
//! production, an in-memory recorder in tests.
//!
//! Grammar violations (a second `C` row, `F` before `C`, a string entry with
//! a blank default value, ...) abort the whole run. Duplicated string ids and
//! missing translations are tracked and reported, not fatal.

use anyhow::{Result, bail};
use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};

pub mod row;

use self::row::Row;

/// Receiver for a destination's accumulated content at flush time.
///
/// `languages` and `content` are parallel: `content[i]` holds the string-id
/// to translation map for `languages[i]`, in insertion order.
pub trait ContentSink {
    fn flush(
        &mut self,
        template: &str,
        languages: &[String],
        content: &[Map<String, Value>],
    ) -> Result<()>;
}

impl<S: ContentSink + ?Sized> ContentSink for &mut S {
    fn flush(
        &mut self,
        template: &str,
        languages: &[String],
        content: &[Map<String, Value>],
    ) -> Result<()> {
        (**self).flush(template, languages, content)
    }
}

/// Outcome of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    /// Distinct (language, string-id) assignments across the whole run.
    pub entries: u64,
    /// Per-language count of entries that fell back to the default value,
    /// in declaration order. Accumulates across destinations.
    pub missing: IndexMap<String, u64>,
    /// String ids that were assigned more than once within one destination,
    /// in first-seen order.
    pub duplicates: IndexSet<String>,
}

/// One-shot row interpreter. Create it with a sink, feed it every row of the
/// sheet through [`Interpreter::process`], get back a [`ConversionReport`].
pub struct Interpreter<S> {
    sink: S,
    languages: Vec<String>,
    // Parallel to `languages`. Cleared on every new destination.
    content: Vec<Map<String, Value>>,
    // Parallel to `languages`. Never cleared: missing counts accumulate
    // across destinations while content does not.
    missing: Vec<u64>,
    duplicates: IndexSet<String>,
    entries: u64,
    destination: Option<String>,
}

impl<S: ContentSink> Interpreter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            languages: Vec::new(),
            content: Vec::new(),
            missing: Vec::new(),
            duplicates: IndexSet::new(),
            entries: 0,
            destination: None,
        }
    }

    /// Process every row of the sheet in order, flushing the last pending
    /// destination at end-of-input.
    pub fn process<I>(mut self, rows: I) -> Result<ConversionReport>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        for cells in rows {
            match Row::parse(&cells) {
                None | Some(Row::Comment) => {}
                Some(Row::Languages(codes)) => self.declare_languages(codes)?,
                Some(Row::Destination(template)) => self.set_destination(template)?,
                Some(Row::Entry { id, values }) => self.add_entry(&id, &values)?,
            }
        }

        if let Some(template) = self.destination.take() {
            self.sink.flush(&template, &self.languages, &self.content)?;
        }

        let missing = self
            .languages
            .iter()
            .cloned()
            .zip(self.missing.iter().copied())
            .collect();

        Ok(ConversionReport {
            entries: self.entries,
            missing,
            duplicates: self.duplicates,
        })
    }

    fn declare_languages(&mut self, codes: Vec<String>) -> Result<()> {
        if !self.languages.is_empty() {
            bail!("language codes are already declared (more than one \"C\" row)");
        }
        if codes.is_empty() {
            bail!("\"C\" row declares no language codes");
        }
        if codes.iter().any(|code| code.is_empty()) {
            bail!("\"C\" row contains an empty language code");
        }

        self.content = vec![Map::new(); codes.len()];
        self.missing = vec![0; codes.len()];
        self.languages = codes;
        Ok(())
    }

    fn set_destination(&mut self, template: String) -> Result<()> {
        if self.languages.is_empty() {
            bail!("destination row (\"F\") found before language declaration (\"C\")");
        }
        if template.is_empty() {
            bail!("destination row (\"F\") has an empty file path");
        }

        // The previous destination's content is written out before it is
        // replaced; the last one is flushed at end-of-input.
        if let Some(previous) = self.destination.replace(template) {
            self.sink.flush(&previous, &self.languages, &self.content)?;
        }
        for map in &mut self.content {
            map.clear();
        }
        Ok(())
    }

    fn add_entry(&mut self, id: &str, values: &[String]) -> Result<()> {
        if self.destination.is_none() {
            bail!("string row \"{id}\" found before destination row (\"F\")");
        }
        // Blank ids are skipped, not rejected.
        if id.is_empty() {
            return Ok(());
        }

        for (i, language) in self.languages.iter().enumerate() {
            let cell = values.get(i).map(String::as_str).unwrap_or("");
            if cell.trim().is_empty() {
                // The first language is the default: its value is mandatory
                // and doubles as the fallback for the other languages.
                if i == 0 {
                    bail!("string \"{id}\" has no value for the default language \"{language}\"");
                }
                self.missing[i] += 1;
                self.content[i].insert(id.to_string(), Value::String(values[0].clone()));
            } else {
                if self.content[i].contains_key(id) {
                    self.duplicates.insert(id.to_string());
                } else {
                    self.entries += 1;
                }
                self.content[i].insert(id.to_string(), Value::String(cell.to_string()));
            }
        }
        Ok(())
    }
}
