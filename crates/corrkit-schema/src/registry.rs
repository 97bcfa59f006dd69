use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::builtin;
use crate::config::RegistryConfig;
use crate::error::{Result, SchemaError};
use crate::field::{FieldDescriptor, RawField};
use crate::MAX_MSG_NUMBER;

/// A schema document as authored on disk or embedded.
#[derive(Debug, Clone, Deserialize)]
pub struct SchemaFile {
    pub msg_number: u32,
    pub headers: Vec<RawField>,
    /// Declared bit size of one content block.
    #[serde(default)]
    pub content_length: u32,
    #[serde(default)]
    pub content: Vec<RawField>,
}

/// Registered field layout for one message type.
///
/// Both lists follow the wire convention that slot 0 is a
/// discriminator-style placeholder: the decoder consumes the message
/// number before schema lookup and iterates each list from index 1.
#[derive(Debug, Clone)]
pub struct Schema {
    pub msg_number: u16,
    pub header: Vec<FieldDescriptor>,
    pub content: Vec<FieldDescriptor>,
    /// Declared bit size of one content block. Recorded for multi-block
    /// layouts; decoding currently reads a single block.
    pub content_bits: u32,
}

/// Message-number-keyed registry of field layouts.
///
/// Built once at startup and shared read-only; there is no hidden
/// global, so registries for different protocol revisions can coexist.
pub struct SchemaRegistry {
    schemas: HashMap<u16, Schema>,
    config: RegistryConfig,
}

impl SchemaRegistry {
    /// Create an empty registry with default config.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with explicit config.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            schemas: HashMap::new(),
            config,
        }
    }

    /// Registry pre-loaded with the built-in message types (2004, 2104).
    pub fn builtin() -> Result<Self> {
        Self::from_embedded(&[builtin::MSG_2004, builtin::MSG_2104])
    }

    /// Build a registry from embedded schema documents.
    pub fn from_embedded(schemas: &[&str]) -> Result<Self> {
        let mut registry = Self::new();
        for schema in schemas {
            registry.register(schema)?;
        }
        Ok(registry)
    }

    /// Register one schema from its JSON text.
    ///
    /// Replaces any schema previously registered for the same message
    /// number.
    pub fn register(&mut self, schema_json: &str) -> Result<()> {
        let raw: SchemaFile = serde_json::from_str(schema_json)?;
        self.register_value(raw)
    }

    /// Register one parsed schema document.
    pub fn register_value(&mut self, raw: SchemaFile) -> Result<()> {
        let msg_number = u16::try_from(raw.msg_number)
            .ok()
            .filter(|n| *n <= MAX_MSG_NUMBER)
            .ok_or(SchemaError::MsgNumberOutOfRange(raw.msg_number))?;
        if raw.headers.is_empty() {
            return Err(SchemaError::EmptyHeader(msg_number));
        }

        let header = raw
            .headers
            .into_iter()
            .map(FieldDescriptor::try_from)
            .collect::<Result<Vec<_>>>()?;
        let content = raw
            .content
            .into_iter()
            .map(FieldDescriptor::try_from)
            .collect::<Result<Vec<_>>>()?;

        debug!(
            msg_number,
            header_fields = header.len(),
            content_fields = content.len(),
            "registered message schema"
        );
        self.schemas.insert(
            msg_number,
            Schema {
                msg_number,
                header,
                content,
                content_bits: raw.content_length,
            },
        );
        Ok(())
    }

    /// Load schemas from a directory of `msg_<N>.schema.json` files.
    pub fn from_directory(path: &Path) -> Result<Self> {
        Self::from_directory_with_config(path, RegistryConfig::default())
    }

    /// Load schemas from a directory with explicit config.
    pub fn from_directory_with_config(path: &Path, config: RegistryConfig) -> Result<Self> {
        let mut registry = Self::with_config(config);
        registry.merge_directory(path)?;
        Ok(registry)
    }

    /// Load a schema directory into an existing registry, replacing
    /// entries for message numbers that collide.
    pub fn merge_directory(&mut self, path: &Path) -> Result<()> {
        let entries = std::fs::read_dir(path)
            .map_err(|err| SchemaError::LoadFailed(format!("{}: {err}", path.display())))?;

        let mut loaded = 0usize;
        for entry in entries {
            let entry = entry.map_err(|err| SchemaError::LoadFailed(err.to_string()))?;
            let file_name = entry.file_name();
            let file_name = file_name.to_string_lossy();
            if !entry
                .file_type()
                .map_err(|err| SchemaError::LoadFailed(err.to_string()))?
                .is_file()
            {
                continue;
            }
            if !file_name.ends_with(".schema.json") {
                continue;
            }
            if parse_msg_file_name(&file_name).is_none() {
                return Err(SchemaError::LoadFailed(format!(
                    "unrecognized schema filename: {file_name}"
                )));
            }

            loaded += 1;
            if loaded > self.config.max_schemas_from_directory {
                return Err(SchemaError::LoadFailed(format!(
                    "schema count exceeds configured max ({})",
                    self.config.max_schemas_from_directory
                )));
            }

            let entry_path = entry.path();
            let metadata = entry
                .metadata()
                .map_err(|err| SchemaError::LoadFailed(err.to_string()))?;
            if metadata.len() > self.config.max_schema_file_size as u64 {
                return Err(SchemaError::LoadFailed(format!(
                    "schema file too large ({} bytes): {file_name}",
                    metadata.len()
                )));
            }

            let content = std::fs::read_to_string(&entry_path).map_err(|err| {
                SchemaError::LoadFailed(format!("{}: {err}", entry_path.display()))
            })?;
            self.register(&content)?;
        }
        Ok(())
    }

    /// Look a schema up by message number.
    pub fn get(&self, msg_number: u16) -> Option<&Schema> {
        self.schemas.get(&msg_number)
    }

    /// Whether a schema is registered for the message number.
    pub fn has_schema(&self, msg_number: u16) -> bool {
        self.schemas.contains_key(&msg_number)
    }

    /// Registered message numbers, sorted.
    pub fn msg_numbers(&self) -> Vec<u16> {
        let mut numbers: Vec<u16> = self.schemas.keys().copied().collect();
        numbers.sort_unstable();
        numbers
    }

    /// Registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_msg_file_name(file_name: &str) -> Option<u16> {
    let suffix = ".schema.json";
    let prefix = "msg_";
    if !file_name.starts_with(prefix) || !file_name.ends_with(suffix) {
        return None;
    }
    file_name[prefix.len()..file_name.len() - suffix.len()]
        .parse::<u16>()
        .ok()
}
