//! Named, read-only collections of style definitions.
//!
//! A [`StyleRegistry`] maps component names (`button`, `select-item`) to
//! validated [`StyleDefinition`]s. It is filled once, from code, from
//! definition documents, or from a directory of definition files, and then
//! only read.
//!
//! # Directory layout
//!
//! [`StyleRegistry::load_dir`] walks a directory recursively. Every file with a
//! recognized extension holds one definition, named by its path relative to
//! the root without the extension:
//!
//! ```text
//! styles/
//!   button.yaml          -> "button"
//!   forms/select.yml     -> "forms/select"
//!   forms/input.json     -> "forms/input"
//! ```
//!
//! # Supported Extensions
//!
//! | Priority | Extension |
//! |----------|-----------|
//! | 1 (highest) | `.yaml` |
//! | 2 | `.yml` |
//! | 3 (lowest) | `.json` |
//!
//! If one directory holds the same name with several extensions, the
//! higher-priority file wins and the others are skipped.
//!
//! # Collision Handling
//!
//! Registering a name twice from different sources is an error
//! ([`RegistryError::Collision`]) listing both sources. Nothing is silently
//! replaced.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config;
use crate::definition::StyleDefinition;
use crate::error::{LoadError, RegistryError};

/// Recognized definition file extensions in priority order.
pub const DEFINITION_EXTENSIONS: &[&str] = &[".yaml", ".yml", ".json"];

const INLINE_SOURCE: &str = "<inline>";

/// A definition file discovered while walking a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionFile {
    /// Name without extension, using `/` separators (`forms/select`).
    pub name: String,
    /// Name including the extension (`forms/select.yml`).
    pub name_with_ext: String,
    /// Absolute path of the file.
    pub absolute_path: PathBuf,
    /// The directory the walk started from.
    pub source_dir: PathBuf,
}

impl DefinitionFile {
    /// Creates a definition file entry.
    pub fn new(
        name: impl Into<String>,
        name_with_ext: impl Into<String>,
        absolute_path: impl Into<PathBuf>,
        source_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            name_with_ext: name_with_ext.into(),
            absolute_path: absolute_path.into(),
            source_dir: source_dir.into(),
        }
    }

    /// Position of the file's extension in [`DEFINITION_EXTENSIONS`]; lower wins.
    pub fn extension_priority(&self) -> usize {
        DEFINITION_EXTENSIONS
            .iter()
            .position(|ext| self.name_with_ext.ends_with(ext))
            .unwrap_or(usize::MAX)
    }

    fn is_json(&self) -> bool {
        self.name_with_ext.ends_with(".json")
    }
}

/// Registry of named style definitions.
///
/// Definitions are kept sorted by name.
///
/// # Example
///
/// ```rust
/// use stylecraft_variants::{Selection, StyleRegistry, Resolver};
///
/// let mut registry = StyleRegistry::new();
/// registry
///     .add_yaml_document(
///         "badge:\n  base: rounded-full px-2\ntag:\n  base: rounded-sm px-1\n",
///     )
///     .unwrap();
///
/// let badge = registry.get("badge").unwrap();
/// let style = Resolver::new().resolve(badge, &Selection::new()).unwrap();
/// assert_eq!(style.class(), "rounded-full px-2");
/// assert!(registry.get("chip").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    definitions: BTreeMap<String, StyleDefinition>,
    /// Where each definition came from, for collision reports.
    sources: BTreeMap<String, SourceInfo>,
}

#[derive(Debug, Clone)]
struct SourceInfo {
    label: String,
    dir: Option<PathBuf>,
}

impl StyleRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition built in code.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Collision`] if the name is already taken.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        definition: StyleDefinition,
    ) -> Result<(), RegistryError> {
        self.insert_from(
            name.into(),
            definition,
            SourceInfo {
                label: INLINE_SOURCE.to_string(),
                dir: None,
            },
        )
    }

    fn insert_from(
        &mut self,
        name: String,
        definition: StyleDefinition,
        source: SourceInfo,
    ) -> Result<(), RegistryError> {
        if let Some(existing) = self.sources.get(&name) {
            return Err(RegistryError::Collision {
                name,
                existing_source: existing.label.clone(),
                conflicting_source: source.label,
            });
        }
        tracing::debug!(name = %name, source = %source.label, "style definition registered");
        self.definitions.insert(name.clone(), definition);
        self.sources.insert(name, source);
        Ok(())
    }

    /// Parses and registers a single YAML definition.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the document does not parse or validate, or
    /// if the name is taken.
    pub fn add_yaml(&mut self, name: impl Into<String>, source: &str) -> Result<(), LoadError> {
        let name = name.into();
        let definition = config::definition_from_yaml(source).map_err(|e| named(&name, e))?;
        Ok(self.insert(name, definition)?)
    }

    /// Parses and registers a single JSON definition.
    ///
    /// # Errors
    ///
    /// See [`Self::add_yaml`].
    pub fn add_json(&mut self, name: impl Into<String>, source: &str) -> Result<(), LoadError> {
        let name = name.into();
        let definition = config::definition_from_json(source).map_err(|e| named(&name, e))?;
        Ok(self.insert(name, definition)?)
    }

    /// Registers every definition of a YAML collection document.
    ///
    /// Nothing is registered if any definition fails.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the document does not parse, a definition
    /// does not validate, or a name is taken.
    pub fn add_yaml_document(&mut self, source: &str) -> Result<(), LoadError> {
        let definitions = config::definitions_from_yaml(source)?;
        self.insert_all(definitions)
    }

    /// Registers every definition of a JSON collection document.
    ///
    /// # Errors
    ///
    /// See [`Self::add_yaml_document`].
    pub fn add_json_document(&mut self, source: &str) -> Result<(), LoadError> {
        let definitions = config::definitions_from_json(source)?;
        self.insert_all(definitions)
    }

    fn insert_all(&mut self, definitions: Vec<(String, StyleDefinition)>) -> Result<(), LoadError> {
        for (name, _) in &definitions {
            if let Some(existing) = self.sources.get(name) {
                return Err(RegistryError::Collision {
                    name: name.clone(),
                    existing_source: existing.label.clone(),
                    conflicting_source: INLINE_SOURCE.to_string(),
                }
                .into());
            }
        }
        for (name, definition) in definitions {
            self.insert(name, definition)?;
        }
        Ok(())
    }

    /// Reads and registers one definition file under `name`.
    ///
    /// The format follows the file extension.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::UnsupportedExtension`] for unknown extensions,
    /// [`LoadError::Io`] if the file cannot be read, and the usual parse,
    /// validation and collision errors.
    pub fn add_file(&mut self, name: impl Into<String>, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let file_name = path.to_string_lossy();
        let file = DEFINITION_EXTENSIONS
            .iter()
            .find(|ext| file_name.ends_with(*ext))
            .map(|_| {
                DefinitionFile::new(
                    name.into(),
                    file_name.to_string(),
                    path,
                    path.parent().unwrap_or(path),
                )
            })
            .ok_or_else(|| LoadError::UnsupportedExtension {
                path: path.to_path_buf(),
            })?;
        self.add_definition_file(&file)
    }

    fn add_definition_file(&mut self, file: &DefinitionFile) -> Result<(), LoadError> {
        let (definition, source) = read_definition_file(file)?;
        Ok(self.insert_from(file.name.clone(), definition, source)?)
    }

    /// Registers definition files discovered by [`walk_definition_dir`].
    ///
    /// Files are processed in extension priority order. A name already
    /// taken by a file from the same directory is skipped (a lower-priority
    /// extension); from anywhere else it is a collision.
    ///
    /// Every file is read and checked before any is registered, so nothing is
    /// registered if one file fails.
    ///
    /// # Errors
    ///
    /// See [`Self::add_file`].
    pub fn add_from_files(&mut self, files: Vec<DefinitionFile>) -> Result<usize, LoadError> {
        let mut sorted_files = files;
        sorted_files.sort_by(|a, b| {
            a.extension_priority()
                .cmp(&b.extension_priority())
                .then_with(|| a.name.cmp(&b.name))
        });

        let mut staged: BTreeMap<String, (StyleDefinition, SourceInfo)> = BTreeMap::new();
        for file in sorted_files {
            let taken = staged
                .get(&file.name)
                .map(|(_, source)| source)
                .or_else(|| self.sources.get(&file.name));
            if let Some(existing) = taken {
                if existing.dir.as_ref() == Some(&file.source_dir) {
                    tracing::debug!(
                        name = %file.name,
                        skipped = %file.absolute_path.display(),
                        "lower-priority definition file skipped"
                    );
                    continue;
                }
                return Err(RegistryError::Collision {
                    name: file.name.clone(),
                    existing_source: existing.label.clone(),
                    conflicting_source: file.absolute_path.display().to_string(),
                }
                .into());
            }
            let (definition, source) = read_definition_file(&file)?;
            staged.insert(file.name, (definition, source));
        }

        let added = staged.len();
        for (name, (definition, source)) in staged {
            self.insert_from(name, definition, source)?;
        }
        Ok(added)
    }

    /// Walks `root` and registers every definition file found.
    ///
    /// Returns the number of definitions registered.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the directory cannot be walked, and the
    /// errors of [`Self::add_from_files`].
    pub fn load_dir(&mut self, root: impl AsRef<Path>) -> Result<usize, LoadError> {
        let root = root.as_ref();
        let files = walk_definition_dir(root).map_err(|e| LoadError::Io {
            path: root.to_path_buf(),
            source: e,
        })?;
        let added = self.add_from_files(files)?;
        tracing::debug!(dir = %root.display(), added, "style definitions loaded");
        Ok(added)
    }

    /// Looks up a definition.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no definition has that name.
    pub fn get(&self, name: &str) -> Result<&StyleDefinition, RegistryError> {
        self.definitions
            .get(name)
            .ok_or_else(|| RegistryError::NotFound {
                name: name.to_string(),
            })
    }

    /// Returns true if a definition has that name.
    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Iterates over names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// Iterates over `(name, definition)` in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleDefinition)> {
        self.definitions.iter().map(|(n, d)| (n.as_str(), d))
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn named(name: &str, err: LoadError) -> LoadError {
    match err {
        LoadError::Invalid(source) => LoadError::Config {
            name: name.to_string(),
            source,
        },
        other => other,
    }
}

fn read_definition_file(file: &DefinitionFile) -> Result<(StyleDefinition, SourceInfo), LoadError> {
    let source = std::fs::read_to_string(&file.absolute_path).map_err(|e| LoadError::Io {
        path: file.absolute_path.clone(),
        source: e,
    })?;
    let definition = if file.is_json() {
        config::definition_from_json(&source)
    } else {
        config::definition_from_yaml(&source)
    }
    .map_err(|e| named(&file.name, e))?;

    Ok((
        definition,
        SourceInfo {
            label: file.absolute_path.display().to_string(),
            dir: Some(file.source_dir.clone()),
        },
    ))
}

/// Walks a directory recursively and collects definition files.
///
/// The result is not sorted; see [`DefinitionFile::extension_priority`].
///
/// # Errors
///
/// Returns an error if the directory cannot be read or traversed.
pub fn walk_definition_dir(root: impl AsRef<Path>) -> Result<Vec<DefinitionFile>, std::io::Error> {
    let root_canonical = root.as_ref().canonicalize()?;
    let mut files = Vec::new();
    walk_dir_recursive(&root_canonical, &root_canonical, &mut files)?;
    Ok(files)
}

fn walk_dir_recursive(
    current: &Path,
    root: &Path,
    files: &mut Vec<DefinitionFile>,
) -> Result<(), std::io::Error> {
    for entry in std::fs::read_dir(current)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_dir_recursive(&path, root, files)?;
        } else if path.is_file() {
            if let Some(file) = try_parse_definition_file(&path, root) {
                files.push(file);
            }
        }
    }
    Ok(())
}

fn try_parse_definition_file(path: &Path, root: &Path) -> Option<DefinitionFile> {
    let path_str = path.to_string_lossy();
    let extension = DEFINITION_EXTENSIONS
        .iter()
        .find(|ext| path_str.ends_with(*ext))?;

    let relative = path.strip_prefix(root).ok()?;
    let name_with_ext = relative
        .to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/");
    let name = name_with_ext.strip_suffix(extension)?.to_string();

    Some(DefinitionFile::new(name, name_with_ext, path, root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, content: &str) {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    // =========================================================================
    // DefinitionFile tests
    // =========================================================================

    #[test]
    fn test_extension_priority() {
        let yaml = DefinitionFile::new("a", "a.yaml", "/s/a.yaml", "/s");
        let yml = DefinitionFile::new("a", "a.yml", "/s/a.yml", "/s");
        let json = DefinitionFile::new("a", "a.json", "/s/a.json", "/s");
        assert!(yaml.extension_priority() < yml.extension_priority());
        assert!(yml.extension_priority() < json.extension_priority());
    }

    // =========================================================================
    // In-memory registration tests
    // =========================================================================

    #[test]
    fn test_insert_and_get() {
        let mut registry = StyleRegistry::new();
        registry
            .insert("badge", StyleDefinition::builder().base("px-2").build().unwrap())
            .unwrap();
        assert!(registry.contains("badge"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("badge").unwrap().base().len(), 1);
    }

    #[test]
    fn test_not_found() {
        let registry = StyleRegistry::new();
        assert_eq!(
            registry.get("badge").unwrap_err(),
            RegistryError::NotFound {
                name: "badge".to_string()
            }
        );
    }

    #[test]
    fn test_insert_collision() {
        let mut registry = StyleRegistry::new();
        registry.insert("badge", StyleDefinition::default()).unwrap();
        let err = registry
            .insert("badge", StyleDefinition::default())
            .unwrap_err();
        assert!(matches!(err, RegistryError::Collision { ref name, .. } if name == "badge"));
    }

    #[test]
    fn test_add_yaml_names_invalid_definition() {
        let mut registry = StyleRegistry::new();
        let err = registry
            .add_yaml("badge", "variants:\n  tone: {}\n")
            .unwrap_err();
        assert!(matches!(
            err,
            LoadError::Config { ref name, source: ConfigError::EmptyAxis { .. } } if name == "badge"
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_document_is_all_or_nothing() {
        let mut registry = StyleRegistry::new();
        registry.insert("tag", StyleDefinition::default()).unwrap();
        let err = registry
            .add_yaml_document("badge:\n  base: px-2\ntag:\n  base: px-1\n")
            .unwrap_err();
        assert!(matches!(err, LoadError::Registry(RegistryError::Collision { .. })));
        assert!(!registry.contains("badge"));
    }

    #[test]
    fn test_names_sorted() {
        let mut registry = StyleRegistry::new();
        registry
            .add_json_document(r#"{"tab": {"base": "flex"}, "button": {"base": "px-4"}}"#)
            .unwrap();
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["button", "tab"]);
    }

    // =========================================================================
    // Directory loading tests
    // =========================================================================

    #[test]
    fn test_load_dir_names_by_relative_path() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "button.yaml", "base: px-4\n");
        write(temp.path(), "forms/select.yml", "slots:\n  trigger: h-10\n");
        write(temp.path(), "forms/input.json", r#"{"base": "border"}"#);
        write(temp.path(), "README.md", "not a definition");

        let mut registry = StyleRegistry::new();
        let added = registry.load_dir(temp.path()).unwrap();

        assert_eq!(added, 3);
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec!["button", "forms/input", "forms/select"]
        );
        assert!(registry.get("forms/select").unwrap().is_slotted());
    }

    #[test]
    fn test_load_dir_extension_priority() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "button.json", r#"{"base": "px-2"}"#);
        write(temp.path(), "button.yaml", "base: px-4\n");

        let mut registry = StyleRegistry::new();
        assert_eq!(registry.load_dir(temp.path()).unwrap(), 1);
        assert_eq!(
            registry.get("button").unwrap().base().as_slice(),
            &["px-4"]
        );
    }

    #[test]
    fn test_load_dir_cross_directory_collision() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write(first.path(), "button.yaml", "base: px-4\n");
        write(second.path(), "button.yaml", "base: px-2\n");

        let mut registry = StyleRegistry::new();
        registry.load_dir(first.path()).unwrap();
        let err = registry.load_dir(second.path()).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Registry(RegistryError::Collision { ref name, .. }) if name == "button"
        ));
    }

    #[test]
    fn test_load_dir_collision_registers_nothing() {
        let first = TempDir::new().unwrap();
        let second = TempDir::new().unwrap();
        write(first.path(), "button.yaml", "base: px-4\n");
        write(second.path(), "alpha.yaml", "base: flex\n");
        write(second.path(), "button.yaml", "base: px-2\n");
        write(second.path(), "zeta.json", r#"{"base": "grid"}"#);

        let mut registry = StyleRegistry::new();
        registry.load_dir(first.path()).unwrap();
        assert!(registry.load_dir(second.path()).is_err());
        assert_eq!(registry.names().collect::<Vec<_>>(), vec!["button"]);
        assert_eq!(registry.get("button").unwrap().base().as_slice(), &["px-4"]);
    }

    #[test]
    fn test_load_dir_invalid_file_registers_nothing() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "alpha.yaml", "base: flex\n");
        write(temp.path(), "broken.yaml", "base: [\n");

        let mut registry = StyleRegistry::new();
        assert!(registry.load_dir(temp.path()).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_load_dir_missing() {
        let temp = TempDir::new().unwrap();
        let mut registry = StyleRegistry::new();
        let err = registry.load_dir(temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_load_dir_reports_invalid_file() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "badge.yaml",
            "variants:\n  size:\n    sm: h-8\ndefaultVariants:\n  size: xl\n",
        );
        let mut registry = StyleRegistry::new();
        let err = registry.load_dir(temp.path()).unwrap_err();
        assert!(matches!(err, LoadError::Config { ref name, .. } if name == "badge"));
    }

    #[test]
    fn test_add_file_unsupported_extension() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "button.toml", "base = 'px-4'");
        let mut registry = StyleRegistry::new();
        let err = registry
            .add_file("button", temp.path().join("button.toml"))
            .unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedExtension { .. }));
    }

    #[test]
    fn test_add_file() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "b.json", r#"{"base": ["px-4", "h-10"]}"#);
        let mut registry = StyleRegistry::new();
        registry.add_file("button", temp.path().join("b.json")).unwrap();
        assert_eq!(registry.get("button").unwrap().base().len(), 2);
    }
}
