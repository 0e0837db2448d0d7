//! Schema-version migration for sidecar metadata documents.
//!
//! Sidecar files written against older layouts of the metadata schema keep
//! their values under outdated field paths. Before such a document is folded
//! into [`MeasurementMetadata`](super::MeasurementMetadata), the mapper
//! relocates every field covered by a [`RemappingRule`] into its current
//! path, leaving everything else untouched.
//!
//! The mapper is deliberately permissive: fields unknown to both the old and
//! the new layout pass through unchanged, and a document whose
//! `format.version` is missing or unparseable is returned as-is with a
//! warning rather than rejected.

use log::{debug, warn};
use serde_yaml::{Mapping, Value};

use super::version::SchemaVersion;

/// Relocation of a single metadata field between schema layouts.
///
/// A rule fires when the field at `old_path` is present in the document and
/// the document's `format.version` is strictly older than the rule's cutoff
/// (or the rule has no cutoff). Paths are dot-separated key sequences into
/// the nested document.
#[derive(Debug, Clone, Copy)]
pub struct RemappingRule {
    old_path: &'static str,
    new_path: &'static str,
    cutoff: Option<SchemaVersion>,
}

impl RemappingRule {
    /// Rule firing only for documents written before `cutoff`
    pub const fn until(
        old_path: &'static str,
        new_path: &'static str,
        cutoff: SchemaVersion,
    ) -> Self {
        Self {
            old_path,
            new_path,
            cutoff: Some(cutoff),
        }
    }

    /// Rule firing at every document version
    pub const fn always(old_path: &'static str, new_path: &'static str) -> Self {
        Self {
            old_path,
            new_path,
            cutoff: None,
        }
    }

    /// Field path valid under the old layout
    pub fn old_path(&self) -> &'static str {
        self.old_path
    }

    /// Field path valid under the current layout
    pub fn new_path(&self) -> &'static str {
        self.new_path
    }

    fn applies_to(&self, version: SchemaVersion) -> bool {
        match self.cutoff {
            Some(cutoff) => version < cutoff,
            None => true,
        }
    }
}

/// Field relocations accumulated across sidecar schema revisions.
///
/// Layouts before 0.1.4 kept operator and labbook reference under a
/// `general` section; 0.1.4 moved both under `measurement` and renamed
/// `labbook` to `labbook_entry`. The rename also applies to documents
/// already using the `measurement` section.
pub const DEFAULT_RULES: &[RemappingRule] = &[
    RemappingRule::until(
        "general.operator",
        "measurement.operator",
        SchemaVersion::new(0, 1, 4),
    ),
    RemappingRule::until(
        "general.labbook",
        "measurement.labbook_entry",
        SchemaVersion::new(0, 1, 4),
    ),
    RemappingRule::always("measurement.labbook", "measurement.labbook_entry"),
];

/// Rewrite outdated field paths in `document` into the current schema layout.
///
/// Applies [`DEFAULT_RULES`]; see [`map_document_with`] for the mapping
/// semantics.
pub fn map_document(document: Value) -> Value {
    map_document_with(document, DEFAULT_RULES)
}

/// Rewrite outdated field paths in `document` using an explicit rule table.
///
/// For every rule whose old path is present and whose cutoff matches the
/// document's `format.version`, the value is moved to the rule's new path
/// and parent mappings emptied by the move are pruned. If the new path is
/// already populated its value wins and the stale old field is dropped.
///
/// Documents without a usable version tag, and documents that are not
/// mappings at all, are returned unchanged; a missing or unparseable tag is
/// logged as a warning since it may hide genuinely unmapped legacy fields.
pub fn map_document_with(document: Value, rules: &[RemappingRule]) -> Value {
    let mut root = match document {
        Value::Mapping(root) => root,
        other => return other,
    };

    let version = match version_tag(&root) {
        VersionTag::Parsed(version) => version,
        VersionTag::Missing => {
            warn!("metadata document carries no format.version; fields left as written");
            return Value::Mapping(root);
        }
        VersionTag::Unparseable(raw) => {
            warn!("unrecognized format.version {raw:?}; fields left as written");
            return Value::Mapping(root);
        }
    };

    for rule in rules {
        if !rule.applies_to(version) {
            continue;
        }
        let old_segments: Vec<&str> = rule.old_path.split('.').collect();
        let new_segments: Vec<&str> = rule.new_path.split('.').collect();
        if resolve(&root, &old_segments).is_none() {
            continue;
        }
        let new_populated = resolve(&root, &new_segments).is_some();
        if !new_populated && !admits_insert(&root, &new_segments) {
            warn!(
                "cannot relocate {} to {}: target path blocked by a non-mapping field",
                rule.old_path, rule.new_path
            );
            continue;
        }
        let Some(value) = remove_path(&mut root, &old_segments) else {
            continue;
        };
        if new_populated {
            debug!(
                "dropped stale {} in favor of existing {}",
                rule.old_path, rule.new_path
            );
        } else {
            debug!("relocated {} to {}", rule.old_path, rule.new_path);
            insert_path(&mut root, &new_segments, value);
        }
    }

    Value::Mapping(root)
}

enum VersionTag {
    Parsed(SchemaVersion),
    Unparseable(String),
    Missing,
}

fn version_tag(root: &Mapping) -> VersionTag {
    let Some(value) = resolve(root, &["format", "version"]) else {
        return VersionTag::Missing;
    };
    let Some(raw) = value.as_str() else {
        return VersionTag::Unparseable(format!("{value:?}"));
    };
    match raw.parse() {
        Ok(version) => VersionTag::Parsed(version),
        Err(_) => VersionTag::Unparseable(raw.to_string()),
    }
}

/// Walk `segments` down from `root`, returning the value at the full path.
fn resolve<'a>(root: &'a Mapping, segments: &[&str]) -> Option<&'a Value> {
    let (first, rest) = segments.split_first()?;
    let mut current = root.get(*first)?;
    for segment in rest {
        current = current.get(*segment)?;
    }
    Some(current)
}

/// Whether the path can be created without overwriting a non-mapping field.
fn admits_insert(root: &Mapping, segments: &[&str]) -> bool {
    let mut current = root;
    for segment in &segments[..segments.len() - 1] {
        match current.get(*segment) {
            None => return true,
            Some(Value::Mapping(child)) => current = child,
            Some(_) => return false,
        }
    }
    true
}

/// Remove the value at `segments`, pruning parent mappings emptied by the
/// removal.
fn remove_path(mapping: &mut Mapping, segments: &[&str]) -> Option<Value> {
    let Some((first, rest)) = segments.split_first() else {
        return None;
    };
    if rest.is_empty() {
        return mapping.remove(*first);
    }
    let (removed, child_empty) = {
        let child = mapping.get_mut(*first)?.as_mapping_mut()?;
        let removed = remove_path(child, rest);
        (removed, child.is_empty())
    };
    if removed.is_some() && child_empty {
        mapping.remove(*first);
    }
    removed
}

/// Insert `value` at `segments`, creating intermediate mappings as needed.
///
/// Callers check [`admits_insert`] first; a blocked path is left untouched.
fn insert_path(mapping: &mut Mapping, segments: &[&str], value: Value) {
    let Some((first, rest)) = segments.split_first() else {
        return;
    };
    if rest.is_empty() {
        mapping.insert(Value::from(*first), value);
        return;
    }
    if !matches!(mapping.get(*first), Some(Value::Mapping(_))) {
        mapping.insert(Value::from(*first), Value::Mapping(Mapping::new()));
    }
    if let Some(Value::Mapping(child)) = mapping.get_mut(*first) {
        insert_path(child, rest, value);
    }
}
