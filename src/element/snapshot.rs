use super::{BoolProperty, ElementView, StringProperty};
use crate::error::SnapshotError;
use crate::fingerprint::{RuleId, ScanStatus};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

fn default_snapshot_version() -> u32 {
    1
}

/// A scan results file: one element tree with its scan outcomes
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Snapshot {
    #[serde(default = "default_snapshot_version")]
    pub version: u32,

    pub root: ElementRecord,
}

/// One element as stored in a snapshot, children nested inline
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ElementRecord {
    pub id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub automation_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub framework_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized_control_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accelerator_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_type_id: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_keyboard_focusable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_control_element: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_content_element: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scan: Option<ScanOutcome>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ElementRecord>,
}

/// Overall scan status of an element plus the per-rule outcomes behind it
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanOutcome {
    pub status: ScanStatus,

    #[serde(default)]
    pub results: Vec<RuleOutcome>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleOutcome {
    pub rule_id: RuleId,
    pub status: ScanStatus,
}

#[derive(Debug)]
struct ElementNode {
    record: ElementRecord,
    parent: Option<usize>,
}

/// Flattened element tree with parent links, in document (pre-order) order
#[derive(Debug)]
pub struct ElementTree {
    nodes: Vec<ElementNode>,
}

impl ElementTree {
    /// Flatten a nested record tree. Element ids must be unique.
    pub fn from_root(root: ElementRecord) -> Result<Self, SnapshotError> {
        let mut nodes = Vec::new();
        let mut seen = HashSet::new();
        let mut pending = vec![(root, None)];

        while let Some((mut record, parent)) = pending.pop() {
            if !seen.insert(record.id) {
                return Err(SnapshotError::DuplicateElementId(record.id));
            }

            let index = nodes.len();
            let children = std::mem::take(&mut record.children);
            nodes.push(ElementNode { record, parent });

            // Reversed so children pop in their original order
            for child in children.into_iter().rev() {
                pending.push((child, Some(index)));
            }
        }

        Ok(Self { nodes })
    }

    /// Load a snapshot file from disk
    pub fn load(path: &Path) -> Result<Self, SnapshotError> {
        let content = std::fs::read_to_string(path).map_err(|e| SnapshotError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let snapshot: Snapshot =
            serde_json::from_str(&content).map_err(|e| SnapshotError::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let tree = Self::from_root(snapshot.root)?;
        debug!(
            "Loaded {} elements from {} (snapshot v{})",
            tree.len(),
            path.display(),
            snapshot.version
        );
        Ok(tree)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn root(&self) -> ElementRef<'_> {
        ElementRef {
            tree: self,
            index: 0,
        }
    }

    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        (0..self.nodes.len()).map(move |index| ElementRef { tree: self, index })
    }

    pub fn find(&self, id: i64) -> Option<ElementRef<'_>> {
        self.elements().find(|e| e.id() == id)
    }
}

/// Handle to one node of an [`ElementTree`]
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    tree: &'a ElementTree,
    index: usize,
}

impl<'a> ElementRef<'a> {
    fn record(&self) -> &'a ElementRecord {
        &self.tree.nodes[self.index].record
    }

    pub fn id(&self) -> i64 {
        self.record().id
    }

    pub fn scan(&self) -> Option<&'a ScanOutcome> {
        self.record().scan.as_ref()
    }

    /// Short human-readable label, e.g. `Button 'OK'`
    pub fn describe(&self) -> String {
        let kind = self.control_type_name().unwrap_or("Element");
        match self.record().name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => format!("{} '{}'", kind, name),
            _ => kind.to_string(),
        }
    }
}

impl ElementView for ElementRef<'_> {
    fn parent(&self) -> Option<Self> {
        self.tree.nodes[self.index].parent.map(|index| ElementRef {
            tree: self.tree,
            index,
        })
    }

    fn string_property(&self, property: StringProperty) -> Option<&str> {
        let record = self.record();
        let value = match property {
            StringProperty::AcceleratorKey => &record.accelerator_key,
            StringProperty::AccessKey => &record.access_key,
            StringProperty::AutomationId => &record.automation_id,
            StringProperty::ClassName => &record.class_name,
            StringProperty::FrameworkId => &record.framework_id,
            StringProperty::LocalizedControlType => &record.localized_control_type,
            StringProperty::Name => &record.name,
        };
        value.as_deref()
    }

    fn bool_property(&self, property: BoolProperty) -> Option<bool> {
        let record = self.record();
        match property {
            BoolProperty::IsKeyboardFocusable => record.is_keyboard_focusable,
            BoolProperty::IsControlElement => record.is_control_element,
            BoolProperty::IsContentElement => record.is_content_element,
        }
    }

    fn control_type_id(&self) -> Option<i32> {
        self.record().control_type_id
    }
}
