//! Read-only view of scanned UI elements
//!
//! Fingerprinting never sees the platform element model directly. It walks
//! elements through [`ElementView`], which exposes typed accessors for the
//! handful of properties that identify a finding.

pub mod control_type;
mod snapshot;

pub use snapshot::{ElementRecord, ElementRef, ElementTree, RuleOutcome, ScanOutcome, Snapshot};

/// String-valued element properties used as identifying evidence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringProperty {
    AcceleratorKey,
    AccessKey,
    AutomationId,
    ClassName,
    FrameworkId,
    LocalizedControlType,
    Name,
}

impl StringProperty {
    pub fn key(&self) -> &'static str {
        match self {
            StringProperty::AcceleratorKey => "AcceleratorKey",
            StringProperty::AccessKey => "AccessKey",
            StringProperty::AutomationId => "AutomationId",
            StringProperty::ClassName => "ClassName",
            StringProperty::FrameworkId => "FrameworkId",
            StringProperty::LocalizedControlType => "LocalizedControlType",
            StringProperty::Name => "Name",
        }
    }
}

/// Boolean element properties that some rules depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoolProperty {
    IsKeyboardFocusable,
    IsControlElement,
    IsContentElement,
}

impl BoolProperty {
    pub fn key(&self) -> &'static str {
        match self {
            BoolProperty::IsKeyboardFocusable => "IsKeyboardFocusable",
            BoolProperty::IsControlElement => "IsControlElement",
            BoolProperty::IsContentElement => "IsContentElement",
        }
    }
}

/// Typed accessors over one node of an element tree.
///
/// Implementations are cheap handles; `parent` returns a new handle for the
/// next node up, or `None` at the root.
pub trait ElementView: Sized {
    fn parent(&self) -> Option<Self>;

    fn string_property(&self, property: StringProperty) -> Option<&str>;

    fn bool_property(&self, property: BoolProperty) -> Option<bool>;

    fn control_type_id(&self) -> Option<i32>;

    fn control_type_name(&self) -> Option<&'static str> {
        self.control_type_id().and_then(control_type::name_for)
    }
}
