use crate::element::BoolProperty;
use crate::error::IssueError;
use serde::{Deserialize, Serialize};

macro_rules! rule_ids {
    ($($rule:ident),+ $(,)?) => {
        /// Identifier of an accessibility rule evaluated against an element.
        ///
        /// The rule catalogue belongs to the scanning engine, so ids outside
        /// the known set are carried through as `Other`.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
        #[serde(try_from = "String", into = "String")]
        pub enum RuleId {
            $($rule,)+
            Other(String),
        }

        impl RuleId {
            /// Every rule id with known handling
            pub const ALL: &'static [RuleId] = &[$(RuleId::$rule),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $(RuleId::$rule => stringify!($rule),)+
                    RuleId::Other(id) => id,
                }
            }
        }
    };
}

rule_ids! {
    BoundingRectangleNotNull,
    BoundingRectangleNotAllZeros,
    BoundingRectangleNotValidButOffScreen,
    BoundingRectangleContainedInParent,
    BoundingRectangleSizeReasonable,
    BoundingRectangleCompletelyObscuresContainer,
    ButtonShouldHavePatterns,
    ChildrenNotAllowedInContentView,
    ControlShouldSupportInvokePattern,
    ControlViewButtonStructure,
    EditSupportsIncorrectRangeValuePattern,
    HeadingLevelDescendsWhenNested,
    HelpTextExcludesPrivateUnicodeCharacters,
    HyperlinkNameShouldBeUnique,
    IsContentElementFalseOptional,
    IsContentElementTrueOptional,
    IsContentElementPropertyExists,
    IsControlElementTrueOptional,
    IsControlElementTrueRequired,
    IsControlElementPropertyExists,
    IsKeyboardFocusable,
    IsKeyboardFocusableShouldBeTrue,
    IsKeyboardFocusableFalseButDisabled,
    IsKeyboardFocusableOnEmptyContainer,
    IsKeyboardFocusableForListItemShouldBeTrue,
    IsKeyboardFocusableDescendantTextPattern,
    IsKeyboardFocusableTopLevelTextPattern,
    ItemTypeRecommended,
    LocalizedControlTypeNotEmpty,
    LocalizedControlTypeNotNull,
    LocalizedControlTypeNotWhiteSpace,
    LocalizedControlTypeReasonable,
    NameNotNull,
    NameNotEmpty,
    NameNotWhiteSpace,
    NameNullButElementNotKeyboardFocusable,
    NameEmptyButElementNotKeyboardFocusable,
    NameWithValidBoundingRectangle,
    NameExcludesControlType,
    NameExcludesLocalizedControlType,
    NameExcludesPrivateUnicodeCharacters,
    NameIsInformative,
    NameReasonableLength,
    OrientationPropertyExists,
    ParentChildShouldNotHaveSameNameAndLocalizedControlType,
    ProgressBarRangeValue,
    SiblingUniqueAndFocusable,
    SiblingUniqueAndNotFocusable,
}

impl RuleId {
    /// The one boolean property whose value distinguishes findings of this rule
    pub fn rule_specific_property(&self) -> Option<BoolProperty> {
        match self {
            RuleId::IsKeyboardFocusable
            | RuleId::IsKeyboardFocusableShouldBeTrue
            | RuleId::IsKeyboardFocusableFalseButDisabled
            | RuleId::IsKeyboardFocusableOnEmptyContainer
            | RuleId::IsKeyboardFocusableForListItemShouldBeTrue
            | RuleId::IsKeyboardFocusableDescendantTextPattern
            | RuleId::IsKeyboardFocusableTopLevelTextPattern => {
                Some(BoolProperty::IsKeyboardFocusable)
            }
            RuleId::IsControlElementTrueOptional
            | RuleId::IsControlElementTrueRequired
            | RuleId::IsControlElementPropertyExists => Some(BoolProperty::IsControlElement),
            RuleId::IsContentElementFalseOptional
            | RuleId::IsContentElementTrueOptional
            | RuleId::IsContentElementPropertyExists => Some(BoolProperty::IsContentElement),
            _ => None,
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RuleId {
    type Err = IssueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(IssueError::InvalidArgument(
                "rule id must not be empty".to_string(),
            ));
        }
        Ok(RuleId::ALL
            .iter()
            .find(|rule| rule.as_str() == s)
            .cloned()
            .unwrap_or_else(|| RuleId::Other(s.to_string())))
    }
}

impl TryFrom<String> for RuleId {
    type Error = IssueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RuleId> for String {
    fn from(rule: RuleId) -> Self {
        match rule {
            RuleId::Other(id) => id,
            known => known.as_str().to_string(),
        }
    }
}

/// Outcome of evaluating a rule, or the aggregate outcome of an element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ScanStatus {
    NoResult,
    Pass,
    Uncertain,
    Fail,
    ScanNotSupported,
}

impl ScanStatus {
    /// Result level as reported alongside a finding
    pub fn result_level(&self) -> &'static str {
        match self {
            ScanStatus::Fail => "error",
            ScanStatus::Uncertain => "open",
            ScanStatus::Pass => "pass",
            ScanStatus::NoResult | ScanStatus::ScanNotSupported => "none",
        }
    }

    /// Whether an element with this status has findings worth tracking
    pub fn needs_attention(&self) -> bool {
        matches!(self, ScanStatus::Fail | ScanStatus::Uncertain)
    }
}

impl std::fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScanStatus::NoResult => write!(f, "NoResult"),
            ScanStatus::Pass => write!(f, "Pass"),
            ScanStatus::Uncertain => write!(f, "Uncertain"),
            ScanStatus::Fail => write!(f, "Fail"),
            ScanStatus::ScanNotSupported => write!(f, "ScanNotSupported"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_id_round_trips_through_str() {
        for rule in RuleId::ALL {
            assert_eq!(rule.as_str().parse::<RuleId>().unwrap(), *rule);
        }
    }

    #[test]
    fn test_unknown_rule_id_is_kept() {
        let rule = "VendorSpecificCheck".parse::<RuleId>().unwrap();
        assert_eq!(rule, RuleId::Other("VendorSpecificCheck".to_string()));
        assert_eq!(rule.to_string(), "VendorSpecificCheck");
        assert_eq!(rule.rule_specific_property(), None);

        let parsed: RuleId = serde_json::from_str("\"VendorSpecificCheck\"").unwrap();
        assert_eq!(parsed, rule);
        assert_eq!(serde_json::to_string(&rule).unwrap(), "\"VendorSpecificCheck\"");
    }

    #[test]
    fn test_known_name_never_becomes_other() {
        assert_eq!("NameNotEmpty".parse::<RuleId>().unwrap(), RuleId::NameNotEmpty);
    }

    #[test]
    fn test_empty_rule_id_rejected() {
        let err = "  ".parse::<RuleId>().unwrap_err();
        assert!(matches!(err, IssueError::InvalidArgument(_)));
        assert!(serde_json::from_str::<RuleId>("\"\"").is_err());
    }

    #[test]
    fn test_rule_id_serde_name_matches_display() {
        let json = serde_json::to_string(&RuleId::NameNotEmpty).unwrap();
        assert_eq!(json, "\"NameNotEmpty\"");
        assert_eq!(RuleId::NameNotEmpty.to_string(), "NameNotEmpty");
    }

    #[test]
    fn test_rule_specific_properties() {
        assert_eq!(
            RuleId::IsKeyboardFocusableShouldBeTrue.rule_specific_property(),
            Some(BoolProperty::IsKeyboardFocusable)
        );
        assert_eq!(
            RuleId::IsControlElementTrueRequired.rule_specific_property(),
            Some(BoolProperty::IsControlElement)
        );
        assert_eq!(
            RuleId::IsContentElementFalseOptional.rule_specific_property(),
            Some(BoolProperty::IsContentElement)
        );
        assert_eq!(RuleId::NameNotEmpty.rule_specific_property(), None);
    }

    #[test]
    fn test_result_levels() {
        assert_eq!(ScanStatus::Fail.result_level(), "error");
        assert_eq!(ScanStatus::Uncertain.result_level(), "open");
        assert_eq!(ScanStatus::Pass.result_level(), "pass");
        assert_eq!(ScanStatus::NoResult.result_level(), "none");
    }

    #[test]
    fn test_needs_attention() {
        assert!(ScanStatus::Fail.needs_attention());
        assert!(ScanStatus::Uncertain.needs_attention());
        assert!(!ScanStatus::Pass.needs_attention());
        assert!(!ScanStatus::NoResult.needs_attention());
        assert!(!ScanStatus::ScanNotSupported.needs_attention());
    }
}
