//! Issue types for reachability analysis results.
//!
//! Each issue is self-contained with all information needed by the
//! reporter: the object's fourcc, its human-readable label, and a hint on
//! how to fix the problem. Severity follows the original build gate:
//! unreachable units and upgrades break the build, unreachable abilities
//! and load warnings do not.

use enum_dispatch::enum_dispatch;

use crate::core::{ObjectId, ObjectKind};

// ============================================================
// Severity and Rule
// ============================================================

/// Severity level of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Rule identifier for each issue type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    UnreachableUnit,
    UnreachableUpgrade,
    UnreachableAbility,
    DataWarning,
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::UnreachableUnit => write!(f, "unreachable-unit"),
            Rule::UnreachableUpgrade => write!(f, "unreachable-upgrade"),
            Rule::UnreachableAbility => write!(f, "unreachable-ability"),
            Rule::DataWarning => write!(f, "data-warning"),
        }
    }
}

// ============================================================
// Object context
// ============================================================

/// The reported object's identity and label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ObjectContext {
    /// Readable four-character code, e.g. `hfoo`.
    pub fourcc: String,
    /// Display label, usually the object's name plus editor suffix.
    pub label: String,
    pub kind: ObjectKind,
}

impl ObjectContext {
    pub fn new(id: ObjectId, label: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            fourcc: id.fourcc(),
            label: label.into(),
            kind,
        }
    }
}

// ============================================================
// Issue Types
// ============================================================

/// Unit that no player can acquire through any chain of actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreachableUnitIssue {
    pub context: ObjectContext,
}

impl UnreachableUnitIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UnreachableUnit
    }
}

/// Upgrade that no accessible unit can research.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreachableUpgradeIssue {
    pub context: ObjectContext,
}

impl UnreachableUpgradeIssue {
    pub fn severity() -> Severity {
        Severity::Error
    }

    pub fn rule() -> Rule {
        Rule::UnreachableUpgrade
    }
}

/// Ability carried by no accessible unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnreachableAbilityIssue {
    pub context: ObjectContext,
    /// Variant family name, for the "= note:" line.
    pub family: &'static str,
}

impl UnreachableAbilityIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::UnreachableAbility
    }
}

/// Non-fatal problem found while loading map data or script files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataWarningIssue {
    pub file_path: String,
    pub message: String,
}

impl DataWarningIssue {
    pub fn severity() -> Severity {
        Severity::Warning
    }

    pub fn rule() -> Rule {
        Rule::DataWarning
    }
}

// ============================================================
// Issue Enum
// ============================================================

/// A reachability issue found during analysis.
#[enum_dispatch(Report)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    UnreachableUnit(UnreachableUnitIssue),
    UnreachableUpgrade(UnreachableUpgradeIssue),
    UnreachableAbility(UnreachableAbilityIssue),
    DataWarning(DataWarningIssue),
}

impl Issue {
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UnreachableUnit(_) => UnreachableUnitIssue::severity(),
            Issue::UnreachableUpgrade(_) => UnreachableUpgradeIssue::severity(),
            Issue::UnreachableAbility(_) => UnreachableAbilityIssue::severity(),
            Issue::DataWarning(_) => DataWarningIssue::severity(),
        }
    }

    pub fn rule(&self) -> Rule {
        match self {
            Issue::UnreachableUnit(_) => UnreachableUnitIssue::rule(),
            Issue::UnreachableUpgrade(_) => UnreachableUpgradeIssue::rule(),
            Issue::UnreachableAbility(_) => UnreachableAbilityIssue::rule(),
            Issue::DataWarning(_) => DataWarningIssue::rule(),
        }
    }
}

// ============================================================
// Report Trait (for CLI output)
// ============================================================

/// Location information for report output.
pub enum ReportLocation<'a> {
    /// A content object identified by its fourcc.
    Object(&'a ObjectContext),
    /// File-level only (for data warnings).
    File { path: &'a str },
}

/// Trait for types that can be reported to CLI.
///
/// Implemented by all issue types to give the report functions a uniform
/// interface. Uses `enum_dispatch` for zero-cost dispatch on `Issue`.
#[enum_dispatch]
pub trait Report {
    /// Get the location for this issue.
    fn location(&self) -> ReportLocation<'_>;

    /// Primary message to display (object label, warning text).
    fn message(&self) -> String;

    /// Severity level.
    fn report_severity(&self) -> Severity;

    /// Rule identifier.
    fn report_rule(&self) -> Rule;

    /// Optional hint for fixing the issue.
    fn hint(&self) -> Option<&str> {
        None
    }

    /// Optional details for the "= note:" line.
    fn details(&self) -> Option<String> {
        None
    }
}

// ============================================================
// Report Implementations
// ============================================================

impl Report for UnreachableUnitIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Object(&self.context)
    }

    fn message(&self) -> String {
        self.context.label.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("add a way to train or summon it, reference it in script, or place it on the map")
    }
}

impl Report for UnreachableUpgradeIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Object(&self.context)
    }

    fn message(&self) -> String {
        self.context.label.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn hint(&self) -> Option<&str> {
        Some("add it to an accessible unit's research list or remove it from the map")
    }
}

impl Report for UnreachableAbilityIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::Object(&self.context)
    }

    fn message(&self) -> String {
        self.context.label.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }

    fn details(&self) -> Option<String> {
        Some(format!("{} ability", self.family))
    }
}

impl Report for DataWarningIssue {
    fn location(&self) -> ReportLocation<'_> {
        ReportLocation::File {
            path: &self.file_path,
        }
    }

    fn message(&self) -> String {
        self.message.clone()
    }

    fn report_severity(&self) -> Severity {
        Self::severity()
    }

    fn report_rule(&self) -> Rule {
        Self::rule()
    }
}
