//! # Domain Entities
//!
//! - **SafetySourceData**: the report a safety source submits. Opaque to the
//!   store apart from its embedded `id`.
//! - **SafetySourceKey**: the slot a report lives in, `(package, user, source id)`.

use serde::{Deserialize, Serialize};
use shared_types::UserId;
use std::fmt;

/// How severe a status or issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeverityLevel {
    #[default]
    Unspecified,
    /// Nothing to report.
    None,
    /// The user should act at some point.
    Recommendation,
    /// The user should act now.
    CriticalWarning,
}

/// Overall status a source reports about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySourceStatus {
    pub title: String,
    pub summary: String,
    pub severity_level: SeverityLevel,
}

impl SafetySourceStatus {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        severity_level: SeverityLevel,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            severity_level,
        }
    }
}

/// A single problem a source wants surfaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySourceIssue {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub severity_level: SeverityLevel,
}

/// The latest report a safety source submitted.
///
/// `id` names the source and forms part of the storage key. Everything else
/// is carried through untouched for downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetySourceData {
    /// Identifier of the source that produced this report.
    pub id: String,
    /// Overall status, if the source reports one.
    pub status: Option<SafetySourceStatus>,
    /// Outstanding issues, in the order the source listed them.
    pub issues: Vec<SafetySourceIssue>,
}

impl SafetySourceData {
    /// A report with no status and no issues.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: None,
            issues: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: SafetySourceStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_issue(mut self, issue: SafetySourceIssue) -> Self {
        self.issues.push(issue);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Storage slot for one source's report.
///
/// Equality and hashing cover all three fields. Fields are private so a key
/// cannot change after it is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SafetySourceKey {
    package_name: String,
    user_id: UserId,
    source_id: String,
}

impl SafetySourceKey {
    pub fn of(
        package_name: impl Into<String>,
        user_id: UserId,
        source_id: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            user_id,
            source_id: source_id.into(),
        }
    }

    /// The key a report is stored under when `package_name` submits it for
    /// `user_id`. The source id always comes from the report itself.
    pub fn for_data(package_name: &str, user_id: UserId, data: &SafetySourceData) -> Self {
        Self::of(package_name, user_id, data.id.as_str())
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn source_id(&self) -> &str {
        &self.source_id
    }
}

impl fmt::Display for SafetySourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Key{{package_name='{}', user_id={}, source_id='{}'}}",
            self.package_name, self.user_id, self.source_id
        )
    }
}
