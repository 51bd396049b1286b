use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Category of a validation issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    /// A value is missing or has the wrong JSON kind.
    InvalidType,
    /// A string or list is shorter than required.
    TooSmall,
    /// A schema refinement or cross-field rule failed.
    Custom,
}

impl IssueCode {
    /// Returns a stable transport value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidType => "invalid_type",
            Self::TooSmall => "too_small",
            Self::Custom => "custom",
        }
    }
}

/// One step of an [`IssuePath`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// Position inside a list.
    Index(usize),
    /// Object key.
    Key(String),
}

impl Display for PathSegment {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Key(key) => formatter.write_str(key),
        }
    }
}

/// Location of the offending value, from the validated root.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssuePath(Vec<PathSegment>);

impl IssuePath {
    /// Returns the empty path pointing at the root value.
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Appends an object key.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.0.push(PathSegment::Key(key.into()));
        self
    }

    /// Appends a list index.
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.0.push(PathSegment::Index(index));
        self
    }

    /// Returns the path segments.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Returns whether the path points at the root value.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Joins segments with dots, e.g. `attrs.0.name`.
    #[must_use]
    pub fn dotted(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Single validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    path: IssuePath,
    message: String,
    code: IssueCode,
}

impl Issue {
    /// Creates an issue.
    #[must_use]
    pub fn new(code: IssueCode, path: IssuePath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            code,
        }
    }

    /// Creates a [`IssueCode::Custom`] issue.
    #[must_use]
    pub fn custom(path: IssuePath, message: impl Into<String>) -> Self {
        Self::new(IssueCode::Custom, path, message)
    }

    /// Returns the issue location.
    #[must_use]
    pub fn path(&self) -> &IssuePath {
        &self.path
    }

    /// Returns the human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Returns the issue category.
    #[must_use]
    pub fn code(&self) -> IssueCode {
        self.code
    }
}

/// Outcome of one validation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    success: bool,
    errors: Vec<Issue>,
}

impl ValidationResult {
    /// Returns a successful result.
    #[must_use]
    pub fn ok() -> Self {
        Self {
            success: true,
            errors: Vec::new(),
        }
    }

    /// Builds a result that succeeds only when `issues` is empty.
    #[must_use]
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        Self {
            success: issues.is_empty(),
            errors: issues,
        }
    }

    /// Returns whether validation passed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the collected issues.
    #[must_use]
    pub fn errors(&self) -> &[Issue] {
        &self.errors
    }
}
