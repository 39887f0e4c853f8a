//! Worker parameter schema.
//!
//! Every worker carries the same seven tunables. Their order, labels and
//! defaults are fixed by [`WORKER_PARAMETERS`]; resolving a worker's
//! parameters never mutates the schema, it produces a fresh
//! [`ParameterValues`].

use crate::core::error::DomainError;

/// Identifies one tunable worker parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKey {
    Timeout,
    Sleep,
    Processes,
    StopWaitSecs,
    Daemon,
    Force,
    Tries,
}

impl ParameterKey {
    /// Returns the serialized key name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ParameterKey::Timeout => "timeout",
            ParameterKey::Sleep => "sleep",
            ParameterKey::Processes => "processes",
            ParameterKey::StopWaitSecs => "stopwaitsecs",
            ParameterKey::Daemon => "daemon",
            ParameterKey::Force => "force",
            ParameterKey::Tries => "tries",
        }
    }
}

impl std::fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Value kind of a parameter, carrying its default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    /// Non-negative integer. `required` forces a non-empty answer on override.
    Int { default: u32, required: bool },
    Bool { default: bool },
    /// Non-negative integer that may be left unset.
    NullableInt { default: Option<u32> },
}

impl ParameterKind {
    pub fn default_value(&self) -> ParameterValue {
        match *self {
            ParameterKind::Int { default, .. } => ParameterValue::Int(default),
            ParameterKind::Bool { default } => ParameterValue::Bool(default),
            ParameterKind::NullableInt { default } => ParameterValue::NullableInt(default),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ParameterKind::Int { .. } => "integer",
            ParameterKind::Bool { .. } => "boolean",
            ParameterKind::NullableInt { .. } => "optional integer",
        }
    }
}

/// A resolved parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterValue {
    Int(u32),
    Bool(bool),
    NullableInt(Option<u32>),
}

impl ParameterValue {
    /// Summary-table rendering: booleans as `Yes`/`No`, unset as `-`.
    pub fn display(&self) -> String {
        match self {
            ParameterValue::Int(n) | ParameterValue::NullableInt(Some(n)) => n.to_string(),
            ParameterValue::Bool(true) => "Yes".to_string(),
            ParameterValue::Bool(false) => "No".to_string(),
            ParameterValue::NullableInt(None) => "-".to_string(),
        }
    }

    fn matches(&self, kind: &ParameterKind) -> bool {
        matches!(
            (self, kind),
            (ParameterValue::Int(_), ParameterKind::Int { .. })
                | (ParameterValue::Bool(_), ParameterKind::Bool { .. })
                | (ParameterValue::NullableInt(_), ParameterKind::NullableInt { .. })
        )
    }
}

/// Definition of a single tunable parameter (immutable).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterDefinition {
    pub key: ParameterKey,
    /// Display label, also used as the override question.
    pub label: &'static str,
    pub kind: ParameterKind,
}

impl ParameterDefinition {
    pub const fn new(key: ParameterKey, label: &'static str, kind: ParameterKind) -> Self {
        Self { key, label, kind }
    }

    /// Whether an override answer may not be left empty.
    pub fn required(&self) -> bool {
        matches!(self.kind, ParameterKind::Int { required: true, .. })
    }
}

/// The fixed worker parameter schema, in prompt order.
pub const WORKER_PARAMETERS: [ParameterDefinition; 7] = [
    ParameterDefinition::new(
        ParameterKey::Timeout,
        "Maximum Seconds Per Job",
        ParameterKind::Int {
            default: 0,
            required: false,
        },
    ),
    ParameterDefinition::new(
        ParameterKey::Sleep,
        "Rest Seconds When Empty",
        ParameterKind::Int {
            default: 60,
            required: true,
        },
    ),
    ParameterDefinition::new(
        ParameterKey::Processes,
        "Number of Processes",
        ParameterKind::Int {
            default: 1,
            required: false,
        },
    ),
    ParameterDefinition::new(
        ParameterKey::StopWaitSecs,
        "Graceful Shutdown Seconds",
        ParameterKind::Int {
            default: 10,
            required: false,
        },
    ),
    ParameterDefinition::new(
        ParameterKey::Daemon,
        "Run Worker As Daemon",
        ParameterKind::Bool { default: false },
    ),
    ParameterDefinition::new(
        ParameterKey::Force,
        "Always Run, Even In Maintenance Mode",
        ParameterKind::Bool { default: false },
    ),
    ParameterDefinition::new(
        ParameterKey::Tries,
        "Maximum Tries",
        ParameterKind::NullableInt { default: None },
    ),
];

/// Ordered key → value mapping produced by one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterValues {
    entries: Vec<(ParameterKey, ParameterValue)>,
}

impl ParameterValues {
    /// The defaults of the given schema, in schema order.
    pub fn defaults_of(definitions: &[ParameterDefinition]) -> Self {
        definitions
            .iter()
            .map(|d| (d.key, d.kind.default_value()))
            .collect()
    }

    /// Default values of [`WORKER_PARAMETERS`].
    pub fn defaults() -> Self {
        Self::defaults_of(&WORKER_PARAMETERS)
    }

    pub fn get(&self, key: ParameterKey) -> Option<ParameterValue> {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(ParameterKey, ParameterValue)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> Vec<ParameterKey> {
        self.entries.iter().map(|(k, _)| *k).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn int(&self, key: ParameterKey) -> Result<u32, DomainError> {
        match self.lookup(key)? {
            ParameterValue::Int(n) => Ok(n),
            _ => Err(mismatch(key, "integer")),
        }
    }

    pub fn bool(&self, key: ParameterKey) -> Result<bool, DomainError> {
        match self.lookup(key)? {
            ParameterValue::Bool(b) => Ok(b),
            _ => Err(mismatch(key, "boolean")),
        }
    }

    pub fn nullable_int(&self, key: ParameterKey) -> Result<Option<u32>, DomainError> {
        match self.lookup(key)? {
            ParameterValue::NullableInt(n) => Ok(n),
            _ => Err(mismatch(key, "optional integer")),
        }
    }

    /// Check that every definition has a value of its declared kind.
    pub fn validate(&self, definitions: &[ParameterDefinition]) -> Result<(), DomainError> {
        for definition in definitions {
            let value = self.lookup(definition.key)?;
            if !value.matches(&definition.kind) {
                return Err(mismatch(definition.key, definition.kind.name()));
            }
        }
        Ok(())
    }

    fn lookup(&self, key: ParameterKey) -> Result<ParameterValue, DomainError> {
        self.get(key)
            .ok_or(DomainError::MissingParameter(key.as_str()))
    }
}

impl FromIterator<(ParameterKey, ParameterValue)> for ParameterValues {
    fn from_iter<I: IntoIterator<Item = (ParameterKey, ParameterValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn mismatch(key: ParameterKey, expected: &'static str) -> DomainError {
    DomainError::ParameterKindMismatch {
        key: key.as_str(),
        expected,
    }
}
