//! Worker parameter resolution
//!
//! Shows the defaults of a parameter schema, then either accepts them in
//! one answer or walks every parameter in schema order.
//!
//! ```text
//! Option                     Value
//! Maximum Seconds Per Job    0
//! Rest Seconds When Empty    60
//! ...
//! Defaults look ok? [Y/n]
//! ```

use crate::ports::prompt_session::PromptSession;
use crate::use_cases::error::SetupError;
use queue_setup_domain::{
    ParameterDefinition, ParameterKind, ParameterValue, ParameterValues, WORKER_PARAMETERS,
};
use tracing::debug;

pub const DEFAULTS_QUESTION: &str = "Defaults look ok?";
pub const TABLE_HEADERS: [&str; 2] = ["Option", "Value"];

/// A fixed parameter schema together with its resolution flow.
///
/// Resolution never mutates the schema; each call starts from the
/// declared defaults.
#[derive(Debug, Clone, Copy)]
pub struct ParameterSet<'a> {
    definitions: &'a [ParameterDefinition],
}

impl Default for ParameterSet<'static> {
    fn default() -> Self {
        Self::new(&WORKER_PARAMETERS)
    }
}

impl<'a> ParameterSet<'a> {
    pub fn new(definitions: &'a [ParameterDefinition]) -> Self {
        Self { definitions }
    }

    /// Label / display-value rows of the default summary table.
    pub fn summary_rows(&self) -> Vec<Vec<String>> {
        self.definitions
            .iter()
            .map(|d| vec![d.label.to_string(), d.kind.default_value().display()])
            .collect()
    }

    /// Resolve one set of values through the prompt.
    pub fn resolve(&self, prompt: &mut dyn PromptSession) -> Result<ParameterValues, SetupError> {
        prompt.table(&TABLE_HEADERS, &self.summary_rows())?;

        if prompt.confirm(DEFAULTS_QUESTION, true)? {
            debug!("Worker parameter defaults accepted");
            return Ok(ParameterValues::defaults_of(self.definitions));
        }

        let mut values = Vec::with_capacity(self.definitions.len());
        for definition in self.definitions {
            let value = Self::ask(prompt, definition)?;
            debug!(key = %definition.key, value = %value.display(), "Worker parameter answered");
            values.push((definition.key, value));
        }

        let values: ParameterValues = values.into_iter().collect();
        values.validate(self.definitions)?;
        Ok(values)
    }

    fn ask(
        prompt: &mut dyn PromptSession,
        definition: &ParameterDefinition,
    ) -> Result<ParameterValue, SetupError> {
        let value = match definition.kind {
            ParameterKind::Bool { default } => {
                ParameterValue::Bool(prompt.confirm(definition.label, default)?)
            }
            ParameterKind::Int { default, required } => {
                let answer = prompt.ask_number(definition.label, Some(default), required)?;
                // A plain integer is never unset; an empty answer keeps the default.
                ParameterValue::Int(answer.unwrap_or(default))
            }
            ParameterKind::NullableInt { default } => {
                ParameterValue::NullableInt(prompt.ask_number(definition.label, default, false)?)
            }
        };
        Ok(value)
    }
}
