//! Scripted prompt session shared by the use case tests.

use crate::ports::prompt_session::{PromptError, PromptSession};
use std::collections::VecDeque;

/// An expected question and the answer to give.
#[derive(Debug, Clone)]
enum Expectation {
    Confirm(String, bool),
    Ask(String, String),
    Number(String, Option<u32>),
    Choice(String, String),
}

/// A question as it was actually asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Asked {
    pub question: String,
    pub default: Option<String>,
    /// Set for number questions only.
    pub required: Option<bool>,
}

/// Prompt session that answers from a script and asserts question order.
///
/// Answers are returned verbatim, valid or not. Running out of script
/// behaves like an operator abort.
#[derive(Debug, Default)]
pub(crate) struct ScriptedPrompt {
    script: VecDeque<Expectation>,
    pub asked: Vec<Asked>,
    pub tables: Vec<Vec<Vec<String>>>,
}

impl ScriptedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expects_confirmation(mut self, question: &str, answer: bool) -> Self {
        self.script
            .push_back(Expectation::Confirm(question.to_string(), answer));
        self
    }

    pub fn expects_question(mut self, question: &str, answer: &str) -> Self {
        self.script
            .push_back(Expectation::Ask(question.to_string(), answer.to_string()));
        self
    }

    pub fn expects_number(mut self, question: &str, answer: Option<u32>) -> Self {
        self.script
            .push_back(Expectation::Number(question.to_string(), answer));
        self
    }

    pub fn expects_choice(mut self, question: &str, answer: &str) -> Self {
        self.script
            .push_back(Expectation::Choice(question.to_string(), answer.to_string()));
        self
    }

    /// Panics if part of the script was never asked.
    pub fn assert_finished(&self) {
        assert!(
            self.script.is_empty(),
            "unasked questions remain: {:?}",
            self.script
        );
    }

    /// Defaults offered for every occurrence of `question`, in order.
    pub fn defaults_for(&self, question: &str) -> Vec<Option<String>> {
        self.asked
            .iter()
            .filter(|a| a.question == question)
            .map(|a| a.default.clone())
            .collect()
    }

    /// `(question, required)` for every number question, in order.
    pub fn number_requirements(&self) -> Vec<(String, bool)> {
        self.asked
            .iter()
            .filter_map(|a| a.required.map(|r| (a.question.clone(), r)))
            .collect()
    }

    /// All questions, in the order they were asked.
    pub fn questions(&self) -> Vec<String> {
        self.asked.iter().map(|a| a.question.clone()).collect()
    }

    fn next(
        &mut self,
        question: &str,
        default: Option<String>,
        required: Option<bool>,
    ) -> Result<Expectation, PromptError> {
        self.asked.push(Asked {
            question: question.to_string(),
            default,
            required,
        });
        self.script.pop_front().ok_or(PromptError::Cancelled)
    }
}

impl PromptSession for ScriptedPrompt {
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool, PromptError> {
        match self.next(question, Some(default.to_string()), None)? {
            Expectation::Confirm(expected, answer) if expected == question => Ok(answer),
            other => panic!("asked confirmation '{}', script has {:?}", question, other),
        }
    }

    fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String, PromptError> {
        match self.next(question, default.map(str::to_string), None)? {
            Expectation::Ask(expected, answer) if expected == question => Ok(answer),
            other => panic!("asked question '{}', script has {:?}", question, other),
        }
    }

    fn ask_number(
        &mut self,
        question: &str,
        default: Option<u32>,
        required: bool,
    ) -> Result<Option<u32>, PromptError> {
        match self.next(question, default.map(|d| d.to_string()), Some(required))? {
            Expectation::Number(expected, answer) if expected == question => Ok(answer),
            other => panic!("asked number '{}', script has {:?}", question, other),
        }
    }

    fn choose(
        &mut self,
        question: &str,
        _options: &[&str],
        default: Option<&str>,
    ) -> Result<String, PromptError> {
        match self.next(question, default.map(str::to_string), None)? {
            Expectation::Choice(expected, answer) if expected == question => Ok(answer),
            other => panic!("asked choice '{}', script has {:?}", question, other),
        }
    }

    fn table(&mut self, _headers: &[&str], rows: &[Vec<String>]) -> Result<(), PromptError> {
        self.tables.push(rows.to_vec());
        Ok(())
    }
}
