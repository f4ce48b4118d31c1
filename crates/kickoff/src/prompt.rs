//! Interactive prompts backed by dialoguer

use dialoguer::Input;
use kickoff_core::params::{PromptSpec, Prompter};
use kickoff_core::{Error, Result};

/// Asks questions on the controlling terminal
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&mut self, spec: &PromptSpec) -> Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(spec.message.as_str())
            .allow_empty(spec.allow_empty || spec.default.is_some())
            .validate_with(|value: &String| -> std::result::Result<(), String> {
                // Empty answers take the default, which the resolver checks itself
                if value.is_empty() && spec.default.is_some() {
                    return Ok(());
                }
                spec.check(value)
            });

        if let Some(default) = &spec.default {
            input = input.default(default.clone());
        }

        input
            .interact_text()
            .map_err(|e| Error::prompt(format!("{}: {}", spec.field, e)))
    }
}
