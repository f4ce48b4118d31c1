//! Parameter resolution
//!
//! Each scaffold parameter comes from its command-line value when one was
//! given, and from an interactive prompt otherwise. Parameters are resolved
//! in a fixed order because later defaults depend on earlier answers (the
//! package name defaults to a slug of the app name).

use crate::error::{Error, Result};
use crate::slug::slugify;
use crate::types::ScaffoldParams;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

static SEMVER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("semver regex is valid"));

/// Version offered when prompting
pub const DEFAULT_VERSION: &str = "0.1.0";

/// Input checks applied to flag values and prompt answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validator {
    /// Rejects empty or whitespace-only input
    NonEmpty,
    /// Accepts only numeric `MAJOR.MINOR.PATCH`
    SemVer,
}

impl Validator {
    /// Check a value, returning the message shown on rejection
    pub fn check(&self, value: &str) -> std::result::Result<(), String> {
        match self {
            Self::NonEmpty if value.trim().is_empty() => Err("A value is required".to_string()),
            Self::SemVer if !SEMVER_RE.is_match(value.trim()) => {
                Err("Version must look like MAJOR.MINOR.PATCH (e.g. 1.2.3)".to_string())
            }
            _ => Ok(()),
        }
    }
}

/// Check a version string
pub fn is_valid_version(version: &str) -> bool {
    Validator::SemVer.check(version).is_ok()
}

/// One question put to the user
#[derive(Debug, Clone)]
pub struct PromptSpec {
    /// Parameter being asked for
    pub field: &'static str,
    /// Question text
    pub message: String,
    /// Answer used when the user just presses enter
    pub default: Option<String>,
    /// Check applied to the answer
    pub validator: Option<Validator>,
    /// Whether an empty answer is acceptable
    pub allow_empty: bool,
}

impl PromptSpec {
    fn new(field: &'static str, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
            default: None,
            validator: None,
            allow_empty: false,
        }
    }

    fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    fn validator(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    fn optional(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    /// Validate an answer against this spec
    pub fn check(&self, value: &str) -> std::result::Result<(), String> {
        if let Some(validator) = self.validator {
            validator.check(value)?;
        }
        if !self.allow_empty && value.trim().is_empty() {
            return Err("A value is required".to_string());
        }
        Ok(())
    }
}

/// Source of interactive answers
///
/// Implementations should re-ask on their own when they can; the resolver
/// re-asks as well whenever an answer fails the spec's checks.
pub trait Prompter {
    /// Ask one question and return the raw answer
    fn ask(&mut self, spec: &PromptSpec) -> Result<String>;
}

/// Values supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct ParamOverrides {
    pub app_name: Option<String>,
    pub package_name: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    pub repository_url: Option<String>,
}

/// Resolves [`ScaffoldParams`] from overrides and prompts
pub struct ParamResolver<'a, P: Prompter> {
    prompter: &'a mut P,
    accept_defaults: bool,
    default_license: String,
}

impl<'a, P: Prompter> ParamResolver<'a, P> {
    /// Create a resolver that prompts through `prompter`
    pub fn new(prompter: &'a mut P) -> Self {
        Self {
            prompter,
            accept_defaults: false,
            default_license: "MIT".to_string(),
        }
    }

    /// Take defaults instead of prompting wherever a default exists
    pub fn accept_defaults(mut self, accept: bool) -> Self {
        self.accept_defaults = accept;
        self
    }

    /// License identifier offered as the default
    pub fn default_license(mut self, license: impl Into<String>) -> Self {
        self.default_license = license.into();
        self
    }

    /// Resolve all seven parameters in order
    pub fn resolve(mut self, overrides: ParamOverrides) -> Result<ScaffoldParams> {
        let app_name = self.resolve_one(
            overrides.app_name,
            PromptSpec::new("app name", "Application name").validator(Validator::NonEmpty),
        )?;

        let package_name = self.resolve_one(
            overrides.package_name,
            PromptSpec::new("package name", "Package name")
                .default_value(slugify(&app_name))
                .validator(Validator::NonEmpty),
        )?;

        let description = self.resolve_one(
            overrides.description,
            PromptSpec::new("description", "Package description").validator(Validator::NonEmpty),
        )?;

        let author = self.resolve_one(
            overrides.author,
            PromptSpec::new("author", "Package author").optional(),
        )?;

        let version = self.resolve_one(
            overrides.version,
            PromptSpec::new("version", "Package version")
                .default_value(DEFAULT_VERSION)
                .validator(Validator::SemVer),
        )?;

        let license = self.resolve_one(
            overrides.license,
            PromptSpec::new("license", "Package license (SPDX identifier)")
                .default_value(self.default_license.clone())
                .validator(Validator::NonEmpty),
        )?;

        let repository_url = self.resolve_one(
            overrides.repository_url,
            PromptSpec::new("repository url", "Repository URL").optional(),
        )?;

        Ok(ScaffoldParams {
            app_name,
            package_name,
            author,
            description,
            version,
            license,
            repository_url,
        })
    }

    /// Use the flag value when present and valid, otherwise ask
    fn resolve_one(&mut self, provided: Option<String>, spec: PromptSpec) -> Result<String> {
        if let Some(value) = provided.map(|v| v.trim().to_string()) {
            if !value.is_empty() {
                match spec.check(&value) {
                    Ok(()) => {
                        debug!("Using command-line {}: {}", spec.field, value);
                        return Ok(value);
                    }
                    Err(reason) => warn!(
                        "Ignoring --{} value '{}': {}",
                        flag_name(spec.field),
                        value,
                        reason
                    ),
                }
            }
        }

        if self.accept_defaults {
            return match spec.default.clone() {
                Some(default) => match spec.check(&default) {
                    Ok(()) => Ok(default),
                    Err(reason) => Err(Error::validation(
                        spec.field,
                        format!("default '{}' is not usable: {}", default, reason),
                    )),
                },
                None if spec.allow_empty => Ok(String::new()),
                None => Err(Error::validation(
                    spec.field,
                    "no value given and no default available",
                )),
            };
        }

        loop {
            let answer = self.prompter.ask(&spec)?;
            let answer = answer.trim().to_string();
            let answer = match (&spec.default, answer.is_empty()) {
                (Some(default), true) => default.clone(),
                _ => answer,
            };

            match spec.check(&answer) {
                Ok(()) => return Ok(answer),
                Err(reason) => warn!("Invalid {}: {}", spec.field, reason),
            }
        }
    }
}

/// Command-line flag spelling for a field label
fn flag_name(field: &str) -> &'static str {
    match field {
        "app name" => "app-name",
        "package name" => "package-name",
        "author" => "package-author",
        "description" => "package-description",
        "version" => "package-version",
        "license" => "package-license",
        _ => "package-url",
    }
}
