//! Configuration types for TypeScript generation.

use std::str::FromStr;

/// Banner date format, e.g. `Mon Oct 19 2026`.
const DATE_FORMAT: &str = "%a %b %d %Y";

/// Which defs get a generated type guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypeGuardPolicy {
    /// Only defs that fit `entity`.
    #[default]
    Entity,
    /// Every eligible def.
    All,
}

impl FromStr for TypeGuardPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "entity" => Ok(Self::Entity),
            "all" => Ok(Self::All),
            other => Err(format!("unknown type guard policy: {other}")),
        }
    }
}

/// Configuration for TypeScript generation.
#[derive(Clone, Debug)]
pub struct Config {
    /// Which defs get a type guard
    pub(crate) type_guards: TypeGuardPolicy,
    /// Fixed header date; the current date when unset
    pub(crate) generated_on: Option<String>,
    /// Tool named in the header banner
    pub(crate) tool_name: String,
    /// Module the runtime types are imported from
    pub(crate) runtime_module: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            type_guards: TypeGuardPolicy::default(),
            generated_on: None,
            tool_name: "haystack-codegen".to_string(),
            runtime_module: "haystack-core".to_string(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the type guard policy.
    pub fn type_guards(mut self, value: TypeGuardPolicy) -> Self {
        self.type_guards = value;
        self
    }

    /// Pin the date shown in the header banner.
    pub fn generated_on(mut self, value: impl Into<String>) -> Self {
        self.generated_on = Some(value.into());
        self
    }

    /// Set the tool name shown in the header banner.
    pub fn tool_name(mut self, value: impl Into<String>) -> Self {
        self.tool_name = value.into();
        self
    }

    /// Set the module runtime types are imported from.
    pub fn runtime_module(mut self, value: impl Into<String>) -> Self {
        self.runtime_module = value.into();
        self
    }

    pub(crate) fn timestamp(&self) -> String {
        match &self.generated_on {
            Some(date) => date.clone(),
            None => chrono::Local::now().format(DATE_FORMAT).to_string(),
        }
    }
}
