//! Command execution
//!
//! The runner owns the realm that input values are created in and turns a
//! parsed [`Command`] into printable output plus an exit code.

use core_types::{JsValue, Realm};
use serde::Serialize;
use type_check::{
    classify, matching_predicates, predicate_by_name, resolve_object_kind, OBJECT_TYPE_NAMES,
};

use crate::cli::{Command, InputArgs, ReportFormat};
use crate::error::{CliError, CliResult};
use crate::samples::{sample, SAMPLES};

/// Output of a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Text for stdout, newline-terminated
    pub output: String,
    /// Process exit status
    pub exit_code: i32,
}

impl Execution {
    fn success(output: String) -> Self {
        Execution {
            output,
            exit_code: 0,
        }
    }
}

/// Everything the classifier knows about one value
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// `String(value)`
    pub value: String,
    /// Type tag, `null` when unrecognized
    #[serde(rename = "type")]
    pub type_tag: Option<&'static str>,
    /// Object kind, `null` when unrecognized
    pub kind: Option<&'static str>,
    /// Names of the predicates that hold, in catalog order
    pub predicates: Vec<&'static str>,
}

impl Report {
    /// Build the report for a value
    pub fn of(value: &JsValue) -> Self {
        Report {
            value: value.to_js_string(),
            type_tag: classify(value).map(|tag| tag.as_str()),
            kind: resolve_object_kind(value).map(|kind| kind.as_str()),
            predicates: matching_predicates(value),
        }
    }

    /// Aligned `key: value` lines
    pub fn to_text(&self) -> String {
        format!(
            "value:      {}\ntype:       {}\nkind:       {}\npredicates: {}\n",
            self.value,
            self.type_tag.unwrap_or("undefined"),
            self.kind.unwrap_or("undefined"),
            self.predicates.join(", ")
        )
    }
}

/// Executes CLI commands against a single realm
pub struct Runner {
    realm: Realm,
}

impl Runner {
    /// Create a runner with a fresh realm
    pub fn new() -> Self {
        Runner {
            realm: Realm::new(),
        }
    }

    /// The realm input values are created in
    pub fn realm(&self) -> &Realm {
        &self.realm
    }

    /// Resolve `--json` / `--sample` into a value
    pub fn load(&self, input: &InputArgs) -> CliResult<JsValue> {
        match (&input.json, &input.sample) {
            (Some(text), _) => {
                let document: serde_json::Value = serde_json::from_str(text)?;
                Ok(self.realm.from_json(&document))
            }
            (None, Some(name)) => sample(&self.realm, name),
            // clap enforces the argument group; an empty input is `undefined`
            (None, None) => Ok(JsValue::Undefined),
        }
    }

    /// Run one command
    ///
    /// ```
    /// use type_check_cli::{Command, InputArgs, Runner};
    ///
    /// let runner = Runner::new();
    /// let input = InputArgs { json: Some("[]".to_string()), sample: None };
    /// let result = runner.execute(&Command::Classify { input }).unwrap();
    /// assert_eq!(result.output, "Array\n");
    /// ```
    pub fn execute(&self, command: &Command) -> CliResult<Execution> {
        tracing::debug!(?command, "dispatching command");
        match command {
            Command::Classify { input } => {
                let value = self.load(input)?;
                let tag = classify(&value).map_or("undefined", |tag| tag.as_str());
                Ok(Execution::success(format!("{}\n", tag)))
            }
            Command::Check { predicate, input } => {
                let check = predicate_by_name(predicate)
                    .ok_or_else(|| CliError::UnknownPredicate(predicate.clone()))?;
                let value = self.load(input)?;
                let holds = check(&value);
                Ok(Execution {
                    output: format!("{}\n", holds),
                    exit_code: if holds { 0 } else { 1 },
                })
            }
            Command::Report { input, format } => {
                let report = Report::of(&self.load(input)?);
                let output = match format {
                    ReportFormat::Text => report.to_text(),
                    ReportFormat::Json => format!("{}\n", serde_json::to_string_pretty(&report)?),
                };
                Ok(Execution::success(output))
            }
            Command::Vocabulary => {
                let mut output = String::new();
                for kind in OBJECT_TYPE_NAMES {
                    output.push_str(kind.as_str());
                    output.push('\n');
                }
                Ok(Execution::success(output))
            }
            Command::Samples => {
                let width = SAMPLES.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
                let mut output = String::new();
                for (name, description) in SAMPLES {
                    output.push_str(&format!("{:width$}  {}\n", name, description, width = width));
                }
                Ok(Execution::success(output))
            }
        }
    }
}

impl Default for Runner {
    fn default() -> Self {
        Runner::new()
    }
}
