//! Rendering of flag reports and resolved plans.

use command_flags_core::{Binding, FlagListing};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Output format for `flags`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Table,
}

/// Flags registered on one command, plus the aliases its descriptors record.
#[derive(Debug, Clone, Serialize)]
pub struct FlagReport {
    pub command: String,
    pub flags: Vec<FlagListing>,
    pub bindings: Vec<Binding>,
}

/// Formats a report in the requested output format.
pub fn format_report(report: &FlagReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        OutputFormat::Table => Ok(report_to_table(report)),
    }
}

/// Formats a resolved plan, as JSON or as sorted `key: value` lines.
pub fn format_plan<T: Serialize>(plan: &T, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(plan)?);
    }

    let value = serde_json::to_value(plan)?;
    let mut out = String::new();
    if let serde_json::Value::Object(fields) = value {
        for (key, value) in fields {
            let rendered = match value {
                serde_json::Value::String(s) => s,
                serde_json::Value::Array(items) => items
                    .iter()
                    .map(|item| match item {
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(","),
                other => other.to_string(),
            };
            out.push_str(&format!("{key}: {rendered}\n"));
        }
    }
    Ok(out)
}

fn flag_label(flag: &FlagListing) -> String {
    let long = flag.long.as_deref().unwrap_or(&flag.name);
    match flag.shorthand {
        Some(short) => format!("-{short}, --{long}"),
        None => format!("    --{long}"),
    }
}

fn report_to_table(report: &FlagReport) -> String {
    let mut out = format!("Command: {}\n", report.command);

    if report.flags.is_empty() {
        out.push_str("\n(no flags)\n");
        return out;
    }

    let labels: Vec<String> = report.flags.iter().map(flag_label).collect();
    let max_label = labels.iter().map(String::len).max().unwrap_or(4);

    out.push_str("\nFlags:\n");
    for (flag, label) in report.flags.iter().zip(&labels) {
        let description = flag.description.as_deref().unwrap_or("");
        let mut line = format!("  {label:<max_label$}  {description}");
        let defaults = flag.defaults.join(",");
        if !defaults.is_empty() {
            line.push_str(&format!(" [default: {defaults}]"));
        }
        if flag.hidden {
            line.push_str(" (hidden)");
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    if !report.bindings.is_empty() {
        out.push_str("\nBindings:\n");
        for binding in &report.bindings {
            let config = binding.config_name.as_deref().unwrap_or("-");
            let env = binding.env_name.as_deref().unwrap_or("-");
            out.push_str(&format!("  --{}  config={config}  env={env}\n", binding.flag));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> FlagReport {
        FlagReport {
            command: "deploy".into(),
            flags: vec![
                FlagListing {
                    name: "yes".into(),
                    long: Some("yes".into()),
                    shorthand: Some('y'),
                    description: Some("Accept all confirmations".into()),
                    defaults: vec!["false".into()],
                    hidden: false,
                    multiple: false,
                },
                FlagListing {
                    name: "env".into(),
                    long: Some("env".into()),
                    shorthand: None,
                    description: Some("Set environment variables".into()),
                    defaults: vec![],
                    hidden: false,
                    multiple: true,
                },
            ],
            bindings: vec![Binding {
                flag: "env".into(),
                config_name: Some("env".into()),
                env_name: None,
            }],
        }
    }

    #[test]
    fn test_format_report_json() {
        let raw = format_report(&sample_report(), OutputFormat::Json).unwrap();
        assert!(raw.contains("\"command\": \"deploy\""));
        assert!(raw.contains("\"shorthand\": \"y\""));
    }

    #[test]
    fn test_format_report_yaml() {
        let raw = format_report(&sample_report(), OutputFormat::Yaml).unwrap();
        assert!(raw.contains("command: deploy"));
    }

    #[test]
    fn test_format_report_table() {
        let raw = format_report(&sample_report(), OutputFormat::Table).unwrap();
        assert!(raw.starts_with("Command: deploy\n"));
        assert!(raw.contains("-y, --yes  Accept all confirmations [default: false]"));
        assert!(raw.contains("    --env  Set environment variables\n"));
        assert!(raw.contains("--env  config=env  env=-"));
    }

    #[test]
    fn test_format_plan_text_is_sorted() {
        #[derive(Serialize)]
        struct Plan {
            region: String,
            env: Vec<String>,
            now: bool,
        }

        let plan = Plan {
            region: "ams".into(),
            env: vec!["A=1".into(), "B=2".into()],
            now: true,
        };
        let raw = format_plan(&plan, false).unwrap();
        assert_eq!(raw, "env: A=1,B=2\nnow: true\nregion: ams\n");
    }
}
