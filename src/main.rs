use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use validator_rs::input::{self, InputFormat};
use validator_rs::{classify, Predicate, Value};

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Format used to decode literal values (json or yaml)
    #[arg(long, global = true)]
    format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a single predicate; exits non-zero when it does not hold
    Check {
        /// Predicate name, e.g. isInteger
        predicate: String,

        /// The value to test
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Evaluate every predicate and print the result as JSON
    Classify {
        /// The value to classify
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Classify the values in a JSON or YAML file, format picked by extension
    File {
        /// Path to the document
        path: PathBuf,

        /// Only evaluate this predicate
        #[arg(short, long)]
        predicate: Option<String>,
    },
}

/// Format for literal values: the flag wins over the environment, YAML otherwise
fn resolve_format(flag: Option<String>, env: Option<String>) -> anyhow::Result<InputFormat> {
    match flag.or(env) {
        Some(name) => Ok(name.parse::<InputFormat>()?),
        None => Ok(InputFormat::default()),
    }
}

fn decode_literal(value: &str, format: InputFormat) -> anyhow::Result<Value> {
    input::parse_value(value, format)
        .with_context(|| format!("Failed to decode value: {}", value))
}

/// Execute a command, writing results to `out`. Returns whether it succeeded.
fn run(args: Args, format_env: Option<String>, out: &mut impl Write) -> anyhow::Result<bool> {
    let format = resolve_format(args.format, format_env)?;
    log::debug!("Using input format: {:?}", format);

    match args.command {
        Commands::Check { predicate, value } => {
            let predicate: Predicate = predicate.parse()?;
            let value = decode_literal(&value, format)?;

            let holds = predicate.test(&value);
            writeln!(out, "{}", holds)?;
            Ok(holds)
        }
        Commands::Classify { value } => {
            let value = decode_literal(&value, format)?;
            writeln!(out, "{}", serde_json::to_string(&classify(&value))?)?;
            Ok(true)
        }
        Commands::File { path, predicate } => {
            let predicate = predicate.map(|p| p.parse::<Predicate>()).transpose()?;
            let document = input::load_file(&path, None)
                .with_context(|| format!("Failed to load {}", path.display()))?;

            let values = match document {
                Value::Array(items) => items,
                other => vec![other],
            };
            log::info!("Classifying {} value(s) from {}", values.len(), path.display());

            for value in &values {
                let line = match predicate {
                    Some(p) => serde_json::json!({
                        "value": value.to_string(),
                        "predicate": p,
                        "result": p.test(value),
                    }),
                    None => serde_json::json!({
                        "value": value.to_string(),
                        "classification": classify(value),
                    }),
                };
                writeln!(out, "{}", line)?;
            }
            Ok(true)
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let format_env = std::env::var("VALIDATOR_FORMAT").ok();

    let succeeded = run(args, format_env, &mut std::io::stdout().lock())?;
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value as Json};
    use std::fs;

    fn run_cli(argv: &[&str], format_env: Option<&str>) -> (bool, String) {
        let args = Args::try_parse_from(argv).unwrap();
        let mut out = Vec::new();
        let succeeded = run(args, format_env.map(String::from), &mut out).unwrap();
        (succeeded, String::from_utf8(out).unwrap())
    }

    fn json_lines(output: &str) -> Vec<Json> {
        output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_negative_literals_parse_as_values() {
        for literal in ["-4875", "-5.674", "-.inf"] {
            let args =
                Args::try_parse_from(["validator", "check", "isNumber", literal]).unwrap();
            assert!(matches!(args.command, Commands::Check { value, .. } if value == literal));

            let args = Args::try_parse_from(["validator", "classify", literal]).unwrap();
            assert!(matches!(args.command, Commands::Classify { value } if value == literal));
        }
    }

    #[test]
    fn test_check_negative_integer() {
        let (succeeded, output) = run_cli(&["validator", "check", "isInteger", "-4875"], None);
        assert!(succeeded);
        assert_eq!(output, "true\n");

        let (succeeded, output) = run_cli(&["validator", "check", "isFloat", "-4875"], None);
        assert!(!succeeded);
        assert_eq!(output, "false\n");
    }

    #[test]
    fn test_check_negative_infinity_is_number_only() {
        assert!(run_cli(&["validator", "check", "isNumber", "-.inf"], None).0);
        assert!(!run_cli(&["validator", "check", "isInteger", "-.inf"], None).0);
        assert!(!run_cli(&["validator", "check", "isFloat", "-.inf"], None).0);
    }

    #[test]
    fn test_check_unknown_predicate_errors() {
        let args = Args::try_parse_from(["validator", "check", "isDate", "1"]).unwrap();
        assert!(run(args, None, &mut Vec::new()).is_err());
    }

    #[test]
    fn test_classify_prints_json() {
        let (succeeded, output) = run_cli(&["validator", "classify", "-5.674"], None);
        assert!(succeeded);
        assert_eq!(
            json_lines(&output),
            vec![json!({
                "kind": "number",
                "isString": false,
                "isBool": false,
                "isFunction": false,
                "isNumber": true,
                "isInteger": false,
                "isFloat": true
            })]
        );
    }

    #[test]
    fn test_format_flag_overrides_env() {
        assert_eq!(resolve_format(None, None).unwrap(), InputFormat::Yaml);
        assert_eq!(
            resolve_format(None, Some("json".to_string())).unwrap(),
            InputFormat::Json
        );
        assert_eq!(
            resolve_format(Some("yaml".to_string()), Some("json".to_string())).unwrap(),
            InputFormat::Yaml
        );
        assert!(resolve_format(None, Some("toml".to_string())).is_err());
    }

    #[test]
    fn test_env_format_decodes_literals() {
        // `.inf` is a YAML float but not valid JSON
        assert!(run_cli(&["validator", "check", "isNumber", ".inf"], None).0);

        let args = Args::try_parse_from(["validator", "check", "isNumber", ".inf"]).unwrap();
        assert!(run(args, Some("json".to_string()), &mut Vec::new()).is_err());
    }

    #[test]
    fn test_file_prints_one_line_per_element() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.yaml");
        fs::write(&path, "- hello\n- 2774\n- .inf\n").unwrap();
        let path = path.to_str().unwrap();

        let (succeeded, output) = run_cli(&["validator", "file", path], None);
        assert!(succeeded);

        let lines = json_lines(&output);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["value"], json!("\"hello\""));
        assert_eq!(lines[0]["classification"]["isString"], json!(true));
        assert_eq!(lines[1]["classification"]["isInteger"], json!(true));
        assert_eq!(lines[2]["value"], json!("Infinity"));
        assert_eq!(lines[2]["classification"]["isFloat"], json!(false));
    }

    #[test]
    fn test_file_predicate_filter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.json");
        fs::write(&path, "[1, 1.5, \"x\"]").unwrap();
        let path = path.to_str().unwrap();

        let (_, output) = run_cli(&["validator", "file", path, "--predicate", "isFloat"], None);
        assert_eq!(
            json_lines(&output),
            vec![
                json!({"value": "1", "predicate": "isFloat", "result": false}),
                json!({"value": "1.5", "predicate": "isFloat", "result": true}),
                json!({"value": "\"x\"", "predicate": "isFloat", "result": false}),
            ]
        );
    }

    #[test]
    fn test_file_ignores_literal_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("values.yaml");
        fs::write(&path, "- .inf\n- hello\n").unwrap();
        let path = path.to_str().unwrap();

        let (succeeded, output) = run_cli(&["validator", "file", path], Some("json"));
        assert!(succeeded);
        assert_eq!(json_lines(&output).len(), 2);

        let (succeeded, _) = run_cli(&["validator", "--format", "json", "file", path], None);
        assert!(succeeded);
    }

    #[test]
    fn test_file_single_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("value.json");
        fs::write(&path, "{\"a\": 1}").unwrap();
        let path = path.to_str().unwrap();

        let (_, output) = run_cli(&["validator", "file", path], None);
        let lines = json_lines(&output);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0]["classification"]["kind"], json!("object"));
    }
}
