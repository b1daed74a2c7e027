use std::io::Write;

use serde_json::Value;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(data: &Value, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_payload(&mut out, data, format, pretty)?;
    out.flush()?;
    Ok(())
}

fn write_payload(
    out: &mut impl Write,
    data: &Value,
    format: OutputFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(data)?
            } else {
                serde_json::to_string(data)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Ndjson => match data {
            Value::Array(records) => {
                for record in records {
                    writeln!(out, "{}", serde_json::to_string(record)?)?;
                }
            }
            record => writeln!(out, "{}", serde_json::to_string(record)?)?,
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn rendered(data: &Value, format: OutputFormat, pretty: bool) -> String {
        let mut buffer = Vec::new();
        write_payload(&mut buffer, data, format, pretty).expect("write");
        String::from_utf8(buffer).expect("utf8")
    }

    #[test]
    fn json_is_one_line_unless_pretty() {
        let data = json!([{"formType": "10K"}, {"formType": "10Q"}]);

        assert_eq!(
            rendered(&data, OutputFormat::Json, false),
            "[{\"formType\":\"10K\"},{\"formType\":\"10Q\"}]\n"
        );
        assert!(rendered(&data, OutputFormat::Json, true).lines().count() > 2);
    }

    #[test]
    fn ndjson_writes_one_record_per_line() {
        let data = json!([{"formType": "10K"}, {"formType": "10Q"}]);
        let output = rendered(&data, OutputFormat::Ndjson, true);

        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec!["{\"formType\":\"10K\"}", "{\"formType\":\"10Q\"}"]);
    }

    #[test]
    fn ndjson_profile_is_a_single_line() {
        let output = rendered(&json!({"symbol": "IBM"}), OutputFormat::Ndjson, false);
        assert_eq!(output, "{\"symbol\":\"IBM\"}\n");
    }
}
