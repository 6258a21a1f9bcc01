use crate::cli::OutputFormat;
use crate::commands::Rendered;
use crate::error::CliError;

pub fn render(rendered: &Rendered, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(&rendered.envelope)?
            } else {
                serde_json::to_string(&rendered.envelope)?
            };
            println!("{payload}");
        }
        OutputFormat::Ndjson => {
            let payload = serde_json::to_string(&rendered.envelope)?;
            println!("{payload}");
        }
        OutputFormat::Table => {
            for line in table_lines(rendered) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn table_lines(rendered: &Rendered) -> Vec<String> {
    let meta = &rendered.envelope.meta;
    let mut lines = vec![
        format!("dataset     : {}", meta.dataset),
        format!("companies   : {}", meta.record_count),
        format!("generated_at: {}", meta.generated_at),
    ];

    if !meta.warnings.is_empty() {
        lines.push(String::from("warnings:"));
        lines.extend(meta.warnings.iter().map(|warning| format!("  - {warning}")));
    }

    lines.push(String::new());
    lines.extend(rendered.text.iter().cloned());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use hercap_core::{Envelope, EnvelopeMeta};
    use serde_json::json;

    #[test]
    fn table_output_lists_warnings_before_body() {
        let mut meta = EnvelopeMeta::new("request-12345", "v1.0.0", "companies", 0)
            .expect("meta");
        meta.push_warning("no companies match the current filters");
        let rendered = Rendered {
            envelope: Envelope::new(meta, json!({})).expect("envelope"),
            text: vec![String::from("body")],
        };

        let lines = table_lines(&rendered);
        assert_eq!(lines[0], "dataset     : companies");
        assert_eq!(lines[3], "warnings:");
        assert_eq!(lines[4], "  - no companies match the current filters");
        assert_eq!(lines.last().map(String::as_str), Some("body"));
    }
}
