use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use corrkit_decode::{DecodeStats, Record};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct RecordOutput<'a> {
    schema_id: &'static str,
    #[serde(flatten)]
    record: &'a Record,
}

pub fn print_record(record: &Record, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = RecordOutput {
                schema_id: "https://schemas.corrkit.dev/cli/v1/record.schema.json",
                record,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FIELD", "VALUE"])
                .add_row(vec!["msg_number".to_string(), record.msg_number.to_string()])
                .add_row(vec!["length".to_string(), record.length.to_string()]);
            for field in &record.fields {
                table.add_row(vec![field.name.clone(), field.value.as_i64().to_string()]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            let fields = record
                .fields
                .iter()
                .map(|f| format!("{}={}", f.name, f.value.as_i64()))
                .collect::<Vec<_>>()
                .join(" ");
            println!(
                "msg={} len={} {}",
                record.msg_number, record.length, fields
            );
        }
    }
}

#[derive(Serialize)]
struct StatsOutput<'a> {
    schema_id: &'static str,
    #[serde(flatten)]
    stats: &'a DecodeStats,
}

pub fn print_stats(stats: &DecodeStats, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = StatsOutput {
                schema_id: "https://schemas.corrkit.dev/cli/v1/decode-report.schema.json",
                stats,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FRAMES", "DECODED", "SKIPPED", "FAILED"])
                .add_row(vec![
                    stats.frames.to_string(),
                    stats.decoded.to_string(),
                    stats.skipped.to_string(),
                    stats.failed.to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "frames={} decoded={} skipped={} failed={}",
                stats.frames, stats.decoded, stats.skipped, stats.failed
            );
        }
    }
}
