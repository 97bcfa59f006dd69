use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

use crate::cmd::{decode::build_registry, SchemasArgs};
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct SchemaSummary {
    msg_number: u16,
    header_fields: usize,
    content_fields: usize,
    content_bits: u32,
}

#[derive(Serialize)]
struct SchemasOutput {
    schema_id: &'static str,
    schemas: Vec<SchemaSummary>,
}

pub fn run(args: SchemasArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = build_registry(false, args.schemas.as_deref())?;

    let summaries: Vec<SchemaSummary> = registry
        .msg_numbers()
        .into_iter()
        .filter_map(|n| registry.get(n))
        .map(|schema| SchemaSummary {
            msg_number: schema.msg_number,
            header_fields: schema.header.len(),
            content_fields: schema.content.len(),
            content_bits: schema.content_bits,
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let out = SchemasOutput {
                schema_id: "https://schemas.corrkit.dev/cli/v1/schema-list.schema.json",
                schemas: summaries,
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
                .set_header(vec!["MSG", "HEADER FIELDS", "CONTENT FIELDS", "CONTENT BITS"]);
            for s in &summaries {
                table.add_row(vec![
                    s.msg_number.to_string(),
                    s.header_fields.to_string(),
                    s.content_fields.to_string(),
                    s.content_bits.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for s in &summaries {
                println!(
                    "msg={} header_fields={} content_fields={} content_bits={}",
                    s.msg_number, s.header_fields, s.content_fields, s.content_bits
                );
            }
        }
    }

    Ok(SUCCESS)
}
