use std::fs::File;
use std::path::Path;

use corrkit_decode::Decoder;
use corrkit_schema::SchemaRegistry;
use tracing::info;

use crate::cmd::DecodeArgs;
use crate::exit::{decode_error, io_error, schema_error, CliResult, SUCCESS};
use crate::output::{print_record, print_stats, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let registry = build_registry(args.no_builtin, args.schemas.as_deref())?;
    let decoder = Decoder::new(&registry);

    let (records, stats) = if args.input == Path::new("-") {
        decoder
            .decode_read(std::io::stdin().lock())
            .map_err(|err| decode_error("decoding stdin", err))?
    } else {
        let file = File::open(&args.input)
            .map_err(|err| io_error(&format!("opening {}", args.input.display()), err))?;
        decoder
            .decode_read(file)
            .map_err(|err| decode_error(&format!("decoding {}", args.input.display()), err))?
    };

    for record in &records {
        print_record(record, format);
    }
    if args.stats {
        print_stats(&stats, format);
    }

    info!(
        frames = stats.frames,
        decoded = stats.decoded,
        skipped = stats.skipped,
        failed = stats.failed,
        "decode finished"
    );
    Ok(SUCCESS)
}

pub fn build_registry(no_builtin: bool, extra: Option<&Path>) -> CliResult<SchemaRegistry> {
    let mut registry = if no_builtin {
        SchemaRegistry::new()
    } else {
        SchemaRegistry::builtin().map_err(|err| schema_error("loading built-in layouts", err))?
    };
    if let Some(dir) = extra {
        registry
            .merge_directory(dir)
            .map_err(|err| schema_error(&format!("loading layouts from {}", dir.display()), err))?;
    }
    Ok(registry)
}
