use aligned_doc::examples::json::Json;
use aligned_doc::{render, IoSink};
use clap::Parser;
use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pretty print a JSON file.
///
/// Set `RUST_LOG=aligned_doc=debug` to see render statistics.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// The JSON file to print. Reads stdin if omitted.
    path: Option<PathBuf>,

    /// Print every list one element per line, even lists of scalars.
    #[arg(long)]
    expand: bool,
}

fn convert(value: serde_json::Value) -> Json {
    use serde_json::Value;

    match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(b),
        Value::Number(n) => Json::Number(n.to_string()),
        Value::String(s) => Json::String(s),
        Value::Array(elems) => Json::List(elems.into_iter().map(convert).collect()),
        Value::Object(entries) => Json::Dict(
            entries
                .into_iter()
                .map(|(key, value)| (key, convert(value)))
                .collect(),
        ),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let source = match &args.path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            source
        }
    };
    let value: serde_json::Value = serde_json::from_str(&source)?;
    let doc = convert(value).to_doc_with(!args.expand);

    let mut sink = IoSink::new(BufWriter::new(io::stdout().lock()));
    render(&doc, &mut sink)?;
    let mut out = sink.into_inner();
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
