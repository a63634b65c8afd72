//! wsgen — generate TypeScript client types for the Moodle web-service catalog.
//!
//! Reads the moodlehq structure document (one `…WSParams` / `…WSResponse`
//! shape pair per web-service function), matches every function name to its
//! two shapes, and writes two artifacts:
//!
//! - a sorted list of function names
//! - a declaration module with a nested and a flattened client-type map
//!
//! Processing runs in five phases: **Normalize** → **Extract** → **Match**
//! (per function) → **Build** → **Render**.

mod builder;
mod extract;
mod fetch;
mod matcher;
mod normalize;
mod render;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use builder::{assoc_path, signature, Node};
use matcher::{match_shape, snake_to_camel, ProcedureName, ShapeKind};

const DEFAULT_URL: &str =
    "https://raw.githubusercontent.com/moodlehq/moodle-local_moodlemobileapp/main/structure/master.ts";

#[derive(Parser)]
#[command(
    name = "wsgen",
    about = "Generate TypeScript client types from the Moodle web-service structure document"
)]
struct Cli {
    /// Source document URL (used when no --input file is given)
    #[arg(long, default_value = DEFAULT_URL)]
    url: String,

    /// Read the source document from a local file instead of fetching
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Output path for the generated declaration module
    #[arg(short = 'o', long, default_value = "ws-function-types.d.ts")]
    output: PathBuf,

    /// Output path for the sorted function-name list
    #[arg(short = 'l', long, default_value = "ws-functions.txt")]
    list: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let raw = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => fetch::fetch(&cli.url)?,
    };

    let artifacts = generate(&raw)?;

    // Both artifacts are fully built before either file is touched, so a
    // matching failure never leaves partial output behind.
    fs::write(&cli.list, &artifacts.function_list)
        .with_context(|| format!("failed to write {}", cli.list.display()))?;
    fs::write(&cli.output, &artifacts.declarations)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    Ok(())
}

/// The two derived outputs of one run.
#[derive(Debug)]
struct Artifacts {
    function_list: String,
    declarations: String,
}

/// Core pipeline — extracted for testability, no I/O.
fn generate(raw: &str) -> Result<Artifacts> {
    let content = normalize::normalize(raw);
    let catalog = extract::extract(&content);

    let mut tree = Node::empty();
    let mut flat: Vec<(String, String)> = Vec::new();

    for full_name in &catalog.functions {
        let name = ProcedureName::parse(full_name)
            .ok_or_else(|| anyhow!("malformed function name: {full_name}"))?;
        let func_camel = snake_to_camel(name.func_name, false);

        let params = match_shape(&name, &catalog.params, ShapeKind::Params)?;
        let response = match_shape(&name, &catalog.responses, ShapeKind::Response)?;

        let comment = matcher::find_description(&content, full_name).unwrap_or_else(|| {
            eprintln!("warning: no WS description for {full_name}");
            String::new()
        });

        let sig = signature(params, response);
        let leaf_key = format!("/** {comment} */ {func_camel}");
        tree = assoc_path(&tree, &[name.namespace, name.module, &leaf_key], &sig);
        flat.push((
            format!("'{}.{}.{}'", name.namespace, name.module, func_camel),
            sig,
        ));
    }

    Ok(Artifacts {
        function_list: catalog.functions.join("\n"),
        declarations: render::render(&content, &tree, &flat),
    })
}
