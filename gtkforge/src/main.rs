//! `gtkforge` command-line entry point.

use anyhow::{Context, Result};
use clap::Parser;
use gtkforge::{GenerationRequest, Generator, ParentTable, write_output};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "gtkforge")]
#[command(version, about = "Generate a gtk-rs composite-template widget subclass")]
struct Args {
    /// Name of the class to generate (e.g. `CounterWidget`)
    class_name: String,

    /// Parent class (e.g. `gtk::Box`, `adw::Bin` or `Gtk.Box`)
    parent_class: String,

    /// Directory the generated file is written to
    path: PathBuf,

    /// Property declarations: `name:type[?] [# doc]`
    #[arg(long, num_args = 1..)]
    properties: Vec<String>,

    /// Signal declarations: `name[(param:type, ...)] [-> type]`
    #[arg(long, num_args = 1..)]
    signals: Vec<String>,

    /// Extra `use` lines for the generated file
    #[arg(long, num_args = 1..)]
    imports: Vec<String>,

    /// UI template file referenced by `#[template(file = ...)]`
    #[arg(long)]
    template: Option<String>,

    /// Template child declarations: `name:Type`
    #[arg(long, num_args = 1..)]
    template_children: Vec<String>,

    /// Template callback declarations or literal methods
    #[arg(long, num_args = 1..)]
    template_callbacks: Vec<String>,

    /// JSON file of extra `"Ns.Child": "Ns.Parent"` hierarchy entries
    #[arg(long)]
    hierarchy_manifest: Option<PathBuf>,

    /// Print the generated code instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Enable debug logging, on top of any `RUST_LOG` filter
    #[arg(short, long)]
    verbose: bool,
}

/// `RUST_LOG` takes precedence over the `info` default. `--verbose` raises
/// the default level to debug either way; per-target directives still apply.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let filter = if verbose {
        filter.add_directive(LevelFilter::DEBUG.into())
    } else {
        filter
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let mut table = ParentTable::builtin();
    if let Some(manifest) = &args.hierarchy_manifest {
        let extra = ParentTable::from_file(manifest)
            .with_context(|| format!("failed to load hierarchy manifest {}", manifest.display()))?;
        tracing::debug!(entries = extra.len(), "loaded hierarchy manifest");
        table.extend(extra);
    }

    let mut request = GenerationRequest::new(&args.class_name, &args.parent_class)
        .properties(args.properties)
        .signals(args.signals)
        .template_children(args.template_children)
        .template_callbacks(args.template_callbacks)
        .additional_imports(args.imports);
    if let Some(template) = args.template {
        request = request.template_file(template);
    }

    let generator = Generator::builder().lookup(table).build();
    let code = generator.generate(&request)?;

    if args.stdout {
        print!("{code}");
        return Ok(());
    }

    let path = write_output(&args.path, &args.class_name, &code)
        .with_context(|| format!("failed to write output to {}", args.path.display()))?;
    println!("Successfully generated {}", path.display());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "generation aborted");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
