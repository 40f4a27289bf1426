use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use haystack_defs::{Colors, DefNamespace, DefsError};
use haystack_typegen::{Config, TypeGuardPolicy};

pub struct GenerateArgs {
    pub defs: Vec<String>,
    pub namespace: PathBuf,
    pub file: PathBuf,
    pub type_guards: TypeGuardPolicy,
    pub color: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid defs in {}: {source}", path.display())]
    Defs { path: PathBuf, source: DefsError },

    #[error(transparent)]
    Generate(#[from] haystack_typegen::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub fn run(args: GenerateArgs) {
    let colors = Colors::new(args.color);

    if let Err(e) = execute(&args, config(&args), colors) {
        eprintln!("{}error{}: {}", colors.red, colors.reset, e);
        std::process::exit(1);
    }
}

fn config(args: &GenerateArgs) -> Config {
    Config::new().type_guards(args.type_guards)
}

/// Load the namespace, generate, then write. Nothing is written on failure.
pub(crate) fn execute(
    args: &GenerateArgs,
    config: Config,
    colors: Colors,
) -> Result<(), GenerateError> {
    let json = fs::read_to_string(&args.namespace).map_err(|source| GenerateError::Read {
        path: args.namespace.clone(),
        source,
    })?;
    let namespace = DefNamespace::from_json(&json).map_err(|source| GenerateError::Defs {
        path: args.namespace.clone(),
        source,
    })?;
    let path = args.namespace.display();
    tracing::info!(defs = namespace.len(), %path, "loaded namespace");

    eprintln!(
        "{}Creating TypeScript for{} {}{}{}",
        colors.green,
        colors.reset,
        colors.yellow,
        args.defs.join(", "),
        colors.reset
    );

    let output = haystack_typegen::generate(&namespace, args.defs.as_slice(), config)?;

    if is_stdout(&args.file) {
        return io::stdout()
            .write_all(output.as_bytes())
            .map_err(|source| GenerateError::Write {
                path: args.file.clone(),
                source,
            });
    }

    write_file(&args.file, &output).map_err(|source| GenerateError::Write {
        path: args.file.clone(),
        source,
    })?;

    eprintln!(
        "{}Written{} {}{}{}",
        colors.green,
        colors.reset,
        colors.yellow,
        args.file.display(),
        colors.reset
    );
    Ok(())
}

fn is_stdout(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn write_file(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)
}
