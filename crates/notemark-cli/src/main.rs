use anyhow::{Context, Result};
use notemark_config::Config;
use notemark_engine::render;
use relative_path::RelativePath;
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

struct Args {
    note: String,
    page: bool,
    output: Option<PathBuf>,
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <note> [--page] [-o <file>]");
    eprintln!();
    eprintln!("Renders a note to an HTML fragment on stdout.");
    eprintln!("  <note>    note file; relative paths are resolved against the");
    eprintln!("            notes_path in {}", Config::config_path().display());
    eprintln!("  --page    wrap the fragment as a standalone HTML page");
    eprintln!("  -o FILE   write to FILE instead of stdout");
    process::exit(1);
}

fn parse_args() -> Args {
    let argv: Vec<String> = env::args().collect();
    let program = argv.first().map(String::as_str).unwrap_or("notemark");

    let mut note = None;
    let mut page = false;
    let mut output = None;

    let mut i = 1;
    while i < argv.len() {
        match argv[i].as_str() {
            "--page" => page = true,
            "-o" => {
                i += 1;
                match argv.get(i) {
                    Some(file) => output = Some(PathBuf::from(file)),
                    None => usage(program),
                }
            }
            arg if !arg.starts_with('-') && note.is_none() => note = Some(arg.to_string()),
            _ => usage(program),
        }
        i += 1;
    }

    match note {
        Some(note) => Args { note, page, output },
        None => usage(program),
    }
}

fn main() -> Result<()> {
    let args = parse_args();

    let config = Config::load().context("failed to load config")?;
    let note_path = resolve_note_path(&args.note, config.as_ref());

    let text = fs::read_to_string(&note_path)
        .with_context(|| format!("failed to read note '{}'", note_path.display()))?;

    let fragment = render(&text);
    let html = if args.page {
        let title = config
            .and_then(|c| c.page_title)
            .or_else(|| {
                note_path
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
            })
            .unwrap_or_else(|| "note".to_string());
        wrap_page(&fragment, &title)
    } else {
        fragment
    };

    match args.output {
        Some(path) => fs::write(&path, html)
            .with_context(|| format!("failed to write '{}'", path.display()))?,
        None => println!("{html}"),
    }

    Ok(())
}

/// Absolute paths and paths that resolve from the working directory are
/// used as given; everything else is looked up under the configured
/// notes directory.
fn resolve_note_path(note: &str, config: Option<&Config>) -> PathBuf {
    let given = Path::new(note);
    if given.is_absolute() || given.exists() {
        return given.to_path_buf();
    }
    match config {
        Some(config) => RelativePath::new(note).to_path(&config.notes_path),
        None => given.to_path_buf(),
    }
}

fn wrap_page(fragment: &str, title: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{fragment}\n</body>\n</html>\n",
        html_escape::encode_text(title)
    )
}
