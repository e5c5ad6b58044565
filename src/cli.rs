// ============================================================================
// Stitchpad CLI — headless pattern library access
// ============================================================================
//
// Usage examples:
//   stitchpad --list
//   stitchpad --export pattern-0003 --output knit.png
//   stitchpad --delete pattern-0001
//
// No GUI is opened in CLI mode; all work runs synchronously on the current
// thread against the same pattern store the GUI uses.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::export;
use crate::store::{FsStore, PatternLibrary};

/// Stitchpad headless pattern tools.
///
/// List, export, and delete saved patterns without opening the GUI.
#[derive(Parser, Debug)]
#[command(name = "stitchpad", about = "Stitchpad headless pattern tools")]
pub struct CliArgs {
    /// List saved pattern names, newest first.
    #[arg(long)]
    pub list: bool,

    /// Export a saved pattern to a PNG file.
    #[arg(long, value_name = "NAME")]
    pub export: Option<String>,

    /// Output path for --export.  Defaults to `pattern-<timestamp>.png`
    /// in the current directory.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Delete a saved pattern.  Unknown names are ignored.
    #[arg(long, value_name = "NAME")]
    pub delete: Option<String>,
}

impl CliArgs {
    /// Returns `true` when any CLI-mode flag is present in the real process
    /// arguments.  Used by `main()` to route before creating a window.
    pub fn is_cli_mode() -> bool {
        std::env::args().any(|a| a == "--list" || a == "--export" || a == "--delete")
    }
}

/// Run all requested CLI actions and return an OS exit code.
/// `0` = everything succeeded, `1` = one or more actions failed.
pub fn run(args: CliArgs) -> ExitCode {
    let mut library = match FsStore::open_default() {
        Ok(store) => PatternLibrary::new(store),
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    let mut failed = false;

    if args.list {
        match library.saved_names() {
            Ok(mut names) => {
                names.sort_by(|a, b| b.cmp(a));
                for name in &names {
                    println!("{}", name);
                }
            }
            Err(e) => {
                eprintln!("error: {}", e);
                failed = true;
            }
        }
    }

    if let Some(name) = &args.export {
        match library.load(name) {
            Ok(pattern) => {
                let path = args
                    .output
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(export::default_export_name()));
                match export::write_png(&pattern, &path) {
                    Ok(()) => println!("exported {} -> {}", name, path.display()),
                    Err(e) => {
                        eprintln!("error: export failed: {}", e);
                        failed = true;
                    }
                }
            }
            Err(e) => {
                eprintln!("error: {}", e);
                failed = true;
            }
        }
    }

    if let Some(name) = &args.delete {
        match library.delete(name) {
            Ok(()) => println!("deleted {}", name),
            Err(e) => {
                eprintln!("error: {}", e);
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
