mod cli;

use clap::Parser;
use cli::{CheckArgs, Cli, Commands};
use colored::Colorize;
use preview_lint::report::ErrorKind;
use preview_lint::{config, lint, logging, output};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => run_check(&cli.check),

        Some(Commands::ListRules) => {
            println!("{}", "Preview Rules".bold().underline());
            println!();
            for kind in ErrorKind::ALL {
                println!(
                    "  [{}] {id:<20} {desc}",
                    "ERROR".red().bold(),
                    id = kind.id(),
                    desc = kind.description(),
                );
            }
            println!();
            println!("  Total: {} rules", ErrorKind::ALL.len());
        }

        Some(Commands::Explain { kind }) => match ErrorKind::from_id(&kind) {
            Some(kind) => {
                println!("{}", kind.id().bold());
                println!();
                println!("  Description:  {}", kind.description());
                println!("  Remediation:  {}", kind.remediation());
                if kind.is_terminal() {
                    println!("  Note:         no further checks run on a value with this error");
                }
            }
            None => {
                eprintln!("Unknown rule: {kind}");
                eprintln!("Use 'preview-lint list-rules' to see all available rules.");
                std::process::exit(2);
            }
        },
    }
}

fn run_check(args: &CheckArgs) {
    logging::init(args.verbose);

    if !args.root.is_dir() {
        eprintln!(
            "Error: project root is not a directory: {}",
            args.root.display()
        );
        std::process::exit(2);
    }

    let config = config::Config::load(&args.root, args.config.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(2);
    });

    let summary = lint::run_lint(&args.root, &config);
    let formatted = output::format_report(&summary, args.output_format(), args.suggestions);

    if let Some(ref out_path) = args.output {
        std::fs::write(out_path, &formatted).unwrap_or_else(|e| {
            eprintln!("Error writing output: {e}");
            std::process::exit(2);
        });
        eprintln!("Output written to {}", out_path.display());
    } else {
        print!("{formatted}");
    }

    std::process::exit(if summary.passed() { 0 } else { 1 });
}
