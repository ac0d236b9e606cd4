//! uncv CLI - structured resume extraction from PDF files.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use uncv::{classify, ExtractOptions, ExtractionResult};

#[derive(Parser)]
#[command(name = "uncv")]
#[command(version)]
#[command(about = "Extract structured resume content from PDF files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and emit the structured result as JSON
    Extract {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Vertical line-merge tolerance in text-space units
        #[arg(long, default_value_t = uncv::DEFAULT_LINE_TOLERANCE)]
        line_tolerance: f32,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Extract flat text only
    Text {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Sniff the byte signature of a file without decoding it
    Validate {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            if let Some(uncv_err) = err.downcast_ref::<uncv::Error>() {
                eprintln!("{} {}", "hint:".yellow().bold(), uncv_err.remedy());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Extract {
            input,
            output,
            compact,
            line_tolerance,
            quiet,
        } => {
            let data = fs::read(&input)?;
            let options = ExtractOptions::new().with_line_tolerance(line_tolerance);
            let result = extract_with_bar(&data, &options, quiet)?;

            let json = if compact {
                serde_json::to_string(&result)?
            } else {
                serde_json::to_string_pretty(&result)?
            };
            write_output(output.as_deref(), &json)?;

            if output.is_some() {
                print_report(&result);
            }
            Ok(())
        }

        Commands::Text { input, output } => {
            let data = fs::read(&input)?;
            let result = extract_with_bar(&data, &ExtractOptions::default(), true)?;
            write_output(output.as_deref(), &result.text)?;
            Ok(())
        }

        Commands::Validate { input } => {
            let data = fs::read(&input)?;
            let detected = classify(&data);
            let verdict = match uncv::validate_bytes(&data) {
                Ok(_) => "accepted".green().bold().to_string(),
                Err(e) => format!("{} ({})", "rejected".red().bold(), e),
            };
            println!(
                "{}: {} bytes, detected {}, {}",
                input.display(),
                data.len(),
                detected.to_string().cyan(),
                verdict
            );
            Ok(())
        }
    }
}

fn extract_with_bar(
    data: &[u8],
    options: &ExtractOptions,
    quiet: bool,
) -> uncv::Result<ExtractionResult> {
    if quiet {
        return uncv::extract_bytes_with_options(data, options);
    }

    let bar = ProgressBar::new(100);
    bar.set_style(
        ProgressStyle::with_template("{bar:40.cyan/blue} {pos:>3}% {msg}")
            .expect("static template"),
    );
    bar.set_message("extracting");

    let result = uncv::extract_bytes_with_progress(data, options, |pct| {
        bar.set_position(u64::from(pct));
    });
    bar.finish_and_clear();
    result
}

fn print_report(result: &ExtractionResult) {
    println!("{} {}", "name:".bold(), result.resume.name);
    if let Some(email) = &result.resume.contact.email {
        println!("{} {}", "email:".bold(), email);
    }
    if let Some(phone) = &result.resume.contact.phone {
        println!("{} {}", "phone:".bold(), phone);
    }
    println!(
        "{} {} pages ({} failed), method {:?}, confidence {:.2}",
        "meta:".bold(),
        result.metadata.page_count,
        result.metadata.failed_pages,
        result.metadata.method,
        result.metadata.confidence
    );
}

fn write_output(path: Option<&std::path::Path>, content: &str) -> std::io::Result<()> {
    match path {
        Some(path) => fs::write(path, content),
        None => {
            println!("{}", content);
            Ok(())
        }
    }
}
