//! CLI entry point for surfacereg.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `surfacereg-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use surfacereg_app::{
    parse_report_json, render_annotations, render_markdown, run_check, run_ignored, run_show,
    runtime_error_report, serialize_report, verdict_exit_code, CheckInput, IgnoredOutput,
    ShowFormat,
};
use surfacereg_settings::{Overrides, ResolvedConfig};
use surfacereg_types::SurfaceReport;

#[derive(Parser, Debug)]
#[command(
    name = "surfacereg",
    version,
    about = "API surface and nightly test registry for the Android SDK repo"
)]
struct Cli {
    /// Repository root the registry paths are relative to.
    #[arg(long, global = true, default_value = ".")]
    repo_root: Utf8PathBuf,

    /// Path to the surfacereg config TOML (relative to the repo root).
    #[arg(long, global = true, default_value = "surfacereg.toml")]
    config: Utf8PathBuf,

    /// Override the API surface path.
    #[arg(long, global = true)]
    api_surface_path: Option<String>,

    /// Override the nightly tests source directory.
    #[arg(long, global = true)]
    nightly_tests_dir: Option<String>,

    /// Override the nightly tests package (slash-delimited).
    #[arg(long, global = true)]
    nightly_tests_package: Option<String>,

    /// Debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the effective registry.
    Show {
        /// Output format (text or json).
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate the registry values and probe the repo layout.
    Check {
        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/surfacereg/report.json")]
        report_out: Utf8PathBuf,

        /// Skip the filesystem probes; only validate the values.
        #[arg(long)]
        no_probe: bool,

        /// Override when to fail (error|warning).
        #[arg(long)]
        fail_on: Option<String>,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/surfacereg/comment.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Exit 0 if TYPE is ignored, 3 if not, 1 if it is not a valid type name.
    Ignored {
        /// Fully-qualified type name, e.g. `com.example.Outer$Nested`.
        type_name: String,
    },

    /// Render markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/surfacereg/report.json")]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (if not specified, prints to stdout).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },

    /// Render GitHub Actions annotations from an existing JSON report.
    Annotations {
        /// Path to the JSON report file.
        #[arg(long, default_value = "artifacts/surfacereg/report.json")]
        report: Utf8PathBuf,

        /// Maximum number of annotations to emit.
        #[arg(long, default_value = "10")]
        max: usize,
    },

    /// Print the JSON Schema for surfacereg.toml.
    Schema,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);

    match cli.cmd {
        Commands::Show { ref format } => cmd_show(&cli, format),
        Commands::Check {
            ref report_out,
            no_probe,
            ref fail_on,
            write_markdown,
            ref markdown_out,
        } => cmd_check(
            &cli,
            report_out,
            !no_probe,
            fail_on.clone(),
            write_markdown.then_some(markdown_out.as_path()),
        ),
        Commands::Ignored { ref type_name } => cmd_ignored(&cli, type_name),
        Commands::Md {
            ref report,
            ref output,
        } => cmd_md(report, output.as_deref()),
        Commands::Annotations { ref report, max } => cmd_annotations(report, max),
        Commands::Schema => cmd_schema(),
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn overrides(cli: &Cli, fail_on: Option<String>) -> Overrides {
    Overrides {
        api_surface_path: cli.api_surface_path.clone(),
        nightly_tests_directory_path: cli.nightly_tests_dir.clone(),
        nightly_tests_package: cli.nightly_tests_package.clone(),
        fail_on,
    }
}

fn repo_root(cli: &Cli) -> Utf8PathBuf {
    cli.repo_root
        .canonicalize_utf8()
        .unwrap_or_else(|_| cli.repo_root.clone())
}

/// Missing config file is allowed (built-ins apply).
fn read_config(repo_root: &Utf8Path, config: &Utf8Path) -> anyhow::Result<String> {
    let path = repo_root.join(config);
    match std::fs::read_to_string(&path) {
        Ok(text) => {
            log::debug!("loaded config from {path}");
            Ok(text)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no config at {path}; using built-in registry");
            Ok(String::new())
        }
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}

fn resolve(cli: &Cli) -> anyhow::Result<ResolvedConfig> {
    let root = repo_root(cli);
    let text = read_config(&root, &cli.config)?;
    let cfg = if text.trim().is_empty() {
        surfacereg_settings::SurfaceConfigV1::default()
    } else {
        surfacereg_settings::parse_config_toml(&text).context("parse config")?
    };
    surfacereg_settings::resolve_config(cfg, overrides(cli, None)).context("resolve config")
}

fn cmd_show(cli: &Cli, format: &str) -> anyhow::Result<()> {
    let format: ShowFormat = format.parse()?;
    let resolved = resolve(cli)?;
    print!("{}", run_show(&resolved, format)?);
    Ok(())
}

fn cmd_check(
    cli: &Cli,
    report_out: &Utf8Path,
    probe_layout: bool,
    fail_on: Option<String>,
    markdown_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let root = repo_root(cli);

    let result = (|| -> anyhow::Result<i32> {
        if !root.is_dir() {
            anyhow::bail!("repo root does not exist: {}", root);
        }
        let cfg_text = read_config(&root, &cli.config)?;

        let input = CheckInput {
            repo_root: &root,
            config_text: &cfg_text,
            overrides: overrides(cli, fail_on),
            probe_layout,
        };
        let output = run_check(input)?;

        write_report_file(report_out, &output.report).context("write report json")?;
        if let Some(md_path) = markdown_out {
            write_text_file(md_path, &render_markdown(&output.report)).context("write markdown")?;
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            let report = runtime_error_report(&format!("{err:#}"));
            if let Err(write_err) = write_report_file(report_out, &report) {
                log::warn!("could not write error report: {write_err:#}");
            }
            eprintln!("surfacereg error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_ignored(cli: &Cli, type_name: &str) -> anyhow::Result<()> {
    let resolved = resolve(cli)?;
    let output = run_ignored(&resolved, type_name);
    match &output {
        IgnoredOutput::Ignored(name) => println!("ignored: {name}"),
        IgnoredOutput::NotIgnored(name) => println!("not ignored: {name}"),
        IgnoredOutput::Invalid(err) => eprintln!("surfacereg error: {err}"),
    }
    let code = output.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn read_report(path: &Utf8Path) -> anyhow::Result<SurfaceReport> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read report: {}", path))?;
    parse_report_json(&text)
}

fn cmd_md(report_path: &Utf8Path, output: Option<&Utf8Path>) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    let md = render_markdown(&report);

    if let Some(out_path) = output {
        write_text_file(out_path, &md).context("write markdown output")?;
    } else {
        print!("{}", md);
    }
    Ok(())
}

fn cmd_annotations(report_path: &Utf8Path, max: usize) -> anyhow::Result<()> {
    let report = read_report(report_path)?;
    for annotation in render_annotations(&report, max) {
        println!("{}", annotation);
    }
    Ok(())
}

fn cmd_schema() -> anyhow::Result<()> {
    let schema = surfacereg_settings::config_schema();
    println!(
        "{}",
        serde_json::to_string_pretty(&schema).context("serialize schema")?
    );
    Ok(())
}

fn write_report_file(path: &Utf8Path, report: &SurfaceReport) -> anyhow::Result<()> {
    let data = serialize_report(report).context("serialize report")?;
    write_text_file(path, &data)
}

fn write_text_file(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_str().is_empty()
    {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, text).with_context(|| format!("write text: {}", path))?;
    Ok(())
}
