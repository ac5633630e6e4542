use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use git_reckon::cli::orchestration::{run_infer_workflow, InferWorkflowArgs};
use git_reckon::{config, telemetry, ui};

#[derive(clap::Parser)]
#[command(
    name = "git-reckon",
    version,
    about = "Infer the next semantic version from the nearest git tags"
)]
struct Args {
    #[arg(long, env = "RECKON_SCOPE", help = "Change scope: major, minor or patch")]
    scope: Option<String>,

    #[arg(long, env = "RECKON_STAGE", help = "Release stage, e.g. dev, rc or final")]
    stage: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, default_value = ".", help = "Path inside the git repository")]
    path: PathBuf,

    #[arg(long, help = "Print the tag name instead of the bare version")]
    tag: bool,

    #[arg(short, long, help = "Show the nearest versions and inference trace")]
    verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    json_logs: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = if args.verbose { Level::INFO } else { Level::WARN };
    telemetry::init_tracing(args.json_logs, level);

    if args.verbose {
        match config::find_config_file(args.config.as_deref()) {
            Some(path) => ui::display_status(&format!("Using config {}", path.display())),
            None => ui::display_status("Using default configuration"),
        }
        ui::display_status(&format!("Inspecting repository at {}", args.path.display()));
    }

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let workflow_args = InferWorkflowArgs {
        repo_path: args.path,
        scope: args.scope,
        stage: args.stage,
        print_tag: args.tag,
    };

    let outcome = match run_infer_workflow(workflow_args, config) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    if args.verbose {
        ui::display_nearest_version(&outcome.inference.nearest);
        ui::display_inference(&outcome.inference);
    }

    for warning in &outcome.warnings {
        ui::display_boundary_warning(warning);
    }

    ui::display_output(&outcome.output);
    Ok(())
}
