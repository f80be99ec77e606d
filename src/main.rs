use std::path::Path;

use anyhow::Result;
use clap::Parser;

use version_guard::checker::{self, CheckOutcome};
use version_guard::config::CheckConfig;
use version_guard::git::Git2Repository;
use version_guard::{manifest, ui};

#[derive(clap::Parser)]
#[command(
    name = "validate-version",
    about = "Validate version string rules in CI"
)]
struct Args {
    #[arg(
        long,
        help = "Base branch reference for comparison (defaults to GITHUB_BASE_REF)"
    )]
    base_ref: Option<String>,

    #[arg(long, help = "Event name override (defaults to GITHUB_EVENT_NAME)")]
    event_name: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = CheckConfig::resolve(args.base_ref, args.event_name);

    let root = Path::new(".");
    if let Err(e) = manifest::ensure_project_root(root) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    let head = match manifest::version_from_worktree(root) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let repo = match Git2Repository::open(root) {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    match checker::run_check(&repo, head, &config) {
        Ok(outcome) => {
            report_outcome(&outcome);
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn report_outcome(outcome: &CheckOutcome) {
    ui::display_success(&format!(
        "Head version {} (build {})",
        outcome.head, outcome.build_number
    ));

    match &outcome.comparison {
        Some(comparison) => {
            ui::display_success(&format!(
                "Progression from {} at '{}' is valid",
                comparison.base, comparison.reference
            ));
        }
        None => {
            ui::display_status("No base reference to compare against; skipping comparison");
        }
    }
}
