use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use nav_coordinator::CoordinatorConfig;
use nav_coordinator::nav::{NavCall, RecordingNavigator};
use nav_coordinator::scenario::{self, Report, Scenario};
use nav_coordinator::submission::Phase;

#[derive(Args)]
pub struct ReplayCommands {
    /// Scenario file (TOML)
    pub path: PathBuf,

    /// Print the report as JSON instead of a colored trace
    #[arg(long)]
    pub json: bool,

    /// Milliseconds the simulated sheet close animation takes
    #[arg(long, default_value_t = 0)]
    pub sheet_delay_ms: u64,
}

pub async fn replay_command(cmd: ReplayCommands, config: &CoordinatorConfig) -> Result<()> {
    let scenario = Scenario::load(&cmd.path)?;

    let mut navigator = RecordingNavigator::new();
    if cmd.sheet_delay_ms > 0 {
        navigator = navigator.with_sheet_dismiss_delay(std::time::Duration::from_millis(cmd.sheet_delay_ms));
    }

    let report = scenario::run(&scenario, config, &navigator).await?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(name) = &scenario.name {
        println!("{} {}", "Scenario:".bold(), name.cyan());
    }
    print_report(&report);
    Ok(())
}

fn print_report(report: &Report) {
    println!("{}", "Navigation trace".bold());
    for entry in &report.trace {
        let line = describe(&entry.call);
        let line = if entry.call.is_close() {
            line.red().to_string()
        } else if matches!(entry.call, NavCall::ShowModal { .. } | NavCall::ShowBottomSheet { .. }) {
            line.green().to_string()
        } else {
            line.normal().to_string()
        };
        println!("  {:>3}  {}", entry.seq.to_string().dimmed(), line);
    }

    if !report.published.is_empty() {
        println!("\n{}", "Published".bold());
        for (topic, data) in &report.published {
            println!("  {} {}", topic.cyan(), data);
        }
    }

    println!("\n{}", "Outcome".bold());
    let phase = match report.phase {
        Some(Phase::Complete) => "complete".green(),
        Some(Phase::Failure) => "failure".red(),
        Some(Phase::Saving) => "saving".yellow(),
        Some(Phase::Idle) => "idle".normal(),
        None => "not mounted".dimmed(),
    };
    println!("  phase:        {}", phase);
    if let Some(error) = &report.error {
        println!("  error:        {}", error.red());
    }
    println!("  remote calls: {}", report.remote_calls);
    if !report.presented.is_empty() {
        let presented: Vec<String> = report.presented.iter().map(|s| s.to_string()).collect();
        println!("  presented:    {}", presented.join(", "));
    }
    if let Some(offset) = report.committed_scroll {
        println!("  scroll:       {}", offset);
    }
}

fn describe(call: &NavCall) -> String {
    match call {
        NavCall::SetButtons { screen, layout } => {
            let buttons: Vec<String> = layout
                .left
                .iter()
                .chain(layout.right.iter())
                .map(|b| format!("{}{}", b.id, if b.enabled { "" } else { " (disabled)" }))
                .collect();
            format!("set_buttons {} [{}]", screen, buttons.join(", "))
        }
        NavCall::DismissKeyboard => "dismiss_keyboard".to_string(),
        NavCall::Pop { screen } => format!("pop {}", screen),
        NavCall::DismissModal { screen } => format!("dismiss_modal {}", screen),
        NavCall::ShowModal { screen, title, id } => format!("show_modal {} \"{}\" as {}", screen, title, id),
        NavCall::ShowBottomSheet { surface, items } => format!("show_bottom_sheet {} ({} items)", surface, items),
        NavCall::DismissBottomSheet => "dismiss_bottom_sheet".to_string(),
    }
}
