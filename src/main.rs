use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use todomatic::config::Config;
use todomatic::constants::ERROR_STARTUP;
use todomatic::logger::Logger;
use todomatic::tasks::{default_tasks, load_tasks_from_file, Task};
use todomatic::ui::{self, AppComponent};

/// A terminal to-do list
#[derive(Debug, Parser)]
#[command(name = "todomatic", version, about)]
struct Args {
    /// JSON file with the initial tasks (array of {id, name, completed})
    #[arg(long, value_name = "FILE")]
    tasks: Option<PathBuf>,

    /// Configuration file to use instead of the default lookup
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a default configuration file to FILE and exit
    #[arg(long, value_name = "FILE")]
    generate_config: Option<PathBuf>,
}

fn initial_tasks(args: &Args, config: &Config) -> Result<Vec<Task>> {
    match args.tasks.as_ref().or(config.tasks.initial_file.as_ref()) {
        Some(path) => load_tasks_from_file(path).with_context(|| format!("Failed to load tasks from {}", path.display())),
        None => Ok(default_tasks()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.generate_config {
        return Config::generate_default_config(path);
    }

    let config = match &args.config {
        Some(path) => Config::load_from_file(path),
        None => Config::load(),
    }
    .context(ERROR_STARTUP)?;

    let logger = Logger::from_config(&config.logging).context(ERROR_STARTUP)?;
    let tasks = initial_tasks(&args, &config).context(ERROR_STARTUP)?;

    let app = AppComponent::new(tasks, &config, logger);
    ui::run_app(app).await?;

    Ok(())
}
