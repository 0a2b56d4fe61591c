use chrono::Local;
use clap::Parser;
use colored::*;
use rex::api::{CmdMessage, ConfigAction, LayoutOptions, ListOrder, MessageLevel, RexApi};
use rex::commands::config::{ensure_config_file, Bootstrap};
use rex::config::Settings;
use rex::error::Result;
use rex::model::IndexEntry;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, ConfigCommand, ListFilter, ListFormat};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("rex=debug")
        } else {
            EnvFilter::new("rex=warn")
        }
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Name of the working directory, used as the GitHub Pages base path.
fn project_name() -> String {
    std::env::current_dir()
        .ok()
        .and_then(|dir| dir.file_name().map(|n| n.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "docs".to_string())
}

fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Commands::Config {
        action: ConfigCommand::Create { force },
    } = cli.command
    {
        let api = RexApi::new(Settings::default(), cli.config.clone(), project_name());
        let result = api.config(ConfigAction::Create { force })?;
        print_messages(&result.messages);
        return Ok(ExitCode::SUCCESS);
    }

    if let Bootstrap::Created(path) = ensure_config_file(&cli.config)? {
        eprintln!(
            "{}",
            format!(
                "No settings file found, wrote defaults to {}. Review it and rerun the command.",
                path.display()
            )
            .yellow()
        );
        return Ok(ExitCode::FAILURE);
    }

    let settings = Settings::load(&cli.config)?;
    let api = RexApi::new(settings, cli.config.clone(), project_name());

    match cli.command {
        Commands::Create {
            title,
            author,
            status,
            date,
        } => handle_create(&api, title, author, status, date),
        Commands::Index { force, empty } => handle_index(&api, force, empty),
        Commands::List {
            format,
            records,
            filter,
        } => handle_list(&api, format, records, filter),
        Commands::Init {
            force,
            directories,
            index,
            templates,
            pages,
        } => {
            let options = LayoutOptions {
                directories,
                index,
                templates,
                pages,
            };
            handle_init(&api, options, force)
        }
        Commands::Config { action } => handle_config(&api, action),
    }?;

    Ok(ExitCode::SUCCESS)
}

fn handle_create(
    api: &RexApi,
    title: String,
    author: String,
    status: String,
    date: Option<String>,
) -> Result<()> {
    let date = date.unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string());
    let result = api.create_record(title, author, status, date)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_index(api: &RexApi, force: bool, empty: bool) -> Result<()> {
    let result = if empty {
        api.write_empty_index(force)?
    } else {
        api.rebuild_index(force)?
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    api: &RexApi,
    format: ListFormat,
    records: Option<usize>,
    filter: ListFilter,
) -> Result<()> {
    let order = match filter {
        ListFilter::Oldest => ListOrder::Oldest,
        ListFilter::Newest => ListOrder::Newest,
    };
    let result = api.list_records(order, records)?;
    match format {
        ListFormat::Table => print_table(&result.entries),
        ListFormat::Md => print_markdown(&result.entries),
        ListFormat::Json => println!("{}", serde_json::to_string_pretty(&result.entries)?),
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(api: &RexApi, options: LayoutOptions, force: bool) -> Result<()> {
    let result = api.init(options, force)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(api: &RexApi, action: ConfigCommand) -> Result<()> {
    let action = match action {
        ConfigCommand::Show => ConfigAction::Show,
        ConfigCommand::Create { force } => ConfigAction::Create { force },
    };
    let result = api.config(action)?;
    if let Some(config) = &result.config {
        if matches!(action, ConfigAction::Show) {
            println!("# {}", api.config_path().display());
            print!("{}", config.to_yaml()?);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn print_table(entries: &[IndexEntry]) {
    if entries.is_empty() {
        println!("No ADRs found.");
        return;
    }

    let ids: Vec<String> = entries.iter().map(|e| e.id.to_string()).collect();
    let titles: Vec<String> = entries.iter().map(IndexEntry::display_title).collect();

    let id_width = ids.iter().map(|s| s.width()).max().unwrap_or(0).max(2);
    let title_width = titles.iter().map(|s| s.width()).max().unwrap_or(0).max(5);

    println!(
        "{}  {}  {}",
        pad("ID", id_width).bold(),
        pad("Title", title_width).bold(),
        "File".bold()
    );
    for ((id, title), entry) in ids.iter().zip(&titles).zip(entries) {
        println!(
            "{}  {}  {}",
            pad(id, id_width).yellow(),
            pad(title, title_width),
            entry.file.dimmed()
        );
    }
}

fn print_markdown(entries: &[IndexEntry]) {
    println!("| ID | Title | Link |");
    println!("| -- | ----- | ---- |");
    for entry in entries {
        println!(
            "| {} | {} | [{}]({}) |",
            entry.id,
            entry.display_title(),
            entry.file,
            entry.file
        );
    }
}

/// Right-pad `s` with spaces to `width` display columns.
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}
