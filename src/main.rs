use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod aggregate;
mod audit;
mod classify;
mod cli;
mod config;
mod domain;
mod export;
mod notify;
mod serp;
mod subscribe;

use audit::Submission;
use cli::Cli;
use config::{AppConfig, ConfigError, Credentials};
use notify::NotifyClient;
use serp::SerpClient;
use subscribe::SubscribeClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle --init first (before any other processing)
    if cli.init {
        match AppConfig::create_default_config() {
            Ok(path) => {
                println!("✅ Created default configuration file at: {}", path.display());
                println!("   Edit this file to customize settings, then run brandaudit again.");
                std::process::exit(0);
            }
            Err(e) => {
                eprintln!("❌ Failed to create configuration file: {}", e);
                std::process::exit(1);
            }
        }
    }

    init_tracing(cli.verbose);

    // Load configuration
    let app_config = match AppConfig::load() {
        Ok(cfg) => cfg,
        Err(ConfigError::FileNotFound(path)) => {
            // Config not found - prompt to create if interactive
            match AppConfig::prompt_create_config() {
                Ok(Some(created_path)) => {
                    println!("✅ Created default configuration file at: {}", created_path.display());
                    println!("   Edit this file to customize settings, then run brandaudit again.");
                    std::process::exit(0);
                }
                Ok(None) => {
                    eprintln!("❌ Configuration file not found at: {}", path.display());
                    eprintln!("   Run with --init to create a default configuration file.");
                    std::process::exit(1);
                }
                Err(e) => {
                    eprintln!("❌ Failed to create configuration file: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            eprintln!("❌ Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if !Cli::OUTPUT_FORMATS.contains(&cli.output_format.as_str()) {
        eprintln!(
            "❌ Unknown output format '{}'. Valid formats: {}",
            cli.output_format,
            Cli::OUTPUT_FORMATS.join(", ")
        );
        std::process::exit(1);
    }

    let submission = Submission {
        name: cli.name.clone().unwrap_or_default(),
        email: cli.email.clone().unwrap_or_default(),
        company: cli.company.clone().unwrap_or_default(),
        address: cli.address.clone().unwrap_or_default(),
        phone: cli.phone.clone().unwrap_or_default(),
        website: cli.website.clone().unwrap_or_default(),
    };

    if let Err(errors) = submission.validate() {
        eprintln!("❌ Invalid submission:");
        for error in &errors {
            eprintln!("   - {}", error);
        }
        std::process::exit(1);
    }

    // Resolve secrets up front so a missing key fails before any network call
    let credentials = match Credentials::from_env(!cli.skip_notify, !cli.skip_subscribe) {
        Ok(creds) => creds,
        Err(e) => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let serp_client = SerpClient::new(
        &app_config.serp,
        credentials.serp_api_key.clone(),
        &app_config.http.user_agent,
    )?;

    println!("🔎 Running brand audit for {}...", submission.company);
    let report = audit::run_audit(&submission, &serp_client).await?;

    export::print_audit_summary(&report);

    let output_path = resolve_output_path(&cli);
    let output_path_str = output_path.to_string_lossy().to_string();
    match cli.output_format.as_str() {
        "csv" => export::export_csv(&report, &output_path_str)?,
        "json" => export::export_json(&report, &output_path_str)?,
        "markdown" => export::export_markdown(&report, &output_path_str)?,
        _ => export::export_html(&report, &output_path_str)?,
    }
    println!("📄 Report written to {}", output_path_str);

    // Side channels are best-effort: the report above is already complete
    // and must not be withheld if either of these fails.
    if !cli.skip_notify {
        let report_html = export::render_html(&report)?;
        let notify_client = NotifyClient::new(
            &app_config.notify,
            credentials
                .notify_api_key
                .clone()
                .context("notify API key resolved at startup")?,
            &app_config.http.user_agent,
        )?;
        match notify_client.send_report(&submission, &report_html).await {
            Ok(()) => println!("📩 Report emailed to {}", app_config.notify.to),
            Err(e) => warn!("Failed to email report (report was still written): {:#}", e),
        }
    }

    if !cli.skip_subscribe {
        let subscribe_client = SubscribeClient::new(
            &app_config.subscribe,
            credentials
                .subscribe_auth_token
                .clone()
                .context("subscribe token resolved at startup")?,
            credentials
                .subscribe_list_id
                .clone()
                .context("subscribe list id resolved at startup")?,
            &app_config.http.user_agent,
        )?;
        match subscribe_client.subscribe(&submission.name, &submission.email).await {
            Ok(()) => println!("📬 {} subscribed to the mailing list", submission.email),
            Err(e) => warn!("Failed to subscribe submitter: {:#}", e),
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("brandaudit={}", default_level)));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Build the report path from --output-dir, --output, and the format's
/// extension. An explicit extension on --output is respected.
fn resolve_output_path(cli: &Cli) -> PathBuf {
    let dir = cli
        .output_dir
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    let mut filename = cli.output.clone();
    if PathBuf::from(&filename).extension().is_none() {
        filename = format!(
            "{}.{}",
            filename,
            export::extension_for_format(&cli.output_format)
        );
    }

    dir.join(filename)
}
