use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use log::info;
use pscout::cli::Cli;
use pscout::output::ScanReport;
use pscout::ports::PortSet;
use pscout::scanner::Scanner;
use std::time::Instant;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let cli = Cli::parse();

    // Validate before anything touches the network
    let (target, ports) = cli.to_plan()?;
    let host = target.host.clone();
    let ports_probed = ports.ports().len();

    print_banner();

    match &ports {
        PortSet::Popular => {
            println!(
                "Scanning {} for popular ports (web, databases, remote access, etc.)...",
                host
            );
        }
        PortSet::Range { start, end } => {
            println!("Scanning {} from port {} to {}...", host, start, end);
            println!("This may take a while depending on the range...");
        }
    }

    let mut scanner = Scanner::new(target);
    if let Some(limit) = cli.concurrency {
        scanner = scanner.with_concurrency_limit(limit);
    }

    let start_time = Instant::now();
    let open_ports = match ports {
        PortSet::Popular => scanner.scan_popular().await,
        PortSet::Range { start, end } => scanner.scan_range(start, end).await,
    };
    let scan_duration = start_time.elapsed();

    let report = ScanReport::new(host, open_ports, ports_probed, scan_duration);
    report.print();

    if let Some(path) = cli.output.as_deref() {
        report.to_json_file(path)?;
        info!("Report written to {}", path);
    }

    Ok(())
}

fn print_banner() {
    let title = " pscout :: Concurrent TCP Port Scanner v0.1.0 ";
    println!(
        "\n{}",
        format!("╔{}╗", "═".repeat(title.len())).blue().bold()
    );
    println!(
        "{}{}{}",
        "║".blue().bold(),
        title.bright_green().bold(),
        "║".blue().bold()
    );
    println!(
        "{}",
        format!("╚{}╝", "═".repeat(title.len())).blue().bold()
    );
    println!();
}
