use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::time::Duration;

use crate::services::service_label;

/// One open port with the label the reporting layer attaches to it.
#[derive(Debug, Clone, Serialize)]
pub struct OpenPort {
    pub port: u16,
    pub service: Option<&'static str>,
}

/// Final outcome of a scan, sorted ascending by port number.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub host: String,
    pub open_ports: Vec<OpenPort>,
    pub ports_probed: usize,
    pub duration_secs: f64,
    pub finished_at: DateTime<Utc>,
}

impl ScanReport {
    /// Builds the report from the scanner's sorted port list. Service labels
    /// are resolved here, at the reporting boundary, never inside the engine.
    pub fn new(host: String, open_ports: Vec<u16>, ports_probed: usize, duration: Duration) -> Self {
        let open_ports = open_ports
            .into_iter()
            .map(|port| OpenPort {
                port,
                service: service_label(port),
            })
            .collect();

        ScanReport {
            host,
            open_ports,
            ports_probed,
            duration_secs: duration.as_secs_f64(),
            finished_at: Utc::now(),
        }
    }

    pub fn print(&self) {
        println!("\nScan completed in {:.2}s", self.duration_secs);
        println!("Found {} open port(s):", self.open_ports.len());

        if self.open_ports.is_empty() {
            println!(
                "  {}",
                "No open ports found in the specified range".yellow()
            );
            return;
        }

        for entry in &self.open_ports {
            match entry.service {
                Some(label) => println!(
                    "  Port {} is open {}",
                    entry.port.to_string().green().bold(),
                    format!("({})", label).cyan()
                ),
                None => println!("  Port {} is open", entry.port.to_string().green().bold()),
            }
        }
    }

    pub fn to_json_file(&self, path: &str) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
