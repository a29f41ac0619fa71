use clap::Parser;
use std::time::Duration;

use crate::ports::PortSet;
use crate::scanner::ScanTarget;

#[derive(Parser, Debug)]
#[command(
    name = "pscout",
    version = "0.1.0",
    about = "Concurrent TCP port scanner",
    long_about = "pscout probes a target host for open TCP ports over a numeric range or a curated list of popular service ports, one concurrent probe per port.",
    next_line_help = true,
    after_help = "EXAMPLES:
    pscout -H 192.168.1.1
    pscout -H example.com -s 1 -e 1000
    pscout -H 10.0.0.1 --popular
    pscout -H localhost -s 8000 -e 9000 -t 500 -r 0
    pscout -H 192.168.1.1 --popular -o results.json"
)]
pub struct Cli {
    #[arg(
        short = 'H',
        long,
        default_value = "localhost",
        help = "Target hostname or IP address (e.g., localhost, 192.168.1.1)",
        help_heading = "TARGET SPECIFICATION"
    )]
    pub host: String,

    #[arg(
        short,
        long,
        default_value_t = 1,
        help = "First port of the scan range",
        help_heading = "PORT SPECIFICATION"
    )]
    pub start: u32,

    #[arg(
        short,
        long,
        default_value_t = 1024,
        help = "Last port of the scan range",
        help_heading = "PORT SPECIFICATION"
    )]
    pub end: u32,

    #[arg(
        short,
        long,
        help = "Scan the curated popular service ports (web, databases, remote access, mail) instead of a range",
        help_heading = "PORT SPECIFICATION"
    )]
    pub popular: bool,

    #[arg(
        short,
        long,
        default_value_t = 2000,
        help = "Connection timeout per probe in milliseconds",
        help_heading = "SCAN PERFORMANCE"
    )]
    pub timeout: u64,

    #[arg(
        short,
        long,
        default_value_t = 2,
        help = "Retries per port after the first failed attempt",
        help_heading = "SCAN PERFORMANCE"
    )]
    pub retries: u32,

    #[arg(
        long,
        help = "Maximum number of in-flight probes (default: one task per port)",
        help_heading = "SCAN PERFORMANCE"
    )]
    pub concurrency: Option<usize>,

    #[arg(
        short,
        long,
        help = "Write the scan report as JSON to this path",
        help_heading = "OUTPUT OPTIONS"
    )]
    pub output: Option<String>,
}

impl Cli {
    /// Validates the arguments into a scan plan.
    ///
    /// Port bounds are checked here, once, before any probing: a violation
    /// aborts the run with zero connections attempted.
    pub fn to_plan(&self) -> Result<(ScanTarget, PortSet), anyhow::Error> {
        let ports = if self.popular {
            PortSet::popular()
        } else {
            PortSet::range(self.start, self.end)?
        };

        let target = ScanTarget {
            host: self.host.clone(),
            timeout: Duration::from_millis(self.timeout),
            retries: self.retries,
        };

        Ok((target, ports))
    }
}
