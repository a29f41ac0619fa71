use log::{debug, info};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tokio::sync::{Semaphore, mpsc};
use tokio::time::{sleep, timeout};

use crate::ports::PortSet;

/// Pause between attempts on the same port.
const RETRY_BACKOFF: Duration = Duration::from_millis(50);

/// Deadline for the post-connect liveness read.
const LIVENESS_READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Immutable per-run configuration, shared read-only by every probe.
#[derive(Debug, Clone)]
pub struct ScanTarget {
    /// Hostname or IP address. Resolution happens at connect time, so an
    /// unresolvable name degrades to per-port "closed" rather than a fatal
    /// error.
    pub host: String,
    /// Connect timeout for a single attempt.
    pub timeout: Duration,
    /// Extra attempts after the first failure. 0 means a single attempt.
    pub retries: u32,
}

/// Scanner for probing TCP ports on a single target.
pub struct Scanner {
    target: Arc<ScanTarget>,
    /// Cap on simultaneously in-flight probes. `None` spawns one unthrottled
    /// task per port.
    concurrency_limit: Option<usize>,
}

impl Scanner {
    pub fn new(target: ScanTarget) -> Self {
        Scanner {
            target: Arc::new(target),
            concurrency_limit: None,
        }
    }

    /// Set a concurrency limit (maximum parallel probes).
    ///
    /// The default fan-out opens one socket per port in the set, which on a
    /// full 65535-port range can exhaust file descriptors or ephemeral ports
    /// on constrained hosts.
    pub fn with_concurrency_limit(mut self, limit: usize) -> Self {
        self.concurrency_limit = Some(limit.max(1));
        self
    }

    /// Scans every port in `[start, end]` and returns the open ones sorted
    /// ascending. Bounds must already be validated (see [`PortSet::range`]).
    pub async fn scan_range(&self, start: u16, end: u16) -> Vec<u16> {
        self.scan_ports((start..=end).collect()).await
    }

    /// Scans the fixed popular-ports list with identical semantics to
    /// [`Scanner::scan_range`].
    pub async fn scan_popular(&self) -> Vec<u16> {
        self.scan_ports(PortSet::popular().ports()).await
    }

    /// Launches one probe task per port, waits for all of them, then drains
    /// the results.
    ///
    /// The channel capacity matches the port count so no probe ever blocks on
    /// reporting; the receiver only runs after every task has been joined, so
    /// the single reader is never concurrent with the writers.
    async fn scan_ports(&self, ports: Vec<u16>) -> Vec<u16> {
        let total = ports.len();
        let started = Instant::now();
        info!("scanning {} ports on {}", total, self.target.host);

        let (tx, mut rx) = mpsc::channel::<u16>(total.max(1));
        let semaphore = self
            .concurrency_limit
            .map(|limit| Arc::new(Semaphore::new(limit)));
        let open_count = Arc::new(AtomicUsize::new(0));

        let progress_bar = if cfg!(not(test)) {
            use indicatif::{ProgressBar, ProgressStyle};
            let pb = ProgressBar::new(total as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ports {msg}")
                    .unwrap()
                    .progress_chars("##-"),
            );
            Some(Arc::new(pb))
        } else {
            None
        };

        let mut handles = Vec::with_capacity(total);
        for port in ports {
            let target = Arc::clone(&self.target);
            let tx = tx.clone();
            let semaphore = semaphore.clone();
            let open_count = Arc::clone(&open_count);
            let pb = progress_bar.clone();

            handles.push(tokio::spawn(async move {
                let _permit = match &semaphore {
                    Some(sem) => sem.acquire().await.ok(),
                    None => None,
                };

                if Self::probe_port(&target, port).await {
                    let found = open_count.fetch_add(1, Ordering::Relaxed) + 1;
                    if let Some(pb) = &pb {
                        pb.set_message(format!("{} open", found));
                    }
                    let _ = tx.send(port).await;
                }

                if let Some(pb) = &pb {
                    pb.inc(1);
                }
            }));
        }
        drop(tx);

        for handle in handles {
            let _ = handle.await;
        }

        if let Some(pb) = &progress_bar {
            pb.finish_with_message(format!(
                "{} open",
                open_count.load(Ordering::Relaxed)
            ));
        }

        let mut open_ports = Vec::with_capacity(open_count.load(Ordering::Relaxed));
        while let Some(port) = rx.recv().await {
            open_ports.push(port);
        }
        open_ports.sort_unstable();

        info!(
            "scan of {} completed in {:.2}s, {} of {} ports open",
            self.target.host,
            started.elapsed().as_secs_f64(),
            open_ports.len(),
            total
        );

        open_ports
    }

    /// Decides whether a single port accepts TCP connections.
    ///
    /// Every failure mode (refused, timed out, unreachable, unresolvable)
    /// counts the same: after the retry budget is spent the port is closed.
    /// Callers cannot distinguish "closed" from "could not determine".
    async fn probe_port(target: &ScanTarget, port: u16) -> bool {
        let addr = (target.host.as_str(), port);

        for attempt in 0..=target.retries {
            debug!(
                "probing {}:{} (attempt {}/{})",
                target.host,
                port,
                attempt + 1,
                target.retries + 1
            );

            match timeout(target.timeout, TcpStream::connect(addr)).await {
                Ok(Ok(mut stream)) => {
                    // A transparent proxy or stateful firewall can complete
                    // the handshake with nothing listening behind it; the
                    // short read gives a real service a moment to talk. Its
                    // outcome never changes the verdict.
                    let mut buf = [0u8; 1];
                    let _ = timeout(LIVENESS_READ_TIMEOUT, stream.read(&mut buf)).await;
                    return true;
                }
                Ok(Err(err)) => {
                    debug!("{}:{} not open: {}", target.host, port, err);
                }
                Err(_) => {
                    debug!("{}:{} timed out", target.host, port);
                }
            }

            if attempt < target.retries {
                sleep(RETRY_BACKOFF).await;
            }
        }

        false
    }
}
