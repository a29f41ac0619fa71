use pscout::ports::POPULAR_PORTS;
use pscout::scanner::{ScanTarget, Scanner};
use std::net::TcpListener;
use std::thread;
use std::time::Duration;
use tokio_test::block_on;

fn local_target(timeout_ms: u64, retries: u32) -> ScanTarget {
    ScanTarget {
        host: "127.0.0.1".to_string(),
        timeout: Duration::from_millis(timeout_ms),
        retries,
    }
}

/// Binds `count` listeners on free ports near `base`, keeping the scanned
/// window small. Each test uses its own window so concurrent tests never see
/// each other's listeners.
fn bind_listeners_in_window(base: u16, count: usize) -> Vec<(TcpListener, u16)> {
    let mut bound = Vec::new();
    for port in base..base + 1000 {
        if bound.len() == count {
            break;
        }
        if let Ok(listener) = TcpListener::bind(("127.0.0.1", port)) {
            bound.push((listener, port));
        }
    }
    assert_eq!(bound.len(), count, "no free ports near {}", base);
    bound
}

/// Finds a currently free port by binding to an ephemeral one and dropping it.
fn reserve_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

#[test]
fn test_scan_finds_exactly_the_listening_ports() {
    let listeners = bind_listeners_in_window(41000, 3);
    let mut expected: Vec<u16> = listeners.iter().map(|(_, port)| *port).collect();
    expected.sort_unstable();

    let lo = expected[0];
    let hi = *expected.last().unwrap();

    let scanner = Scanner::new(local_target(500, 1));
    let open = block_on(scanner.scan_range(lo, hi));

    assert_eq!(open, expected);
    assert!(open.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(open.iter().all(|port| (lo..=hi).contains(port)));
}

#[test]
fn test_listener_free_range_yields_empty_result() {
    let port = reserve_port();

    let scanner = Scanner::new(local_target(300, 0));
    let open = block_on(scanner.scan_range(port, port));

    assert!(open.is_empty());
}

#[test]
fn test_repeated_scans_agree() {
    let listeners = bind_listeners_in_window(42000, 2);
    let mut expected: Vec<u16> = listeners.iter().map(|(_, port)| *port).collect();
    expected.sort_unstable();

    let lo = expected[0];
    let hi = *expected.last().unwrap();

    let scanner = Scanner::new(local_target(500, 1));
    let first = block_on(scanner.scan_range(lo, hi));
    let second = block_on(scanner.scan_range(lo, hi));

    assert_eq!(first, expected);
    assert_eq!(first, second);
}

#[test]
fn test_concurrency_cap_does_not_change_results() {
    let listeners = bind_listeners_in_window(43000, 3);
    let mut expected: Vec<u16> = listeners.iter().map(|(_, port)| *port).collect();
    expected.sort_unstable();

    let lo = expected[0];
    let hi = *expected.last().unwrap();

    let unbounded = Scanner::new(local_target(500, 1));
    let capped = Scanner::new(local_target(500, 1)).with_concurrency_limit(4);

    let from_unbounded = block_on(unbounded.scan_range(lo, hi));
    let from_capped = block_on(capped.scan_range(lo, hi));

    assert_eq!(from_unbounded, expected);
    assert_eq!(from_capped, expected);
}

#[test]
fn test_retries_cover_a_listener_that_binds_late() {
    let port = reserve_port();

    // The first attempts are refused; the listener appears well inside the
    // retry budget (attempts run roughly every 50 ms).
    let binder = thread::spawn(move || {
        thread::sleep(Duration::from_millis(150));
        TcpListener::bind(("127.0.0.1", port)).unwrap()
    });

    let scanner = Scanner::new(local_target(200, 5));
    let open = block_on(scanner.scan_range(port, port));

    let _listener = binder.join().unwrap();
    assert_eq!(open, vec![port]);
}

#[test]
fn test_late_listener_outside_retry_budget_is_closed() {
    let port = reserve_port();

    let binder = thread::spawn(move || {
        thread::sleep(Duration::from_millis(300));
        TcpListener::bind(("127.0.0.1", port)).ok()
    });

    // Single attempt, refused long before the listener binds.
    let scanner = Scanner::new(local_target(100, 0));
    let open = block_on(scanner.scan_range(port, port));

    let _listener = binder.join().unwrap();
    assert!(open.is_empty());
}

#[test]
fn test_popular_scan_stays_inside_the_curated_list() {
    let scanner = Scanner::new(local_target(200, 0));
    let open = block_on(scanner.scan_popular());

    assert!(open.iter().all(|port| POPULAR_PORTS.contains(port)));
    assert!(open.windows(2).all(|pair| pair[0] < pair[1]));
}
