use crate::error::PscoutError;

/// Curated list of well known service ports probed by popular mode.
///
/// The list is fixed and deduplicated; it covers the services most likely to
/// be running on a reachable host and is treated as a constant input to the
/// scanner, never computed.
pub const POPULAR_PORTS: [u16; 33] = [
    // Web services
    80, 443, 8080, 8443, 8000, 3000, 4200, 5000,
    // Databases
    3306, 5432, 27017, 6379, 1433, 5984, 9200,
    // Remote access
    21, 22, 23, 3389, 5900,
    // Email
    25, 110, 143, 465, 587, 993, 995,
    // Infrastructure
    53, 67, 445, 5672, 9090, 11211,
];

/// The collection of ports a single scan will probe.
///
/// Every member lies in [1, 65535]; `range` enforces this once, before any
/// probing starts, so the scan engine never has to re-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortSet {
    /// Contiguous numeric range, both bounds inclusive.
    Range { start: u16, end: u16 },
    /// The fixed [`POPULAR_PORTS`] list.
    Popular,
}

impl PortSet {
    /// Validates raw bounds into a contiguous range.
    ///
    /// Bounds arrive as `u32` so that out-of-range input like 70000 reaches
    /// this check and produces a proper error instead of failing to parse.
    pub fn range(start: u32, end: u32) -> Result<Self, PscoutError> {
        for bound in [start, end] {
            if bound < 1 || bound > 65535 {
                return Err(PscoutError::PortOutOfRange(bound));
            }
        }
        let (start, end) = (start as u16, end as u16);
        if start > end {
            return Err(PscoutError::InvertedRange(start, end));
        }
        Ok(PortSet::Range { start, end })
    }

    pub fn popular() -> Self {
        PortSet::Popular
    }

    /// Materializes the member ports. Each one is probed exactly once.
    pub fn ports(&self) -> Vec<u16> {
        match self {
            PortSet::Range { start, end } => (*start..=*end).collect(),
            PortSet::Popular => POPULAR_PORTS.to_vec(),
        }
    }
}
