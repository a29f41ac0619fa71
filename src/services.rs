use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A database of well known port numbers and their descriptive labels.
pub static PORT_SERVICES: Lazy<HashMap<u16, &'static str>> = Lazy::new(|| {
    let mut map = HashMap::new();
    map.insert(20, "FTP Data");
    map.insert(21, "FTP Control");
    map.insert(22, "SSH");
    map.insert(23, "Telnet");
    map.insert(25, "SMTP");
    map.insert(53, "DNS");
    map.insert(80, "HTTP");
    map.insert(110, "POP3");
    map.insert(143, "IMAP");
    map.insert(443, "HTTPS");
    map.insert(445, "SMB");
    map.insert(465, "SMTPS");
    map.insert(587, "SMTP Submission");
    map.insert(993, "IMAPS");
    map.insert(995, "POP3S");
    map.insert(1433, "MS SQL Server");
    map.insert(3000, "Dev Server");
    map.insert(3306, "MySQL");
    map.insert(3389, "RDP");
    map.insert(4200, "Angular Dev");
    map.insert(5000, "Flask/Various");
    map.insert(5432, "PostgreSQL");
    map.insert(5672, "RabbitMQ");
    map.insert(5900, "VNC");
    map.insert(5984, "CouchDB");
    map.insert(6379, "Redis");
    map.insert(8000, "HTTP Dev");
    map.insert(8080, "HTTP Alt");
    map.insert(8443, "HTTPS Alt");
    map.insert(9090, "Prometheus");
    map.insert(9200, "Elasticsearch");
    map.insert(11211, "Memcached");
    map.insert(27017, "MongoDB");
    map
});

/// Label for a port, or `None` when the table has no entry for it.
pub fn service_label(port: u16) -> Option<&'static str> {
    PORT_SERVICES.get(&port).copied()
}
