use thiserror::Error;

#[derive(Error, Debug)]
pub enum PscoutError {
    #[error("Network error: {0}")]
    Network(#[from] std::io::Error),
    #[error("Port {0} is outside the valid range 1-65535")]
    PortOutOfRange(u32),
    #[error("Start port {0} is greater than end port {1}")]
    InvertedRange(u16, u16),
}
