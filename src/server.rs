use std::fmt;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tokio::net::TcpListener;
use tracing::info;

/// All interfaces, port 80.
pub const LISTEN_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 80);

#[derive(Debug)]
pub enum ServerError {
    TcpBind(std::io::Error),
    Run(std::io::Error),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TcpBind(e) => write!(f, "failed to start listening: {e}"),
            Self::Run(e) => write!(f, "server error: {e}"),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TcpBind(e) | Self::Run(e) => Some(e),
        }
    }
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    info!("binding to {}", addr);

    TcpListener::bind(addr).await.map_err(ServerError::TcpBind)
}
