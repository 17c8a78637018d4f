use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::PathBuf,
};

// Runtime settings, read from the environment with local-dev defaults.

pub fn http_port() -> u16 {
    env::var("GUESTBOOK_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5000)
}

pub fn http_host() -> IpAddr {
    env::var("GUESTBOOK_HOST")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

pub fn bind_addr() -> SocketAddr {
    SocketAddr::new(http_host(), http_port())
}

// Location of the guests document, relative to the working directory
// unless an absolute path is given.
pub fn data_path() -> PathBuf {
    env::var("GUESTBOOK_DATA_PATH")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("guests.json"))
}
