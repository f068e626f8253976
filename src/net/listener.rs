//! Listener binding.

use std::io;
use std::net::{SocketAddr, TcpListener};

use thiserror::Error;

/// Typed bind failure.
///
/// Address-in-use is its own variant so callers can emit the dedicated
/// diagnostic instead of pattern-matching message text from a generic fault.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("port in use")]
    AddrInUse {
        /// Admin URL the bind was attempting to serve.
        url: String,
    },

    #[error("failed to bind {addr}")]
    Io {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
}

/// Bind the listening socket for the transport.
///
/// The socket is created up front so bind failures surface before the
/// transport task starts. `url` is carried into the address-in-use
/// diagnostic.
pub fn bind(addr: SocketAddr, url: &str) -> Result<TcpListener, BindError> {
    match TcpListener::bind(addr) {
        Ok(listener) => {
            listener
                .set_nonblocking(true)
                .map_err(|source| BindError::Io { addr, source })?;
            Ok(listener)
        }
        Err(e) if e.kind() == io::ErrorKind::AddrInUse => Err(BindError::AddrInUse {
            url: url.to_string(),
        }),
        Err(source) => Err(BindError::Io { addr, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn occupied_port_is_addr_in_use() {
        let first = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = first.local_addr().unwrap();

        let err = bind(addr, "http://127.0.0.1:1880/").unwrap_err();
        match err {
            BindError::AddrInUse { url } => assert_eq!(url, "http://127.0.0.1:1880/"),
            other => panic!("expected AddrInUse, got {other:?}"),
        }
    }

    #[test]
    fn free_port_binds() {
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let listener = bind(addr, "http://127.0.0.1:0/").unwrap();
        assert_eq!(listener.local_addr().unwrap().ip(), addr.ip());
    }
}
