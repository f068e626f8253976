//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize the runtime with the transport handle and resolved config
//! - Assemble gates and the routing surface
//! - Select the plain or TLS transport
//! - Await runtime readiness, and only then bind the socket
//! - Announce the admin URL once the accept loop is live
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - No request can be accepted before the runtime reports ready

use std::net::{IpAddr, SocketAddr, ToSocketAddrs};
use std::sync::Arc;

use axum::Router;
use axum_server::{tls_rustls::RustlsConfig, Handle};
use tokio::task::JoinHandle;

use crate::config::resolve::HostConfig;
use crate::error::HostError;
use crate::http::gates::GateSet;
use crate::http::mount;
use crate::lifecycle::{shutdown, signals};
use crate::net::{listener, tls};
use crate::runtime::FlowRuntime;

/// The host: resolved configuration plus the runtime it fronts.
pub struct FlowHost {
    config: Arc<HostConfig>,
    runtime: Arc<dyn FlowRuntime>,
}

/// A host whose transport is live and accepting requests.
pub struct RunningHost {
    config: Arc<HostConfig>,
    runtime: Arc<dyn FlowRuntime>,
    transport: Handle,
    serve_task: JoinHandle<Result<(), std::io::Error>>,
}

impl FlowHost {
    pub fn new(config: HostConfig, runtime: Arc<dyn FlowRuntime>) -> Self {
        Self {
            config: Arc::new(config),
            runtime,
        }
    }

    /// Run the full bootstrap sequence and bind the socket.
    pub async fn start(self) -> Result<RunningHost, HostError> {
        let transport = Handle::new();
        self.runtime.init(transport.clone(), self.config.clone());

        let gates = Arc::new(GateSet::from_config(&self.config));
        let app = mount::build_router(&self.config, self.runtime.as_ref(), gates);

        let tls_config = match &self.config.https {
            Some(settings) => Some(tls::load_tls(settings).await.map_err(HostError::Tls)?),
            None => None,
        };

        // The socket must not bind before the runtime reports ready.
        self.runtime.start().await?;

        let addr = resolve_bind_addr(&self.config.ui_host, self.config.ui_port)?;
        let url = self.config.admin_url();
        let socket = listener::bind(addr, &url)?;

        let serve_task = spawn_transport(socket, tls_config, app, transport.clone());

        // Wait for the accept loop before announcing; `None` means the
        // transport died during startup.
        if transport.listening().await.is_none() {
            return Err(match serve_task.await {
                Ok(Err(e)) => HostError::Transport(e),
                Ok(Ok(())) => {
                    HostError::Transport(std::io::Error::other("transport exited during startup"))
                }
                Err(e) => HostError::Transport(std::io::Error::other(e)),
            });
        }
        tracing::info!(url = %url, "Server now running");

        Ok(RunningHost {
            config: self.config,
            runtime: self.runtime,
            transport,
            serve_task,
        })
    }

    /// Start, then serve until an interrupt signal or transport failure.
    /// Signal-driven exit resolves to `Ok(())`.
    pub async fn run(self) -> Result<(), HostError> {
        let RunningHost {
            config: _,
            runtime,
            transport,
            mut serve_task,
        } = self.start().await?;

        tokio::select! {
            res = &mut serve_task => match res {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(HostError::Transport(e)),
                Err(e) => Err(HostError::Transport(std::io::Error::other(e))),
            },
            _ = signals::interrupt() => {
                shutdown::run(runtime, transport).await;
                let _ = serve_task.await;
                Ok(())
            }
        }
    }
}

/// Resolve the configured bind address: a literal IP is used as-is, anything
/// else goes through name resolution. Resolution is synchronous, but runs
/// before any request traffic exists.
fn resolve_bind_addr(host: &str, port: u16) -> Result<SocketAddr, HostError> {
    if let Ok(ip) = host.parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, port));
    }
    (host, port)
        .to_socket_addrs()
        .ok()
        .and_then(|mut addrs| addrs.next())
        .ok_or_else(|| HostError::InvalidBindAddress {
            host: host.to_string(),
        })
}

fn spawn_transport(
    socket: std::net::TcpListener,
    tls_config: Option<RustlsConfig>,
    app: Router,
    handle: Handle,
) -> JoinHandle<Result<(), std::io::Error>> {
    tokio::spawn(async move {
        let service = app.into_make_service();
        match tls_config {
            Some(tls) => {
                axum_server::from_tcp_rustls(socket, tls)
                    .handle(handle)
                    .serve(service)
                    .await
            }
            None => {
                axum_server::from_tcp(socket)
                    .handle(handle)
                    .serve(service)
                    .await
            }
        }
    })
}

impl RunningHost {
    /// Admin URL announced at startup.
    pub fn admin_url(&self) -> String {
        self.config.admin_url()
    }

    /// Handle of the live transport.
    pub fn transport(&self) -> Handle {
        self.transport.clone()
    }

    /// Stop the runtime (bounded wait) and close the transport.
    pub async fn shutdown(self) {
        shutdown::run(self.runtime, self.transport).await;
        let _ = self.serve_task.await;
    }
}
