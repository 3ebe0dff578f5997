// src/connection/manager.rs

//! Owns the process-wide connection state: one transport, the active
//! configuration, and the connected flag. Every lifecycle rule lives here so
//! command wrappers stay thin.

use crate::commands::args::Command;
use crate::config::StoreConfig;
use crate::connection::transport::{StoreConnector, StoreTransport};
use crate::errors::{LazuliteError, Result};
use crate::protocol::{RespFrame, reply};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Lazily connects on first use, stays connected until `close()` or a
/// transport failure, and never reconnects while healthy. Connect, close,
/// and command dispatch all serialize on the link mutex, which makes the
/// whole lifecycle one critical section.
pub struct ConnectionManager {
    connector: Box<dyn StoreConnector>,
    link: Mutex<Option<Box<dyn StoreTransport>>>,
    settings: RwLock<StoreConfig>,
    connected: AtomicBool,
}

impl ConnectionManager {
    pub fn new(connector: Box<dyn StoreConnector>, config: StoreConfig) -> Self {
        Self {
            connector,
            link: Mutex::new(None),
            settings: RwLock::new(config),
            connected: AtomicBool::new(false),
        }
    }

    /// Connects with the current settings if no link is open. The lazy path
    /// every command dispatch takes first.
    pub async fn ensure_connected(&self) -> Result<()> {
        let mut link = self.link.lock().await;
        if link.is_some() {
            return Ok(());
        }
        self.establish(&mut link).await
    }

    /// Adopts `config` and connects with it. When a link is already open the
    /// call is an idempotent no-op and the supplied configuration is ignored:
    /// the first successful connect fixes the settings until `close()`.
    pub async fn connect_with(&self, config: StoreConfig) -> Result<()> {
        let mut link = self.link.lock().await;
        if link.is_some() {
            debug!("already connected; supplied configuration ignored");
            return Ok(());
        }
        config.validate()?;
        *self.settings.write() = config;
        self.establish(&mut link).await
    }

    /// Opens a transport and runs the handshake: AUTH when a credential is
    /// configured, SELECT when the database index is nonzero. The link is
    /// installed and the flag raised only after every step acknowledged, so
    /// a rejected credential never leaves the manager half-connected.
    async fn establish(&self, link: &mut Option<Box<dyn StoreTransport>>) -> Result<()> {
        let settings = self.settings.read().clone();
        debug!(host = %settings.host, port = settings.port, "connecting to store");

        let mut transport = self
            .connector
            .connect(&settings.host, settings.port, settings.connect_timeout)
            .await?;

        if let Some(credential) = settings.credential() {
            let frame = Command::new("AUTH").arg(credential).into_frame();
            let outcome = transport.roundtrip(frame).await.and_then(reply::expect_ok);
            if let Err(e) = outcome {
                warn!(error = %e, "authentication rejected");
                // Any server-side complaint about AUTH is an auth failure.
                return Err(match e {
                    LazuliteError::Server(message) => {
                        LazuliteError::AuthenticationFailed(message)
                    }
                    other => other,
                });
            }
            debug!("authenticated");
        }

        if settings.database != 0 {
            let frame = Command::new("SELECT")
                .arg_int(i64::from(settings.database))
                .into_frame();
            reply::expect_ok(transport.roundtrip(frame).await?)?;
            debug!(database = settings.database, "database selected");
        }

        info!(host = %settings.host, port = settings.port, "connection established");
        *link = Some(transport);
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    /// Shuts the transport down and marks the manager disconnected. Calling
    /// this without an open link is an error, not a silent no-op.
    pub async fn close(&self) -> Result<()> {
        let mut link = self.link.lock().await;
        let Some(mut transport) = link.take() else {
            return Err(LazuliteError::NotConnected);
        };
        self.connected.store(false, Ordering::SeqCst);
        if let Err(e) = transport.shutdown().await {
            warn!(error = %e, "error while shutting down transport");
        }
        info!("connection closed");
        Ok(())
    }

    /// Sends one command, connecting first if needed. Transport-level
    /// failures drop the link so the next dispatch reconnects lazily;
    /// store-reported errors arrive as `Ok(Error frame)` and leave the
    /// connection up.
    pub(crate) async fn dispatch(&self, command: Command) -> Result<RespFrame> {
        let mut link = self.link.lock().await;
        if link.is_none() {
            self.establish(&mut link).await?;
        }
        let Some(transport) = link.as_mut() else {
            return Err(LazuliteError::NotConnected);
        };

        match transport.roundtrip(command.into_frame()).await {
            Ok(frame) => Ok(frame),
            Err(e) => {
                if e.is_connection_fatal() {
                    warn!(error = %e, "transport failure; dropping connection");
                    *link = None;
                    self.connected.store(false, Ordering::SeqCst);
                }
                Err(e)
            }
        }
    }

    // Read-only accessors for diagnostics.

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    pub fn host(&self) -> String {
        self.settings.read().host.clone()
    }

    pub fn port(&self) -> u16 {
        self.settings.read().port
    }

    pub fn auth(&self) -> Option<String> {
        self.settings.read().auth.clone()
    }

    pub fn database(&self) -> u32 {
        self.settings.read().database
    }
}
