// src/client.rs

//! The public facade: a cloneable handle bundling the connection manager
//! with the five command families.

use crate::commands::{
    HashCommands, ListCommands, SetCommands, SortedSetCommands, StringCommands,
};
use crate::config::StoreConfig;
use crate::connection::{ConnectionManager, StoreConnector, TcpConnector};
use crate::errors::Result;
use std::sync::Arc;

/// Asynchronous store client. Cloning is cheap and every clone shares the
/// same underlying connection; commands connect lazily on first use.
///
/// ```no_run
/// use lazulite::Client;
///
/// # async fn demo() -> lazulite::Result<()> {
/// let client = Client::new();
/// client.strings().set("greeting", "hello").await?;
/// let value = client.strings().get("greeting").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    manager: Arc<ConnectionManager>,
}

impl Client {
    /// Client with default settings: local store, standard port, no
    /// credential, database 0.
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Client with explicit settings, dialing plain TCP.
    pub fn with_config(config: StoreConfig) -> Self {
        Self::with_connector(Box::new(TcpConnector), config)
    }

    /// Client over a custom connector. This is the substitution point for
    /// fake transports in tests.
    pub fn with_connector(connector: Box<dyn StoreConnector>, config: StoreConfig) -> Self {
        Self {
            manager: Arc::new(ConnectionManager::new(connector, config)),
        }
    }

    /// Connects with the current settings. Commands connect lazily anyway;
    /// call this to surface connection problems early.
    pub async fn connect(&self) -> Result<()> {
        self.manager.ensure_connected().await
    }

    /// Connects with the supplied settings. When already connected this is a
    /// no-op and the settings are ignored: the first successful
    /// configuration stays fixed until [`close`](Self::close).
    pub async fn connect_with(&self, config: StoreConfig) -> Result<()> {
        self.manager.connect_with(config).await
    }

    /// The lazy gate every command goes through; exposed for callers that
    /// want the same guarantee without issuing a command.
    pub async fn ensure_connected(&self) -> Result<()> {
        self.manager.ensure_connected().await
    }

    /// Closes the connection. Errors with
    /// [`NotConnected`](crate::LazuliteError::NotConnected) when none is
    /// open.
    pub async fn close(&self) -> Result<()> {
        self.manager.close().await
    }

    // Diagnostics over the active configuration.

    pub fn is_connected(&self) -> bool {
        self.manager.is_connected()
    }

    pub fn host(&self) -> String {
        self.manager.host()
    }

    pub fn port(&self) -> u16 {
        self.manager.port()
    }

    pub fn auth(&self) -> Option<String> {
        self.manager.auth()
    }

    pub fn database(&self) -> u32 {
        self.manager.database()
    }

    // Command families.

    pub fn strings(&self) -> StringCommands<'_> {
        StringCommands::new(&self.manager)
    }

    pub fn hashes(&self) -> HashCommands<'_> {
        HashCommands::new(&self.manager)
    }

    pub fn lists(&self) -> ListCommands<'_> {
        ListCommands::new(&self.manager)
    }

    pub fn sets(&self) -> SetCommands<'_> {
        SetCommands::new(&self.manager)
    }

    pub fn sorted_sets(&self) -> SortedSetCommands<'_> {
        SortedSetCommands::new(&self.manager)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}
