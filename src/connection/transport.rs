// src/connection/transport.rs

//! The boundary between the connection manager and the store: a trait pair
//! for opening links and exchanging one command for one reply, plus the real
//! RESP-over-TCP implementation.

use crate::errors::{LazuliteError, Result};
use crate::protocol::{RespCodec, RespFrame};
use async_trait::async_trait;
use bytes::BytesMut;
use futures::StreamExt;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt, ReadHalf, WriteHalf, split};
use tokio::net::TcpStream;
use tokio_util::codec::{Encoder, FramedRead};
use tracing::debug;

/// One open conversation with the store. Implementations exchange exactly one
/// reply per command; pipelining is not part of this client's contract.
#[async_trait]
pub trait StoreTransport: Send {
    /// Sends one command frame and waits for the single reply frame.
    async fn roundtrip(&mut self, command: RespFrame) -> Result<RespFrame>;

    /// Flushes and closes the link.
    async fn shutdown(&mut self) -> Result<()>;
}

/// Factory for transports. The default implementation dials TCP; tests
/// substitute scripted fakes here.
#[async_trait]
pub trait StoreConnector: Send + Sync {
    async fn connect(
        &self,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<Box<dyn StoreTransport>>;
}

/// RESP transport over any async byte stream. Replies come through a framed
/// reader; commands are encoded into one buffer and written whole.
pub struct RespTransport<S> {
    reader: FramedRead<ReadHalf<S>, RespCodec>,
    writer: WriteHalf<S>,
}

impl<S: AsyncRead + AsyncWrite> RespTransport<S> {
    pub fn new(stream: S) -> Self {
        let (reader, writer) = split(stream);
        Self {
            reader: FramedRead::new(reader, RespCodec),
            writer,
        }
    }
}

#[async_trait]
impl<S: AsyncRead + AsyncWrite + Send + 'static> StoreTransport for RespTransport<S> {
    async fn roundtrip(&mut self, command: RespFrame) -> Result<RespFrame> {
        let mut encoded = BytesMut::new();
        RespCodec.encode(command, &mut encoded)?;
        self.writer.write_all(&encoded).await?;

        match self.reader.next().await {
            Some(frame) => frame,
            // EOF before a reply arrived: the store went away mid-conversation.
            None => Err(LazuliteError::ConnectionClosed),
        }
    }

    async fn shutdown(&mut self) -> Result<()> {
        self.writer.shutdown().await?;
        Ok(())
    }
}

/// Dials plain TCP under a connect deadline.
#[derive(Debug, Default)]
pub struct TcpConnector;

#[async_trait]
impl StoreConnector for TcpConnector {
    async fn connect(
        &self,
        host: &str,
        port: u16,
        timeout: Duration,
    ) -> Result<Box<dyn StoreTransport>> {
        let stream = tokio::time::timeout(timeout, TcpStream::connect((host, port)))
            .await
            .map_err(|_| LazuliteError::ConnectTimeout)??;
        stream.set_nodelay(true)?;
        debug!(host, port, "transport connected");
        Ok(Box::new(RespTransport::new(stream)))
    }
}
