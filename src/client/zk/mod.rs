// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Minimal blocking ZooKeeper session.
//!
//! Only what a read-only walk needs: the session handshake, `getData`, `getChildren2` and a
//! polite `closeSession`. No watches are registered; stray notifications and pings are skipped.

use std::io::{self, Write};
use std::net::{Shutdown, TcpStream, ToSocketAddrs};
use std::time::Duration;

use crate::model::{NodeStat, ZPath};

use super::{ClientError, ErrorCode, TreeClient};

pub(crate) mod proto;

use proto::Decoder;

pub const DEFAULT_SERVER: &str = "127.0.0.1:2181";
pub const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZkConfig {
    /// `host:port` addresses, tried in order.
    pub servers: Vec<String>,
    /// Requested session timeout; also bounds connect, read and write calls.
    pub session_timeout: Duration,
}

impl Default for ZkConfig {
    fn default() -> Self {
        Self { servers: vec![DEFAULT_SERVER.to_owned()], session_timeout: DEFAULT_SESSION_TIMEOUT }
    }
}

#[derive(Debug)]
pub struct ZkClient {
    stream: Option<TcpStream>,
    server: String,
    session_id: i64,
    next_xid: i32,
}

impl ZkClient {
    /// Opens a session against the first reachable server in `config.servers`.
    pub fn connect(config: &ZkConfig) -> Result<Self, ClientError> {
        for server in &config.servers {
            match Self::connect_one(server, config.session_timeout) {
                Ok(client) => return Ok(client),
                Err(err) => tracing::warn!(server = %server, error = %err, "connect failed"),
            }
        }
        Err(ClientError::Unreachable { addrs: config.servers.clone() })
    }

    fn connect_one(server: &str, timeout: Duration) -> Result<Self, ClientError> {
        let mut last_err = io::Error::new(io::ErrorKind::NotFound, "address resolved to nothing");
        let mut stream = None;
        for addr in server.to_socket_addrs()? {
            match TcpStream::connect_timeout(&addr, timeout) {
                Ok(connected) => {
                    stream = Some(connected);
                    break;
                }
                Err(err) => last_err = err,
            }
        }
        let mut stream = stream.ok_or(last_err)?;
        stream.set_read_timeout(Some(timeout))?;
        stream.set_write_timeout(Some(timeout))?;
        stream.set_nodelay(true)?;

        let timeout_ms = i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX);
        stream.write_all(&proto::encode_connect(timeout_ms))?;
        let body = proto::read_frame(&mut stream)?;
        let response = proto::decode_connect(&body)?;
        if response.timeout_ms <= 0 {
            return Err(ClientError::Protocol(format!("{server} refused the session")));
        }

        tracing::debug!(
            server = %server,
            session_id = format_args!("{:#x}", response.session_id),
            negotiated_timeout_ms = response.timeout_ms,
            protocol_version = response.protocol_version,
            password_len = response.password.len(),
            "session established"
        );

        Ok(Self {
            stream: Some(stream),
            server: server.to_owned(),
            session_id: response.session_id,
            next_xid: 1,
        })
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn session_id(&self) -> i64 {
        self.session_id
    }

    /// Ends the session. Further calls fail with [`ClientError::Closed`].
    pub fn close(&mut self) -> Result<(), ClientError> {
        let Some(mut stream) = self.stream.take() else {
            return Ok(());
        };
        let xid = self.bump_xid();
        stream.write_all(&proto::encode_close(xid))?;
        // The reply only confirms the close; a missing one is not worth reporting.
        let _ = proto::read_frame(&mut stream);
        let _ = stream.shutdown(Shutdown::Both);
        tracing::debug!(server = %self.server, "session closed");
        Ok(())
    }

    fn bump_xid(&mut self) -> i32 {
        let xid = self.next_xid;
        self.next_xid = if xid == i32::MAX { 1 } else { xid + 1 };
        xid
    }

    fn call<T>(
        &mut self,
        op: i32,
        path: &ZPath,
        decode: impl FnOnce(&mut Decoder<'_>) -> Result<T, ClientError>,
    ) -> Result<T, ClientError> {
        let result = self.exchange(op, path, decode);
        if let Err(err @ (ClientError::Io(_) | ClientError::Protocol(_))) = &result {
            // The stream position is unknown now; later replies could belong to anything.
            tracing::warn!(server = %self.server, error = %err, "dropping session");
            if let Some(stream) = self.stream.take() {
                let _ = stream.shutdown(Shutdown::Both);
            }
        }
        result
    }

    fn exchange<T>(
        &mut self,
        op: i32,
        path: &ZPath,
        decode: impl FnOnce(&mut Decoder<'_>) -> Result<T, ClientError>,
    ) -> Result<T, ClientError> {
        let xid = self.bump_xid();
        let stream = self.stream.as_mut().ok_or(ClientError::Closed)?;
        stream.write_all(&proto::encode_path_request(xid, op, path.as_str()))?;

        loop {
            let body = proto::read_frame(&mut *stream)?;
            let mut dec = Decoder::new(&body);
            let header = proto::decode_reply_header(&mut dec)?;
            if header.xid == proto::XID_WATCH_EVENT || header.xid == proto::XID_PING {
                continue;
            }
            if header.xid > 0 && header.xid < xid {
                tracing::debug!(stale_xid = header.xid, xid, "skipping stale reply");
                continue;
            }
            if header.xid != xid {
                return Err(ClientError::Protocol(format!(
                    "reply xid {} does not match request xid {xid}",
                    header.xid
                )));
            }
            if header.err != 0 {
                return Err(ClientError::Server {
                    path: path.to_string(),
                    code: ErrorCode(header.err),
                });
            }
            tracing::trace!(path = %path, op, zxid = header.zxid, "reply");
            return decode(&mut dec);
        }
    }
}

impl TreeClient for ZkClient {
    fn get(&mut self, path: &ZPath) -> Result<(Vec<u8>, NodeStat), ClientError> {
        self.call(proto::OP_GET_DATA, path, proto::decode_get_data)
    }

    fn list_children(&mut self, path: &ZPath) -> Result<(Vec<String>, NodeStat), ClientError> {
        self.call(proto::OP_GET_CHILDREN2, path, proto::decode_get_children2)
    }
}

impl Drop for ZkClient {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            tracing::debug!(server = %self.server, error = %err, "close on drop failed");
        }
    }
}
