// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Zktree-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Zktree and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Jute encoding for the handful of messages a read-only walk needs.
//!
//! Every frame is a 4-byte big-endian length followed by the record. Integers are big-endian,
//! buffers and strings are length-prefixed (`-1` encodes null), vectors are count-prefixed.

use std::io::{self, Read};

use crate::client::ClientError;
use crate::model::NodeStat;

pub(crate) const PROTOCOL_VERSION: i32 = 0;

pub(crate) const OP_GET_DATA: i32 = 4;
pub(crate) const OP_GET_CHILDREN2: i32 = 12;
pub(crate) const OP_CLOSE_SESSION: i32 = -11;

pub(crate) const XID_WATCH_EVENT: i32 = -1;
pub(crate) const XID_PING: i32 = -2;

const PASSWORD_LEN: usize = 16;
const MAX_FRAME_LEN: usize = 64 * 1024 * 1024;

/// Builds one length-prefixed frame.
#[derive(Debug)]
pub(crate) struct Encoder {
    buf: Vec<u8>,
}

impl Encoder {
    pub(crate) fn new() -> Self {
        Self { buf: vec![0; 4] }
    }

    pub(crate) fn put_i32(&mut self, value: i32) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub(crate) fn put_i64(&mut self, value: i64) -> &mut Self {
        self.buf.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub(crate) fn put_bool(&mut self, value: bool) -> &mut Self {
        self.buf.push(u8::from(value));
        self
    }

    pub(crate) fn put_buffer(&mut self, bytes: &[u8]) -> &mut Self {
        let len = i32::try_from(bytes.len()).unwrap_or(i32::MAX);
        self.put_i32(len);
        self.buf.extend_from_slice(bytes);
        self
    }

    pub(crate) fn put_string(&mut self, value: &str) -> &mut Self {
        self.put_buffer(value.as_bytes())
    }

    #[cfg(test)]
    pub(crate) fn put_stat(&mut self, stat: &NodeStat) -> &mut Self {
        self.put_i64(stat.czxid)
            .put_i64(stat.mzxid)
            .put_i64(stat.ctime)
            .put_i64(stat.mtime)
            .put_i32(stat.version)
            .put_i32(stat.cversion)
            .put_i32(stat.aversion)
            .put_i64(stat.ephemeral_owner)
            .put_i32(stat.data_length)
            .put_i32(stat.num_children)
            .put_i64(stat.pzxid)
    }

    /// Patches the length prefix and returns the complete frame.
    pub(crate) fn finish(&mut self) -> Vec<u8> {
        let mut buf = std::mem::take(&mut self.buf);
        let len = u32::try_from(buf.len() - 4).unwrap_or(u32::MAX);
        buf[..4].copy_from_slice(&len.to_be_bytes());
        buf
    }
}

/// Reads fields out of one frame body (length prefix already stripped).
#[derive(Debug)]
pub(crate) struct Decoder<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], ClientError> {
        if self.remaining() < len {
            return Err(ClientError::Protocol(format!(
                "truncated record: wanted {len} bytes at offset {}, have {}",
                self.pos,
                self.remaining()
            )));
        }
        let slice = &self.bytes[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    pub(crate) fn get_i32(&mut self) -> Result<i32, ClientError> {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(self.take(4)?);
        Ok(i32::from_be_bytes(raw))
    }

    pub(crate) fn get_i64(&mut self) -> Result<i64, ClientError> {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(self.take(8)?);
        Ok(i64::from_be_bytes(raw))
    }

    pub(crate) fn get_bool(&mut self) -> Result<bool, ClientError> {
        Ok(self.take(1)?[0] != 0)
    }

    /// A buffer; null (`-1`) decodes as empty.
    pub(crate) fn get_buffer(&mut self) -> Result<Vec<u8>, ClientError> {
        let len = self.get_i32()?;
        if len < 0 {
            return Ok(Vec::new());
        }
        Ok(self.take(len as usize)?.to_vec())
    }

    pub(crate) fn get_string(&mut self) -> Result<String, ClientError> {
        let bytes = self.get_buffer()?;
        String::from_utf8(bytes)
            .map_err(|err| ClientError::Protocol(format!("string is not utf-8: {err}")))
    }

    pub(crate) fn get_string_vec(&mut self) -> Result<Vec<String>, ClientError> {
        let count = self.get_i32()?;
        if count < 0 {
            return Ok(Vec::new());
        }
        // Each entry needs at least its 4-byte length.
        let count = count as usize;
        if count > self.remaining() / 4 {
            return Err(ClientError::Protocol(format!("vector count {count} exceeds record")));
        }
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(self.get_string()?);
        }
        Ok(out)
    }

    pub(crate) fn get_stat(&mut self) -> Result<NodeStat, ClientError> {
        Ok(NodeStat {
            czxid: self.get_i64()?,
            mzxid: self.get_i64()?,
            ctime: self.get_i64()?,
            mtime: self.get_i64()?,
            version: self.get_i32()?,
            cversion: self.get_i32()?,
            aversion: self.get_i32()?,
            ephemeral_owner: self.get_i64()?,
            data_length: self.get_i32()?,
            num_children: self.get_i32()?,
            pzxid: self.get_i64()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ConnectResponse {
    pub(crate) protocol_version: i32,
    pub(crate) timeout_ms: i32,
    pub(crate) session_id: i64,
    pub(crate) password: Vec<u8>,
}

/// A fresh-session handshake: no last zxid, no session id, zeroed password, read-only off.
pub(crate) fn encode_connect(timeout_ms: i32) -> Vec<u8> {
    Encoder::new()
        .put_i32(PROTOCOL_VERSION)
        .put_i64(0)
        .put_i32(timeout_ms)
        .put_i64(0)
        .put_buffer(&[0; PASSWORD_LEN])
        .put_bool(false)
        .finish()
}

pub(crate) fn decode_connect(body: &[u8]) -> Result<ConnectResponse, ClientError> {
    let mut dec = Decoder::new(body);
    let response = ConnectResponse {
        protocol_version: dec.get_i32()?,
        timeout_ms: dec.get_i32()?,
        session_id: dec.get_i64()?,
        password: dec.get_buffer()?,
    };
    // Servers that know about read-only mode append one flag byte; older ones do not.
    if dec.remaining() > 0 {
        dec.get_bool()?;
    }
    Ok(response)
}

/// A path-addressed read request with the watch flag cleared.
pub(crate) fn encode_path_request(xid: i32, op: i32, path: &str) -> Vec<u8> {
    Encoder::new().put_i32(xid).put_i32(op).put_string(path).put_bool(false).finish()
}

pub(crate) fn encode_close(xid: i32) -> Vec<u8> {
    Encoder::new().put_i32(xid).put_i32(OP_CLOSE_SESSION).finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ReplyHeader {
    pub(crate) xid: i32,
    pub(crate) zxid: i64,
    pub(crate) err: i32,
}

pub(crate) fn decode_reply_header(dec: &mut Decoder<'_>) -> Result<ReplyHeader, ClientError> {
    Ok(ReplyHeader { xid: dec.get_i32()?, zxid: dec.get_i64()?, err: dec.get_i32()? })
}

pub(crate) fn decode_get_data(dec: &mut Decoder<'_>) -> Result<(Vec<u8>, NodeStat), ClientError> {
    let data = dec.get_buffer()?;
    let stat = dec.get_stat()?;
    Ok((data, stat))
}

pub(crate) fn decode_get_children2(
    dec: &mut Decoder<'_>,
) -> Result<(Vec<String>, NodeStat), ClientError> {
    let children = dec.get_string_vec()?;
    let stat = dec.get_stat()?;
    Ok((children, stat))
}

/// Reads one frame body from `reader`.
pub(crate) fn read_frame(reader: &mut impl Read) -> io::Result<Vec<u8>> {
    let mut len = [0u8; 4];
    reader.read_exact(&mut len)?;
    let len = u32::from_be_bytes(len) as usize;
    if len > MAX_FRAME_LEN {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("frame of {len} bytes exceeds limit of {MAX_FRAME_LEN}"),
        ));
    }
    let mut body = vec![0u8; len];
    reader.read_exact(&mut body)?;
    Ok(body)
}
