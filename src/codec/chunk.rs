//! The tagged-chunk container layout of `.sc2` city files.
//!
//! The file opens with a 12-byte header (magic tag, declared size, container
//! tag), followed by a flat directory of chunks, each an 8-byte header (tag +
//! big-endian length) and `length` payload bytes. The declared size counts
//! everything after the first chunk header, so the scan limit is
//! `declared_size + CHUNK_HEADER_SIZE` — a quirk of the format, not of this
//! reader.

use std::fmt;

use tracing::debug;

use crate::codec::{rle, BinaryReader};
use crate::error::Result;

pub const FILE_HEADER_SIZE: usize = 12;
pub const CHUNK_HEADER_SIZE: usize = 8;

/// 4-byte ASCII chunk tag.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkTag(pub [u8; 4]);

impl ChunkTag {
    pub const ALTM: ChunkTag = ChunkTag(*b"ALTM");
    pub const MISC: ChunkTag = ChunkTag(*b"MISC");
    pub const XTER: ChunkTag = ChunkTag(*b"XTER");
    pub const XBLD: ChunkTag = ChunkTag(*b"XBLD");
    pub const XZON: ChunkTag = ChunkTag(*b"XZON");
    pub const XUND: ChunkTag = ChunkTag(*b"XUND");
    pub const XTXT: ChunkTag = ChunkTag(*b"XTXT");
    pub const XLAB: ChunkTag = ChunkTag(*b"XLAB");
    pub const XMIC: ChunkTag = ChunkTag(*b"XMIC");
    pub const XTHG: ChunkTag = ChunkTag(*b"XTHG");
    pub const XBIT: ChunkTag = ChunkTag(*b"XBIT");
    pub const XTRF: ChunkTag = ChunkTag(*b"XTRF");
    pub const XPLT: ChunkTag = ChunkTag(*b"XPLT");
    pub const XVAL: ChunkTag = ChunkTag(*b"XVAL");
    pub const XCRM: ChunkTag = ChunkTag(*b"XCRM");
    pub const XPLC: ChunkTag = ChunkTag(*b"XPLC");
    pub const XFIR: ChunkTag = ChunkTag(*b"XFIR");
    pub const XPOP: ChunkTag = ChunkTag(*b"XPOP");
    pub const XROG: ChunkTag = ChunkTag(*b"XROG");
    pub const XGRP: ChunkTag = ChunkTag(*b"XGRP");

    /// Whether this chunk's payload is stored run-length compressed.
    pub fn is_compressed(self) -> bool {
        COMPRESSED_TAGS.contains(&self)
    }
}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &b in &self.0 {
            let c = if b.is_ascii_graphic() { b as char } else { '.' };
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkTag({self})")
    }
}

/// Tags whose payloads must be run-length decompressed before use. Every
/// other tag (notably ALTM) is stored raw.
pub const COMPRESSED_TAGS: [ChunkTag; 19] = [
    ChunkTag::MISC,
    ChunkTag::XTER,
    ChunkTag::XBLD,
    ChunkTag::XZON,
    ChunkTag::XUND,
    ChunkTag::XTXT,
    ChunkTag::XLAB,
    ChunkTag::XMIC,
    ChunkTag::XTHG,
    ChunkTag::XBIT,
    ChunkTag::XTRF,
    ChunkTag::XPLT,
    ChunkTag::XVAL,
    ChunkTag::XCRM,
    ChunkTag::XPLC,
    ChunkTag::XFIR,
    ChunkTag::XPOP,
    ChunkTag::XROG,
    ChunkTag::XGRP,
];

/// The 12-byte file header.
#[derive(Debug, Clone, Copy)]
pub struct FileHeader {
    pub magic: ChunkTag,
    pub declared_size: u32,
    pub container: ChunkTag,
}

/// One chunk, payload already decompressed when the tag calls for it.
/// `declared_len` is the on-disk length; after decompression `data.len()`
/// is usually larger.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub tag: ChunkTag,
    pub declared_len: u32,
    pub data: Vec<u8>,
}

/// Walks the chunk directory of an in-memory city file.
#[derive(Debug)]
pub struct ChunkReader<'a> {
    reader: BinaryReader<'a>,
    header: FileHeader,
    scan_limit: usize,
}

impl<'a> ChunkReader<'a> {
    /// Parse the file header and position the cursor on the first chunk.
    pub fn new(data: &'a [u8]) -> Result<Self> {
        let mut reader = BinaryReader::new(data);
        let header = FileHeader {
            magic: ChunkTag(reader.read_tag()?),
            declared_size: reader.read_u32_be()?,
            container: ChunkTag(reader.read_tag()?),
        };
        let scan_limit = header.declared_size as usize + CHUNK_HEADER_SIZE;
        debug!(
            magic = %header.magic,
            container = %header.container,
            scan_limit,
            "opened city file"
        );
        Ok(Self { reader, header, scan_limit })
    }

    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Next chunk in the directory, or `None` once the cursor reaches the
    /// scan limit. Structural iteration only: no tag is an error here.
    pub fn next_chunk(&mut self) -> Result<Option<Chunk>> {
        if self.reader.position() >= self.scan_limit {
            return Ok(None);
        }

        let tag = ChunkTag(self.reader.read_tag()?);
        let declared_len = self.reader.read_u32_be()?;
        let payload = self.reader.read_bytes(declared_len as usize)?;

        let data = if tag.is_compressed() {
            rle::decompress(payload)?
        } else {
            payload.to_vec()
        };
        debug!(%tag, declared_len, actual_len = data.len(), "read chunk");

        Ok(Some(Chunk { tag, declared_len, data }))
    }
}
