pub mod chunk;
pub mod reader;
pub mod rle;

pub use chunk::{Chunk, ChunkReader, ChunkTag, FileHeader, CHUNK_HEADER_SIZE, FILE_HEADER_SIZE};
pub use reader::BinaryReader;
