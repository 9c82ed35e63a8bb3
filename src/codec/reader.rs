use crate::error::{Error, Result};

/// Bounds-checked cursor over a byte buffer.
///
/// The city-file container is big-endian throughout, so only big-endian
/// multi-byte reads are provided.
#[derive(Debug)]
pub struct BinaryReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BinaryReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.pos)
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::TruncatedFile {
                need: n,
                have: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        if self.remaining() < 1 {
            return Err(Error::TruncatedFile { need: 1, have: 0 });
        }
        let v = self.data[self.pos];
        self.pos += 1;
        Ok(v)
    }

    pub fn read_u32_be(&mut self) -> Result<u32> {
        let bytes = self.read_bytes(4)?;
        Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// Read a 4-byte chunk tag.
    pub fn read_tag(&mut self) -> Result<[u8; 4]> {
        let bytes = self.read_bytes(4)?;
        Ok([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_primitives() {
        let data = [b'F', b'O', b'R', b'M', 0x00, 0x00, 0x01, 0x02, 0xAB];
        let mut reader = BinaryReader::new(&data);

        assert_eq!(reader.read_tag().unwrap(), *b"FORM");
        assert_eq!(reader.read_u32_be().unwrap(), 0x0102);
        assert_eq!(reader.read_u8().unwrap(), 0xAB);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_read_past_end() {
        let data = [0x01, 0x02];
        let mut reader = BinaryReader::new(&data);
        match reader.read_u32_be() {
            Err(Error::TruncatedFile { need: 4, have: 2 }) => {}
            other => panic!("expected TruncatedFile, got {other:?}"),
        }
        // A failed read must not advance the cursor.
        assert_eq!(reader.position(), 0);
    }

    #[test]
    fn test_position_tracking() {
        let data = [0u8; 16];
        let mut reader = BinaryReader::new(&data);
        reader.read_bytes(12).unwrap();
        assert_eq!(reader.position(), 12);
        assert_eq!(reader.remaining(), 4);
    }
}
