//! The program's wire format, isolated from the instruction encoders:
//! little-endian fixed-width integers and u32-length-prefixed UTF-8 strings,
//! never null-terminated.

use crate::error::{SdkError, SdkResult};
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Default)]
pub struct ByteWriter {
    buf: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a payload with its 8-byte discriminator.
    pub fn with_discriminator(discriminator: [u8; 8]) -> Self {
        Self {
            buf: discriminator.to_vec(),
        }
    }

    /// Raw bytes, no length prefix. For fixed-width fields.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn write_u32(&mut self, value: u32) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.buf.extend_from_slice(&value.to_le_bytes());
    }

    /// Length-prefixed string. Fields that cannot carry a u32 length prefix
    /// are rejected here rather than silently truncated.
    pub fn write_str(&mut self, value: &str) -> SdkResult<()> {
        let bytes = value.as_bytes();
        let len = u32::try_from(bytes.len()).map_err(|_| SdkError::FieldTooLong {
            len: bytes.len(),
        })?;
        self.write_u32(len);
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn take(&mut self, n: usize) -> SdkResult<&'a [u8]> {
        if n > self.remaining() {
            return Err(SdkError::UnexpectedEof {
                wanted: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    fn take_array<const N: usize>(&mut self) -> SdkResult<[u8; N]> {
        let slice = self.take(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> SdkResult<u8> {
        Ok(self.take_array::<1>()?[0])
    }

    pub fn read_u32(&mut self) -> SdkResult<u32> {
        Ok(u32::from_le_bytes(self.take_array()?))
    }

    pub fn read_u64(&mut self) -> SdkResult<u64> {
        Ok(u64::from_le_bytes(self.take_array()?))
    }

    pub fn read_pubkey(&mut self) -> SdkResult<Pubkey> {
        Ok(Pubkey::new_from_array(self.take_array()?))
    }

    pub fn read_str(&mut self) -> SdkResult<String> {
        let len = self.read_u32()? as usize;
        let bytes = self.take(len)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| SdkError::InvalidUtf8)
    }

    /// Consume and verify a leading 8-byte discriminator.
    pub fn expect_discriminator(&mut self, expected: [u8; 8]) -> SdkResult<()> {
        if self.take_array::<8>()? != expected {
            return Err(SdkError::WrongDiscriminator);
        }
        Ok(())
    }

    /// Assert the payload was consumed exactly.
    pub fn finish(self) -> SdkResult<()> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(SdkError::TrailingBytes(n)),
        }
    }
}
