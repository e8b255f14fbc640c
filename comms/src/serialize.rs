use std::io;

/// Encodes a message into the bytes handed back to the hosting runtime.
pub trait Serialize {
    fn serialize(&self, buf: &mut Vec<u8>) -> io::Result<()>;
}
