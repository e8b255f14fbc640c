use std::io;

/// Decodes a message the hosting runtime handed over as raw bytes.
pub trait Deserialize<'a>: Sized {
    fn deserialize(buf: &'a [u8]) -> io::Result<Self>;
}
