mod deserialize;
pub mod msg;
mod serialize;
pub mod specs;

pub use deserialize::Deserialize;
pub use serialize::Serialize;

/// Decodes a message from the bytes the hosting runtime handed over.
///
/// # Arguments
/// * `buf` - The raw message.
///
/// # Returns
/// The decoded message or an `InvalidData` io error.
pub fn from_bytes<'a, T: Deserialize<'a>>(buf: &'a [u8]) -> std::io::Result<T> {
    T::deserialize(buf)
}

/// Encodes a message into a fresh buffer.
///
/// # Arguments
/// * `msg` - The message to encode.
///
/// # Returns
/// The encoded bytes or an io error if failed to do so.
pub fn to_bytes<T: Serialize>(msg: &T) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    msg.serialize(&mut buf)?;
    Ok(buf)
}
