//! Read/Write streaming engine

use std::io::{self, Read, Write};

use dchacha_api::{validate, StreamCipher};
use dchacha_common::SecretVec;
use tracing::debug;

use super::carry::KeystreamCarry;
use crate::error::StreamResult;

/// Run `cipher` over everything `input` yields, writing the result to `output`
///
/// Stops when the input reports end-of-stream and returns the number of bytes
/// processed. Errors from `input` or `output` are returned unchanged.
pub fn process_stream<C, W, R>(
    cipher: &mut C,
    mut output: W,
    mut input: R,
    chunk_size: usize,
) -> StreamResult<u64>
where
    C: StreamCipher,
    W: Write,
    R: Read,
{
    validate::live("stream", cipher.is_disposed())?;
    validate::chunk_size("stream", chunk_size)?;

    let mut read_buf = SecretVec::zeroed(chunk_size);
    let mut write_buf = SecretVec::zeroed(chunk_size);
    let mut carry = KeystreamCarry::new(C::BLOCK_SIZE);
    let mut total = 0u64;
    let mut chunks = 0u64;

    loop {
        let n = fill_chunk(&mut input, read_buf.as_mut_slice())?;
        if n == 0 {
            break;
        }

        carry.combine(
            cipher,
            &mut write_buf.as_mut_slice()[..n],
            &read_buf.as_slice()[..n],
        )?;
        output.write_all(&write_buf.as_slice()[..n])?;

        total += n as u64;
        chunks += 1;
    }
    output.flush()?;

    debug!(bytes = total, chunks, chunk_size, "stream processed");
    Ok(total)
}

/// Read until `buf` is full or the reader reports end-of-stream
fn fill_chunk<R: Read>(input: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
