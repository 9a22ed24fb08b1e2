//! tokio AsyncRead/AsyncWrite streaming engine

use std::io;

use dchacha_api::{validate, StreamCipher};
use dchacha_common::SecretVec;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use super::carry::KeystreamCarry;
use crate::error::StreamResult;

/// Asynchronous [`process_stream`](super::process_stream)
///
/// Produces the same bytes as the synchronous engine for the same input.
/// Cancellation is left to the reader and writer: dropping the future stops
/// the stream after the last completed write.
pub async fn process_stream_async<C, W, R>(
    cipher: &mut C,
    mut output: W,
    mut input: R,
    chunk_size: usize,
) -> StreamResult<u64>
where
    C: StreamCipher,
    W: AsyncWrite + Unpin,
    R: AsyncRead + Unpin,
{
    validate::live("stream", cipher.is_disposed())?;
    validate::chunk_size("stream", chunk_size)?;

    let mut read_buf = SecretVec::zeroed(chunk_size);
    let mut write_buf = SecretVec::zeroed(chunk_size);
    let mut carry = KeystreamCarry::new(C::BLOCK_SIZE);
    let mut total = 0u64;
    let mut chunks = 0u64;

    loop {
        let n = fill_chunk(&mut input, read_buf.as_mut_slice()).await?;
        if n == 0 {
            break;
        }

        carry.combine(
            cipher,
            &mut write_buf.as_mut_slice()[..n],
            &read_buf.as_slice()[..n],
        )?;
        output.write_all(&write_buf.as_slice()[..n]).await?;

        total += n as u64;
        chunks += 1;
    }
    output.flush().await?;

    debug!(bytes = total, chunks, chunk_size, "async stream processed");
    Ok(total)
}

async fn fill_chunk<R: AsyncRead + Unpin>(input: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]).await {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
