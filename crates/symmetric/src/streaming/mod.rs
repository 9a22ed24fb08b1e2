//! Streaming engines
//!
//! Both engines read the input in chunks of `chunk_size` bytes, XOR each chunk
//! with keystream and write exactly the bytes read. Keystream left over from a
//! partial block at the end of one chunk is used for the start of the next, so
//! the output equals one [`StreamCipher::combine`] over the whole input for any
//! nonzero chunk size and however the source fragments its reads.
//!
//! The asynchronous engine suspends only while reading or writing. Keystream
//! for a chunk is generated and consumed in one go between suspensions.

mod blocking;
mod carry;
#[cfg(feature = "async")]
mod nonblocking;

use std::io::{Read, Write};

use dchacha_api::StreamCipher;

use crate::error::StreamResult;

pub use blocking::process_stream;
#[cfg(feature = "async")]
pub use nonblocking::process_stream_async;

#[cfg(feature = "async")]
use core::future::Future;
#[cfg(feature = "async")]
use tokio::io::{AsyncRead, AsyncWrite};

/// Stream entry points for every [`StreamCipher`]
///
/// Each method returns the number of bytes processed.
pub trait StreamingCipher: StreamCipher + Sized {
    /// Encrypt everything `input` yields into `output`
    fn encrypt_stream<W: Write, R: Read>(
        &mut self,
        output: W,
        input: R,
        chunk_size: usize,
    ) -> StreamResult<u64> {
        process_stream(self, output, input, chunk_size)
    }

    /// Decrypt everything `input` yields into `output`
    fn decrypt_stream<W: Write, R: Read>(
        &mut self,
        output: W,
        input: R,
        chunk_size: usize,
    ) -> StreamResult<u64> {
        process_stream(self, output, input, chunk_size)
    }

    /// Asynchronous [`StreamingCipher::encrypt_stream`]
    #[cfg(feature = "async")]
    fn encrypt_stream_async<'a, W, R>(
        &'a mut self,
        output: W,
        input: R,
        chunk_size: usize,
    ) -> impl Future<Output = StreamResult<u64>> + 'a
    where
        W: AsyncWrite + Unpin + 'a,
        R: AsyncRead + Unpin + 'a,
    {
        process_stream_async(self, output, input, chunk_size)
    }

    /// Asynchronous [`StreamingCipher::decrypt_stream`]
    #[cfg(feature = "async")]
    fn decrypt_stream_async<'a, W, R>(
        &'a mut self,
        output: W,
        input: R,
        chunk_size: usize,
    ) -> impl Future<Output = StreamResult<u64>> + 'a
    where
        W: AsyncWrite + Unpin + 'a,
        R: AsyncRead + Unpin + 'a,
    {
        process_stream_async(self, output, input, chunk_size)
    }
}

impl<C: StreamCipher> StreamingCipher for C {}
