use compio::buf::BufResult;
use compio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use snafu::{ResultExt, Snafu};

/// Literal delimiter separating messages on the byte stream.
pub const DELIMITER: &[u8] = b"\n\n";

const READ_CHUNK_SIZE: usize = 4096;

/// Accumulates bytes from the underlying stream and yields one complete
/// frame at a time. The undelimited prefix stays buffered in full until its
/// delimiter arrives; there is no backpressure beyond delimiter scanning.
pub struct FrameReader<R> {
    inner: R,
    buffer: Vec<u8>,
}

impl<R: AsyncRead> FrameReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buffer: Vec::new(),
        }
    }

    /// Returns the next frame without its delimiter, or `None` at end of
    /// stream. An undelimited tail is dropped when the stream ends.
    pub async fn next_frame(&mut self) -> Result<Option<Vec<u8>>, FrameError> {
        loop {
            if let Some(index) = find_delimiter(&self.buffer) {
                let rest = self.buffer.split_off(index + DELIMITER.len());
                let mut frame = std::mem::replace(&mut self.buffer, rest);
                frame.truncate(index);
                return Ok(Some(frame));
            }

            let BufResult(result, chunk) = self
                .inner
                .read(Vec::with_capacity(READ_CHUNK_SIZE))
                .await;
            let read = result.context(ReadSnafu)?;
            if read == 0 {
                return Ok(None);
            }
            self.buffer.extend_from_slice(&chunk);
        }
    }
}

fn find_delimiter(buffer: &[u8]) -> Option<usize> {
    buffer
        .windows(DELIMITER.len())
        .position(|window| window == DELIMITER)
}

/// Writes one frame followed by the delimiter and flushes, so the peer never
/// observes a partial message.
pub async fn write_frame<W: AsyncWrite>(writer: &mut W, frame: Vec<u8>) -> Result<(), FrameError> {
    let BufResult(result, _) = writer.write_all(frame).await;
    result.context(WriteSnafu)?;
    let BufResult(result, _) = writer.write_all(DELIMITER).await;
    result.context(WriteSnafu)?;
    writer.flush().await.context(WriteSnafu)?;
    Ok(())
}

#[derive(Debug, Snafu)]
pub enum FrameError {
    #[snafu(display("Failed to read from the bridge stream"))]
    ReadError { source: std::io::Error },
    #[snafu(display("Failed to write to the bridge stream"))]
    WriteError { source: std::io::Error },
}
