//! Newline-delimited JSON (NDJSON) streaming parser.
//!
//! The local model server streams one JSON object per line. This module
//! turns a reqwest response body into a lazy stream of parsed objects.

use futures_util::{Stream, StreamExt};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::io::StreamReader;

use crate::BackendError;

/// Parse an NDJSON body from a reqwest response, one item per non-blank line.
pub fn parse_ndjson_stream(
    response: reqwest::Response,
) -> impl Stream<Item = Result<serde_json::Value, BackendError>> + Send {
    let byte_stream = response
        .bytes_stream()
        .map(|result| result.map_err(std::io::Error::other));
    ndjson_lines(tokio::io::BufReader::new(StreamReader::new(byte_stream)))
}

/// Parse NDJSON from any buffered reader.
pub(crate) fn ndjson_lines<R>(
    reader: R,
) -> impl Stream<Item = Result<serde_json::Value, BackendError>> + Send
where
    R: AsyncBufRead + Unpin + Send,
{
    futures_util::stream::unfold(reader.lines(), |mut lines| async move {
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let item = serde_json::from_str(line)
                        .map_err(|e| BackendError::Stream(format!("malformed stream line: {e}")));
                    return Some((item, lines));
                }
                Ok(None) => return None,
                Err(e) => return Some((Err(BackendError::Stream(e.to_string())), lines)),
            }
        }
    })
}
