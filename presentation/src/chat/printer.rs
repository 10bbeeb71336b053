//! Prints a streamed reply fragment by fragment

use crate::progress::reporter::WaitingIndicator;
use futures::StreamExt;
use std::io::Write;
use support_application::{ChatError, ChatResponseStream};

/// Write each fragment to `out` as it arrives and return the full reply.
///
/// The indicator is cleared before the first fragment or the first error,
/// and `label` is written just ahead of the first fragment. A newline ends
/// the reply once the stream completes. Write failures on `out` are ignored;
/// the reply is still collected.
pub async fn print_reply<W: Write>(
    mut stream: ChatResponseStream,
    out: &mut W,
    indicator: WaitingIndicator,
    label: &str,
) -> Result<String, ChatError> {
    let mut reply = String::new();
    let mut started = false;

    while let Some(item) = stream.next().await {
        indicator.finish();
        let fragment = item?;
        if !started {
            let _ = out.write_all(label.as_bytes());
            started = true;
        }
        let _ = out.write_all(fragment.as_bytes());
        let _ = out.flush();
        reply.push_str(&fragment);
    }

    indicator.finish();
    let _ = writeln!(out);
    let _ = out.flush();
    Ok(reply)
}
