//! Server-sent events framing for streamed completions.
//!
//! Network chunks do not align with event boundaries, so bytes are buffered
//! until a full line is available. Only `data:` fields are surfaced.

/// One decoded `data:` payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseData {
    Json(String),
    /// The `[DONE]` sentinel
    Done,
}

#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk and return every payload completed by it.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseData> {
        self.buffer.extend_from_slice(chunk);

        let mut out = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            if let Some(data) = Self::parse_line(&line) {
                out.push(data);
            }
        }
        out
    }

    /// Whatever remains after the connection closed without a final newline.
    pub fn finish(&mut self) -> Option<SseData> {
        let rest = std::mem::take(&mut self.buffer);
        Self::parse_line(&rest)
    }

    fn parse_line(raw: &[u8]) -> Option<SseData> {
        let line = String::from_utf8_lossy(raw);
        let line = line.trim_end_matches(['\r', '\n']);
        let data = line.strip_prefix("data:")?;
        let data = data.strip_prefix(' ').unwrap_or(data);
        if data.trim() == "[DONE]" {
            Some(SseData::Done)
        } else if data.trim().is_empty() {
            None
        } else {
            Some(SseData::Json(data.to_string()))
        }
    }
}
