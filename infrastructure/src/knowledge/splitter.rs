//! Paragraph-aware text splitting

/// Splits text into chunks of at most `chunk_size` characters.
///
/// Paragraphs (separated by blank lines) are packed together while they fit.
/// An oversized paragraph is broken at word boundaries. Each chunk after the
/// first starts with up to `chunk_overlap` trailing characters of the
/// previous one, trimmed to a word boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

impl TextSplitter {
    /// `chunk_size` is raised to 1; `chunk_overlap` is capped below it.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Self {
        let chunk_size = chunk_size.max(1);
        Self {
            chunk_size,
            chunk_overlap: chunk_overlap.min(chunk_size - 1),
        }
    }

    pub fn split(&self, text: &str) -> Vec<String> {
        // leave room for the overlap prefix and its separator
        let piece_limit = self
            .chunk_size
            .saturating_sub(self.chunk_overlap + 1)
            .max(1);

        let mut chunks = Vec::new();
        let mut current = String::new();

        for paragraph in paragraphs(text) {
            for (i, piece) in break_paragraph(&paragraph, piece_limit).into_iter().enumerate() {
                let separator = if i == 0 { "\n\n" } else { " " };
                if current.is_empty() {
                    current = piece;
                } else if char_len(&current) + separator.len() + char_len(&piece) <= self.chunk_size
                {
                    current.push_str(separator);
                    current.push_str(&piece);
                } else {
                    let tail = self.overlap_tail(&current);
                    chunks.push(std::mem::take(&mut current));
                    current = if tail.is_empty() {
                        piece
                    } else {
                        format!("{} {}", tail, piece)
                    };
                }
            }
        }

        if !current.is_empty() {
            chunks.push(current);
        }
        chunks
    }

    fn overlap_tail(&self, chunk: &str) -> String {
        let total = char_len(chunk);
        if self.chunk_overlap == 0 || total == 0 {
            return String::new();
        }

        let start = total.saturating_sub(self.chunk_overlap);
        let byte_start = chunk
            .char_indices()
            .nth(start)
            .map(|(i, _)| i)
            .unwrap_or(0);
        let mut tail = &chunk[byte_start..];

        let mid_word = start > 0 && !chunk[..byte_start].ends_with(char::is_whitespace);
        if mid_word {
            if let Some(i) = tail.find(char::is_whitespace) {
                tail = &tail[i..];
            }
        }

        tail.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

/// Non-empty paragraphs with their lines joined by single spaces.
fn paragraphs(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut lines: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !lines.is_empty() {
                out.push(lines.join(" "));
                lines.clear();
            }
        } else {
            lines.push(line);
        }
    }
    if !lines.is_empty() {
        out.push(lines.join(" "));
    }
    out
}

fn break_paragraph(paragraph: &str, limit: usize) -> Vec<String> {
    if char_len(paragraph) <= limit {
        return vec![paragraph.to_string()];
    }

    let mut out = Vec::new();
    let mut current = String::new();

    for word in paragraph.split_whitespace() {
        let word_len = char_len(word);
        if word_len > limit {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            let chars: Vec<char> = word.chars().collect();
            out.extend(chars.chunks(limit).map(|c| c.iter().collect::<String>()));
            continue;
        }

        if !current.is_empty() && char_len(&current) + 1 + word_len > limit {
            out.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_chunk() {
        let splitter = TextSplitter::new(200, 20);
        let chunks = splitter.split("First paragraph.\n\nSecond paragraph.");
        assert_eq!(chunks, vec!["First paragraph.\n\nSecond paragraph."]);
    }

    #[test]
    fn test_empty_text() {
        assert!(TextSplitter::new(100, 10).split("  \n\n \n").is_empty());
    }

    #[test]
    fn test_paragraph_lines_are_joined() {
        let chunks = TextSplitter::new(100, 0).split("one\ntwo\r\nthree");
        assert_eq!(chunks, vec!["one two three"]);
    }

    #[test]
    fn test_chunks_respect_size() {
        let text = (0..40)
            .map(|i| format!("Sentence number {} about the refund policy.", i))
            .collect::<Vec<_>>()
            .join(" ");
        let splitter = TextSplitter::new(120, 30);
        let chunks = splitter.split(&text);

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(char_len(chunk) <= 120, "chunk too long: {}", chunk);
        }
    }

    #[test]
    fn test_overlap_repeats_previous_tail() {
        let text = "alpha bravo charlie delta\n\necho foxtrot golf hotel";
        let chunks = TextSplitter::new(30, 12).split(text);

        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], "alpha bravo charlie delta");
        // tail of the first chunk, cut at a word boundary
        assert!(chunks[1].starts_with("delta echo"));
    }

    #[test]
    fn test_no_overlap() {
        let text = "alpha bravo charlie delta\n\necho foxtrot golf hotel";
        let chunks = TextSplitter::new(30, 0).split(text);
        assert_eq!(chunks[1], "echo foxtrot golf hotel");
    }

    #[test]
    fn test_long_word_is_hard_split() {
        let chunks = TextSplitter::new(5, 0).split("abcdefghijkl");
        assert_eq!(chunks, vec!["abcd", "efgh", "ijkl"]);
    }

    #[test]
    fn test_overlap_capped_below_size() {
        let splitter = TextSplitter::new(10, 50);
        assert_eq!(splitter, TextSplitter::new(10, 9));
    }
}
