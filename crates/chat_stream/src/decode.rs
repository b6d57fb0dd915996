//! Line decoder - splits raw transport buffers into complete text lines
//!
//! The transport delivers arbitrary byte buffers; event boundaries are `\n`.
//! Bytes after the last delimiter stay buffered until a later push completes
//! them, so a multi-byte character split across buffers is never decoded
//! half-way.

use bytes::BytesMut;

/// Stateful `\n`-delimited line splitter over a byte stream.
#[derive(Debug, Default)]
pub struct LineDecoder {
    buf: BytesMut,
}

impl LineDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one transport buffer, returning every line completed by it.
    ///
    /// Lines are decoded lossily, matching browser `TextDecoder` behavior:
    /// invalid sequences become U+FFFD instead of failing the stream.
    pub fn push(&mut self, bytes: &[u8]) -> Vec<String> {
        self.buf.extend_from_slice(bytes);

        let mut lines = Vec::new();
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line = self.buf.split_to(pos + 1);
            lines.push(String::from_utf8_lossy(&line[..line.len() - 1]).into_owned());
        }
        lines
    }

    /// Drain whatever remains as one final candidate line, delimiter or not,
    /// so an unterminated trailing event is not silently dropped.
    pub fn finish(&mut self) -> Option<String> {
        if self.buf.is_empty() {
            return None;
        }
        let rest = self.buf.split();
        Some(String::from_utf8_lossy(&rest).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_lines_come_out_in_order() {
        let mut decoder = LineDecoder::new();
        let lines = decoder.push(b"first\nsecond\n");
        assert_eq!(lines, vec!["first", "second"]);
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn partial_line_is_carried_across_pushes() {
        let mut decoder = LineDecoder::new();
        assert!(decoder.push(b"hel").is_empty());
        assert_eq!(decoder.push(b"lo\nwor"), vec!["hello"]);
        assert_eq!(decoder.push(b"ld\n"), vec!["world"]);
    }

    #[test]
    fn multi_byte_character_split_across_buffers_survives() {
        // "héllo" with the é (0xC3 0xA9) cut between buffers
        let mut decoder = LineDecoder::new();
        assert!(decoder.push(&[b'h', 0xC3]).is_empty());
        let lines = decoder.push(&[0xA9, b'l', b'l', b'o', b'\n']);
        assert_eq!(lines, vec!["héllo"]);
    }

    #[test]
    fn finish_emits_unterminated_tail() {
        let mut decoder = LineDecoder::new();
        assert_eq!(decoder.push(b"done\ntail"), vec!["done"]);
        assert_eq!(decoder.finish().as_deref(), Some("tail"));
        assert_eq!(decoder.finish(), None);
    }

    #[test]
    fn empty_lines_are_preserved() {
        let mut decoder = LineDecoder::new();
        assert_eq!(decoder.push(b"\n\na\n"), vec!["", "", "a"]);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let mut decoder = LineDecoder::new();
        let lines = decoder.push(&[b'a', 0xFF, b'b', b'\n']);
        assert_eq!(lines, vec!["a\u{FFFD}b"]);
    }
}
