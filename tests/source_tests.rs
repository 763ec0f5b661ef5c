use lumen::syntax::{SourceError, SourceFile};

#[cfg(test)]
mod tests {
    use super::*;

    fn mixed_breaks() -> SourceFile {
        // line 0: "aaaa\n", line 1: "bbbb\r", line 2: "cccc\r\n", line 3: "dddd"
        SourceFile::new("aaaa\nbbbb\rcccc\r\ndddd", None)
    }

    #[test]
    fn empty_file() {
        let file = SourceFile::named("", "EMPTY");
        assert_eq!(file.contents(), "");
        assert_eq!(file.len(), 0);
        assert_eq!(file.url(), Some("EMPTY"));
        assert_eq!(file.compute_line_and_column(0), Ok((0, 0)));
    }

    #[test]
    fn rejects_invalid_offsets() {
        let file = SourceFile::new("test", None);
        assert_eq!(
            file.compute_line_and_column(5),
            Err(SourceError::OffsetOutOfRange {
                offset: 5,
                length: 4
            })
        );
        assert_eq!(
            file.span(2, 1).map(|span| span.text().to_string()),
            Err(SourceError::InvertedRange { start: 2, end: 1 })
        );
        assert!(file.span(0, 5).is_err());
        assert_eq!(file.compute_line_and_column(4), Ok((0, 4)));
    }

    #[test]
    fn line_zero() {
        let file = mixed_breaks();
        let aaaa = file.span(0, 4).unwrap();
        assert_eq!((aaaa.text(), aaaa.line(), aaaa.column()), ("aaaa", 0, 0));
        let aa = file.span(2, 4).unwrap();
        assert_eq!((aa.text(), aa.line(), aa.column()), ("aa", 0, 2));
    }

    #[test]
    fn line_one() {
        let file = mixed_breaks();
        let bbb = file.span(5, 8).unwrap();
        assert_eq!((bbb.text(), bbb.line(), bbb.column()), ("bbb", 1, 0));
        let bb = file.span(7, 9).unwrap();
        assert_eq!((bb.text(), bb.line(), bb.column()), ("bb", 1, 2));
    }

    #[test]
    fn lone_carriage_return_breaks_a_line() {
        let file = mixed_breaks();
        let cc = file.span(12, 14).unwrap();
        assert_eq!((cc.text(), cc.line(), cc.column()), ("cc", 2, 2));
    }

    #[test]
    fn crlf_counts_once() {
        let file = mixed_breaks();
        assert_eq!(file.line_starts(), &[5, 10, 16]);
        let d = file.span(19, 20).unwrap();
        assert_eq!((d.text(), d.line(), d.column()), ("d", 3, 3));
    }

    #[test]
    fn one_line_file() {
        let file = SourceFile::new("func main() {}", None);
        let span = file.span(12, 13).unwrap();
        assert_eq!((span.line(), span.column()), (0, 12));
    }

    #[test]
    fn lookup_agrees_with_a_direct_scan() {
        let text = "ab\ncd\r\n\nefg\rh";
        let file = SourceFile::new(text, None);
        let (mut line, mut column) = (0, 0);
        let bytes = text.as_bytes();
        for offset in 0..=text.len() {
            assert_eq!(
                file.compute_line_and_column(offset),
                Ok((line, column)),
                "offset {offset}"
            );
            match bytes.get(offset) {
                Some(b'\n') => (line, column) = (line + 1, 0),
                Some(b'\r') if bytes.get(offset + 1) != Some(&b'\n') => {
                    (line, column) = (line + 1, 0)
                }
                _ => column += 1,
            }
        }
    }

    #[test]
    fn span_display_names_the_file() {
        let file = SourceFile::named("let x\nlet y", "main.lm");
        let span = file.span(10, 11).unwrap();
        assert_eq!(span.to_string(), "main.lm:1:4 \"y\"");
    }

    #[test]
    fn clones_share_text() {
        let file = SourceFile::named("abc", "a.lm");
        let copy = file.clone();
        assert_eq!(copy.contents(), "abc");
        assert_eq!(copy.line_starts(), file.line_starts());
    }
}
