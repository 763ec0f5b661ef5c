use lumen::syntax::{Scanner, SourceFile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_length() {
        let file = SourceFile::new("123", None);
        let scanner = Scanner::new(&file);
        assert_eq!(scanner.len(), 3);
        assert!(!scanner.is_empty());
    }

    #[test]
    fn advance_peek_and_substring() {
        let file = SourceFile::new("123", None);
        let mut scanner = Scanner::new(&file);
        assert_eq!(scanner.position(), 0);
        assert!(scanner.has_next());
        assert_eq!(scanner.peek(0), Some('1'));
        assert_eq!(scanner.peek(2), Some('3'));
        assert_eq!(scanner.peek(3), None);
        assert_eq!(scanner.advance(), Some('1'));
        assert_eq!(scanner.position(), 1);

        assert_eq!(scanner.substring(1, 3), "23");
        assert_eq!(scanner.substring(1, 2), "2");
        assert_eq!(scanner.position(), 1);
    }

    #[test]
    fn eat_only_moves_on_success() {
        let file = SourceFile::new("123", None);
        let mut scanner = Scanner::new(&file);
        assert!(scanner.eat('1'));
        assert!(!scanner.eat('1'));
        assert!(scanner.eat(|c: char| c == '2'));
        assert!(!scanner.eat(|c: char| c == '1'));
        assert!(scanner.eat("3"));
        assert!(!scanner.has_next());
        assert_eq!(scanner.advance(), None);
    }

    #[test]
    fn eat_string_requires_the_whole_pattern() {
        let file = SourceFile::new("->x", None);
        let mut scanner = Scanner::new(&file);
        assert!(!scanner.eat("->y"));
        assert_eq!(scanner.position(), 0);
        assert!(scanner.eat("->"));
        assert_eq!(scanner.position(), 2);
    }

    #[test]
    fn eat_while_stops_at_first_mismatch() {
        let file = SourceFile::new("abc123", None);
        let mut scanner = Scanner::new(&file);
        scanner.eat_while(|c| c.is_ascii_alphabetic());
        assert_eq!(scanner.position(), 3);
        assert_eq!(scanner.peek(0), Some('1'));
    }

    #[test]
    fn multibyte_characters_advance_by_their_width() {
        let file = SourceFile::new("éa", None);
        let mut scanner = Scanner::new(&file);
        assert_eq!(scanner.advance(), Some('é'));
        assert_eq!(scanner.position(), 2);
        assert_eq!(scanner.substring(0, 2), "é");
    }
}
