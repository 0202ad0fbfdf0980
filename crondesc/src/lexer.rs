use crate::error::Span;

/// One whitespace-delimited field of a raw cron expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: Span,
}

pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn tokenize(&mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            if self.pos >= self.input.len() {
                break;
            }
            let start = self.pos;
            self.skip_field();
            tokens.push(Token {
                text: &self.input[start..self.pos],
                span: Span::new(start, self.pos),
            });
        }
        tokens
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    fn skip_field(&mut self) {
        let rest = self.rest();
        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        self.pos += end;
    }
}

/// Split `input` into field tokens.
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    Lexer::new(input).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_splits_on_any_whitespace() {
        assert_eq!(texts("0 7\t* *  * "), vec!["0", "7", "*", "*", "*"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n").is_empty());
    }

    #[test]
    fn test_spans_point_into_input() {
        let input = "  */5 MON-FRI";
        let tokens = tokenize(input);
        assert_eq!(tokens[0].span, Span::new(2, 5));
        assert_eq!(&input[tokens[1].span.start..tokens[1].span.end], "MON-FRI");
    }

    #[test]
    fn test_unicode_whitespace() {
        assert_eq!(texts("1\u{3000}2"), vec!["1", "2"]);
    }
}
