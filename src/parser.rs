// src/parser.rs

/// One piece of a scanned template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    /// `${name}`; `raw` is the full token including the delimiters.
    Placeholder { name: &'a str, raw: &'a str },
}

pub struct Parser<'a> {
    s: &'a str,
    i: usize,
}

impl<'a> Parser<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Split the whole input into literal runs and placeholders.
    /// A `${` with no closing `}` after it stays literal, as does everything after it.
    pub fn parse_segments(&mut self) -> Vec<Segment<'a>> {
        let mut out = Vec::new();
        let mut lit_start = self.i;
        while !self.eof() {
            if !self.peek_str("${") {
                self.advance();
                continue;
            }
            let open = self.i;
            self.i += 2;
            match self.capture_until('}') {
                Some(name) => {
                    self.consume_char('}');
                    if open > lit_start {
                        out.push(Segment::Literal(&self.s[lit_start..open]));
                    }
                    out.push(Segment::Placeholder {
                        name,
                        raw: &self.s[open..self.i],
                    });
                    lit_start = self.i;
                }
                None => {
                    self.i = self.s.len();
                }
            }
        }
        if self.s.len() > lit_start {
            out.push(Segment::Literal(&self.s[lit_start..]));
        }
        out
    }

    /// Consume up to (not including) `end`. Returns `None` and leaves the
    /// cursor untouched when `end` never appears.
    pub fn capture_until(&mut self, end: char) -> Option<&'a str> {
        let start = self.i;
        let offset = self.s[start..].find(end)?;
        self.i = start + offset;
        Some(&self.s[start..self.i])
    }

    pub fn consume_char(&mut self, c: char) -> bool {
        if self.peek_char() == Some(c) {
            self.i += c.len_utf8();
            true
        } else {
            false
        }
    }

    pub fn peek_char(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    pub fn peek_str(&self, lit: &str) -> bool {
        self.s[self.i..].starts_with(lit)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            self.i += c.len_utf8();
        }
    }

    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }
}
