//! Word-boundary detection and token extraction around the caret.

use ropey::RopeSlice;

/// The in-progress word ending at the caret. Char offsets; `end` is always
/// the caret the token was extracted for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
  pub text:  String,
  pub start: usize,
  pub end:   usize,
}

impl Token {
  pub fn is_empty(&self) -> bool {
    self.text.is_empty()
  }

  pub fn len_chars(&self) -> usize {
    self.text.chars().count()
  }
}

/// Whether `c` terminates a word. Whitespace always splits; otherwise any
/// non-alphanumeric splits except the continuation characters `_ { } % $`
/// used in placeholder syntax.
pub fn is_word_breaker(c: char) -> bool {
  c.is_whitespace() || (!c.is_alphanumeric() && !matches!(c, '_' | '{' | '}' | '%' | '$'))
}

/// Extract the word ending at `caret` by scanning backward until a breaker
/// or the start of the buffer. Returns `None` when `caret` lies past the end
/// of the buffer (a stale offset from an interleaved edit); an empty token
/// is a valid result.
pub fn token_at(text: RopeSlice<'_>, caret: usize) -> Option<Token> {
  if caret > text.len_chars() {
    return None;
  }

  let mut start = caret;
  for i in (0..caret).rev() {
    if is_word_breaker(text.char(i)) {
      break;
    }
    start = i;
  }

  Some(Token {
    text:  text.slice(start..caret).chars().collect(),
    start,
    end:   caret,
  })
}
