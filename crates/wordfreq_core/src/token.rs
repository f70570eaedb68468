pub type Token = String;

/// Splits text on runs of whitespace. Never yields empty tokens.
///
/// Separators are Unicode `White_Space` plus the ASCII information
/// separators U+001C..=U+001F.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_separator).filter(|token| !token.is_empty())
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
