use rand::Rng;

/// Template for a random string. Tokens nest: a word is a repeated
/// character class, a slug could be a sequence of words and separators.
#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// Emitted as is.
    Text(String),
    /// One alternative, chosen uniformly. No alternatives emit nothing.
    OneOf(Vec<Token>),
    /// The inner token expanded a uniform number of times in `times`.
    Repeat { times: (usize, usize), token: Box<Token> },
    /// `count` code points drawn from `from..=to`.
    Chars { from: u32, to: u32, count: usize },
    /// Every token in order.
    Seq(Vec<Token>),
}

impl Token {
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn pick(alternatives: Vec<Token>) -> Self {
        Self::OneOf(alternatives)
    }

    pub fn repeat(min: usize, max: usize, token: Token) -> Self {
        Self::Repeat {
            times: (min.min(max), min.max(max)),
            token: Box::new(token),
        }
    }

    pub fn char_range(from: u32, to: u32, count: Option<usize>) -> Self {
        Self::Chars {
            from: from.min(to),
            to: from.max(to),
            count: count.unwrap_or(1),
        }
    }

    pub fn list(tokens: Vec<Token>) -> Self {
        Self::Seq(tokens)
    }

    /// Lowercase ASCII word of `min..=max` letters.
    pub fn word(min: usize, max: usize) -> Self {
        Self::repeat(min, max, Self::char_range('a'.into(), 'z'.into(), None))
    }

    fn write_to<R: Rng + ?Sized>(&self, rng: &mut R, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::OneOf(alternatives) if alternatives.is_empty() => {}
            Self::OneOf(alternatives) => {
                alternatives[rng.gen_range(0..alternatives.len())].write_to(rng, out)
            }
            Self::Repeat { times: (lo, hi), token } => {
                let (lo, hi) = ((*lo).min(*hi), (*lo).max(*hi));
                (0..rng.gen_range(lo..=hi)).for_each(|_| token.write_to(rng, out));
            }
            Self::Chars { from, to, count } => {
                let (lo, hi) = ((*from).min(*to), (*from).max(*to));
                out.extend(
                    (0..*count).map(|_| char::from_u32(rng.gen_range(lo..=hi)).unwrap_or('\u{FFFD}')),
                );
            }
            Self::Seq(tokens) => tokens.iter().for_each(|token| token.write_to(rng, out)),
        }
    }
}

/// Expands `token` into a string.
pub fn random_string<R: Rng + ?Sized>(rng: &mut R, token: &Token) -> String {
    let mut out = String::new();
    token.write_to(rng, &mut out);
    out
}

/// Short lowercase word with at most `max_len` letters (at least one).
pub fn word<R: Rng + ?Sized>(rng: &mut R, max_len: usize) -> String {
    random_string(rng, &Token::word(1, max_len.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::seeded;

    #[test]
    fn pick_chooses_one_alternative() {
        let fruit = Token::pick(vec![
            Token::literal("apple"),
            Token::literal("banana"),
            Token::literal("cherry"),
        ]);
        let mut rng = seeded(1);
        for _ in 0..20 {
            let s = random_string(&mut rng, &fruit);
            assert!(["apple", "banana", "cherry"].contains(&s.as_str()));
        }
    }

    #[test]
    fn empty_pick_is_empty() {
        assert_eq!(random_string(&mut seeded(1), &Token::pick(vec![])), "");
    }

    #[test]
    fn char_range_counts_code_points() {
        let upper = Token::char_range('Z'.into(), 'A'.into(), Some(3));
        let s = random_string(&mut seeded(2), &upper);
        assert_eq!(s.chars().count(), 3);
        assert!(s.chars().all(|c| c.is_ascii_uppercase()));
    }

    #[test]
    fn word_is_lowercase_and_bounded() {
        let mut rng = seeded(3);
        for _ in 0..50 {
            let w = word(&mut rng, 6);
            assert!((1..=6).contains(&w.len()));
            assert!(w.chars().all(|c| c.is_ascii_lowercase()));
        }
    }
}
