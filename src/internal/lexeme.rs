use crate::{Result, RtfScanError, RtfScanErrorKind, ScanMode, TokenKind};

/// The longest keyword of a control word. Letters beyond are scanned as text.
const MAX_KEYWORD_LEN: usize = 32;

/// A recognized lexeme: its kind and its exclusive end offset.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Lexeme {
    pub(crate) kind: TokenKind,
    pub(crate) end: usize,
}

impl Lexeme {
    #[inline]
    fn new(kind: TokenKind, end: usize) -> Self {
        Self { kind, end }
    }
}

/// Recognizes the lexeme starting at `pos` in the given mode.
/// Returns `Ok(None)` at the end of the input.
pub(crate) fn lex_at(input: &[u8], pos: usize, mode: ScanMode) -> Result<Option<Lexeme>> {
    let Some(&first) = input.get(pos) else {
        return Ok(None);
    };
    let lexeme = match (mode, first) {
        (_, b'{') => Lexeme::new(TokenKind::GroupStart, pos + 1),
        (_, b'}') => Lexeme::new(TokenKind::GroupEnd, pos + 1),
        (ScanMode::FontData, _) => Lexeme::new(TokenKind::FontData, font_data_end(input, pos)),
        (ScanMode::Default, b'\\') => lex_control(input, pos)?,
        (ScanMode::Default, b'\r') if input.get(pos + 1) == Some(&b'\n') => {
            Lexeme::new(TokenKind::Newline, pos + 2)
        }
        (ScanMode::Default, b'\r' | b'\n') => Lexeme::new(TokenKind::Newline, pos + 1),
        (ScanMode::Default, _) => Lexeme::new(TokenKind::Text, text_end(input, pos)),
    };
    Ok(Some(lexeme))
}

// `input[pos]` is a backslash.
fn lex_control(input: &[u8], pos: usize) -> Result<Lexeme> {
    let Some(&next) = input.get(pos + 1) else {
        return Err(RtfScanError::new(RtfScanErrorKind::UnexpectedEndOfInput {
            offset: pos,
        }));
    };
    if next.is_ascii_alphabetic() {
        return Ok(Lexeme::new(TokenKind::ControlWord, control_word_end(input, pos + 1)));
    }
    if next == b'\'' {
        return match (input.get(pos + 2), input.get(pos + 3)) {
            (Some(h), Some(l)) if h.is_ascii_hexdigit() && l.is_ascii_hexdigit() => {
                Ok(Lexeme::new(TokenKind::HexEscape, pos + 4))
            }
            (Some(h), None) if h.is_ascii_hexdigit() => Err(RtfScanError::new(
                RtfScanErrorKind::UnexpectedEndOfInput { offset: pos },
            )),
            (None, _) => Err(RtfScanError::new(
                RtfScanErrorKind::UnexpectedEndOfInput { offset: pos },
            )),
            _ => Err(RtfScanError::new(RtfScanErrorKind::InvalidHexEscape {
                offset: pos,
            })),
        };
    }
    Ok(Lexeme::new(TokenKind::ControlSymbol, pos + 2))
}

// Keyword, optional signed parameter, optional space delimiter.
fn control_word_end(input: &[u8], keyword_start: usize) -> usize {
    let mut end = keyword_start;
    while end < input.len()
        && end - keyword_start < MAX_KEYWORD_LEN
        && input[end].is_ascii_alphabetic()
    {
        end += 1;
    }
    let digits_start = match input.get(end) {
        Some(b'-') if input.get(end + 1).is_some_and(u8::is_ascii_digit) => end + 1,
        _ => end,
    };
    let digits_end = digits_start
        + input[digits_start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
    if digits_end > digits_start {
        end = digits_end;
    }
    if input.get(end) == Some(&b' ') {
        end += 1;
    }
    end
}

fn text_end(input: &[u8], pos: usize) -> usize {
    pos + input[pos..]
        .iter()
        .take_while(|b| !matches!(**b, b'{' | b'}' | b'\\' | b'\r' | b'\n'))
        .count()
}

// Escaped bytes belong to the data, so `\{`, `\}` and `\\` never end a run.
fn font_data_end(input: &[u8], pos: usize) -> usize {
    let mut end = pos;
    while let Some(&b) = input.get(end) {
        match b {
            b'{' | b'}' => break,
            b'\\' => end = (end + 2).min(input.len()),
            _ => end += 1,
        }
    }
    end
}
