/// Module with the recognizers of the single lexemes.
mod lexeme;
pub(crate) use lexeme::lex_at;

/// Module with the mode and nesting state of a scan.
mod scan_state;
pub(crate) use scan_state::ScanState;

/// Module with the scan loop.
mod tokens_impl;
pub(crate) use tokens_impl::TokensImpl;
