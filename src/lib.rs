#![forbid(missing_docs)]
//! # `rtfscan`
//! The `rtfscan` crate is a lexical scanner for Rich Text Format (RTF) documents.
//! It is designed to be used by an RTF reader or converter that needs to split a document into
//! braces, control words, control symbols, hex escapes and text.
//!
//! RTF embeds font files in groups introduced by one of the control words `\fname`,
//! `\fontemb`, `\fontfile` or `\falt`. The rest of such a group is opaque data that must not be
//! scanned as markup. The scanner therefore switches into a font data mode on these control
//! words and tracks the brace nesting inside the data with a [`NestedModeTracker`]. The brace
//! that closes the group the control word lives in pops the font data mode again.
//!
//! # Example
//! ```rust
//! use rtfscan::{RtfScannerBuilder, TokenKind};
//!
//! const INPUT: &[u8] = br"{\rtf1{\fontemb{\x41\x42}}\par}";
//!
//! fn main() {
//!     let scanner = RtfScannerBuilder::new().build();
//!     for token in scanner.tokens(INPUT) {
//!         let token = token.expect("Scanner error");
//!         println!(
//!             "{:?}: '{}'",
//!             token.kind(),
//!             String::from_utf8_lossy(&INPUT[token.range()])
//!         );
//!     }
//! }
//! ```
//! The output of the example is:
//! ```text
//! GroupStart: '{'
//! ControlWord: '\rtf1'
//! GroupStart: '{'
//! ControlWord: '\fontemb'
//! GroupStart: '{'
//! FontData: '\x41\x42'
//! GroupEnd: '}'
//! GroupEnd: '}'
//! ControlWord: '\par'
//! GroupEnd: '}'
//! ```
//!
//! # Crate features
//! - `serde`: Enabled by default. Derives `Serialize` and `Deserialize` for the token,
//!   span, position and mode types.

/// Module with the control words that start font data.
mod control_word;
pub use control_word::{is_known, KNOWN_CONTROL_WORDS};

/// Module with error definitions
mod errors;
pub use errors::{Result, RtfScanError, RtfScanErrorKind};

/// The module with internal implementation details.
mod internal;

/// Module with the nesting tracker of the font data mode.
mod nested_mode;
pub use nested_mode::{BraceOutcome, NestedModeTracker};

/// Module that provides a position type
mod position;
pub use position::{Position, PositionProvider};

/// The module with the scanner modes and the mode stack.
mod scan_mode;
pub use scan_mode::{ModeStack, ScanMode, ScanModeSwitcher};

/// The module with the scanner.
mod scanner;
pub use scanner::{read_input, RtfScanner};

/// The module with the scanner builder.
mod scanner_builder;
pub use scanner_builder::RtfScannerBuilder;

/// Module that provides a Span type
mod span;
pub use span::Span;

/// Module that provides the Token types
mod token;
pub use token::{Token, TokenExt, TokenKind};

/// Module that provides the Tokens iterator
mod tokens;
pub use tokens::{PeekResult, Tokens};

/// Module that provides a WithPositions type
mod with_positions;
pub use with_positions::{TokenExtIterator, WithPositions};
