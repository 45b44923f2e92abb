//! Tokenizer module.
//!
//! This module organizes the tokenizer into smaller, focused components:
//! - `core` - Tokenizer struct and the token driver
//! - `dispatch` - First-byte dispatch table
//! - `identifier` - Identifier lexing
//! - `number` - Integer and floating constants, sign scanners
//! - `string` - String and character literals, escape sequences
//! - `keyword` - Keyword set

mod core;
mod dispatch;
mod identifier;
mod keyword;
mod number;
mod string;

pub use core::{Tokenizer, Tokens};
pub use dispatch::{scan_bad_char, scan_end, ScanFn, ScanTable, Scanner};
pub use identifier::scan_identifier;
pub use keyword::KeywordSet;
pub use number::{scan_float, scan_minus, scan_number, scan_plus};
pub use string::{eat_escape_sequence, scan_char, scan_string};
