pub mod cursor;
pub mod tokenizer;

pub use considering_common::{ConsiderError, Expectation, Sequence, Span};
pub use cursor::Cursor;
pub use tokenizer::{split_lines, tokenize};
