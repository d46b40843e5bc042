pub mod block_quote;
pub mod code_fence;
pub mod header;
pub mod hrule;
pub mod html_block;
pub mod indented_code;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use header::Header;
pub use hrule::HRule;
pub use html_block::HtmlBlock;
pub use indented_code::IndentedCode;
