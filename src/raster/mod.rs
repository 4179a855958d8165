mod alpha_mask;

pub use alpha_mask::{AlphaMask, RowOrder, DEFAULT_THRESHOLD};
