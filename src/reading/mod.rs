pub mod state;
pub mod token;
pub mod window;

pub use state::{CountError, ReadingState, DISPLAY_COUNT_RANGE, PAD_COUNT_RANGE};
pub use token::split_words;
pub use window::{compute_window, Window};
