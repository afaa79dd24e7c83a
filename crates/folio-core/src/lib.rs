pub mod constants;
pub mod content;
pub mod error;
pub mod frame;
pub mod inference;
pub mod layout;
pub mod particles;
pub mod resume;
pub mod reveal;
pub mod scrubber;
pub mod session;
pub mod signal;
pub mod starfield;
pub mod tone;
pub mod typewriter;

pub use error::*;
pub use frame::*;
pub use inference::*;
pub use layout::*;
pub use particles::*;
pub use resume::*;
pub use reveal::*;
pub use scrubber::*;
pub use session::*;
pub use signal::*;
pub use starfield::*;
pub use tone::*;
pub use typewriter::*;
