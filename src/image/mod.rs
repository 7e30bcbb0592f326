//! Single-channel 8-bit images: a borrowed view used by the filter, the owned
//! buffer it produces, and file I/O helpers around both.
pub mod io;
pub mod traits;
pub mod u8;

pub use self::traits::ImageView;
pub use self::u8::{GrayImageU8, ImageU8};
