//! One entry point per subcommand. Each validates its paths, decodes inputs,
//! calls into `image_ops`, and writes PNG output.

pub mod merge;
pub mod split;
pub mod tile;

pub use merge::run_merge;
pub use split::run_split;
pub use tile::{TileSource, run_tile};
