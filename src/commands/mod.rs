pub mod browse;
pub mod draw;
pub mod scan;
pub mod show;

pub use browse::*;
pub use draw::*;
pub use scan::*;
pub use show::*;
