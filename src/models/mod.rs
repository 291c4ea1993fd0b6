pub mod chart;
pub mod liked;
pub mod product;
pub mod record;
pub mod trend;

pub use chart::*;
pub use liked::*;
pub use product::*;
pub use record::*;
pub use trend::*;
