pub mod charts;
pub mod history;
pub mod performance;
pub mod profit_factor;
pub mod report;
pub mod summary;

pub use charts::*;
pub use history::*;
pub use performance::*;
pub use profit_factor::*;
pub use report::*;
pub use summary::*;
