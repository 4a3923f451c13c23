//! Built-in gate stages.

pub mod consent;
pub mod stock;
pub mod unit_range;

pub use consent::ConsentStage;
pub use stock::StockStage;
pub use unit_range::UnitRangeStage;
