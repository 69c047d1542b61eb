//! Position sizing arithmetic.
//!
//! Turns a fully-validated numeric field set into a sized position. All money
//! math runs on `Decimal`; sizes are floored to whole shares/contracts and a
//! zero size is a valid result, not an error.
//!
//! Per instrument:
//! - Equity: risk budget divided by the per-share distance to the stop or level.
//! - Futures: distance measured in ticks, risk in tick dollars, position value
//!   is margin required rather than notional.
//! - Options: contracts bounded by premium at risk, or by the smaller of
//!   premium and stop-loss distance when a stop is supplied.

mod equity;
mod error;
mod futures;
mod options;
mod types;

pub use equity::size_equity;
pub use error::SizingError;
pub use futures::{FuturesInputs, size_futures};
pub use options::{OptionsStopInputs, size_options, stop_loss_exit_value};
pub use types::SizedPosition;
