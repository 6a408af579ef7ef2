//! Barrier options.
//!
//! Barrier pricing is not supported. [`barrier_option_price`] accepts the
//! full set of barrier parameters and answers [`BarrierPrice::Unimplemented`]
//! for every input, so callers can tell "not supported" apart from a
//! computed price of zero.

use ol_core::{Error, OptionType, Price, Rate, Real, Result, Time, Volatility};
use std::fmt;
use tracing::debug;

/// Barrier type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BarrierType {
    /// Down-and-in: becomes active when price drops below barrier.
    DownIn,
    /// Up-and-in: becomes active when price rises above barrier.
    UpIn,
    /// Down-and-out: expires when price drops below barrier.
    DownOut,
    /// Up-and-out: expires when price rises above barrier.
    #[default]
    UpOut,
}

impl fmt::Display for BarrierType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BarrierType::DownIn => "down-and-in",
            BarrierType::UpIn => "up-and-in",
            BarrierType::DownOut => "down-and-out",
            BarrierType::UpOut => "up-and-out",
        };
        f.write_str(name)
    }
}

/// Outcome of a barrier pricing request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BarrierPrice {
    /// A computed price.
    Computed(Price),
    /// Barrier pricing is not supported for the request.
    Unimplemented,
}

impl BarrierPrice {
    /// The computed price, if any.
    pub fn value(self) -> Option<Price> {
        match self {
            BarrierPrice::Computed(price) => Some(price),
            BarrierPrice::Unimplemented => None,
        }
    }

    /// `true` for [`BarrierPrice::Unimplemented`].
    pub fn is_unimplemented(self) -> bool {
        matches!(self, BarrierPrice::Unimplemented)
    }

    /// Convert to a `Result`, mapping `Unimplemented` to
    /// [`Error::Unimplemented`].
    pub fn into_result(self) -> Result<Price> {
        match self {
            BarrierPrice::Computed(price) => Ok(price),
            BarrierPrice::Unimplemented => {
                Err(Error::Unimplemented("barrier option pricing".into()))
            }
        }
    }
}

impl fmt::Display for BarrierPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BarrierPrice::Computed(price) => write!(f, "{price}"),
            BarrierPrice::Unimplemented => f.write_str("barrier option pricing not implemented"),
        }
    }
}

/// Barrier option price. Always [`BarrierPrice::Unimplemented`].
///
/// No input is validated: the answer does not depend on the inputs.
#[allow(clippy::too_many_arguments)]
pub fn barrier_option_price(
    spot: Real,
    strike: Real,
    barrier: Real,
    maturity: Time,
    rate: Rate,
    volatility: Volatility,
    option_type: OptionType,
    barrier_type: BarrierType,
) -> BarrierPrice {
    debug!(
        spot,
        strike,
        barrier,
        maturity,
        rate,
        volatility,
        %option_type,
        %barrier_type,
        "barrier pricing requested but not implemented"
    );
    BarrierPrice::Unimplemented
}
