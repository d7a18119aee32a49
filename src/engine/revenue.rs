use rust_decimal::Decimal;

use crate::sale::SaleRecord;

/// Failures raised while summing revenue.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AggregateError {
    /// A line amount or the running total left the decimal range.
    #[error("revenue exceeded decimal range after {sales_counted} sales")]
    Overflow {
        /// Sales folded in before the failing one.
        sales_counted: usize,
    },
    /// The exact result needs more significant digits than a decimal holds.
    #[error("revenue needs more than 28 significant digits after {sales_counted} sales")]
    PrecisionLoss {
        /// Sales folded in before the failing one.
        sales_counted: usize,
    },
}

/// Running exact total of `quantity_sold × sale_price`.
///
/// Backed by [`Decimal`]: a 96-bit integer significand with a base-10 scale.
/// Products and sums are carried out on the integer significands, and a
/// result that cannot be stored without dropping a non-zero digit is an
/// error, never a rounded total. The total does not depend on push order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevenueAccumulator {
    total: Decimal,
    sales_counted: usize,
}

impl RevenueAccumulator {
    /// Empty accumulator totalling zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulator with every sale in `sales` pushed.
    pub fn from_sales<'a>(
        sales: impl IntoIterator<Item = &'a SaleRecord>,
    ) -> Result<Self, AggregateError> {
        let mut acc = Self::new();
        for sale in sales {
            acc.push(sale)?;
        }
        Ok(acc)
    }

    /// Folds one sale's line amount into the total.
    ///
    /// On error the accumulator is left as it was before the call.
    pub fn push(&mut self, sale: &SaleRecord) -> Result<(), AggregateError> {
        let counted = self.sales_counted;
        let fail = move |inexact: Inexact| inexact.at(counted);
        let line = exact_mul(sale.sale_price, sale.quantity_sold).map_err(fail)?;
        self.total = exact_add(self.total, line).map_err(fail)?;
        self.sales_counted += 1;
        Ok(())
    }

    /// Total so far.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Sales folded in so far.
    pub fn sales_counted(&self) -> usize {
        self.sales_counted
    }
}

/// Sums revenue over `sales`. Empty input yields zero.
pub fn sum_revenue<'a>(
    sales: impl IntoIterator<Item = &'a SaleRecord>,
) -> Result<Decimal, AggregateError> {
    RevenueAccumulator::from_sales(sales).map(|acc| acc.total())
}

#[derive(Debug, Clone, Copy)]
enum Inexact {
    Overflow,
    PrecisionLoss,
}

impl Inexact {
    fn at(self, sales_counted: usize) -> AggregateError {
        match self {
            Self::Overflow => AggregateError::Overflow { sales_counted },
            Self::PrecisionLoss => AggregateError::PrecisionLoss { sales_counted },
        }
    }
}

fn exact_mul(price: Decimal, quantity: u32) -> Result<Decimal, Inexact> {
    let mantissa = price
        .mantissa()
        .checked_mul(i128::from(quantity))
        .ok_or(Inexact::Overflow)?;
    from_parts(mantissa, price.scale())
}

fn exact_add(a: Decimal, b: Decimal) -> Result<Decimal, Inexact> {
    let scale = a.scale().max(b.scale());
    let sum = rescale(a, scale)?
        .checked_add(rescale(b, scale)?)
        .ok_or(Inexact::Overflow)?;
    from_parts(sum, scale)
}

/// Significand of `d` expressed at `scale`, which must be >= `d.scale()`.
fn rescale(d: Decimal, scale: u32) -> Result<i128, Inexact> {
    10i128
        .checked_pow(scale - d.scale())
        .and_then(|factor| d.mantissa().checked_mul(factor))
        .ok_or(Inexact::Overflow)
}

/// Builds a decimal from an exact significand, shedding only trailing zeros.
fn from_parts(mut mantissa: i128, mut scale: u32) -> Result<Decimal, Inexact> {
    loop {
        if let Ok(d) = Decimal::try_from_i128_with_scale(mantissa, scale) {
            return Ok(d);
        }
        if scale == 0 {
            return Err(Inexact::Overflow);
        }
        if mantissa % 10 != 0 {
            return Err(Inexact::PrecisionLoss);
        }
        mantissa /= 10;
        scale -= 1;
    }
}
