use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use tracing::debug;

use super::PdnError;

const MONTHS_PER_YEAR: Decimal = dec!(12);
const PERCENT: Decimal = dec!(100);
const MONEY_SCALE: u32 = 2;

/// Rounds to two decimal places, half away from zero (half-up for the non-negative amounts
/// this module produces).
pub(crate) fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Fixed monthly installment that fully amortizes `principal` over `term_months`.
///
/// `A = P * r(1+r)^n / ((1+r)^n - 1)` with `r = annual_rate_percent / 12 / 100`. A zero
/// rate degenerates to `P / n`.
pub fn compute_monthly_payment(
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
) -> Result<Decimal, PdnError> {
    if principal <= Decimal::ZERO || annual_rate_percent < Decimal::ZERO || term_months == 0 {
        return Err(PdnError::InvalidParameters);
    }

    let term = Decimal::from(term_months);
    let payment = if annual_rate_percent.is_zero() {
        principal / term
    } else {
        let monthly_rate = annual_rate_percent / MONTHS_PER_YEAR / PERCENT;
        let growth = (Decimal::ONE + monthly_rate)
            .checked_powu(u64::from(term_months))
            .ok_or(PdnError::ArithmeticOverflow)?;
        let coefficient = monthly_rate
            .checked_mul(growth)
            .and_then(|numerator| numerator.checked_div(growth - Decimal::ONE))
            .ok_or(PdnError::ArithmeticOverflow)?;
        principal
            .checked_mul(coefficient)
            .ok_or(PdnError::ArithmeticOverflow)?
    };

    let payment = round_money(payment);
    debug!(%principal, %annual_rate_percent, term_months, %payment, "computed annuity payment");
    Ok(payment)
}

/// Debt-to-income ratio in percent. Non-positive `other_monthly_payments` count as zero.
pub fn compute_dti(
    monthly_payment: Decimal,
    monthly_income: Decimal,
    other_monthly_payments: Decimal,
) -> Result<Decimal, PdnError> {
    if monthly_income <= Decimal::ZERO {
        return Err(PdnError::InvalidIncome);
    }

    let ratio = monthly_payment
        .checked_add(other_monthly_payments.max(Decimal::ZERO))
        .and_then(|total| total.checked_div(monthly_income))
        .and_then(|share| share.checked_mul(PERCENT))
        .ok_or(PdnError::ArithmeticOverflow)?;

    let dti = round_money(ratio);
    debug!(%monthly_payment, %monthly_income, %dti, "computed debt-to-income ratio");
    Ok(dti)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annuity_matches_reference_schedule() {
        let payment = compute_monthly_payment(dec!(1000000), dec!(20), 12).expect("valid terms");
        assert_eq!(payment, dec!(92634.51));
    }

    #[test]
    fn annuity_for_two_year_microloan() {
        let payment = compute_monthly_payment(dec!(5000000), dec!(25), 24).expect("valid terms");
        assert_eq!(payment, dec!(266857.60));
    }

    #[test]
    fn annuity_for_three_year_microloan() {
        let payment = compute_monthly_payment(dec!(10000000), dec!(30), 36).expect("valid terms");
        assert_eq!(payment, dec!(424515.77));
    }

    #[test]
    fn zero_rate_divides_principal_evenly() {
        let payment = compute_monthly_payment(dec!(1000000), Decimal::ZERO, 10).expect("valid");
        assert_eq!(payment, dec!(100000.00));
    }

    #[test]
    fn zero_rate_is_linear_for_every_term() {
        let principal = dec!(1000000);
        for term in 1..=60u32 {
            let payment = compute_monthly_payment(principal, Decimal::ZERO, term).expect("valid");
            assert_eq!(payment, round_money(principal / Decimal::from(term)), "term {term}");
        }
        let third = compute_monthly_payment(principal, Decimal::ZERO, 3).expect("valid");
        assert_eq!(third, dec!(333333.33));
    }

    #[test]
    fn identical_inputs_produce_identical_payments() {
        let first = compute_monthly_payment(dec!(7350000), dec!(47.5), 18).expect("valid");
        let second = compute_monthly_payment(dec!(7350000), dec!(47.5), 18).expect("valid");
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
        assert!(first.scale() <= 2);
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert!(matches!(
            compute_monthly_payment(dec!(-1000), dec!(10), 12),
            Err(PdnError::InvalidParameters)
        ));
        assert!(matches!(
            compute_monthly_payment(Decimal::ZERO, dec!(10), 12),
            Err(PdnError::InvalidParameters)
        ));
        assert!(matches!(
            compute_monthly_payment(dec!(1000), dec!(-5), 12),
            Err(PdnError::InvalidParameters)
        ));
        assert!(matches!(
            compute_monthly_payment(dec!(1000), dec!(10), 0),
            Err(PdnError::InvalidParameters)
        ));
    }

    #[test]
    fn runaway_growth_factor_is_an_overflow() {
        // (1 + 1000)^120 is far outside the 96-bit mantissa.
        assert_eq!(
            compute_monthly_payment(dec!(1000000), dec!(1200000), 120),
            Err(PdnError::ArithmeticOverflow)
        );
    }

    #[test]
    fn dti_total_beyond_decimal_range_is_an_overflow() {
        assert_eq!(
            compute_dti(Decimal::MAX, dec!(1), dec!(1)),
            Err(PdnError::ArithmeticOverflow)
        );
        assert_eq!(
            compute_dti(Decimal::MAX, dec!(0.5), Decimal::ZERO),
            Err(PdnError::ArithmeticOverflow)
        );
    }

    #[test]
    fn dti_without_other_payments() {
        let dti = compute_dti(dec!(50000), dec!(200000), Decimal::ZERO).expect("valid income");
        assert_eq!(dti, dec!(25.00));
    }

    #[test]
    fn dti_includes_other_payments() {
        let dti = compute_dti(dec!(50000), dec!(200000), dec!(30000)).expect("valid income");
        assert_eq!(dti, dec!(40.00));
    }

    #[test]
    fn dti_ignores_negative_other_payments() {
        let dti = compute_dti(dec!(50000), dec!(200000), dec!(-30000)).expect("valid income");
        assert_eq!(dti, dec!(25.00));
    }

    #[test]
    fn dti_rounds_half_up() {
        // 1 / 8 * 100 = 12.5 exactly; 1 / 3 * 100 = 33.333...
        assert_eq!(
            compute_dti(dec!(1), dec!(8), Decimal::ZERO).expect("valid"),
            dec!(12.50)
        );
        assert_eq!(
            compute_dti(dec!(1), dec!(3), Decimal::ZERO).expect("valid"),
            dec!(33.33)
        );
        assert_eq!(
            compute_dti(dec!(2), dec!(3), Decimal::ZERO).expect("valid"),
            dec!(66.67)
        );
        // 0.00125 * 100 = 0.125 -> 0.13
        assert_eq!(
            compute_dti(dec!(1), dec!(800), Decimal::ZERO).expect("valid"),
            dec!(0.13)
        );
    }

    #[test]
    fn dti_rejects_non_positive_income() {
        assert!(matches!(
            compute_dti(dec!(50000), Decimal::ZERO, Decimal::ZERO),
            Err(PdnError::InvalidIncome)
        ));
        assert!(matches!(
            compute_dti(dec!(50000), dec!(-100000), Decimal::ZERO),
            Err(PdnError::InvalidIncome)
        ));
    }

    #[test]
    fn dti_never_decreases_as_payment_grows() {
        let income = dec!(1750000);
        let other = dec!(120000);
        let mut previous = Decimal::MIN;
        let mut payment = Decimal::ZERO;
        while payment <= dec!(2000000) {
            let dti = compute_dti(payment, income, other).expect("valid income");
            assert!(dti >= previous, "dti fell from {previous} to {dti}");
            previous = dti;
            payment += dec!(12345.67);
        }
    }
}
