use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::common::*;

#[test]
fn emi_matches_standard_formula_at_one_percent_monthly() {
    let calculator = calculator();
    assert_eq!(calculator.monthly_rate(), dec!(0.01));
    assert_eq!(calculator.emi(dec!(5000), 3), dec!(1700.11));
    assert_eq!(calculator.emi(dec!(20000), 12), dec!(1776.98));
}

#[test]
fn zero_rate_reduces_to_straight_split() {
    let calculator = calculator_with_rate(Decimal::ZERO);
    assert_eq!(calculator.emi(dec!(6000), 3), dec!(2000.00));
    assert_eq!(calculator.emi(dec!(5000), 3), dec!(1666.67));

    let schedule = calculator.schedule(dec!(6000), 3);
    assert!(schedule.iter().all(|row| row.interest == Decimal::ZERO));
    assert_eq!(schedule[2].balance, Decimal::ZERO);
}

#[test]
fn three_month_schedule_rows_are_exact() {
    let calculator = calculator();
    let schedule = calculator.schedule(dec!(5000), 3);

    assert_eq!(schedule.len(), 3);

    assert_eq!(schedule[0].month, 1);
    assert_eq!(schedule[0].interest, dec!(50.00));
    assert_eq!(schedule[0].principal, dec!(1650.11));
    assert_eq!(schedule[0].balance, dec!(3349.89));

    assert_eq!(schedule[1].interest, dec!(33.50));
    assert_eq!(schedule[1].principal, dec!(1666.61));
    assert_eq!(schedule[1].balance, dec!(1683.28));

    // Final month absorbs the rounding residual and lands on zero.
    assert_eq!(schedule[2].interest, dec!(16.83));
    assert_eq!(schedule[2].principal, dec!(1683.28));
    assert_eq!(schedule[2].balance, Decimal::ZERO);
}

#[test]
fn schedule_invariants_hold_for_all_allowed_tenures() {
    let calculator = calculator();
    for tenure in [3u32, 6, 9, 12] {
        let principal = dec!(20000);
        let schedule = calculator.schedule(principal, tenure);

        assert_eq!(schedule.len(), tenure as usize);

        let principal_sum: Decimal = schedule.iter().map(|row| row.principal).sum();
        assert_eq!(principal_sum, principal, "tenure {tenure}");

        let mut last_balance = principal;
        for row in &schedule {
            assert!(row.balance <= last_balance, "tenure {tenure} month {}", row.month);
            last_balance = row.balance;
        }
        assert_eq!(schedule.last().expect("non-empty").balance, Decimal::ZERO);

        // Every non-final row splits the installment exactly.
        for row in &schedule[..schedule.len() - 1] {
            assert_eq!(row.principal + row.interest, row.emi, "tenure {tenure}");
        }
    }
}

#[test]
fn plan_totals_are_consistent() {
    let calculator = calculator();
    let result = calculator.plan(dec!(5000), 3).expect("valid tenure");

    assert_eq!(result.monthly_emi, dec!(1700.11));
    assert_eq!(result.total_repayment, dec!(5100.33));
    assert_eq!(result.total_interest, dec!(100.33));
    assert_eq!(result.annual_rate_percent, dec!(12.0));
    assert_eq!(result.schedule.len(), 3);
    assert_eq!(
        result.total_repayment,
        result.monthly_emi * Decimal::from(3u32)
    );
}

#[test]
fn plan_is_deterministic() {
    let calculator = calculator();
    let first = calculator.plan(dec!(15000), 9).expect("valid tenure");
    let second = calculator.plan(dec!(15000), 9).expect("valid tenure");
    assert_eq!(first, second);
}

#[test]
fn rejects_tenure_outside_allow_list() {
    let calculator = calculator();
    for tenure in [0u32, 1, 5, 24] {
        let err = calculator
            .plan(dec!(10000), tenure)
            .expect_err("tenure must be rejected");
        assert_eq!(err.requested, tenure);
        assert_eq!(err.allowed, vec![3, 6, 9, 12]);
    }
}

#[test]
fn principal_from_emi_inverts_the_formula() {
    let calculator = calculator();
    let emi = calculator.emi(dec!(5000), 3);
    assert_eq!(calculator.principal_from_emi(emi, 3), dec!(5000.00));

    let zero_rate = calculator_with_rate(Decimal::ZERO);
    assert_eq!(zero_rate.principal_from_emi(dec!(2000), 3), dec!(6000.00));
}
