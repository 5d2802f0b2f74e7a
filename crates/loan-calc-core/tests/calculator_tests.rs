use approx::assert_abs_diff_eq;
use loan_calc_core::amortization::summarize;
use loan_calc_core::calculator::{
    self, AutoLoan, BreakEven, FinancedPurchase, IncomeTax, Mortgage, Refinance,
};
use loan_calc_core::loans::{finance_purchase, DownPayment, FinancedPurchaseInput, LoanKind};
use loan_calc_core::refinance::break_even;
use loan_calc_core::tax::{estimate_income_tax, FilingStatus, IncomeTaxInput};
use loan_calc_core::{Calculator, Term};
use pretty_assertions::assert_eq;

// ===========================================================================
// Down-payment variants
// ===========================================================================

#[test]
fn test_every_kind_amortizes_price_less_down() {
    for kind in [
        LoanKind::General,
        LoanKind::Mortgage,
        LoanKind::Auto,
        LoanKind::Land,
        LoanKind::Personal,
        LoanKind::Student,
    ] {
        let out = finance_purchase(&FinancedPurchaseInput {
            kind,
            price: 50_000.0,
            down_payment: DownPayment::Amount(10_000.0),
            annual_interest_rate: 6.8,
            term: Term::Years(10),
            include_schedule: false,
        });
        assert_eq!(out.result.summary, summarize(40_000.0, 6.8, 120));
        assert_eq!(out.result.kind, kind);
    }
}

#[test]
fn test_mortgage_json_round_through_calculator() {
    let v = calculator::run_value::<Mortgage>(serde_json::json!({
        "home_price": 400000,
        "down_payment": {"percent": 25},
        "annual_interest_rate": 6.5,
        "term": {"years": 30},
        "property_tax_rate": 1.0,
        "annual_insurance": 1800,
        "include_schedule": false
    }))
    .unwrap();
    let result = &v["result"];
    assert_eq!(result["loan_amount"], 300_000.0);
    assert_eq!(result["pmi_required"], false);
    let total = result["total_monthly_payment"].as_f64().unwrap();
    let pi = result["summary"]["monthly_payment"].as_f64().unwrap();
    assert_abs_diff_eq!(total, pi + 400_000.0 * 0.01 / 12.0 + 150.0, epsilon = 1e-9);
}

#[test]
fn test_auto_loan_through_calculator() {
    let v = calculator::run_value::<AutoLoan>(serde_json::json!({
        "vehicle_price": 20000,
        "annual_interest_rate": 0,
        "term": {"months": 48}
    }))
    .unwrap();
    assert_abs_diff_eq!(
        v["result"]["summary"]["monthly_payment"].as_f64().unwrap(),
        20_000.0 / 48.0,
        epsilon = 1e-9
    );
    assert_eq!(v["result"]["schedule"].as_array().unwrap().len(), 48);
}

#[test]
fn test_financed_purchase_defaults() {
    let input: <FinancedPurchase as Calculator>::Input = serde_json::from_value(serde_json::json!({
        "price": 15000,
        "annual_interest_rate": 9,
        "term": {"years": 5}
    }))
    .unwrap();
    assert_eq!(input.kind, LoanKind::General);
    assert!(input.include_schedule);
    let out = FinancedPurchase::calculate(&input);
    assert_eq!(out.result.loan_amount, 15_000.0);
}

// ===========================================================================
// Refinance
// ===========================================================================

#[test]
fn test_refinance_break_even_known_answer() {
    let s = break_even(1500.0, 1300.0, 3000.0);
    assert_eq!(s.monthly_savings, 200.0);
    assert_eq!(s.break_even_months, Some(15.0));
}

#[test]
fn test_break_even_calculator_scenario_c() {
    let v = calculator::run_value::<BreakEven>(serde_json::json!({
        "current_payment": 1500,
        "new_payment": 1300,
        "closing_costs": 3000
    }))
    .unwrap();
    assert_eq!(v["result"]["monthly_savings"].as_f64(), Some(200.0));
    assert_eq!(v["result"]["break_even_months"].as_f64(), Some(15.0));
    assert_eq!(v["warnings"].as_array().unwrap().len(), 0);
    assert_eq!(v["metadata"]["precision"], "f64");
}

#[test]
fn test_break_even_calculator_not_applicable() {
    let v = calculator::run_value::<BreakEven>(serde_json::json!({
        "current_payment": 1300,
        "new_payment": 1400,
        "closing_costs": 3000
    }))
    .unwrap();
    assert!(v["result"]["break_even_months"].is_null());
    assert_eq!(v["warnings"].as_array().unwrap().len(), 1);
}

#[test]
fn test_refinance_not_applicable_when_payment_rises() {
    let v = calculator::run_value::<Refinance>(serde_json::json!({
        "current_balance": 180000,
        "current_rate": 5,
        "current_remaining_term": {"years": 15},
        "new_rate": 5,
        "new_term": {"years": 10},
        "closing_costs": 2000
    }))
    .unwrap();
    assert!(v["result"]["monthly_savings"].as_f64().unwrap() < 0.0);
    assert!(v["result"]["break_even_months"].is_null());
}

// ===========================================================================
// Income tax regression pins
// ===========================================================================

#[test]
fn test_single_75k_pinned() {
    let out = estimate_income_tax(&IncomeTaxInput {
        income: 75_000.0,
        filing_status: FilingStatus::Single,
        brackets: None,
    });
    assert_eq!(out.result.estimated_tax, 11_553.0);
    assert_abs_diff_eq!(out.result.effective_rate, 15.404, epsilon = 1e-9);
    let slices: Vec<(f64, f64)> = out
        .result
        .breakdown
        .per_bracket
        .iter()
        .map(|s| (s.taxed_amount, s.tax))
        .collect();
    assert_eq!(slices, vec![(11_600.0, 1_160.0), (35_550.0, 4_266.0), (27_850.0, 6_127.0)]);
}

#[test]
fn test_top_bracket_pinned() {
    let v = calculator::run_value::<IncomeTax>(serde_json::json!({
        "income": 1000000,
        "filing_status": "single"
    }))
    .unwrap();
    assert_eq!(v["result"]["marginal_rate"], 37.0);
    // 1,160 + 4,266 + 11,742.50 + 21,942 + 16,568 + 127,968.75 + 144,540.50
    assert_abs_diff_eq!(
        v["result"]["estimated_tax"].as_f64().unwrap(),
        328_187.75,
        epsilon = 1e-6
    );
}

#[test]
fn test_negative_income_owes_nothing() {
    let out = estimate_income_tax(&IncomeTaxInput {
        income: -10.0,
        filing_status: FilingStatus::MarriedSeparate,
        brackets: None,
    });
    assert_eq!(out.result.estimated_tax, 0.0);
    assert_eq!(out.result.effective_rate, 0.0);
    assert_eq!(out.warnings.len(), 1);
}
