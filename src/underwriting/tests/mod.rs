mod amortization;
mod common;
mod eligibility;
