//! Rule-based "invest or pay off debt" guidance and the prompt used to ask a
//! language model the same question. Wording is fixed; nothing here models
//! markets or cash flows.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum AdvisorError {
    #[error("Loan rate must be a non-negative number")]
    NegativeLoanRate,
    #[error("Investment return must be a non-negative number")]
    NegativeInvestmentReturn,
    #[error("Loan rate must be a positive number")]
    NonPositiveLoanRate,
    #[error("Investment return must be a positive number")]
    NonPositiveInvestmentReturn,
    #[error("Risk tolerance must be one of: low, medium, high")]
    InvalidRiskTolerance(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl FromStr for RiskTolerance {
    type Err = AdvisorError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(AdvisorError::InvalidRiskTolerance(value.to_string())),
        }
    }
}

impl fmt::Display for RiskTolerance {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        formatter.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    #[serde(rename = "Invest")]
    Invest,
    #[serde(rename = "Pay off debt")]
    PayOffDebt,
}

impl fmt::Display for Decision {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invest => formatter.write_str("Invest"),
            Self::PayOffDebt => formatter.write_str("Pay off debt"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub decision: Decision,
    pub reason: String,
}

/// Compares a loan rate with an expected return (both annual percentages).
///
/// # Errors
/// Returns an error when either rate is negative.
pub fn compare_rates(
    loan_rate: f64,
    investment_return: f64,
    risk: RiskTolerance,
) -> Result<Advice, AdvisorError> {
    if loan_rate.is_nan() || loan_rate < 0.0 {
        return Err(AdvisorError::NegativeLoanRate);
    }
    if investment_return.is_nan() || investment_return < 0.0 {
        return Err(AdvisorError::NegativeInvestmentReturn);
    }

    let loan = percent(loan_rate);
    let expected = percent(investment_return);

    let (decision, base_reason) = if investment_return > loan_rate {
        (
            Decision::Invest,
            format!(
                "Your expected investment return ({expected}%) is higher than your loan interest rate ({loan}%)."
            ),
        )
    } else {
        (
            Decision::PayOffDebt,
            format!(
                "Your loan interest rate ({loan}%) is higher than your expected investment return ({expected}%)."
            ),
        )
    };

    let perspective = match (decision, risk) {
        (Decision::Invest, RiskTolerance::High) => {
            "Since you have high risk tolerance, investing makes sense as you can withstand potential market volatility."
        }
        (Decision::Invest, RiskTolerance::Medium) => {
            "With medium risk tolerance, consider diversifying investments while maintaining some debt payments."
        }
        (Decision::Invest, RiskTolerance::Low) => {
            "Despite the potential returns, your low risk tolerance suggests prioritizing debt reduction for guaranteed savings."
        }
        (Decision::PayOffDebt, RiskTolerance::High) => {
            "Even with high risk tolerance, paying off high-interest debt provides a guaranteed return equivalent to the loan rate."
        }
        (Decision::PayOffDebt, RiskTolerance::Medium) => {
            "With medium risk tolerance, reducing debt provides a balanced approach to financial security."
        }
        (Decision::PayOffDebt, RiskTolerance::Low) => {
            "Your low risk tolerance makes debt reduction the optimal choice for guaranteed financial improvement."
        }
    };

    let pros_cons = match decision {
        Decision::Invest => {
            "Potential pros: Higher long-term returns. Potential cons: Market risks could erode gains."
        }
        Decision::PayOffDebt => {
            "Potential pros: Guaranteed savings, reduced financial stress. Potential cons: Might miss out on exceptional market gains."
        }
    };

    Ok(Advice {
        decision,
        reason: format!("{base_reason} {perspective} {pros_cons}"),
    })
}

/// Builds the question sent to a language model for a richer answer.
///
/// # Errors
/// Returns an error when either rate is zero or negative.
pub fn generate_prompt(
    loan_rate: f64,
    investment_return: f64,
    risk: RiskTolerance,
) -> Result<String, AdvisorError> {
    if loan_rate.is_nan() || loan_rate <= 0.0 {
        return Err(AdvisorError::NonPositiveLoanRate);
    }
    if investment_return.is_nan() || investment_return <= 0.0 {
        return Err(AdvisorError::NonPositiveInvestmentReturn);
    }

    let loan = percent(loan_rate);
    let expected = percent(investment_return);

    Ok(format!(
        "Compare a loan interest rate of {loan}% with an expected investment return of {expected}%. \
         Considering a {risk} risk tolerance, should I prioritize investing or paying off debt?\n\n\
         Provide:\n\
         1. A clear recommendation (Invest/Pay off debt)\n\
         2. Detailed reasoning with pros and cons\n\
         3. Consideration of risk tolerance impact\n\
         4. Balanced perspective comparing both options\n\
         5. Any caveats or assumptions in your analysis"
    ))
}

/// Renders a rate the way people type it: `4.5`, `7.0`, `12.25`.
fn percent(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_return_recommends_investing() -> Result<(), AdvisorError> {
        let advice = compare_rates(4.5, 7.0, RiskTolerance::High)?;
        assert_eq!(advice.decision, Decision::Invest);
        assert!(advice.reason.starts_with(
            "Your expected investment return (7.0%) is higher than your loan interest rate (4.5%)."
        ));
        assert!(advice.reason.contains("Since you have high risk tolerance"));
        assert!(advice.reason.ends_with("Market risks could erode gains."));
        Ok(())
    }

    #[test]
    fn equal_rates_recommend_paying_debt() -> Result<(), AdvisorError> {
        let advice = compare_rates(5.0, 5.0, RiskTolerance::Medium)?;
        assert_eq!(advice.decision, Decision::PayOffDebt);
        assert!(advice.reason.contains("reducing debt provides a balanced approach"));
        Ok(())
    }

    #[test]
    fn low_risk_investor_is_nudged_towards_debt() -> Result<(), AdvisorError> {
        let advice = compare_rates(3.0, 8.0, RiskTolerance::Low)?;
        assert_eq!(advice.decision, Decision::Invest);
        assert!(advice.reason.contains("your low risk tolerance suggests prioritizing debt reduction"));
        Ok(())
    }

    #[test]
    fn negative_rates_are_rejected() {
        assert_eq!(
            compare_rates(-1.0, 5.0, RiskTolerance::Low),
            Err(AdvisorError::NegativeLoanRate)
        );
        assert_eq!(
            compare_rates(1.0, -5.0, RiskTolerance::Low),
            Err(AdvisorError::NegativeInvestmentReturn)
        );
        assert_eq!(
            compare_rates(f64::NAN, 5.0, RiskTolerance::Low),
            Err(AdvisorError::NegativeLoanRate)
        );
    }

    #[test]
    fn zero_rates_compare_but_do_not_prompt() {
        assert!(compare_rates(0.0, 0.0, RiskTolerance::High).is_ok());
        assert_eq!(
            generate_prompt(0.0, 5.0, RiskTolerance::High),
            Err(AdvisorError::NonPositiveLoanRate)
        );
        assert_eq!(
            generate_prompt(5.0, 0.0, RiskTolerance::High),
            Err(AdvisorError::NonPositiveInvestmentReturn)
        );
    }

    #[test]
    fn prompt_mentions_inputs() -> Result<(), AdvisorError> {
        let prompt = generate_prompt(4.5, 7.0, RiskTolerance::High)?;
        assert!(prompt.starts_with(
            "Compare a loan interest rate of 4.5% with an expected investment return of 7.0%. Considering a high risk tolerance,"
        ));
        assert!(prompt.contains("\n\nProvide:\n1. A clear recommendation (Invest/Pay off debt)\n"));
        assert!(prompt.ends_with("5. Any caveats or assumptions in your analysis"));
        Ok(())
    }

    #[test]
    fn risk_tolerance_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<RiskTolerance>(), Ok(RiskTolerance::High));
        assert_eq!(" medium ".parse::<RiskTolerance>(), Ok(RiskTolerance::Medium));
        assert_eq!(
            "reckless".parse::<RiskTolerance>(),
            Err(AdvisorError::InvalidRiskTolerance("reckless".to_string()))
        );
    }

    #[test]
    fn decision_serializes_with_display_wording() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&Decision::PayOffDebt)?, "\"Pay off debt\"");
        assert_eq!(Decision::Invest.to_string(), "Invest");
        Ok(())
    }
}
