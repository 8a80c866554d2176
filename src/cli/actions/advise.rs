use anyhow::Result;
use fintrack_core::advisor::{self, RiskTolerance};
use tracing::debug;

#[derive(Debug)]
pub struct Args {
    pub loan_rate: f64,
    pub investment_return: f64,
    pub risk: RiskTolerance,
}

/// Print the recommendation followed by the language-model prompt.
/// # Errors
/// Returns an error if a rate is out of range.
pub fn execute(args: &Args) -> Result<()> {
    println!("{}", render(args)?);
    Ok(())
}

fn render(args: &Args) -> Result<String> {
    debug!(
        loan_rate = args.loan_rate,
        investment_return = args.investment_return,
        risk = %args.risk,
        "comparing rates"
    );
    let advice = advisor::compare_rates(args.loan_rate, args.investment_return, args.risk)?;
    let prompt = advisor::generate_prompt(args.loan_rate, args.investment_return, args.risk)?;

    Ok(format!(
        "Decision: {}\nReason: {}\n\nPrompt:\n{prompt}",
        advice.decision, advice.reason
    ))
}
