//! Prompt templates for the two scenarios.
//!
//! Each builder takes the pre-formatted snapshot from `realty_core::summary`
//! and interpolates it into the instruction template. The templates carry the
//! markdown the model is asked to mirror.

use std::fmt::Write;

use realty_core::summary::{DownPaymentAnalysisData, RoiAnalysisData};

/// Renders the home-purchase analysis prompt. The monthly-payment block is
/// included only when the snapshot carries one.
pub fn down_payment_prompt(data: &DownPaymentAnalysisData) -> String {
    let mut prompt = format!(
        "Analyze the following home purchase scenario in Dallas:\n\
         \n\
         - **Home Price:** {}\n\
         - **Down Payment:** {} ({}%)\n\
         - **Loan Amount:** {}\n\
         - **Loan Type:** {}\n\
         - **Estimated Closing Costs:** {}\n\
         - **Total Cash to Close:** {}\n",
        data.home_price,
        data.down_payment_amount,
        data.down_payment_percent,
        data.loan_amount,
        data.loan_type,
        data.closing_costs,
        data.cash_to_close,
    );

    if let Some(monthly) = &data.monthly {
        // Infallible: writing into a String cannot fail.
        let _ = write!(
            prompt,
            "\n\
             - **Estimated Total Monthly Payment:** {}\n\
             \x20 - Principal & Interest: {}\n\
             \x20 - Taxes: {}\n\
             \x20 - Insurance: {}\n\
             \x20 - HOA: {}\n",
            monthly.total,
            monthly.principal_and_interest,
            monthly.taxes,
            monthly.insurance,
            monthly.hoa,
        );
    }

    prompt.push_str(
        "\n\
         Provide a brief analysis covering:\n\
         1. The feasibility of the cash to close amount.\n\
         2. Comments on the estimated monthly payment relative to the loan amount.\n\
         3. Any specific considerations for the chosen loan type in the Dallas market.\n",
    );
    prompt
}

/// Renders the investment analysis prompt.
pub fn roi_prompt(data: &RoiAnalysisData) -> String {
    format!(
        "Analyze the following real estate investment scenario in Dallas:\n\
         \n\
         - **Purchase Price:** {}\n\
         - **Total Cash Invested:** {}\n\
         - **Loan Amount:** {}\n\
         - **Gross Monthly Income:** {}\n\
         - **Total Monthly Operating Expenses (ex-mortgage):** {}\n\
         - **Monthly Net Operating Income (NOI):** {}\n\
         - **Monthly Cash Flow:** {}\n\
         - **Annual Cash Flow:** {}\n\
         - **Cash on Cash Return:** {}%\n\
         - **Cap Rate:** {}%\n\
         \n\
         Provide a brief analysis covering:\n\
         1. The strength of the key return metrics (Cash on Cash Return and Cap Rate) for the \
         Dallas market.\n\
         2. An evaluation of the property's cash flow.\n\
         3. Potential risks or areas for improvement based on the provided numbers (e.g., if \
         OpEx seems high, etc.).\n",
        data.purchase_price,
        data.total_cash_invested,
        data.loan_amount,
        data.gross_monthly_income,
        data.operating_expenses,
        data.noi_monthly,
        data.cash_flow_monthly,
        data.cash_flow_annual,
        data.cash_on_cash_return,
        data.cap_rate,
    )
}
