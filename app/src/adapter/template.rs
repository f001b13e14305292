use crate::core::format::format_decimal_pt_br;
use crate::savings::{SavingsRequest, SavingsSuggestion, SuggestionGenerator, estimate_savings};

/// Offline generator that fills the fixed sentence with the 30-day estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateGenerator;

impl TemplateGenerator {
    pub fn phrase(monthly_kwh: f64, monthly_cost: f64) -> String {
        format!(
            "Se você usar este aparelho 1 hora a menos por dia, poderá economizar aproximadamente {} kWh por mês, \
             o que equivale a cerca de {} reais na sua conta.",
            format_decimal_pt_br(monthly_kwh),
            format_decimal_pt_br(monthly_cost)
        )
    }
}

impl SuggestionGenerator for TemplateGenerator {
    async fn generate(&self, request: &SavingsRequest) -> anyhow::Result<SavingsSuggestion> {
        let estimate = estimate_savings(request);

        if !estimate.applicable {
            return Ok(SavingsSuggestion::not_applicable());
        }

        Ok(SavingsSuggestion {
            suggestion: Self::phrase(estimate.monthly_savings.0, estimate.monthly_savings_cost.0),
            applicable: true,
        })
    }
}
