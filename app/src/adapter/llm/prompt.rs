use crate::savings::{MIN_MONTHLY_SAVINGS, SAVINGS_DAYS_PER_MONTH, SavingsRequest};

pub const SUGGESTION_TEMPLATE: &str = "Se você usar este aparelho 1 hora a menos por dia, poderá economizar \
     aproximadamente X kWh por mês, o que equivale a cerca de Y reais na sua conta.";

pub fn system_prompt() -> String {
    format!(
        r#"Você é um especialista em eficiência energética residencial e responde em português brasileiro.
Avalie se usar o aparelho 1 hora a menos por dia gera uma economia relevante.
Considere um mês de {days} dias. A economia é relevante a partir de R$ {threshold:.2} por mês.
Se o uso diário for de 1 hora ou menos, ou a economia for menor que esse valor, a sugestão não se aplica.

Responda somente com um objeto JSON com os campos "suggestion" (texto) e "applicable" (booleano).
Quando aplicável, "suggestion" segue exatamente este modelo, com X em kWh por mês e Y em reais por mês,
ambos arredondados para duas casas decimais:
"{template}"
Quando não aplicável, use "applicable": false e "suggestion": ""."#,
        days = SAVINGS_DAYS_PER_MONTH,
        threshold = MIN_MONTHLY_SAVINGS.0,
        template = SUGGESTION_TEMPLATE,
    )
}

pub fn user_prompt(request: &SavingsRequest) -> String {
    format!(
        "Nome do aparelho: {}\nPotência (W): {}\nUso diário (horas): {}\nCusto por kWh (R$): {}",
        request.appliance_name, request.power.0, request.daily_usage_hours, request.cost_per_kwh.0
    )
}
