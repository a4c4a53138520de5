//! Character-based pricing and cost estimation.
//!
//! Both supported providers bill speech synthesis per million input
//! characters. A batch run sums the phrase lengths it covers and multiplies by
//! the provider's rate.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterPricing {
    pub provider: String,
    pub tier: String,
    pub cost_per_million_chars: f64,
    pub currency: String,
}

impl CharacterPricing {
    pub fn new(provider: &str, tier: &str, cost_per_million_chars: f64) -> Self {
        Self {
            provider: provider.into(),
            tier: tier.into(),
            cost_per_million_chars,
            currency: "USD".into(),
        }
    }

    pub fn estimate(&self, characters: usize) -> CostEstimate {
        let total = (characters as f64 / 1_000_000.0) * self.cost_per_million_chars;
        CostEstimate {
            provider: self.provider.clone(),
            tier: self.tier.clone(),
            characters,
            cost_per_million_chars: self.cost_per_million_chars,
            total_cost: total,
            currency: self.currency.clone(),
        }
    }

    pub fn openai_tts_1() -> Self {
        Self::new("openai", "tts-1", 15.0)
    }
    pub fn openai_tts_1_hd() -> Self {
        Self::new("openai", "tts-1-hd", 30.0)
    }
    pub fn azure_neural() -> Self {
        Self::new("azure", "Neural voices", 16.0)
    }
    pub fn azure_standard() -> Self {
        Self::new("azure", "Standard voices", 4.0)
    }

    /// Pricing for an OpenAI speech model name.
    pub fn for_model(model: &str) -> Option<Self> {
        let m = model.to_lowercase();
        if m.contains("tts-1-hd") {
            Some(Self::openai_tts_1_hd())
        } else if m.contains("tts-1") {
            Some(Self::openai_tts_1())
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    pub provider: String,
    pub tier: String,
    pub characters: usize,
    pub cost_per_million_chars: f64,
    pub total_cost: f64,
    pub currency: String,
}

impl CostEstimate {
    /// `$0.0123`
    pub fn format(&self) -> String {
        if self.currency == "USD" {
            format!("${:.4}", self.total_cost)
        } else {
            format!("{} {:.4}", self.currency, self.total_cost)
        }
    }
    /// `$0.0123 (Neural voices)`
    pub fn format_detailed(&self) -> String {
        format!("{} ({})", self.format(), self.tier)
    }
}
