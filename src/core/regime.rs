use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// IRPJ rate applied to the presumed base or the net profit
pub const IRPJ_RATE: Decimal = dec!(0.15);
/// Additional IRPJ applied above [`ADDITIONAL_IRPJ_THRESHOLD`]
pub const ADDITIONAL_IRPJ_RATE: Decimal = dec!(0.10);
pub const ADDITIONAL_IRPJ_THRESHOLD: Decimal = dec!(20000);
/// CSLL rate applied to the presumed base or the net profit
pub const CSLL_RATE: Decimal = dec!(0.09);

/// Additional IRPJ on the part of `base` strictly above the monthly threshold.
pub fn additional_irpj(base: Decimal) -> Decimal {
    if base > ADDITIONAL_IRPJ_THRESHOLD {
        (base - ADDITIONAL_IRPJ_THRESHOLD) * ADDITIONAL_IRPJ_RATE
    } else {
        Decimal::ZERO
    }
}

/// Tax regime a company is registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Regime {
    #[serde(rename = "Simples Nacional")]
    SimplesNacional,
    #[serde(rename = "Lucro Presumido")]
    LucroPresumido,
    #[serde(rename = "Lucro Real")]
    LucroReal,
}

impl Regime {
    pub const ALL: [Regime; 3] = [
        Regime::SimplesNacional,
        Regime::LucroPresumido,
        Regime::LucroReal,
    ];

    pub fn parse(s: &str) -> Option<Regime> {
        match normalize(s).as_str() {
            "simples nacional" | "simples-nacional" | "simples_nacional" | "simples" => {
                Some(Regime::SimplesNacional)
            }
            "lucro presumido" | "lucro-presumido" | "lucro_presumido" | "presumido" => {
                Some(Regime::LucroPresumido)
            }
            "lucro real" | "lucro-real" | "lucro_real" | "real" => Some(Regime::LucroReal),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Regime::SimplesNacional => "Simples Nacional",
            Regime::LucroPresumido => "Lucro Presumido",
            Regime::LucroReal => "Lucro Real",
        }
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Simples Nacional annex. Echoed in the report; the simplified bracket
/// table is the same for every annex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Annex {
    #[serde(rename = "Anexo I")]
    I,
    #[serde(rename = "Anexo II")]
    II,
    #[serde(rename = "Anexo III")]
    III,
    #[serde(rename = "Anexo IV")]
    IV,
    #[serde(rename = "Anexo V")]
    V,
}

impl Annex {
    pub const ALL: [Annex; 5] = [Annex::I, Annex::II, Annex::III, Annex::IV, Annex::V];

    /// Accepts `Anexo III`, `III`, `3` or a full label like `Anexo III - Serviços`
    pub fn parse(s: &str) -> Option<Annex> {
        let s = normalize(s);
        let s = s.split(" - ").next().unwrap_or_default();
        let s = s.strip_prefix("anexo").unwrap_or(s).trim();
        match s {
            "i" | "1" => Some(Annex::I),
            "ii" | "2" => Some(Annex::II),
            "iii" | "3" => Some(Annex::III),
            "iv" | "4" => Some(Annex::IV),
            "v" | "5" => Some(Annex::V),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Annex::I => "Anexo I",
            Annex::II => "Anexo II",
            Annex::III => "Anexo III",
            Annex::IV => "Anexo IV",
            Annex::V => "Anexo V",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Annex::I => "Anexo I - Comércio",
            Annex::II => "Anexo II - Indústria",
            Annex::III => "Anexo III - Serviços",
            Annex::IV => "Anexo IV - Serviços",
            Annex::V => "Anexo V - Serviços",
        }
    }
}

impl fmt::Display for Annex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Activity type for Lucro Presumido, drives the presumption rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum ActivityType {
    Commerce,
    Services,
    Industry,
}

impl ActivityType {
    pub const ALL: [ActivityType; 3] = [
        ActivityType::Commerce,
        ActivityType::Services,
        ActivityType::Industry,
    ];

    pub fn parse(s: &str) -> Option<ActivityType> {
        let s = normalize(s);
        let s = s.split(" (").next().unwrap_or_default();
        match s {
            "commerce" | "comercio" | "comércio" => Some(ActivityType::Commerce),
            "services" | "servicos" | "serviços" => Some(ActivityType::Services),
            "industry" | "industria" | "indústria" => Some(ActivityType::Industry),
            _ => None,
        }
    }

    /// Share of revenue presumed to be profit
    pub fn presumption_rate(&self) -> Decimal {
        match self {
            ActivityType::Services => dec!(0.32),
            ActivityType::Commerce | ActivityType::Industry => dec!(0.08),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ActivityType::Commerce => "Comércio",
            ActivityType::Services => "Serviços",
            ActivityType::Industry => "Indústria",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regime_from_str() {
        assert_eq!(Regime::parse("Simples Nacional"), Some(Regime::SimplesNacional));
        assert_eq!(Regime::parse("simples"), Some(Regime::SimplesNacional));
        assert_eq!(Regime::parse("LUCRO PRESUMIDO"), Some(Regime::LucroPresumido));
        assert_eq!(Regime::parse("lucro-real"), Some(Regime::LucroReal));
        assert_eq!(Regime::parse("mei"), None);
    }

    #[test]
    fn annex_from_str() {
        assert_eq!(Annex::parse("Anexo III"), Some(Annex::III));
        assert_eq!(Annex::parse("anexo iv"), Some(Annex::IV));
        assert_eq!(Annex::parse("V"), Some(Annex::V));
        assert_eq!(Annex::parse("2"), Some(Annex::II));
        assert_eq!(Annex::parse("Anexo I - Comércio"), Some(Annex::I));
        assert_eq!(Annex::parse("Anexo VI"), None);
        assert_eq!(Annex::parse(""), None);
    }

    #[test]
    fn activity_from_str() {
        assert_eq!(ActivityType::parse("Services"), Some(ActivityType::Services));
        assert_eq!(ActivityType::parse("Serviços"), Some(ActivityType::Services));
        assert_eq!(ActivityType::parse("comércio"), Some(ActivityType::Commerce));
        assert_eq!(ActivityType::parse("Indústria (8%)"), Some(ActivityType::Industry));
        assert_eq!(ActivityType::parse("agro"), None);
    }

    #[test]
    fn presumption_rates() {
        assert_eq!(ActivityType::Services.presumption_rate(), dec!(0.32));
        assert_eq!(ActivityType::Commerce.presumption_rate(), dec!(0.08));
        assert_eq!(ActivityType::Industry.presumption_rate(), dec!(0.08));
    }

    #[test]
    fn additional_irpj_is_strictly_above_threshold() {
        assert_eq!(additional_irpj(dec!(20000)), Decimal::ZERO);
        assert_eq!(additional_irpj(dec!(19999.99)), Decimal::ZERO);
        assert_eq!(additional_irpj(dec!(30000)), dec!(1000));
        assert_eq!(additional_irpj(dec!(20000.10)), dec!(0.01));
    }
}
