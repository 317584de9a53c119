use super::rates::PricingError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Tax code selectable on a category or a product template
///
/// `NoneRate` and `NoTax` both carry a 0% rate but stay distinct: the first
/// is zero-rated, the second is exempt ("no aplica impuesto").
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
    JsonSchema,
)]
pub enum TaxCode {
    #[default]
    #[serde(rename = "iva0")]
    NoneRate,
    #[serde(rename = "no_iva")]
    NoTax,
    #[serde(rename = "iva12")]
    Rate12,
    #[serde(rename = "iva14")]
    Rate14,
}

impl TaxCode {
    pub const ALL: [TaxCode; 4] = [
        TaxCode::NoneRate,
        TaxCode::NoTax,
        TaxCode::Rate12,
        TaxCode::Rate14,
    ];

    pub fn from_tag(tag: &str) -> Option<TaxCode> {
        let tag = tag.trim().to_lowercase();
        TaxCode::ALL.into_iter().find(|code| code.tag() == tag)
    }

    pub fn tag(self) -> &'static str {
        match self {
            TaxCode::NoneRate => "iva0",
            TaxCode::NoTax => "no_iva",
            TaxCode::Rate12 => "iva12",
            TaxCode::Rate14 => "iva14",
        }
    }

    /// Human readable label, as shown on the tax selection
    pub fn label(self) -> &'static str {
        match self {
            TaxCode::NoneRate => "IVA 0%",
            TaxCode::NoTax => "No aplica impuesto",
            TaxCode::Rate12 => "IVA 12%",
            TaxCode::Rate14 => "IVA 14%",
        }
    }
}

impl std::fmt::Display for TaxCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Parse an optional tax tag coming from user input.
///
/// A missing or blank tag means "unset". Unknown tags are treated as unset
/// (and so end up at the zero rate) unless `strict` is requested.
pub fn parse_tax_tag(tag: Option<&str>, strict: bool) -> Result<Option<TaxCode>, PricingError> {
    let Some(tag) = tag.filter(|t| !t.trim().is_empty()) else {
        return Ok(None);
    };
    match TaxCode::from_tag(tag) {
        Some(code) => Ok(Some(code)),
        None if strict => Err(PricingError::UnknownTaxCode(tag.to_string())),
        None => {
            log::warn!("Unknown tax code '{}', falling back to zero rate", tag);
            Ok(None)
        }
    }
}
