use super::template::Category;
use super::tax_code::TaxCode;

/// Decide which tax code prices a template.
///
/// Returns `None` when the template inherits its tax from a category but has
/// none assigned: nothing can be priced until a category is chosen. An
/// explicit code on the template always overrides the inherited one.
pub fn resolve_tax_code(
    taxes_category: bool,
    category: Option<&Category>,
    explicit: Option<TaxCode>,
) -> Option<TaxCode> {
    let mut code = TaxCode::NoneRate;
    if taxes_category {
        let category = category?;
        // a category without a tax selected is zero-rated
        code = category.taxes.unwrap_or(TaxCode::NoneRate);
    }
    if let Some(explicit) = explicit {
        code = explicit;
    }
    log::debug!(
        "Resolved tax code {} (taxes_category={}, category={:?}, explicit={:?})",
        code,
        taxes_category,
        category.map(|c| c.name.as_str()),
        explicit
    );
    Some(code)
}
