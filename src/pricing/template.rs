use super::converter::PriceConverter;
use super::rates::PricingError;
use super::resolve::resolve_tax_code;
use super::tax_code::TaxCode;
use rust_decimal::Decimal;

/// Product category carrying a tax selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: String,
    /// `None` when no tax was selected on the category
    pub taxes: Option<TaxCode>,
}

/// Which price pair (exclusive and inclusive) an edit applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceKind {
    List,
    Cost,
}

impl PriceKind {
    pub const ALL: [PriceKind; 2] = [PriceKind::List, PriceKind::Cost];
}

/// Product template pricing state.
///
/// The `set_*` methods are meant to be called by the host after each edit of
/// the corresponding field; they keep the inclusive and exclusive prices in
/// step with each other and with the resolved tax code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Template {
    pub name: String,
    /// Take the tax code from the category
    pub taxes_category: bool,
    pub category: Option<Category>,
    /// Explicit tax code, wins over the category's
    pub taxes: Option<TaxCode>,
    pub list_price: Option<Decimal>,
    pub list_price_with_tax: Option<Decimal>,
    pub cost_price: Option<Decimal>,
    pub cost_price_with_tax: Option<Decimal>,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Template {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn tax_code(&self) -> Option<TaxCode> {
        resolve_tax_code(self.taxes_category, self.category.as_ref(), self.taxes)
    }

    pub fn price(&self, kind: PriceKind) -> Option<Decimal> {
        match kind {
            PriceKind::List => self.list_price,
            PriceKind::Cost => self.cost_price,
        }
    }

    pub fn price_with_tax_value(&self, kind: PriceKind) -> Option<Decimal> {
        match kind {
            PriceKind::List => self.list_price_with_tax,
            PriceKind::Cost => self.cost_price_with_tax,
        }
    }

    fn price_mut(&mut self, kind: PriceKind) -> &mut Option<Decimal> {
        match kind {
            PriceKind::List => &mut self.list_price,
            PriceKind::Cost => &mut self.cost_price,
        }
    }

    fn price_with_tax_mut(&mut self, kind: PriceKind) -> &mut Option<Decimal> {
        match kind {
            PriceKind::List => &mut self.list_price_with_tax,
            PriceKind::Cost => &mut self.cost_price_with_tax,
        }
    }

    /// Inclusive price derived from the exclusive one
    pub fn price_with_tax(&self, kind: PriceKind, converter: &PriceConverter) -> Option<Decimal> {
        let code = self.tax_code()?;
        converter.inclusive(self.price(kind), code)
    }

    /// Exclusive price derived from the inclusive one
    pub fn price_without_tax(
        &self,
        kind: PriceKind,
        converter: &PriceConverter,
    ) -> Result<Option<Decimal>, PricingError> {
        let (Some(code), Some(inclusive)) = (self.tax_code(), self.price_with_tax_value(kind))
        else {
            return Ok(None);
        };
        converter.exclusive(inclusive, code).map(Some)
    }

    pub fn set_price(&mut self, kind: PriceKind, price: Option<Decimal>, converter: &PriceConverter) {
        *self.price_mut(kind) = price;
        if price.is_some() {
            let with_tax = self.price_with_tax(kind, converter);
            *self.price_with_tax_mut(kind) = with_tax;
        }
    }

    pub fn set_price_with_tax(
        &mut self,
        kind: PriceKind,
        price: Option<Decimal>,
        converter: &PriceConverter,
    ) -> Result<(), PricingError> {
        *self.price_with_tax_mut(kind) = price;
        if price.is_some() {
            let without_tax = self.price_without_tax(kind, converter)?;
            *self.price_mut(kind) = without_tax;
        }
        Ok(())
    }

    pub fn set_taxes_category(&mut self, taxes_category: bool, converter: &PriceConverter) {
        self.taxes_category = taxes_category;
        self.refresh_prices_with_tax(converter);
    }

    pub fn set_taxes(&mut self, taxes: Option<TaxCode>, converter: &PriceConverter) {
        self.taxes = taxes;
        self.refresh_prices_with_tax(converter);
    }

    /// In inherited mode a category change invalidates both inclusive prices.
    pub fn set_category(&mut self, category: Option<Category>, converter: &PriceConverter) {
        self.category = category;
        if !self.taxes_category {
            return;
        }
        for kind in PriceKind::ALL {
            let with_tax = match self.category {
                Some(_) => self.price_with_tax(kind, converter),
                None => None,
            };
            *self.price_with_tax_mut(kind) = with_tax;
        }
    }

    fn refresh_prices_with_tax(&mut self, converter: &PriceConverter) {
        for kind in PriceKind::ALL {
            if self.price(kind).is_some() {
                let with_tax = self.price_with_tax(kind, converter);
                *self.price_with_tax_mut(kind) = with_tax;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn conv() -> PriceConverter {
        PriceConverter::default()
    }

    fn category(taxes: Option<TaxCode>) -> Category {
        Category {
            name: "Bebidas".to_string(),
            taxes,
        }
    }

    #[test]
    fn setting_list_price_updates_inclusive() {
        let mut t = Template::new("Agua");
        t.set_taxes(Some(TaxCode::Rate12), &conv());
        t.set_price(PriceKind::List, Some(dec!(100)), &conv());
        assert_eq!(t.list_price_with_tax, Some(dec!(112)));
        assert_eq!(t.cost_price_with_tax, None);
    }

    #[test]
    fn setting_inclusive_cost_updates_exclusive() {
        let mut t = Template::new("Agua");
        t.set_taxes(Some(TaxCode::Rate14), &conv());
        t.set_price_with_tax(PriceKind::Cost, Some(dec!(57)), &conv())
            .unwrap();
        assert_eq!(t.cost_price.map(|p| p.to_string()), Some("50.0000".to_string()));
        assert_eq!(t.list_price, None);
    }

    #[test]
    fn clearing_price_keeps_inclusive() {
        let mut t = Template::new("Agua");
        t.set_price(PriceKind::List, Some(dec!(10)), &conv());
        t.set_price(PriceKind::List, None, &conv());
        assert_eq!(t.list_price, None);
        assert_eq!(t.list_price_with_tax, Some(dec!(10)));
    }

    #[test]
    fn zero_price_is_converted() {
        let mut t = Template::new("Agua");
        t.set_taxes(Some(TaxCode::Rate12), &conv());
        t.set_price(PriceKind::List, Some(dec!(100)), &conv());
        t.set_price(PriceKind::List, Some(dec!(0)), &conv());
        assert_eq!(t.list_price_with_tax, Some(dec!(0)));

        t.set_price(PriceKind::Cost, Some(dec!(50)), &conv());
        t.set_price_with_tax(PriceKind::Cost, Some(dec!(0)), &conv())
            .unwrap();
        assert_eq!(t.cost_price.map(|p| p.to_string()), Some("0.0000".to_string()));
    }

    #[test]
    fn overflowing_price_leaves_inclusive_unset() {
        let mut t = Template::new("Agua");
        t.set_taxes(Some(TaxCode::Rate12), &conv());
        t.set_price(PriceKind::List, Some(Decimal::MAX), &conv());
        assert_eq!(t.list_price, Some(Decimal::MAX));
        assert_eq!(t.list_price_with_tax, None);
    }

    #[test]
    fn changing_taxes_recomputes_both_kinds() {
        let mut t = Template::new("Agua");
        t.set_price(PriceKind::List, Some(dec!(100)), &conv());
        t.set_price(PriceKind::Cost, Some(dec!(50)), &conv());
        assert_eq!(t.list_price_with_tax, Some(dec!(100)));

        t.set_taxes(Some(TaxCode::Rate14), &conv());
        assert_eq!(t.list_price_with_tax, Some(dec!(114)));
        assert_eq!(t.cost_price_with_tax, Some(dec!(57)));
    }

    #[test]
    fn inherited_mode_without_category_clears_inclusive() {
        let mut t = Template::new("Agua");
        t.set_price(PriceKind::List, Some(dec!(100)), &conv());
        t.set_taxes_category(true, &conv());
        assert_eq!(t.list_price_with_tax, None);
    }

    #[test]
    fn inherited_mode_without_category_cannot_derive_exclusive() {
        let mut t = Template::new("Agua");
        t.taxes_category = true;
        t.set_price(PriceKind::List, Some(dec!(5)), &conv());
        t.set_price_with_tax(PriceKind::List, Some(dec!(112)), &conv())
            .unwrap();
        assert_eq!(t.list_price, None);
    }

    #[test]
    fn assigning_category_prices_template() {
        let mut t = Template::new("Agua");
        t.set_taxes_category(true, &conv());
        t.set_price(PriceKind::List, Some(dec!(100)), &conv());
        assert_eq!(t.list_price_with_tax, None);

        t.set_category(Some(category(Some(TaxCode::Rate12))), &conv());
        assert_eq!(t.list_price_with_tax, Some(dec!(112)));
        assert_eq!(t.cost_price_with_tax, None);

        t.set_category(None, &conv());
        assert_eq!(t.list_price_with_tax, None);
    }

    #[test]
    fn category_change_ignored_when_not_inherited() {
        let mut t = Template::new("Agua");
        t.set_price(PriceKind::List, Some(dec!(100)), &conv());
        t.set_category(Some(category(Some(TaxCode::Rate14))), &conv());
        assert_eq!(t.list_price_with_tax, Some(dec!(100)));
    }

    #[test]
    fn explicit_tax_wins_over_category() {
        let mut t = Template::new("Agua");
        t.set_taxes_category(true, &conv());
        t.set_category(Some(category(Some(TaxCode::Rate12))), &conv());
        t.set_taxes(Some(TaxCode::Rate14), &conv());
        t.set_price(PriceKind::List, Some(dec!(50)), &conv());
        assert_eq!(t.tax_code(), Some(TaxCode::Rate14));
        assert_eq!(t.list_price_with_tax, Some(dec!(57)));
    }
}
