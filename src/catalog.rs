use crate::pricing::{
    parse_tax_tag, Category, PriceConverter, PriceKind, PricingError, Product, Template,
};
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::io::Read;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate category name: {0}")]
    DuplicateCategory(String),
    #[error("duplicate template name: {0}")]
    DuplicateTemplate(String),
    #[error("duplicate product code: {0}")]
    DuplicateProduct(String),
    #[error("template '{template}' refers to unknown category '{category}'")]
    UnknownCategory { template: String, category: String },
    #[error("{name}: {source}")]
    Pricing {
        name: String,
        #[source]
        source: PricingError,
    },
}

/// Input root for catalog JSON
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CatalogInput {
    #[serde(default)]
    pub categories: Vec<CategoryInput>,
    pub templates: Vec<TemplateInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CategoryInput {
    /// Unique category name, referenced by templates
    pub name: String,
    /// Tax tag: iva0, no_iva, iva12 or iva14
    #[serde(default)]
    pub taxes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TemplateInput {
    /// Unique template name
    pub name: String,
    /// Name of the template's category
    #[serde(default)]
    pub category: Option<String>,
    /// Use the category's tax instead of an own selection
    #[serde(default)]
    pub taxes_category: bool,
    /// Tax tag: iva0, no_iva, iva12 or iva14 (overrides the category's)
    #[serde(default)]
    pub taxes: Option<String>,
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub list_price: Option<Decimal>,
    /// Only used when list_price is absent
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub list_price_with_tax: Option<Decimal>,
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub cost_price: Option<Decimal>,
    /// Only used when cost_price is absent
    #[serde(default)]
    #[schemars(with = "Option<f64>")]
    pub cost_price_with_tax: Option<Decimal>,
    #[serde(default)]
    pub products: Vec<ProductInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProductInput {
    /// Unique product code
    pub code: String,
    /// Days between order and delivery
    #[serde(default)]
    pub delivery_time: u32,
}

/// Priced templates and their products
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub templates: Vec<Template>,
    pub products: Vec<Product>,
}

/// Read catalog from JSON
pub fn read_catalog_json<R: Read>(reader: R) -> anyhow::Result<CatalogInput> {
    let input: CatalogInput = serde_json::from_reader(reader)?;
    log::info!(
        "Read {} categories, {} templates",
        input.categories.len(),
        input.templates.len()
    );
    Ok(input)
}

/// Price every template by replaying its fields through the template setters
pub fn build_catalog(
    input: &CatalogInput,
    converter: &PriceConverter,
    strict: bool,
) -> Result<Catalog, CatalogError> {
    let categories = build_categories(&input.categories, strict)?;

    let mut catalog = Catalog::default();
    let mut template_names = HashSet::new();
    let mut product_codes = HashSet::new();

    for template_input in &input.templates {
        if !template_names.insert(template_input.name.as_str()) {
            return Err(CatalogError::DuplicateTemplate(template_input.name.clone()));
        }
        let template = build_template(template_input, &categories, converter, strict)?;

        for product in &template_input.products {
            if !product_codes.insert(product.code.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.code.clone()));
            }
            let mut variant = Product::new(product.code.clone(), template.clone());
            variant.delivery_time = product.delivery_time;
            catalog.products.push(variant);
        }
        catalog.templates.push(template);
    }

    Ok(catalog)
}

fn build_categories(
    inputs: &[CategoryInput],
    strict: bool,
) -> Result<HashMap<String, Category>, CatalogError> {
    let mut categories = HashMap::new();
    for input in inputs {
        let taxes = parse_tax_tag(input.taxes.as_deref(), strict).map_err(|source| {
            CatalogError::Pricing {
                name: input.name.clone(),
                source,
            }
        })?;
        let category = Category {
            name: input.name.clone(),
            taxes,
        };
        if categories.insert(input.name.clone(), category).is_some() {
            return Err(CatalogError::DuplicateCategory(input.name.clone()));
        }
    }
    Ok(categories)
}

fn build_template(
    input: &TemplateInput,
    categories: &HashMap<String, Category>,
    converter: &PriceConverter,
    strict: bool,
) -> Result<Template, CatalogError> {
    let pricing_error = |source| CatalogError::Pricing {
        name: input.name.clone(),
        source,
    };

    let category = match &input.category {
        Some(name) => Some(categories.get(name).cloned().ok_or_else(|| {
            CatalogError::UnknownCategory {
                template: input.name.clone(),
                category: name.clone(),
            }
        })?),
        None => None,
    };
    let taxes = parse_tax_tag(input.taxes.as_deref(), strict).map_err(pricing_error)?;

    let mut template = Template::new(input.name.clone());
    template.set_taxes_category(input.taxes_category, converter);
    template.set_category(category, converter);
    template.set_taxes(taxes, converter);

    let prices = [
        (PriceKind::List, input.list_price, input.list_price_with_tax),
        (PriceKind::Cost, input.cost_price, input.cost_price_with_tax),
    ];
    for (kind, price, price_with_tax) in prices {
        match (price, price_with_tax) {
            (Some(price), _) => template.set_price(kind, Some(price), converter),
            (None, Some(price_with_tax)) => template
                .set_price_with_tax(kind, Some(price_with_tax), converter)
                .map_err(pricing_error)?,
            (None, None) => {}
        }
    }

    if template.tax_code().is_none() {
        log::warn!(
            "Template '{}' takes its tax from a category but has none, prices not computed",
            template.name
        );
    }
    Ok(template)
}
