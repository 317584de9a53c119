pub mod converter;
pub mod product;
pub mod rates;
pub mod resolve;
pub mod tax_code;
pub mod template;

// Flat public surface for domain types and functions.
pub use converter::{PriceConverter, DEFAULT_DIGITS};
pub use product::{sale_prices, Product, SaleContext};
pub use rates::{PricingError, RateTable};
pub use tax_code::{parse_tax_tag, TaxCode};
pub use template::{Category, PriceKind, Template};
