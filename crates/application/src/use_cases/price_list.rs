//! Price list use case.

use futures_util::future::join_all;
use registrar_domain::CallResponse;
use registrar_domain::registrar::{ProductAction, ProductType, Tld};

use crate::ports::ProcedureInvoker;
use crate::registrar::Registrar;

/// Term quoted for every product.
pub const PRICE_LIST_YEARS: u32 = 1;

/// Price of one product, or the fault that prevented quoting it.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuote {
    /// Product quoted.
    pub product: ProductType,
    /// Response of `member_product_price`.
    pub response: CallResponse,
}

/// Use case for quoting one action across every supported TLD.
pub struct PriceList<I: ProcedureInvoker + ?Sized> {
    registrar: Registrar<I>,
}

impl<I: ProcedureInvoker + ?Sized> PriceList<I> {
    /// Creates a new `PriceList` use case.
    #[must_use]
    pub const fn new(registrar: Registrar<I>) -> Self {
        Self { registrar }
    }

    /// Quotes `action` for every TLD in [`Tld::ALL`], in that order.
    ///
    /// Quotes are requested concurrently; a fault on one TLD is reported in
    /// its own entry and does not affect the others.
    #[tracing::instrument(skip(self), fields(action = action.as_str()))]
    pub async fn execute(&self, member_name: &str, action: ProductAction) -> Vec<PriceQuote> {
        let quotes = join_all(Tld::ALL.into_iter().map(|tld| async move {
            let product = ProductType::new(tld, action);
            let response = self
                .registrar
                .product_price(member_name, product, PRICE_LIST_YEARS)
                .await;
            PriceQuote { product, response }
        }))
        .await;

        let faults = quotes.iter().filter(|q| q.response.is_fault()).count();
        tracing::info!(quotes = quotes.len(), faults, "price list assembled");
        quotes
    }
}
