use thiserror::Error;

use crate::catalog::CatalogParseError;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error(transparent)]
    Catalog(#[from] CatalogParseError),

    #[error("catalog for `{locale}`: {source}")]
    Bundled {
        locale: &'static str,
        #[source]
        source: CatalogParseError,
    },
}
