use thiserror::Error;

use crate::catalog::{CatalogError, LocaleError};
use crate::model::PageIndexError;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    PageIndex(#[from] PageIndexError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Locale(#[from] LocaleError),
}
