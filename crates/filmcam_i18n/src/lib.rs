//! filmcam internationalization (i18n)
//!
//! - A fixed set of [`SupportedLocale`]s with bundled YAML catalogs
//! - Device locale negotiation with an English fallback
//! - The [`Localizer`] capability the settings holder switches locales through

mod bundled;
mod catalog;
mod error;
mod locale;
mod message;
mod state;

pub use catalog::{Catalog, CatalogParseError};
pub use error::I18nError;
pub use locale::{locale_fallback_chain, negotiate_locale, normalize_locale, SupportedLocale};
pub use message::{ArgValue, Message};
pub use state::{I18n, Localizer};
