use std::sync::{Mutex, RwLock};

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::catalog::Catalog;
use crate::locale::{locale_fallback_chain, negotiate_locale, normalize_locale, SupportedLocale};
use crate::message::Message;
use crate::{bundled, I18nError};

/// Locale negotiation capability consumed by the settings holder.
pub trait Localizer {
    /// Switch the active locale. Empty codes are ignored.
    fn set_locale(&self, code: &str);

    fn current_locale(&self) -> String;
}

/// Runtime i18n state: the active locale plus one catalog per locale.
///
/// Constructed once at startup and shared by reference; interior locks
/// let the settings holder switch locales through `&self`.
pub struct I18n {
    locale: RwLock<String>,
    catalogs: RwLock<FxHashMap<String, Catalog>>,
    redraw: Mutex<Option<fn()>>,
}

impl I18n {
    /// Empty state with the given locale and no catalogs
    pub fn new(locale: impl Into<String>) -> Self {
        let loc = normalize_locale(&locale.into());
        Self {
            locale: RwLock::new(if loc.is_empty() {
                SupportedLocale::En.code().to_string()
            } else {
                loc
            }),
            catalogs: RwLock::new(FxHashMap::default()),
            redraw: Mutex::new(None),
        }
    }

    /// Negotiate the device locale and load the bundled catalogs
    pub fn with_bundled(device_locale: &str) -> Result<Self, I18nError> {
        let negotiated = negotiate_locale(device_locale);
        let st = Self::new(negotiated.code());
        for (locale, src) in bundled::CATALOGS {
            let cat = Catalog::parse(src).map_err(|source| I18nError::Bundled {
                locale: locale.code(),
                source,
            })?;
            st.load_catalog(locale.code(), cat);
        }
        debug!(
            "I18n::with_bundled: device={:?} -> {}",
            device_locale, negotiated
        );
        Ok(st)
    }

    /// Register the function called after every locale switch
    pub fn set_redraw_callback(&self, callback: fn()) {
        *self.redraw.lock().unwrap() = Some(callback);
    }

    fn trigger_redraw(&self) {
        if let Some(cb) = *self.redraw.lock().unwrap() {
            cb();
        }
    }

    pub fn locale(&self) -> String {
        self.locale.read().unwrap().clone()
    }

    pub fn load_catalog(&self, locale: &str, catalog: Catalog) {
        let loc = normalize_locale(locale);
        self.catalogs.write().unwrap().insert(loc, catalog);
    }

    pub fn load_catalog_str(&self, locale: &str, src: &str) -> Result<(), I18nError> {
        let cat = Catalog::parse(src)?;
        self.load_catalog(locale, cat);
        Ok(())
    }

    pub fn has_catalog(&self, locale: &str) -> bool {
        self.catalogs
            .read()
            .unwrap()
            .contains_key(&normalize_locale(locale))
    }

    /// Translate a message: requested locale, its negotiated supported
    /// locale, its bare language, then English. Missing keys render as the key.
    pub fn tr(&self, msg: &Message) -> String {
        let loc = self.locale();
        let mut chain = locale_fallback_chain(&loc);
        let negotiated = negotiate_locale(&loc).code().to_string();
        if !chain.contains(&negotiated) {
            chain.insert(1, negotiated);
        }

        let catalogs = self.catalogs.read().unwrap();
        for l in &chain {
            if let Some(s) = catalogs.get(l).and_then(|cat| cat.format_message(msg)) {
                return s;
            }
        }

        msg.id.to_string()
    }

    /// Translate a bare key
    pub fn t(&self, key: &'static str) -> String {
        self.tr(&Message::new(key))
    }
}

impl Localizer for I18n {
    fn set_locale(&self, code: &str) {
        let loc = normalize_locale(code);
        if loc.is_empty() {
            return;
        }

        let mut cur = self.locale.write().unwrap();
        if *cur == loc {
            return;
        }
        debug!("I18n::set_locale: {} -> {}", *cur, loc);
        *cur = loc;
        drop(cur);

        self.trigger_redraw();
    }

    fn current_locale(&self) -> String {
        self.locale()
    }
}
