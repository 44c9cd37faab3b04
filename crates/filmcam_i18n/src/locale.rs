use std::fmt::{Display, Formatter};

/// Locales the app ships catalogs for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SupportedLocale {
    #[default]
    En,
    ZhCn,
    ZhTw,
    Ja,
    Ko,
}

impl SupportedLocale {
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh-CN",
            Self::ZhTw => "zh-TW",
            Self::Ja => "ja",
            Self::Ko => "ko",
        }
    }

    /// Language name written in that language, for the language picker
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::ZhCn => "简体中文",
            Self::ZhTw => "繁體中文",
            Self::Ja => "日本語",
            Self::Ko => "한국어",
        }
    }

    pub fn all() -> &'static [SupportedLocale] {
        const LOCALES: [SupportedLocale; 5] = [
            SupportedLocale::En,
            SupportedLocale::ZhCn,
            SupportedLocale::ZhTw,
            SupportedLocale::Ja,
            SupportedLocale::Ko,
        ];
        &LOCALES
    }

    /// Exact (case-insensitive) code match
    pub fn from_code(code: &str) -> Option<Self> {
        let code = normalize_locale(code);
        Self::all()
            .iter()
            .copied()
            .find(|l| l.code().eq_ignore_ascii_case(&code))
    }
}

impl Display for SupportedLocale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Normalize locale identifiers to a canonical-ish form for lookup.
///
/// - Converts `_` to `-` (Android often reports `en_US`).
/// - Trims whitespace.
pub fn normalize_locale(s: &str) -> String {
    s.trim().replace('_', "-")
}

/// Pick the supported locale for a device-reported locale.
///
/// Exact match first, then Chinese script/region (`Hant`, `TW`, `HK`, `MO`
/// select Traditional), then a bare language match. Anything else is `en`.
pub fn negotiate_locale(device: &str) -> SupportedLocale {
    let norm = normalize_locale(device);
    if let Some(exact) = SupportedLocale::from_code(&norm) {
        return exact;
    }

    let mut parts = norm.split('-');
    let lang = parts.next().unwrap_or_default().to_ascii_lowercase();
    let rest: Vec<String> = parts.map(|p| p.to_ascii_lowercase()).collect();

    let negotiated = match lang.as_str() {
        "zh" => {
            let traditional = rest
                .iter()
                .any(|p| matches!(p.as_str(), "hant" | "tw" | "hk" | "mo"));
            if traditional {
                SupportedLocale::ZhTw
            } else {
                SupportedLocale::ZhCn
            }
        }
        "ja" => SupportedLocale::Ja,
        "ko" => SupportedLocale::Ko,
        _ => SupportedLocale::En,
    };
    tracing::debug!("negotiate_locale: {:?} -> {}", device, negotiated);
    negotiated
}

/// Create a fallback chain for translation lookup.
///
/// Example:
/// - `zh-TW` -> `["zh-TW", "zh", "en"]`
/// - `en-US` -> `["en-US", "en"]`
pub fn locale_fallback_chain(locale: &str) -> Vec<String> {
    let l = normalize_locale(locale);
    let mut chain = Vec::new();

    if !l.is_empty() {
        chain.push(l.clone());
        if let Some(lang) = l.split('-').next() {
            if !lang.is_empty() {
                chain.push(lang.to_string());
            }
        }
    }
    chain.push(SupportedLocale::En.code().to_string());

    // Dedup, preserve order.
    let mut out: Vec<String> = Vec::with_capacity(chain.len());
    for x in chain {
        if !out.contains(&x) {
            out.push(x);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exact_codes_match_case_insensitively() {
        assert_eq!(negotiate_locale("zh-CN"), SupportedLocale::ZhCn);
        assert_eq!(negotiate_locale("zh_tw"), SupportedLocale::ZhTw);
        assert_eq!(negotiate_locale("KO"), SupportedLocale::Ko);
    }

    #[test]
    fn chinese_script_and_region() {
        assert_eq!(negotiate_locale("zh-Hant-HK"), SupportedLocale::ZhTw);
        assert_eq!(negotiate_locale("zh-HK"), SupportedLocale::ZhTw);
        assert_eq!(negotiate_locale("zh-Hans"), SupportedLocale::ZhCn);
        assert_eq!(negotiate_locale("zh"), SupportedLocale::ZhCn);
    }

    #[test]
    fn language_match_and_english_fallback() {
        assert_eq!(negotiate_locale("ja-JP"), SupportedLocale::Ja);
        assert_eq!(negotiate_locale("ko_KR"), SupportedLocale::Ko);
        assert_eq!(negotiate_locale("en-GB"), SupportedLocale::En);
        assert_eq!(negotiate_locale("fr-FR"), SupportedLocale::En);
        assert_eq!(negotiate_locale(""), SupportedLocale::En);
    }

    #[test]
    fn fallback_chain_is_deduped() {
        assert_eq!(locale_fallback_chain("zh-TW"), vec!["zh-TW", "zh", "en"]);
        assert_eq!(locale_fallback_chain("en"), vec!["en"]);
        assert_eq!(locale_fallback_chain(""), vec!["en"]);
    }
}
