//! Catalogs compiled into the binary

use crate::locale::SupportedLocale;

pub(crate) const CATALOGS: [(SupportedLocale, &str); 5] = [
    (SupportedLocale::En, include_str!("../locales/en.yaml")),
    (SupportedLocale::ZhCn, include_str!("../locales/zh-CN.yaml")),
    (SupportedLocale::ZhTw, include_str!("../locales/zh-TW.yaml")),
    (SupportedLocale::Ja, include_str!("../locales/ja.yaml")),
    (SupportedLocale::Ko, include_str!("../locales/ko.yaml")),
];
