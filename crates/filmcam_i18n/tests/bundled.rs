use filmcam_i18n::{Catalog, I18n, Localizer, Message, SupportedLocale};
use pretty_assertions::assert_eq;

const EN: &str = include_str!("../locales/en.yaml");
const OTHERS: [(&str, &str); 4] = [
    ("zh-CN", include_str!("../locales/zh-CN.yaml")),
    ("zh-TW", include_str!("../locales/zh-TW.yaml")),
    ("ja", include_str!("../locales/ja.yaml")),
    ("ko", include_str!("../locales/ko.yaml")),
];

#[test]
fn every_bundled_catalog_has_the_english_keys() {
    let en = Catalog::parse(EN).unwrap();
    let mut en_keys: Vec<&str> = en.keys().collect();
    en_keys.sort_unstable();

    for (code, src) in OTHERS {
        let cat = Catalog::parse(src).unwrap();
        let mut keys: Vec<&str> = cat.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, en_keys, "locale={code}");
    }
}

#[test]
fn bundled_state_negotiates_device_locale() {
    let i18n = I18n::with_bundled("ko_KR").unwrap();
    assert_eq!(i18n.current_locale(), "ko");
    for locale in SupportedLocale::all() {
        assert!(i18n.has_catalog(locale.code()));
    }
    assert_eq!(i18n.t("camera.modes.leica"), "라이카");

    let unsupported = I18n::with_bundled("de-DE").unwrap();
    assert_eq!(unsupported.current_locale(), "en");
}

#[test]
fn switching_locale_changes_translations() {
    let i18n = I18n::with_bundled("en-US").unwrap();
    assert_eq!(i18n.t("profile.themeMode.system"), "System");

    i18n.set_locale("zh-TW");
    assert_eq!(i18n.t("profile.themeMode.system"), "跟隨系統");

    let msg = Message::new("space.count").arg("count", 3i64);
    assert_eq!(i18n.tr(&msg), "3 張照片");

    // Unsupported locales read English.
    i18n.set_locale("fr");
    assert_eq!(i18n.current_locale(), "fr");
    assert_eq!(i18n.t("camera.retake"), "Retake");
}
