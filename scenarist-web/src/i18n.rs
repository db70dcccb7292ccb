//! UI string table.
//!
//! Strings live in `i18n/en.json` and are addressed by dotted keys such as
//! `"store.title"`. Missing keys render as the key itself so gaps are
//! visible on the page rather than silently blank.
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::BTreeMap;

const EN: &str = include_str!("../i18n/en.json");

static BUNDLE: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(EN).unwrap_or_else(|err| {
        log::error!("i18n bundle failed to parse: {err}");
        Value::Object(serde_json::Map::new())
    })
});

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn plural_category(count: f64) -> &'static str {
    if (count - 1.0).abs() < f64::EPSILON {
        "one"
    } else if count.abs() < f64::EPSILON {
        "zero"
    } else {
        "other"
    }
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            // Prefer plural categories if count provided
            let count = args
                .and_then(|m| m.get("count"))
                .and_then(|c| c.parse::<f64>().ok());
            let category = count.map(plural_category);
            category
                .and_then(|cat| map.get(cat))
                .or_else(|| map.get("other"))
                .or_else(|| map.get("_"))
                .and_then(Value::as_str)?
                .to_string()
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

/// Look up a UI string.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Look up a UI string and substitute `{name}` placeholders.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    get_nested_value(&BUNDLE, key)
        .and_then(|value| render_value(value, args))
        .unwrap_or_else(|| key.to_string())
}

/// Shorthand for [`tr`] with inline pairs.
#[must_use]
pub fn tr_with(key: &str, pairs: &[(&str, &str)]) -> String {
    let args: BTreeMap<&str, &str> = pairs.iter().copied().collect();
    tr(key, Some(&args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_nested_keys() {
        assert_eq!(t("nav.store"), "Store");
        assert_eq!(t("site.name"), "Scenarist");
    }

    #[test]
    fn missing_key_echoes_key() {
        assert_eq!(t("nav.does_not_exist"), "nav.does_not_exist");
        assert_eq!(t("nav"), "nav");
    }

    #[test]
    fn substitutes_placeholders() {
        let text = tr_with("store.preview_count", &[("shown", "3"), ("total", "5")]);
        assert_eq!(text, "Showing 3 of 5 scenarios.");
    }

    #[test]
    fn picks_plural_forms() {
        assert_eq!(tr_with("home.count", &[("count", "1")]), "1 free scenario");
        assert_eq!(tr_with("home.count", &[("count", "6")]), "6 free scenarios");
        assert_eq!(tr_with("home.count", &[("count", "0")]), "0 free scenarios");
    }

    #[test]
    fn every_bundle_leaf_is_a_string_or_plural_map() {
        fn walk(prefix: &str, value: &Value) {
            match value {
                Value::String(_) => {}
                Value::Object(map) if map.contains_key("other") => {}
                Value::Object(map) => {
                    for (k, v) in map {
                        walk(&format!("{prefix}.{k}"), v);
                    }
                }
                other => panic!("unexpected value at {prefix}: {other}"),
            }
        }
        walk("", &BUNDLE);
    }
}
