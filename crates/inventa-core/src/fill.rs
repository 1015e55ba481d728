//! Gap-filling of missing fields

use indexmap::IndexMap;

use crate::types::AssetRow;

/// Placeholder for absent fields; also the filter value matching them
pub const UNSET: &str = "<unset>";

impl AssetRow {
    /// Ensure every key is present, inserting `sentinel` for missing ones
    ///
    /// Fields are reordered to follow `keys`; fields not named in `keys`
    /// keep their relative order after them.
    pub fn fill(&mut self, keys: &[String], sentinel: &str) {
        let mut old = std::mem::take(&mut self.fields);
        let mut fields = IndexMap::with_capacity(keys.len() + old.len());

        for key in keys {
            let value = old
                .shift_remove(key)
                .unwrap_or_else(|| sentinel.to_string());
            fields.insert(key.clone(), value);
        }
        fields.extend(old);

        self.fields = fields;
    }
}

/// Gap-fill a stream of rows
pub fn fill<'k, I>(rows: I, keys: &'k [String], sentinel: &'k str) -> impl Iterator<Item = AssetRow> + 'k
where
    I: IntoIterator<Item = AssetRow>,
    I::IntoIter: 'k,
{
    rows.into_iter().map(move |mut row| {
        row.fill(keys, sentinel);
        row
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(keys: &[&str]) -> Vec<String> {
        keys.iter().map(|k| (*k).to_string()).collect()
    }

    fn rows() -> Vec<AssetRow> {
        vec![
            AssetRow::new("a13bc_foo_bar.1")
                .with_field("num", "num-20")
                .with_field("str", "abc"),
            AssetRow::new("a2cd_foo_bar.2").with_field("num", "num-3"),
            AssetRow::new("a36ab_foo_bar.3").with_field("str", "ghi"),
        ]
    }

    #[test]
    fn test_fill_missing() {
        let keys = keys(&["type", "num", "str"]);
        let filled: Vec<AssetRow> = fill(rows(), &keys, UNSET).collect();

        assert_eq!(filled[0].get("type"), Some(UNSET));
        assert_eq!(filled[0].get("num"), Some("num-20"));
        assert_eq!(filled[1].get("str"), Some(UNSET));
        assert_eq!(filled[2].get("num"), Some(UNSET));
        assert_eq!(filled[2].path(), std::path::Path::new("a36ab_foo_bar.3"));
    }

    #[test]
    fn test_fill_follows_key_order() {
        let keys = keys(&["str", "id", "num"]);
        let filled: Vec<AssetRow> = fill(rows(), &keys, UNSET).collect();

        let order: Vec<&str> = filled[0].fields.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["str", "id", "num"]);
        assert_eq!(filled[0].values().collect::<Vec<_>>(), vec!["abc", UNSET, "num-20"]);
    }

    #[test]
    fn test_fill_keeps_extra_fields_last() {
        let keys = keys(&["str"]);
        let filled: Vec<AssetRow> = fill(rows(), &keys, "-").collect();

        let order: Vec<&str> = filled[0].fields.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["str", "num"]);
        assert_eq!(filled[1].get("str"), Some("-"));
    }

    #[test]
    fn test_fill_is_idempotent() {
        let keys = keys(&["type", "num", "str"]);
        let once: Vec<AssetRow> = fill(rows(), &keys, UNSET).collect();
        let twice: Vec<AssetRow> = fill(once.clone(), &keys, UNSET).collect();

        assert_eq!(once, twice);
    }
}
