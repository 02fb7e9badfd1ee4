//! Reusable option sets.

use treeselect::OptionRecord;

/// `X{Y{a, b}, Z{c}}`
pub fn xyz_records() -> Vec<OptionRecord> {
    vec![
        OptionRecord::new("a", ["X", "Y"], 0),
        OptionRecord::new("b", ["X", "Y"], 1),
        OptionRecord::new("c", ["X", "Z"], 2),
    ]
}

/// Fruit and vegetable options in TOML form
pub const PRODUCE_TOML: &str = r#"
preselected = ["kiwi"]

[[option]]
value = "apple"
label = "Apple"
section = "Fruit/Red"

[[option]]
value = "cherry"
label = "Cherry"
section = "Fruit/Red"
description = "small and round"

[[option]]
value = "kiwi"
label = "Kiwi"
section = "Fruit/Green"

[[option]]
value = "leek"
label = "Leek"
section = "Vegetable"
"#;

/// Same shape as `PRODUCE_TOML`, in JSON, with explicit output indices
pub const PRODUCE_JSON: &str = r#"{
  "preselected": [],
  "options": [
    {"value": "apple", "label": "Apple", "section": "Fruit/Red", "index": 3},
    {"value": "cherry", "label": "Cherry", "section": "Fruit/Red", "index": 2},
    {"value": "kiwi", "label": "Kiwi", "section": "Fruit/Green", "index": 1},
    {"value": "leek", "label": "Leek", "section": "Vegetable", "index": 0}
  ]
}"#;
