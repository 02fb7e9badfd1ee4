//! Scenario: options documents through the widget.

use treeselect::parser::DocumentFormat;
use treeselect::{load_document, Options, OptionsDocument, SectionState, TreeMultiselect};

use crate::common::{TestEnv, PRODUCE_JSON, PRODUCE_TOML};

fn widget_from(document: OptionsDocument, options: Options) -> TreeMultiselect {
    let preselected = document.preselected.clone();
    let records = document.into_records(&options.section_delimiter).unwrap();
    TreeMultiselect::builder(records)
        .options(options)
        .preselected(preselected)
        .build()
        .unwrap()
}

#[test]
fn scenario_toml_document_with_preselection() {
    let document = OptionsDocument::parse(PRODUCE_TOML, DocumentFormat::Toml).unwrap();
    let widget = widget_from(document, Options::default());

    assert_eq!(widget.selected_values(), vec!["kiwi"]);
    assert_eq!(
        widget.engine().section_state(&["Fruit"]),
        Some(SectionState::Indeterminate)
    );
    assert_eq!(
        widget.engine().section_state(&["Vegetable"]),
        Some(SectionState::Unchecked)
    );
    assert_eq!(widget.selected_records()[0].section_path, "Fruit/Green");
}

#[test]
fn scenario_json_indices_drive_output_order() {
    let document = OptionsDocument::from_json(PRODUCE_JSON).unwrap();
    let mut widget = widget_from(document, Options::default());

    widget.select_all().unwrap();

    assert_eq!(
        widget.selected_values(),
        vec!["leek", "kiwi", "cherry", "apple"]
    );
}

#[test]
fn scenario_load_document_from_disk() {
    let env = TestEnv::new();
    let path = env.write("produce.toml", PRODUCE_TOML);

    let document = load_document(&path).unwrap();

    assert_eq!(document.options.len(), 4);
    assert_eq!(document.preselected, vec!["kiwi"]);
}

#[test]
fn scenario_custom_delimiter_document() {
    let toml = r#"
[[option]]
value = "x"
section = "Top > Inner"
"#;
    let options = Options {
        section_delimiter: " > ".to_string(),
        ..Options::default()
    };
    let mut widget = widget_from(OptionsDocument::from_toml(toml).unwrap(), options);

    widget.set_section_str("Top > Inner", true).unwrap();

    assert_eq!(widget.selected_records()[0].section_path, "Top > Inner");
}
