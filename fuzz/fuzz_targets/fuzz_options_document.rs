#![no_main]

use libfuzzer_sys::fuzz_target;
use treeselect::parser::DocumentFormat;
use treeselect::{OptionsDocument, TreeMultiselect};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    for format in [DocumentFormat::Json, DocumentFormat::Toml] {
        let Ok(document) = OptionsDocument::parse(content, format) else {
            continue;
        };
        let preselected = document.preselected.clone();
        let Ok(records) = document.into_records("/") else {
            continue;
        };

        // building must either succeed or report a construction error
        if let Ok(mut widget) = TreeMultiselect::builder(records)
            .preselected(preselected)
            .build()
        {
            let total = widget.engine().total_count();
            let _ = widget.select_all();
            assert_eq!(widget.selected_values().len(), total);
            let _ = widget.invert();
            assert!(widget.selected_values().is_empty());
        }
    }
});
