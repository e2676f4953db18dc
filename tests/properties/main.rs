//! Property-based tests for the extraction engine.

use proptest::prelude::*;

use stylebook::extract::ids::is_valid_id;
use stylebook::extract::{GroupIndex, PageBuilder, SequentialIds, SourceFile, flatten, normalize, segment};
use stylebook::markdown::CommonMark;

/// Text built from the characters the normalizer cares about.
fn arb_comment_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("/*".to_string()),
            Just("*/".to_string()),
            Just(" * ".to_string()),
            Just("```".to_string()),
            Just("\n".to_string()),
            Just("\r\n".to_string()),
            Just("\t".to_string()),
            Just("  ".to_string()),
            Just("   ".to_string()),
            "[a-z<>=#.{};: ]{1,8}",
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn normalize_is_idempotent(text in arb_comment_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_is_idempotent_for_any_text(text in ".*") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalized_text_has_no_delimiters(text in arb_comment_text()) {
        let normalized = normalize(&text);
        prop_assert!(!normalized.contains("/*"));
        prop_assert!(!normalized.contains("*/"));
        prop_assert!(!normalized.contains('\r'));
    }

    #[test]
    fn flattened_code_is_one_compact_line(code in "[ \t\r\na-z<>`]{0,120}") {
        let flat = flatten(&code);
        prop_assert!(!flat.contains('\n'));
        prop_assert!(!flat.contains('\r'));
        prop_assert!(!flat.contains("   "));
    }

    #[test]
    fn id_present_iff_source_present(text in arb_comment_text()) {
        let section = segment(&text, &CommonMark, &mut SequentialIds::new());
        prop_assert_eq!(section.id().is_some(), section.source().is_some());
        prop_assert_eq!(section.id().is_some(), section.result().is_some());
        if let Some(id) = section.id() {
            prop_assert!(is_valid_id(id));
        }
    }

    #[test]
    fn example_ids_unique_per_page(count in 1usize..12) {
        let css = "/*\n    <b>\n*/\n".repeat(count);
        let page = PageBuilder::new(&CommonMark)
            .build(&SourceFile::new("x.css", css), &mut stylebook::extract::RandomIds);
        let ids: std::collections::HashSet<_> = page.sections.iter().filter_map(|s| s.id()).collect();
        prop_assert_eq!(ids.len(), count);
    }

    #[test]
    fn grouping_preserves_every_page(
        paths in prop::collection::vec(("[abc]", "[a-z]{1,6}"), 0..20)
    ) {
        let builder = PageBuilder::new(&CommonMark);
        let mut index = GroupIndex::new();
        let mut first_seen: Vec<String> = Vec::new();
        for (group, name) in &paths {
            let page = builder.build(
                &SourceFile::new(format!("{group}/{name}.css"), "/* x */"),
                &mut SequentialIds::new(),
            );
            if !first_seen.contains(group) {
                first_seen.push(group.clone());
            }
            index.add(&page);
        }
        prop_assert_eq!(index.page_count(), paths.len());
        let names: Vec<_> = index.groups().iter().map(|g| g.name.clone()).collect();
        prop_assert_eq!(names, first_seen);
    }
}
