use stylebook::extract::ids::is_valid_id;
use stylebook::extract::{
    DiagnosticKind, GroupIndex, HeadingOrigin, PageBuilder, RandomIds, SequentialIds, SourceFile,
    normalize, report,
};
use stylebook::markdown::CommonMark;
use stylebook::test_utils::fixtures;
use stylebook::test_utils::{TestCase, run_table_tests};

fn build(path: &str, content: &str) -> stylebook::extract::Page {
    PageBuilder::new(&CommonMark).build(&SourceFile::new(path, content), &mut SequentialIds::new())
}

// =============================================================================
// End-to-end pages
// =============================================================================

#[test]
fn prose_only_file() {
    let page = build("title.sass", fixtures::SASS_TITLE);
    assert_eq!(page.heading, "Title");
    assert_eq!(page.sections.len(), 1);
    assert_eq!(page.sections[0].comment, "<h1>Title</h1>\n<p>Paragraph text.</p>\n");
    assert!(page.sections[0].id().is_none());
    assert!(page.sections[0].source().is_none());
    assert!(report(&page).is_empty());
}

#[test]
fn fenced_example_file() {
    let css = "/*\n  ```\n  .btn { color: red; }\n  ```\n*/";
    let page = PageBuilder::new(&CommonMark).build(&SourceFile::new("btn.css", css), &mut RandomIds);
    let section = &page.sections[0];
    assert_eq!(section.result(), Some(".btn { color: red; }"));
    assert!(is_valid_id(section.id().unwrap()));
    assert!(section.source().unwrap().starts_with("<pre><code>"));
}

#[test]
fn uncommented_file_reports_both_diagnostics() {
    let page = build("a/plain.css", fixtures::NO_COMMENTS_CSS);
    assert!(page.sections.is_empty());
    assert_eq!(page.heading, "plain");
    assert_eq!(page.heading_origin, HeadingOrigin::SlugFallback);
    let kinds: Vec<_> = report(&page).into_iter().map(|d| d.kind).collect();
    assert_eq!(kinds, vec![DiagnosticKind::CommentMissing, DiagnosticKind::HeadingMissing]);
}

#[test]
fn docblock_comments_are_understood() {
    let page = build("forms/input.less", fixtures::INPUT_LESS);
    assert_eq!(page.heading, "Inputs");
    assert_eq!(page.group, "forms");
    let section = &page.sections[0];
    assert!(section.comment.contains("<h1>Inputs</h1>"));
    assert!(section.comment.contains("<p>Text fields.</p>"));
    assert_eq!(section.result(), Some("<input type=\"text\">"));
    assert!(section.source().unwrap().contains("language-html"));
}

#[test]
fn two_fences_make_one_example() {
    let css = "/*\n  Intro\n\n  ```\n  <a>\n  ```\n\n  Between\n\n  ```\n  <b>\n  ```\n*/";
    let page = build("x.css", css);
    assert_eq!(page.sections.len(), 1);
    let section = &page.sections[0];
    assert_eq!(section.comment, "<p>Intro</p>\n");
    assert_eq!(section.result(), Some("<a>Between<b>"));
    let source = section.source().unwrap();
    assert!(source.contains("<p>Between</p>"));
    assert!(source.contains("&lt;b&gt;"));
}

#[test]
fn sequential_ids_restart_per_page() {
    let builder = PageBuilder::new(&CommonMark);
    let mut ids = SequentialIds::new();
    let first = builder.build(&SourceFile::new("a.css", fixtures::BUTTON_SCSS), &mut ids);
    let second = builder.build(&SourceFile::new("b.css", fixtures::BUTTON_SCSS), &mut ids);
    assert_eq!(first.sections[0].id(), Some("00000"));
    assert_eq!(first.sections[1].id(), Some("00001"));
    assert_eq!(second.sections[0].id(), Some("00000"));
}

// =============================================================================
// Normalization table
// =============================================================================

#[test]
fn normalize_table() {
    run_table_tests(
        vec![
            TestCase {
                name: "single line",
                input: "/* hello */",
                expected: "hello".to_string(),
            },
            TestCase {
                name: "base indent removed",
                input: "  text",
                expected: "text".to_string(),
            },
            TestCase {
                name: "one level deeper",
                input: "   code",
                expected: "    code".to_string(),
            },
            TestCase {
                name: "tab is a code level",
                input: "\tcode",
                expected: "    code".to_string(),
            },
            TestCase {
                name: "blank line emptied",
                input: "a\n   \nb",
                expected: "a\n\nb".to_string(),
            },
            TestCase {
                name: "continuation marker",
                input: " * item",
                expected: "item".to_string(),
            },
            TestCase {
                name: "crlf",
                input: "a\r\nb",
                expected: "a\nb".to_string(),
            },
        ],
        normalize,
    );
}

// =============================================================================
// Grouping
// =============================================================================

#[test]
fn groups_keep_first_seen_order() {
    let mut index = GroupIndex::new();
    for path in ["a/one.css", "b/two.css", "a/three.css"] {
        index.add(&build(path, "/* x */"));
    }
    let groups = index.groups();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].name, "a");
    assert_eq!(groups[1].name, "b");
    let slugs: Vec<_> = groups[0].pages.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, vec!["one", "three"]);
    assert_eq!(index.page_count(), 3);
}
