//! Snapshot tests for the serialized page model.

use insta::{assert_json_snapshot, assert_snapshot};

use stylebook::extract::{GroupIndex, PageBuilder, SequentialIds, SourceFile, report};
use stylebook::markdown::CommonMark;
use stylebook::test_utils::fixtures;

fn build(path: &str, content: &str) -> stylebook::extract::Page {
    PageBuilder::new(&CommonMark).build(&SourceFile::new(path, content), &mut SequentialIds::new())
}

#[test]
fn page_with_fenced_example() {
    let page = build(
        "controls/button.css",
        "/*\n  Button\n  ======\n\n  ```\n  .btn { color: red; }\n  ```\n*/\n",
    );
    assert_json_snapshot!(page, @r#"
    {
      "slug": "button",
      "heading": "Button",
      "heading_origin": "document",
      "group": "controls",
      "output_path": "controls/button.html",
      "original_path": "controls/button.css",
      "sections": [
        {
          "comment": "<h1>Button</h1>\n",
          "id": "00000",
          "source": "<pre><code>.btn { color: red; }\n</code></pre>\n",
          "result": ".btn { color: red; }"
        }
      ]
    }
    "#);
}

#[test]
fn prose_only_page() {
    let page = build("title.sass", fixtures::SASS_TITLE);
    assert_json_snapshot!(page.sections, @r#"
    [
      {
        "comment": "<h1>Title</h1>\n<p>Paragraph text.</p>\n"
      }
    ]
    "#);
}

#[test]
fn navigation_groups() {
    let mut index = GroupIndex::new();
    for path in ["a/one.css", "b/two.css", "a/three.css"] {
        index.add(&build(path, "/* x */"));
    }
    assert_json_snapshot!(index.groups(), @r#"
    [
      {
        "name": "a",
        "pages": [
          {
            "heading": "one",
            "group": "a",
            "output_path": "a/one.html",
            "slug": "one"
          },
          {
            "heading": "three",
            "group": "a",
            "output_path": "a/three.html",
            "slug": "three"
          }
        ]
      },
      {
        "name": "b",
        "pages": [
          {
            "heading": "two",
            "group": "b",
            "output_path": "b/two.html",
            "slug": "two"
          }
        ]
      }
    ]
    "#);
}

#[test]
fn diagnostics_text() {
    let page = build("a/plain.css", fixtures::NO_COMMENTS_CSS);
    let lines: Vec<String> = report(&page).iter().map(ToString::to_string).collect();
    assert_snapshot!(lines.join("\n"), @r"
    Comment missing: a/plain.css
    Heading missing: a/plain.css
    ");
}
