//! Sample stylesheets shared by unit and integration tests.

/// Root-level file with a setext heading and prose only.
pub const BASE_CSS: &str = "\
/*
  Base
  ====

  Resets and typography shared by every page.
*/
html { font-family: sans-serif; }
";

/// A heading comment followed by a comment with a fenced example.
pub const BUTTON_SCSS: &str = "\
/*
  Buttons
  =======

  Use `.btn` for every clickable control.

  ```
  <button class=\"btn\">Go</button>
  ```
*/
.btn { color: red; }

/*
  Disabled buttons keep their shape.

      <button class=\"btn\" disabled>Stop</button>
*/
.btn[disabled] { opacity: .5; }
";

/// A stylesheet without a single comment.
pub const NO_COMMENTS_CSS: &str = ".plain { margin: 0; }\n";

/// Docblock-style comment with continuation markers.
pub const INPUT_LESS: &str = "\
/**
 * Inputs
 * ======
 *
 * Text fields.
 *
 * ```html
 * <input type=\"text\">
 * ```
 */
input { border: 1px solid; }
";

/// Sass file with a heading but no example.
pub const SASS_TITLE: &str = "/*\n  Title\n  =====\n\n  Paragraph text.\n*/\n";
