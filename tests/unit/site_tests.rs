use std::fs;
use std::path::Path;

use tempfile::TempDir;

use stylebook::config::{Config, IdMode};
use stylebook::markdown::CommonMark;
use stylebook::site::{README_PLACEHOLDER, Site, TeraTemplate};
use stylebook::test_utils::fixtures;
use stylebook::utils::fs::LocalFs;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn project() -> TempDir {
    let temp = TempDir::new().unwrap();
    write(temp.path(), "styles/base.css", fixtures::BASE_CSS);
    write(temp.path(), "styles/controls/button.scss", fixtures::BUTTON_SCSS);
    write(temp.path(), "styles/forms/input.less", fixtures::INPUT_LESS);
    temp
}

fn config() -> Config {
    let mut config = Config::default();
    config.examples.ids = IdMode::Sequential;
    config
}

#[test]
fn build_on_disk() {
    let temp = project();
    let template = TeraTemplate::bundled().unwrap();
    let mut site = Site::new(&config(), temp.path(), &LocalFs, &CommonMark, &template);
    let report = site.build().unwrap();

    let dest = temp.path().join("styleguide");
    for page in ["base.html", "controls/button.html", "forms/input.html", "index.html"] {
        assert!(dest.join(page).is_file(), "missing {page}");
    }
    assert_eq!(report.written.len(), 4);
    assert!(report.diagnostics.is_empty());

    let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert_eq!(readme, README_PLACEHOLDER);

    let button = fs::read_to_string(dest.join("controls/button.html")).unwrap();
    assert!(button.contains("<title>Buttons | Style guide</title>"));
    assert!(button.contains("<div class=\"sb-result\"><button class=\"btn\">Go</button></div>"));
    assert!(button.contains("<style>"));
}

#[test]
fn rebuild_is_stable_with_sequential_ids() {
    let temp = project();
    let template = TeraTemplate::bundled().unwrap();
    let output = temp.path().join("styleguide/controls/button.html");

    Site::new(&config(), temp.path(), &LocalFs, &CommonMark, &template).build().unwrap();
    let first = fs::read_to_string(&output).unwrap();
    Site::new(&config(), temp.path(), &LocalFs, &CommonMark, &template).build().unwrap();
    assert_eq!(first, fs::read_to_string(&output).unwrap());
}

#[test]
fn readme_in_source_root_wins() {
    let temp = project();
    write(temp.path(), "styles/readme.md", "# Inner\n");
    write(temp.path(), "README.md", "# Outer\n");
    let template = TeraTemplate::bundled().unwrap();
    let report = Site::new(&config(), temp.path(), &LocalFs, &CommonMark, &template)
        .build()
        .unwrap();
    assert!(!report.readme_created);
    let index = fs::read_to_string(temp.path().join("styleguide/index.html")).unwrap();
    assert!(index.contains("<h1>Inner</h1>"));
}
