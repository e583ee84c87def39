use std::path::Path;

use sitemeta::{collect, parse_source_file, Config, Index};
use tempfile::TempDir;

const SIMPLEST_BODY: &str = "
template: nosuch.template
---
";

const TITLED_BODY: &str = "
template: nosuch.template
title: The INDEX TITLE!! from the Meta Data
---
Content of the thing.
";

/// Write `body` to `filename` under a fresh content root.
fn write_source_file(filename: &str, body: &str) -> (TempDir, Config) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(filename);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, body).unwrap();
    let config = Config::new(tmp.path());
    (tmp, config)
}

#[test]
fn bad_file_is_an_io_error() {
    let tmp = TempDir::new().unwrap();
    let config = Config::new(tmp.path());
    let err = parse_source_file(&config, Path::new("/no/such/file")).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.path(), Path::new("/no/such/file"));

    let err = parse_source_file(&config, Path::new("missing.md")).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn directory_is_not_a_source() {
    let (_tmp, config) = write_source_file("dir/page.md", SIMPLEST_BODY);
    let err = parse_source_file(&config, Path::new("dir")).unwrap_err();
    assert!(!err.is_not_found());
}

#[test]
fn required_keys() {
    let (_tmp, config) = write_source_file("dummy.src", SIMPLEST_BODY);
    let sf = parse_source_file(&config, Path::new("dummy.src")).unwrap();
    assert_eq!(sf.get_string(&config.template_key), "nosuch.template");
    assert!(!sf.get_string(&config.output_key).is_empty());
    assert!(sf.missing_required(&config).is_empty());
}

#[test]
fn missing_template_is_not_a_parse_failure() {
    let (_tmp, config) = write_source_file("bare.md", "---\n");
    let sf = parse_source_file(&config, Path::new("bare.md")).unwrap();
    assert_eq!(sf.get_string(&config.template_key), "");
    assert_eq!(sf.missing_required(&config), ["template"]);
    assert_eq!(sf.body(), "");
}

#[test]
fn deduced_output_filename() {
    for (source, expected) in [("foo.src", "foo.html"), ("a/b/c.txt", "a/b/c.html")] {
        let (_tmp, config) = write_source_file(source, SIMPLEST_BODY);
        let sf = parse_source_file(&config, Path::new(source)).unwrap();
        assert_eq!(sf.get_string(&config.output_key), expected, "{source}");
        assert_eq!(format!("{}.html", sf.basename()), expected);
    }
}

#[test]
fn autopopulated_titles() {
    for (source, expected) in [
        ("2012-01-01-hello.md", "Hello"),
        ("2012-01-01-hello-there.md", "Hello there"),
    ] {
        let (_tmp, config) = write_source_file(source, SIMPLEST_BODY);
        let sf = parse_source_file(&config, Path::new(source)).unwrap();
        assert_eq!(sf.get_string(&config.title_key), expected, "{source}");
    }
}

#[test]
fn blog_output_url() {
    let source = "blog/2012-01-01-hello.md";
    let (_tmp, config) = write_source_file(source, SIMPLEST_BODY);
    let sf = parse_source_file(&config, Path::new(source)).unwrap();
    // no leading slash
    assert_eq!(sf.get_string(&config.output_key), "blog/2012/01/01/hello.html");
    assert_eq!(sf.get_string(&config.date_key), "2012-01-01");
}

#[test]
fn absolute_path_under_content_root() {
    let (tmp, config) = write_source_file("blog/2012-01-01-hello.md", SIMPLEST_BODY);
    let absolute = tmp.path().join("blog/2012-01-01-hello.md");
    let sf = parse_source_file(&config, &absolute).unwrap();
    assert_eq!(sf.basename(), "blog/2012-01-01-hello");
    assert_eq!(sf.get_string(&config.output_key), "blog/2012/01/01/hello.html");
}

#[test]
fn subdirectory_named_like_the_root_keeps_its_prefix() {
    // a relative root (`./.tmpXXXX`) holding a subdirectory of the same name
    let tmp = TempDir::new_in(".").unwrap();
    let name = tmp.path().file_name().unwrap().to_string_lossy().into_owned();
    let root = &Path::new(".").join(&name);
    std::fs::create_dir_all(root.join(&name)).unwrap();
    std::fs::write(root.join(&name).join("page.md"), SIMPLEST_BODY).unwrap();
    std::fs::write(root.join("page.md"), SIMPLEST_BODY).unwrap();

    let config = Config::new(root);
    let nested = parse_source_file(&config, &root.join("page.md")).unwrap();
    let top = parse_source_file(&config, Path::new("page.md")).unwrap();
    assert_eq!(nested.basename(), format!("{name}/page"));
    assert_eq!(
        nested.get_string(&config.output_key),
        format!("{name}/page.html")
    );
    assert_eq!(top.basename(), "page");

    let mut idx = Index::new();
    idx.add(nested);
    idx.add(top);
    assert_eq!(idx.len(), 2);
}

#[test]
fn parent_dir_in_source_path() {
    let (tmp, config) = write_source_file("b.md", SIMPLEST_BODY);
    std::fs::create_dir_all(tmp.path().join("a")).unwrap();
    let sf = parse_source_file(&config, Path::new("a/../b.md")).unwrap();
    assert_eq!(sf.basename(), "b");
    assert_eq!(sf.get_string(&config.output_key), "b.html");
}

#[test]
fn latin1_body_parses() {
    let (tmp, config) = write_source_file("menu.md", "");
    std::fs::write(tmp.path().join("menu.md"), b"template: t\n---\ncaf\xe9\n").unwrap();
    let sf = parse_source_file(&config, Path::new("menu.md")).unwrap();
    assert_eq!(sf.get_string(&config.template_key), "t");
    assert_eq!(sf.body_bytes(), b"caf\xe9\n");
    assert_eq!(sf.get_string(&config.output_key), "menu.html");
}

#[test]
fn explicit_title_wins() {
    let source = "2012-01-01-test-proper-merge-of-index.md";
    let (_tmp, config) = write_source_file(source, TITLED_BODY);
    let sf = parse_source_file(&config, Path::new(source)).unwrap();
    assert_eq!(
        sf.get_string(&config.title_key),
        "The INDEX TITLE!! from the Meta Data"
    );
    assert_eq!(sf.body(), "Content of the thing.\n");
}

#[test]
fn global_index() {
    let source = "2012-01-01-testing-global-index.md";
    let (_tmp, config) = write_source_file(source, TITLED_BODY);
    let sf = parse_source_file(&config, Path::new(source)).unwrap();

    let mut idx = Index::new();
    idx.add(sf.clone());
    idx.add(sf);
    assert_eq!(idx.len(), 1);
    assert_eq!(
        idx[0].get_string(&config.title_key),
        "The INDEX TITLE!! from the Meta Data"
    );
}

#[test]
fn index_page_merges_over_deduced_record() {
    let (tmp, config) = write_source_file("blog/index.md", "---\n");
    let deduced = parse_source_file(&config, Path::new("blog/index.md")).unwrap();

    std::fs::write(
        tmp.path().join("blog/index.md"),
        "template: list.hbs\ntitle: All posts\n---\n",
    )
    .unwrap();
    let explicit = parse_source_file(&config, Path::new("blog/index.md")).unwrap();

    let mut idx = Index::new();
    idx.add(deduced);
    idx.add(explicit);
    assert_eq!(idx.len(), 1);
    let entry = idx.get("blog/index").unwrap();
    assert_eq!(entry.get_string("title"), "All posts");
    assert_eq!(entry.get_string("template"), "list.hbs");
    assert_eq!(entry.get_string("output"), "blog/index.html");
}

#[test]
fn collect_walks_content_root() {
    let (tmp, config) = write_source_file("about.md", SIMPLEST_BODY);
    let root = tmp.path();
    std::fs::create_dir_all(root.join("blog/drafts")).unwrap();
    std::fs::write(root.join("blog/2012-01-02-second.md"), SIMPLEST_BODY).unwrap();
    std::fs::write(root.join("blog/2012-01-01-first.md"), SIMPLEST_BODY).unwrap();
    std::fs::write(root.join("blog/drafts/idea.md"), "---\n").unwrap();
    std::fs::write(root.join(".hidden.md"), SIMPLEST_BODY).unwrap();
    std::fs::create_dir_all(root.join(".git")).unwrap();
    std::fs::write(root.join(".git/HEAD"), "ref").unwrap();

    let idx = collect::collect_index(&config).unwrap();
    let names: Vec<_> = idx.iter().map(|m| m.basename()).collect();
    assert_eq!(
        names,
        [
            "about",
            "blog/2012-01-01-first",
            "blog/2012-01-02-second",
            "blog/drafts/idea",
        ]
    );
    assert_eq!(
        idx.get("blog/2012-01-02-second").unwrap().get_string("output"),
        "blog/2012/01/02/second.html"
    );
}

#[test]
fn collect_missing_root_fails() {
    let tmp = TempDir::new().unwrap();
    let config = Config::new(tmp.path().join("nope"));
    assert!(matches!(
        collect::collect_index(&config),
        Err(sitemeta::CollectError::ReadDir { .. })
    ));
}
