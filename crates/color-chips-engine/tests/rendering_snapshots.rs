use color_chips_engine::{
    ChipOptions, ColorChips, Node, Pipeline, chips::CHIP_CLASS, html, markdown, render_markdown,
};
use pretty_assertions::assert_eq;

#[test]
fn fixture_palette() {
    assert_fixture("palette");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let html = render_markdown(&md, &ChipOptions::default());
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, html.trim_end());
    });
}

fn chips(node: &Node) -> Vec<String> {
    fn walk(node: &Node, out: &mut Vec<String>) {
        if node
            .properties()
            .is_some_and(|p| p.class_name.iter().any(|c| c == CHIP_CLASS))
        {
            out.push(node.text_content());
            return;
        }
        for child in node.children().unwrap_or_default() {
            walk(child, out);
        }
    }
    let mut out = vec![];
    walk(node, &mut out);
    out
}

/// Markdown's own backslash escape turns `\:` into `:`, which the rewriter
/// then consumes as the escape marker.
#[test]
fn markdown_escape_reaches_rewriter() {
    let html = render_markdown("\\:#fff and #fff", &ChipOptions::default());
    assert!(html.starts_with("<p>#fff and <span class=\"color-chip\""));
    assert_eq!(html.matches("color-chip").count(), 1);
    assert!(!html.contains("<p>:"));
}

#[test]
fn chips_in_every_block_kind() {
    let md = "\
# Title #111

> quoted #222

1. item #333

| a | b |
|---|---|
| #444 | `#555` |

```
#666
```
";
    let mut tree = markdown::to_tree(md);
    ColorChips::default().rewrite(&mut tree);
    assert_eq!(chips(&tree), vec!["#111", "#222", "#333", "#444", "#555", "#666"]);
}

#[test]
fn text_survives_round_trip_through_chips() {
    let md = "Mix #abc, rgb(1,2,3) and :#def in one line.";
    let mut tree = markdown::to_tree(md);
    ColorChips::default().rewrite(&mut tree);
    assert_eq!(
        tree.text_content(),
        "Mix #abc, rgb(1,2,3) and #def in one line."
    );
    assert_eq!(chips(&tree), vec!["#abc", "rgb(1,2,3)"]);
}

#[test]
fn configured_styles_reach_markup() {
    let options = ChipOptions::default()
        .with_chip_style("border-radius", "0")
        .with_wrapper_style("margin-right", "4px");
    let mut tree = markdown::to_tree("#fff");
    Pipeline::new()
        .with_stage(ColorChips::new(&options))
        .run(&mut tree);
    let html = html::render(&tree);

    assert!(html.contains("border-radius:0;background-color:#fff"));
    assert!(!html.contains("border-radius:2px"));
    assert!(html.contains("margin-right:4px"));
    assert!(!html.contains("margin-right:12px"));
}

#[test]
fn plain_markdown_is_untouched() {
    let md = "hello world\n\n* one\n* two\n";
    let mut tree = markdown::to_tree(md);
    let before = tree.clone();
    ColorChips::default().rewrite(&mut tree);
    assert_eq!(tree, before);
}
