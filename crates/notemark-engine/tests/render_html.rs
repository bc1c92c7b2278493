use notemark_engine::render;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn plain_text_round_trips_as_one_paragraph() {
    assert_eq!(
        render("just words, no markup here"),
        "<p>just words, no markup here</p>"
    );
}

#[test]
fn html_metacharacters_never_survive_unescaped() {
    assert_eq!(
        render("a & b < c > d"),
        "<p>a &amp; b &lt; c &gt; d</p>"
    );
}

#[test]
fn script_injection_is_inert() {
    let html = render("<img src=x onerror=alert(1)>");
    assert_eq!(html, "<p>&lt;img src=x onerror=alert(1)&gt;</p>");
}

#[rstest]
#[case("")]
#[case("\n")]
#[case("***")]
#[case("~~~")]
#[case("|")]
#[case(">")]
#[case("``````")]
#[case("![](")]
fn render_is_total(#[case] input: &str) {
    // must return without panicking, whatever the input
    let _ = render(input);
}

#[test]
fn h1_heading() {
    assert_eq!(render("# A"), r#"<h1 style="font-size: 2em;">A</h1>"#);
}

#[test]
fn seven_hashes_fall_through_to_paragraph() {
    assert_eq!(render("####### A"), "<p>####### A</p>");
}

#[rstest]
#[case("## A", "h2")]
#[case("### A", "h3")]
#[case("#### A", "h4")]
#[case("##### A", "h5")]
#[case("###### A", "h6")]
fn heading_levels_map_to_tags(#[case] input: &str, #[case] tag: &str) {
    let html = render(input);
    assert!(html.starts_with(&format!("<{tag} ")));
    assert!(html.ends_with(&format!("</{tag}>")));
}

#[test]
fn bare_rule_is_exactly_hr() {
    assert_eq!(render("---"), "<hr>");
    assert_eq!(render("___"), "<hr>");
    assert_eq!(render("***"), "<hr>");
}

#[test]
fn code_fence_preserves_escaped_literal_content() {
    let html = render("```js\nlet x = 1 < 2;\n```");
    assert!(html.contains("x = 1 &lt; 2;"));
    assert!(html.contains(">js</div>"));
    assert!(html.contains("<pre><code>"));
}

#[test]
fn fence_body_is_not_block_parsed() {
    let html = render("```\n# not a heading\n> not a quote\n```");
    assert!(html.contains("# not a heading\n&gt; not a quote"));
    assert!(!html.contains("<h1"));
    assert!(!html.contains("<blockquote>"));
}

#[test]
fn two_pipe_lines_without_separator_are_not_a_table() {
    assert_eq!(render("a|b\nc|d"), "<p>a|b</p>\n<p>c|d</p>");
}

#[test]
fn separator_row_makes_a_table() {
    assert_eq!(
        render("a|b\n-|-\nc|d"),
        "<table><thead><tr><th>a</th><th>b</th></tr></thead>\
         <tbody><tr><td>c</td><td>d</td></tr></tbody></table>"
    );
}

#[test]
fn table_without_body_rows_still_renders() {
    let html = render("a|b\n-|-");
    assert!(html.contains("<thead><tr><th>a</th><th>b</th></tr></thead><tbody></tbody>"));
}

#[test]
fn blank_run_collapses_to_one_break() {
    assert_eq!(render("A\n\n\n\nB"), "<p>A</p>\n<br>\n<p>B</p>");
}

#[test]
fn nested_blockquote_shape() {
    assert_eq!(
        render(">a\n>>b\n>c"),
        "<blockquote><p>a</p><blockquote><p>b</p></blockquote><p>c</p></blockquote>"
    );
}

// Golden assertion for the greater-than-base folding rule.
#[test]
fn quote_level_jump_folds() {
    assert_eq!(
        render(">a\n>>>b"),
        "<blockquote><p>a</p><blockquote><p>b</p></blockquote></blockquote>"
    );
}

#[test]
fn mixed_document_end_to_end() {
    let note = "# Title\n\nintro with **bold** text\n\n> quoted\n\n---\n\n```rs\nfn main() {}\n```";
    let html = render(note);
    let expected = concat!(
        r#"<h1 style="font-size: 2em;">Title</h1>"#,
        "\n<br>\n",
        r#"<p>intro with <strong style="font-weight: bold;">bold</strong> text</p>"#,
        "\n<br>\n",
        "<blockquote><p>quoted</p></blockquote>",
        "\n<br>\n",
        "<hr>",
        "\n<br>\n",
        r#"<div style="background: #282c34; border-radius: 6px; padding: 8px 12px; margin: 8px 0;">"#,
        r#"<div style="font-size: 0.8em; opacity: 0.7;">rs</div>"#,
        "<pre><code>fn main() {}</code></pre></div>",
    );
    assert_eq!(html, expected);
}
