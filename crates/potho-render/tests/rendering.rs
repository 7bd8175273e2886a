use potho_render::{
    BlockKind, MathKind,
    parsing::{render, render_str, render_value, snapshot},
    transcript::{parse_payload, parse_transcript, render_pointer, render_transcript},
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}

/// Renders, checks span invariants and returns `(kind, leaves)` per block.
fn rendered(text: &str) -> Vec<(String, Vec<String>)> {
    let blocks = render_str(text);
    snapshot::invariants(text, &blocks);
    snapshot::normalize(text, &blocks)
        .blocks
        .into_iter()
        .map(|b| (b.kind, b.leaves))
        .collect()
}

fn block(kind: &str, leaves: &[&str]) -> (String, Vec<String>) {
    (
        kind.to_string(),
        leaves.iter().map(|l| l.to_string()).collect(),
    )
}

#[rstest]
#[case("", 1)]
#[case("one line", 1)]
#[case("a\nb", 2)]
#[case("a\nb\n", 3)]
#[case("\n\n\n", 4)]
#[case("* a\n\n* b\r\nc", 4)]
fn one_block_per_line(#[case] text: &str, #[case] lines: usize) {
    let blocks = render_str(text);
    snapshot::invariants(text, &blocks);
    assert_eq!(blocks.len(), lines);
    let starts: Vec<usize> = blocks.iter().map(|b| b.span.start).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);
}

#[test]
fn bullet_detection_requires_space() {
    assert_eq!(
        rendered("* hello\n*hello"),
        vec![
            block("Bullet", &[r#"Text("hello")"#]),
            block("Paragraph", &[r#"Text("*hello")"#]),
        ]
    );
}

#[rstest]
#[case("a**b**c", &[r#"Text("a")"#, r#"BoldText("b")"#, r#"Text("c")"#])]
#[case("a**b", &[r#"Text("a")"#, r#"BoldText("b")"#])]
#[case("**a**b**c", &[r#"BoldText("a")"#, r#"Text("b")"#, r#"BoldText("c")"#])]
fn bold_parity(#[case] text: &str, #[case] leaves: &[&str]) {
    assert_eq!(rendered(text), vec![block("Paragraph", leaves)]);
}

#[rstest]
#[case("$$x^2$$", &[r#"Block("x^2")"#])]
#[case("$x$ + $y$", &[r#"Inline("x")"#, r#"Text(" + ")"#, r#"Inline("y")"#])]
#[case("$a$ and $b$", &[r#"Inline("a")"#, r#"Text(" and ")"#, r#"Inline("b")"#])]
#[case("price: $5", &[r#"Text("price: $5")"#])]
fn math_extraction(#[case] text: &str, #[case] leaves: &[&str]) {
    assert_eq!(rendered(text), vec![block("Paragraph", leaves)]);
}

#[test]
fn block_math_leaves_no_dollars() {
    let blocks = render_str("$$x^2$$");
    assert_eq!(blocks[0].leaves.len(), 1);
    assert_eq!(blocks[0].leaves[0].math_kind, MathKind::Block);
    assert!(!blocks[0].leaves[0].text.contains('$'));
}

#[test]
fn absent_and_non_string_input_render_nothing() {
    assert!(render(None).is_empty());
    assert!(render_value(&json!(null)).is_empty());
    assert!(render_value(&json!(42)).is_empty());
}

#[test]
fn combined_bullet_bold_and_math() {
    let text = "* The answer is **42** since $a=b$";
    let blocks = render_str(text);
    snapshot::invariants(text, &blocks);

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].kind, BlockKind::Bullet);

    let leaves: Vec<(&str, bool, MathKind)> = blocks[0]
        .leaves
        .iter()
        .map(|l| (l.text.as_str(), l.emphasized, l.math_kind))
        .collect();
    assert_eq!(
        leaves,
        vec![
            ("The answer is ", false, MathKind::Text),
            ("42", true, MathKind::Text),
            (" since ", false, MathKind::Text),
            ("a=b", false, MathKind::Inline),
        ]
    );
}

#[rstest]
#[case("**")]
#[case("***")]
#[case("$")]
#[case("$$$")]
#[case("$$$$$")]
#[case("* ")]
#[case("*")]
#[case("** $ ** $ **")]
#[case("পথ **প্রদর্শক** $\\alpha$")]
#[case("\r\n\r\n")]
fn malformed_input_never_panics_and_stays_lossless(#[case] text: &str) {
    let blocks = render_str(text);
    snapshot::invariants(text, &blocks);
}

#[test]
fn fixture_career_reply() {
    let md = fixture("career_reply.md");
    assert_eq!(
        rendered(&md),
        vec![
            block("Paragraph", &[r#"Text("Here is your roadmap:")"#]),
            block(
                "Bullet",
                &[
                    r#"BoldText("Step 1:")"#,
                    r#"Text(" Finish HSC with GPA ")"#,
                    r#"Inline("\\geq 4.5")"#,
                ]
            ),
            block(
                "Bullet",
                &[
                    r#"BoldText("Step 2:")"#,
                    r#"Text(" Prepare for the admission test")"#,
                ]
            ),
            block("Paragraph", &[]),
            block(
                "Paragraph",
                &[
                    r#"Text("Expected growth: ")"#,
                    r#"Block("y = 2^x")"#,
                    r#"Text(" per year.")"#,
                ]
            ),
            block("Paragraph", &[r#"Text("Budget around $500 for books")"#]),
            block("Paragraph", &[]),
        ]
    );
}

#[test]
fn fixture_analysis_payload() {
    let payload = parse_payload(&fixture("analysis.json")).unwrap();
    let blocks = render_pointer(&payload, "/analysis");
    let snap = snapshot::normalize(payload["analysis"].as_str().unwrap(), &blocks);
    let leaves: Vec<Vec<String>> = snap.blocks.into_iter().map(|b| b.leaves).collect();

    assert_eq!(
        leaves,
        vec![
            vec![r#"BoldText("Strengths:")"#.to_string(), r#"Text(" algebra")"#.to_string()],
            vec![
                r#"Text("Revise ")"#.to_string(),
                r#"Inline("\\sin^2 x + \\cos^2 x = 1")"#.to_string(),
            ],
            vec![
                r#"Text("Practice ")"#.to_string(),
                r#"BoldText("timed")"#.to_string(),
                r#"Text(" tests")"#.to_string(),
            ],
        ]
    );
}

#[test]
fn fixture_transcript() {
    let msgs = parse_transcript(&fixture("transcript.json")).unwrap();
    let rendered = render_transcript(&msgs);

    assert_eq!(rendered.len(), 3);
    assert_eq!(rendered[0].blocks[0].plain_text(), "What is **2 + 2**?");
    assert_eq!(rendered[1].blocks[0].plain_text(), "The answer is 4 since 2+2=4");
    assert!(rendered[2].blocks.is_empty());
}
