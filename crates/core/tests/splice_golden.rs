use insta::assert_snapshot;
use marksplice_core::splice::{Document, InsertMode, SectionedTextEditor};

const DAILY: &str = "# 2024-03-09\n## Tasks\n- [ ] water plants\n## Journal\nQuiet morning.";

fn insert(marker: &str, fragment: &str, mode: InsertMode) -> String {
    SectionedTextEditor::insert_into_document(
        &Document::new("2024-03-09", DAILY),
        marker,
        fragment,
        mode,
    )
    .unwrap()
    .content
}

#[test]
fn golden_append_task() {
    assert_snapshot!(insert("## Tasks", "- [ ] call mum", InsertMode::Append), @r"
    # 2024-03-09
    ## Tasks
    - [ ] call mum
    - [ ] water plants
    ## Journal
    Quiet morning.
    ");
}

#[test]
fn golden_prepend_before_journal() {
    assert_snapshot!(insert("## Journal", "- [ ] buy bread", InsertMode::Prepend), @r"
    # 2024-03-09
    ## Tasks
    - [ ] water plants
    - [ ] buy bread
    ## Journal
    Quiet morning.
    ");
}

#[test]
fn golden_append_to_end() {
    assert_snapshot!(insert("", "Walked to the river.", InsertMode::Append), @r"
    # 2024-03-09
    ## Tasks
    - [ ] water plants
    ## Journal
    Quiet morning.
    Walked to the river.
    ");
}
