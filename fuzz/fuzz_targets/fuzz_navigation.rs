#![no_main]

use libfuzzer_sys::fuzz_target;
use menutree::{MenuTree, Navigator, ScriptedPrompter};

const TREE: &str = r#"[
  [["Coffee", "Tea", "Exit"]],
  [["Espresso", "Latte", "Back"], ["Green", "Black", "Back"], []],
  [null, null, []]
]"#;

fuzz_target!(|data: &[u8]| {
    let Ok(tree) = MenuTree::from_json(TREE) else {
        return;
    };
    // Each byte pair is one answer: confirmation bit and a selection.
    let answers = data
        .chunks_exact(2)
        .map(|pair| (pair[0] & 1 == 1, i64::from(pair[1] as i8)));
    let _ = Navigator::new(ScriptedPrompter::new(answers)).navigate(&tree, "Pick:");
});
