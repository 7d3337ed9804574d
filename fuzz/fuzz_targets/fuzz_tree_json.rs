#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(tree) = menutree::MenuTree::from_json(content) {
            // An accepted tree always has a top-level screen to show
            assert!(tree.options(0, 0).is_some());
        }
    }
});
