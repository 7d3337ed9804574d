//! Built-in menu used when no `--tree` is given.

use crate::domain::entities::{Branch, Layer, MenuTree};
use crate::error::MenuResult;

/// Two drinks with two styles each, plus back and exit slots.
///
/// ```text
/// 1: Coffee        -> 1: Espresso  2: Latte  3: Back
/// 2: Tea           -> 1: Green     2: Black  3: Back
/// 3: Exit
/// ```
pub fn sample_tree() -> MenuResult<MenuTree> {
    MenuTree::new(vec![
        Layer::new(vec![Branch::submenu(["Coffee", "Tea", "Exit"])]),
        Layer::new(vec![
            Branch::submenu(["Espresso", "Latte", "Back"]),
            Branch::submenu(["Green", "Black", "Back"]),
            Branch::Exit,
        ]),
        Layer::new(vec![Branch::Leaf, Branch::Leaf, Branch::Exit]),
    ])
}
