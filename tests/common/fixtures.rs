//! Menu tree fixtures shared across tests.

/// Two layers: A/B/Exit on top, then [X, Y], [Z] and an exit slot.
pub const SMALL_TREE: &str = r#"[[["A","B","Exit"]],[["X","Y"],["Z"],[]]]"#;

/// Three layers with back options on the second layer.
pub const DRINKS_TREE: &str = r#"[
  [["Coffee", "Tea", "Exit"]],
  [["Espresso", "Latte", "Back"], ["Green", "Black", "Back"], []],
  [null, null, []]
]"#;
