//! Scenario: Changing One's Mind
//!
//! User journey:
//! 1. Picks Coffee, declines, picks it again
//! 2. Backs out of the coffee menu
//! 3. Looks at tea, backs out again
//! 4. Leaves without ordering

use crate::common::*;

#[test]
fn scenario_browse_and_leave() {
    let env = TestEnv::new();

    let answers = [
        "1\nn\n", // Coffee? no
        "1\ny\n", // Coffee
        "3\ny\n", // Back
        "2\ny\n", // Tea
        "3\n\n",  // Back
        "3\ny\n", // Exit
    ]
    .concat();
    let result = env.run(&["--tree", DRINKS_TREE], &answers);

    assert!(result.success, "session failed:\n{}", result.combined_output());
    assert_eq!(result.last_line(), "Are you sure?(Y/n):");
    assert!(result.stdout.contains("1: Espresso"));
    assert!(result.stdout.contains("1: Green"));
    assert!(result.stdout.contains("3: Exit <"));
}

#[test]
fn scenario_back_then_order_something_else() {
    let env = TestEnv::new();

    let result = env.run(&["--tree", DRINKS_TREE], "1\ny\n3\ny\n2\ny\n2\ny\n");

    assert!(result.success, "session failed:\n{}", result.combined_output());
    assert_eq!(result.last_line(), "1 1 1");
}

#[test]
fn scenario_walks_away_mid_menu() {
    let env = TestEnv::new();

    let result = env.run(&["--tree", DRINKS_TREE], "1\ny\n");

    assert_eq!(result.exit_code, 3);
    assert!(result.stderr.contains("input closed"));
}
