//! Property tests for the navigation state machine.

use proptest::prelude::*;

use menutree::{
    Branch, Layer, MenuError, MenuTree, NavigationState, Navigator, Outcome, PromptResponse,
    ScriptedPrompter, Transition,
};

fn label() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,6}").unwrap()
}

fn branch() -> impl Strategy<Value = Branch> {
    prop_oneof![
        3 => proptest::collection::vec(label(), 1..=4).prop_map(Branch::Submenu),
        1 => Just(Branch::Leaf),
        1 => Just(Branch::Exit),
    ]
}

fn tree() -> impl Strategy<Value = MenuTree> {
    (
        proptest::collection::vec(label(), 1..=4),
        proptest::collection::vec(proptest::collection::vec(branch(), 0..=5), 0..=3),
    )
        .prop_map(|(top, rest)| {
            let mut layers = vec![Layer::new(vec![Branch::Submenu(top)])];
            layers.extend(rest.into_iter().map(Layer::new));
            MenuTree::new(layers).unwrap()
        })
}

fn responses() -> impl Strategy<Value = Vec<(bool, i64)>> {
    proptest::collection::vec((any::<bool>(), -1i64..6), 0..=16)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A session never panics and every result points at a real option.
    #[test]
    fn property_navigate_results_are_consistent(tree in tree(), answers in responses()) {
        let mut navigator = Navigator::new(ScriptedPrompter::new(answers));

        match navigator.navigate(&tree, "Pick:") {
            Ok(Outcome::Selected(selection)) => {
                prop_assert!(selection.layer < tree.depth());
                let options = tree
                    .options(selection.layer, selection.root_branch)
                    .expect("selection refers to a displayed screen");
                prop_assert_eq!(&options[selection.option], &selection.label);
                prop_assert_eq!(selection.trail.len(), selection.layer + 1);
                prop_assert_eq!(selection.trail.last().copied(), Some(selection.option));
            }
            Ok(Outcome::Exited) => {}
            Err(MenuError::InputClosed) | Err(MenuError::OutOfRangeSelection { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    /// PROPERTY: Declining never moves the user.
    #[test]
    fn property_decline_keeps_position(tree in tree(), answers in responses(), selected in -1i64..6) {
        let mut state = NavigationState::new();
        for (confirmed, selected) in answers {
            let before = state.clone();
            match state.apply(&tree, PromptResponse { confirmed, selected }) {
                Ok(Transition::Finished(_)) => {
                    state = before;
                    break;
                }
                Ok(_) => {}
                Err(_) => prop_assert_eq!(&state, &before),
            }
        }

        let (layer, branch) = (state.layer, state.branch);
        let result = state.apply(&tree, PromptResponse { confirmed: false, selected });
        prop_assert_eq!(result.unwrap(), Transition::Declined);
        prop_assert_eq!((state.layer, state.branch), (layer, branch));
    }

    /// PROPERTY: A rejected answer leaves the state exactly as it was.
    #[test]
    fn property_errors_leave_state_unchanged(tree in tree(), answers in responses()) {
        let mut state = NavigationState::new();
        for (confirmed, selected) in answers {
            let before = state.clone();
            match state.apply(&tree, PromptResponse { confirmed, selected }) {
                Ok(Transition::Finished(_)) => break,
                Ok(_) => {
                    prop_assert!(state.current_options(&tree).is_ok());
                    prop_assert_eq!(state.trail().len(), state.layer);
                }
                Err(_) => prop_assert_eq!(&state, &before),
            }
        }
    }

    /// PROPERTY: Confirming the exit slot of the top screen always ends the session.
    #[test]
    fn property_exit_at_top_always_exits(mut labels in proptest::collection::vec(label(), 1..=4)) {
        labels.push("Exit".to_string());
        let exit = labels.len() as i64 - 1;
        let mut second = vec![Branch::Leaf; labels.len() - 1];
        second.push(Branch::Exit);
        let tree = MenuTree::new(vec![
            Layer::new(vec![Branch::Submenu(labels)]),
            Layer::new(second),
        ])
        .unwrap();

        let outcome = Navigator::new(ScriptedPrompter::new([(true, exit)]))
            .navigate(&tree, "Pick:")
            .unwrap();
        prop_assert_eq!(outcome, Outcome::Exited);
    }

    /// PROPERTY: Backing out of any second-layer screen returns to the top screen.
    #[test]
    fn property_back_returns_to_top(
        screens in 1usize..=4,
        width in 1usize..=3,
        pick in any::<proptest::sample::Index>(),
    ) {
        let top: Vec<String> = (0..screens).map(|i| format!("menu{}", i)).collect();

        // Every second-layer screen ends with a back slot at index `width`.
        let mut labels: Vec<String> = (0..width).map(|i| format!("item{}", i)).collect();
        labels.push("Back".to_string());
        let second = vec![Branch::Submenu(labels); screens];
        let mut third = vec![Branch::Leaf; width];
        third.push(Branch::Exit);

        let tree = MenuTree::new(vec![
            Layer::new(vec![Branch::Submenu(top)]),
            Layer::new(second),
            Layer::new(third),
        ])
        .unwrap();

        let chosen = pick.index(screens) as i64;
        let mut state = NavigationState::new();

        let first = state.apply(&tree, PromptResponse { confirmed: true, selected: chosen }).unwrap();
        prop_assert_eq!(first, Transition::Descended);
        prop_assert_eq!((state.layer, state.branch), (1, chosen as usize));

        let back = state.apply(&tree, PromptResponse { confirmed: true, selected: width as i64 }).unwrap();
        prop_assert_eq!(back, Transition::Backed);
        prop_assert_eq!((state.layer, state.branch), (0, 0));
        prop_assert!(state.trail().is_empty());
    }
}
