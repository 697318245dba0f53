//! Property tests for dependency closure and conflict detection.

use std::collections::BTreeSet;

use proptest::prelude::*;

use aiml_validator::domain::ports::ModuleSchema;
use aiml_validator::{InMemorySchemaSource, ModuleResolver, Taxonomy};

const MODULES: usize = 6;

fn name(i: usize) -> String {
    format!("m{i}")
}

/// Random dependency or conflict lists for `MODULES` modules; cycles allowed.
fn edges() -> impl Strategy<Value = Vec<Vec<usize>>> {
    proptest::collection::vec(proptest::collection::vec(0..MODULES, 0..4), MODULES)
}

fn source(dependencies: &[Vec<usize>], conflicts: &[Vec<usize>]) -> InMemorySchemaSource {
    (0..MODULES).fold(InMemorySchemaSource::new(), |source, i| {
        source.with_module(
            &name(i),
            ModuleSchema {
                dependencies: dependencies[i].iter().copied().map(name).collect(),
                conflicts: conflicts[i].iter().copied().map(name).collect(),
                ..ModuleSchema::default()
            },
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Closing an already-closed set returns the same set.
    #[test]
    fn property_closure_idempotent(
        dependencies in edges(),
        start in proptest::collection::vec(0..MODULES, 0..4),
    ) {
        let resolver = ModuleResolver::new(source(&dependencies, &vec![vec![]; MODULES]), Taxonomy::v2_0_1());
        let start: Vec<String> = start.into_iter().map(name).collect();

        let once = resolver.close_dependencies(&start);
        let twice = resolver.close_dependencies(&once.modules);

        prop_assert_eq!(&once.modules, &twice.modules);
        prop_assert!(once.warnings.is_empty());
        for module in &start {
            prop_assert!(once.modules.contains(module));
        }
    }

    /// PROPERTY: Every declared dependency of a closed module is in the closure.
    #[test]
    fn property_closure_is_closed(
        dependencies in edges(),
        start in proptest::collection::vec(0..MODULES, 1..4),
    ) {
        let resolver = ModuleResolver::new(source(&dependencies, &vec![vec![]; MODULES]), Taxonomy::v2_0_1());
        let closure = resolver.close_dependencies(start.into_iter().map(name));

        for (i, deps) in dependencies.iter().enumerate() {
            if closure.modules.contains(&name(i)) {
                for dep in deps {
                    prop_assert!(closure.modules.contains(&name(*dep)));
                }
            }
        }
    }

    /// PROPERTY: Permuting the input never changes the compatibility verdict
    /// or the set of conflict messages.
    #[test]
    fn property_conflicts_order_independent(
        conflicts in edges(),
        modules in Just((0..MODULES).map(name).collect::<Vec<_>>()).prop_shuffle(),
        take in 0..=MODULES,
    ) {
        let resolver = ModuleResolver::new(source(&vec![vec![]; MODULES], &conflicts), Taxonomy::v2_0_1());
        let selected = &modules[..take];
        let mut sorted = selected.to_vec();
        sorted.sort();

        let shuffled = resolver.check_compatibility(selected);
        let ordered = resolver.check_compatibility(&sorted);

        prop_assert_eq!(shuffled.compatible, ordered.compatible);
        let a: BTreeSet<_> = shuffled.conflicts.iter().collect();
        let b: BTreeSet<_> = ordered.conflicts.iter().collect();
        prop_assert_eq!(a, b);
    }
}
