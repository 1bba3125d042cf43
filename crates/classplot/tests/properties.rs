//! Property tests for name resolution and compilation

use std::collections::HashSet;

use classplot::prelude::*;
use proptest::prelude::*;

/// A realm with `count` classes, the first `scoped` of them reachable from one scope
fn realm_with(count: usize, scoped: usize) -> (Realm, ValueId, Vec<ClassRef>) {
    let mut realm = Realm::new();
    let scope = realm.add_object();
    let classes: Vec<ClassRef> = (0..count).map(|_| realm.add_class(ClassDef::new())).collect();
    for (index, class) in classes.iter().take(scoped).enumerate() {
        realm.set_entry(scope, format!("C{}", index), *class).unwrap();
    }
    (realm, scope, classes)
}

proptest! {
    #[test]
    fn distinct_refs_get_distinct_stable_names(
        count in 1usize..24,
        scoped_ratio in 0usize..=100,
        order in proptest::collection::vec(any::<prop::sample::Index>(), 1..48),
    ) {
        let scoped = count * scoped_ratio / 100;
        let (realm, scope, classes) = realm_with(count, scoped);
        let mut compiler = Compiler::new(&realm);
        compiler.add_scope("Ns", scope).unwrap();

        let mut seen = std::collections::HashMap::new();
        for index in order {
            let class = classes[index.index(classes.len())];
            let name = compiler.resolve(class);
            if let Some(previous) = seen.insert(class, name.clone()) {
                prop_assert_eq!(previous, name);
            }
        }

        let names: HashSet<_> = seen.values().cloned().collect();
        prop_assert_eq!(names.len(), seen.len());
    }

    #[test]
    fn anonymous_names_follow_first_seen_order(
        count in 1usize..16,
        order in proptest::collection::vec(any::<prop::sample::Index>(), 1..32),
    ) {
        let (realm, _, classes) = realm_with(count, 0);
        let mut compiler = Compiler::new(&realm);

        let mut first_seen = Vec::new();
        for index in order {
            let class = classes[index.index(classes.len())];
            let name = compiler.resolve(class);
            if !first_seen.contains(&class) {
                first_seen.push(class);
                prop_assert_eq!(name.as_str(), format!("Anonymous{}", first_seen.len()));
            }
        }
    }

    #[test]
    fn chains_compile_ancestors_first(
        depth in 1usize..12,
        extra_roots in proptest::collection::vec(any::<prop::sample::Index>(), 0..6),
    ) {
        let mut realm = Realm::new();
        let mut chain = vec![realm.add_class(ClassDef::new().field("root"))];
        for level in 1..depth {
            let parent = chain[level - 1];
            chain.push(realm.add_class(ClassDef::new().extends(parent).field(format!("f{}", level))));
        }

        let mut compiler = Compiler::new(&realm);
        compiler.add_class(chain[depth - 1]).unwrap();
        for index in extra_roots {
            compiler.add_class(chain[index.index(depth)]).unwrap();
        }
        let graph = compiler.compile_all().unwrap();

        prop_assert_eq!(graph.len(), depth);
        let positions: Vec<_> = graph.names().cloned().collect();
        for class in graph.classes() {
            if let Some(parent) = &class.parent {
                let own = positions.iter().position(|name| name == &class.name);
                let parents = positions.iter().position(|name| name == parent);
                prop_assert!(parents < own);
            }
        }
    }

    #[test]
    fn render_is_deterministic(
        depth in 1usize..6,
        notes in any::<bool>(),
    ) {
        let mut realm = Realm::new();
        let mut parent = None;
        let mut last = None;
        for level in 0..depth {
            let mut def = ClassDef::new()
                .method(format!("m{}", level), "function(a, b) {}")
                .constructor(format!("function() {{ return {{ m{0}: this.m{0} }}; }}", level));
            if let Some(parent) = parent {
                def = def.extends(parent);
            }
            let class = realm.add_class(def);
            parent = Some(class);
            last = Some(class);
        }

        let mut compiler = Compiler::new(&realm);
        compiler.add_class(last.unwrap()).unwrap();
        if !notes {
            compiler.disable_notes();
        }
        let first = compiler.render().unwrap();
        let second = compiler.render().unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.matches("....").count(), depth);
    }
}
