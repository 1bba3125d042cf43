//! Integration tests for the public API

use classplot::prelude::*;

const NOTE: &str = "note left of A {\n    Class has a public API. Inherited methods are\n    \
                    protected unless specified in this class.\n}\n\n";

fn class_a(realm: &mut Realm) -> ClassRef {
    realm.add_class(
        ClassDef::new()
            .field("x")
            .method("y", "function(a, b) {}")
            .constructor("function() { return { y: this.y }; }"),
    )
}

fn scope_with(realm: &mut Realm, entries: &[(&str, ValueId)]) -> ValueId {
    let scope = realm.add_object();
    for (name, value) in entries {
        realm.set_entry(scope, *name, *value).unwrap();
    }
    scope
}

#[test]
fn test_public_surface_scenario() {
    let mut realm = Realm::new();
    let a = class_a(&mut realm);
    let root = scope_with(&mut realm, &[("A", a)]);

    let mut compiler = Compiler::with_roots(&realm, [a], [("Root", root)]).unwrap();
    let output = compiler.render().unwrap();

    assert!(output.starts_with(
        "class Root.A {\n    + y(a, b)\n    ....\n    - x\n    - __construct()\n}\n\n"
    ));
    assert!(output.contains("note left of Root.A {"));
}

#[test]
fn test_public_surface_scenario_exact() {
    let mut realm = Realm::new();
    let a = realm.add_class(
        ClassDef::new()
            .field("x")
            .method("y", "function(a, b) {}")
            .expose("y", "this.y"),
    );

    let mut compiler = Compiler::new(&realm);
    compiler.add_class(a).unwrap();
    let output = compiler.render().unwrap();

    let expected = format!(
        "class Anonymous1 {{\n    + y(a, b)\n    ....\n    - x\n}}\n\n{}",
        NOTE.replace("of A", "of Anonymous1")
    );
    assert_eq!(output, expected);
}

#[test]
fn test_notes_toggle() {
    let mut realm = Realm::new();
    let a = class_a(&mut realm);
    let mut compiler = Compiler::new(&realm);
    compiler.add_class(a).unwrap();

    compiler.disable_notes();
    assert!(!compiler.render().unwrap().contains("note left of"));

    compiler.enable_notes();
    assert!(compiler.render().unwrap().contains("note left of"));
}

#[test]
fn test_subclass_without_surface() {
    let mut realm = Realm::new();
    let a = realm.add_class(ClassDef::new().field("x"));
    let b = realm.add_class(ClassDef::new().extends(a).method("run", "function(speed) {}"));
    let scope = scope_with(&mut realm, &[("A", a), ("B", b)]);

    let mut compiler = Compiler::with_roots(&realm, [b], [("S", scope)]).unwrap();
    let output = compiler.render().unwrap();

    assert_eq!(
        output,
        "class S.A {\n    + x\n}\n\nclass S.B extends S.A {\n    + run(speed)\n}\n\n"
    );
    assert!(!output.contains("...."));
    assert!(!output.contains("note"));
}

#[test]
fn test_relation_scenario() {
    let realm = Realm::new();
    let mut compiler = Compiler::new(&realm);
    compiler.add_relation(Relation::new("A", "B").with_label("-->").with_cardinality("1", "*"));

    assert_eq!(compiler.render().unwrap(), "A \"1\" --> \"*\" B\n");
}

#[test]
fn test_self_referential_namespace() {
    let mut realm = Realm::new();
    let app = realm.add_object();
    let models = realm.add_object();
    let user = realm.add_class(ClassDef::new());
    realm.set_entry(app, "Models", models).unwrap();
    realm.set_entry(models, "App", app).unwrap();
    realm.set_entry(models, "Parent", models).unwrap();
    realm.set_entry(models, "User", user).unwrap();

    let mut compiler = Compiler::new(&realm);
    compiler.add_scope("App", app).unwrap();
    assert_eq!(compiler.resolve(user).as_str(), "App.Models.User");
}

#[test]
fn test_diamond_ancestry_yields_one_node() {
    let mut realm = Realm::new();
    let base = realm.add_class(ClassDef::new().field("id"));
    let left = realm.add_class(ClassDef::new().extends(base));
    let right = realm.add_class(ClassDef::new().extends(base));
    let scope = scope_with(&mut realm, &[("Base", base), ("Left", left), ("Right", right)]);

    let mut compiler = Compiler::with_roots(&realm, [left, right, base], [("N", scope)]).unwrap();
    let graph = compiler.compile_all().unwrap();

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.names().filter(|name| name.as_str() == "N.Base").count(), 1);
}

#[test]
fn test_parents_are_present_after_compile_all() {
    let mut realm = Realm::new();
    let root = realm.add_class(ClassDef::new());
    let mid = realm.add_class(ClassDef::new().extends(root));
    let leaf = realm.add_class(ClassDef::new().extends(mid));

    let mut compiler = Compiler::new(&realm);
    compiler.add_class(leaf).unwrap();
    let graph = compiler.compile_all().unwrap();

    let names: Vec<&str> = graph.names().map(QualifiedName::as_str).collect();
    // Ancestors precede descendants
    assert_eq!(names, vec!["Anonymous3", "Anonymous2", "Anonymous1"]);
    for class in graph.classes() {
        if let Some(parent) = &class.parent {
            assert!(graph.contains(parent));
        }
    }
}

#[test]
fn test_surface_names_never_in_members() {
    let mut realm = Realm::new();
    let class = realm.add_class(
        ClassDef::new()
            .method("open", "function(path) {}")
            .method("close", "function() {}")
            .field("handle")
            .constructor("function() { return { open: this.open, handle: this.handle }; }"),
    );

    let mut compiler = Compiler::new(&realm);
    let name = compiler.compile(class).unwrap();
    let node = compiler.graph().class(name.as_str()).unwrap();

    for key in node.public_surface.keys() {
        assert!(!node.members.contains_key(key));
    }
    assert_eq!(node.public_surface["handle"].kind, MemberKind::Field);
    assert!(node.members.contains_key("close"));
}

#[test]
fn test_render_twice_is_identical() {
    let mut realm = Realm::new();
    let a = class_a(&mut realm);
    let iface = realm.add_interface(InterfaceDef::new().require("y", "function"));
    let b = realm.add_class(ClassDef::new().extends(a).implements(iface));

    let mut compiler = Compiler::new(&realm);
    compiler.add_classes([b, a]).unwrap();
    compiler.add_relation(Relation::new("Anonymous1", "Anonymous2"));

    let first = compiler.render().unwrap();
    let second = compiler.render().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_demo_application() {
    let output = classplot::render(include_str!("../../../demos/application.json")).unwrap();

    let expected = "\
interface Application.System.AuthenticationManagerInterface {
    + authenticate()
}

class Application.System.AuthenticationManager {
    + authenticate(username, password)
    ....
    - __construct()
    - getUserByUsername(username)
}

note left of Application.System.AuthenticationManager {
    Class has a public API. Inherited methods are
    protected unless specified in this class.
}

class Application.User.UserProvider {
    + addUser(User)
    + getUser(name)
    + removeUser(name)
}

interface Application.User.UserInterface {
    + getUsername()
    + getName()
    + getSurname()
    + getEmail()
}

class Application.User.User {
    + getUsername()
    + getName()
    + getSurname()
    + getEmail()
}

class Application.User.Administrator extends Application.User.User {
}

class Application.User.Moderator extends Application.User.User {
}

class Application.User.Guest extends Application.User.User {
}

Application.System.AuthenticationManager --|> Application.System.AuthenticationManagerInterface
Application.User.User --|> Application.User.UserInterface
Application.System.AuthenticationManager --> Application.User.UserProvider
Application.User.UserProvider \"1\" o-- \"*\" Application.User.User
";
    assert_eq!(output, expected);
}

#[test]
fn test_emitter_on_compiled_graph() {
    let mut realm = Realm::new();
    let a = class_a(&mut realm);
    let mut compiler = Compiler::new(&realm);
    compiler.add_class(a).unwrap();
    let graph = compiler.compile_all().unwrap().clone();

    let emitter = PlantUmlEmitter::with_config(EmitterConfig {
        notes_enabled: false,
        enclose: true,
    });
    let output = emitter.render(&graph, &RelationStore::new());
    assert!(output.starts_with("@startuml\nclass Anonymous1 {\n"));
    assert!(output.ends_with("}\n\n@enduml\n"));
}
