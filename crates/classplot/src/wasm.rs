//! WebAssembly bindings
//!
//! Browser entry points that take a JSON model and return diagram text.

use wasm_bindgen::prelude::*;

use crate::compiler::GraphNode;
use crate::model::LoadedModel;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    use crate::core::logging::init_logging;
    let _ = init_logging(Some("info"), None);
}

/// Render a JSON model to PlantUML text
#[wasm_bindgen]
pub fn render_model(input: &str) -> Result<String, JsValue> {
    crate::render(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Compile a JSON model and describe the graph
///
/// Returns a JSON string with `nodes` and `error` fields.
#[wasm_bindgen]
pub fn inspect_model(input: &str) -> String {
    let result = LoadedModel::from_json(input).and_then(|model| {
        let mut compiler = model.compiler()?;
        let graph = compiler.compile_all()?;
        let nodes = graph
            .nodes()
            .map(|node| match node {
                GraphNode::Class(class) => serde_json::json!({
                    "name": class.name,
                    "kind": "class",
                    "parent": class.parent,
                    "members": class.members.len(),
                    "public": class.public_surface.len(),
                }),
                GraphNode::Interface(interface) => serde_json::json!({
                    "name": interface.name,
                    "kind": "interface",
                    "members": interface.required.len(),
                }),
            })
            .collect::<Vec<_>>();
        Ok(nodes)
    });

    match result {
        Ok(nodes) => serde_json::json!({ "nodes": nodes, "error": null }).to_string(),
        Err(e) => serde_json::json!({ "nodes": [], "error": e.to_string() }).to_string(),
    }
}
