//! Render the demo application model to PlantUML
//!
//! Run with `cargo run -p classplot --example render_application`.

use classplot::core::logging::init_logging;
use classplot::model::LoadedModel;

const APPLICATION: &str = include_str!("../../../demos/application.json");

fn main() -> anyhow::Result<()> {
    let _ = init_logging(Some("warn"), None);

    let model = LoadedModel::from_json(APPLICATION)?;
    let mut compiler = model.compiler()?;
    compiler.set_enclose(true);

    print!("{}", compiler.render()?);
    Ok(())
}
