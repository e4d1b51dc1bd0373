//! Files written by `folio build`.

mod component_js;
mod components_js;

pub use component_js::ComponentJs;
pub use components_js::ComponentsJs;

/// Directory, relative to the output directory, holding one module per component.
pub const COMPONENTS_DIR: &str = "components";
