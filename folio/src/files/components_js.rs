//! components.js index module.

use std::path::{Path, PathBuf};

use folio_codegen::{JsArray, JsModule, ModuleExports, string_literal};
use folio_core::{GeneratedFile, Overwrite, to_slash};

/// `components.js`, an array of every component descriptor in build order.
pub struct ComponentsJs {
    modules: Vec<PathBuf>,
}

impl ComponentsJs {
    /// `modules` are descriptor module paths relative to the output directory.
    pub fn new(modules: Vec<PathBuf>) -> Self {
        Self { modules }
    }
}

impl GeneratedFile for ComponentsJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("components.js")
    }

    fn overwrite(&self) -> Overwrite {
        Overwrite::IfChanged
    }

    fn render(&self) -> String {
        let requires = self
            .modules
            .iter()
            .map(|module| format!("require({})", string_literal(&format!("./{}", to_slash(module)))));

        JsModule::new()
            .comment("Generated by folio. Do not edit.")
            .add(ModuleExports::array(JsArray::from_raw(requires)))
            .render()
    }
}
