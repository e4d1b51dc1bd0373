//! Per-component descriptor module.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use folio_core::{GeneratedFile, Overwrite};

use super::COMPONENTS_DIR;

/// `components/<relative path>.js`, the synthesized descriptor of one component.
///
/// A `.js` source keeps its name; any other source gets `.js` appended, so
/// `Button.js` and `Button.jsx` land on different modules.
pub struct ComponentJs {
    relative: PathBuf,
    source: String,
}

impl ComponentJs {
    /// `component` is the component's path relative to the components directory.
    pub fn new(component: &Path, source: String) -> Self {
        Self {
            relative: Self::module_path(component),
            source,
        }
    }

    /// Module path, relative to the components output directory, for a
    /// component path relative to the components directory.
    pub fn module_path(component: &Path) -> PathBuf {
        if component.extension().is_some_and(|ext| ext == "js") {
            return component.to_path_buf();
        }
        let mut name = OsString::from(component.as_os_str());
        name.push(".js");
        PathBuf::from(name)
    }

    /// Path of the module relative to the output directory.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(COMPONENTS_DIR).join(&self.relative)
    }
}

impl GeneratedFile for ComponentJs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.relative_path())
    }

    fn overwrite(&self) -> Overwrite {
        Overwrite::IfChanged
    }

    fn render(&self) -> String {
        self.source.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_source_keeps_its_name() {
        let file = ComponentJs::new(Path::new("Button/Button.js"), String::new());
        assert_eq!(
            file.path(Path::new("/out")),
            PathBuf::from("/out/components/Button/Button.js")
        );
    }

    #[test]
    fn test_other_sources_get_js_appended() {
        assert_eq!(
            ComponentJs::module_path(Path::new("Button/Button.jsx")),
            PathBuf::from("Button/Button.jsx.js")
        );
        assert_eq!(
            ComponentJs::module_path(Path::new("Modal/index.tsx")),
            PathBuf::from("Modal/index.tsx.js")
        );
    }

    #[test]
    fn test_js_and_jsx_siblings_do_not_share_a_module() {
        let js = ComponentJs::new(Path::new("Button/Button.js"), String::new());
        let jsx = ComponentJs::new(Path::new("Button/Button.jsx"), String::new());
        assert_ne!(js.relative_path(), jsx.relative_path());
    }
}
