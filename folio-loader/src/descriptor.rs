use std::path::PathBuf;

use folio_codegen::JsObject;

use crate::{ModuleEmitter, ModuleRequest, RequestKind};

/// Everything the style guide needs to know about one component.
///
/// Built fresh for every synthesis and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDescriptor {
    /// Absolute path to the component source file.
    pub filepath: PathBuf,
    /// Display name used when the runtime name can't be introspected.
    pub name_fallback: String,
    /// Display string describing where the component lives.
    pub path_line: String,
    /// The component implementation.
    pub module: ModuleRequest,
    /// The component's prop metadata.
    pub props: ModuleRequest,
    /// Usage examples, if any apply.
    pub examples: Option<ModuleRequest>,
}

impl ComponentDescriptor {
    /// Whether the examples come from the component's own examples file
    /// (as opposed to the default template or none at all).
    pub fn has_own_examples(&self) -> bool {
        self.examples
            .as_ref()
            .is_some_and(|r| r.kind() == RequestKind::Examples)
    }

    /// Object literal with the fields `filepath`, `nameFallback`, `pathLine`,
    /// `module`, `props` and `examples`, in that order.
    pub fn to_object(&self, emitter: &impl ModuleEmitter) -> JsObject {
        JsObject::new()
            .string("filepath", self.filepath.to_string_lossy())
            .string("nameFallback", &self.name_fallback)
            .string("pathLine", &self.path_line)
            .raw("module", emitter.emit(&self.module))
            .raw("props", emitter.emit(&self.props))
            .raw_or_null("examples", self.examples.as_ref().map(|r| emitter.emit(r)))
    }
}
