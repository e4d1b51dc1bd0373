use folio_codegen::string_literal;

use crate::ModuleRequest;

/// Turns a module request into a code fragment the bundler resolves later.
pub trait ModuleEmitter {
    fn emit(&self, request: &ModuleRequest) -> String;
}

/// Emits CommonJS `require("<specifier>")` calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonJs;

impl ModuleEmitter for CommonJs {
    fn emit(&self, request: &ModuleRequest) -> String {
        format!("require({})", string_literal(&request.specifier()))
    }
}

impl<T: ModuleEmitter + ?Sized> ModuleEmitter for &T {
    fn emit(&self, request: &ModuleRequest) -> String {
        (**self).emit(request)
    }
}
