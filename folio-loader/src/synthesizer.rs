use std::path::Path;

use folio_codegen::{JsModule, ModuleExports};
use folio_core::{name_fallback, relative_to};
use tracing::{debug, trace};

use crate::{
    CommonJs, ComponentDescriptor, Error, FileSystem, LoaderConfig, ModuleEmitter, ModuleRequest,
    OsFileSystem, Result,
};

/// Builds component descriptors and the module source that exports them.
///
/// A synthesizer holds no state between calls, so one instance can serve
/// any number of components, including from several threads at once when
/// its filesystem and emitter allow it.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer<F = OsFileSystem, E = CommonJs> {
    fs: F,
    emitter: E,
}

impl Synthesizer {
    /// A synthesizer on the real filesystem emitting CommonJS requires.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: FileSystem, E: ModuleEmitter> Synthesizer<F, E> {
    /// Replace the filesystem used for the examples existence check.
    pub fn with_fs<G: FileSystem>(self, fs: G) -> Synthesizer<G, E> {
        Synthesizer {
            fs,
            emitter: self.emitter,
        }
    }

    /// Replace the module-reference emitter.
    pub fn with_emitter<G: ModuleEmitter>(self, emitter: G) -> Synthesizer<F, G> {
        Synthesizer {
            fs: self.fs,
            emitter,
        }
    }

    /// Describe the component at `filepath`.
    ///
    /// The configuration is checked before anything else; the only
    /// filesystem access is a single existence check for the examples file.
    pub fn describe(&self, filepath: &Path, config: &LoaderConfig) -> Result<ComponentDescriptor> {
        let caps = config.capabilities().map_err(|capability| {
            Box::new(Error::Configuration {
                component: filepath.to_path_buf(),
                capability,
            })
        })?;

        let name_fallback = name_fallback(filepath).ok_or_else(|| {
            Box::new(Error::InvalidComponentPath {
                path: filepath.to_path_buf(),
            })
        })?;
        let examples_file = (caps.example_filename)(filepath);
        let component_path = relative_to(filepath, caps.config_dir);
        let path_line = (caps.component_path_line)(&component_path);

        let examples = self.resolve_examples(
            filepath,
            &examples_file,
            &name_fallback,
            config.default_example.as_deref(),
        )?;

        debug!(
            component = %filepath.display(),
            name = %name_fallback,
            examples = ?examples.as_ref().map(ModuleRequest::kind),
            "described component"
        );

        Ok(ComponentDescriptor {
            filepath: filepath.to_path_buf(),
            name_fallback,
            path_line,
            module: ModuleRequest::implementation(filepath),
            props: ModuleRequest::props(filepath),
            examples,
        })
    }

    /// Render a descriptor as `module.exports = { ... };`.
    pub fn render(&self, descriptor: &ComponentDescriptor) -> String {
        JsModule::new()
            .add(ModuleExports::object(descriptor.to_object(&self.emitter)))
            .render()
    }

    /// Describe the component at `filepath` and render the module source.
    pub fn synthesize(&self, filepath: &Path, config: &LoaderConfig) -> Result<String> {
        let descriptor = self.describe(filepath, config)?;
        Ok(self.render(&descriptor))
    }

    /// An existing examples file wins over the default template; with
    /// neither, the component has no examples.
    fn resolve_examples(
        &self,
        component: &Path,
        examples_file: &Path,
        name_fallback: &str,
        default_example: Option<&Path>,
    ) -> Result<Option<ModuleRequest>> {
        let exists = self.fs.exists(examples_file).map_err(|source| {
            Box::new(Error::ResourceAccess {
                component: component.to_path_buf(),
                path: examples_file.to_path_buf(),
                source,
            })
        })?;
        trace!(path = %examples_file.display(), exists, "checked examples file");

        if exists {
            return Ok(Some(ModuleRequest::examples(examples_file)));
        }

        Ok(default_example.map(|template| ModuleRequest::default_examples(template, name_fallback)))
    }
}

/// Synthesize the descriptor module for `filepath` on the real filesystem.
pub fn synthesize(filepath: &Path, config: &LoaderConfig) -> Result<String> {
    Synthesizer::new().synthesize(filepath, config)
}

/// Loader entry point: `request` is the full request string handed over by
/// the bundler, e.g. `component!/repo/src/Button/Button.js`. The component
/// path is the part after the last `!`.
pub fn load(request: &str, config: &LoaderConfig) -> Result<String> {
    let file = request.rsplit('!').next().unwrap_or(request);
    if file.is_empty() {
        return Err(Error::invalid_request(request, "no component path"));
    }
    synthesize(Path::new(file), config)
}
