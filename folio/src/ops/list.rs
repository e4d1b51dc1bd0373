//! List operation - discovered components and how they are described.

use folio_core::relative_to;
use folio_loader::{FileSystem, ModuleEmitter, RequestKind, Result, Synthesizer};
use rayon::prelude::*;

use super::Project;
use crate::reports::{ComponentEntry, ExamplesSource, ListReport};

/// Describe every discovered component.
pub fn list<F, E>(project: &Project, synthesizer: &Synthesizer<F, E>) -> Result<ListReport>
where
    F: FileSystem + Sync,
    E: ModuleEmitter + Sync,
{
    let components_dir = project.components_dir();
    let components = project
        .components()?
        .par_iter()
        .map(|path| synthesizer.describe(path, project.loader()))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .map(|descriptor| {
            let examples = match descriptor.examples.as_ref() {
                Some(r) if r.kind() == RequestKind::Examples => {
                    ExamplesSource::Own(relative_to(r.path(), &components_dir))
                }
                Some(_) => ExamplesSource::Default,
                None => ExamplesSource::None,
            };
            ComponentEntry {
                name: descriptor.name_fallback,
                path_line: descriptor.path_line,
                examples,
            }
        })
        .collect();

    Ok(ListReport { components })
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::ops::project::testing::project;

    #[test]
    fn test_list() {
        let (_temp, project) = project(
            "[styleguide]\ndefault_example = \"docs/default.md\"\n",
            &[
                "src/components/Button/Button.js",
                "src/components/Modal/index.js",
                "src/components/Modal/Readme.md",
            ],
        );

        let report = list(&project, &Synthesizer::new()).unwrap();

        assert_eq!(report.components.len(), 2);
        assert_eq!(report.components[0].name, "Button");
        assert_eq!(report.components[0].path_line, "src/components/Button/Button.js");
        assert_eq!(report.components[0].examples, ExamplesSource::Default);
        assert_eq!(report.components[1].name, "Modal");
        assert_eq!(
            report.components[1].examples,
            ExamplesSource::Own(PathBuf::from("Modal/Readme.md"))
        );
    }

    #[test]
    fn test_list_missing_components_dir() {
        let (_temp, project) = project("", &[]);
        assert!(list(&project, &Synthesizer::new()).is_err());
    }
}
