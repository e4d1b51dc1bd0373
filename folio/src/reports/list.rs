//! List command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Where a component's examples come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExamplesSource {
    /// Its own examples file, relative to the components directory.
    Own(PathBuf),
    /// The default examples template.
    Default,
    /// No examples.
    None,
}

/// A discovered component.
#[derive(Debug)]
pub struct ComponentEntry {
    pub name: String,
    pub path_line: String,
    pub examples: ExamplesSource,
}

/// Report data for listing components.
#[derive(Debug)]
pub struct ListReport {
    /// Components in discovery order.
    pub components: Vec<ComponentEntry>,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        if self.components.is_empty() {
            out.preformatted("No components found");
            return;
        }

        let width = self
            .components
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(0);

        out.section(&format!("Components ({})", self.components.len()));
        for component in &self.components {
            let examples = match &component.examples {
                ExamplesSource::Own(path) => format!("  [{}]", path.display()),
                ExamplesSource::Default => "  [default examples]".to_string(),
                ExamplesSource::None => String::new(),
            };
            out.list_item(&format!(
                "{:width$}  {}{}",
                component.name, component.path_line, examples
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::RecordingOutput;

    #[test]
    fn test_render() {
        let report = ListReport {
            components: vec![
                ComponentEntry {
                    name: "Button".to_string(),
                    path_line: "src/Button.js".to_string(),
                    examples: ExamplesSource::None,
                },
                ComponentEntry {
                    name: "Tab".to_string(),
                    path_line: "src/Tab/index.js".to_string(),
                    examples: ExamplesSource::Default,
                },
            ],
        };

        assert_eq!(
            RecordingOutput::render(&report),
            [
                "Components (2):",
                "  - Button  src/Button.js",
                "  - Tab     src/Tab/index.js  [default examples]",
            ]
        );
    }

    #[test]
    fn test_render_empty() {
        let report = ListReport {
            components: Vec::new(),
        };
        assert_eq!(RecordingOutput::render(&report), ["No components found"]);
    }
}
