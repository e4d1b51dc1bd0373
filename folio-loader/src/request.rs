//! Tagged module references.
//!
//! A generated descriptor points at other modules through logical
//! specifiers that the bundler resolves later. Each specifier names the
//! transform that should produce the module and, optionally, parameters for
//! it:
//!
//! | kind              | specifier                              |
//! |-------------------|----------------------------------------|
//! | `Implementation`  | `<path>`                               |
//! | `PropMeta`        | `!!props!<path>`                       |
//! | `Examples`        | `examples!<path>`                      |
//! | `DefaultExamples` | `examples?componentName=<name>!<path>` |
//!
//! The leading `!!` of the prop metadata specifier tells the bundler to skip
//! every other configured transform, so the component file isn't fed back
//! into the loader that produced the descriptor.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{Error, Result};

const PROPS_LOADER: &str = "props";
const EXAMPLES_LOADER: &str = "examples";
const COMPONENT_NAME_PARAM: &str = "componentName";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// The component implementation itself.
    Implementation,
    /// Prop-type metadata extracted from the component.
    PropMeta,
    /// The component's own examples file.
    Examples,
    /// The default examples template, parameterized with the component name.
    DefaultExamples,
}

/// A reference to a module the bundler should resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRequest {
    kind: RequestKind,
    path: PathBuf,
    params: Vec<(String, String)>,
}

impl ModuleRequest {
    pub fn implementation(path: impl Into<PathBuf>) -> Self {
        Self::new(RequestKind::Implementation, path)
    }

    pub fn props(path: impl Into<PathBuf>) -> Self {
        Self::new(RequestKind::PropMeta, path)
    }

    pub fn examples(path: impl Into<PathBuf>) -> Self {
        Self::new(RequestKind::Examples, path)
    }

    pub fn default_examples(template: impl Into<PathBuf>, component_name: &str) -> Self {
        Self::new(RequestKind::DefaultExamples, template).param(COMPONENT_NAME_PARAM, component_name)
    }

    fn new(kind: RequestKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Add a query parameter for the transform.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Look up a parameter by key.
    pub fn get_param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Render the logical specifier string.
    pub fn specifier(&self) -> String {
        let path = self.path.to_string_lossy();
        match self.kind {
            RequestKind::Implementation => path.into_owned(),
            RequestKind::PropMeta => format!("!!{}!{}", self.loader(PROPS_LOADER), path),
            RequestKind::Examples | RequestKind::DefaultExamples => {
                format!("{}!{}", self.loader(EXAMPLES_LOADER), path)
            }
        }
    }

    fn loader(&self, name: &str) -> String {
        if self.params.is_empty() {
            return name.to_string();
        }
        let query = self
            .params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("{name}?{query}")
    }
}

impl fmt::Display for ModuleRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.specifier())
    }
}

impl FromStr for ModuleRequest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        let (bypass, rest) = match s.strip_prefix("!!") {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let Some((loader, path)) = rest.split_once('!') else {
            if bypass {
                return Err(Error::invalid_request(s, "missing '!' before the path"));
            }
            return non_empty(s, s).map(ModuleRequest::implementation);
        };

        let path = non_empty(s, path)?;
        let (name, query) = loader.split_once('?').unwrap_or((loader, ""));
        let params = parse_query(query);

        let kind = match (name, bypass) {
            (PROPS_LOADER, true) => RequestKind::PropMeta,
            (PROPS_LOADER, false) => {
                return Err(Error::invalid_request(
                    s,
                    "prop metadata requests must start with '!!'",
                ));
            }
            (EXAMPLES_LOADER, _) if params.iter().any(|(k, _)| k == COMPONENT_NAME_PARAM) => {
                RequestKind::DefaultExamples
            }
            (EXAMPLES_LOADER, _) => RequestKind::Examples,
            (other, _) => {
                return Err(Error::invalid_request(s, format!("unknown loader '{other}'")));
            }
        };

        Ok(Self {
            kind,
            path: PathBuf::from(path),
            params,
        })
    }
}

fn non_empty<'a>(request: &str, path: &'a str) -> Result<&'a str> {
    if path.is_empty() {
        Err(Error::invalid_request(request, "empty path"))
    } else {
        Ok(path)
    }
}

fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (k.to_string(), v.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specifiers() {
        let path = "/repo/src/Button/Button.js";
        assert_eq!(ModuleRequest::implementation(path).specifier(), path);
        assert_eq!(
            ModuleRequest::props(path).specifier(),
            "!!props!/repo/src/Button/Button.js"
        );
        assert_eq!(
            ModuleRequest::examples("/repo/src/Button/Readme.md").specifier(),
            "examples!/repo/src/Button/Readme.md"
        );
        assert_eq!(
            ModuleRequest::default_examples("default.md", "Button").specifier(),
            "examples?componentName=Button!default.md"
        );
    }

    #[test]
    fn test_extra_params_keep_insertion_order() {
        let request = ModuleRequest::default_examples("default.md", "Button").param("lang", "en");
        assert_eq!(
            request.specifier(),
            "examples?componentName=Button&lang=en!default.md"
        );
        assert_eq!(request.get_param("lang"), Some("en"));
        assert_eq!(request.get_param("missing"), None);
    }

    #[test]
    fn test_display_matches_specifier() {
        let request = ModuleRequest::props("/a.js");
        assert_eq!(request.to_string(), request.specifier());
    }

    #[test]
    fn test_parse_default_examples() {
        let request: ModuleRequest = "examples?componentName=Modal!/repo/default.md".parse().unwrap();
        assert_eq!(request.kind(), RequestKind::DefaultExamples);
        assert_eq!(request.path(), Path::new("/repo/default.md"));
        assert_eq!(request.get_param("componentName"), Some("Modal"));
    }

    #[test]
    fn test_parse_props_and_plain_path() {
        let props: ModuleRequest = "!!props!/repo/a.js".parse().unwrap();
        assert_eq!(props, ModuleRequest::props("/repo/a.js"));

        let plain: ModuleRequest = "/repo/a.js".parse().unwrap();
        assert_eq!(plain, ModuleRequest::implementation("/repo/a.js"));
    }

    #[test]
    fn test_parse_keeps_bangs_inside_path() {
        let request: ModuleRequest = "examples!/repo/wow!/Readme.md".parse().unwrap();
        assert_eq!(request.kind(), RequestKind::Examples);
        assert_eq!(request.path(), Path::new("/repo/wow!/Readme.md"));
    }

    #[test]
    fn test_parse_rejects_malformed_requests() {
        for input in ["", "examples!", "!!props", "props!/a.js", "styles!/a.css"] {
            let err = input.parse::<ModuleRequest>().unwrap_err();
            assert!(
                matches!(*err, Error::InvalidRequest { .. }),
                "expected InvalidRequest for {input:?}"
            );
        }
    }
}
