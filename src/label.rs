//! Render options and cross-reference label synthesis.

/// Context threaded down the renderers. Never mutated in place; each nesting
/// level builds a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Heading depth for the section being rendered (≥ 1).
    pub depth: usize,
    pub module: Option<String>,
    pub submodule: Option<String>,
    pub function: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            depth: 1,
            module: None,
            submodule: None,
            function: None,
        }
    }
}

impl RenderOptions {
    pub fn new(depth: usize, module: Option<String>) -> Self {
        Self {
            depth,
            module,
            ..Self::default()
        }
    }

    pub fn with_submodule(&self, name: &str) -> Self {
        Self {
            submodule: Some(name.to_string()),
            ..self.clone()
        }
    }

    pub fn with_function(&self, name: &str) -> Self {
        Self {
            function: Some(name.to_string()),
            ..self.clone()
        }
    }

    /// One level deeper.
    pub fn nested(&self) -> Self {
        Self {
            depth: self.depth.saturating_add(1),
            ..self.clone()
        }
    }

    /// Dotted label for the current context, e.g. `skimage.filters.gaussian`.
    pub fn label(&self) -> String {
        label(
            self.module.as_deref(),
            self.submodule.as_deref(),
            self.function.as_deref(),
        )
    }
}

/// Join the present components with `.`, in module → submodule → function
/// order. Empty strings count as absent so the result never has stray dots.
pub fn label(module: Option<&str>, submodule: Option<&str>, function: Option<&str>) -> String {
    [module, submodule, function]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_components() {
        assert_eq!(label(Some("m"), Some("s"), Some("f")), "m.s.f");
    }

    #[test]
    fn missing_middle() {
        assert_eq!(label(Some("m"), None, Some("f")), "m.f");
    }

    #[test]
    fn single_component() {
        assert_eq!(label(None, Some("s"), None), "s");
        assert_eq!(label(None, None, Some("f")), "f");
    }

    #[test]
    fn nothing_set() {
        assert_eq!(label(None, None, None), "");
    }

    #[test]
    fn empty_strings_do_not_leave_dots() {
        assert_eq!(label(Some(""), Some("s"), Some("f")), "s.f");
        assert_eq!(label(Some("m"), Some(""), None), "m");
    }

    #[test]
    fn options_label_follows_context() {
        let opts = RenderOptions::new(1, Some("skimage".into()))
            .with_submodule("filters")
            .with_function("gaussian");
        assert_eq!(opts.label(), "skimage.filters.gaussian");
    }

    #[test]
    fn nested_only_bumps_depth() {
        let opts = RenderOptions::new(2, Some("m".into())).with_submodule("s");
        let inner = opts.nested();
        assert_eq!(inner.depth, 3);
        assert_eq!(inner.label(), opts.label());
        assert_eq!(opts.depth, 2);
    }

    #[test]
    fn nested_saturates_at_max_depth() {
        let opts = RenderOptions::new(usize::MAX, None);
        assert_eq!(opts.nested().depth, usize::MAX);
    }
}
