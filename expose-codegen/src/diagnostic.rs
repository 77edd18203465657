//! Warnings collected while building the index.

/// A warning from one generation step.
///
/// Output is still generated, but probably not what was intended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The step that produced this diagnostic (e.g., "namespace").
    pub phase: String,
    pub message: String,
    /// Optional location, a namespace path such as `foo.bar`.
    pub location: Option<String>,
}

impl Diagnostic {
    /// Create a new warning diagnostic.
    pub fn warning(phase: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            phase: phase.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Add a location to this diagnostic.
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "warning: {}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " (at {})", loc)?;
        }
        Ok(())
    }
}
