use serde::Serialize;

/// Opaque window identifier tagged with the backend that produced it.
///
/// IDs are only meaningful to the backend that returned them and only for
/// the lifetime of the window, so handles are never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WindowHandle {
    id: String,
    backend: &'static str,
}

impl WindowHandle {
    pub fn new(id: impl Into<String>, backend: &'static str) -> Self {
        Self {
            id: id.into(),
            backend,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the backend that enumerated this window.
    pub fn backend(&self) -> &'static str {
        self.backend
    }
}

impl std::fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.backend, self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Visible,
    Minimized,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Visible => write!(f, "visible"),
            Visibility::Minimized => write!(f, "minimized"),
        }
    }
}
