/// Label attached to the tracing events of a memoizer unless one is configured.
pub const DEFAULT_LABEL: &str = "memo";

/// Tunables of a memoizing wrapper.
///
/// Construct with [`Default::default`] and adjust it with the `with_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoConfig {
    /// Name reported in log events, defaults to [`DEFAULT_LABEL`].
    pub(crate) label: String,

    /// Number of entries the cache allocates room for up front.
    pub(crate) initial_capacity: usize,
}

impl MemoConfig {
    /// Updates the label reported in tracing events and returns the updated config.
    ///
    /// Useful for a builder pattern with dotchaining.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Updates the initial capacity of the cache and returns the updated config.
    ///
    /// Useful for a builder pattern with dotchaining. This is only an allocation hint: the cache
    /// still grows without bound.
    pub const fn with_initial_capacity(mut self, n: usize) -> Self {
        self.initial_capacity = n;
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}

impl Default for MemoConfig {
    fn default() -> Self {
        MemoConfig {
            label: DEFAULT_LABEL.to_string(),
            initial_capacity: 0,
        }
    }
}
