use schemasmith_core::DEFAULT_NAMESPACE;

/// Options that control how introspection behaves.
#[derive(Debug, Clone)]
pub struct IntrospectOptions {
    /// Namespace (Postgres schema) whose tables are read.
    pub namespace: String,
}

impl IntrospectOptions {
    pub fn for_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }
}

impl Default for IntrospectOptions {
    fn default() -> Self {
        Self::for_namespace(DEFAULT_NAMESPACE)
    }
}
