use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(1);

/// The execution context (roughly: the logical connection) under which content was fetched.
///
/// Fetched [`XmlContent`](crate::XmlContent) keeps a reference to its context, so that it
/// can later be bound or re-read within the same context.
#[derive(Debug)]
pub struct ExecutionContext {
    id: u64,
    name: String,
    data_source: String,
    created_at: time::OffsetDateTime,
}

impl ExecutionContext {
    /// Creates a new context with a process-wide unique id.
    pub fn new<S: Into<String>, T: Into<String>>(name: S, data_source: T) -> Self {
        Self {
            id: NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
            data_source: data_source.into(),
            created_at: time::OffsetDateTime::now_utc(),
        }
    }

    /// Unique id of the context.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Name of the context, e.g. "Main" or "Metadata".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the data source the context belongs to.
    pub fn data_source(&self) -> &str {
        &self.data_source
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> time::OffsetDateTime {
        self.created_at
    }
}

impl std::fmt::Display for ExecutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{} (#{})", self.name, self.data_source, self.id)
    }
}
