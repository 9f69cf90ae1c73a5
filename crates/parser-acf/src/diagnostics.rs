/// Warnings produced while compiling field groups.
///
/// Nothing in the compiler is fatal: unusable definitions drop out of the
/// schema and are reported here instead of failing the build.
#[derive(Debug, Default)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter_messages(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|diagnostic| diagnostic.message.as_str())
    }

    pub(crate) fn push_warning(&mut self, message: String) {
        tracing::debug!("{message}");
        self.0.push(Diagnostic { message });
    }
}

#[derive(Debug, Clone)]
struct Diagnostic {
    message: String,
}
