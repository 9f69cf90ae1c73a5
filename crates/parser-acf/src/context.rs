use acf_connector_types::ContentKindRegistry;
use acf_registry::{MetaType, Registry, TypeRegistration};

use crate::{Diagnostics, LeafTypes, ParserConfig};

/// Everything one schema build needs: the registry under construction, the
/// memoized leaf types, the content kinds the external schema exposes and
/// the host configuration.
///
/// The registry and the leaf types are append-only while the build runs;
/// builds are assumed non-overlapping.
pub struct Context<'a> {
    pub registry: &'a mut Registry,
    pub leaf_types: &'a mut LeafTypes,
    pub kinds: &'a dyn ContentKindRegistry,
    pub config: &'a ParserConfig,
    diagnostics: Diagnostics,
}

impl<'a> Context<'a> {
    pub fn new(
        registry: &'a mut Registry,
        leaf_types: &'a mut LeafTypes,
        kinds: &'a dyn ContentKindRegistry,
        config: &'a ParserConfig,
    ) -> Context<'a> {
        Context {
            registry,
            leaf_types,
            kinds,
            config,
            diagnostics: Diagnostics::default(),
        }
    }

    /// Registers a generated type. Re-registering an identical definition
    /// is a no-op; a name collision between different definitions keeps the
    /// first one and is reported as a build warning.
    pub(crate) fn register_type(&mut self, ty: impl Into<MetaType>) {
        let ty = ty.into();
        let name = ty.name().to_string();

        if let TypeRegistration::Conflicting = self.registry.insert_type(ty) {
            self.diagnostics.push_warning(format!(
                "type name collision: {name} is already registered with a different definition; keeping the first one"
            ));
        }
    }

    pub(crate) fn push_warning(&mut self, message: String) {
        self.diagnostics.push_warning(message);
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }
}
