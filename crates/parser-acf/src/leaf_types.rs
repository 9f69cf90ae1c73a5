use acf_registry::{MetaField, MetaType, ObjectType, Registry, ScalarType, Transformer};

/// The fixed leaf types shared by every generated schema: AcfGoogleMap,
/// AcfDate, AcfDatetime, AcfTime, AcfColor and AcfLink.
///
/// Each definition is built at most once per `LeafTypes` value, on first
/// use, and re-inserted into whichever registry the current build owns.
/// Hosts keep one value for the process lifetime and pass it into every
/// build; dropping it and constructing a fresh one is the explicit way to
/// discard the memoized definitions.
#[derive(Debug, Default)]
pub struct LeafTypes {
    google_map: Option<MetaType>,
    date: Option<MetaType>,
    datetime: Option<MetaType>,
    time: Option<MetaType>,
    color: Option<MetaType>,
    link: Option<MetaType>,
}

impl LeafTypes {
    pub fn new() -> LeafTypes {
        LeafTypes::default()
    }

    /// `AcfGoogleMap`: address plus float-coerced coordinates read from the
    /// stored map value.
    pub fn google_map(&mut self, registry: &mut Registry) -> &str {
        Self::ensure(&mut self.google_map, registry, || {
            ObjectType::new(
                "AcfGoogleMap",
                [
                    MetaField::new("address", "String"),
                    MetaField::new("lat", "Float").with_resolver(Transformer::FloatCoercion {
                        key: "lat".to_string(),
                    }),
                    MetaField::new("lng", "Float").with_resolver(Transformer::FloatCoercion {
                        key: "lng".to_string(),
                    }),
                ],
            )
            .into()
        })
    }

    /// `AcfLink`: url, title and target, all pass-through strings.
    pub fn link(&mut self, registry: &mut Registry) -> &str {
        Self::ensure(&mut self.link, registry, || {
            ObjectType::new(
                "AcfLink",
                [
                    MetaField::new("url", "String"),
                    MetaField::new("title", "String"),
                    MetaField::new("target", "String"),
                ],
            )
            .into()
        })
    }

    pub fn date(&mut self, registry: &mut Registry) -> &str {
        Self::ensure(&mut self.date, registry, || ScalarType::new("AcfDate").into())
    }

    pub fn datetime(&mut self, registry: &mut Registry) -> &str {
        Self::ensure(&mut self.datetime, registry, || ScalarType::new("AcfDatetime").into())
    }

    pub fn time(&mut self, registry: &mut Registry) -> &str {
        Self::ensure(&mut self.time, registry, || ScalarType::new("AcfTime").into())
    }

    pub fn color(&mut self, registry: &mut Registry) -> &str {
        Self::ensure(&mut self.color, registry, || ScalarType::new("AcfColor").into())
    }

    fn ensure<'a>(
        slot: &'a mut Option<MetaType>,
        registry: &mut Registry,
        build: impl FnOnce() -> MetaType,
    ) -> &'a str {
        let ty = slot.get_or_insert_with(build);

        if registry.lookup_type(ty.name()).is_none() {
            registry.insert_type(ty.clone());
        }

        ty.name()
    }
}
