use std::fmt::Write;

use crate::{EnumType, MetaType, ObjectType, Registry, ScalarType, UnionType};

impl Registry {
    /// Renders every registered type as SDL, in name order. Deterministic
    /// across repeated builds of the same definitions; snapshot tests rely
    /// on that.
    pub fn export_sdl(&self) -> String {
        let mut sdl = String::new();

        for ty in self.types.values() {
            export_type(ty, &mut sdl);
        }

        sdl
    }
}

fn export_type(ty: &MetaType, sdl: &mut String) {
    match ty {
        MetaType::Object(object) => export_object(object, sdl),
        MetaType::Enum(enum_type) => export_enum(enum_type, sdl),
        MetaType::Union(union) => export_union(union, sdl),
        MetaType::Scalar(scalar) => export_scalar(scalar, sdl),
    }
}

fn export_object(object: &ObjectType, sdl: &mut String) {
    writeln!(sdl, "type {} {{", object.name).ok();

    for field in object.fields.values() {
        if field.args.is_empty() {
            writeln!(sdl, "\t{}: {}", field.name, field.ty).ok();
        } else {
            write!(sdl, "\t{}(", field.name).ok();
            for (index, arg) in field.args.values().enumerate() {
                if index != 0 {
                    sdl.push_str(", ");
                }
                write!(sdl, "{}: {}", arg.name, arg.ty).ok();
            }
            writeln!(sdl, "): {}", field.ty).ok();
        }
    }

    writeln!(sdl, "}}").ok();
}

fn export_enum(enum_type: &EnumType, sdl: &mut String) {
    writeln!(sdl, "enum {} {{", enum_type.name).ok();

    for name in enum_type.values.keys() {
        writeln!(sdl, "\t{name}").ok();
    }

    writeln!(sdl, "}}").ok();
}

fn export_union(union: &UnionType, sdl: &mut String) {
    writeln!(sdl, "union {} = {}", union.name, union.possible_types.join(" | ")).ok();
}

fn export_scalar(scalar: &ScalarType, sdl: &mut String) {
    writeln!(sdl, "scalar {}", scalar.name).ok();
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use crate::{Discriminator, EnumType, MetaEnumValue, MetaField, ObjectType, Registry, ScalarType, UnionType};

    #[test]
    fn renders_types_in_name_order() {
        let mut registry = Registry::new();

        registry.insert_type(ScalarType::new("AcfColor"));
        registry.insert_type(UnionType::new(
            "AcfHeroCta",
            ["Page".to_string(), "Post".to_string()],
            Discriminator::EntityKind(IndexMap::from([
                ("page".to_string(), "Page".to_string()),
                ("post".to_string(), "Post".to_string()),
            ])),
        ));
        registry.insert_type(EnumType::new(
            "AcfHeroAlignment",
            [(
                "left".to_string(),
                MetaEnumValue {
                    value: "left".to_string(),
                },
            )],
        ));
        registry.insert_type(ObjectType::new(
            "AcfHeroFields",
            [MetaField::new("headline", "String")],
        ));

        insta::assert_snapshot!(registry.export_sdl(), @r###"
        scalar AcfColor
        enum AcfHeroAlignment {
        	left
        }
        union AcfHeroCta = Page | Post
        type AcfHeroFields {
        	headline: String
        }
        "###);
    }
}
