/// Host-side configuration of the connector.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParserConfig {
    /// Block kinds carrying this namespace prefix get their field groups
    /// compiled; every other block kind passes through untouched.
    pub block_namespace: String,
    /// Name of the field the compiled type is attached under on the
    /// block's GraphQL type.
    pub attachment_field: String,
    /// GraphQL type name media fields resolve to. Owned by the external
    /// schema, not generated here.
    pub media_type_name: String,
    /// GraphQL type name user fields resolve to. Owned by the external
    /// schema, not generated here.
    pub user_type_name: String,
}

impl Default for ParserConfig {
    fn default() -> ParserConfig {
        ParserConfig {
            block_namespace: "acf/".to_string(),
            attachment_field: "acf".to_string(),
            media_type_name: "MediaItem".to_string(),
            user_type_name: "User".to_string(),
        }
    }
}
