// ---------------------------------------------------------------------------
// Built-in settings
// ---------------------------------------------------------------------------

/// Which columns a query filters on and how the result is ranked.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Filter columns, in the order the user is prompted for them.
    pub filter_fields: [String; 4],
    /// Column the filtered rows are grouped by.
    pub group_field: String,
    /// How many groups the ranking keeps.
    pub top_n: usize,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            filter_fields: [
                "Ciudad".to_string(),
                "Género".to_string(),
                "Edad".to_string(),
                "Condición Médica".to_string(),
            ],
            group_field: "Ciudad".to_string(),
            top_n: 3,
        }
    }
}

/// Chart window geometry.
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
    pub min_size: [f32; 2],
    pub centered: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Data Visualization".to_string(),
            width: 800.0,
            height: 600.0,
            min_size: [400.0, 300.0],
            centered: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub query: QueryConfig,
    pub window: WindowConfig,
}
