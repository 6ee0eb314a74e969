use serde::Serialize;

/// A catalog recipe.
///
/// `is_liked` is present only when the request carried a verified
/// identity; anonymous responses omit the field entirely.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub prep_time_minutes: i64,
    pub cook_time_minutes: i64,
    pub servings: i64,
    pub difficulty: String,
    pub instructions: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_liked: Option<bool>,
}

/// One ingredient line of a recipe.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecipeIngredient {
    pub ingredient_id: i64,
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub notes: String,
}

/// A recipe together with its ingredient lines.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecipeDetails {
    pub recipe: Recipe,
    pub ingredients: Vec<RecipeIngredient>,
}

/// Row filters for recipe listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeFilter {
    /// Substring match over name, instructions, and description.
    pub search: Option<String>,
    pub category: Option<String>,
    pub difficulty: Option<String>,
    /// Upper bound on prep + cook time, minutes.
    pub max_time: Option<i64>,
}

/// Whitelisted sort keys for recipe listing. Unknown input falls back
/// to `Name`, never into the SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipeSort {
    #[default]
    Name,
    PrepTime,
    CookTime,
    TotalTime,
    Servings,
    Difficulty,
}

impl RecipeSort {
    pub fn parse(s: &str) -> Self {
        match s {
            "prep_time" => Self::PrepTime,
            "cook_time" => Self::CookTime,
            "total_time" => Self::TotalTime,
            "servings" => Self::Servings,
            "difficulty" => Self::Difficulty,
            _ => Self::Name,
        }
    }

    /// ORDER BY expression. Values come from this enum only, so the
    /// expression can be spliced into SQL.
    pub fn order_by(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::PrepTime => "prep_time_minutes",
            Self::CookTime => "cook_time_minutes",
            Self::TotalTime => "(prep_time_minutes + cook_time_minutes)",
            Self::Servings => "servings",
            Self::Difficulty => "difficulty",
        }
    }
}

/// Sort direction, ascending unless explicitly descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> Self {
        match s {
            "desc" => Self::Desc,
            _ => Self::Asc,
        }
    }

    pub fn sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Normalized listing request: filters plus sort and pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeListQuery {
    pub filter: RecipeFilter,
    pub sort: RecipeSort,
    pub order: SortOrder,
    pub page: i64,
    pub limit: i64,
}

impl Default for RecipeListQuery {
    fn default() -> Self {
        Self {
            filter: RecipeFilter::default(),
            sort: RecipeSort::default(),
            order: SortOrder::default(),
            page: 1,
            limit: 10,
        }
    }
}

/// One page of recipes plus the pagination envelope.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RecipePage {
    pub recipes: Vec<Recipe>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub has_next: bool,
}

/// How an ingredient set must relate to a recipe's ingredient list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Any overlap counts; ranked by coverage.
    #[default]
    Partial,
    /// Every ingredient of the recipe must be in the given set.
    Exact,
}

impl MatchMode {
    pub fn parse(s: &str) -> Self {
        match s {
            "exact" => Self::Exact,
            _ => Self::Partial,
        }
    }
}

/// A recipe matched against an ingredient set.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchedRecipe {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub prep_time_minutes: i64,
    pub cook_time_minutes: i64,
    pub servings: i64,
    pub difficulty: String,
    pub instructions: String,
    pub description: String,
    pub matched_ingredients_count: i64,
    pub total_ingredients_count: i64,
    pub match_score: f64,
}

/// Ingredient lines still needed for a recipe after subtracting what
/// the caller already has.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ShoppingList {
    pub recipe_id: i64,
    #[serde(rename = "shopping_list")]
    pub items: Vec<RecipeIngredient>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_sort_whitelist() {
        assert_eq!(RecipeSort::parse("total_time"), RecipeSort::TotalTime);
        assert_eq!(RecipeSort::parse("servings"), RecipeSort::Servings);
        // Anything unknown falls back to name.
        assert_eq!(RecipeSort::parse("id; DROP TABLE"), RecipeSort::Name);
        assert_eq!(RecipeSort::parse(""), RecipeSort::Name);
    }

    #[test]
    fn test_sort_order_defaults_to_asc() {
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("DESC"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("sideways"), SortOrder::Asc);
    }

    #[test]
    fn test_match_mode_defaults_to_partial() {
        assert_eq!(MatchMode::parse("exact"), MatchMode::Exact);
        assert_eq!(MatchMode::parse("partial"), MatchMode::Partial);
        assert_eq!(MatchMode::parse("anything"), MatchMode::Partial);
    }

    #[test]
    fn test_is_liked_omitted_when_absent() {
        let recipe = Recipe {
            id: 1,
            name: "Oatmeal".to_string(),
            category: "Breakfast".to_string(),
            prep_time_minutes: 2,
            cook_time_minutes: 5,
            servings: 1,
            difficulty: "easy".to_string(),
            instructions: "Simmer".to_string(),
            description: "Hearty".to_string(),
            is_liked: None,
        };

        let json = serde_json::to_value(&recipe).unwrap();
        assert!(json.get("is_liked").is_none());

        let liked = Recipe {
            is_liked: Some(true),
            ..recipe
        };
        let json = serde_json::to_value(&liked).unwrap();
        assert_eq!(json["is_liked"], true);
    }
}
