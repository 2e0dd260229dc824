use async_trait::async_trait;
use serde::Deserialize;
use utoipa::IntoParams;

use super::get_task_detail::TaskQueryError;
use crate::modules::task::application::domain::entities::{Task, TaskFilter};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct BrowseTasksQuery {
    /// Exact category, case-insensitive
    pub category: Option<String>,
    /// Free-text search over title and description
    pub q: Option<String>,
}

impl BrowseTasksQuery {
    pub fn to_filter(&self) -> TaskFilter {
        let non_blank = |v: &Option<String>| {
            v.as_ref()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        TaskFilter {
            category: non_blank(&self.category).filter(|c| !c.eq_ignore_ascii_case("all")),
            search: non_blank(&self.q),
            ..TaskFilter::open()
        }
    }
}

#[async_trait]
pub trait BrowseTasksUseCase: Send + Sync {
    async fn execute(&self, query: BrowseTasksQuery) -> Result<Vec<Task>, TaskQueryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::task::application::domain::entities::TaskStatus;

    #[test]
    fn test_all_category_and_blank_search_are_ignored() {
        let filter = BrowseTasksQuery {
            category: Some("All".to_string()),
            q: Some("   ".to_string()),
        }
        .to_filter();

        assert_eq!(filter.status, Some(TaskStatus::Open));
        assert!(filter.category.is_none());
        assert!(filter.search.is_none());
    }
}
