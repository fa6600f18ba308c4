use serde::Deserialize;

/// Page of objects returned by a list call
#[derive(Debug, Clone, Deserialize)]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    #[serde(default)]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub total: i64,
}

/// Filters for a list call; unset fields are left out of the query string
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListInput {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub name: Option<String>,
    pub folder: Option<String>,
    pub position: Option<String>,
}

impl ListInput {
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(name) = &self.name {
            query.push(("name", name.clone()));
        }
        if let Some(folder) = &self.folder {
            query.push(("folder", folder.clone()));
        }
        if let Some(position) = &self.position {
            query.push(("position", position.clone()));
        }
        query
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadInput {
    pub object_id: String,
    pub folder: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateInput<M> {
    pub folder: Option<String>,
    pub position: Option<String>,
    pub request: M,
}

#[derive(Debug, Clone)]
pub struct UpdateInput<M> {
    pub object_id: String,
    pub request: M,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteInput {
    pub object_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_skips_unset_filters() {
        let input = ListInput {
            limit: Some(200),
            folder: Some("Shared".to_string()),
            ..Default::default()
        };
        assert_eq!(
            input.query(),
            vec![("limit", "200".to_string()), ("folder", "Shared".to_string())]
        );
    }

    #[test]
    fn list_response_tolerates_missing_paging() {
        let page: ListResponse<serde_json::Value> =
            serde_json::from_str(r#"{"data":[{"name":"a"}]}"#).unwrap();
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.total, 0);
    }
}
