//! Reader and tag registration service

use crate::{
    error::{AppError, AppResult},
    models::{
        registry::{CreateReader, CreateTag},
        Reader, Tag,
    },
    query::registry::{self, TAG_LIST_LIMIT},
    repository::Repository,
};

#[derive(Clone)]
pub struct RegistryService {
    repository: Repository,
}

fn require(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    Ok(())
}

impl RegistryService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn create_reader(&self, data: &CreateReader) -> AppResult<Reader> {
        require("reader_id", &data.reader_id)?;
        require("location_name", &data.location_name)?;

        let reader = self.repository.reader_create(data).await?;
        tracing::info!("Registered reader {} at {}", reader.reader_id, reader.location_name);
        Ok(reader)
    }

    /// Readers ordered by id
    pub async fn list_readers(&self) -> Vec<Reader> {
        let readers = self.repository.reader_list().await;
        registry::sorted_readers(&readers).into_iter().cloned().collect()
    }

    pub async fn get_reader(&self, id: &str) -> AppResult<Reader> {
        self.repository.reader_get_by_id(id).await
    }

    pub async fn create_tag(&self, mut data: CreateTag) -> AppResult<Tag> {
        require("tag_id", &data.tag_id)?;
        require("equipment_name", &data.equipment_name)?;
        require("equipment_type", &data.equipment_type)?;
        // a blank serial number means none
        data.serial_number = data.serial_number.filter(|s| !s.trim().is_empty());

        let tag = self.repository.tag_create(&data).await?;
        tracing::info!("Registered tag {} for {}", tag.tag_id, tag.equipment_name);
        Ok(tag)
    }

    /// Newest tags first, optionally narrowed by name or id
    pub async fn search_tags(&self, query: Option<&str>) -> Vec<Tag> {
        let tags = self.repository.tag_list().await;
        registry::search_tags(&tags, query.unwrap_or_default(), TAG_LIST_LIMIT)
            .into_iter()
            .cloned()
            .collect()
    }
}
