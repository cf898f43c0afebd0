//! In-memory reader and tag registry on Repository

use chrono::Utc;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::{
        registry::{CreateReader, CreateTag},
        Reader, Tag,
    },
};

/// Readers installed at startup with the rooms they cover
pub const DEFAULT_READERS: [(&str, &str); 2] = [("M501", "M501호"), ("M502", "M502호")];

/// Registered readers and tags, each in registration order
#[derive(Debug, Default)]
pub struct RegistryStore {
    readers: Vec<Reader>,
    tags: Vec<Tag>,
}

impl RegistryStore {
    pub fn seeded() -> Self {
        let now = Utc::now();
        Self {
            readers: DEFAULT_READERS
                .iter()
                .map(|(id, location)| Reader {
                    reader_id: id.to_string(),
                    location_name: location.to_string(),
                    is_active: true,
                    created_at: now,
                })
                .collect(),
            tags: Vec::new(),
        }
    }
}

impl Repository {
    /// Register a reader; ids are unique
    pub async fn reader_create(&self, data: &CreateReader) -> AppResult<Reader> {
        let mut store = self.registry.write().await;
        if store.readers.iter().any(|r| r.reader_id == data.reader_id) {
            return Err(AppError::Conflict(format!(
                "Reader {} already exists",
                data.reader_id
            )));
        }

        let reader = Reader {
            reader_id: data.reader_id.clone(),
            location_name: data.location_name.clone(),
            is_active: data.is_active,
            created_at: Utc::now(),
        };
        store.readers.push(reader.clone());
        Ok(reader)
    }

    /// All readers in registration order
    pub async fn reader_list(&self) -> Vec<Reader> {
        self.registry.read().await.readers.clone()
    }

    pub async fn reader_get_by_id(&self, id: &str) -> AppResult<Reader> {
        self.registry
            .read()
            .await
            .readers
            .iter()
            .find(|r| r.reader_id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Reader {} not found", id)))
    }

    /// Register a tag; tag ids and serial numbers are unique
    pub async fn tag_create(&self, data: &CreateTag) -> AppResult<Tag> {
        let mut store = self.registry.write().await;
        if store.tags.iter().any(|t| t.tag_id == data.tag_id) {
            return Err(AppError::Conflict(format!("Tag {} already exists", data.tag_id)));
        }
        if let Some(serial) = &data.serial_number {
            if store
                .tags
                .iter()
                .any(|t| t.serial_number.as_ref() == Some(serial))
            {
                return Err(AppError::Conflict(format!(
                    "Serial number {} already registered",
                    serial
                )));
            }
        }

        let tag = Tag {
            tag_id: data.tag_id.clone(),
            equipment_name: data.equipment_name.clone(),
            equipment_type: data.equipment_type.clone(),
            serial_number: data.serial_number.clone(),
            is_active: data.is_active,
            created_at: Utc::now(),
        };
        store.tags.push(tag.clone());
        Ok(tag)
    }

    /// All tags in registration order
    pub async fn tag_list(&self) -> Vec<Tag> {
        self.registry.read().await.tags.clone()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::repository::seed::SeedSource;

    fn repository() -> Repository {
        Repository::new(Arc::new(SeedSource))
    }

    fn new_tag(tag_id: &str, serial: Option<&str>) -> CreateTag {
        CreateTag {
            tag_id: tag_id.to_string(),
            equipment_name: "수액펌프".to_string(),
            equipment_type: "치료".to_string(),
            serial_number: serial.map(str::to_string),
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_default_readers() {
        let repo = repository();
        let reader = repo.reader_get_by_id("M502").await.unwrap();
        assert_eq!(reader.location_name, "M502호");
        assert_eq!(repo.reader_list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_duplicate_reader_conflicts() {
        let repo = repository();
        let data = CreateReader {
            reader_id: "M501".to_string(),
            location_name: "다른 방".to_string(),
            is_active: true,
        };
        assert!(matches!(repo.reader_create(&data).await, Err(AppError::Conflict(_))));
        assert_eq!(repo.reader_get_by_id("M501").await.unwrap().location_name, "M501호");
    }

    #[tokio::test]
    async fn test_duplicate_tag_id_or_serial_conflicts() {
        let repo = repository();
        repo.tag_create(&new_tag("TAG-1", Some("SN-1"))).await.unwrap();

        assert!(matches!(
            repo.tag_create(&new_tag("TAG-1", Some("SN-2"))).await,
            Err(AppError::Conflict(_))
        ));
        assert!(matches!(
            repo.tag_create(&new_tag("TAG-2", Some("SN-1"))).await,
            Err(AppError::Conflict(_))
        ));
        assert_eq!(repo.tag_list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_tags_without_serial_do_not_conflict() {
        let repo = repository();
        repo.tag_create(&new_tag("TAG-1", None)).await.unwrap();
        repo.tag_create(&new_tag("TAG-2", None)).await.unwrap();
        assert_eq!(repo.tag_list().await.len(), 2);
    }

    #[tokio::test]
    async fn test_clones_share_registry() {
        let repo = repository();
        let other = repo.clone();
        repo.tag_create(&new_tag("TAG-1", None)).await.unwrap();
        assert_eq!(other.tag_list().await[0].tag_id, "TAG-1");
    }
}
