// src/domain/tag/reconciler.rs
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::domain::errors::DomainResult;
use crate::domain::tag::{TagId, repository::TagRepository, value_objects::TagName};

/// Domain service turning a set of desired tag names into tag identifiers,
/// creating the tags that do not exist yet.
pub struct TagReconciler {
    repo: Arc<dyn TagRepository>,
}

impl TagReconciler {
    pub fn new(repo: Arc<dyn TagRepository>) -> Self {
        Self { repo }
    }

    /// Resolve `names` to tag ids. Duplicate names collapse. Tags created
    /// before a later failure are kept.
    pub async fn reconcile(&self, names: &[TagName]) -> DomainResult<BTreeSet<TagId>> {
        let desired: BTreeSet<&TagName> = names.iter().collect();
        if desired.is_empty() {
            return Ok(BTreeSet::new());
        }

        let lookup: Vec<TagName> = desired.iter().map(|name| (*name).clone()).collect();
        let existing = self.repo.find_by_names(&lookup).await?;

        let mut ids: BTreeSet<TagId> = existing.iter().map(|tag| tag.id).collect();
        let known: BTreeSet<&TagName> = existing.iter().map(|tag| &tag.name).collect();

        for name in desired.into_iter().filter(|name| !known.contains(name)) {
            let created = self.repo.insert_or_get(name).await?;
            tracing::debug!(tag = %created.name, id = %created.id, "tag created");
            ids.insert(created.id);
        }

        Ok(ids)
    }
}

/// Membership change needed to move a question from its current tags to the
/// desired ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagDelta {
    pub to_add: BTreeSet<TagId>,
    pub to_remove: BTreeSet<TagId>,
}

impl TagDelta {
    pub fn between(current: &BTreeSet<TagId>, desired: &BTreeSet<TagId>) -> Self {
        Self {
            to_add: desired.difference(current).copied().collect(),
            to_remove: current.difference(desired).copied().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::domain::tag::entity::Tag;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeTags {
        tags: Mutex<Vec<Tag>>,
        inserts: Mutex<u32>,
    }

    impl FakeTags {
        fn seeded(names: &[&str]) -> Self {
            let repo = Self::default();
            {
                let mut tags = repo.tags.lock().unwrap();
                for (idx, name) in names.iter().enumerate() {
                    tags.push(Tag {
                        id: TagId(idx as i64 + 1),
                        name: TagName::new(*name).unwrap(),
                        info: String::new(),
                        total_questions: 0,
                    });
                }
            }
            repo
        }

        fn count(&self) -> usize {
            self.tags.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl TagRepository for FakeTags {
        async fn find_by_names(&self, names: &[TagName]) -> DomainResult<Vec<Tag>> {
            let tags = self.tags.lock().unwrap();
            Ok(tags
                .iter()
                .filter(|tag| names.contains(&tag.name))
                .cloned()
                .collect())
        }

        async fn insert_or_get(&self, name: &TagName) -> DomainResult<Tag> {
            *self.inserts.lock().unwrap() += 1;
            let mut tags = self.tags.lock().unwrap();
            if let Some(tag) = tags.iter().find(|tag| &tag.name == name) {
                return Ok(tag.clone());
            }
            let tag = Tag {
                id: TagId(tags.len() as i64 + 1),
                name: name.clone(),
                info: String::new(),
                total_questions: 0,
            };
            tags.push(tag.clone());
            Ok(tag)
        }

        async fn find_by_id(&self, _id: TagId) -> DomainResult<Option<Tag>> {
            Ok(None)
        }

        async fn list(
            &self,
            _limit: u32,
            _skip: u32,
            _prefix: Option<&str>,
        ) -> DomainResult<(Vec<Tag>, u64)> {
            Ok((vec![], 0))
        }

        async fn update_info(&self, _id: TagId, _info: String) -> DomainResult<Tag> {
            Err(DomainError::not_found("tag not found"))
        }
    }

    fn names(values: &[&str]) -> Vec<TagName> {
        values.iter().map(|v| TagName::new(*v).unwrap()).collect()
    }

    #[tokio::test]
    async fn creates_only_missing_tags() {
        let repo = Arc::new(FakeTags::seeded(&["go"]));
        let reconciler = TagReconciler::new(repo.clone());

        let ids = reconciler.reconcile(&names(&["go", "rust"])).await.unwrap();

        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&TagId(1)));
        assert_eq!(repo.count(), 2);
        assert_eq!(*repo.inserts.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn reconcile_is_idempotent() {
        let repo = Arc::new(FakeTags::seeded(&["go"]));
        let reconciler = TagReconciler::new(repo.clone());

        let first = reconciler.reconcile(&names(&["go", "rust"])).await.unwrap();
        let second = reconciler.reconcile(&names(&["rust", "go"])).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(repo.count(), 2);
        assert_eq!(*repo.inserts.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn duplicates_and_empty_input_collapse() {
        let repo = Arc::new(FakeTags::default());
        let reconciler = TagReconciler::new(repo.clone());

        assert!(reconciler.reconcile(&[]).await.unwrap().is_empty());
        let ids = reconciler
            .reconcile(&names(&["rust", "rust", " rust "]))
            .await
            .unwrap();
        assert_eq!(ids.len(), 1);
        assert_eq!(repo.count(), 1);
    }

    #[test]
    fn delta_keeps_shared_tags_untouched() {
        let current: BTreeSet<TagId> = [TagId(1), TagId(2)].into();
        let desired: BTreeSet<TagId> = [TagId(2), TagId(3)].into();

        let delta = TagDelta::between(&current, &desired);

        assert_eq!(delta.to_remove, [TagId(1)].into());
        assert_eq!(delta.to_add, [TagId(3)].into());
        assert!(TagDelta::between(&desired, &desired).is_empty());
    }
}
