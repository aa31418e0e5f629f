//! In-process adapter implementing every repository port.
//!
//! Mirrors the PostgreSQL schema closely enough for the HTTP adapter and the
//! test suites: ids come from per-table sequences starting at 1, rows are
//! kept in insertion order, `short` sorts bytewise like the `C` collation of
//! the column, the pivot rejects duplicate pairs, and deleting
//! an acronym or category drops its pivot rows. Owner deletion is never
//! offered, matching the restrict policy of the database.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{
    AcronymRepository, AcronymRepositoryError, CategoryRepository, CategoryRepositoryError,
    UserRepository, UserRepositoryError,
};
use crate::domain::{
    Acronym, AcronymDraft, AcronymId, Category, CategoryDraft, CategoryId, User, UserDraft, UserId,
};

#[derive(Debug, Default)]
struct Tables {
    users: Vec<User>,
    acronyms: Vec<Acronym>,
    categories: Vec<Category>,
    pivot: Vec<(AcronymId, CategoryId)>,
    last_user: i32,
    last_acronym: i32,
    last_category: i32,
}

impl Tables {
    fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    fn acronym_mut(&mut self, id: AcronymId) -> Option<&mut Acronym> {
        self.acronyms.iter_mut().find(|acronym| acronym.id == id)
    }

    fn acronym_position(&self, id: AcronymId) -> Option<usize> {
        self.acronyms.iter().position(|acronym| acronym.id == id)
    }

    fn ensure_owner(&self, draft: &AcronymDraft) -> Result<(), AcronymRepositoryError> {
        if self.user(draft.user_id()).is_some() {
            Ok(())
        } else {
            Err(AcronymRepositoryError::unknown_user(draft.user_id().get()))
        }
    }
}

/// Mutex-guarded tables shared by the three repository implementations.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use acronyms::domain::ports::UserRepository;
/// use acronyms::domain::UserDraft;
/// use acronyms::outbound::memory::InMemoryStore;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let store = Arc::new(InMemoryStore::default());
/// let draft = UserDraft::new("Ada Lovelace", "ada").expect("valid draft");
/// let user = store.create(&draft).await.expect("insert user");
/// assert_eq!(user.id.get(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock<E>(
        &self,
        poisoned: impl FnOnce(&'static str) -> E,
    ) -> Result<MutexGuard<'_, Tables>, E> {
        self.tables.lock().map_err(|_| {
            warn!("in-memory store lock poisoned");
            poisoned("in-memory store lock poisoned")
        })
    }

    fn acronym_tables(&self) -> Result<MutexGuard<'_, Tables>, AcronymRepositoryError> {
        self.lock(AcronymRepositoryError::connection)
    }

    fn category_tables(&self) -> Result<MutexGuard<'_, Tables>, CategoryRepositoryError> {
        self.lock(CategoryRepositoryError::connection)
    }

    fn user_tables(&self) -> Result<MutexGuard<'_, Tables>, UserRepositoryError> {
        self.lock(UserRepositoryError::connection)
    }

    /// Number of pivot rows currently stored.
    pub fn pivot_len(&self) -> usize {
        self.tables
            .lock()
            .map(|tables| tables.pivot.len())
            .unwrap_or_default()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        Ok(self.user_tables()?.users.clone())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.user_tables()?.user(id).cloned())
    }

    async fn create(&self, draft: &UserDraft) -> Result<User, UserRepositoryError> {
        let mut tables = self.user_tables()?;
        tables.last_user += 1;
        let user = draft.clone().into_user(UserId::new(tables.last_user));
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn acronyms_of(&self, id: UserId) -> Result<Vec<Acronym>, UserRepositoryError> {
        let tables = self.user_tables()?;
        Ok(tables
            .acronyms
            .iter()
            .filter(|acronym| acronym.user_id == id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl AcronymRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Acronym>, AcronymRepositoryError> {
        Ok(self.acronym_tables()?.acronyms.clone())
    }

    async fn find_by_id(&self, id: AcronymId) -> Result<Option<Acronym>, AcronymRepositoryError> {
        let tables = self.acronym_tables()?;
        Ok(tables.acronyms.iter().find(|acronym| acronym.id == id).cloned())
    }

    async fn create(&self, draft: &AcronymDraft) -> Result<Acronym, AcronymRepositoryError> {
        let mut tables = self.acronym_tables()?;
        tables.ensure_owner(draft)?;
        tables.last_acronym += 1;
        let acronym = draft
            .clone()
            .into_acronym(AcronymId::new(tables.last_acronym));
        tables.acronyms.push(acronym.clone());
        Ok(acronym)
    }

    async fn update(
        &self,
        id: AcronymId,
        draft: &AcronymDraft,
    ) -> Result<Option<Acronym>, AcronymRepositoryError> {
        let mut tables = self.acronym_tables()?;
        if tables.acronym_mut(id).is_none() {
            return Ok(None);
        }
        tables.ensure_owner(draft)?;
        let acronym = draft.clone().into_acronym(id);
        Ok(tables.acronym_mut(id).map(|slot| {
            *slot = acronym.clone();
            acronym
        }))
    }

    async fn delete(&self, id: AcronymId) -> Result<bool, AcronymRepositoryError> {
        let mut tables = self.acronym_tables()?;
        let Some(index) = tables.acronym_position(id) else {
            return Ok(false);
        };
        tables.acronyms.remove(index);
        tables.pivot.retain(|(acronym, _)| *acronym != id);
        Ok(true)
    }

    async fn search(&self, term: &str) -> Result<Vec<Acronym>, AcronymRepositoryError> {
        let tables = self.acronym_tables()?;
        Ok(tables
            .acronyms
            .iter()
            .filter(|acronym| acronym.short == term || acronym.long == term)
            .cloned()
            .collect())
    }

    async fn first(&self) -> Result<Option<Acronym>, AcronymRepositoryError> {
        Ok(self.acronym_tables()?.acronyms.first().cloned())
    }

    async fn sorted_by_short(&self) -> Result<Vec<Acronym>, AcronymRepositoryError> {
        let mut acronyms = self.acronym_tables()?.acronyms.clone();
        acronyms.sort_by(|a, b| a.short.cmp(&b.short).then(a.id.cmp(&b.id)));
        Ok(acronyms)
    }

    async fn attach_category(
        &self,
        acronym: AcronymId,
        category: CategoryId,
    ) -> Result<(), AcronymRepositoryError> {
        let mut tables = self.acronym_tables()?;
        if !tables.pivot.contains(&(acronym, category)) {
            tables.pivot.push((acronym, category));
        }
        Ok(())
    }

    async fn detach_category(
        &self,
        acronym: AcronymId,
        category: CategoryId,
    ) -> Result<(), AcronymRepositoryError> {
        self.acronym_tables()?
            .pivot
            .retain(|pair| *pair != (acronym, category));
        Ok(())
    }

    async fn categories_of(
        &self,
        acronym: AcronymId,
    ) -> Result<Vec<Category>, AcronymRepositoryError> {
        let tables = self.acronym_tables()?;
        Ok(tables
            .categories
            .iter()
            .filter(|category| tables.pivot.contains(&(acronym, category.id)))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn list(&self) -> Result<Vec<Category>, CategoryRepositoryError> {
        Ok(self.category_tables()?.categories.clone())
    }

    async fn find_by_id(
        &self,
        id: CategoryId,
    ) -> Result<Option<Category>, CategoryRepositoryError> {
        Ok(self
            .category_tables()?
            .categories
            .iter()
            .find(|category| category.id == id)
            .cloned())
    }

    async fn create(&self, draft: &CategoryDraft) -> Result<Category, CategoryRepositoryError> {
        let mut tables = self.category_tables()?;
        tables.last_category += 1;
        let category = draft
            .clone()
            .into_category(CategoryId::new(tables.last_category));
        tables.categories.push(category.clone());
        Ok(category)
    }

    async fn delete(&self, id: CategoryId) -> Result<bool, CategoryRepositoryError> {
        let mut tables = self.category_tables()?;
        let before = tables.categories.len();
        tables.categories.retain(|category| category.id != id);
        if tables.categories.len() == before {
            return Ok(false);
        }
        tables.pivot.retain(|(_, category)| *category != id);
        Ok(true)
    }

    async fn acronyms_of(&self, id: CategoryId) -> Result<Vec<Acronym>, CategoryRepositoryError> {
        let tables = self.category_tables()?;
        Ok(tables
            .acronyms
            .iter()
            .filter(|acronym| tables.pivot.contains(&(acronym.id, id)))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryStore {
        InMemoryStore::new()
    }

    async fn seed(store: &InMemoryStore) -> (User, Acronym, Category) {
        let user = UserRepository::create(
            store,
            &UserDraft::new("Ada Lovelace", "ada").expect("valid draft"),
        )
        .await
        .expect("insert user");
        let acronym = AcronymRepository::create(
            store,
            &AcronymDraft::new("OMG", "Oh My God", user.id).expect("valid draft"),
        )
        .await
        .expect("insert acronym");
        let category = CategoryRepository::create(
            store,
            &CategoryDraft::new("Funny").expect("valid draft"),
        )
        .await
        .expect("insert category");
        (user, acronym, category)
    }

    #[rstest]
    #[tokio::test]
    async fn create_rejects_unknown_owner(store: InMemoryStore) {
        let draft = AcronymDraft::new("TIL", "Today I Learned", UserId::new(4)).expect("valid");

        let err = AcronymRepository::create(&store, &draft)
            .await
            .expect_err("unknown owner");

        assert_eq!(err, AcronymRepositoryError::unknown_user(4));
    }

    #[rstest]
    #[tokio::test]
    async fn update_replaces_only_existing_rows(store: InMemoryStore) {
        let (user, acronym, _) = seed(&store).await;
        let draft = AcronymDraft::new("OMG", "Oh My Gosh", user.id).expect("valid draft");

        let updated = store.update(acronym.id, &draft).await.expect("update");
        let missing = store.update(AcronymId::new(99), &draft).await.expect("update");
        let fetched = AcronymRepository::find_by_id(&store, acronym.id)
            .await
            .expect("lookup");

        assert_eq!(updated.as_ref().map(|a| a.long.as_str()), Some("Oh My Gosh"));
        assert_eq!(missing, None);
        assert_eq!(fetched, updated);
    }

    #[rstest]
    #[tokio::test]
    async fn attach_is_idempotent(store: InMemoryStore) {
        let (_, acronym, category) = seed(&store).await;

        store
            .attach_category(acronym.id, category.id)
            .await
            .expect("first attach");
        store
            .attach_category(acronym.id, category.id)
            .await
            .expect("second attach");

        assert_eq!(store.pivot_len(), 1);
        let linked = store.categories_of(acronym.id).await.expect("categories");
        assert_eq!(linked, vec![category]);
    }

    #[rstest]
    #[tokio::test]
    async fn deleting_category_drops_pivot_rows(store: InMemoryStore) {
        let (_, acronym, category) = seed(&store).await;
        store
            .attach_category(acronym.id, category.id)
            .await
            .expect("attach");

        let deleted = CategoryRepository::delete(&store, category.id)
            .await
            .expect("delete category");

        assert!(deleted);
        assert_eq!(store.pivot_len(), 0);
    }

    #[rstest]
    #[tokio::test]
    async fn deleting_acronym_drops_pivot_rows(store: InMemoryStore) {
        let (_, acronym, category) = seed(&store).await;
        store
            .attach_category(acronym.id, category.id)
            .await
            .expect("attach");

        let deleted = AcronymRepository::delete(&store, acronym.id)
            .await
            .expect("delete acronym");

        assert!(deleted);
        assert_eq!(store.pivot_len(), 0);
        let tagged = CategoryRepository::acronyms_of(&store, category.id)
            .await
            .expect("tagged acronyms");
        assert!(tagged.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn ids_are_never_reused(store: InMemoryStore) {
        let (user, acronym, _) = seed(&store).await;
        AcronymRepository::delete(&store, acronym.id)
            .await
            .expect("delete acronym");

        let next = AcronymRepository::create(
            &store,
            &AcronymDraft::new("BRB", "Be Right Back", user.id).expect("valid draft"),
        )
        .await
        .expect("insert acronym");

        assert_eq!(next.id, AcronymId::new(2));
    }

    #[rstest]
    #[tokio::test]
    async fn sorted_breaks_ties_by_id(store: InMemoryStore) {
        let (user, _, _) = seed(&store).await;
        for (short, long) in [("AFK", "Away From Keyboard"), ("OMG", "Oh My Gosh")] {
            AcronymRepository::create(
                &store,
                &AcronymDraft::new(short, long, user.id).expect("valid draft"),
            )
            .await
            .expect("insert acronym");
        }

        let sorted = store.sorted_by_short().await.expect("sorted");

        let keys: Vec<(&str, i32)> = sorted
            .iter()
            .map(|a| (a.short.as_str(), a.id.get()))
            .collect();
        assert_eq!(keys, [("AFK", 2), ("OMG", 1), ("OMG", 3)]);
    }

    #[rstest]
    #[tokio::test]
    async fn sorted_compares_short_forms_bytewise(store: InMemoryStore) {
        let (user, _, _) = seed(&store).await;
        for short in ["apple", "Banana"] {
            AcronymRepository::create(
                &store,
                &AcronymDraft::new(short, "mixed case", user.id).expect("valid draft"),
            )
            .await
            .expect("insert acronym");
        }

        let sorted = store.sorted_by_short().await.expect("sorted");

        let shorts: Vec<&str> = sorted.iter().map(|a| a.short.as_str()).collect();
        assert_eq!(shorts, ["Banana", "OMG", "apple"]);
    }

    #[rstest]
    #[tokio::test]
    async fn search_matches_either_form_exactly(store: InMemoryStore) {
        let (_, acronym, _) = seed(&store).await;

        assert_eq!(store.search("OMG").await.expect("by short"), vec![acronym.clone()]);
        assert_eq!(store.search("Oh My God").await.expect("by long"), vec![acronym]);
        assert!(store.search("omg").await.expect("case differs").is_empty());
    }
}
