//! Collection registry
//!
//! One declarative entry per entity collection the engine understands:
//! its table name and its merge policy on restore. Adding a collection is
//! a single entry here plus its reader and writer.

/// How a collection is merged into the store during a restore
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// Never cleared or inserted; referenced only as a foreign-key target
    Preserve,
    /// Insert new rows, update mutable fields in place on slug collision
    UpsertBySlug,
    /// Insert; a duplicate email is a silent no-op (first write wins)
    InsertIgnoreEmail,
    /// Plain insert, duplicates permitted
    Insert,
    /// Update the singleton row in place; never insert
    SingletonUpdate,
}

/// The fixed set of entity collections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Users,
    Posts,
    Subscribers,
    Links,
    Settings,
}

impl Collection {
    /// All collections, in export order
    pub const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::Posts,
        Collection::Subscribers,
        Collection::Links,
        Collection::Settings,
    ];

    /// Table name, also the key under `tables` in the snapshot document
    pub fn name(&self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Posts => "posts",
            Collection::Subscribers => "subscribers",
            Collection::Links => "links",
            Collection::Settings => "settings",
        }
    }

    /// Merge policy applied by the importer
    pub fn merge_policy(&self) -> MergePolicy {
        match self {
            Collection::Users => MergePolicy::Preserve,
            Collection::Posts => MergePolicy::UpsertBySlug,
            Collection::Subscribers => MergePolicy::InsertIgnoreEmail,
            Collection::Links => MergePolicy::Insert,
            Collection::Settings => MergePolicy::SingletonUpdate,
        }
    }

    /// Whether the pre-import clear step touches this collection
    pub fn cleared_on_import(&self) -> bool {
        !matches!(self.merge_policy(), MergePolicy::Preserve)
    }
}
