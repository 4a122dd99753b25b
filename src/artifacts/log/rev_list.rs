use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;

/// History of a commit, most recent first
///
/// Every call to [`IntoIterator::into_iter`] starts over from `start_oid`,
/// loading one commit per step. The walk ends after the commit whose parent
/// is null; commits only ever point to previously stored ones, so it always
/// ends.
#[derive(Clone, new)]
pub struct RevList<'d> {
    database: &'d Database,
    start_oid: ObjectId,
}

impl<'d> IntoIterator for &RevList<'d> {
    type Item = anyhow::Result<(ObjectId, Commit)>;
    type IntoIter = Walk<'d>;

    fn into_iter(self) -> Self::IntoIter {
        Walk {
            database: self.database,
            next_oid: Some(self.start_oid.clone()),
        }
    }
}

/// One pass over a [`RevList`]
#[derive(Clone)]
pub struct Walk<'d> {
    database: &'d Database,
    next_oid: Option<ObjectId>,
}

impl Iterator for Walk<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.next_oid.take()?;

        let step = self.database.parse_object_as_commit(&oid).and_then(|commit| {
            commit.with_context(|| format!("history reaches {oid}, which is not a commit"))
        });

        Some(step.map(|commit| {
            self.next_oid = commit.parent().cloned();
            (oid, commit)
        }))
    }
}
