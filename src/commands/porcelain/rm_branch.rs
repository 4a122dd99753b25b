use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::errors::GitletError;

impl Repository {
    /// Delete a branch pointer; the commits it reached stay in the store
    pub fn rm_branch(&mut self, name: &str) -> anyhow::Result<()> {
        let Ok(branch_name) = BranchName::try_parse(name.to_string()) else {
            anyhow::bail!(GitletError::BranchNotFound);
        };

        self.refs().delete_branch(&branch_name)?;
        Ok(())
    }
}
