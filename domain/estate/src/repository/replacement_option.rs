use architecture::repository::DBRepository;

use crate::model::entity::ReplacementOption;

pub trait ReplacementOptionRepo: DBRepository<ReplacementOption> + Send + Sync {}
