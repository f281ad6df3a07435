use architecture::repository::DBRepository;

use crate::model::entity::Order;

pub trait OrderRepo: DBRepository<Order> + Send + Sync {}
