use crate::{
    model::entity::{Appliance, Order, Property, ReplacementOption},
    repository::{ApplianceRepo, OrderRepo, PropertyRepo, ReplacementOptionRepo},
};
use architecture::repository::{DBRepository, MutableRepository, ReadOnlyRepository};
use async_trait::async_trait;
use mockall::mock;

mock! {
    pub PropertyRepo {}
    impl PropertyRepo for PropertyRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Property> for PropertyRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Property>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Property>>;
    }
    #[async_trait]
    impl MutableRepository<Property> for PropertyRepo {
        async fn insert(&self, entity: &Property) -> anyhow::Result<Property>;
        async fn update(&self, entity: &Property) -> anyhow::Result<()>;
        async fn delete_by_id(&self, id: i32) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<Property> for PropertyRepo {}
}

mock! {
    pub ApplianceRepo {}
    #[async_trait]
    impl ApplianceRepo for ApplianceRepo {
        async fn get_all_by_property_ids(&self, property_ids: &[i32]) -> anyhow::Result<Vec<Appliance>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Appliance> for ApplianceRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Appliance>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Appliance>>;
    }
    #[async_trait]
    impl MutableRepository<Appliance> for ApplianceRepo {
        async fn insert(&self, entity: &Appliance) -> anyhow::Result<Appliance>;
        async fn update(&self, entity: &Appliance) -> anyhow::Result<()>;
        async fn delete_by_id(&self, id: i32) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<Appliance> for ApplianceRepo {}
}

mock! {
    pub ReplacementOptionRepo {}
    impl ReplacementOptionRepo for ReplacementOptionRepo {}
    #[async_trait]
    impl ReadOnlyRepository<ReplacementOption> for ReplacementOptionRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<ReplacementOption>>;
        async fn get_all(&self) -> anyhow::Result<Vec<ReplacementOption>>;
    }
    #[async_trait]
    impl MutableRepository<ReplacementOption> for ReplacementOptionRepo {
        async fn insert(&self, entity: &ReplacementOption) -> anyhow::Result<ReplacementOption>;
        async fn update(&self, entity: &ReplacementOption) -> anyhow::Result<()>;
        async fn delete_by_id(&self, id: i32) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<ReplacementOption> for ReplacementOptionRepo {}
}

mock! {
    pub OrderRepo {}
    impl OrderRepo for OrderRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Order> for OrderRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Order>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Order>>;
    }
    #[async_trait]
    impl MutableRepository<Order> for OrderRepo {
        async fn insert(&self, entity: &Order) -> anyhow::Result<Order>;
        async fn update(&self, entity: &Order) -> anyhow::Result<()>;
        async fn delete_by_id(&self, id: i32) -> anyhow::Result<()>;
        async fn save_changed(&self) -> anyhow::Result<bool>;
    }
    impl DBRepository<Order> for OrderRepo {}
}
