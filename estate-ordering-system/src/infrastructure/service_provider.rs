use std::future::{ready, Ready};
use std::sync::Arc;

use actix_web::{dev::Payload, error::ErrorInternalServerError, web, FromRequest, HttpRequest};
use domain_estate::service::{
    ApplianceService, OrderService, PropertyService, ReplacementOptionService,
};
use service_estate::{
    ApplianceServiceImpl, OrderServiceImpl, PropertyServiceImpl, ReplacementOptionServiceImpl,
};

use super::{
    config::CommonConfig,
    database::{Database, OrmRepo},
};

/// Application wide singletons.
#[derive(Clone)]
pub struct ServiceProvider {
    common_config: CommonConfig,
    database: Arc<Database>,
}

impl ServiceProvider {
    /// Connects to the configured database, migrating it first when `db.auto_migrate` is set.
    pub async fn build(config: config::Config) -> anyhow::Result<Self> {
        let common_config = config.try_deserialize::<CommonConfig>()?;
        let database = Arc::new(Database::new(&common_config.db).await?);
        if common_config.db.auto_migrate {
            database.migrate().await?;
            tracing::info!("Database schema is up to date.");
        }
        Ok(Self {
            common_config,
            database,
        })
    }

    pub fn common_config(&self) -> &CommonConfig {
        &self.common_config
    }

    /// Services sharing one fresh repository, for a single request.
    pub fn create_scoped(&self) -> ServiceProviderScoped {
        ServiceProviderScoped {
            orm_repo: Arc::new(OrmRepo::builder().db(self.database.clone()).build()),
        }
    }
}

pub struct ServiceProviderScoped {
    orm_repo: Arc<OrmRepo>,
}

impl ServiceProviderScoped {
    pub fn property_service(&self) -> Arc<dyn PropertyService> {
        Arc::new(
            PropertyServiceImpl::builder()
                .property_repo(self.orm_repo.clone())
                .appliance_repo(self.orm_repo.clone())
                .build(),
        )
    }

    pub fn appliance_service(&self) -> Arc<dyn ApplianceService> {
        Arc::new(
            ApplianceServiceImpl::builder()
                .appliance_repo(self.orm_repo.clone())
                .property_repo(self.orm_repo.clone())
                .build(),
        )
    }

    pub fn replacement_option_service(&self) -> Arc<dyn ReplacementOptionService> {
        Arc::new(
            ReplacementOptionServiceImpl::builder()
                .replacement_option_repo(self.orm_repo.clone())
                .build(),
        )
    }

    pub fn order_service(&self) -> Arc<dyn OrderService> {
        Arc::new(
            OrderServiceImpl::builder()
                .order_repo(self.orm_repo.clone())
                .property_repo(self.orm_repo.clone())
                .appliance_repo(self.orm_repo.clone())
                .replacement_option_repo(self.orm_repo.clone())
                .build(),
        )
    }
}

impl FromRequest for ServiceProviderScoped {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(match req.app_data::<web::Data<ServiceProvider>>() {
            Some(sp) => Ok(sp.create_scoped()),
            None => Err(ErrorInternalServerError(
                "Service provider is not registered.",
            )),
        })
    }
}
