use migration::Migrator;

const CONFIG_ENV_PREFIX: &str = "MIGRATION";
const CONFIG_ENV_SEPARATOR: &str = "__";
const CONFIG: &str = "config";
const ACTION_KEY: &str = "migrate.action";
const ACTION_UP: &str = "up";
const ACTION_DOWN: &str = "down";
const DB_CON: &str = "migrate.dbcon";

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = config::Config::builder()
        .add_source(
            config::File::with_name(CONFIG).required(false).format(config::FileFormat::Yaml),
        )
        .add_source(
            config::Environment::with_prefix(CONFIG_ENV_PREFIX).separator(CONFIG_ENV_SEPARATOR),
        )
        .build()?;
    let action = config.get_string(ACTION_KEY)?;
    let db_con = config.get_string(DB_CON)?;
    apply(&action, &db_con).await
}

async fn apply(action: &str, db_con: &str) -> anyhow::Result<()> {
    match action {
        ACTION_UP => Migrator::migration_up(db_con).await,
        ACTION_DOWN => Migrator::migration_down(db_con).await,
        _ => anyhow::bail!(
            "{ACTION_KEY} must be {ACTION_UP} or {ACTION_DOWN}, got {action}"
        ),
    }
}
