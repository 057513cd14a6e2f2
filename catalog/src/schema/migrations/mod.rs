use crate::schema::App;
use crate::StoreError;

mod create_products;
pub use create_products::CreateProducts;

mod remove_rating;
pub use remove_rating::RemoveRating;

/// A paired forward/reverse change to the hosted store.
///
/// `down` must restore exactly what existed before `up` ran. A migration
/// whose target collection does not exist does nothing and succeeds.
pub trait Migration {
    /// Sort key; migrations run in ascending order.
    fn version(&self) -> i64;

    fn name(&self) -> &str;

    fn up(&self, app: &mut dyn App) -> Result<(), StoreError>;

    fn down(&self, app: &mut dyn App) -> Result<(), StoreError>;
}

/// Applies and reverts an ordered set of migrations.
pub struct Migrator {
    migrations: Vec<Box<dyn Migration>>,
}

impl Migrator {
    pub fn builder() -> Builder {
        Builder::new()
    }

    /// Every revision of the `products` collection.
    pub fn products() -> Self {
        Migrator::builder()
            .add_migration(CreateProducts)
            .add_migration(RemoveRating)
            .build()
    }

    pub fn versions(&self) -> Vec<i64> {
        self.migrations.iter().map(|m| m.version()).collect()
    }

    /// Runs `up` for every migration not yet applied and returns their versions.
    pub fn up(&self, app: &mut dyn App) -> Result<Vec<i64>, StoreError> {
        let applied = app.applied_migrations();
        let mut ran = Vec::new();

        for migration in self.migrations.iter() {
            if applied.contains(&migration.version()) {
                continue;
            }

            log::info!("Applying migration {} ({})", migration.version(), migration.name());
            migration.up(app)?;
            app.set_migration_applied(migration.version(), true);
            ran.push(migration.version());
        }

        Ok(ran)
    }

    /// Runs `down` for the most recently applied migration, if any.
    pub fn down(&self, app: &mut dyn App) -> Result<Option<i64>, StoreError> {
        let applied = app.applied_migrations();
        let last = self
            .migrations
            .iter()
            .rev()
            .find(|m| applied.contains(&m.version()));

        match last {
            Some(migration) => {
                log::info!("Reverting migration {} ({})", migration.version(), migration.name());
                migration.down(app)?;
                app.set_migration_applied(migration.version(), false);
                Ok(Some(migration.version()))
            }
            None => Ok(None),
        }
    }
}

pub struct Builder {
    migrations: Vec<Box<dyn Migration>>,
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            migrations: Vec::new(),
        }
    }

    pub fn add_migration<M: Migration + 'static>(mut self, migration: M) -> Self {
        self.migrations.push(Box::new(migration));
        self
    }

    pub fn build(mut self) -> Migrator {
        self.migrations.sort_by_key(|m| m.version());
        Migrator {
            migrations: self.migrations,
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}
