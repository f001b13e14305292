use derive_more::derive::{Display, Error};

use super::Household;

#[derive(Debug, Display, Error)]
pub enum StoreError {
    #[display("Error persisting household snapshot")]
    PersistFailed(anyhow::Error),
}

/// Key-value snapshot of the whole household.
pub trait HouseholdStore {
    /// `Ok(None)` when nothing was stored yet.
    async fn load(&self) -> anyhow::Result<Option<Household>>;

    async fn save(&self, household: &Household) -> Result<(), StoreError>;
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct InMemoryStore {
        pub stored: Mutex<Option<Household>>,
        pub fail_saves: bool,
        pub saves: Mutex<usize>,
    }

    impl InMemoryStore {
        pub fn with(household: Household) -> Self {
            Self {
                stored: Mutex::new(Some(household)),
                ..Default::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail_saves: true,
                ..Default::default()
            }
        }

        pub fn save_count(&self) -> usize {
            *self.saves.lock().unwrap()
        }
    }

    impl HouseholdStore for InMemoryStore {
        async fn load(&self) -> anyhow::Result<Option<Household>> {
            Ok(self.stored.lock().unwrap().clone())
        }

        async fn save(&self, household: &Household) -> Result<(), StoreError> {
            *self.saves.lock().unwrap() += 1;

            if self.fail_saves {
                return Err(StoreError::PersistFailed(anyhow::anyhow!("disk full")));
            }

            *self.stored.lock().unwrap() = Some(household.clone());
            Ok(())
        }
    }
}
