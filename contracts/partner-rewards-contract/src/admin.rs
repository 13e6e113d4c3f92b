use crate::types::{DataKey, Error, UserProfile};
use soroban_sdk::{vec, Address, Env, String, Symbol, Vec};

pub struct AdminModule;

impl AdminModule {
    /// Initialize the contract with an admin
    pub fn init(env: &Env, admin: &Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, admin);

        // Empty registry, appended to as partners are created
        let registry: Vec<Address> = vec![env];
        env.storage()
            .persistent()
            .set(&DataKey::PartnerRegistry, &registry);

        env.events().publish(
            (Symbol::new(env, "contract_initialized"),),
            (admin.clone(), env.ledger().timestamp()),
        );

        Ok(())
    }

    /// Verify the caller is the admin
    pub fn verify_admin(env: &Env) -> Result<(), Error> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)?;

        admin.require_auth();

        Ok(())
    }

    /// Rotate the admin address
    pub fn update_admin(env: &Env, new_admin: &Address) -> Result<(), Error> {
        Self::verify_admin(env)?;

        env.storage().instance().set(&DataKey::Admin, new_admin);

        Ok(())
    }

    pub fn get_admin(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(Error::NotInitialized)
    }

    /// Register a user directory record. Partner creation reads this for the
    /// partner's name and email and fails without it.
    pub fn register_user(env: &Env, user: &Address, name: String, email: String) -> Result<(), Error> {
        Self::verify_admin(env)?;

        let profile = UserProfile { name, email };
        env.storage()
            .persistent()
            .set(&DataKey::UserProfile(user.clone()), &profile);

        Ok(())
    }

    pub fn get_user_profile(env: &Env, user: &Address) -> Result<UserProfile, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::UserProfile(user.clone()))
            .ok_or(Error::UserNotFound)
    }
}
