//! Task progress updates, driven by external event producers (review posted,
//! friend referred, share performed). Single-aggregate writes, deliberately
//! not coupled to the wallet; the wallet only moves on claim.

use crate::admin::AdminModule;
use crate::partner::PartnerManager;
use crate::types::{Error, Partner, TaskType};
use soroban_sdk::{symbol_short, Address, Env};

pub struct TaskManager;

impl TaskManager {
    /// Set or increment progress on the task of the given type. A supplied
    /// value replaces the current progress (producers report absolute
    /// counts); no value means a single increment, the share-action hook.
    /// Crossing the target marks the task completed.
    pub fn update_task_progress(
        env: &Env,
        user: &Address,
        task_type: TaskType,
        progress: Option<u32>,
    ) -> Result<Partner, Error> {
        AdminModule::verify_admin(env)?;

        let mut partner = PartnerManager::get_partner(env, user)?;
        let now = env.ledger().timestamp();

        let mut index = None;
        for i in 0..partner.tasks.len() {
            if partner.tasks.get_unchecked(i).task_type == task_type {
                index = Some(i);
                break;
            }
        }
        let index = index.ok_or(Error::TaskNotFound)?;
        let mut task = partner.tasks.get_unchecked(index);

        let current = match progress {
            Some(value) => value,
            None => task.progress.current + 1,
        };
        task.progress.current = current.min(task.progress.target);

        if task.progress.current >= task.progress.target && !task.completed {
            task.completed = true;
            task.completed_at = Some(now);
        }

        partner.tasks.set(index, task.clone());
        partner.last_activity = now;
        PartnerManager::save_partner(env, &partner);

        env.events().publish(
            (symbol_short!("task_prg"), user.clone()),
            (task.title, task.progress.current, task.completed),
        );

        Ok(partner)
    }
}
