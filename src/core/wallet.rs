use std::collections::VecDeque;

use crate::config::EconomyConfig;
use crate::core::rewards::{RewardChannel, Subscription};
use crate::error::EconomyError;
use crate::traits::KeyValueStore;

/// Coin balance kept in an injected key-value store
#[derive(Debug)]
pub struct CoinWallet<S> {
    store: S,
    key: String,
    starting_coins: i64,
    amount_to_grant: i64,
    subscription: Option<Subscription>,
    /// Rewards received but not yet persisted
    pending: VecDeque<i64>,
}

impl<S: KeyValueStore> CoinWallet<S> {
    pub fn new(store: S, config: &EconomyConfig) -> Self {
        Self {
            store,
            key: config.coin_key.clone(),
            starting_coins: config.starting_coins,
            amount_to_grant: config.amount_to_grant,
            subscription: None,
            pending: VecDeque::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Current balance, zero when nothing was stored yet
    pub fn balance(&self) -> i64 {
        self.store.get(&self.key, 0)
    }

    /// Write the starting balance unless one is already stored
    pub fn ensure_initialized(&mut self) -> Result<i64, EconomyError> {
        if !self.store.contains(&self.key) {
            self.store.set(&self.key, self.starting_coins);
            self.store.flush()?;
        }
        Ok(self.balance())
    }

    /// Store `balance` and flush. A failed flush puts the previous balance back.
    fn commit(&mut self, balance: i64) -> Result<(), EconomyError> {
        let previous = self.balance();
        self.store.set(&self.key, balance);
        if let Err(err) = self.store.flush() {
            log::warn!("Failed to persist balance {}: {}", balance, err);
            self.store.set(&self.key, previous);
            return Err(err.into());
        }
        Ok(())
    }

    /// Add coins and persist, returns the new balance
    pub fn grant(&mut self, amount: i64) -> Result<i64, EconomyError> {
        let balance = self.balance() + amount;
        self.commit(balance)?;
        log::info!("Granted {} coins, new balance: {}", amount, balance);
        Ok(balance)
    }

    /// Grant the configured default amount
    pub fn grant_default(&mut self) -> Result<i64, EconomyError> {
        self.grant(self.amount_to_grant)
    }

    /// Spend `cost` coins if the balance covers it, returns the new balance
    pub fn try_spend(&mut self, cost: i64) -> Result<i64, EconomyError> {
        let available = self.balance();
        if available < cost {
            log::info!("Not enough coins: need {}, have {}", cost, available);
            return Err(EconomyError::InsufficientCoins {
                needed: cost,
                available,
            });
        }
        let balance = available - cost;
        self.commit(balance)?;
        Ok(balance)
    }

    /// Put the balance back to the starting amount
    pub fn reset(&mut self) -> Result<i64, EconomyError> {
        self.commit(self.starting_coins)?;
        log::info!("Coins reset to {}", self.starting_coins);
        Ok(self.starting_coins)
    }

    /// Start receiving rewards from `channel`
    pub fn enable(&mut self, channel: &mut RewardChannel) {
        if self.subscription.is_none() {
            self.subscription = Some(channel.subscribe());
        }
    }

    /// Stop receiving rewards. Rewards not yet pumped out of the channel are
    /// dropped, ones held back by a failed flush are kept.
    pub fn disable(&mut self, channel: &mut RewardChannel) {
        if let Some(subscription) = self.subscription.take() {
            channel.unsubscribe(subscription.id);
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.subscription.is_some()
    }

    /// Rewards waiting for a successful flush
    pub fn pending_rewards(&self) -> usize {
        self.pending.len()
    }

    /// Apply every pending reward as a grant, returns the balance afterwards.
    /// On a store error the failing reward and everything after it stay
    /// queued for the next pump.
    pub fn pump_rewards(&mut self) -> Result<i64, EconomyError> {
        if let Some(subscription) = &self.subscription {
            self.pending.extend(subscription.drain());
        }
        while let Some(&amount) = self.pending.front() {
            self.grant(amount)?;
            self.pending.pop_front();
        }
        Ok(self.balance())
    }
}

/// Text label that only re-renders when the balance changes
#[derive(Debug, Clone)]
pub struct BalanceLabel {
    prefix: String,
    displayed: Option<i64>,
    text: String,
}

impl BalanceLabel {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            displayed: None,
            text: String::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// New text when `balance` differs from the displayed one, otherwise None
    pub fn refresh(&mut self, balance: i64) -> Option<&str> {
        if self.displayed == Some(balance) {
            return None;
        }
        self.displayed = Some(balance);
        self.text = format!("{}{}", self.prefix, balance);
        Some(self.text.as_str())
    }
}
